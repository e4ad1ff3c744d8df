//! Staging of input files into the output directory.
//!
//! The plugin stores its output next to the file it was given, so the input
//! file (and the IDB file) have to be placed into the output directory before
//! IDA is run. Staged copies are not removed afterwards.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use decompilation::DecompilationMode;
use error::Result;
use error::ResultExt;
use invocation::Invocation;
use utils::parent_dir;
use utils::with_appended_extension;

/// An invocation whose files reside in the output directory.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedInvocation {
    idat_path: PathBuf,
    input_file: PathBuf,
    idb_file: Option<PathBuf>,
    output_file: PathBuf,
    mode: DecompilationMode,
    copied_files: Vec<PathBuf>,
}

impl StagedInvocation {
    /// Returns the path to IDA's console application.
    pub fn idat_path(&self) -> &Path {
        &self.idat_path
    }

    /// Returns the (possibly copied) input file.
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    /// Returns the (possibly copied) IDB file.
    pub fn idb_file(&self) -> Option<&Path> {
        self.idb_file.as_ref().map(PathBuf::as_path)
    }

    /// Returns the file that is passed to IDA to be opened: the IDB file when
    /// given, the input file otherwise.
    pub fn ida_input(&self) -> &Path {
        self.idb_file().unwrap_or(&self.input_file)
    }

    /// Returns the requested output file.
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Returns the file into which the plugin stores the decompiled code
    /// (`<input>.c`).
    pub fn produced_file(&self) -> PathBuf {
        with_appended_extension(&self.input_file, "c")
    }

    /// Returns the decompilation mode.
    pub fn mode(&self) -> &DecompilationMode {
        &self.mode
    }

    /// Returns the copies that were created during staging.
    pub fn copied_files(&self) -> &[PathBuf] {
        &self.copied_files
    }
}

/// Copies the input file and the IDB file into the output directory unless
/// they already reside there.
///
/// Directories are compared, not paths, so `dir/file.exe` and `dir/../dir/`
/// are considered the same place.
pub fn stage(inv: &Invocation) -> Result<StagedInvocation> {
    let output_dir = inv.output_dir();
    let mut copied_files = Vec::new();

    let mut input_file = inv.input_file().to_path_buf();
    if !is_same_dir(&parent_dir(&input_file), output_dir) {
        input_file = copy_into(&input_file, output_dir)?;
        copied_files.push(input_file.clone());
    } else {
        debug!("{} is already in the output directory", input_file.display());
    }

    let mut idb_file = inv.idb_file().map(Path::to_path_buf);
    if let Some(ref mut idb) = idb_file {
        if !is_same_dir(&parent_dir(idb), output_dir) {
            *idb = copy_into(idb, output_dir)?;
            copied_files.push(idb.clone());
        }
    }

    Ok(StagedInvocation {
        idat_path: inv.idat_path().to_path_buf(),
        input_file: input_file,
        idb_file: idb_file,
        output_file: inv.output_file().to_path_buf(),
        mode: inv.mode().clone(),
        copied_files: copied_files,
    })
}

/// Copies the given file into the given directory, keeping its name.
fn copy_into(file: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = file.file_name()
        .ok_or_else(|| format!("no file name in {}", file.display()))?;
    let dest = dir.join(file_name);
    debug!("staging {} into {}", file.display(), dir.display());
    fs::copy(file, &dest)
        .chain_err(|| format!("failed to copy {} into {}", file.display(), dir.display()))?;
    Ok(dest)
}

fn is_same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
