//! Validation of decompilation arguments before anything is run.

use std::path::Path;
use std::path::PathBuf;

use decompilation::DecompilationArguments;
use decompilation::DecompilationMode;
use error::ErrorKind;
use error::Result;
use settings::Settings;
use utils::parent_dir;
use utils::with_appended_extension;

/// A validated decompilation request.
///
/// All paths it refers to existed at the time of validation. It cannot be
/// modified once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    idat_path: PathBuf,
    input_file: PathBuf,
    output_file: PathBuf,
    output_dir: PathBuf,
    idb_file: Option<PathBuf>,
    mode: DecompilationMode,
}

impl Invocation {
    /// Validates the given settings and arguments.
    ///
    /// The checks are performed in the following order and the first failing
    /// one is reported: the IDA directory is set and is a directory, IDA's
    /// console application exists, the IDB file (if any) exists, the input
    /// file exists, the output directory exists, neither the input file nor
    /// the output directory contains a double quote. Nothing is created or
    /// copied.
    pub fn prepare(settings: &Settings, args: &DecompilationArguments) -> Result<Invocation> {
        if let DecompilationMode::Selective(ref addr) = *args.mode() {
            if !settings.ea64() && !addr.fits_in_32_bits() {
                bail!(ErrorKind::Usage(format!(
                    "address {} does not fit into a 32-bit address space (use --ea64)",
                    addr
                )));
            }
        }

        let ida_dir = settings.ida_dir().ok_or_else(|| {
            precondition("path to IDA directory was not specified".to_string())
        })?;
        if !ida_dir.is_dir() {
            bail!(precondition(format!(
                "specified path to IDA directory is not a directory: {}",
                ida_dir.display()
            )));
        }
        debug!("using IDA directory {}", ida_dir.display());

        let idat_path = ida_dir.join(settings.idat_name());
        if !idat_path.exists() {
            bail!(precondition(format!(
                "IDA console application does not exist: {}",
                idat_path.display()
            )));
        }
        if let Some(plugin_path) = settings.plugin_path() {
            if !plugin_path.exists() {
                warn!("RetDec plugin not found at {}", plugin_path.display());
            }
        }

        if let Some(idb_file) = args.idb_file() {
            if !idb_file.exists() {
                bail!(precondition(format!(
                    "specified IDB file does not exist: {}",
                    idb_file.display()
                )));
            }
        }

        let input_file = args.input_file()
            .ok_or_else(|| precondition("no input file given".to_string()))?;
        if !input_file.exists() {
            bail!(precondition(format!(
                "specified input file does not exist: {}",
                input_file.display()
            )));
        }

        let output_file = match args.output_file() {
            Some(output_file) => output_file.to_path_buf(),
            None => with_appended_extension(input_file, "c"),
        };
        let output_dir = parent_dir(&output_file);
        if !output_dir.is_dir() {
            bail!(precondition(format!(
                "output directory does not exist: {}",
                output_dir.display()
            )));
        }
        // The staged input path ends up quoted inside IDA's -S argument.
        for path in &[input_file, output_dir.as_path()] {
            if path.to_string_lossy().contains('"') {
                bail!(precondition(format!(
                    "path cannot contain a double quote \
                     (IDA splits its -S argument by itself): {}",
                    path.display()
                )));
            }
        }
        debug!("output will be stored into {}", output_file.display());

        Ok(Invocation {
            idat_path: idat_path,
            input_file: input_file.to_path_buf(),
            output_file: output_file,
            output_dir: output_dir,
            idb_file: args.idb_file().map(Path::to_path_buf),
            mode: args.mode().clone(),
        })
    }

    /// Returns the path to IDA's console application.
    pub fn idat_path(&self) -> &Path {
        &self.idat_path
    }

    /// Returns the file to be decompiled.
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    /// Returns the file into which the decompiled code is stored.
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Returns the directory of the output file.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the IDA database file (if any).
    pub fn idb_file(&self) -> Option<&Path> {
        self.idb_file.as_ref().map(PathBuf::as_path)
    }

    /// Returns the decompilation mode.
    pub fn mode(&self) -> &DecompilationMode {
        &self.mode
    }
}

fn precondition(msg: String) -> ErrorKind {
    ErrorKind::Precondition(msg)
}
