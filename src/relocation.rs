//! Relocation of the produced output file.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use error::Result;
use error::ResultExt;
use utils::parent_dir;

/// What happened to the produced output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Relocation {
    /// The produced file was copied to the requested output file.
    Copied(PathBuf),
    /// The produced file already is the requested output file.
    InPlace(PathBuf),
    /// No file was produced.
    Missing(PathBuf),
}

impl Relocation {
    /// Does the requested output file exist?
    pub fn output_exists(&self) -> bool {
        match *self {
            Relocation::Copied(_) | Relocation::InPlace(_) => true,
            Relocation::Missing(_) => false,
        }
    }
}

/// Copies the file produced by the plugin to the requested output file.
///
/// Nothing is copied when the produced file does not exist or when it is
/// the requested output file.
pub fn relocate(produced: &Path, requested: &Path) -> Result<Relocation> {
    if !produced.exists() {
        debug!("{} was not produced", produced.display());
        return Ok(Relocation::Missing(produced.to_path_buf()));
    }
    if is_same_file(produced, requested) {
        return Ok(Relocation::InPlace(requested.to_path_buf()));
    }

    info!("copying {} to {}", produced.display(), requested.display());
    fs::copy(produced, requested)
        .chain_err(|| format!(
            "failed to copy {} to {}", produced.display(), requested.display()
        ))?;
    Ok(Relocation::Copied(requested.to_path_buf()))
}

/// Are the two paths the same file, however they are spelled?
///
/// The requested file may not exist yet, so only its directory is
/// canonicalized.
fn is_same_file(produced: &Path, requested: &Path) -> bool {
    let requested_name = match requested.file_name() {
        Some(name) => name,
        None => return false,
    };
    match (fs::canonicalize(produced), fs::canonicalize(parent_dir(requested))) {
        (Ok(produced), Ok(requested_dir)) => produced == requested_dir.join(requested_name),
        _ => produced == requested,
    }
}
