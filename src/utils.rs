//! Internal utilities.

use std::path::Path;
use std::path::PathBuf;

/// Is the current platform Windows?
pub fn is_windows() -> bool {
    cfg!(target_os = "windows")
}

/// Returns the name of an executable for the current platform (e.g.
/// `"idat.exe"` on Windows).
pub fn executable_name(base: &str) -> String {
    if is_windows() {
        format!("{}.exe", base)
    } else {
        base.to_string()
    }
}

/// Returns the suffix of shared libraries on the current platform (e.g.
/// `".so"`).
pub fn shared_library_suffix() -> &'static str {
    if is_windows() {
        ".dll"
    } else if cfg!(target_os = "macos") {
        ".dylib"
    } else {
        ".so"
    }
}

/// Returns the directory in which the given file resides.
///
/// A bare file name (e.g. `file.exe`) resides in the current directory,
/// which is returned as `"."`.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Appends the given extension to the full path, keeping the existing one
/// (`file.exe` -> `file.exe.c`).
pub fn with_appended_extension(path: &Path, ext: &str) -> PathBuf {
    let mut path = path.as_os_str().to_os_string();
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}
