//! Settings of the IDA toolset.

use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;

use utils::executable_name;
use utils::shared_library_suffix;

/// Name of the environment variable holding the default IDA directory.
pub const IDA_DIR_ENV_VAR: &'static str = "IDA_DIR";

/// Settings of the IDA toolset.
///
/// The IDA directory is resolved in the following order: the directory
/// passed to `with_ida_dir()`, the value of the `IDA_DIR` environment
/// variable, nothing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use retdec_ida::settings::Settings;
///
/// let s = Settings::new()
///     .with_ida_dir("/opt/ida")
///     .with_ea64(true);
///
/// assert_eq!(s.ida_dir(), Some(Path::new("/opt/ida")));
/// assert!(s.ea64());
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    ida_dir: Option<PathBuf>,
    ea64: bool,
}

impl Settings {
    /// Creates new settings.
    ///
    /// If the `IDA_DIR` environment variable is set, its value is used as
    /// the default IDA directory. The 32-bit toolset is used by default.
    pub fn new() -> Self {
        Self::from_env_value(env::var_os(IDA_DIR_ENV_VAR))
    }

    /// Creates settings whose default IDA directory is the given value of
    /// the `IDA_DIR` environment variable (`None` when unset).
    pub fn from_env_value(ida_dir: Option<OsString>) -> Self {
        Settings {
            ida_dir: ida_dir
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            ea64: false,
        }
    }

    /// Sets the IDA directory when used as a builder.
    ///
    /// It overrides the value of the `IDA_DIR` environment variable.
    pub fn with_ida_dir<P: Into<PathBuf>>(mut self, new_ida_dir: P) -> Self {
        self.set_ida_dir(new_ida_dir);
        self
    }

    /// Selects the 64-bit variant of the toolset when used as a builder.
    pub fn with_ea64(mut self, ea64: bool) -> Self {
        self.set_ea64(ea64);
        self
    }

    /// Sets the IDA directory.
    pub fn set_ida_dir<P: Into<PathBuf>>(&mut self, new_ida_dir: P) {
        self.ida_dir = Some(new_ida_dir.into());
    }

    /// Selects the 64-bit (`true`) or 32-bit (`false`) variant of the
    /// toolset.
    pub fn set_ea64(&mut self, ea64: bool) {
        self.ea64 = ea64;
    }

    /// Returns the IDA directory.
    ///
    /// If it was neither set nor given in the environment, it returns `None`.
    pub fn ida_dir(&self) -> Option<&Path> {
        self.ida_dir.as_ref().map(PathBuf::as_path)
    }

    /// Is the 64-bit variant of the toolset used?
    pub fn ea64(&self) -> bool {
        self.ea64
    }

    /// Returns the name of IDA's console application (`idat`, `idat64`, with
    /// `.exe` on Windows).
    pub fn idat_name(&self) -> String {
        executable_name(if self.ea64 { "idat64" } else { "idat" })
    }

    /// Returns the path to IDA's console application, if the IDA directory
    /// is known.
    pub fn idat_path(&self) -> Option<PathBuf> {
        self.ida_dir().map(|dir| dir.join(self.idat_name()))
    }

    /// Returns the name of the RetDec plugin library (`retdec.so`,
    /// `retdec64.dll`, etc.).
    pub fn plugin_name(&self) -> String {
        let base = if self.ea64 { "retdec64" } else { "retdec" };
        format!("{}{}", base, shared_library_suffix())
    }

    /// Returns the path to the RetDec plugin library, if the IDA directory
    /// is known.
    pub fn plugin_path(&self) -> Option<PathBuf> {
        self.ida_dir()
            .map(|dir| dir.join("plugins").join(self.plugin_name()))
    }
}
