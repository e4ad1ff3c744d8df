//! Arguments of a decompilation.

use std::path::Path;
use std::path::PathBuf;

use address::Address;

/// What should be decompiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecompilationMode {
    /// Decompile the entire input file.
    Full,
    /// Decompile only the function containing the given address.
    Selective(Address),
}

impl Default for DecompilationMode {
    fn default() -> Self {
        DecompilationMode::Full
    }
}

/// Arguments for a decompilation.
///
/// # Examples
///
/// ```
/// use retdec_ida::decompilation::DecompilationArguments;
/// use retdec_ida::decompilation::DecompilationMode;
///
/// let args = DecompilationArguments::new()
///     .with_input_file("file.exe")
///     .with_output_file("out/file.c")
///     .with_mode(DecompilationMode::Selective("0x1000".parse().unwrap()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DecompilationArguments {
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    idb_file: Option<PathBuf>,
    mode: DecompilationMode,
}

impl DecompilationArguments {
    /// Returns new arguments initialized to default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file to be decompiled.
    ///
    /// This parameter is required. Without it, there is nothing to decompile.
    pub fn with_input_file<P: Into<PathBuf>>(mut self, input_file: P) -> Self {
        self.input_file = Some(input_file.into());
        self
    }

    /// Sets the file into which the decompiled code is stored.
    ///
    /// When not set, `<input>.c` is used. All but the last component of the
    /// path have to exist.
    pub fn with_output_file<P: Into<PathBuf>>(mut self, output_file: P) -> Self {
        self.output_file = Some(output_file.into());
        self
    }

    /// Sets an IDA database file associated with the input file.
    pub fn with_idb_file<P: Into<PathBuf>>(mut self, idb_file: P) -> Self {
        self.idb_file = Some(idb_file.into());
        self
    }

    /// Sets the decompilation mode (full by default).
    pub fn with_mode(mut self, mode: DecompilationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the file to be decompiled.
    pub fn input_file(&self) -> Option<&Path> {
        self.input_file.as_ref().map(PathBuf::as_path)
    }

    /// Returns the requested output file (if any).
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_ref().map(PathBuf::as_path)
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
