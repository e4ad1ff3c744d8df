//! Construction of IDA command lines.

use std::ffi::OsStr;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use decompilation::DecompilationMode;
use staging::StagedInvocation;

/// IDC script that decompiles the entire input file.
pub const SCRIPT_FULL: &'static str = "retdec-decompile-full.idc";

/// IDC script that decompiles only the function containing an address.
pub const SCRIPT_SELECTIVE: &'static str = "retdec-decompile-selective.idc";

/// A command that runs IDA's console application.
///
/// The arguments are passed to the process directly, without a shell.
#[derive(Clone, Debug, PartialEq)]
pub struct IdaCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl IdaCommand {
    /// Builds the command for the given staged invocation:
    ///
    /// ```text
    /// idat -A -S<script> "<input>" [<address>] <ida-input>
    /// ```
    ///
    /// IDA splits the `-S` argument by itself, so the input path is quoted
    /// inside it. Paths containing a double quote are rejected earlier, by
    /// `Invocation::prepare()`.
    pub fn new(inv: &StagedInvocation) -> IdaCommand {
        let input_file = inv.input_file();
        let mut script_arg = OsString::from("-S");
        match *inv.mode() {
            DecompilationMode::Full => {
                script_arg.push(SCRIPT_FULL);
                push_quoted(&mut script_arg, input_file);
            }
            DecompilationMode::Selective(ref addr) => {
                script_arg.push(SCRIPT_SELECTIVE);
                push_quoted(&mut script_arg, input_file);
                script_arg.push(" ");
                script_arg.push(addr.as_str());
            }
        }

        IdaCommand {
            program: inv.idat_path().to_path_buf(),
            args: vec![
                // Batch mode: no dialogs, exit when the script finishes.
                OsString::from("-A"),
                script_arg,
                inv.ida_input().as_os_str().to_os_string(),
            ],
        }
    }

    /// Returns the program to be run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the arguments of the program.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Returns the script argument (`-S...`).
    pub fn script_arg(&self) -> &OsStr {
        &self.args[1]
    }
}

fn push_quoted(arg: &mut OsString, path: &Path) {
    arg.push(" \"");
    arg.push(path.as_os_str());
    arg.push("\"");
}

impl fmt::Display for IdaCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use address::Address;
    use invocation::Invocation;
    use invocation::tests::Workspace;
    use staging::stage;

    fn staged(ws: &Workspace, mode: DecompilationMode) -> StagedInvocation {
        let inv = Invocation::prepare(&ws.settings(), &ws.args().with_mode(mode))
            .expect("expected prepare() to succeed");
        stage(&inv).expect("expected stage() to succeed")
    }

    #[test]
    fn ida_command_uses_full_script_without_selected_address() {
        let ws = Workspace::new();
        let inv = staged(&ws, DecompilationMode::Full);

        let cmd = IdaCommand::new(&inv);

        let input = ws.path("in/file.exe");
        assert_eq!(cmd.program(), inv.idat_path());
        assert_eq!(cmd.args(), &[
            OsString::from("-A"),
            OsString::from(format!("-S{} \"{}\"", SCRIPT_FULL, input.display())),
            input.clone().into_os_string(),
        ][..]);
    }

    #[test]
    fn ida_command_uses_selective_script_and_address_when_selected() {
        let ws = Workspace::new();
        let addr = Address::parse("0x1040").unwrap();
        let inv = staged(&ws, DecompilationMode::Selective(addr));

        let cmd = IdaCommand::new(&inv);

        let script_arg = cmd.script_arg().to_string_lossy().into_owned();
        assert!(script_arg.starts_with(&format!("-S{}", SCRIPT_SELECTIVE)));
        assert!(script_arg.contains(&ws.path("in/file.exe").display().to_string()));
        assert!(script_arg.ends_with("\" 0x1040"));
    }

    #[test]
    fn ida_command_passes_idb_file_as_last_argument() {
        let ws = Workspace::new();
        let idb = ws.create_file("in/file.idb", b"IDB");
        let inv = Invocation::prepare(&ws.settings(), &ws.args().with_idb_file(idb.clone()))
            .unwrap();
        let inv = stage(&inv).unwrap();

        let cmd = IdaCommand::new(&inv);

        assert_eq!(cmd.args().last(), Some(&idb.into_os_string()));
        assert!(cmd.script_arg().to_string_lossy().contains("file.exe"));
    }

    #[test]
    fn ida_command_display_joins_program_and_arguments() {
        let ws = Workspace::new();
        let inv = staged(&ws, DecompilationMode::Full);

        let cmd = IdaCommand::new(&inv);

        let shown = cmd.to_string();
        assert!(shown.starts_with(&inv.idat_path().display().to_string()));
        assert!(shown.contains(" -A -S"));
    }
}
