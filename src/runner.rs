//! Running of IDA's console application.

use std::process::Command;
use std::process::ExitStatus;

use command::IdaCommand;
use error::Result;
use error::ResultExt;

/// Exit code with which an external supervisor reports that it killed the
/// tool because of a timeout (`128 + SIGKILL`).
///
/// No timeout is enforced here. The code is only recognized and forwarded.
pub const TIMEOUT_EXIT_CODE: i32 = 137;

/// How the child process finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildStatus {
    /// The child exited with the given code.
    Exited(i32),
    /// The child was killed by a supervisor because of a timeout.
    TimedOut,
}

impl ChildStatus {
    /// Creates a status from an exit code.
    pub fn from_code(code: i32) -> Self {
        if code == TIMEOUT_EXIT_CODE {
            ChildStatus::TimedOut
        } else {
            ChildStatus::Exited(code)
        }
    }

    /// Creates a status from the exit status of a process.
    ///
    /// On Unix, a child terminated by a signal is reported like a shell does
    /// it, i.e. as `128 + signal`.
    pub fn from_exit_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::from_code(code),
            None => Self::from_code(Self::signal_code(status)),
        }
    }

    /// Returns the exit code to be forwarded.
    pub fn code(&self) -> i32 {
        match *self {
            ChildStatus::Exited(code) => code,
            ChildStatus::TimedOut => TIMEOUT_EXIT_CODE,
        }
    }

    /// Has the child succeeded?
    pub fn succeeded(&self) -> bool {
        *self == ChildStatus::Exited(0)
    }

    #[cfg(unix)]
    fn signal_code(status: ExitStatus) -> i32 {
        use std::os::unix::process::ExitStatusExt;

        status.signal().map_or(1, |signal| 128 + signal)
    }

    #[cfg(not(unix))]
    fn signal_code(_status: ExitStatus) -> i32 {
        1
    }
}

/// Runner of IDA commands.
pub trait ToolRunner {
    /// Runs the given command, waits until it finishes, and returns how it
    /// finished.
    ///
    /// The standard streams of the child are inherited.
    fn run(&self, cmd: &IdaCommand) -> Result<ChildStatus>;
}

/// Runner that spawns a real process.
#[derive(Clone, Debug, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    /// Creates a new runner.
    pub fn new() -> Self {
        ProcessToolRunner
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, cmd: &IdaCommand) -> Result<ChildStatus> {
        let status = Command::new(cmd.program())
            .args(cmd.args())
            .status()
            .chain_err(|| format!("failed to run {}", cmd.program().display()))?;
        debug!("{} finished with {}", cmd.program().display(), status);
        Ok(ChildStatus::from_exit_status(status))
    }
}
