//! Decompilation of files via the RetDec IDA plugin.

use command::IdaCommand;
use decompilation::DecompilationArguments;
use error::ErrorKind;
use error::Result;
use invocation::Invocation;
use relocation::Relocation;
use relocation::relocate;
use runner::ChildStatus;
use runner::ProcessToolRunner;
use runner::ToolRunner;
use settings::Settings;
use staging::StagedInvocation;
use staging::stage;

/// A decompilation whose inputs are validated and staged and which is ready
/// to be run.
#[derive(Clone, Debug)]
pub struct PreparedDecompilation {
    invocation: StagedInvocation,
    command: IdaCommand,
}

impl PreparedDecompilation {
    /// Returns the staged invocation.
    pub fn invocation(&self) -> &StagedInvocation {
        &self.invocation
    }

    /// Returns the command that will be run.
    pub fn command(&self) -> &IdaCommand {
        &self.command
    }
}

/// Result of a finished decompilation.
#[derive(Clone, Debug, PartialEq)]
pub struct DecompilationOutcome {
    status: ChildStatus,
    relocation: Relocation,
}

impl DecompilationOutcome {
    /// Returns how IDA finished.
    pub fn status(&self) -> ChildStatus {
        self.status
    }

    /// Returns what happened to the produced output file.
    pub fn relocation(&self) -> &Relocation {
        &self.relocation
    }

    /// Returns the exit code to be forwarded (IDA's own exit code).
    pub fn exit_code(&self) -> i32 {
        self.status.code()
    }
}

/// Decompiler running IDA with the RetDec plugin.
///
/// # Examples
///
/// ```no_run
/// use retdec_ida::decompilation::DecompilationArguments;
/// use retdec_ida::decompiler::Decompiler;
/// use retdec_ida::settings::Settings;
///
/// let settings = Settings::new()
///     .with_ida_dir("/opt/ida");
/// let decompiler = Decompiler::new(settings);
/// let args = DecompilationArguments::new()
///     .with_input_file("file.exe")
///     .with_output_file("out/file.c");
/// let outcome = decompiler.decompile(&args).unwrap();
/// std::process::exit(outcome.exit_code());
/// ```
pub struct Decompiler {
    settings: Settings,
    runner: Box<dyn ToolRunner>,
}

impl Decompiler {
    /// Creates a new decompiler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Decompiler {
            settings: settings,
            runner: Box::new(ProcessToolRunner::new()),
        }
    }

    /// Validates the arguments, stages the input files into the output
    /// directory, and builds the command to be run.
    ///
    /// When validation fails, nothing is copied.
    pub fn prepare(&self, args: &DecompilationArguments) -> Result<PreparedDecompilation> {
        let invocation = Invocation::prepare(&self.settings, args)?;
        let invocation = stage(&invocation)?;
        let command = IdaCommand::new(&invocation);
        Ok(PreparedDecompilation {
            invocation: invocation,
            command: command,
        })
    }

    /// Runs the prepared decompilation, waits until it finishes, and copies
    /// the produced file to the requested output file.
    ///
    /// When IDA exits with a nonzero code (including the timeout code), it
    /// returns the outcome carrying that code. When IDA succeeds but the
    /// plugin produced nothing, it returns `ErrorKind::OutputMissing`.
    pub fn run(&self, prepared: &PreparedDecompilation) -> Result<DecompilationOutcome> {
        info!("running {}", prepared.command);
        let status = self.runner.run(&prepared.command)?;
        if status == ChildStatus::TimedOut {
            warn!("IDA was killed because of a timeout");
        }

        let produced = prepared.invocation.produced_file();
        let relocation = relocate(&produced, prepared.invocation.output_file())?;
        if !relocation.output_exists() && status.succeeded() {
            bail!(ErrorKind::OutputMissing(produced));
        }
        if relocation.output_exists() && !status.succeeded() {
            warn!("IDA exited with {} but produced {}", status.code(), produced.display());
        }

        Ok(DecompilationOutcome {
            status: status,
            relocation: relocation,
        })
    }

    /// Prepares and runs a decompilation with the given arguments.
    pub fn decompile(&self, args: &DecompilationArguments) -> Result<DecompilationOutcome> {
        let prepared = self.prepare(args)?;
        self.run(&prepared)
    }

    #[cfg(test)]
    fn with_runner(settings: Settings, runner: Box<dyn ToolRunner>) -> Self {
        Decompiler { settings: settings, runner: runner }
    }
}
