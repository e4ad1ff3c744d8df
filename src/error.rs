//! Error handling.

use std::io::Write;
use std::path::PathBuf;

error_chain!{
    foreign_links {
        Clap(::clap::Error);
        Io(::std::io::Error);
    }

    errors {
        /// Arguments that were parsed but make no sense.
        Usage(msg: String) {
            description("invalid usage")
            display("{}", msg)
        }

        /// A check that has to pass before anything is copied or run.
        Precondition(msg: String) {
            description("precondition failed")
            display("{}", msg)
        }

        /// The toolset exited successfully but produced no output file.
        OutputMissing(path: PathBuf) {
            description("output file was not produced")
            display("the plugin did not produce the output file: {}", path.display())
        }
    }
}

/// Prints the given error to the given stream.
///
/// # Panics
///
/// Panics if the error cannot be written into the stream.
pub fn print_error(err: &Error, stream: &mut dyn Write) {
    let write_err_msg = "error writing to the given stream";

    writeln!(stream, "error: {}", err).expect(write_err_msg);

    for cause in err.iter().skip(1) {
        writeln!(stream, "  caused by: {}", cause).expect(write_err_msg);
    }

    // Run the program with `RUST_BACKTRACE=1` to show the backtrace.
    if let Some(backtrace) = err.backtrace() {
        writeln!(stream, "{:?}", backtrace).expect(write_err_msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_error_prints_error_to_given_stream() {
        let err = Error::from_kind(ErrorKind::Msg("invalid address".to_string()));
        let mut stream = Vec::new();

        print_error(&err, &mut stream);

        // A backtrace follows when RUST_BACKTRACE is set.
        assert!(String::from_utf8_lossy(&stream).starts_with("error: invalid address\n"));
    }

    #[test]
    fn print_error_includes_cause_when_present() {
        let err = Error::with_chain(
            Error::from_kind(ErrorKind::Msg("permission denied".to_string())),
            ErrorKind::Msg("failed to copy file.exe".to_string())
        );
        let mut stream = Vec::new();

        print_error(&err, &mut stream);

        assert!(String::from_utf8_lossy(&stream).starts_with(
            "error: failed to copy file.exe\n  caused by: permission denied\n"
        ));
    }

    #[test]
    fn precondition_error_displays_only_its_message() {
        let err = Error::from_kind(
            ErrorKind::Precondition("specified input file does not exist: a.exe".to_string())
        );

        assert_eq!(err.to_string(), "specified input file does not exist: a.exe");
    }

    #[test]
    fn output_missing_error_names_missing_file() {
        let err = Error::from_kind(ErrorKind::OutputMissing(PathBuf::from("out/a.exe.c")));

        assert_eq!(
            err.to_string(),
            "the plugin did not produce the output file: out/a.exe.c"
        );
    }
}
