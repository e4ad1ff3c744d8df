//! Tools that use the library to decompile files.

macro_rules! generate_main_for_tool {
    ($main:expr) => {
        /// Implementation of the `main()` function for the tool.
        ///
        /// Runs the tool and terminates the process with the exit code the
        /// tool returned. If the tool fails, it prints the error to the
        /// standard error and the exit code will be 1. Malformed command
        /// lines are reported by `clap` itself.
        pub fn main() {
            match $main(&::std::env::args().collect()) {
                Ok(code) => ::std::process::exit(code),
                Err(ref e) => {
                    if let ::error::ErrorKind::Clap(ref clap_err) = *e.kind() {
                        clap_err.exit();
                    }
                    ::error::print_error(e, &mut ::std::io::stderr());
                    ::std::process::exit(1);
                }
            }
        }
    }
}

pub mod run_decompile;
