//! Common functionality for integration tests.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use tempdir::TempDir;

/// A fake `idat` that logs its arguments into `args.log` next to itself,
/// writes `<input>.c` for the input quoted in its `-S` argument, and exits
/// with `$FAKE_IDA_EXIT`.
const FAKE_IDAT: &'static str = r#"#!/bin/sh
log="$(dirname "$0")/args.log"
: > "$log"
for arg in "$@"; do
    case "$arg" in
        -S*) input="$(printf '%s' "$arg" | sed 's/^[^"]*"\(.*\)".*$/\1/')" ;;
    esac
    printf '%s\n' "$arg" >> "$log"
done
if [ -z "$FAKE_IDA_NO_OUTPUT" ]; then
    printf 'int main() { return 0; }\n' > "$input.c"
fi
exit "${FAKE_IDA_EXIT:-0}"
"#;

pub const FAKE_OUTPUT: &'static str = "int main() { return 0; }\n";

pub fn run_tool(args: &[&str], envs: &[(&str, &str)]) -> Output {
    tool_command(args, envs)
        .output()
        .expect("failed to execute the command")
}

pub fn run_tool_in(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    tool_command(args, envs)
        .current_dir(dir)
        .output()
        .expect("failed to execute the command")
}

fn tool_command(args: &[&str], envs: &[(&str, &str)]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_run-decompile"));
    cmd.args(args).env_remove("IDA_DIR");
    for &(name, value) in envs {
        cmd.env(name, value);
    }
    cmd
}

/// A scratch directory with a fake IDA installation.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new("retdec-ida-it")
            .expect("failed to create a temporary directory");
        let sandbox = Sandbox { dir: dir };
        sandbox.create_dir("ida");
        sandbox.create_fake_idat("ida/idat");
        sandbox.create_fake_idat("ida/idat64");
        sandbox
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn arg(&self, rel: &str) -> String {
        path_to_string(&self.path(rel))
    }

    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("failed to create a directory");
        path
    }

    pub fn create_file(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.path(rel);
        fs::write(&path, content).expect("failed to create a file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .expect(&format!("failed to read {}", rel))
    }

    /// Returns the arguments with which the fake `idat` was run, if it was.
    pub fn idat_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.path("ida/args.log"))
            .ok()
            .map(|log| log.lines().map(str::to_string).collect())
    }

    pub fn entries(&self, rel: &str) -> Vec<String> {
        let mut entries: Vec<String> = fs::read_dir(self.path(rel))
            .expect("failed to read a directory")
            .map(|e| e.expect("failed to read a directory entry"))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        entries
    }

    fn create_fake_idat(&self, rel: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.create_file(rel, FAKE_IDAT.as_bytes());
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to make the fake idat executable");
    }
}

pub fn path_to_string(path: &Path) -> String {
    path.to_str()
        .expect("failed to convert the path into a string")
        .to_string()
}
