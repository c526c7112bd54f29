//! Process execution

use std::io;
use std::process::{Command, Stdio};

/// Outcome of one dialog process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Exit code, or -1 when the process was killed by a signal
    pub exit_code: i32,
    /// Combined stdout and stderr text
    pub output: String,
}

impl Invocation {
    pub fn new(exit_code: i32, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a complete shell command line and captures its result
pub trait Executor {
    fn run(&self, command_line: &str) -> io::Result<Invocation>;
}

/// Executes command lines with `sh -c`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl Executor for ShellExecutor {
    fn run(&self, command_line: &str) -> io::Result<Invocation> {
        let output = Command::new("sh")
            .args(["-c", command_line])
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()?;

        Ok(Invocation {
            exit_code: output.status.code().unwrap_or(-1),
            output: normalize_output(&String::from_utf8_lossy(&output.stdout)),
        })
    }
}

/// Split captured text into lines, drop trailing whitespace from each and
/// join them back with `\n`
pub fn normalize_output(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
