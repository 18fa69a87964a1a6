use std::io;
use std::process::{Command, Output};

use tracing::debug;

/// Trait for executing the GitHub CLI.
/// Enables dependency injection for testing without spawning real processes.
pub trait CommandRunner {
    fn run_gh(&self, args: &[&str]) -> io::Result<Output>;
}

/// Production implementation that executes the configured `gh` program.
#[derive(Debug, Clone)]
pub struct RealCommandRunner {
    program: String,
}

impl RealCommandRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandRunner for RealCommandRunner {
    fn run_gh(&self, args: &[&str]) -> io::Result<Output> {
        debug!(program = %self.program, command = ?args.first(), "running gh");
        Command::new(&self.program).args(args).output()
    }
}

/// Stdout followed by stderr, lossily decoded.
/// Used as the diagnostic payload when a `gh` call fails.
pub fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}
