//! Immutable argument vector for one tool run.

use std::fmt;
use std::process::{Command, Stdio};

use crate::profile::{ARGS, TOOL};

/// Program plus ordered arguments. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The gate's fixed clippy invocation.
    pub fn strict() -> Self {
        Self::new(TOOL, ARGS.iter().map(|a| a.to_string()).collect())
    }

    /// Same arguments, different executable.
    pub fn with_program(self, program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: self.args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by its arguments.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// Space-joined argv, for operators reading logs.
    pub fn render(&self) -> String {
        self.argv().join(" ")
    }

    /// The single line printed before the tool starts.
    pub fn announce_line(&self) -> String {
        format!("Running: {}", self.render())
    }

    /// Child process with inherited stdin/stdout/stderr.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
