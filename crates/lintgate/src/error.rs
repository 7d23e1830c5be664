//! Launch failures.
//!
//! A tool that ran and exited non-zero is not an error here; it is a
//! `ToolExit` with a non-zero code.

use std::io;

use thiserror::Error;

/// The tool could not be started (not on PATH, not executable, ...).
#[derive(Debug, Error)]
#[error("failed to launch `{program}`")]
pub struct LaunchError {
    pub program: String,
    #[source]
    pub source: io::Error,
}

/// Anything that stops the gate before the tool's status is known.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("failed to write command line")]
    Announce(#[source] io::Error),
    #[error(transparent)]
    Launch(#[from] LaunchError),
}
