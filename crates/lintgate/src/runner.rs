//! Spawn the tool, wait, and relay its status.
//!
//! One synchronous pass: no retries, no timeout. Standard streams are
//! inherited, so the tool writes straight to the caller's terminal or pipe.

use std::io::Write;
use std::process::ExitStatus;

use crate::error::{GateError, LaunchError};
use crate::invocation::Invocation;

/// The tool's termination status as a single exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolExit {
    code: i32,
}

impl ToolExit {
    /// A normal exit keeps its code. Death by signal N becomes `-N` truncated
    /// to a byte (`256 - N`, so SIGKILL gives 247).
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self { code };
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                tracing::debug!(signal, "tool terminated by signal");
                return Self {
                    code: -signal & 0xFF,
                };
            }
        }
        Self { code: 1 }
    }

    pub fn code(self) -> i32 {
        self.code
    }

    pub fn success(self) -> bool {
        self.code == 0
    }
}

/// Run the invocation to completion.
pub fn run(invocation: &Invocation) -> Result<ToolExit, LaunchError> {
    tracing::debug!(argv = ?invocation.argv(), "spawning tool");
    let status = invocation
        .command()
        .status()
        .map_err(|source| LaunchError {
            program: invocation.program().to_string(),
            source,
        })?;
    let exit = ToolExit::from_status(status);
    tracing::debug!(code = exit.code(), "tool exited");
    Ok(exit)
}

/// Write the announce line to `out`, flush it, then run.
pub fn announce_and_run<W: Write>(
    invocation: &Invocation,
    mut out: W,
) -> Result<ToolExit, GateError> {
    writeln!(out, "{}", invocation.announce_line()).map_err(GateError::Announce)?;
    out.flush().map_err(GateError::Announce)?;
    Ok(run(invocation)?)
}
