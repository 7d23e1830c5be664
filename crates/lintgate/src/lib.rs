//! Strict clippy gate.
//!
//! Runs `cargo clippy` over the whole workspace with a fixed, strict flag set
//! and forwards the child's exit status. Used as a pre-push hook and by hand.
//!
//! Layout
//! - `profile`: the fixed tool name and argument list.
//! - `invocation`: the immutable argument vector built from `profile`.
//! - `runner`: spawn, wait, and map the child's termination status.
//! - `error`: launch failures (the tool could not be started at all).

pub mod error;
pub mod invocation;
pub mod profile;
pub mod runner;

pub use error::{GateError, LaunchError};
pub use invocation::Invocation;
pub use runner::{announce_and_run, run, ToolExit};
