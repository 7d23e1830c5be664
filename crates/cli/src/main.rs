use anyhow::Result;
use clap::Parser;
use lintgate::{announce_and_run, Invocation};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Run cargo clippy on the workspace with strict settings.
///
/// Lints every package, feature and target into a separate target
/// directory, denying warnings. Exits with clippy's own status.
#[derive(Parser)]
#[command(name = "run-clippy", version)]
struct Cmd {}

fn main() -> Result<ExitCode> {
    // stdout carries only the command line; diagnostics go to stderr.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();
    let _cmd = Cmd::parse();

    let invocation = Invocation::strict();
    let exit = announce_and_run(&invocation, std::io::stdout())?;
    match u8::try_from(exit.code()) {
        Ok(code) => Ok(ExitCode::from(code)),
        // Windows codes above 255 don't fit ExitCode; exit with them as-is.
        Err(_) => std::process::exit(exit.code()),
    }
}
