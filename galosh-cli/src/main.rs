//! Binary crate for the `galosh` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Printing advice and choosing the exit code

use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(cmd.log_level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    cmd.run().await
}
