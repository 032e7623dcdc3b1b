//! Cinescope CLI - Command-line interface
//!
//! Serves the web UI or runs searches straight from the terminal.

mod commands;

use cinescope_core::tracing_setup::{CliLogLevel, init_console_tracing, init_tracing};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cinescope")]
#[command(about = "Movie search and discovery")]
struct Cli {
    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info, global = true)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = cli.log_level.as_tracing_level();

    match cli.command {
        commands::Commands::Serve { .. } => {
            init_tracing(level, None)?;
        }
        _ => init_console_tracing(level),
    }

    commands::handle_command(cli.command).await
}
