//! exmail-dbcheck - diagnostic CLI for the ExchangeMail SQLite database.
//!
//! Direct read-only SQLite queries against exchangemail.db: dump the most
//! recent UserMessages rows, or show the latest server log entry.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod db;

/// Diagnostic CLI for the ExchangeMail SQLite database.
#[derive(Parser, Debug)]
#[command(name = "exmail-dbcheck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the mail database (defaults to the server data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump the most recent UserMessages rows
    Messages {
        /// Max rows to print (1-500)
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=500))]
        limit: u32,
    },

    /// Show the most recent server log entry
    Log,
}


fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let db = cli.db.as_deref();

    let result = match cli.command {
        Some(Command::Messages { limit }) => commands::check::messages(db, limit, cli.json),
        Some(Command::Log) => commands::check::latest_log(db, cli.json),
        // Bare invocation: the historical ten-row message dump.
        None => commands::check::messages(db, 10, cli.json),
    };

    // Diagnostic contract: report the failure and exit clean, so scripted
    // callers never trip on a missing or locked database.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::SUCCESS
        }
    }
}
