//! Airlens CLI - viewport queries for the airport dashboard
//!
//! This binary stands in for the dashboard's rendering surface: it loads
//! an airport catalog, feeds viewports into the library, and prints the
//! visible list.

mod commands;
mod error;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "airlens",
    version = airlens::VERSION,
    about = "Query which airports fall inside a map viewport"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a one-shot viewport query against a catalog
    Query(commands::query::QueryArgs),
    /// Re-query as viewports stream in on stdin, reporting only changes
    Watch(commands::watch::WatchArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Query(args) => commands::query::run(args),
        Command::Watch(args) => commands::watch::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
