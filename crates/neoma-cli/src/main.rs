//! Neoma CLI
//!
//! Command-line front end for the Neoma logging facade

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "neoma")]
#[command(about = "Neoma - structured logging facade", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit one log call through a configured logger
    Emit(commands::emit::EmitArgs),
    /// List level names with their severities
    Levels,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Levels => commands::levels::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
