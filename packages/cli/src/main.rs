mod commands;
mod config;
mod store;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    generate, info, list, new, validate, GenerateArgs, InfoArgs, ListArgs, NewArgs, ValidateArgs,
};
use tracing::Level;

/// Blockcraft CLI - build pages from blocks, export markup and styles
#[derive(Parser, Debug)]
#[command(name = "blockcraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new project in the project store
    New(NewArgs),

    /// Check that a project file can be loaded
    Validate(ValidateArgs),

    /// Generate markup and stylesheet for a project
    Generate(GenerateArgs),

    /// Show a summary of a project and its block tree
    Info(InfoArgs),

    /// List projects in the project store
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::New(args) => new(args, &cwd),
                Command::Validate(args) => validate(args, &cwd),
                Command::Generate(args) => generate(args, &cwd),
                Command::Info(args) => info(args, &cwd),
                Command::List(args) => list(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
