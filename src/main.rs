//! appseed - sample application scaffolding
//!
//! A command line tool that creates files and directory structure for a new
//! application from a sample application, downloading and caching the
//! sample-apps archive from GitHub.

use clap::Parser;
use miette::Diagnostic;

mod cache;
mod cli;
mod commands;
mod error;
mod fetch;
mod progress;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clone(args) => commands::clone::run(args, cli.verbose),
        Commands::Cache(args) => commands::clean_cache::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("Hint: {}", help);
        }
        std::process::exit(1);
    }
}
