//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - clone: Clone command arguments
//! - cache: Cache command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod cache;
pub mod clone;
pub mod completions;

pub use cache::{CacheArgs, CacheSubcommand};
pub use clone::CloneArgs;
pub use completions::CompletionsArgs;

/// appseed - sample application scaffolding
///
/// Create files and directory structure for a new application from a sample application.
#[derive(Parser, Debug)]
#[command(
    name = "appseed",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Create application directories from sample applications",
    long_about = "appseed creates files and directory structure for a new application \
                  from a sample application. Sample applications are downloaded from \
                  https://github.com/vespa-engine/sample-apps and cached locally for \
                  seven days; the cache directory can be overridden with the \
                  APPSEED_CACHE_DIR environment variable.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appseed clone vespa-cloud/album-recommendation my-app\n   \
                  appseed clone -f news/app-1-getting-started my-app  \x1b[90m# Ignore the cache\x1b[0m\n   \
                  appseed clone --list                        \x1b[90m# List sample applications\x1b[0m\n   \
                  appseed cache                               \x1b[90m# Show cache statistics\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new application directory from a sample application
    Clone(CloneArgs),

    /// Manage the sample apps archive cache
    #[command(name = "cache")]
    Cache(CacheArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
