use std::path::PathBuf;

use clap::Parser;

/// Arguments for the clone command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Clone a sample application:\n    appseed clone vespa-cloud/album-recommendation my-app\n\n\
                  List available sample applications:\n    appseed clone --list\n\n\
                  Ignore the cache and download the latest archive:\n    appseed clone -f vespa-cloud/album-recommendation my-app")]
pub struct CloneArgs {
    /// Sample application to clone (e.g. vespa-cloud/album-recommendation)
    #[arg(required_unless_present = "list")]
    pub application: Option<String>,

    /// Directory to create (must not already exist)
    #[arg(required_unless_present = "list")]
    pub directory: Option<PathBuf>,

    /// List available sample applications
    #[arg(long, short = 'l', conflicts_with_all = ["application", "directory"])]
    pub list: bool,

    /// Ignore the cache and download the latest sample apps archive
    #[arg(long, short = 'f')]
    pub force: bool,
}
