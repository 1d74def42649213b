//! Clone command implementation
//!
//! Either lists the available sample applications or extracts one of them
//! from the (possibly freshly downloaded) sample apps archive into a new
//! directory.

use console::Style;

use crate::cli::CloneArgs;
use crate::error::{self, Result};
use crate::fetch::{SampleAppFetcher, listing};

/// Run clone command
pub fn run(args: CloneArgs, verbose: bool) -> Result<()> {
    if args.list {
        for app in listing::list_sample_apps()? {
            println!("{}", app);
        }
        return Ok(());
    }

    // clap requires both positionals unless --list is given
    let (Some(application), Some(directory)) = (args.application, args.directory) else {
        return Err(error::io_error(
            "expected a sample application and a target directory",
        ));
    };

    let fetcher = SampleAppFetcher::from_env()?;
    if verbose {
        eprintln!("Using archive at {}", fetcher.archive_path().display());
    }

    fetcher.clone_application(&application, &directory, args.force)?;

    println!(
        "Created {}",
        Style::new().cyan().apply_to(directory.display())
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::error::AppseedError;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: CloneArgs,
    }

    #[test]
    fn test_run_rejects_missing_positionals() {
        // Bypasses clap validation on purpose to exercise the guard
        let args = CloneArgs {
            application: None,
            directory: None,
            list: false,
            force: false,
        };
        let err = run(args, false).unwrap_err();
        assert!(matches!(err, AppseedError::IoError { .. }));
    }

    #[test]
    fn test_clone_args_parse_with_force() {
        let harness = Harness::try_parse_from(["test", "-f", "app", "dir"]).unwrap();
        assert!(harness.args.force);
        assert_eq!(harness.args.application, Some("app".to_string()));
    }
}
