//! Spinner display for long-running downloads

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Run `f` with a spinner showing `message`, clearing it on completion
pub fn with_spinner<T>(
    message: &'static str,
    f: impl FnOnce() -> crate::error::Result<T>,
) -> crate::error::Result<T> {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.yellow} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = f();

    // Clear on both success and error so diagnostics print on a clean line
    spinner.finish_and_clear();
    result
}
