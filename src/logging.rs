//! Logging initialisation.
//!
//! Library code only emits `tracing` events; the binary decides where they go. The interactive
//! reader owns the terminal, so it logs to a file or not at all, while the one-shot JSON and
//! HTML modes log to stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the verbosity-derived filter.
pub const LOG_ENV: &str = "MARGINALIA_LOG";

/// Where log lines are written.
pub enum LogTarget<'a> {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(&'a Path),
    /// Discard everything.
    Off,
}

#[must_use]
/// Maps a `-v` count to a tracing directive: 0 → warn, 1 → info, 2 → debug, 3+ → trace.
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. [`LOG_ENV`] takes precedence over `verbosity`.
///
/// Uses `try_init`, so a second call is ignored.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(target: &LogTarget<'_>, verbosity: u8) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(verbosity >= 2)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(1), "info");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(200), "trace");
    }

    #[test]
    fn init_logging_off_and_repeat_do_not_panic() {
        init_logging(&LogTarget::Off, 0).unwrap();
        init_logging(&LogTarget::Stderr, 3).unwrap();
        init_logging(&LogTarget::Stderr, 0).unwrap();
    }

    #[test]
    fn init_logging_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/log.txt");
        assert!(init_logging(&LogTarget::File(&path), 1).is_err());
    }
}
