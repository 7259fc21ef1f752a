#![forbid(unsafe_code)]

//! File logging for the demo.
//!
//! The screen belongs to the UI, so log lines go to a file. Nothing is
//! installed unless `YONGUI_LOG` holds a filter.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const FILTER_VAR: &str = "YONGUI_LOG";
pub const FILE_VAR: &str = "YONGUI_LOG_FILE";
pub const DEFAULT_LOG_FILE: &str = "yongui-demo.log";

/// Parse a filter directive string. Empty or invalid input disables logging.
pub fn parse_filter(directives: Option<&str>) -> Option<EnvFilter> {
    let directives = directives?.trim();
    if directives.is_empty() {
        return None;
    }
    EnvFilter::try_new(directives).ok()
}

/// Log file path from `YONGUI_LOG_FILE`, or the default.
pub fn log_path(configured: Option<PathBuf>) -> PathBuf {
    configured.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Install the global subscriber from the environment.
///
/// Returns the log file path when logging was enabled.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_from_env() -> io::Result<Option<PathBuf>> {
    let Some(filter) = parse_filter(env::var(FILTER_VAR).ok().as_deref()) else {
        return Ok(None);
    };
    let path = log_path(env::var_os(FILE_VAR).map(PathBuf::from));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();
    if !installed {
        return Ok(None);
    }
    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_blank_filter_disables_logging() {
        assert!(parse_filter(None).is_none());
        assert!(parse_filter(Some("   ")).is_none());
    }

    #[test]
    fn directives_parse() {
        assert!(parse_filter(Some("debug")).is_some());
        assert!(parse_filter(Some("yongui_widgets=trace,info")).is_some());
    }

    #[test]
    fn default_log_path() {
        assert_eq!(log_path(None), PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(
            log_path(Some(PathBuf::from("/tmp/x.log"))),
            PathBuf::from("/tmp/x.log")
        );
    }
}
