//! Tracing setup.
//!
//! Events never reach the terminal: stdout and stderr belong to the
//! prompt and the viewer. When file logging is enabled, events go to a
//! daily-rotated JSON log through a non-blocking writer. The one direct
//! stderr line is a startup warning when the log directory cannot be
//! created, printed before any screen is drawn.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Build the event filter.
///
/// Precedence: RUST_LOG env var > config level > "info".
pub fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("termfolio={}", config.level)))
        .unwrap_or_else(|_| EnvFilter::new("termfolio=info"))
}

/// Install the global subscriber.
///
/// The returned guard must be kept alive until exit so buffered events
/// flush. Returns None when file logging is off or its directory cannot
/// be created.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    if !config.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.dir, e
        );
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.dir, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let installed = tracing_subscriber::registry()
        .with(filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init();

    match installed {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_file_logging_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(init(&config).is_none());
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        let config = LoggingConfig {
            level: "not a level ][".to_string(),
            ..LoggingConfig::default()
        };
        // Must not panic regardless of RUST_LOG.
        let _ = filter(&config);
    }

    #[test]
    fn uncreatable_log_dir_disables_file_logging() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let config = LoggingConfig {
            file_enabled: true,
            dir: blocker.path().join("logs"),
            ..LoggingConfig::default()
        };
        assert!(init(&config).is_none());
        assert!(!config.dir.exists());
    }

    #[test]
    fn file_logging_writes_into_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file_enabled: true,
            dir: dir.path().join("logs"),
            ..LoggingConfig::default()
        };
        // Another test may have installed the global subscriber already;
        // the directory is created either way.
        let _guard = init(&config);
        assert!(config.dir.is_dir());
    }
}
