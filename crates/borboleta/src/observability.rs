//! Tracing subscriber setup.
//!
//! Logs go to stderr by default. While the full-screen interface owns the
//! terminal they go to a file instead.

use borboleta_error::{BorboletaResult, ConfigError, StorageError, StorageErrorKind};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file, created with its parent directory if needed
    File(PathBuf),
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (e.g. "info", "borboleta=debug")
    pub log_level: String,
    /// Emit JSON lines instead of text
    pub json_logs: bool,
    /// Destination
    pub target: LogTarget,
}

impl LoggingConfig {
    /// Text logs at `info` to stderr.
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            target: LogTarget::Stderr,
        }
    }

    /// Set the fallback filter.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Set the destination.
    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    /// Filter from `RUST_LOG`, falling back to `log_level`.
    pub fn env_filter(&self) -> BorboletaResult<EnvFilter> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .map_err(|e| ConfigError::new(format!("Invalid log filter '{}': {}", self.log_level, e)))?;
        Ok(filter)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt_layer<W>(writer: W, json: bool, ansi: bool) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true);
    if json {
        layer.json().boxed()
    } else {
        layer.boxed()
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// An invalid filter, an unwritable log file, or a subscriber already set.
pub fn init_logging(config: &LoggingConfig) -> BorboletaResult<()> {
    let filter = config.env_filter()?;

    let layer = match &config.target {
        LogTarget::Stderr => fmt_layer(std::io::stderr, config.json_logs, true),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                        "{}: {}",
                        parent.display(),
                        e
                    )))
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    StorageError::new(StorageErrorKind::FileWrite(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )))
                })?;
            fmt_layer(Mutex::new(file), config.json_logs, false)
        }
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;

    tracing::debug!(target_kind = ?config.target, json = config.json_logs, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let config = LoggingConfig::new()
            .with_log_level("debug")
            .with_json_logs(true)
            .with_target(LogTarget::File(PathBuf::from("/tmp/borboleta.log")));
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
        assert_eq!(
            config.target,
            LogTarget::File(PathBuf::from("/tmp/borboleta.log"))
        );
    }
}
