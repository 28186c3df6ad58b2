//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for Raft binaries: a compact console
//! layer, an optional daily-rolling file layer (plain or JSON lines), and an `EnvFilter`
//! seeded from configuration. `RUST_LOG` directives are layered on top and win for the
//! targets they name; malformed ones are skipped.
//!
//! ## Example
//!
//! ```rust
//! # use raft_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("raft-popup")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use raft_domain::config::LoggingConfig;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Builder state before a name is set.
#[derive(Debug)]
pub struct NoName;

/// Builder state once a name is set; only then can the logger be initialized.
#[derive(Debug)]
pub struct WithName(String);

/// Configures the global subscriber. Obtain one with [`Logger::builder`].
#[derive(Debug)]
pub struct LoggerBuilder<N = NoName> {
    name: N,
    console: bool,
    level: LevelFilter,
    filter: Option<String>,
    directory: Option<PathBuf>,
    json: bool,
    max_files: usize,
}

impl LoggerBuilder<NoName> {
    /// Names the logger; the name prefixes rolling log files (`raft-popup.2026-10-16.log`).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder {
            name: WithName(name.into()),
            console: self.console,
            level: self.level,
            filter: self.filter,
            directory: self.directory,
            json: self.json,
            max_files: self.max_files,
        }
    }
}

impl LoggerBuilder<WithName> {
    /// Applies a [`LoggingConfig`] section on top of the current settings.
    ///
    /// Unset optional fields keep what the builder already has.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if `config.level` is not a level name.
    pub fn config(mut self, config: &LoggingConfig) -> Result<Self, LoggerError> {
        self.level = LevelFilter::from_str(config.level.trim()).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid log level '{}': {e}", config.level).into(),
                context: Some("logging.level".into()),
            }
        })?;
        if let Some(filter) = &config.filter {
            self.filter = Some(filter.clone());
        }
        if let Some(directory) = &config.directory {
            self.directory = Some(directory.clone());
        }
        self.json = config.json;
        Ok(self)
    }

    /// Minimum level emitted when neither `RUST_LOG` nor a filter says otherwise.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Extra `EnvFilter` directives, e.g. `raft_licensing=debug`.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Toggles the console layer.
    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes daily-rolling log files into `directory`.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Writes file logs as JSON lines.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Number of rotated files kept on disk.
    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker guard; keep it alive until
    /// shutdown or buffered lines are lost.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, an invalid
    ///   filter, or when no layer is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let env_filter = self.env_filter_layer()?;

        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.directory {
            Some(directory) => {
                fs::create_dir_all(directory).map_err(|source| LoggerError::Io {
                    source,
                    context: Some(format!("Failed to create {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name.0)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(directory)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.0.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }

        Ok(())
    }

    fn env_filter_layer(&self) -> Result<EnvFilter, LoggerError> {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        self.merged_filter(env.as_deref())
    }

    /// Configured directives first, then `env` directives on top so they win per target.
    fn merged_filter(&self, env: Option<&str>) -> Result<EnvFilter, LoggerError> {
        let configured = self.filter.as_deref().unwrap_or_default();
        let mut filter = EnvFilter::builder()
            .with_default_directive(self.level.into())
            .parse(configured)
            .map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{configured}': {e}").into(),
                context: None,
            })?;

        let env_directives = env.unwrap_or_default().split(',').map(str::trim);
        for directive in env_directives.filter(|d| !d.is_empty()) {
            if let Ok(directive) = directive.parse::<Directive>() {
                filter = filter.add_directive(directive);
            }
        }

        Ok(filter)
    }
}

/// Handle to the installed logging system. Dropping it flushes and stops the file writer.
#[must_use = "Dropping this handle stops background file logging."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: NoName,
            console: true,
            level: LevelFilter::INFO,
            filter: None,
            directory: None,
            json: false,
            max_files: DEFAULT_MAX_FILES,
        }
    }

    /// Whether a file writer is attached.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder().name("raft-test");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.max_files, DEFAULT_MAX_FILES);
        assert!(builder.directory.is_none());
        assert!(!builder.json);
    }

    #[test]
    fn config_section_is_applied() {
        let config = LoggingConfig {
            level: "debug".to_owned(),
            filter: Some("raft_licensing=trace".to_owned()),
            directory: Some(PathBuf::from("logs")),
            json: true,
        };

        let builder = Logger::builder().name("raft-test").config(&config).expect("valid config");
        assert_eq!(builder.level, LevelFilter::DEBUG);
        assert_eq!(builder.filter.as_deref(), Some("raft_licensing=trace"));
        assert_eq!(builder.directory.as_deref(), Some(std::path::Path::new("logs")));
        assert!(builder.json);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LoggingConfig { level: "loud".to_owned(), ..LoggingConfig::default() };
        let err = Logger::builder().name("raft-test").config(&config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_settings_fail_before_touching_globals() {
        let err = Logger::builder().name("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("raft-test").max_files(0).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = Logger::builder().name("raft-test").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err =
            Logger::builder().name("raft-test").env_filter("raft=notalevel").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn config_without_filter_keeps_builder_filter() {
        let builder = Logger::builder()
            .name("raft-test")
            .env_filter("raft_popup=debug")
            .directory("logs")
            .config(&LoggingConfig::default())
            .expect("valid config");

        assert_eq!(builder.filter.as_deref(), Some("raft_popup=debug"));
        assert_eq!(builder.directory.as_deref(), Some(std::path::Path::new("logs")));
    }

    #[test]
    fn rust_log_directives_override_configured_ones() {
        let builder = Logger::builder().name("raft-test").env_filter("raft_licensing=debug");

        let merged = builder.merged_filter(Some("raft_licensing=trace")).unwrap().to_string();
        assert!(merged.contains("raft_licensing=trace"), "{merged}");
        assert!(!merged.contains("raft_licensing=debug"), "{merged}");

        let configured_only = builder.merged_filter(None).unwrap().to_string();
        assert!(configured_only.contains("raft_licensing=debug"), "{configured_only}");
    }

    #[test]
    fn malformed_rust_log_entries_are_skipped() {
        let builder = Logger::builder().name("raft-test").env_filter("raft_popup=warn");
        let merged = builder.merged_filter(Some("raft=notalevel,,raft_kernel=debug")).unwrap();

        let merged = merged.to_string();
        assert!(merged.contains("raft_popup=warn"), "{merged}");
        assert!(merged.contains("raft_kernel=debug"), "{merged}");
    }
}
