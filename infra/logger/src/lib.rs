//! # Logger
//!
//! Installs the process-wide `tracing` subscriber.
//!
//! Console output always goes to **stderr**, so a binary's stdout stays reserved for its
//! machine-readable result. The console layer renders either compact text or one JSON object
//! per event. An optional rolling file sink writes through a non-blocking worker.
//!
//! Filtering starts from the configured [`LevelFilter`], then applies explicit directives
//! (e.g. `"ark_vault=trace"`) when given, or `RUST_LOG` otherwise.
//!
//! ## Example
//!
//! ```rust
//! use ark_logger::{ConsoleFormat, LevelFilter, Logger};
//!
//! let _logger = Logger::builder("ark")
//!     .level(LevelFilter::DEBUG)
//!     .format(ConsoleFormat::Json)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Rendering of console (stderr) events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleFormat {
    #[default]
    Compact,
    Json,
}

/// Rolling file sink settings.
#[derive(Debug, Clone)]
struct FileSink {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
}

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    directives: Option<String>,
    console: Option<ConsoleFormat>,
    file: Option<FileSink>,
}

impl LoggerBuilder {
    /// Minimum level emitted when no directive says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Parses the minimum level from its name (`"trace"` .. `"error"`, `"off"`).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn level_name(self, level: &str) -> Result<Self, LoggerError> {
        let parsed = LevelFilter::from_str(level.trim()).map_err(|_| {
            LoggerError::InvalidConfiguration {
                message: format!("Unknown log level '{level}'").into(),
                context: None,
            }
        })?;
        Ok(self.level(parsed))
    }

    /// Adds explicit filter directives (e.g. `ark_vault=trace,ark_kernel=debug`).
    ///
    /// When set, `RUST_LOG` is ignored. Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    /// Sets the console format. The console layer is enabled by default.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn format(mut self, format: ConsoleFormat) -> Self {
        self.console = Some(format);
        self
    }

    /// Turns the stderr console layer off.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn without_console(mut self) -> Self {
        self.console = None;
        self
    }

    /// Also writes JSON records to rolling files named `<name>.<date>.log` under `directory`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.file = Some(FileSink {
            directory: directory.into(),
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
        });
        self
    }

    /// File rotation strategy. Ignored without [`LoggerBuilder::directory`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Maximum number of rotated files kept. Ignored without [`LoggerBuilder::directory`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. When a file sink is configured, the handle owns its
    /// [`WorkerGuard`] and must stay alive until shutdown so buffered records are flushed.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] For an empty name, zero `max_files`, bad
    ///   directives, or when no layer is enabled.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] If the file sink cannot be opened.
    /// * [`LoggerError::Subscriber`] If a global subscriber has already been set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let env_filter = self.env_filter()?;

        let mut layers = Vec::new();

        match self.console {
            Some(ConsoleFormat::Compact) => {
                layers.push(layer().compact().with_writer(io::stderr).with_ansi(true).boxed());
            },
            Some(ConsoleFormat::Json) => {
                layers.push(layer().json().with_writer(io::stderr).with_ansi(false).boxed());
            },
            None => {},
        }

        let guard = if let Some(file) = self.file {
            fs::create_dir_all(&file.directory)
                .context(format!("Failed to create {}", file.directory.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(file.rotation)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(file.max_files)
                .build(&file.directory)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            layers.push(layer().json().with_writer(non_blocking).with_ansi(false).boxed());
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable the console or a log directory."
                    .into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        if self.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }

        Ok(())
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        self.directives.as_ref().map_or_else(
            || Ok(builder.from_env_lossy()),
            |directives| {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid filter directives '{directives}': {e}").into(),
                    context: None,
                })
            },
        )
    }
}

/// Handle to the installed logging system.
///
/// Holds the file worker guard, if any. Drop it only when the process is shutting down.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder. `name` prefixes rolling log files (e.g. `ark.2026-10-19.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            directives: None,
            console: Some(ConsoleFormat::default()),
            file: None,
        }
    }

    /// Whether a file sink (and its background worker) is active.
    #[must_use]
    pub const fn has_file_sink(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_builder_initial_state() {
        let builder = Logger::builder("test-app").directives("ark=debug");

        assert_eq!(builder.console, Some(ConsoleFormat::Compact));
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.directives.as_deref(), Some("ark=debug"));
        assert!(builder.file.is_none());
    }

    #[test]
    fn test_file_settings_apply_only_with_directory() {
        let tmp_dir = tempdir().expect("temp dir");

        let without = Logger::builder("test-app").max_files(3);
        assert!(without.file.is_none());

        let with = Logger::builder("test-app").directory(tmp_dir.path()).max_files(3);
        assert_eq!(with.file.map(|file| file.max_files), Some(3));
    }

    #[test]
    fn test_level_name_parsing() {
        let builder = Logger::builder("test-app").level_name("WARN").expect("valid level");
        assert_eq!(builder.level, LevelFilter::WARN);

        let err = Logger::builder("test-app").level_name("loud").unwrap_err();
        assert_eq!(err.kind(), "invalid_configuration");
    }

    #[test]
    #[serial]
    fn test_validation_rejects_bad_settings() {
        let err = Logger::builder("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let tmp_dir = tempdir().expect("temp dir");
        let err = Logger::builder("test-app").directory(tmp_dir.path()).max_files(0).init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));

        let err = Logger::builder("test-app").without_console().init().unwrap_err();
        assert!(err.to_string().contains("No logging layers"));

        let err = Logger::builder("test-app").directives("ark=loudest").init().unwrap_err();
        assert_eq!(err.kind(), "invalid_configuration");
    }
}
