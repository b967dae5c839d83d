use ark_kernel::domain::config::LoggingConfig;
use ark_logger::{ConsoleFormat, Logger, LoggerError};

/// Installs the global subscriber from the merged logging settings.
///
/// # Errors
/// Returns [`LoggerError`] for an unknown level, bad directives, an unusable log directory,
/// or when a subscriber is already installed.
pub fn init_logging(settings: &LoggingConfig) -> Result<Logger, LoggerError> {
    let format = if settings.json { ConsoleFormat::Json } else { ConsoleFormat::Compact };
    let mut builder = Logger::builder("ark").level_name(&settings.level)?.format(format);

    if let Some(directives) = &settings.directives {
        builder = builder.directives(directives.as_str());
    }
    if let Some(directory) = &settings.directory {
        builder = builder.directory(directory);
    }

    builder.init()
}
