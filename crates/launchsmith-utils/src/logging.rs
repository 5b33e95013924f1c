//! # Logging Utilities
//!
//! Logging infrastructure for launchsmith using `tracing`.
//!
//! This module provides structured logging with support for:
//! - Pretty (development) and JSON (production) output
//! - Environment variable configuration
//! - Log level filtering
//! - File output next to, or instead of, the console
//!
//! Console output always goes to stderr. Stdout is reserved for the launch
//! configurations the CLI prints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchsmith_utils::init_logging;
//!
//! // Reads RUST_LOG, LAUNCHSMITH_LOG_FORMAT and LAUNCHSMITH_LOG_FILE
//! let _guard = init_logging().expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=launchsmith_core=trace`)
//! - `LAUNCHSMITH_LOG_FORMAT`: Output format (`json` or `pretty`, default: `pretty`)
//! - `LAUNCHSMITH_LOG_FILE`: Optional path to a daily-rolled log file
//!
//! ## Guards
//!
//! File output is written from a background thread. Every initializer that
//! can log to a file hands back a [`WorkerGuard`]; keep it alive until the
//! program exits or buffered lines are lost.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs, io};

use chrono::Utc;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "LAUNCHSMITH_LOG_FORMAT";

/// Environment variable naming an extra log file
pub const LOG_FILE_ENV: &str = "LAUNCHSMITH_LOG_FILE";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Human-readable format (default for development)
    Pretty,
    /// JSON format (default for production)
    Json,
}

impl FromStr for LogFormat
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidFormat(format!(
                "Unknown log format: {s}. Use 'pretty' or 'json'"
            ))),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LoggingError::InvalidLevel(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            ))),
        }
    }
}

/// Initialize logging with default settings
///
/// Reads `RUST_LOG`, `LAUNCHSMITH_LOG_FORMAT` and `LAUNCHSMITH_LOG_FILE`.
/// Unknown format names fall back to pretty output.
///
/// ## Errors
///
/// Returns an error if logging is already initialized.
pub fn init_logging() -> Result<Option<WorkerGuard>, LoggingError>
{
    init_console(format_from_env(), None)
}

/// Initialize logging with an explicit level and format
///
/// The level wins over `RUST_LOG`. `LAUNCHSMITH_LOG_FILE` is still honored.
///
/// ```rust,no_run
/// use launchsmith_utils::{LogFormat, LogLevel, init_logging_with_level};
///
/// let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<Option<WorkerGuard>, LoggingError>
{
    init_console(format, Some(level.into()))
}

/// Initialize file-only logging in `dir`
///
/// Writes to `<dir>/YYYY-MM-DD-launchsmith.log`, creating `dir` if needed.
/// Nothing is written to the console. With `level` unset, `RUST_LOG` applies,
/// defaulting to `INFO`.
///
/// ## Errors
///
/// Returns an error if the directory cannot be created or logging is already
/// initialized.
pub fn init_logging_to_dir(dir: &Path, level: Option<LogLevel>) -> Result<(PathBuf, WorkerGuard), LoggingError>
{
    fs::create_dir_all(dir)?;

    let file_name = format!("{}-launchsmith.log", Utc::now().format("%Y-%m-%d"));
    let log_file = dir.join(&file_name);

    let appender = rolling::never(dir, &file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layers = vec![layer(format_from_env(), writer, false, filter(level.map(Into::into)))];
    install(layers)?;

    Ok((log_file, guard))
}

fn format_from_env() -> LogFormat
{
    env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|s| LogFormat::from_str(&s).ok())
        .unwrap_or(LogFormat::Pretty)
}

/// Explicit level first, then `RUST_LOG`, then `INFO`
fn filter(explicit: Option<Level>) -> EnvFilter
{
    match explicit {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
    }
}

fn init_console(format: LogFormat, explicit: Option<Level>) -> Result<Option<WorkerGuard>, LoggingError>
{
    let mut layers = vec![layer(format, io::stderr, true, filter(explicit))];

    let guard = match env::var(LOG_FILE_ENV).ok().map(PathBuf::from) {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(daily_appender(&path)?);
            layers.push(layer(format, writer, false, filter(explicit)));
            Some(guard)
        }
        None => None,
    };

    install(layers)?;
    Ok(guard)
}

fn daily_appender(path: &Path) -> Result<RollingFileAppender, LoggingError>
{
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InitializationFailed(format!("{} does not name a file", path.display())))?;
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    Ok(rolling::daily(dir, file_name))
}

fn layer<W>(format: LogFormat, writer: W, ansi: bool, filter: EnvFilter) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(ansi)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed(),
    }
}

fn install(layers: Vec<BoxedLayer>) -> Result<(), LoggingError>
{
    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::InitializationFailed(e.to_string()))
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    /// Invalid log level
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_log_format_from_str()
    {
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("dev").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("PROD").unwrap(), LogFormat::Json);
        assert!(matches!(LogFormat::from_str("xml"), Err(LoggingError::InvalidFormat(_))));
    }

    #[test]
    fn test_log_level_from_str()
    {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("dbg").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("TRACE").unwrap(), LogLevel::Trace);
        assert!(matches!(LogLevel::from_str("loud"), Err(LoggingError::InvalidLevel(_))));
    }

    #[test]
    fn test_log_level_to_tracing_level()
    {
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_daily_appender_rejects_directory_path()
    {
        assert!(matches!(
            daily_appender(Path::new("/")),
            Err(LoggingError::InitializationFailed(_))
        ));
    }

    // The only test in this binary that installs a global subscriber
    #[test]
    fn test_init_logging_to_dir_creates_dated_file()
    {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let (log_file, guard) = init_logging_to_dir(&log_dir, Some(LogLevel::Debug)).unwrap();
        tracing::info!("written to file");
        drop(guard);

        assert_eq!(log_file.parent(), Some(log_dir.as_path()));
        let name = log_file.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with("-launchsmith.log"), "{name}");
        assert!(log_file.exists());

        assert!(matches!(
            init_logging_to_dir(&log_dir, None),
            Err(LoggingError::InitializationFailed(_))
        ));
    }
}
