//! File logging.
//!
//! The terminal is owned by the UI, so all diagnostics go to a log file
//! through a non-blocking writer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

const APP_DIR: &str = "contact-form";
const LOG_FILE: &str = "contact-form.log";

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The log path has no file name component.
    #[error("log path has no file name: {0}")]
    NoFileName(PathBuf),

    /// The log directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global subscriber was already installed.
    #[error("logging already initialised: {0}")]
    AlreadyInitialised(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Default log location: `<data dir>/contact-form/contact-form.log`.
pub fn default_log_path() -> Result<PathBuf, LoggingError> {
    let data_dir = dirs::data_dir().ok_or(LoggingError::NoDataDir)?;
    Ok(data_dir.join(APP_DIR).join(LOG_FILE))
}

/// Maps `-v` repetitions to a maximum level. Warnings are always on.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Splits `path` into its directory and file name, creating the directory.
fn prepare(path: &Path) -> Result<(PathBuf, PathBuf), LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::NoFileName(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;
    Ok((dir, PathBuf::from(file_name)))
}

/// Installs the global subscriber writing to `path`.
///
/// The returned guard flushes buffered lines on drop; hold it until exit.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(path: &Path, verbosity: u8) -> Result<WorkerGuard, LoggingError> {
    let (dir, file_name) = prepare(path)?;
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_max_level(level_for(verbosity))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(guard)
}
