//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start the rolling file logger at most once per process.
//! - Record which collection files the process is bound to.
//! - Report panics as one bounded log line.
//!
//! # Invariants
//! - Repeating `init_logging` with an equal `LoggingConfig` is a no-op.
//! - Any other configuration after a successful init is rejected.
//! - Log lines carry kinds, paths, ids and counts; never record contents.

use crate::config::StoreConfig;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle,
    Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_FILE_BASENAME: &str = "reserva";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;
const PANIC_REPORT_LIMIT: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    config: LoggingConfig,
    _handle: LoggerHandle,
}

/// Verbosity accepted by `LoggingConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `Debug` for debug builds, `Info` otherwise.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    fn filter(self) -> LevelFilter {
        match self {
            Self::Trace => LevelFilter::Trace,
            Self::Debug => LevelFilter::Debug,
            Self::Info => LevelFilter::Info,
            Self::Warn => LevelFilter::Warn,
            Self::Error => LevelFilter::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let level = match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Self::Trace,
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => return Err(LoggingError::UnknownLevel(value.trim().to_string())),
        };
        Ok(level)
    }
}

/// Failure to configure or start logging.
#[derive(Debug)]
pub enum LoggingError {
    UnknownLevel(String),
    RelativeLogDir(PathBuf),
    CreateLogDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Backend(FlexiLoggerError),
    AlreadyActive {
        active: LoggingConfig,
        requested: LoggingConfig,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(level) => write!(
                f,
                "log level `{level}` is not one of trace, debug, info, warn, error"
            ),
            Self::RelativeLogDir(path) => {
                write!(f, "log directory `{}` is not absolute", path.display())
            }
            Self::CreateLogDir { path, source } => {
                write!(f, "cannot create log directory `{}`: {source}", path.display())
            }
            Self::Backend(err) => write!(f, "log backend failed to start: {err}"),
            Self::AlreadyActive { active, requested } => write!(
                f,
                "logging is active as {} in `{}`; cannot restart as {} in `{}`",
                active.level.as_str(),
                active.log_dir.display(),
                requested.level.as_str(),
                requested.log_dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateLogDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            Self::UnknownLevel(_) | Self::RelativeLogDir(_) | Self::AlreadyActive { .. } => None,
        }
    }
}

impl From<FlexiLoggerError> for LoggingError {
    fn from(value: FlexiLoggerError) -> Self {
        Self::Backend(value)
    }
}

/// Where and how verbosely the process logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    level: LogLevel,
    log_dir: PathBuf,
}

impl LoggingConfig {
    /// # Errors
    /// - `UnknownLevel` for names outside trace|debug|info|warn|error.
    /// - `RelativeLogDir` when `log_dir` is empty or relative.
    pub fn new(level: &str, log_dir: impl AsRef<Path>) -> Result<Self, LoggingError> {
        Self::with_level(level.parse()?, log_dir)
    }

    pub fn with_level(level: LogLevel, log_dir: impl AsRef<Path>) -> Result<Self, LoggingError> {
        let log_dir = log_dir.as_ref();
        if !log_dir.is_absolute() {
            return Err(LoggingError::RelativeLogDir(log_dir.to_path_buf()));
        }
        Ok(Self {
            level,
            log_dir: log_dir.to_path_buf(),
        })
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Starts file logging and records the collection files in use.
pub fn init_logging(config: &LoggingConfig, stores: &StoreConfig) -> Result<(), LoggingError> {
    let active = ACTIVE.get_or_try_init(|| start(config))?;
    if active.config != *config {
        return Err(LoggingError::AlreadyActive {
            active: active.config.clone(),
            requested: config.clone(),
        });
    }

    for (kind, path) in stores.collections() {
        info!(
            "event=collection_bound module=core status=ok kind={} path={}",
            kind,
            path.display()
        );
    }
    Ok(())
}

/// Active configuration, or `None` before `init_logging` succeeded.
pub fn logging_status() -> Option<LoggingConfig> {
    ACTIVE.get().map(|active| active.config.clone())
}

fn start(config: &LoggingConfig) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|source| LoggingError::CreateLogDir {
        path: config.log_dir.clone(),
        source,
    })?;

    let spec = LogSpecification::builder()
        .default(config.level.filter())
        .build();
    let handle = Logger::with(spec)
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    if PANIC_HOOK.set(()).is_ok() {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            error!(
                "event=panic module=core status=error report={}",
                clip(&panic_info.to_string(), PANIC_REPORT_LIMIT)
            );
            previous(panic_info);
        }));
    }

    info!(
        "event=logging_start module=core status=ok version={} level={} log_dir={}",
        crate::core_version(),
        config.level.as_str(),
        config.log_dir.display()
    );

    Ok(ActiveLogger {
        config: config.clone(),
        _handle: handle,
    })
}

/// Collapses whitespace runs to single spaces and keeps at most `limit` chars.
fn clip(text: &str, limit: usize) -> String {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match joined.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &joined[..cut]),
        None => joined,
    }
}
