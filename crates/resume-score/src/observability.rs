//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr. When a log location can be resolved
//! every event is also appended as a JSON line to `resume-score.jsonl`.
//! Failing to open that file is reported and otherwise ignored.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "RESUME_SCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "RESUME_SCORE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "resume-score";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where the JSON log file goes, if anywhere.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    log_dir: Option<PathBuf>,
    log_file_name: Option<String>,
    stderr_verbose: bool,
}

impl ObservabilityConfig {
    /// Resolve the log location.
    ///
    /// `RESUME_SCORE_LOG_PATH` names the file outright. Otherwise the file
    /// lands in `RESUME_SCORE_LOG_DIR`, then `log_dir` (from config), then the
    /// platform's local data directory.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        if let Some(path) = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from)
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            return Self {
                log_dir: Some(
                    path.parent()
                        .filter(|dir| !dir.as_os_str().is_empty())
                        .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
                ),
                log_file_name: Some(name.to_string()),
                stderr_verbose: false,
            };
        }

        let dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(log_dir)
            .or_else(|| {
                resume_score_core::config::user_data_local_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });

        Self {
            log_dir: dir,
            log_file_name: None,
            stderr_verbose: false,
        }
    }

    /// Let debug and trace events through to stderr too.
    #[must_use]
    pub const fn with_verbose_stderr(mut self, verbose: bool) -> Self {
        self.stderr_verbose = verbose;
        self
    }

    fn open_file(&self) -> anyhow::Result<Option<RollingFileAppender>> {
        let Some(ref dir) = self.log_dir else {
            return Ok(None);
        };
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;

        let builder = RollingFileAppender::builder().rotation(Rotation::NEVER);
        let builder = match self.log_file_name {
            Some(ref name) => builder.filename_prefix(name),
            None => builder
                .filename_prefix(LOG_FILE_PREFIX)
                .filename_suffix(LOG_FILE_SUFFIX),
        };
        let appender = builder
            .build(dir)
            .with_context(|| format!("failed to open log file in {}", dir.display()))?;
        Ok(Some(appender))
    }
}

/// Keeps the background log writer alive. Drop it last.
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, `-v` debug,
/// `-vv` trace, and no flag falls back to the configured level.
pub fn env_filter(quiet: bool, verbose: u8, level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(directive)
}

/// Install the global subscriber.
///
/// Stderr only shows warnings and errors unless verbose stderr was
/// requested; the JSON file receives everything the filter lets through.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_level = if config.stderr_verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_level);

    let (file_layer, file_guard, file_error) = match config.open_file() {
        Ok(Some(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Ok(None) => (None, None, None),
        Err(err) => (None, None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    if let Some(err) = file_error {
        tracing::warn!(error = %format!("{err:#}"), "file logging disabled");
    }

    Ok(ObservabilityGuard { _file: file_guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_is_used_without_env() {
        if std::env::var_os(LOG_PATH_ENV).is_some() || std::env::var_os(LOG_DIR_ENV).is_some() {
            return;
        }
        let config = ObservabilityConfig::from_env_with_overrides(Some(PathBuf::from("/tmp/rs")));
        assert_eq!(config.log_dir.as_deref(), Some(Path::new("/tmp/rs")));
        assert!(config.log_file_name.is_none());
    }

    #[test]
    fn missing_dir_means_no_file() {
        let config = ObservabilityConfig::default();
        assert!(config.open_file().unwrap().is_none());
    }

    #[test]
    fn opens_file_in_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ObservabilityConfig {
            log_dir: Some(tmp.path().join("nested")),
            ..ObservabilityConfig::default()
        };
        assert!(config.open_file().unwrap().is_some());
        assert!(tmp.path().join("nested").is_dir());
    }
}
