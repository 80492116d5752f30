//! File logging.
//!
//! The terminal belongs to the game, so log records go to a file through log4rs,
//! and only when `BLOCKFALL_LOG_PATH` is set.

use anyhow::{Context, Result};
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Handle,
};

use crate::config::Config;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Install the file logger. Returns `None` when logging is not configured.
///
/// Keep the handle alive for the life of the process.
pub fn init(config: &Config) -> Result<Option<Handle>> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(None);
    };

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let log_config = LogConfig::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(config.log_level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(config.log_level))
        .context("build log config")?;

    let handle = log4rs::init_config(log_config).context("install logger")?;
    log::info!("logging to {} at {}", path.display(), config.log_level);
    Ok(Some(handle))
}
