//! File logging for the terminal binary.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log records go to a file, never to stdout/stderr.

use std::env;

use anyhow::Result;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// Initialise logging from `BLOCKFALL_LOG_PATH` / `BLOCKFALL_LOG_LEVEL`.
///
/// Logging stays off when no path is set.
pub fn init_from_env() -> Result<()> {
    let Some(path) = env::var("BLOCKFALL_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let level = env::var("BLOCKFALL_LOG_LEVEL")
        .ok()
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    init_log(level, &path)
}

pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} {m}{n}",
        )))
        .build(file_path)?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}
