//! File logging for the terminal binary.
//!
//! The renderer owns stdout, so log records go to a file.

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Install a log4rs file logger. `LevelFilter::Off` installs nothing.
pub fn init_logging(level: LevelFilter, path: &str) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    let config = build_config(level, path)?;
    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}

fn build_config(level: LevelFilter, path: &str) -> Result<Config> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)
        .with_context(|| format!("opening log file {path}"))?;

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("building log config")?;
    Ok(config)
}
