use std::fs::{self, File};

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Config;

/// Route `log` output to the configured file. The terminal belongs to the
/// table screen, so nothing is written to stdout or stderr.
pub fn init_logging(config: &Config) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }

    let log_file = File::create(&config.log_file)
        .with_context(|| format!("failed to create log file {}", config.log_file.display()))?;

    let log_config = ConfigBuilder::new()
        .add_filter_ignore_str("reqwest")
        .add_filter_ignore_str("hyper")
        .build();

    WriteLogger::init(config.log_level, log_config, log_file)
        .context("failed to initialize logger")
}
