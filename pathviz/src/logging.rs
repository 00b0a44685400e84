//! File logging via flexi_logger.
//!
//! The terminal belongs to the UI, so log output always goes to a file.

use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

use crate::cli::LogConfig;

/// Start logging into `config.dir`. Keep the returned handle alive for the
/// whole session; dropping it flushes and stops the logger.
pub fn init(config: &LogConfig) -> Result<LoggerHandle, Box<dyn std::error::Error>> {
    let handle = Logger::try_with_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .directory(&config.dir)
                .basename("pathviz"),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()?;

    log::info!(
        "logging to {} at level {}",
        config.dir.display(),
        config.level
    );
    Ok(handle)
}
