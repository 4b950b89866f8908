// src/logging.rs

use crate::config::Config;
use crate::errors::ChatfolioResult;
use crate::models::DispatchRecord;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::info;

/// Starts file logging. The terminal belongs to the UI, so nothing goes to stderr.
/// Keep the returned handle alive for the lifetime of the program.
pub fn init_logging(config: &Config) -> ChatfolioResult<LoggerHandle> {
    let handle = Logger::try_with_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir())
                .basename("chatfolio"),
        )
        .append()
        .format(flexi_logger::detailed_format)
        .start()?;
    Ok(handle)
}

pub fn format_dispatch(record: &DispatchRecord) -> String {
    format!(
        "[{}] {:?} -> {} - Replies: {} - Reset: {}",
        record.timestamp.to_rfc3339(),
        record.input,
        record.keyword.as_deref().unwrap_or("fallback"),
        record.reply_count,
        record.reset
    )
}

/// Logs a handled submission.
pub fn log_dispatch(record: &DispatchRecord) {
    info!("{}", format_dispatch(record));
}
