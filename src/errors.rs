// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatfolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("Link error: {0}")]
    Link(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

impl ChatfolioError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatfolioError::Config(msg.into())
    }

    pub fn download_error(msg: impl Into<String>) -> Self {
        ChatfolioError::Download(msg.into())
    }

    pub fn link_error(msg: impl Into<String>) -> Self {
        ChatfolioError::Link(msg.into())
    }
}

pub type ChatfolioResult<T> = Result<T, ChatfolioError>;
