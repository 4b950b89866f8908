// src/download.rs

use crate::config::Config;
use crate::errors::{ChatfolioError, ChatfolioResult};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Saves the static resume asset under a fixed file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDownload {
    pub source: PathBuf,
    pub target_dir: PathBuf,
    pub file_name: String,
}

impl ResumeDownload {
    pub fn from_config(config: &Config) -> Self {
        Self {
            source: PathBuf::from(&config.resume_path),
            target_dir: config.download_dir(),
            file_name: config.resume_file_name.clone(),
        }
    }

    pub fn target_path(&self) -> PathBuf {
        self.target_dir.join(&self.file_name)
    }

    /// Copies the asset byte for byte and returns where it was saved.
    /// The file is not inspected; a missing asset is reported as the host error.
    pub fn trigger(&self) -> ChatfolioResult<PathBuf> {
        fs::create_dir_all(&self.target_dir)?;
        let target = self.target_path();
        fs::copy(&self.source, &target).map_err(|e| {
            ChatfolioError::download_error(format!("{}: {}", self.source.display(), e))
        })?;
        info!(
            "Saved resume {} to {}",
            self.source.display(),
            target.display()
        );
        Ok(target)
    }
}
