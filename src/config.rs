use crate::constants::*;
use crate::errors::{ChatfolioError, ChatfolioResult};
use log::LevelFilter;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, str::FromStr, sync::RwLock};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub typing_delay_min_ms: u64,
    pub typing_delay_max_ms: u64,
    pub resume_path: String,
    pub resume_file_name: String,
    pub download_dir: Option<String>,
    pub log_dir: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typing_delay_min_ms: DEFAULT_TYPING_DELAY_MIN_MS,
            typing_delay_max_ms: DEFAULT_TYPING_DELAY_MAX_MS,
            resume_path: DEFAULT_RESUME_PATH.to_string(),
            resume_file_name: DEFAULT_RESUME_FILE_NAME.to_string(),
            download_dir: None,
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Where the resume copy lands: the configured directory, the platform
    /// download directory, or the working directory.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config_dir().ok().map(|dir| dir.join("logs")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = dotenv::var("CHATFOLIO_RESUME_PATH") {
            self.resume_path = path;
        }
        if let Ok(dir) = dotenv::var("CHATFOLIO_DOWNLOAD_DIR") {
            self.download_dir = Some(dir);
        }
        if let Ok(level) = dotenv::var("CHATFOLIO_LOG_LEVEL") {
            self.log_level = level;
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> ChatfolioResult<()> {
    let config_path = get_config_path()?;
    let mut config = load_or_create(&config_path)?;
    config.apply_env_overrides();
    validate_config(&config)?;

    *CONFIG
        .write()
        .map_err(|_| ChatfolioError::config_error("Config lock poisoned"))? = config;

    Ok(())
}

/// Reads the config at `path`, writing the defaults there first if it does not exist.
pub fn load_or_create(path: &Path) -> ChatfolioResult<Config> {
    if path.exists() {
        let config_str = fs::read_to_string(path).map_err(|e| {
            ChatfolioError::config_error(format!("Failed to read config file: {}", e))
        })?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ChatfolioError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        Ok(config)
    } else {
        let config = Config::default();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ChatfolioError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config_str = serde_json::to_string_pretty(&config).map_err(|e| {
            ChatfolioError::config_error(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, config_str).map_err(|e| {
            ChatfolioError::config_error(format!("Failed to write config file: {}", e))
        })?;

        Ok(config)
    }
}

fn config_dir() -> ChatfolioResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatfolioError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("chatfolio"))
}

fn get_config_path() -> ChatfolioResult<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn validate_config(config: &Config) -> ChatfolioResult<()> {
    if config.typing_delay_min_ms > config.typing_delay_max_ms {
        return Err(ChatfolioError::config_error(
            "typing_delay_min_ms must not exceed typing_delay_max_ms",
        ));
    }

    if config.resume_file_name.trim().is_empty() {
        return Err(ChatfolioError::config_error("resume_file_name is required"));
    }

    // The file name must not escape the download directory.
    if Path::new(&config.resume_file_name).components().count() != 1 {
        return Err(ChatfolioError::config_error(
            "resume_file_name must be a bare file name",
        ));
    }

    if config.resume_path.trim().is_empty() {
        return Err(ChatfolioError::config_error("resume_path is required"));
    }

    if LevelFilter::from_str(&config.log_level).is_err() {
        return Err(ChatfolioError::config_error(format!(
            "Unknown log level: {}",
            config.log_level
        )));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}
