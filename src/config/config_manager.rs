use std::fs;
use std::path::PathBuf;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{InvoflowError, InvoflowResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    fn config_dir() -> PathBuf {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME)).unwrap_or_default()
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn load() -> InvoflowResult<Config> {
        let path = Self::config_path();

        if path.exists() {
            log::debug!("📋 Loading config from: {}", path.display());
            let content = fs::read_to_string(&path).map_err(|e| InvoflowError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            let config: Config = toml::from_str(&content)?;
            return Ok(config);
        }

        Ok(Config::default())
    }

    pub fn save(config: &Config) -> InvoflowResult<()> {
        let dir = Self::config_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        let path = Self::config_path();
        let content = toml::to_string_pretty(config)?;
        fs::write(&path, content).map_err(|e| InvoflowError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    pub fn create_sample_config() -> InvoflowResult<()> {
        let sample_config = r#"# Invoflow Configuration

[api]
# Preferred API base URL. When unset (or unreachable) the console walks the
# built-in candidates: 127.0.0.1:8000/api, 127.0.0.1:8001/api, then the
# localhost equivalents.
# base_url = "http://127.0.0.1:8000/api"

[auth]
# Bearer token sent with every request. Manage it with
# `invoflow login --token <t>` / `invoflow logout`.
# token = ""
"#;
        let dir = Self::config_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        let path = Self::config_path();
        fs::write(&path, sample_config)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn set_auth_token(token: &str) -> InvoflowResult<()> {
        let mut config = Self::load()?;
        config.auth.token = Some(token.to_string());
        Self::save(&config)
    }

    pub fn clear_auth_token() -> InvoflowResult<()> {
        let mut config = Self::load()?;
        config.auth.token = None;
        Self::save(&config)
    }
}
