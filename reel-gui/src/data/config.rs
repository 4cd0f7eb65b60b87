use std::{
    env::{self, VarError},
    fs::File,
    path::PathBuf,
};

use druid::{Data, Lens};
use platform_dirs::AppDirs;
use reel_core::catalog::CatalogConfig;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "Reel";
const CONFIG_FILENAME: &str = "config.json";
const API_KEY_ENV_VAR: &str = "REEL_API_KEY";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";

#[derive(Clone, Debug, Data, Lens, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub image_base: String,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: CatalogConfig::DEFAULT_API_BASE.to_string(),
            image_base: CatalogConfig::DEFAULT_IMAGE_BASE.to_string(),
            language: CatalogConfig::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        let file = File::open(&path).ok()?;
        log::info!("loading config: {:?}", &path);
        match serde_json::from_reader(file) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("failed to read config {:?}: {}", &path, err);
                None
            }
        }
    }

    /// The environment takes precedence over the stored key.
    pub fn api_key(&self) -> String {
        self.api_key_or(Self::env_var(API_KEY_ENV_VAR))
    }

    fn api_key_or(&self, env_key: Option<String>) -> String {
        env_key
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| self.api_key.clone())
    }

    pub fn proxy() -> Option<String> {
        Self::env_var(PROXY_ENV_VAR)
    }

    fn env_var(name: &str) -> Option<String> {
        env::var(name).map_or_else(
            |err| match err {
                VarError::NotPresent => None,
                VarError::NotUnicode(_) => {
                    log::error!("{name} is not a valid unicode");
                    None
                }
            },
            Some,
        )
    }

    pub fn catalog(&self) -> CatalogConfig {
        CatalogConfig {
            api_key: self.api_key(),
            api_base: self.api_base.clone(),
            image_base: self.image_base.clone(),
            language: self.language.clone(),
            proxy_url: Self::proxy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "language": "de-DE" }"#).unwrap();
        assert_eq!(config.language, "de-DE");
        assert_eq!(config.api_base, CatalogConfig::DEFAULT_API_BASE);
        assert_eq!(config.image_base, CatalogConfig::DEFAULT_IMAGE_BASE);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn blank_env_key_falls_back_to_file() {
        let config = Config {
            api_key: "file".into(),
            ..Config::default()
        };
        assert_eq!(config.api_key_or(Some("env".into())), "env");
        assert_eq!(config.api_key_or(Some(String::new())), "file");
        assert_eq!(config.api_key_or(Some("  \t".into())), "file");
        assert_eq!(config.api_key_or(None), "file");
    }

    #[test]
    fn env_key_overrides_file_key() {
        let config = Config {
            api_key: "file".into(),
            ..Config::default()
        };
        env::set_var(API_KEY_ENV_VAR, "from-env");
        let overridden = config.api_key();
        let catalog_key = config.catalog().api_key;
        env::set_var(API_KEY_ENV_VAR, "   ");
        let blank = config.api_key();
        env::remove_var(API_KEY_ENV_VAR);
        let unset = config.api_key();

        assert_eq!(overridden, "from-env");
        assert_eq!(catalog_key, "from-env");
        assert_eq!(blank, "file");
        assert_eq!(unset, "file");
    }

    #[test]
    fn catalog_config_carries_file_settings() {
        let config = Config {
            api_base: "http://localhost:8080".into(),
            ..Config::default()
        };
        let catalog = config.catalog();
        assert_eq!(catalog.api_base, "http://localhost:8080");
        assert_eq!(catalog.language, CatalogConfig::DEFAULT_LANGUAGE);
    }
}
