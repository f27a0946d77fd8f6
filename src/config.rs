// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{SearchError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub max_results_shown: usize,
    pub snippet_width: usize,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default("backend.base_url", defaults.backend.base_url)
            .and_then(|b| b.set_default("backend.timeout_secs", defaults.backend.timeout_secs))
            .and_then(|b| {
                b.set_default(
                    "session.path",
                    defaults.session.path.display().to_string(),
                )
            })
            .and_then(|b| {
                b.set_default(
                    "display.max_results_shown",
                    defaults.display.max_results_shown as u64,
                )
            })
            .and_then(|b| b.set_default("display.snippet_width", defaults.display.snippet_width as u64))
            .map_err(|e| SearchError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("NEWS_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_secs: 10,
            },
            session: SessionConfig {
                path: std::env::temp_dir()
                    .join("news_search")
                    .join("session.json"),
            },
            display: DisplayConfig {
                max_results_shown: 10,
                snippet_width: 300,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        let base_url = &self.backend.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SearchError::Config(format!(
                "backend.base_url must be an http(s) URL: {}",
                base_url
            )));
        }

        if self.backend.timeout_secs == 0 {
            return Err(SearchError::Config(
                "backend.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.session.path.as_os_str().is_empty() {
            return Err(SearchError::Config(
                "session.path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
