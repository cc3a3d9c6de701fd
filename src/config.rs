// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{CollectorError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.harvardartmuseums.org";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub vocabulary_page_size: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub response_ordering: ResponseOrdering,
}

/// How overlapping in-flight queries settle into the shared result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Whichever response resolves last overwrites the results.
    #[default]
    LastToResolve,
    /// Responses older than the most recently issued query are dropped.
    LatestIssued,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ART_COLLECTOR")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| CollectorError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| CollectorError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                api_key: None,
                timeout_secs: 30,
                vocabulary_page_size: 100,
            },
            search: SearchConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CollectorError::Config(
                "api.base_url must not be empty".to_string(),
            ));
        }

        if self.api.timeout_secs == 0 {
            return Err(CollectorError::Config(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.api.vocabulary_page_size == 0 {
            return Err(CollectorError::Config(
                "api.vocabulary_page_size must be greater than 0".to_string(),
            ));
        }

        if self.api.api_key.as_deref().is_none_or(str::is_empty) {
            warn!("No api.api_key configured, requests will likely be rejected");
        }

        Ok(())
    }
}
