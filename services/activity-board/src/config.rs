//! Configuration types for the activity board client

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub messages: MessageConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            messages: MessageConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Default configuration talking to the given origin
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// The API base as an absolute URL that paths can be appended to
    pub fn api_base_url(&self) -> crate::Result<Url> {
        let url = Url::parse(&self.api_base).map_err(|e| {
            crate::BoardError::Config(format!("Invalid api_base {:?}: {}", self.api_base, e))
        })?;
        if url.cannot_be_a_base() {
            return Err(crate::BoardError::Config(format!(
                "api_base {:?} cannot be used as a base URL",
                self.api_base
            )));
        }
        Ok(url)
    }
}

/// Static texts shown when a request fails without a server explanation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default = "default_load_failed")]
    pub load_failed: String,
    #[serde(default = "default_signup_failed")]
    pub signup_failed: String,
    #[serde(default = "default_unregister_failed")]
    pub unregister_failed: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            load_failed: default_load_failed(),
            signup_failed: default_signup_failed(),
            unregister_failed: default_unregister_failed(),
        }
    }
}

fn default_api_base() -> String {
    "http://localhost:8000".to_string()
}

fn default_load_failed() -> String {
    "Failed to load activities. Please try again later.".to_string()
}

fn default_signup_failed() -> String {
    "Failed to sign up. Please try again.".to_string()
}

fn default_unregister_failed() -> String {
    "Failed to unregister. Please try again.".to_string()
}

/// Parse configuration from a JSON document
pub fn parse_config(json: &str) -> crate::Result<BoardConfig> {
    let config: BoardConfig = serde_json::from_str(json)?;
    config.api_base_url()?;
    Ok(config)
}
