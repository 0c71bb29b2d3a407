use std::env;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.github.com/";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub api_base: Url,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GITHUB_API_BASE must be a valid absolute URL")]
    InvalidApiBase,
}

impl Config {
    // A missing GITHUB_TOKEN is not an error here; it surfaces as a failure
    // on the first remote call.
    pub fn from_env() -> Result<Self, ConfigError> {
        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let api_base = env::var("GITHUB_API_BASE")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = api_base
            .parse::<Url>()
            .map_err(|_| ConfigError::InvalidApiBase)?;
        if api_base.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiBase);
        }

        Ok(Self {
            github_token,
            api_base,
        })
    }
}
