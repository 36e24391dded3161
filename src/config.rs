use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub openai_api_base: Option<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    /// Fails when no provider credential is present.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .or_else(|| lookup("openai_key"))
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigurationError(
                    "OPENAI_API_KEY is not set. Export it or add it to .env before starting."
                        .to_string(),
                )
            })?;

        Ok(Self {
            openai_api_key: SecretString::from(openai_api_key),
            openai_model: lookup("OPENAI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_temperature: lookup("OPENAI_TEMPERATURE")
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
            openai_api_base: lookup("OPENAI_API_BASE").filter(|b| !b.trim().is_empty()),
            web_server_host: lookup("WEB_SERVER_HOST")
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test-key".to_string()),
            openai_model: DEFAULT_MODEL.to_string(),
            openai_temperature: DEFAULT_TEMPERATURE,
            openai_api_base: Some("http://127.0.0.1:9".to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
