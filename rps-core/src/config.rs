use crate::error::{Result, RpsError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const BASE_SERVER_URL_ENV: &str = "RPS_BASE_SERVER_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_server_url: String,
    /// Wait between the user's pick and the computer's reveal
    pub reveal_delay: Duration,
    /// Wait between the reveal and the result
    pub resolve_delay: Duration,
    pub request_timeout: Duration,
    /// Play against a local random opponent instead of the server
    pub offline: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_server_url: "http://localhost:3000".to_string(),
            reveal_delay: Duration::from_millis(1500),
            resolve_delay: Duration::from_millis(500),
            request_timeout: Duration::from_secs(10),
            offline: false,
        }
    }
}

impl ClientConfig {
    pub fn new(base_server_url: impl Into<String>) -> Self {
        Self {
            base_server_url: base_server_url.into(),
            ..Self::default()
        }
    }

    /// Defaults with the server URL taken from `RPS_BASE_SERVER_URL` when set
    pub fn from_env() -> Self {
        match std::env::var(BASE_SERVER_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Zero delays, used where the reveal animation is not wanted
    pub fn without_delays(mut self) -> Self {
        self.reveal_delay = Duration::ZERO;
        self.resolve_delay = Duration::ZERO;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_server_url.is_empty() {
            return Err(RpsError::config("Base server URL cannot be empty"));
        }

        if !self.base_server_url.starts_with("http://")
            && !self.base_server_url.starts_with("https://")
        {
            return Err(RpsError::config(format!(
                "Base server URL must start with http:// or https://, got {}",
                self.base_server_url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(RpsError::config("Request timeout must be greater than 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reveal_delay, Duration::from_millis(1500));
        assert_eq!(config.resolve_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("localhost:3000").validate().is_err());
        assert!(ClientConfig::new("https://rps.example.com").validate().is_ok());
    }

    #[test]
    fn test_without_delays() {
        let config = ClientConfig::default().without_delays();
        assert!(config.reveal_delay.is_zero());
        assert!(config.resolve_delay.is_zero());
    }
}
