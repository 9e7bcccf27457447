//! Process configuration loaded from the environment
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.2.0: Explicit request timeout (LLM_TIMEOUT_SECS)
//! - 1.1.0: OPENAI_API_KEY accepted as fallback credential
//! - 1.0.0: Initial release

use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1/";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROFILES_PATH: &str = "profiles.yaml";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Model override applied to every mode; per-mode profiles still win
    pub model: Option<String>,
    pub request_timeout: Duration,
    pub log_level: String,
    pub profiles_path: String,
}

impl Config {
    /// Read configuration from process environment variables
    ///
    /// Fails when no API key is present so the host stops before any
    /// submission can be composed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("GROQ_API_KEY")
            .or_else(|| non_empty("OPENAI_API_KEY"))
            .ok_or_else(|| {
                anyhow::anyhow!("GROQ_API_KEY is not set (add it to the environment or .env)")
            })?;

        let request_timeout = match non_empty("LLM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid LLM_TIMEOUT_SECS '{}': {}", raw, e))?;
                if secs == 0 {
                    return Err(anyhow::anyhow!("LLM_TIMEOUT_SECS must be greater than 0"));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Config {
            api_key,
            base_url: non_empty("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty("LLM_MODEL"),
            request_timeout,
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            profiles_path: non_empty("PROFILES_CONFIG_PATH")
                .unwrap_or_else(|| DEFAULT_PROFILES_PATH.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        assert!(Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk_test")])).unwrap();
        assert_eq!(config.api_key, "gsk_test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, None);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.profiles_path, "profiles.yaml");
    }

    #[test]
    fn test_openai_key_fallback() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("LLM_BASE_URL", "http://localhost:11434/v1/"),
            ("LLM_MODEL", "llama3-70b-8192"),
            ("LLM_TIMEOUT_SECS", "5"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:11434/v1/");
        assert_eq!(config.model.as_deref(), Some("llama3-70b-8192"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_timeout() {
        let pairs = [("GROQ_API_KEY", "k"), ("LLM_TIMEOUT_SECS", "soon")];
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
        let pairs = [("GROQ_API_KEY", "k"), ("LLM_TIMEOUT_SECS", "0")];
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }
}
