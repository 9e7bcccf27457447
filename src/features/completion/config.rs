//! # Generation Settings
//!
//! Per-mode sampling defaults and optional YAML overrides.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: YAML profile overrides with validation
//! - 1.0.0: Initial release with hardcoded settings

use crate::core::config::DEFAULT_MODEL;
use crate::features::styles::StyleMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sampling settings sent with one completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u64,
    pub top_p: f32,
    /// Always false; a complete string is wanted, not incremental delivery
    #[serde(default)]
    pub stream: bool,
}

impl GenerationConfig {
    /// Built-in settings for a mode
    pub fn for_mode(mode: StyleMode) -> Self {
        let (temperature, max_tokens) = match mode {
            StyleMode::Avatar => (0.5, 100),
            StyleMode::Poster => (0.5, 100),
            StyleMode::Product => (0.6, 200),
            StyleMode::Anime => (0.7, 400),
        };
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature,
            max_tokens,
            top_p: 1.0,
            stream: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(anyhow::anyhow!("Model identifier cannot be empty"));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(anyhow::anyhow!(
                "Temperature must be between 0 and 1, got {}",
                self.temperature
            ));
        }
        // Written so NaN fails the check
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(anyhow::anyhow!(
                "top_p must be in (0, 1], got {}",
                self.top_p
            ));
        }
        if self.max_tokens == 0 {
            return Err(anyhow::anyhow!("max_tokens must be greater than 0"));
        }
        if self.stream {
            return Err(anyhow::anyhow!("Streaming completions are not supported"));
        }
        Ok(())
    }
}

/// Optional per-mode overrides, every field may be omitted
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverride {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u64>,
    pub top_p: Option<f32>,
    pub stream: Option<bool>,
}

/// Root of the profiles YAML file
///
/// ```yaml
/// profiles:
///   avatar:
///     model: llama3-70b-8192
///     temperature: 0.6
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerationProfiles {
    #[serde(default)]
    pub profiles: HashMap<StyleMode, ProfileOverride>,
    /// Model applied to every mode before per-mode overrides
    #[serde(skip)]
    pub model_override: Option<String>,
}

impl GenerationProfiles {
    /// Load profiles from a YAML file
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let profiles: GenerationProfiles = serde_yaml::from_str(contents)?;
        profiles.validate()?;
        Ok(profiles)
    }

    /// Create an empty set of profiles (built-in defaults only)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Apply a deployment-wide model id under the per-mode overrides
    pub fn with_model_override(mut self, model: Option<String>) -> Self {
        self.model_override = model;
        self
    }

    /// Resolve the effective settings for a mode
    pub fn resolve(&self, mode: StyleMode) -> GenerationConfig {
        let mut config = GenerationConfig::for_mode(mode);
        if let Some(ref model) = self.model_override {
            config.model = model.clone();
        }
        if let Some(profile) = self.profiles.get(&mode) {
            if let Some(ref model) = profile.model {
                config.model = model.clone();
            }
            if let Some(temperature) = profile.temperature {
                config.temperature = temperature;
            }
            if let Some(max_tokens) = profile.max_tokens {
                config.max_tokens = max_tokens;
            }
            if let Some(top_p) = profile.top_p {
                config.top_p = top_p;
            }
            if let Some(stream) = profile.stream {
                config.stream = stream;
            }
        }
        config
    }

    /// Validate the resolved settings of every mode
    pub fn validate(&self) -> Result<()> {
        for mode in StyleMode::ALL {
            self.resolve(mode)
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid profile for {} mode: {}", mode.slug(), e))?;
        }
        Ok(())
    }
}
