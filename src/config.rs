//! Tunable knobs for matching, confidence and simulated latency.
//!
//! Every value has a default matching the shipped assistant, and every
//! field is optional in the JSON file, so a config only needs to name
//! what it overrides:
//!
//! ```
//! use admitbot::config::AssistantConfig;
//!
//! let config: AssistantConfig =
//!     serde_json::from_str(r#"{"matcher": {"top_n": 5}}"#).unwrap();
//! assert_eq!(config.matcher.top_n, 5);
//! assert_eq!(config.matcher.min_token_len, 2);
//! assert_eq!(config.faq.score_threshold, 2);
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const CONFIG_ENV_VAR: &str = "ADMITBOT_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub matcher: MatcherConfig,
    pub faq: FaqConfig,
    pub confidence: ConfidenceConfig,
    pub latency: LatencyConfig,
    pub generation: GenerationConfig,
    /// JSON catalog replacing the built-in knowledge entries.
    pub catalog: Option<PathBuf>,
}

/// Knowledge-store matcher settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Query tokens are kept only when longer than this many characters.
    pub min_token_len: usize,
    /// Number of ranked entries handed to the synthesizer.
    pub top_n: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_token_len: 2,
            top_n: 3,
        }
    }
}

/// FAQ keyword scorer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqConfig {
    /// Input words are kept only when longer than this many characters.
    pub min_token_len: usize,
    /// A best match is returned only when its score exceeds this.
    pub score_threshold: u32,
    pub question_weight: u32,
    pub answer_weight: u32,
    pub category_weight: u32,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            min_token_len: 3,
            score_threshold: 2,
            question_weight: 3,
            answer_weight: 2,
            category_weight: 1,
        }
    }
}

/// Constants of `min(cap, base + per_document * n)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    pub base: f32,
    pub per_document: f32,
    pub cap: f32,
    /// Confidence of the default response, when no document matched.
    pub fallback: f32,
    /// Answers below this confidence get the contact-the-office notice.
    pub disclaimer_below: f32,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            base: 0.5,
            per_document: 0.15,
            cap: 0.9,
            fallback: 0.3,
            disclaimer_below: 0.7,
        }
    }
}

/// Artificial delays emulating a remote service, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub rag_ms: u64,
    pub generation_ms: u64,
    pub reply_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            rag_ms: 1000,
            generation_ms: 1200,
            reply_ms: 1500,
        }
    }
}

impl LatencyConfig {
    pub fn none() -> Self {
        Self {
            rag_ms: 0,
            generation_ms: 0,
            reply_ms: 0,
        }
    }

    pub fn rag(&self) -> Duration {
        Duration::from_millis(self.rag_ms)
    }

    pub fn generation(&self) -> Duration {
        Duration::from_millis(self.generation_ms)
    }

    pub fn reply(&self) -> Duration {
        Duration::from_millis(self.reply_ms)
    }
}

/// Settings of the simulated text-generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model_id: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Parameters attached to requests that do not carry their own.
    pub parameters: GenerationParameters,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: "demo-api-key".to_string(),
            endpoint: "https://us-south.ml.cloud.ibm.com/ml/v1-beta/generation/text"
                .to_string(),
            model_id: "ibm/granite-13b-chat-v2".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            parameters: GenerationParameters::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    pub temperature: f32,
    pub max_new_tokens: u32,
    pub min_new_tokens: u32,
    pub repetition_penalty: f32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_new_tokens: 300,
            min_new_tokens: 50,
            repetition_penalty: 1.05,
        }
    }
}

impl AssistantConfig {
    /// Resolve the configuration from, in order of priority:
    /// 1. An explicit path (from --config), which must exist
    /// 2. The ADMITBOT_CONFIG environment variable, which must exist
    /// 3. `config.json` in the XDG config directory, if present
    /// 4. Built-in defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(val) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&val));
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigFile(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Reject settings that would make every answer degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.matcher.top_n == 0 {
            return Err(Error::Config("matcher.top_n must be at least 1".into()));
        }

        let c = &self.confidence;
        for (name, value) in [
            ("base", c.base),
            ("per_document", c.per_document),
            ("cap", c.cap),
            ("fallback", c.fallback),
            ("disclaimer_below", c.disclaimer_below),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "confidence.{name} must be within [0, 1], got {value}"
                )));
            }
        }

        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("admitbot")
        .get_config_home()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_assistant() {
        let config = AssistantConfig::default();
        assert_eq!(config.matcher.min_token_len, 2);
        assert_eq!(config.matcher.top_n, 3);
        assert_eq!(config.faq.min_token_len, 3);
        assert_eq!(config.faq.score_threshold, 2);
        assert_eq!(config.confidence.fallback, 0.3);
        assert_eq!(config.latency.reply_ms, 1500);
        assert_eq!(config.generation.model_id, "ibm/granite-13b-chat-v2");
        assert!(config.catalog.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn load_with_explicit_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"faq": {"score_threshold": 4}, "latency": {"rag_ms": 0}}"#,
        )
        .unwrap();

        let config = AssistantConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.faq.score_threshold, 4);
        assert_eq!(config.faq.question_weight, 3);
        assert_eq!(config.latency.rag_ms, 0);
        assert_eq!(config.latency.generation_ms, 1200);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.json");
        let err = AssistantConfig::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigFile(p) if p == path));
    }

    #[test]
    fn rejects_out_of_range_confidence() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{"confidence": {"cap": 1.5}}"#).unwrap();

        let err = AssistantConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("confidence.cap"));
    }

    #[test]
    fn rejects_zero_top_n() {
        let mut config = AssistantConfig::default();
        config.matcher.top_n = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn latency_none_is_zero() {
        let latency = LatencyConfig::none();
        assert_eq!(latency.rag(), Duration::ZERO);
        assert_eq!(latency.generation(), Duration::ZERO);
        assert_eq!(latency.reply(), Duration::ZERO);
    }
}
