//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Every field has a
//! default, so a partial `settings.toml` only needs the keys it overrides.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// LlmConfig
// ---------------------------------------------------------------------------

/// Settings for the chat-completions backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the API endpoint (e.g. `https://api.openai.com`).
    pub base_url: String,
    /// Name of the environment variable holding the bearer credential.
    pub api_key_env: String,
    /// API key stored in the settings file.  Only used when the environment
    /// variable named by `api_key_env` is unset or empty.
    pub api_key: Option<String>,
    /// Model identifier sent with every request.
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).  Lower = more deterministic.
    pub temperature: f32,
    /// Upper bound on generated tokens per reply.
    pub max_tokens: u32,
    /// Maximum seconds to wait for a single HTTP round-trip.
    pub timeout_secs: u64,
    /// Total attempts per request (first try included).
    pub retry_attempts: u32,
    /// Fixed pause between attempts, in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".into(),
            api_key_env: "API_KEY".into(),
            api_key: None,
            model: "gpt-3.5-turbo".into(),
            temperature: 0.2,
            max_tokens: 500,
            timeout_secs: 30,
            retry_attempts: 3,
            retry_delay_ms: 2_000,
        }
    }
}

impl LlmConfig {
    /// Resolve the bearer credential: the environment variable wins, the
    /// settings-file key is the fallback.  Empty strings count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                self.api_key
                    .clone()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

// ---------------------------------------------------------------------------
// TutorConfig
// ---------------------------------------------------------------------------

/// Words to practise and the rules of a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Language the prompted words are written in.
    pub native_language: String,
    /// Language the user translates into and writes sentences in.
    pub target_language: String,
    /// Native-language words, practised in order and cycled forever.
    pub words: Vec<String>,
    /// Minimum number of whitespace-separated tokens in a sentence.
    pub min_sentence_words: usize,
    /// How many times the user is asked again when the word is missing from
    /// their sentence.
    pub presence_retries: u32,
}

impl Default for TutorConfig {
    fn default() -> Self {
        let words = [
            "apple", "run", "dog", "write", "book", "dance", "tree", "jump", "ocean", "swim",
            "cat", "sing", "on", "with", "under",
        ];
        Self {
            native_language: "English".into(),
            target_language: "Italian".into(),
            words: words.iter().map(|w| w.to_string()).collect(),
            min_sentence_words: 4,
            presence_retries: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use vocab_tutor::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Chat-completions backend settings.
    pub llm: LlmConfig,
    /// Vocabulary and turn rules.
    pub tutor: TutorConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// so callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
