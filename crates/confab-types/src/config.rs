//! Configuration types for Confab.
//!
//! `ChatConfig` represents the top-level `config.toml` that controls the
//! dialogue window size, the completion server endpoint, display labels,
//! and sampling parameters. All fields have sensible defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration for a Confab session.
///
/// Loaded from `~/.confab/config.toml`; every field falls back to a
/// default when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model name reported in the banner and passed to the engine.
    #[serde(default = "default_model")]
    pub model: String,

    /// Number of logical turns kept in the dialogue window. The window
    /// stores twice this many messages (one user + one assistant per turn).
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// Base URL of the llama.cpp-style completion server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Display label for user turns in the history view.
    #[serde(default = "default_user_label")]
    pub user_label: String,

    /// Display label for assistant turns in the history view.
    #[serde(default = "default_assistant_label")]
    pub assistant_label: String,

    /// Reply substituted when the engine returns empty text.
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,

    /// Sampling parameters forwarded opaquely to the engine.
    #[serde(default)]
    pub sampling: SamplingParams,
}

fn default_model() -> String {
    "tinyllama-1.1b-chat".to_string()
}

fn default_max_turns() -> usize {
    5
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_user_label() -> String {
    "User".to_string()
}

fn default_assistant_label() -> String {
    "Bot".to_string()
}

fn default_fallback_reply() -> String {
    "I'm not sure what to say.".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_turns: default_max_turns(),
            base_url: default_base_url(),
            user_label: default_user_label(),
            assistant_label: default_assistant_label(),
            fallback_reply: default_fallback_reply(),
            sampling: SamplingParams::default(),
        }
    }
}

/// Sampling knobs for the completion call.
///
/// The core never interprets these; they ride along to the engine adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Maximum number of new tokens per reply.
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_top_k")]
    pub top_k: u32,

    #[serde(default = "default_top_p")]
    pub top_p: f64,
}

fn default_max_new_tokens() -> u32 {
    60
}

fn default_temperature() -> f64 {
    0.7
}

fn default_top_k() -> u32 {
    50
}

fn default_top_p() -> f64 {
    0.95
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_default_values() {
        let config = ChatConfig::default();
        assert_eq!(config.max_turns, 5);
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.user_label, "User");
        assert_eq!(config.assistant_label, "Bot");
        assert_eq!(config.fallback_reply, "I'm not sure what to say.");
        assert_eq!(config.sampling.max_new_tokens, 60);
    }

    #[test]
    fn test_chat_config_deserialize_empty_uses_defaults() {
        let config: ChatConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, "tinyllama-1.1b-chat");
        assert_eq!(config.max_turns, 5);
        assert!((config.sampling.temperature - 0.7).abs() < f64::EPSILON);
        assert!((config.sampling.top_p - 0.95).abs() < f64::EPSILON);
        assert_eq!(config.sampling.top_k, 50);
    }

    #[test]
    fn test_chat_config_deserialize_with_values() {
        let toml_str = r#"
model = "qwen2-0.5b-instruct"
max_turns = 3
base_url = "http://localhost:9000"
assistant_label = "Confab"

[sampling]
max_new_tokens = 128
temperature = 0.2
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model, "qwen2-0.5b-instruct");
        assert_eq!(config.max_turns, 3);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.assistant_label, "Confab");
        // Unspecified fields keep their defaults
        assert_eq!(config.user_label, "User");
        assert_eq!(config.sampling.max_new_tokens, 128);
        assert!((config.sampling.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.sampling.top_k, 50);
    }

    #[test]
    fn test_chat_config_serde_roundtrip() {
        let config = ChatConfig {
            max_turns: 2,
            ..ChatConfig::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: ChatConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.max_turns, 2);
        assert_eq!(parsed.model, config.model);
    }
}
