//! Configuration loader for Confab.
//!
//! Reads `config.toml` from an explicit path or from `~/.confab/` and
//! deserializes it into [`ChatConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use confab_types::config::ChatConfig;

/// Default config location: `~/.confab/config.toml`.
///
/// Returns `None` when the home directory cannot be resolved.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".confab").join("config.toml"))
}

/// Load configuration from the given path.
///
/// - If the file does not exist, returns [`ChatConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(path: &Path) -> ChatConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return ChatConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ChatConfig::default();
        }
    };

    match toml::from_str::<ChatConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ChatConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).await;
        assert_eq!(config.max_turns, 5);
        assert_eq!(config.assistant_label, "Bot");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
model = "phi-2"
max_turns = 2

[sampling]
max_new_tokens = 96
"#,
        )
        .await
        .unwrap();

        let config = load_config(&config_path).await;
        assert_eq!(config.model, "phi-2");
        assert_eq!(config.max_turns, 2);
        assert_eq!(config.sampling.max_new_tokens, 96);
        // Unspecified fields fall back to defaults
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(&config_path).await;
        assert_eq!(config.max_turns, 5);
    }
}
