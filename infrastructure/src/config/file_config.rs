//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types where
//! a use case needs them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use storefront_application::LatencyConfig;
use thiserror::Error;

/// Upper bound for any configured delay
pub const MAX_LATENCY_MS: u64 = 60_000;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("catalog.path cannot be empty")]
    EmptyCatalogPath,

    #[error("latency.{field} = {ms}ms exceeds the {max}ms limit", max = MAX_LATENCY_MS)]
    LatencyTooLarge { field: &'static str, ms: u64 },
}

/// Raw latency configuration from TOML (milliseconds)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLatencyConfig {
    pub catalog_ms: u64,
    pub product_ms: u64,
    pub reviews_ms: u64,
    pub auth_ms: u64,
    pub chat_ms: u64,
}

impl Default for FileLatencyConfig {
    fn default() -> Self {
        let defaults = LatencyConfig::default();
        Self {
            catalog_ms: defaults.catalog.as_millis() as u64,
            product_ms: defaults.product.as_millis() as u64,
            reviews_ms: defaults.reviews.as_millis() as u64,
            auth_ms: defaults.auth.as_millis() as u64,
            chat_ms: defaults.chat.as_millis() as u64,
        }
    }
}

impl FileLatencyConfig {
    pub fn to_latency(&self) -> LatencyConfig {
        LatencyConfig::none()
            .with_catalog(Duration::from_millis(self.catalog_ms))
            .with_product(Duration::from_millis(self.product_ms))
            .with_reviews(Duration::from_millis(self.reviews_ms))
            .with_auth(Duration::from_millis(self.auth_ms))
            .with_chat(Duration::from_millis(self.chat_ms))
    }

    fn fields(&self) -> [(&'static str, u64); 5] {
        [
            ("catalog_ms", self.catalog_ms),
            ("product_ms", self.product_ms),
            ("reviews_ms", self.reviews_ms),
            ("auth_ms", self.auth_ms),
            ("chat_ms", self.chat_ms),
        ]
    }
}

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// JSON catalog to load instead of the built-in one
    pub path: Option<PathBuf>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw chat configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Open conversations with the assistant greeting
    pub greeting: bool,
    /// Path to the shop REPL history file
    pub history_file: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            greeting: true,
            history_file: None,
        }
    }
}

impl FileChatConfig {
    /// History file path with a leading `~/` resolved against the home directory
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .as_deref()
            .map(|raw| expand_home(raw, dirs::home_dir()))
    }
}

fn expand_home(raw: &str, home: Option<PathBuf>) -> PathBuf {
    match (raw.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        (None, Some(home)) if raw == "~" => home,
        _ => PathBuf::from(raw),
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Artificial gateway delays
    pub latency: FileLatencyConfig,
    /// Catalog source
    pub catalog: FileCatalogConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Shop REPL settings
    pub chat: FileChatConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(path) = &self.catalog.path
            && path.as_os_str().is_empty()
        {
            return Err(ConfigValidationError::EmptyCatalogPath);
        }

        for (field, ms) in self.latency.fields() {
            if ms > MAX_LATENCY_MS {
                return Err(ConfigValidationError::LatencyTooLarge { field, ms });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[latency]
catalog_ms = 10
product_ms = 20
reviews_ms = 30
auth_ms = 40
chat_ms = 50

[catalog]
path = "data/catalog.json"

[output]
color = false

[chat]
greeting = false
history_file = "~/.local/share/storefront/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.latency.chat_ms, 50);
        assert_eq!(
            config.catalog.path,
            Some(PathBuf::from("data/catalog.json"))
        );
        assert!(!config.output.color);
        assert!(!config.chat.greeting);
        assert!(config.chat.history_file.is_some());

        let latency = config.latency.to_latency();
        assert_eq!(latency.catalog, Duration::from_millis(10));
        assert_eq!(latency.chat, Duration::from_millis(50));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[latency]
chat_ms = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.latency.chat_ms, 0);
        assert_eq!(config.latency.catalog_ms, 500);
        assert!(config.output.color);
        assert!(config.chat.greeting);
    }

    #[test]
    fn test_default_latency_matches_application_default() {
        let config = FileConfig::default();
        assert_eq!(config.latency.to_latency(), LatencyConfig::default());
    }

    #[test]
    fn test_history_path_expands_home() {
        let home = PathBuf::from("/home/shopper");
        assert_eq!(
            expand_home("~/.local/share/storefront/history.txt", Some(home.clone())),
            home.join(".local/share/storefront/history.txt")
        );
        assert_eq!(
            expand_home("/var/tmp/history.txt", Some(home.clone())),
            PathBuf::from("/var/tmp/history.txt")
        );
        assert_eq!(
            expand_home("notes/~/history.txt", Some(home)),
            PathBuf::from("notes/~/history.txt")
        );
        assert_eq!(
            expand_home("~/history.txt", None),
            PathBuf::from("~/history.txt")
        );
    }

    #[test]
    fn test_history_path_unset() {
        assert!(FileChatConfig::default().history_path().is_none());

        let chat = FileChatConfig {
            history_file: Some("~/history.txt".to_string()),
            ..FileChatConfig::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(chat.history_path(), Some(home.join("history.txt")));
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_catalog_path() {
        let mut config = FileConfig::default();
        config.catalog.path = Some(PathBuf::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyCatalogPath)
        ));
    }

    #[test]
    fn test_validate_latency_limit() {
        let mut config = FileConfig::default();
        config.latency.auth_ms = MAX_LATENCY_MS + 1;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigValidationError::LatencyTooLarge {
                field: "auth_ms",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "latency.auth_ms = 60001ms exceeds the 60000ms limit"
        );
    }
}
