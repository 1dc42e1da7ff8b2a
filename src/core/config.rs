//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vlrent/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VlConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub pickup_location: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ASSISTANT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_ASSISTANT_MODEL: &str = "google/gemini-flash-1.5";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub pickup_location: String,
    pub currency: String,
    /// None = run the assistant in offline mode.
    pub assistant_api_key: Option<String>,
    pub assistant_base_url: String,
    pub assistant_model: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.vlrent/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vlrent").join("config.toml"))
}

/// Load config from `~/.vlrent/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VlConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VlConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VlConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VlConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: VlConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# VL Rent a Car Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# pickup_location = "Colombo 03 (Main Office)"
# currency = "LKR"

# [assistant]
# api_key = "sk-or-..."              # Or set OPENROUTER_API_KEY env var
# base_url = "https://openrouter.ai/api/v1"
# model = "google/gemini-flash-1.5"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_offline` (from `--offline`) forces the assistant offline by dropping
/// any configured API key.
pub fn resolve(config: &VlConfig, cli_offline: bool) -> ResolvedConfig {
    // API key: CLI offline switch → env → config
    let assistant_api_key = if cli_offline {
        None
    } else {
        std::env::var("OPENROUTER_API_KEY")
            .ok()
            .or_else(|| config.assistant.api_key.clone())
    };

    // Base URL: env → config → default
    let assistant_base_url = std::env::var("VLRENT_ASSISTANT_BASE_URL")
        .ok()
        .or_else(|| config.assistant.base_url.clone())
        .unwrap_or_else(|| DEFAULT_ASSISTANT_BASE_URL.to_string());

    // Model: env → config → default
    let assistant_model = std::env::var("VLRENT_ASSISTANT_MODEL")
        .ok()
        .or_else(|| config.assistant.model.clone())
        .unwrap_or_else(|| DEFAULT_ASSISTANT_MODEL.to_string());

    ResolvedConfig {
        pickup_location: config
            .general
            .pickup_location
            .clone()
            .unwrap_or_else(|| crate::core::catalog::PICKUP_LOCATION.to_string()),
        currency: config
            .general
            .currency
            .clone()
            .unwrap_or_else(|| "LKR".to_string()),
        assistant_api_key,
        assistant_base_url,
        assistant_model,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = VlConfig::default();
        assert!(config.general.pickup_location.is_none());
        assert!(config.assistant.api_key.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = VlConfig::default();
        let resolved = resolve(&config, true);
        assert_eq!(resolved.currency, "LKR");
        assert_eq!(resolved.pickup_location, "Colombo 03 (Main Office)");
        assert_eq!(resolved.assistant_base_url, DEFAULT_ASSISTANT_BASE_URL);
        assert_eq!(resolved.assistant_model, DEFAULT_ASSISTANT_MODEL);
    }

    #[test]
    fn test_resolve_offline_flag_drops_api_key() {
        let config = VlConfig {
            assistant: AssistantConfig {
                api_key: Some("sk-test".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, true);
        assert!(resolved.assistant_api_key.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = VlConfig {
            general: GeneralConfig {
                pickup_location: Some("Kandy Branch".to_string()),
                currency: Some("USD".to_string()),
            },
            assistant: AssistantConfig {
                api_key: Some("sk-test".to_string()),
                base_url: Some("http://localhost:9999/v1".to_string()),
                model: Some("my-model".to_string()),
            },
        };
        let resolved = resolve(&config, false);
        assert_eq!(resolved.pickup_location, "Kandy Branch");
        assert_eq!(resolved.currency, "USD");
        assert_eq!(resolved.assistant_base_url, "http://localhost:9999/v1");
        assert_eq!(resolved.assistant_model, "my-model");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[assistant]
model = "my-model"
"#;
        let config: VlConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.assistant.model.as_deref(), Some("my-model"));
        assert!(config.assistant.api_key.is_none());
        assert!(config.general.currency.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
pickup_location = "Colombo 03 (Main Office)"
currency = "LKR"

[assistant]
api_key = "sk-test-123"
base_url = "http://127.0.0.1:1234/v1"
model = "google/gemini-flash-1.5"
"#;
        let config: VlConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.currency.as_deref(), Some("LKR"));
        assert_eq!(config.assistant.api_key.as_deref(), Some("sk-test-123"));
        assert_eq!(
            config.assistant.base_url.as_deref(),
            Some("http://127.0.0.1:1234/v1")
        );
    }
}
