//! Configuration loading and management

use crate::core::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (e.g. "127.0.0.1:3000")
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Where the result records are loaded from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// JSON file with the record array (optional)
    #[serde(default)]
    pub path: Option<String>,
}

/// Where dashboard settings are persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default = "default_settings_path")]
    pub path: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            path: default_settings_path(),
        }
    }
}

/// Chat assistant endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Assistant URL; chat is disabled when absent
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_chat_timeout")]
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_chat_timeout(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_settings_path() -> String {
    "leadger-settings.json".to_string()
}

fn default_chat_timeout() -> u64 {
    30
}

/// Complete dashboard configuration
///
/// Every section is optional in YAML and falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadgerConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub records: RecordsConfig,

    #[serde(default)]
    pub settings: SettingsConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

impl LeadgerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that YAML typing alone cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind".to_string(),
                value: self.server.bind.clone(),
                message: "expected a socket address like 127.0.0.1:3000".to_string(),
            });
        }

        if self.chat.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chat.timeout_secs".to_string(),
                value: "0".to_string(),
                message: "timeout must be at least one second".to_string(),
            });
        }

        Ok(())
    }

    /// Create a default configuration for local development
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            records: RecordsConfig {
                path: Some("students.json".to_string()),
            },
            settings: SettingsConfig::default(),
            chat: ChatConfig {
                endpoint: Some("http://127.0.0.1:5000/chat".to_string()),
                timeout_secs: default_chat_timeout(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LeadgerConfig::default_config();

        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert!(config.chat.endpoint.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = LeadgerConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        // Should be able to parse it back
        let parsed = LeadgerConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = LeadgerConfig::default();
        config.chat.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
