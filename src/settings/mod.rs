//! Dashboard UI settings
//!
//! Theme and sidebar state used to live as loose browser flags. They are
//! modelled here as one settings object saved to a small JSON file.

use crate::core::error::SettingsError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color theme of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted dashboard settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub sidebar_collapsed: bool,

    /// Last save time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DashboardSettings {
    /// Load settings from `path`
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        if !path.exists() {
            tracing::warn!(path = %shown, "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: shown.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SettingsError::Malformed {
            path: shown,
            message: e.to_string(),
        })
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let io_error = |e: std::io::Error| SettingsError::Io {
            path: shown.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        self.updated_at = Some(Utc::now());
        let json = serde_json::to_string_pretty(self).map_err(|e| SettingsError::Malformed {
            path: shown.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(io_error)?;

        tracing::debug!(path = %shown, theme = ?self.theme, "settings saved");
        Ok(())
    }

    /// Switch between light and dark theme, returning the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Collapse or expand the sidebar, returning the new state
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.sidebar_collapsed);
    }

    #[test]
    fn test_toggles() {
        let mut settings = DashboardSettings::default();
        assert_eq!(settings.toggle_theme(), Theme::Dark);
        assert_eq!(settings.toggle_theme(), Theme::Light);
        assert!(settings.toggle_sidebar());
        assert!(!settings.toggle_sidebar());
    }

    #[test]
    fn test_json_shape() {
        let settings: DashboardSettings =
            serde_json::from_str(r#"{"theme":"dark","sidebarCollapsed":true}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert!(settings.sidebar_collapsed);
        assert!(settings.updated_at.is_none());
    }
}
