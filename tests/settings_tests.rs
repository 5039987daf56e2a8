//! Tests for persisted dashboard settings

use leadger::prelude::*;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = DashboardSettings::load(dir.path().join("absent.json")).unwrap();

    assert_eq!(settings.theme, Theme::Light);
    assert!(!settings.sidebar_collapsed);
    assert!(settings.updated_at.is_none());
}

#[test]
fn test_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = DashboardSettings::default();
    assert_eq!(settings.toggle_theme(), Theme::Dark);
    assert!(settings.toggle_sidebar());
    settings.save(&path).unwrap();

    let loaded = DashboardSettings::load(&path).unwrap();
    assert_eq!(loaded.theme, Theme::Dark);
    assert!(loaded.sidebar_collapsed);
    assert!(loaded.updated_at.is_some());
    assert_eq!(loaded, settings);
}

#[test]
fn test_saved_file_uses_dashboard_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = DashboardSettings::default();
    settings.toggle_sidebar();
    settings.save(&path).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["theme"], "light");
    assert_eq!(raw["sidebarCollapsed"], true);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

    let settings = DashboardSettings::load(&path).unwrap();
    assert_eq!(settings.theme, Theme::Dark);
    assert!(!settings.sidebar_collapsed);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json").unwrap();

    let err = DashboardSettings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Malformed { .. }));

    let err: LeadgerError = err.into();
    assert_eq!(err.error_code(), "SETTINGS_ERROR");
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut settings = DashboardSettings::default();
    settings.toggle_theme();
    settings.toggle_theme();
    settings.toggle_sidebar();
    settings.toggle_sidebar();
    assert_eq!(settings, DashboardSettings::default());
}

#[test]
fn test_load_and_save_log_the_settings_path() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = DashboardSettings::load(&path).unwrap();
        assert_eq!(settings, DashboardSettings::default());

        settings.toggle_theme();
        settings.save(&path).unwrap();
        assert_eq!(DashboardSettings::load(&path).unwrap().theme, Theme::Dark);
    });
}
