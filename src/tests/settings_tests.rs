// Settings Tests - Testing DisplaySettings defaults, persistence and validation

use crate::settings::*;
use crate::Error;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_settings_default() {
    let settings = DisplaySettings::default();

    assert_eq!(settings.time_zone_label, "Asia/Karachi");
    assert_eq!(settings.utc_offset_minutes, 300);
    assert_eq!(settings.zone().local_minus_utc(), 5 * 3600);
}

#[test]
fn test_settings_save_and_load() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp_file.path();

    let settings = DisplaySettings {
        time_zone_label: "America/Sao_Paulo".to_string(),
        utc_offset_minutes: -180,
    };
    settings.save(path).expect("Failed to save settings");

    let loaded = DisplaySettings::load(path).expect("Failed to load settings");
    assert_eq!(loaded, settings);
    assert_eq!(loaded.zone().local_minus_utc(), -3 * 3600);
}

#[test]
fn test_settings_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.json");

    let settings = DisplaySettings::load(&path).expect("Failed to load settings");
    assert_eq!(settings, DisplaySettings::default());
}

#[test]
fn test_settings_load_empty_file() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");

    let settings = DisplaySettings::load(temp_file.path()).expect("Failed to load settings");
    assert_eq!(settings, DisplaySettings::default());
}

#[test]
fn test_settings_save_creates_directories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config").join("display.json");

    DisplaySettings::default().save(&path).expect("Failed to save settings");
    assert!(path.exists());
}

#[test]
fn test_settings_load_invalid_json() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp_file.path(), "{ not json").expect("Failed to write");

    let result = DisplaySettings::load(temp_file.path());
    assert!(matches!(result, Err(Error::Settings(_))));
}

#[test]
fn test_settings_load_rejects_out_of_range_offset() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(
        temp_file.path(),
        r#"{"time_zone_label": "Nowhere", "utc_offset_minutes": 1500}"#,
    )
    .expect("Failed to write");

    let result = DisplaySettings::load(temp_file.path());
    assert!(matches!(result, Err(Error::Settings(_))));
}

#[test]
fn test_set_utc_offset_minutes() {
    let mut settings = DisplaySettings::default();

    settings.set_utc_offset_minutes(0).expect("Failed to set offset");
    assert_eq!(settings.zone().local_minus_utc(), 0);

    settings
        .set_utc_offset_minutes(MAX_UTC_OFFSET_MINUTES)
        .expect("Failed to set offset");
    assert_eq!(settings.zone().local_minus_utc(), 18 * 3600);

    assert!(settings.set_utc_offset_minutes(MAX_UTC_OFFSET_MINUTES + 1).is_err());
    assert!(settings.set_utc_offset_minutes(i32::MIN).is_err());
    // Rejected values leave the setting untouched
    assert_eq!(settings.utc_offset_minutes, MAX_UTC_OFFSET_MINUTES);
}

#[test]
fn test_zone_clamps_unvalidated_offset() {
    let settings = DisplaySettings {
        time_zone_label: "Manual".to_string(),
        utc_offset_minutes: 10_000,
    };
    assert_eq!(settings.zone().local_minus_utc(), MAX_UTC_OFFSET_MINUTES * 60);
}
