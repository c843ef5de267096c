use super::*;

use std::{collections::HashMap, fs};

fn write_settings(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(SETTINGS_FILE_NAME);
    fs::write(&path, contents).expect("write settings");
    (dir, path)
}

#[test]
fn defaults_match_chrome_config_defaults() {
    let settings = ChromeSettings::default();
    assert_eq!(settings.chrome_config(), ChromeConfig::default());
    assert_eq!(settings.title_bar_height, 30.0);
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let (_dir, path) = write_settings(
        r#"
title = "Inventory"
resizable = false
width = 640.0
"#,
    );

    let settings = load_settings_from(&path).expect("load");
    assert_eq!(settings.title, "Inventory");
    assert!(!settings.resizable);
    assert_eq!(settings.width, 640.0);
    assert_eq!(settings.height, 600.0);
    assert!(!settings.osx_buttons);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_settings_from(&dir.path().join("absent.toml")).expect_err("missing");
    assert!(matches!(err, ChromeError::SettingsRead { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let (_dir, path) = write_settings("resizable = \"sometimes\"");
    let err = load_settings_from(&path).expect_err("malformed");
    assert!(matches!(err, ChromeError::SettingsParse { .. }));
}

#[test]
fn explicit_unreadable_path_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = load_settings(Some(&dir.path().join("nope.toml")));
    assert_eq!(settings.width, ChromeSettings::default().width);
}

#[test]
fn env_overrides_replace_file_values() {
    let env: HashMap<&str, &str> = [
        ("APP__TITLE", "From env"),
        ("APP__RESIZABLE", "no"),
        ("APP__OSX_BUTTONS", "1"),
        ("APP__LOGO", "logo.png"),
    ]
    .into_iter()
    .collect();

    let mut settings = ChromeSettings::default();
    settings.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

    let config = settings.chrome_config();
    assert_eq!(settings.title, "From env");
    assert!(!config.resizable);
    assert!(config.osx_button_order);
    assert_eq!(config.logo, Some(PathBuf::from("logo.png")));
}

#[test]
fn non_boolean_override_is_ignored() {
    let mut settings = ChromeSettings::default();
    settings.apply_overrides(|name| (name == "APP__RESIZABLE").then(|| "maybe".to_string()));
    assert!(settings.resizable);
}
