use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::ChromeError;

pub const SETTINGS_FILE_NAME: &str = "chrome.toml";
const SETTINGS_DIR_NAME: &str = "modern_chrome";

/// Immutable per-instance chrome options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeConfig {
    /// Enables maximize/restore and free resizing.
    pub resizable: bool,
    /// Close/minimize/maximize on the left, as on macOS.
    pub osx_button_order: bool,
    /// Optional leading icon for the title bar.
    pub logo: Option<PathBuf>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            resizable: true,
            osx_button_order: false,
            logo: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
    pub osx_buttons: bool,
    pub logo: Option<PathBuf>,
    pub title_bar_height: f32,
    /// Used until the host reports the real monitor size.
    pub fallback_screen_width: f32,
    pub fallback_screen_height: f32,
}

impl Default for ChromeSettings {
    fn default() -> Self {
        Self {
            title: "Modern Window".into(),
            width: 800.0,
            height: 600.0,
            resizable: true,
            osx_buttons: false,
            logo: None,
            title_bar_height: 30.0,
            fallback_screen_width: 1920.0,
            fallback_screen_height: 1080.0,
        }
    }
}

impl ChromeSettings {
    pub fn chrome_config(&self) -> ChromeConfig {
        ChromeConfig {
            resizable: self.resizable,
            osx_button_order: self.osx_buttons,
            logo: self.logo.clone(),
        }
    }

    /// Applies `APP__*` overrides. `lookup` is `std::env::var` in production.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("APP__TITLE") {
            self.title = v;
        }
        if let Some(v) = lookup("APP__RESIZABLE") {
            match parse_flag(&v) {
                Some(flag) => self.resizable = flag,
                None => tracing::warn!(value = %v, "ignoring non-boolean APP__RESIZABLE"),
            }
        }
        if let Some(v) = lookup("APP__OSX_BUTTONS") {
            match parse_flag(&v) {
                Some(flag) => self.osx_buttons = flag,
                None => tracing::warn!(value = %v, "ignoring non-boolean APP__OSX_BUTTONS"),
            }
        }
        if let Some(v) = lookup("APP__LOGO") {
            self.logo = if v.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(v))
            };
        }
    }
}

pub fn load_settings_from(path: &Path) -> Result<ChromeSettings, ChromeError> {
    let raw = fs::read_to_string(path).map_err(|source| ChromeError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<ChromeSettings>(&raw).map_err(|source| ChromeError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads settings from `explicit`, or the first `chrome.toml` found in the
/// working directory or the user config directory, then applies environment
/// overrides. Unreadable files fall back to defaults.
pub fn load_settings(explicit: Option<&Path>) -> ChromeSettings {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => default_settings_paths().into_iter().find(|p| p.exists()),
    };

    let mut settings = match path {
        Some(path) => match load_settings_from(&path) {
            Ok(settings) => {
                tracing::debug!(path = %path.display(), "loaded chrome settings");
                settings
            }
            Err(err) => {
                tracing::warn!("{err}; using default chrome settings");
                ChromeSettings::default()
            }
        },
        None => ChromeSettings::default(),
    };

    settings.apply_overrides(|name| std::env::var(name).ok());
    settings
}

fn default_settings_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME));
    }
    paths
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
