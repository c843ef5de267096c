use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChromeError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file '{}': {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
