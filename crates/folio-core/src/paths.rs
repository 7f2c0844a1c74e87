//! Filesystem locations used by Folio

use std::path::PathBuf;

use crate::constants::ui::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DATABASE_FILE_NAME};

/// Root config directory (`~/.folio`), falling back to the working directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Directory for log files
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Default config file path
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Preferences database path
pub fn database_file() -> PathBuf {
    config_dir().join(DATABASE_FILE_NAME)
}
