//! Configuration loading and management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where the todo file and the archive document live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the todo CSV file.
    #[serde(default = "default_todo_path")]
    pub todo_path: PathBuf,

    /// Path to the markdown archive document.
    #[serde(default = "default_archive_path")]
    pub archive_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            todo_path: default_todo_path(),
            archive_path: default_archive_path(),
        }
    }
}

fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".todo-ledger"))
        .unwrap_or_else(|| PathBuf::from(".todo-ledger"))
}

fn default_todo_path() -> PathBuf {
    data_dir().join("todo_list.csv")
}

fn default_archive_path() -> PathBuf {
    data_dir().join("achievements.md")
}

impl Config {
    /// Load configuration from file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations or return defaults.
    pub fn load_or_default() -> Self {
        // Try a project-local config, then the user-level one.
        if let Ok(config) = Self::load(".todo-ledger/config.yaml") {
            return config;
        }
        if let Some(home) = dirs::home_dir() {
            if let Ok(config) = Self::load(home.join(".todo-ledger/config.yaml")) {
                return config;
            }
        }

        // Try environment variables
        let mut config = Self::default();

        if let Ok(todo_path) = std::env::var("TODO_LEDGER_FILE") {
            config.storage.todo_path = PathBuf::from(todo_path);
        }

        if let Ok(archive_path) = std::env::var("TODO_LEDGER_ARCHIVE") {
            config.storage.archive_path = PathBuf::from(archive_path);
        }

        config
    }

    /// Ensure the directories holding the todo file and archive exist.
    pub fn ensure_storage_dirs(&self) -> Result<()> {
        for path in [&self.storage.todo_path, &self.storage.archive_path] {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }
        Ok(())
    }
}
