//! # Configuration
//!
//! Snipz configuration is loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `SNIPZ_STORAGE_KEY`, `SNIPZ_DATA_DIR`, etc.
//! 2. **Config file**: `snipz.toml` in the OS config directory (via `directories`).
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `snippetsData` | Storage key holding the snippet tree |
//! | `default_folder` | `Sin categoría` | Fallback folder, target of legacy migration |
//! | `backup_file` | `snippets_backup.json` | File name used by `snipz export` |
//! | `migrate_on_start` | `true` | Fold legacy entries in on every start |
//! | `data_dir` | OS data dir | Where `storage/` and `session.json` live |

use crate::error::{Result, SnipzError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "snipz.toml";
pub const SESSION_FILENAME: &str = "session.json";
const STORAGE_DIRNAME: &str = "storage";

/// Configuration for snipz, stored in `snipz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Storage key that holds the serialized snippet tree.
    #[config(default = "snippetsData", env = "SNIPZ_STORAGE_KEY")]
    pub storage_key: String,

    /// Folder used for migrated snippets and after deleting the selected folder.
    #[config(default = "Sin categoría", env = "SNIPZ_DEFAULT_FOLDER")]
    pub default_folder: String,

    /// File name for exported backups.
    #[config(default = "snippets_backup.json", env = "SNIPZ_BACKUP_FILE")]
    pub backup_file: String,

    /// Run the legacy migration every time the client starts.
    #[config(default = true, env = "SNIPZ_MIGRATE_ON_START")]
    pub migrate_on_start: bool,

    /// Overrides the OS data directory.
    #[config(env = "SNIPZ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            storage_key: "snippetsData".to_string(),
            default_folder: "Sin categoría".to_string(),
            backup_file: "snippets_backup.json".to_string(),
            migrate_on_start: true,
            data_dir: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "snipz", "snipz")
}

impl SnipzConfig {
    /// Loads env overrides on top of `<config_dir>/snipz.toml`, if present.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dir) = config_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        builder
            .load()
            .map_err(|e| SnipzError::Config(e.to_string()))
    }

    /// OS-appropriate directory holding `snipz.toml`.
    pub fn default_config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| SnipzError::Config("Could not determine data directory".to_string()))
    }

    /// Directory backing the key-value storage medium.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(STORAGE_DIRNAME))
    }

    pub fn session_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(SESSION_FILENAME))
    }

    /// Key/value pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("storage_key", self.storage_key.clone()),
            ("default_folder", self.default_folder.clone()),
            ("backup_file", self.backup_file.clone()),
            ("migrate_on_start", self.migrate_on_start.to_string()),
            (
                "data_dir",
                self.data_dir()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "<unknown>".to_string()),
            ),
        ]
    }
}
