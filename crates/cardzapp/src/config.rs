//! # Configuration
//!
//! Cardz configuration is managed by [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `CARDZ_BACKUP_DIR`, `CARDZ_BACKUP_FILE`,
//!    `CARDZ_EXPORT_DIR`.
//! 2. **Config file**: `cardz.toml` in the OS-appropriate config directory
//!    (via the `directories` crate). Missing file is fine.
//! 3. **Compiled defaults**.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `backup_dir` | unset | Drive-synced folder backups are written to |
//! | `backup_file` | `cardz_backup.json` | Backup document name inside `backup_dir` |
//! | `export_dir` | current dir | Where exported print payloads land |

use std::path::PathBuf;

use confique::Config;
use directories::ProjectDirs;

use crate::backup::BackupTarget;
use crate::error::{CardzError, Result};

#[derive(Config, Debug, Clone)]
pub struct CardzConfig {
    /// Folder the backup document is written to; typically a drive-synced
    /// directory. Backup and restore are unavailable until this is set.
    #[config(env = "CARDZ_BACKUP_DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Backup document name inside `backup_dir`.
    #[config(default = "cardz_backup.json", env = "CARDZ_BACKUP_FILE")]
    pub backup_file: String,

    /// Where exported print payloads are written. Defaults to the current
    /// directory.
    #[config(env = "CARDZ_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,
}

impl CardzConfig {
    /// Load configuration from the environment and the user config file.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dirs) = ProjectDirs::from("", "", "cardz") {
            builder = builder.file(dirs.config_dir().join("cardz.toml"));
        }
        builder
            .load()
            .map_err(|e| CardzError::Store(format!("Failed to load configuration: {}", e)))
    }

    /// The resolved drive location, if backups are configured.
    pub fn backup_target(&self) -> Option<BackupTarget> {
        self.backup_dir.as_ref().map(|dir| BackupTarget {
            dir: dir.clone(),
            file_name: self.backup_file.clone(),
        })
    }
}
