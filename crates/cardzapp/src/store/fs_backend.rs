use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use uuid::Uuid;

use super::backend::StorageBackend;
use crate::error::{CardzError, Result};

/// The single card document inside the data directory.
pub const CARD_FILE: &str = "card.json";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("", "", "cardz"));

/// Filesystem backend: one JSON document in the platform data directory
/// (or an explicit override, for tests and the `--data` flag).
pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Resolve the data directory: explicit override, else the OS-appropriate
    /// app data dir via the `directories` crate.
    pub fn resolve(data_override: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = data_override {
            return Ok(Self::new(dir));
        }
        let dirs = PROJECT_DIRS
            .as_ref()
            .ok_or_else(|| CardzError::Store("Could not determine a data directory".to_string()))?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    fn card_path(&self) -> PathBuf {
        self.data_dir.join(CARD_FILE)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CardzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Option<String>> {
        let path = self.card_path();
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path).map_err(CardzError::Io)?;
        Ok(Some(text))
    }

    fn save(&self, text: &str) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;

        // Atomic write
        let target = self.card_path();
        let tmp = self.data_dir.join(format!(".card-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, text).map_err(CardzError::Io)?;
        fs::rename(&tmp, &target).map_err(CardzError::Io)?;

        Ok(())
    }

    fn data_path(&self) -> Result<PathBuf> {
        Ok(self.card_path())
    }
}
