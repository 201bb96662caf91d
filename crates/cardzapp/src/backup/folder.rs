use std::fs;
use std::path::PathBuf;

use uuid::Uuid;

use super::{BackupError, BackupReceipt, BackupService, BackupTarget, RestoreError};

/// Backup into a folder — typically a drive-synced directory, so the sync
/// client carries the document to the cloud. Holds exactly one backup
/// document; a second backup replaces the first, mirroring the
/// search-then-update behavior of the original drive client.
pub struct FolderBackup {
    dir: PathBuf,
    file_name: String,
}

impl FolderBackup {
    pub fn new(target: BackupTarget) -> Self {
        Self {
            dir: target.dir,
            file_name: target.file_name,
        }
    }

    fn backup_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl BackupService for FolderBackup {
    fn backup(&self, payload: &str) -> Result<BackupReceipt, BackupError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let target = self.backup_path();
        let replaced = target.exists();

        // Atomic write
        let tmp = self.dir.join(format!(".backup-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &target)?;

        Ok(BackupReceipt {
            location: target.display().to_string(),
            replaced,
        })
    }

    fn restore(&self) -> Result<String, RestoreError> {
        let path = self.backup_path();
        if !path.exists() {
            return Err(RestoreError::NoBackup);
        }
        Ok(fs::read_to_string(path)?)
    }
}
