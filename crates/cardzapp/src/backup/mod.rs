//! # Cloud Backup Collaborator
//!
//! The card can be backed up to, and restored from, a user-configured drive
//! location. The drive is an opaque external collaborator behind
//! [`BackupService`]: it takes the serialized record and returns a receipt, or
//! hands back the serialized record it holds. Auth and transport concerns
//! live entirely behind the trait.
//!
//! Failures are surfaced to the user as dismissible messages; nothing is
//! retried, and a failed restore leaves the application state untouched —
//! the record is only replaced after the restored payload fully decodes
//! (see [`crate::api::CardzApi::restore`]).

use std::path::PathBuf;

use thiserror::Error;

pub mod folder;
pub mod mem;

pub use folder::FolderBackup;
pub use mem::MemBackup;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Backup failed: {0}")]
    Unavailable(String),

    #[error("Backup failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum RestoreError {
    #[error("No backup file found.")]
    NoBackup,

    #[error("Restore failed: {0}")]
    Unavailable(String),

    #[error("Restore failed: {0}")]
    Io(#[from] std::io::Error),
}

/// What a successful backup did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReceipt {
    /// Human-readable location of the backup document.
    pub location: String,
    /// True when an existing backup was replaced rather than created.
    pub replaced: bool,
}

/// An external drive that can hold one serialized card record.
pub trait BackupService {
    fn backup(&self, payload: &str) -> Result<BackupReceipt, BackupError>;

    fn restore(&self) -> Result<String, RestoreError>;
}

/// The drive location for [`FolderBackup`], resolved from configuration.
#[derive(Debug, Clone)]
pub struct BackupTarget {
    pub dir: PathBuf,
    pub file_name: String,
}
