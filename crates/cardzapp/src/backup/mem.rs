use std::cell::RefCell;

use super::{BackupError, BackupReceipt, BackupService, RestoreError};

/// In-memory backup service for testing, with failure simulation standing in
/// for the network and auth errors a real drive produces.
#[derive(Default)]
pub struct MemBackup {
    stored: RefCell<Option<String>>,
    fail_with: RefCell<Option<String>>,
}

impl MemBackup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(payload: impl Into<String>) -> Self {
        let service = Self::default();
        *service.stored.borrow_mut() = Some(payload.into());
        service
    }

    /// Make every subsequent call fail with the given reason.
    pub fn set_unavailable(&self, reason: impl Into<String>) {
        *self.fail_with.borrow_mut() = Some(reason.into());
    }

    pub fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }
}

impl BackupService for MemBackup {
    fn backup(&self, payload: &str) -> Result<BackupReceipt, BackupError> {
        if let Some(reason) = self.fail_with.borrow().clone() {
            return Err(BackupError::Unavailable(reason));
        }
        let replaced = self.stored.borrow().is_some();
        *self.stored.borrow_mut() = Some(payload.to_string());
        Ok(BackupReceipt {
            location: "<memory>/cardz_backup.json".to_string(),
            replaced,
        })
    }

    fn restore(&self) -> Result<String, RestoreError> {
        if let Some(reason) = self.fail_with.borrow().clone() {
            return Err(RestoreError::Unavailable(reason));
        }
        match self.stored.borrow().clone() {
            Some(payload) => Ok(payload),
            None => Err(RestoreError::NoBackup),
        }
    }
}
