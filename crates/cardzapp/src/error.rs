use thiserror::Error;

use crate::backup::{BackupError, RestoreError};
use crate::codec::DecodeError;

#[derive(Error, Debug)]
pub enum CardzError {
    #[error("Link not found: {0}")]
    LinkNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Backup(#[from] BackupError),

    #[error(transparent)]
    Restore(#[from] RestoreError),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CardzError>;
