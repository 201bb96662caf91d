use std::path::PathBuf;

use crate::error::Result;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::CardStore`] handles the "what" (decode, defaults, recovery).
pub trait StorageBackend {
    /// Read the stored card document.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn load(&self) -> Result<Option<String>>;

    /// Write the card document.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, text: &str) -> Result<()>;

    /// The "file path" of the document.
    /// For FsBackend, the real path. For MemBackend, a virtual path.
    fn data_path(&self) -> Result<PathBuf>;
}
