//! # Storage Layer
//!
//! The persisted form of the card is a single JSON document behind a
//! key-value-shaped [`backend::StorageBackend`]: `load` returns the stored
//! text or `None`, `save` replaces it atomically. [`CardStore`] layers the
//! application policy on top:
//!
//! - **Load once at startup**: the stored document, decoded; a fresh default
//!   record when nothing is stored yet.
//! - **Never crash on bad data**: a document that fails to decode is reported
//!   and replaced by the default record. The malformed text is left on disk
//!   untouched until the next persist overwrites it.
//! - **Persist after every mutation**: callers write the whole record back
//!   through [`CardStore::persist`].
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production backend, atomic tmp+rename writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

use crate::codec::{self, DecodeError};
use crate::error::Result;
use crate::model::CardRecord;
use std::path::PathBuf;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;

/// Where a loaded record came from.
#[derive(Debug)]
pub enum LoadSource {
    /// Decoded from the stored document.
    Stored,
    /// Nothing stored yet; this is the default record.
    Fresh,
    /// The stored document was malformed; this is the default record and the
    /// decode error is attached for reporting.
    Recovered(DecodeError),
}

/// A record plus the story of how it was obtained.
#[derive(Debug)]
pub struct LoadedCard {
    pub record: CardRecord,
    pub source: LoadSource,
}

/// Policy holder over a [`StorageBackend`].
pub struct CardStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> CardStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Load the card, falling back to the default record when nothing is
    /// stored or the stored text is malformed. Only real I/O errors fail.
    pub fn load(&self) -> Result<LoadedCard> {
        match self.backend.load()? {
            None => Ok(LoadedCard {
                record: codec::default_record(),
                source: LoadSource::Fresh,
            }),
            Some(text) => match codec::deserialize(&text) {
                Ok(record) => Ok(LoadedCard {
                    record,
                    source: LoadSource::Stored,
                }),
                Err(err) => Ok(LoadedCard {
                    record: codec::default_record(),
                    source: LoadSource::Recovered(err),
                }),
            },
        }
    }

    /// Write the record back to storage.
    pub fn persist(&self, record: &CardRecord) -> Result<()> {
        let text = codec::serialize(record)?;
        self.backend.save(&text)
    }

    pub fn data_path(&self) -> Result<PathBuf> {
        self.backend.data_path()
    }

    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinkKind;

    fn make_store() -> CardStore<MemBackend> {
        CardStore::with_backend(MemBackend::new())
    }

    #[test]
    fn test_load_empty_store_yields_default() {
        let store = make_store();
        let loaded = store.load().unwrap();
        assert!(matches!(loaded.source, LoadSource::Fresh));
        assert_eq!(loaded.record, codec::default_record());
    }

    #[test]
    fn test_persist_then_load_roundtrips() {
        let store = make_store();
        let mut record = codec::default_record();
        record.name = "Grace Hopper".to_string();
        record.add_link(LinkKind::Github);

        store.persist(&record).unwrap();

        let loaded = store.load().unwrap();
        assert!(matches!(loaded.source, LoadSource::Stored));
        assert_eq!(loaded.record, record);
    }

    #[test]
    fn test_malformed_document_recovers_to_default() {
        let store = CardStore::with_backend(MemBackend::with_stored("{{ not json"));
        let loaded = store.load().unwrap();
        assert!(matches!(loaded.source, LoadSource::Recovered(_)));
        assert_eq!(loaded.record, codec::default_record());

        // The malformed text is untouched until the next persist
        assert_eq!(store.backend().stored().unwrap(), "{{ not json");
    }

    #[test]
    fn test_persist_surfaces_write_errors() {
        let store = make_store();
        store.backend().set_simulate_write_error(true);
        assert!(store.persist(&codec::default_record()).is_err());
    }
}
