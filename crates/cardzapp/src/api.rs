//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all cardz operations, regardless of the UI being used.
//!
//! [`CardzApi`] owns the one in-memory [`CardRecord`] together with its
//! store — an explicit state handle passed down to whoever needs read or
//! update access, instead of a process-wide singleton. All mutation goes
//! through `&mut self`, which preserves the single-writer discipline: each
//! edit derives the new record from the previous one, then persists.
//!
//! Responsibilities:
//! - **Load once at startup**: stored record, or the default when nothing is
//!   stored / the stored text is malformed (reported, never fatal).
//! - **Dispatch** to the appropriate command function.
//! - **Normalize inputs**: 1-based display indexes from the UI resolve to
//!   stable link ids here; commands only ever see ids.
//! - **Persist after every mutation**, and only after the mutation succeeded.
//! - **Backup/restore orchestration**: restore replaces the record only after
//!   the payload fully decodes, so a failed restore changes nothing.
//!
//! The API explicitly avoids business logic (commands), raw I/O (store and
//! backup collaborators) and presentation (the UI renders `CmdResult`s).

use crate::backup::BackupService;
use crate::codec;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{CardzError, Result};
use crate::model::{CardRecord, LinkKind};
use crate::store::{CardStore, LoadSource, StorageBackend};

/// The main API facade for cardz operations.
///
/// Generic over `StorageBackend` to allow different storage backends.
/// All UI clients (CLI, future GUIs) should interact through this API.
pub struct CardzApi<B: StorageBackend> {
    store: CardStore<B>,
    record: CardRecord,
}

impl<B: StorageBackend> CardzApi<B> {
    /// Load the card from storage, falling back to the default record.
    /// Returns the api plus any startup messages worth showing (e.g. a
    /// warning that malformed stored data was replaced by the default).
    pub fn load(backend: B) -> Result<(Self, Vec<CmdMessage>)> {
        let store = CardStore::with_backend(backend);
        let loaded = store.load()?;

        let mut messages = Vec::new();
        if let LoadSource::Recovered(err) = &loaded.source {
            messages.push(CmdMessage::warning(format!(
                "Stored card could not be read ({}); starting from the default card",
                err
            )));
        }

        Ok((
            Self {
                store,
                record: loaded.record,
            },
            messages,
        ))
    }

    pub fn record(&self) -> &CardRecord {
        &self.record
    }

    /// The serialized form of the current record (for `--json` output).
    pub fn record_json(&self) -> Result<String> {
        codec::serialize_pretty(&self.record)
    }

    pub fn data_path(&self) -> Result<std::path::PathBuf> {
        self.store.data_path()
    }

    // --- Content ---

    pub fn set_content(
        &mut self,
        field: commands::content::ContentField,
        text: &str,
    ) -> Result<CmdResult> {
        let result = commands::content::set(&mut self.record, field, text);
        self.persist()?;
        Ok(result)
    }

    pub fn set_avatar(&mut self, uri: Option<String>) -> Result<CmdResult> {
        let result = commands::content::set_avatar(&mut self.record, uri);
        self.persist()?;
        Ok(result)
    }

    // --- Links ---

    pub fn add_link(&mut self, kind: LinkKind) -> Result<CmdResult> {
        let result = commands::links::add(&mut self.record, kind);
        self.persist()?;
        Ok(result)
    }

    pub fn update_link(
        &mut self,
        index: usize,
        value: Option<&str>,
        message: Option<&str>,
    ) -> Result<CmdResult> {
        let id = self.resolve_index(index)?;
        let result = commands::links::set(&mut self.record, &id, value, message)?;
        self.persist()?;
        Ok(result)
    }

    pub fn remove_link(&mut self, index: usize) -> Result<CmdResult> {
        let id = self.resolve_index(index)?;
        let result = commands::links::remove(&mut self.record, &id)?;
        self.persist()?;
        Ok(result)
    }

    pub fn list_links(&self) -> CmdResult {
        commands::links::list(&self.record)
    }

    // --- Design ---

    pub fn set_design(
        &mut self,
        attr: commands::design::DesignAttr,
        raw: &str,
    ) -> Result<CmdResult> {
        let result = commands::design::set(&mut self.record, attr, raw)?;
        self.persist()?;
        Ok(result)
    }

    // --- Share & export ---

    pub fn card_qr(&self) -> CmdResult {
        commands::share::card_qr(&self.record)
    }

    pub fn link_qr(&self, index: usize) -> Result<CmdResult> {
        let id = self.resolve_index(index)?;
        commands::share::link_qr(&self.record, &id)
    }

    pub fn export_pdf(&self) -> CmdResult {
        commands::export::pdf(&self.record)
    }

    // --- Reset ---

    pub fn reset(&mut self) -> Result<CmdResult> {
        let result = commands::reset::run(&mut self.record);
        self.persist()?;
        Ok(result)
    }

    // --- Backup & restore ---

    pub fn backup(&self, service: &dyn BackupService) -> Result<CmdResult> {
        let payload = codec::serialize_pretty(&self.record)?;
        let receipt = service.backup(&payload)?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(if receipt.replaced {
            format!("Backup replaced at {}", receipt.location)
        } else {
            format!("Backup created at {}", receipt.location)
        }));
        Ok(result)
    }

    /// Replace the card with the backed-up record. The in-memory record is
    /// only touched after the payload fully decodes, so a failed restore
    /// leaves everything as it was.
    pub fn restore(&mut self, service: &dyn BackupService) -> Result<CmdResult> {
        let payload = service.restore()?;
        let record = codec::deserialize(&payload)?;

        self.record = record;
        self.persist()?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Restore completed successfully"));
        Ok(result)
    }

    // --- Internals ---

    fn resolve_index(&self, index: usize) -> Result<String> {
        index
            .checked_sub(1)
            .and_then(|i| self.record.link_at(i))
            .map(|l| l.id.clone())
            .ok_or_else(|| CardzError::LinkNotFound(index.to_string()))
    }

    fn persist(&self) -> Result<()> {
        self.store.persist(&self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::MemBackup;
    use crate::commands::content::ContentField;
    use crate::store::MemBackend;

    fn make_api() -> CardzApi<MemBackend> {
        let (api, messages) = CardzApi::load(MemBackend::new()).unwrap();
        assert!(messages.is_empty());
        api
    }

    #[test]
    fn test_load_empty_starts_from_default() {
        let api = make_api();
        assert_eq!(api.record(), &codec::default_record());
    }

    #[test]
    fn test_load_malformed_warns_and_defaults() {
        let (api, messages) = CardzApi::load(MemBackend::with_stored("oops")).unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("could not be read"));
        assert_eq!(api.record(), &codec::default_record());
    }

    #[test]
    fn test_mutations_persist_immediately() {
        let mut api = make_api();
        api.set_content(ContentField::Name, "Ada").unwrap();

        let stored = api.store.backend().stored().unwrap();
        let reloaded = codec::deserialize(&stored).unwrap();
        assert_eq!(reloaded.name, "Ada");
    }

    #[test]
    fn test_index_resolution_is_one_based() {
        let api = make_api();
        let result = api.link_qr(1).unwrap();
        assert_eq!(result.payloads[0].content, "mailto:example@email.com");

        assert!(api.link_qr(0).is_err());
        assert!(api.link_qr(99).is_err());
    }

    #[test]
    fn test_update_and_remove_by_index() {
        let mut api = make_api();
        api.update_link(3, Some("cardz.dev"), None).unwrap();
        assert_eq!(api.record().link("3").unwrap().value, "cardz.dev");

        api.remove_link(3).unwrap();
        let ids: Vec<&str> = api.record().links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
    }

    #[test]
    fn test_backup_roundtrip() {
        let mut api = make_api();
        api.set_content(ContentField::Name, "Grace").unwrap();

        let drive = MemBackup::new();
        api.backup(&drive).unwrap();

        // Wipe locally, then restore from the drive
        api.reset().unwrap();
        assert_eq!(api.record().name, "Your Name");

        api.restore(&drive).unwrap();
        assert_eq!(api.record().name, "Grace");
    }

    #[test]
    fn test_restore_failure_leaves_record_unchanged() {
        let mut api = make_api();
        api.set_content(ContentField::Name, "Grace").unwrap();
        let before = api.record().clone();

        // No backup on the drive
        let empty = MemBackup::new();
        assert!(api.restore(&empty).is_err());
        assert_eq!(api.record(), &before);

        // Drive holds garbage
        let garbage = MemBackup::with_stored("not a card");
        assert!(api.restore(&garbage).is_err());
        assert_eq!(api.record(), &before);

        // Drive is unreachable
        let down = MemBackup::with_stored("{}");
        down.set_unavailable("network timeout");
        assert!(api.restore(&down).is_err());
        assert_eq!(api.record(), &before);
    }

    #[test]
    fn test_backup_unavailable_surfaces_reason() {
        let api = make_api();
        let drive = MemBackup::new();
        drive.set_unavailable("invalid credentials");

        let err = api.backup(&drive).unwrap_err();
        assert!(err.to_string().contains("invalid credentials"));
    }
}
