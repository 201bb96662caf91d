//! # Card Record Codec
//!
//! Bidirectional mapping between a [`CardRecord`] and the textual form the
//! key-value persistence layer stores, plus the canonical default record used
//! when nothing is stored yet.
//!
//! The wire format is JSON with the historical camelCase keys (`avatarUri`,
//! `themeColor`, `fontFamily`, …) so records written by earlier versions of
//! the app load unchanged. Decoding validates *shape* only: a record that
//! parses is used as-is, with no range re-validation — an oversized text size
//! or an unknown enum string from stale or foreign data passes through
//! verbatim, and callers are expected to tolerate it.
//!
//! Persistence side effects are the caller's job; this module is pure
//! transformation.

use thiserror::Error;

use crate::model::CardRecord;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed card data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The canonical starter record. Deterministic and fully populated; see
/// [`CardRecord::default`].
pub fn default_record() -> CardRecord {
    CardRecord::default()
}

/// Encode a record to its persisted textual form.
///
/// Round-trips through [`deserialize`] to an equal record, including link
/// order, ids, and `message` presence/absence.
pub fn serialize(record: &CardRecord) -> crate::error::Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Pretty-printed encoding, used for backup payloads meant to be readable in
/// a drive folder.
pub fn serialize_pretty(record: &CardRecord) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Decode a record from its persisted textual form.
///
/// Fails with [`DecodeError::Malformed`] when the text is not well-formed —
/// there is never a partially-populated result. A successful parse is
/// returned as-is, without re-validating field ranges.
pub fn deserialize(text: &str) -> Result<CardRecord, DecodeError> {
    Ok(serde_json::from_str(text)?)
}
