use crate::commands::{CmdResult, Payload};
use crate::error::{CardzError, Result};
use crate::model::CardRecord;
use crate::uri::canonicalize;

/// The text payload encoded into the card-level QR code.
///
/// A plain two-line summary for now; a vCard or hosted URL could replace it
/// without touching callers.
pub fn card_qr(record: &CardRecord) -> CmdResult {
    let payload = format!("Name: {}\nTitle: {}", record.name, record.title);
    CmdResult::default()
        .with_payload(Payload {
            content: payload,
            suggested_filename: None,
        })
}

/// The canonical URI payload for a single link's QR code.
pub fn link_qr(record: &CardRecord, id: &str) -> Result<CmdResult> {
    let link = record
        .link(id)
        .ok_or_else(|| CardzError::LinkNotFound(id.to_string()))?;

    let uri = canonicalize(&link.kind, &link.value, link.message.as_deref());

    // The payload alone: callers pipe it straight into a QR encoder
    Ok(CmdResult::default().with_payload(Payload {
        content: uri,
        suggested_filename: None,
    }))
}
