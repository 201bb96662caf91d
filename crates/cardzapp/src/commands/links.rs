use crate::commands::{CmdMessage, CmdResult, DisplayLink};
use crate::error::{CardzError, Result};
use crate::model::{CardRecord, LinkField, LinkKind};
use crate::uri::canonicalize;

pub fn add(record: &mut CardRecord, kind: LinkKind) -> CmdResult {
    let mut result = CmdResult::default();

    if let LinkKind::Other(name) = &kind {
        result.add_message(CmdMessage::warning(format!(
            "Unknown link type \"{}\"; it will be shared as a plain website link",
            name
        )));
    }

    let link = record.add_link(kind).clone();
    let index = record.links.len();

    result.add_message(CmdMessage::success(format!(
        "{} link added at index {} — set its value with `link set {}`",
        link.kind.label(),
        index,
        index
    )));
    result.listed_links.push(DisplayLink {
        index,
        uri: canonicalize(&link.kind, &link.value, link.message.as_deref()),
        link,
    });
    result
}

/// Update the value and/or pre-filled message of the link with the given id.
pub fn set(
    record: &mut CardRecord,
    id: &str,
    value: Option<&str>,
    message: Option<&str>,
) -> Result<CmdResult> {
    let link = record
        .link(id)
        .ok_or_else(|| CardzError::LinkNotFound(id.to_string()))?;
    let kind = link.kind.clone();

    let mut result = CmdResult::default();

    if let Some(value) = value {
        record.update_link(id, LinkField::Value, value);
        result.add_message(CmdMessage::success(format!(
            "{} link updated to \"{}\"",
            kind.label(),
            value
        )));
    }

    if let Some(message) = message {
        if kind != LinkKind::Whatsapp {
            result.add_message(CmdMessage::warning(
                "Pre-filled messages are only used by whatsapp links",
            ));
        }
        record.update_link(id, LinkField::Message, message);
        result.add_message(CmdMessage::success("Pre-filled message updated"));
    }

    if result.messages.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update"));
    }

    Ok(result)
}

pub fn remove(record: &mut CardRecord, id: &str) -> Result<CmdResult> {
    let kind = record
        .link(id)
        .map(|l| l.kind.clone())
        .ok_or_else(|| CardzError::LinkNotFound(id.to_string()))?;

    record.remove_link(id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} link removed",
        kind.label()
    )));
    Ok(result)
}

/// List all links with their display index and canonical URI.
pub fn list(record: &CardRecord) -> CmdResult {
    let listed: Vec<DisplayLink> = record
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| DisplayLink {
            index: i + 1,
            uri: canonicalize(&link.kind, &link.value, link.message.as_deref()),
            link: link.clone(),
        })
        .collect();

    let mut result = CmdResult::default().with_listed_links(listed);
    if record.links.is_empty() {
        result.add_message(CmdMessage::info("No links yet — add one with `link add`"));
    }
    result
}
