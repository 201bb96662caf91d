//! # Command Layer
//!
//! The core business logic of cardz. Each command lives in its own submodule
//! and implements pure functions over the [`crate::model::CardRecord`].
//!
//! Commands explicitly avoid:
//! - **Any I/O**: no stdout, no files, no terminal concerns — payloads meant
//!   for external renderers are returned, not written.
//! - **Persistence**: the API facade persists after every mutation.
//! - **User interaction**: confirmations are the UI's problem.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `listed_links`: links to display, paired with their display index and
//!   canonical URI.
//! - `payloads`: prepared strings for external renderers (QR text, PDF HTML),
//!   with a suggested filename when the artifact is file-shaped.
//! - `messages`: structured messages with levels (info, success, warning,
//!   error).
//!
//! The UI layer (CLI, future GUIs) decides how to render this data.

use serde::Serialize;

use crate::model::Link;

pub mod content;
pub mod design;
pub mod export;
pub mod links;
pub mod reset;
pub mod share;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A link paired with its 1-based display index and canonical URI.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayLink {
    pub index: usize,
    #[serde(flatten)]
    pub link: Link,
    pub uri: String,
}

/// A prepared string for an external renderer (QR, PDF printer).
#[derive(Debug, Clone)]
pub struct Payload {
    pub content: String,
    /// Set when the payload is meant to land in a file.
    pub suggested_filename: Option<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_links: Vec<DisplayLink>,
    pub payloads: Vec<Payload>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_links(mut self, links: Vec<DisplayLink>) -> Self {
        self.listed_links = links;
        self
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payloads.push(payload);
        self
    }
}
