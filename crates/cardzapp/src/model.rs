//! # Domain Model: Card Record and Links
//!
//! This module defines the core data structures for cardz: [`CardRecord`],
//! [`Link`], and the style enums [`LinkKind`], [`FontFamily`], [`LayoutStyle`].
//!
//! ## The Record
//!
//! A card record is the single user-editable aggregate: text fields, an
//! ordered list of contact links, an optional avatar reference, and the visual
//! styling the preview and print payloads consume. The whole record is owned
//! by one holder ([`crate::api::CardzApi`]); links never exist outside it.
//!
//! ## Links
//!
//! Each link carries a stable `id` used for edit/delete addressing (never
//! displayed), a `kind`, the raw user-entered `value`, and an optional
//! pre-filled `message` that only WhatsApp links use. Insertion order is
//! display order, and duplicate kinds are allowed — two phone numbers are two
//! links.
//!
//! ## Tolerating foreign data
//!
//! Records loaded from storage may come from older or newer versions of the
//! app. The enums here are string-backed with an `Other` escape variant so an
//! unrecognized kind, font or layout survives a load/save cycle verbatim
//! instead of failing the decode. Callers degrade gracefully: an unknown link
//! kind shares like a plain website link, an unknown layout renders centered.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One contact channel on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Link {
    /// Create a link with a fresh unique id and an empty value.
    ///
    /// WhatsApp links are pre-seeded with an empty message so the editing
    /// surface has a field to fill in.
    pub fn new(kind: LinkKind) -> Self {
        let message = if kind == LinkKind::Whatsapp {
            Some(String::new())
        } else {
            None
        };
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            value: String::new(),
            message,
        }
    }
}

/// Which editable field of a link an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Value,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkKind {
    Phone,
    Email,
    Website,
    Linkedin,
    Github,
    Whatsapp,
    Instagram,
    /// Unrecognized kind from storage; preserved verbatim on re-serialize.
    Other(String),
}

impl LinkKind {
    /// The kinds the editing surface offers for new links.
    pub const KNOWN: [LinkKind; 7] = [
        LinkKind::Email,
        LinkKind::Phone,
        LinkKind::Website,
        LinkKind::Linkedin,
        LinkKind::Github,
        LinkKind::Whatsapp,
        LinkKind::Instagram,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            LinkKind::Phone => "phone",
            LinkKind::Email => "email",
            LinkKind::Website => "website",
            LinkKind::Linkedin => "linkedin",
            LinkKind::Github => "github",
            LinkKind::Whatsapp => "whatsapp",
            LinkKind::Instagram => "instagram",
            LinkKind::Other(s) => s,
        }
    }

    /// Capitalized form for display ("github" -> "Github").
    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for LinkKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "phone" => LinkKind::Phone,
            "email" => LinkKind::Email,
            "website" => LinkKind::Website,
            "linkedin" => LinkKind::Linkedin,
            "github" => LinkKind::Github,
            "whatsapp" => LinkKind::Whatsapp,
            "instagram" => LinkKind::Instagram,
            _ => LinkKind::Other(s),
        }
    }
}

impl From<LinkKind> for String {
    fn from(kind: LinkKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FontFamily {
    SansSerif,
    Serif,
    Monospace,
    Roboto,
    Lato,
    Montserrat,
    Other(String),
}

impl FontFamily {
    pub fn as_str(&self) -> &str {
        match self {
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Serif => "serif",
            FontFamily::Monospace => "monospace",
            FontFamily::Roboto => "Roboto",
            FontFamily::Lato => "Lato",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::Other(s) => s,
        }
    }
}

impl From<String> for FontFamily {
    fn from(s: String) -> Self {
        match s.as_str() {
            "sans-serif" => FontFamily::SansSerif,
            "serif" => FontFamily::Serif,
            "monospace" => FontFamily::Monospace,
            "Roboto" => FontFamily::Roboto,
            "Lato" => FontFamily::Lato,
            "Montserrat" => FontFamily::Montserrat,
            _ => FontFamily::Other(s),
        }
    }
}

impl From<FontFamily> for String {
    fn from(font: FontFamily) -> Self {
        font.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutStyle {
    Center,
    Left,
    Other(String),
}

impl LayoutStyle {
    pub fn as_str(&self) -> &str {
        match self {
            LayoutStyle::Center => "center",
            LayoutStyle::Left => "left",
            LayoutStyle::Other(s) => s,
        }
    }
}

impl From<String> for LayoutStyle {
    fn from(s: String) -> Self {
        match s.as_str() {
            "center" => LayoutStyle::Center,
            "left" => LayoutStyle::Left,
            _ => LayoutStyle::Other(s),
        }
    }
}

impl From<LayoutStyle> for String {
    fn from(layout: LayoutStyle) -> Self {
        layout.as_str().to_string()
    }
}

/// The complete persisted card: content, links, and visual styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    // Content
    pub name: String,
    pub title: String,
    pub bio: String,
    pub links: Vec<Link>,
    #[serde(default)]
    pub avatar_uri: Option<String>,
    // Design
    pub theme_color: String,
    pub card_color: String,
    pub name_color: String,
    pub title_color: String,
    pub bio_color: String,
    pub name_size: u32,
    pub title_size: u32,
    pub bio_size: u32,
    pub padding: u32,
    pub font_family: FontFamily,
    pub layout_style: LayoutStyle,
}

impl Default for CardRecord {
    /// The canonical starter card: placeholder content, one example link per
    /// common channel, and a dark default palette. Deterministic — two fresh
    /// records are structurally equal.
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Your Title".to_string(),
            bio: "A short and engaging bio about yourself.".to_string(),
            links: vec![
                Link {
                    id: "1".to_string(),
                    kind: LinkKind::Email,
                    value: "example@email.com".to_string(),
                    message: None,
                },
                Link {
                    id: "2".to_string(),
                    kind: LinkKind::Phone,
                    value: "+123456789".to_string(),
                    message: None,
                },
                Link {
                    id: "3".to_string(),
                    kind: LinkKind::Website,
                    value: "your-website.com".to_string(),
                    message: None,
                },
                // Example: Brazilian number with DDD and pre-filled message
                Link {
                    id: "4".to_string(),
                    kind: LinkKind::Whatsapp,
                    value: "5511987654321".to_string(),
                    message: Some("Hello, I saw your card!".to_string()),
                },
                Link {
                    id: "5".to_string(),
                    kind: LinkKind::Instagram,
                    value: "yourusername".to_string(),
                    message: None,
                },
            ],
            avatar_uri: None,
            theme_color: "#6200ee".to_string(),
            card_color: "#212121".to_string(),
            name_color: "#FFFFFF".to_string(),
            title_color: "#E0E0E0".to_string(),
            bio_color: "#B0B0B0".to_string(),
            name_size: 24,
            title_size: 18,
            bio_size: 14,
            padding: 16,
            font_family: FontFamily::SansSerif,
            layout_style: LayoutStyle::Center,
        }
    }
}

impl CardRecord {
    /// Append a new empty link of the given kind, returning a reference to it.
    /// The id is guaranteed distinct from every other link in this record.
    pub fn add_link(&mut self, kind: LinkKind) -> &Link {
        let mut link = Link::new(kind);
        while self.links.iter().any(|l| l.id == link.id) {
            link.id = Uuid::new_v4().to_string();
        }
        self.links.push(link);
        self.links.last().expect("just pushed")
    }

    /// Update one field of the link with the given id, in place.
    /// Returns false if no link has that id.
    pub fn update_link(&mut self, id: &str, field: LinkField, text: &str) -> bool {
        match self.links.iter_mut().find(|l| l.id == id) {
            Some(link) => {
                match field {
                    LinkField::Value => link.value = text.to_string(),
                    LinkField::Message => link.message = Some(text.to_string()),
                }
                true
            }
            None => false,
        }
    }

    /// Remove the link with the given id. All other links keep their order.
    /// Returns false if no link has that id.
    pub fn remove_link(&mut self, id: &str) -> bool {
        let before = self.links.len();
        self.links.retain(|l| l.id != id);
        self.links.len() != before
    }

    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    pub fn link_at(&self, index: usize) -> Option<&Link> {
        self.links.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_link_assigns_unique_id() {
        let mut record = CardRecord::default();
        let existing: Vec<String> = record.links.iter().map(|l| l.id.clone()).collect();

        let id = record.add_link(LinkKind::Github).id.clone();

        assert!(!existing.contains(&id));
        let id2 = record.add_link(LinkKind::Github).id.clone();
        assert_ne!(id, id2);
    }

    #[test]
    fn test_add_whatsapp_preseeds_message() {
        let mut record = CardRecord::default();
        let link = record.add_link(LinkKind::Whatsapp);
        assert_eq!(link.message, Some(String::new()));

        let link = record.add_link(LinkKind::Email);
        assert_eq!(link.message, None);
    }

    #[test]
    fn test_update_link_by_id() {
        let mut record = CardRecord::default();
        assert!(record.update_link("3", LinkField::Value, "new-site.dev"));
        assert_eq!(record.link("3").unwrap().value, "new-site.dev");

        assert!(record.update_link("4", LinkField::Message, "Hi!"));
        assert_eq!(record.link("4").unwrap().message.as_deref(), Some("Hi!"));

        assert!(!record.update_link("nope", LinkField::Value, "x"));
    }

    #[test]
    fn test_remove_link_preserves_order_of_rest() {
        let mut record = CardRecord::default();
        assert!(record.remove_link("3"));

        let ids: Vec<&str> = record.links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);

        assert!(!record.remove_link("3"));
    }

    #[test]
    fn test_duplicate_kinds_allowed() {
        let mut record = CardRecord::default();
        record.add_link(LinkKind::Phone);
        record.add_link(LinkKind::Phone);

        let phones = record
            .links
            .iter()
            .filter(|l| l.kind == LinkKind::Phone)
            .count();
        assert_eq!(phones, 3);
    }

    #[test]
    fn test_link_kind_string_roundtrip() {
        for kind in LinkKind::KNOWN {
            let s: String = kind.clone().into();
            assert_eq!(LinkKind::from(s), kind);
        }

        // Unknown kinds are preserved verbatim, case included
        let odd = LinkKind::from("Mastodon".to_string());
        assert_eq!(odd, LinkKind::Other("Mastodon".to_string()));
        assert_eq!(String::from(odd), "Mastodon");
    }

    #[test]
    fn test_kind_label_capitalizes() {
        assert_eq!(LinkKind::Github.label(), "Github");
        assert_eq!(LinkKind::Other("mastodon".into()).label(), "Mastodon");
    }

    #[test]
    fn test_font_family_wire_names() {
        assert_eq!(FontFamily::SansSerif.as_str(), "sans-serif");
        assert_eq!(FontFamily::from("Roboto".to_string()), FontFamily::Roboto);
        // Wire names are case-sensitive; a mismatch survives as Other
        assert_eq!(
            FontFamily::from("roboto".to_string()),
            FontFamily::Other("roboto".to_string())
        );
    }

    #[test]
    fn test_default_record_is_deterministic() {
        assert_eq!(CardRecord::default(), CardRecord::default());
    }

    #[test]
    fn test_default_record_link_ids_unique() {
        let record = CardRecord::default();
        let mut ids: Vec<&str> = record.links.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), record.links.len());
    }
}
