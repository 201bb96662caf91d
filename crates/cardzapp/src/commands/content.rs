use crate::commands::{CmdMessage, CmdResult};
use crate::model::CardRecord;

/// Which text field of the card a `set` targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    Name,
    Title,
    Bio,
}

impl ContentField {
    fn label(&self) -> &'static str {
        match self {
            ContentField::Name => "Name",
            ContentField::Title => "Title",
            ContentField::Bio => "Bio",
        }
    }
}

pub fn set(record: &mut CardRecord, field: ContentField, text: &str) -> CmdResult {
    match field {
        ContentField::Name => record.name = text.to_string(),
        ContentField::Title => record.title = text.to_string(),
        ContentField::Bio => record.bio = text.to_string(),
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} set to \"{}\"",
        field.label(),
        text
    )));
    result
}

/// Set or clear the avatar image reference. The value is an opaque local
/// file URI; nothing is read or validated here.
pub fn set_avatar(record: &mut CardRecord, uri: Option<String>) -> CmdResult {
    let mut result = CmdResult::default();
    match uri {
        Some(uri) => {
            result.add_message(CmdMessage::success(format!("Avatar set to {}", uri)));
            record.avatar_uri = Some(uri);
        }
        None => {
            record.avatar_uri = None;
            result.add_message(CmdMessage::success("Avatar cleared"));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::default_record;

    #[test]
    fn test_set_text_fields() {
        let mut record = default_record();

        set(&mut record, ContentField::Name, "Ada Lovelace");
        set(&mut record, ContentField::Title, "Analyst");
        set(&mut record, ContentField::Bio, "First programmer.");

        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.title, "Analyst");
        assert_eq!(record.bio, "First programmer.");
    }

    #[test]
    fn test_set_reports_success() {
        let mut record = default_record();
        let result = set(&mut record, ContentField::Name, "Ada");
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("Name"));
    }

    #[test]
    fn test_avatar_set_and_clear() {
        let mut record = default_record();

        set_avatar(&mut record, Some("file:///pics/me.png".to_string()));
        assert_eq!(record.avatar_uri.as_deref(), Some("file:///pics/me.png"));

        set_avatar(&mut record, None);
        assert_eq!(record.avatar_uri, None);
    }
}
