use crate::codec;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::CardRecord;

/// Replace the card with the canonical starter record.
pub fn run(record: &mut CardRecord) -> CmdResult {
    *record = codec::default_record();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Card reset to the starter template"));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinkKind;

    #[test]
    fn test_reset_discards_edits() {
        let mut record = codec::default_record();
        record.name = "Someone".to_string();
        record.add_link(LinkKind::Github);

        run(&mut record);

        assert_eq!(record, codec::default_record());
    }
}
