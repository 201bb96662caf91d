use chrono::Utc;

use crate::commands::{CmdMessage, CmdResult, Payload};
use crate::model::CardRecord;
use crate::pdf::{render_card_html, PAGE_HEIGHT_PX, PAGE_WIDTH_PX};

/// Build the print payload for the external PDF renderer.
///
/// The payload is returned, not written: file placement is the UI's call,
/// and the renderer itself (HTML -> PDF) is an external collaborator.
pub fn pdf(record: &CardRecord) -> CmdResult {
    let html = render_card_html(record);
    let filename = format!("card-{}.html", Utc::now().format("%Y-%m-%d_%H:%M:%S"));

    let mut result = CmdResult::default().with_payload(Payload {
        content: html,
        suggested_filename: Some(filename),
    });
    result.add_message(CmdMessage::info(format!(
        "Print payload is {}x{} px (3.5in x 2in at 300 dpi)",
        PAGE_WIDTH_PX, PAGE_HEIGHT_PX
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::default_record;

    #[test]
    fn test_pdf_payload_and_filename() {
        let record = default_record();
        let result = pdf(&record);

        let payload = &result.payloads[0];
        assert!(payload.content.starts_with("<html>"));
        assert!(payload.content.contains("Your Name"));

        let name = payload.suggested_filename.as_deref().unwrap();
        assert!(name.starts_with("card-"));
        assert!(name.ends_with(".html"));
    }
}
