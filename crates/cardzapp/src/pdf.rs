//! # Print Payload
//!
//! Builds the HTML document an external PDF printer consumes to produce the
//! physical business card. The card is a standard 3.5in x 2in at 300 dpi.
//!
//! Print output deliberately keeps a fixed light palette and fixed point
//! sizes regardless of the on-screen design: the screen card may be dark, the
//! printed card is ink on white. Only the record's font family and layout
//! style carry over.

use crate::model::{CardRecord, LayoutStyle};

/// Target raster width in pixels (3.5 inches at 300 dpi).
pub const PAGE_WIDTH_PX: u32 = 1050;
/// Target raster height in pixels (2 inches at 300 dpi).
pub const PAGE_HEIGHT_PX: u32 = 600;

/// Build the HTML payload for the PDF renderer.
pub fn render_card_html(record: &CardRecord) -> String {
    let align = match record.layout_style {
        LayoutStyle::Left => "flex-start",
        // Unknown layouts degrade to the centered card
        _ => "center",
    };
    let text_align = match record.layout_style {
        LayoutStyle::Left => "left",
        _ => "center",
    };
    let font = html_escape(record.font_family.as_str());

    format!(
        r#"<html>
  <body style="display: flex; align-items: center; justify-content: center; height: 100%;">
    <div style="width: 3.5in; height: 2in; padding: 20px; border: 1px solid #eee; border-radius: 12px; background-color: white; display: flex; flex-direction: column; align-items: {align}; justify-content: center;">
      <h1 style="font-family: {font}, sans-serif; font-size: 24px; margin: 0; color: #000;">{name}</h1>
      <h2 style="font-family: {font}, sans-serif; font-size: 16px; margin: 0; color: #666;">{title}</h2>
      <p style="font-family: {font}, sans-serif; font-size: 12px; text-align: {text_align}; color: #444;">{bio}</p>
    </div>
  </body>
</html>
"#,
        align = align,
        text_align = text_align,
        font = font,
        name = html_escape(&record.name),
        title = html_escape(&record.title),
        bio = html_escape(&record.bio),
    )
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
