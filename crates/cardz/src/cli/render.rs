//! Terminal rendering of structured command results: message lines, the card
//! preview box, link tables and renderer payloads.

use console::{style, truncate_str};
use unicode_width::UnicodeWidthStr;

use cardzapp::commands::{CmdMessage, DisplayLink, MessageLevel, Payload};
use cardzapp::model::{CardRecord, LayoutStyle};
use cardzapp::presets::PRESET_COLORS;

/// Inner text width of the preview box.
const PREVIEW_WIDTH: usize = 46;

pub fn messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", style(&message.content).dim()),
            MessageLevel::Success => println!("{} {}", style("✓").green(), message.content),
            MessageLevel::Warning => {
                println!("{} {}", style("!").yellow(), style(&message.content).yellow())
            }
            MessageLevel::Error => {
                eprintln!("{} {}", style("✗").red(), style(&message.content).red())
            }
        }
    }
}

/// Renderer payloads go to stdout verbatim so they can be piped into a QR
/// encoder or anything else.
pub fn payloads(payloads: &[Payload]) {
    for payload in payloads {
        println!("{}", payload.content);
    }
}

pub fn card_preview(record: &CardRecord) {
    let centered = !matches!(record.layout_style, LayoutStyle::Left);

    println!("┌{}┐", "─".repeat(PREVIEW_WIDTH + 2));
    preview_line(&style(&record.name).bold().to_string(), &record.name, centered);
    preview_line(&record.title, &record.title, centered);
    preview_line(&style(&record.bio).dim().to_string(), &record.bio, centered);

    if let Some(avatar) = &record.avatar_uri {
        preview_line(
            &style(format!("[avatar: {}]", avatar)).dim().to_string(),
            &format!("[avatar: {}]", avatar),
            centered,
        );
    }

    if !record.links.is_empty() {
        preview_line("", "", centered);
        for link in &record.links {
            let text = format!("{}  {}", link.kind.label(), link.value);
            preview_line(&text, &text, false);
        }
    }
    println!("└{}┘", "─".repeat(PREVIEW_WIDTH + 2));

    println!(
        "{}",
        style(format!(
            "theme {} · card {} · {}pt/{}pt/{}pt · pad {} · {} · {}",
            record.theme_color,
            record.card_color,
            record.name_size,
            record.title_size,
            record.bio_size,
            record.padding,
            record.font_family.as_str(),
            record.layout_style.as_str(),
        ))
        .dim()
    );
}

/// Print one box line. `styled` is what lands on screen, `plain` is what the
/// padding math runs on (ANSI codes have no width).
fn preview_line(styled: &str, plain: &str, centered: bool) {
    let truncated_plain = truncate_str(plain, PREVIEW_WIDTH, "…").to_string();
    // Only use the styled variant when nothing was cut off
    let shown = if truncated_plain == plain {
        styled.to_string()
    } else {
        truncated_plain.clone()
    };

    let width = UnicodeWidthStr::width(truncated_plain.as_str());
    let total_pad = PREVIEW_WIDTH.saturating_sub(width);
    let (left, right) = if centered {
        (total_pad / 2, total_pad - total_pad / 2)
    } else {
        (0, total_pad)
    };
    println!("│ {}{}{} │", " ".repeat(left), shown, " ".repeat(right));
}

pub fn links(links: &[DisplayLink]) {
    let label_width = links
        .iter()
        .map(|d| UnicodeWidthStr::width(d.link.kind.label().as_str()))
        .max()
        .unwrap_or(0);

    for display in links {
        let label = display.link.kind.label();
        let pad = " ".repeat(label_width.saturating_sub(UnicodeWidthStr::width(label.as_str())));
        println!(
            "{:>3}. {}{}  {}  {}",
            display.index,
            style(&label).cyan(),
            pad,
            display.link.value,
            style(format!("→ {}", display.uri)).dim(),
        );
        if let Some(message) = &display.link.message {
            if !message.is_empty() {
                println!("     {}", style(format!("message: {}", message)).dim());
            }
        }
    }
}

pub fn preset_colors() {
    for chunk in PRESET_COLORS.chunks(5) {
        let line: Vec<String> = chunk.iter().map(|c| format!("{:<8}", c)).collect();
        println!("{}", line.join(" "));
    }
}
