use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CardzError, Result};
use crate::model::{CardRecord, FontFamily, LayoutStyle};
use crate::presets::is_hex_color;

/// The design attributes the editing surface exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignAttr {
    ThemeColor,
    CardColor,
    NameColor,
    TitleColor,
    BioColor,
    NameSize,
    TitleSize,
    BioSize,
    Padding,
    Font,
    Layout,
}

impl DesignAttr {
    pub fn key(&self) -> &'static str {
        match self {
            DesignAttr::ThemeColor => "theme-color",
            DesignAttr::CardColor => "card-color",
            DesignAttr::NameColor => "name-color",
            DesignAttr::TitleColor => "title-color",
            DesignAttr::BioColor => "bio-color",
            DesignAttr::NameSize => "name-size",
            DesignAttr::TitleSize => "title-size",
            DesignAttr::BioSize => "bio-size",
            DesignAttr::Padding => "padding",
            DesignAttr::Font => "font",
            DesignAttr::Layout => "layout",
        }
    }

    fn is_color(&self) -> bool {
        matches!(
            self,
            DesignAttr::ThemeColor
                | DesignAttr::CardColor
                | DesignAttr::NameColor
                | DesignAttr::TitleColor
                | DesignAttr::BioColor
        )
    }
}

/// Apply one design change. Colors must be hex; sizes must parse as
/// non-negative integers; fonts and layouts accept unknown values with a
/// warning (the preview degrades gracefully).
pub fn set(record: &mut CardRecord, attr: DesignAttr, raw: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if attr.is_color() {
        if !is_hex_color(raw) {
            return Err(CardzError::Api(format!(
                "\"{}\" is not a hex color (expected #RGB or #RRGGBB)",
                raw
            )));
        }
        match attr {
            DesignAttr::ThemeColor => record.theme_color = raw.to_string(),
            DesignAttr::CardColor => record.card_color = raw.to_string(),
            DesignAttr::NameColor => record.name_color = raw.to_string(),
            DesignAttr::TitleColor => record.title_color = raw.to_string(),
            DesignAttr::BioColor => record.bio_color = raw.to_string(),
            _ => unreachable!("is_color covers exactly the color attrs"),
        }
    } else {
        match attr {
            DesignAttr::NameSize | DesignAttr::TitleSize | DesignAttr::BioSize
            | DesignAttr::Padding => {
                let n: u32 = raw.parse().map_err(|_| {
                    CardzError::Api(format!(
                        "\"{}\" is not a valid {} (expected a non-negative integer)",
                        raw,
                        attr.key()
                    ))
                })?;
                match attr {
                    DesignAttr::NameSize => record.name_size = n,
                    DesignAttr::TitleSize => record.title_size = n,
                    DesignAttr::BioSize => record.bio_size = n,
                    DesignAttr::Padding => record.padding = n,
                    _ => unreachable!(),
                }
            }
            DesignAttr::Font => {
                let font = FontFamily::from(raw.to_string());
                if let FontFamily::Other(name) = &font {
                    result.add_message(CmdMessage::warning(format!(
                        "\"{}\" is not a bundled font; rendering will fall back to sans-serif",
                        name
                    )));
                }
                record.font_family = font;
            }
            DesignAttr::Layout => {
                let layout = LayoutStyle::from(raw.to_string());
                if let LayoutStyle::Other(name) = &layout {
                    result.add_message(CmdMessage::warning(format!(
                        "\"{}\" is not a known layout; rendering will fall back to center",
                        name
                    )));
                }
                record.layout_style = layout;
            }
            _ => unreachable!("color attrs handled above"),
        }
    }

    result.add_message(CmdMessage::success(format!(
        "{} set to {}",
        attr.key(),
        raw
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::default_record;

    #[test]
    fn test_set_colors_validated() {
        let mut record = default_record();

        set(&mut record, DesignAttr::ThemeColor, "#1976D2").unwrap();
        assert_eq!(record.theme_color, "#1976D2");

        let err = set(&mut record, DesignAttr::CardColor, "blue");
        assert!(err.is_err());
        // Record untouched on rejection
        assert_eq!(record.card_color, "#212121");
    }

    #[test]
    fn test_set_sizes_and_padding() {
        let mut record = default_record();

        set(&mut record, DesignAttr::NameSize, "32").unwrap();
        set(&mut record, DesignAttr::Padding, "0").unwrap();
        assert_eq!(record.name_size, 32);
        assert_eq!(record.padding, 0);

        assert!(set(&mut record, DesignAttr::BioSize, "-3").is_err());
        assert!(set(&mut record, DesignAttr::BioSize, "big").is_err());
        assert_eq!(record.bio_size, 14);
    }

    #[test]
    fn test_set_font_known_and_unknown() {
        let mut record = default_record();

        let result = set(&mut record, DesignAttr::Font, "Roboto").unwrap();
        assert_eq!(record.font_family, FontFamily::Roboto);
        assert_eq!(result.messages.len(), 1);

        let result = set(&mut record, DesignAttr::Font, "Comic Sans MS").unwrap();
        assert_eq!(
            record.font_family,
            FontFamily::Other("Comic Sans MS".to_string())
        );
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("not a bundled font")));
    }

    #[test]
    fn test_set_layout() {
        let mut record = default_record();

        set(&mut record, DesignAttr::Layout, "left").unwrap();
        assert_eq!(record.layout_style, LayoutStyle::Left);

        let result = set(&mut record, DesignAttr::Layout, "diagonal").unwrap();
        assert_eq!(
            record.layout_style,
            LayoutStyle::Other("diagonal".to_string())
        );
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("not a known layout")));
    }
}
