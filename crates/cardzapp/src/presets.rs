//! Curated design colors offered by the design command, plus the hex
//! validation it applies before accepting a custom color.

/// A curated list of popular design colors.
pub const PRESET_COLORS: [&str; 43] = [
    // Whites & Greys
    "#FFFFFF", "#F5F5F5", "#E0E0E0", "#BDBDBD", "#9E9E9E",
    // Dark Greys & Blacks
    "#424242", "#212121", "#000000", "#263238", "#37474F",
    // Reds
    "#D32F2F", "#E57373", "#FFCDD2",
    // Pinks
    "#C2185B", "#F06292", "#F8BBD0",
    // Purples
    "#7B1FA2", "#BA68C8", "#E1BEE7",
    // Blues
    "#1976D2", "#64B5F6", "#BBDEFB", "#0288D1", "#4FC3F7", "#B3E5FC",
    // Teals
    "#00796B", "#4DB6AC", "#B2DFDB",
    // Greens
    "#388E3C", "#81C784", "#C8E6C9",
    // Yellows
    "#FBC02D", "#FFF176", "#FFECB3",
    // Oranges
    "#F57C00", "#FFB74D", "#FFE0B2",
    // Browns
    "#5D4037", "#A1887F", "#D7CCC8",
    // Blue Grey
    "#455A64", "#78909C", "#CFD8DC",
];

/// True for `#RGB` and `#RRGGBB` hex colors.
pub fn is_hex_color(s: &str) -> bool {
    let Some(hex) = s.strip_prefix('#') else {
        return false;
    };
    (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_are_valid_hex() {
        for color in PRESET_COLORS {
            assert!(is_hex_color(color), "bad preset {}", color);
        }
    }

    #[test]
    fn test_hex_validation() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#6200ee"));
        assert!(is_hex_color("#FFFFFF"));

        assert!(!is_hex_color("6200ee"));
        assert!(!is_hex_color("#6200e"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color("#"));
        assert!(!is_hex_color("blue"));
    }
}
