// Theme support for the TUI
//
// Small fixed palettes selectable by name from config or --theme.
// "auto" uses the terminal's ANSI palette; the others use true color.

use ratatui::style::Color;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Result presentation colors
    pub correct: Color,
    pub incorrect: Color,

    // UI element colors
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub dim: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "classic" => Self::classic(),
            "contrast" => Self::contrast(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            correct: Color::Green,
            incorrect: Color::Red,
            title: Color::Cyan,
            border: Color::White,
            highlight: Color::Yellow,
            dim: Color::DarkGray,
        }
    }

    /// Classic - the app's green-and-red house colors
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            correct: Color::Rgb(0x58, 0xcc, 0x02),
            incorrect: Color::Rgb(0xff, 0x47, 0x57),
            title: Color::Rgb(0x4b, 0x4b, 0x4b),
            border: Color::Rgb(0xe4, 0xe4, 0xe4),
            highlight: Color::Rgb(0xce, 0x82, 0xff),
            dim: Color::Rgb(0x6b, 0x72, 0x80),
        }
    }

    /// High-contrast variant
    pub fn contrast() -> Self {
        Self {
            name: "contrast".to_string(),
            correct: Color::LightGreen,
            incorrect: Color::LightRed,
            title: Color::White,
            border: Color::White,
            highlight: Color::LightYellow,
            dim: Color::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("does-not-exist").name, "auto");
        assert_eq!(Theme::by_name("CLASSIC").name, "classic");
    }
}
