//! Application-wide theme system
//!
//! The widget has a fixed neon palette. Every accent on screen (tab highlight,
//! primary button, progress ring, text glow, card border) is derived from the
//! single selected [`ThemeColor`], so switching colors restyles everything at
//! once without touching any timer state.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five selectable accent colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeColor {
    #[default]
    Cyan,
    Pink,
    Green,
    Gold,
    Purple,
}

/// Palette in display order (left to right in the settings panel).
pub const PALETTE: [ThemeColor; 5] = [
    ThemeColor::Cyan,
    ThemeColor::Pink,
    ThemeColor::Green,
    ThemeColor::Gold,
    ThemeColor::Purple,
];

impl ThemeColor {
    pub fn hex(self) -> &'static str {
        match self {
            ThemeColor::Cyan => "#00f2ff",
            ThemeColor::Pink => "#ff0055",
            ThemeColor::Green => "#39ff14",
            ThemeColor::Gold => "#ffd700",
            ThemeColor::Purple => "#bd00ff",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeColor::Cyan => "cyan",
            ThemeColor::Pink => "pink",
            ThemeColor::Green => "green",
            ThemeColor::Gold => "gold",
            ThemeColor::Purple => "purple",
        }
    }

    /// Terminal color for this accent.
    pub fn color(self) -> Color {
        parse_hex(self.hex()).unwrap_or(Color::White)
    }

    /// Position within [`PALETTE`].
    pub fn index(self) -> usize {
        PALETTE.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next palette entry, wrapping around.
    pub fn next(self) -> Self {
        PALETTE[(self.index() + 1) % PALETTE.len()]
    }

    /// Previous palette entry, wrapping around.
    pub fn prev(self) -> Self {
        PALETTE[(self.index() + PALETTE.len() - 1) % PALETTE.len()]
    }

    /// Look up a palette entry by name (`"cyan"`) or hex value (`"#00f2ff"`).
    ///
    /// Anything outside the palette is rejected.
    pub fn from_name(value: &str) -> Option<Self> {
        let value = value.trim();
        PALETTE.iter().copied().find(|c| {
            c.name().eq_ignore_ascii_case(value) || c.hex().eq_ignore_ascii_case(value)
        })
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ThemeColor::from_name(&value).ok_or_else(|| {
            let names: Vec<&str> = PALETTE.iter().map(|c| c.name()).collect();
            format!(
                "unknown theme color '{}' (expected one of: {})",
                value,
                names.join(", ")
            )
        })
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.name().to_string()
    }
}

/// Parse a `#rrggbb` hex string to a ratatui [`Color`].
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

/// Scale an RGB color towards black. Non-RGB colors pass through unchanged.
fn dim(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Complete set of colors used to draw the card.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub accent_name: ThemeColor,

    // Accent colors
    pub accent: Color,
    pub accent_dim: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Card
    pub background: Color,
    pub card_border: Color,
    pub divider: Color,

    // Interactive elements
    pub button_primary_fg: Color,
    pub button_secondary_fg: Color,
    pub button_secondary_bg: Color,
    pub tab_inactive: Color,
    pub tab_active_bg: Color,

    // Progress ring background
    pub ring_track: Color,
}

impl AppTheme {
    /// Build the dark neon theme around one accent color.
    pub fn from_accent(accent: ThemeColor) -> Self {
        let accent_color = accent.color();
        Self {
            accent_name: accent,
            accent: accent_color,
            accent_dim: dim(accent_color, 0.35),
            text_primary: Color::Rgb(0xff, 0xff, 0xff),
            text_secondary: Color::Rgb(0x9c, 0xa3, 0xaf),
            text_muted: Color::Rgb(0x4b, 0x55, 0x63),
            background: Color::Rgb(0x03, 0x07, 0x12),
            card_border: dim(accent_color, 0.55),
            divider: Color::Rgb(0x1f, 0x29, 0x37),
            button_primary_fg: Color::Rgb(0x00, 0x00, 0x00),
            button_secondary_fg: Color::Rgb(0xff, 0xff, 0xff),
            button_secondary_bg: Color::Rgb(0x26, 0x2b, 0x36),
            tab_inactive: Color::Rgb(0x6b, 0x72, 0x80),
            tab_active_bg: Color::Rgb(0x1f, 0x29, 0x37),
            ring_track: Color::Rgb(0x1f, 0x29, 0x37),
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_accent(ThemeColor::default())
    }
}
