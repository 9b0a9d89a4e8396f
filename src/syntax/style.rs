//! Style types for rich-text rendering
//!
//! A `Style` is what a registered pattern looks like once rendered:
//! one foreground color plus the two emphasis flags RTF can toggle cheaply.

use std::fmt;
use std::str::FromStr;

use crate::error::HighlightError;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const MAROON: Color = Color::rgb(128, 0, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as an RTF color table entry (without the trailing `;`)
    pub fn to_rtf_entry(&self) -> String {
        format!("\\red{}\\green{}\\blue{}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = HighlightError;

    /// Parse `#rrggbb` or `rrggbb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || HighlightError::InvalidArgument(format!("invalid color '{}'", s));

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color
    pub color: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a plain style with just a foreground color
    pub fn new(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Whether any emphasis marker has to be emitted
    pub fn has_emphasis(&self) -> bool {
        self.bold || self.italic
    }
}
