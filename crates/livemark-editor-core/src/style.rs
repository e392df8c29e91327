//! Style configuration supplied by the host.
//!
//! The engine only reads a style; it never mutates one. Field names on the
//! wire are camelCase so a host can pass its style prop through as JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::StyleError;
use crate::range::{HeadingLevel, MentionKind};

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        // `from_str_radix` would also take a sign.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|n| n * 0x11)
                .map_err(|_| invalid())
        };
        match hex.len() {
            3 => Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Colors and corner radius for one mention kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MentionStyle {
    pub color: Color,
    pub background: Color,
    pub border_radius: f32,
}

/// Every visual knob the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkdownStyle {
    pub syntax_color: Color,
    pub link_color: Color,
    pub bold_color: Option<Color>,
    pub italic_color: Option<Color>,

    pub h1_font_size: f32,
    pub h2_font_size: f32,
    pub h3_font_size: f32,
    pub h4_font_size: f32,
    pub h5_font_size: f32,
    pub h6_font_size: f32,
    pub h1_color: Option<Color>,
    pub h2_color: Option<Color>,
    pub h3_color: Option<Color>,
    pub h4_color: Option<Color>,
    pub h5_color: Option<Color>,
    pub h6_color: Option<Color>,

    pub emoji_font_size: f32,
    pub emoji_font_family: SmolStr,

    pub blockquote_border_color: Color,
    pub blockquote_border_width: f32,
    pub blockquote_margin_left: f32,
    pub blockquote_padding_left: f32,
    pub blockquote_text_color: Option<Color>,

    pub code_font_family: SmolStr,
    pub code_font_size: f32,
    pub code_color: Color,
    pub code_background_color: Color,

    pub pre_font_family: SmolStr,
    pub pre_font_size: f32,
    pub pre_color: Color,
    pub pre_background_color: Color,

    pub mention_here_color: Color,
    pub mention_here_background_color: Color,
    pub mention_here_border_radius: f32,
    pub mention_user_color: Color,
    pub mention_user_background_color: Color,
    pub mention_user_border_radius: f32,
    pub mention_report_color: Color,
    pub mention_report_background_color: Color,
    pub mention_report_border_radius: f32,
}

impl Default for MarkdownStyle {
    fn default() -> Self {
        Self {
            syntax_color: Color::rgb(0x80, 0x80, 0x80),
            link_color: Color::rgb(0x00, 0x00, 0xff),
            bold_color: None,
            italic_color: None,

            h1_font_size: 25.0,
            h2_font_size: 22.0,
            h3_font_size: 20.0,
            h4_font_size: 18.0,
            h5_font_size: 16.0,
            h6_font_size: 15.0,
            h1_color: None,
            h2_color: None,
            h3_color: None,
            h4_color: None,
            h5_color: None,
            h6_color: None,

            emoji_font_size: 20.0,
            emoji_font_family: SmolStr::new_static("Noto Color Emoji"),

            blockquote_border_color: Color::rgb(0xd3, 0xd3, 0xd3),
            blockquote_border_width: 6.0,
            blockquote_margin_left: 6.0,
            blockquote_padding_left: 6.0,
            blockquote_text_color: None,

            code_font_family: SmolStr::new_static("monospace"),
            code_font_size: 20.0,
            code_color: Color::rgb(0x00, 0x00, 0x00),
            code_background_color: Color::rgb(0xd3, 0xd3, 0xd3),

            pre_font_family: SmolStr::new_static("monospace"),
            pre_font_size: 20.0,
            pre_color: Color::rgb(0x00, 0x00, 0x00),
            pre_background_color: Color::rgb(0xd3, 0xd3, 0xd3),

            mention_here_color: Color::rgb(0x00, 0x00, 0x00),
            mention_here_background_color: Color::rgb(0xff, 0xff, 0x00),
            mention_here_border_radius: 5.0,
            mention_user_color: Color::rgb(0x00, 0x00, 0x00),
            mention_user_background_color: Color::rgb(0x00, 0xff, 0xff),
            mention_user_border_radius: 5.0,
            mention_report_color: Color::rgb(0x00, 0x00, 0x00),
            mention_report_background_color: Color::rgb(0xff, 0xc0, 0xcb),
            mention_report_border_radius: 5.0,
        }
    }
}

impl MarkdownStyle {
    /// Parse a (possibly partial) style object; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn heading_font_size(&self, level: HeadingLevel) -> f32 {
        match level {
            HeadingLevel::H1 => self.h1_font_size,
            HeadingLevel::H2 => self.h2_font_size,
            HeadingLevel::H3 => self.h3_font_size,
            HeadingLevel::H4 => self.h4_font_size,
            HeadingLevel::H5 => self.h5_font_size,
            HeadingLevel::H6 => self.h6_font_size,
        }
    }

    pub fn heading_color(&self, level: HeadingLevel) -> Option<Color> {
        match level {
            HeadingLevel::H1 => self.h1_color,
            HeadingLevel::H2 => self.h2_color,
            HeadingLevel::H3 => self.h3_color,
            HeadingLevel::H4 => self.h4_color,
            HeadingLevel::H5 => self.h5_color,
            HeadingLevel::H6 => self.h6_color,
        }
    }

    pub fn mention(&self, kind: MentionKind) -> MentionStyle {
        match kind {
            MentionKind::Here => MentionStyle {
                color: self.mention_here_color,
                background: self.mention_here_background_color,
                border_radius: self.mention_here_border_radius,
            },
            MentionKind::User => MentionStyle {
                color: self.mention_user_color,
                background: self.mention_user_background_color,
                border_radius: self.mention_user_border_radius,
            },
            MentionKind::Report => MentionStyle {
                color: self.mention_report_color,
                background: self.mention_report_background_color,
                border_radius: self.mention_report_border_radius,
            },
        }
    }
}
