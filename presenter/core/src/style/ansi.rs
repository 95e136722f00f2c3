//! ANSI Encoding
//!
//! Turns styled lines into strings for the terminal, using crossterm's
//! styled content for SGR colors and OSC 8 sequences for hyperlinks.

use std::fmt::Write as _;

use crossterm::style::{Color as CColor, ContentStyle, StyledContent};
use ratatui::style::Color;

use super::{Fragment, StyledLine};
use crate::config::ColorMode;

/// Map a palette color onto crossterm's color type
pub fn to_crossterm(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}

/// Encodes styled lines for a terminal with known capabilities
#[derive(Clone, Copy, Debug)]
pub struct Encoder {
    color: ColorMode,
}

impl Encoder {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Encode one line (no trailing newline)
    pub fn line(&self, line: &StyledLine) -> String {
        let mut out = String::new();
        for fragment in &line.fragments {
            self.fragment(&mut out, fragment);
        }
        out
    }

    fn fragment(&self, out: &mut String, fragment: &Fragment) {
        if let Some(url) = &fragment.link {
            let _ = write!(out, "\x1b]8;;{url}\x1b\\");
        }

        if self.color.enabled() && (fragment.fg.is_some() || fragment.bg.is_some()) {
            let mut style = ContentStyle::new();
            style.foreground_color = fragment.fg.map(to_crossterm);
            style.background_color = fragment.bg.map(to_crossterm);
            let _ = write!(out, "{}", StyledContent::new(style, fragment.text.as_str()));
        } else {
            out.push_str(&fragment.text);
        }

        if fragment.link.is_some() {
            out.push_str("\x1b]8;;\x1b\\");
        }
    }
}
