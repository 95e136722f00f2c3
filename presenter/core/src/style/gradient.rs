//! Gradient Interpolation
//!
//! Linear RGB interpolation across two or more color stops, mapped onto the
//! visible characters of a block of text in reading order. Whitespace is
//! skipped so the gradient spreads across the glyphs only.

use ratatui::style::Color;

use super::{Fragment, StyledLine};
use crate::error::StyleError;

/// A 24-bit color stop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Convert to a terminal color
    pub const fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Interpolate towards `other` by `t` in [0, 1]
    #[must_use]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// Evenly spaced color stops
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gradient {
    stops: Vec<Rgb>,
}

impl Gradient {
    /// Build a gradient from at least two stops
    pub fn new(stops: impl IntoIterator<Item = Rgb>) -> Result<Self, StyleError> {
        let stops: Vec<Rgb> = stops.into_iter().collect();
        if stops.len() < 2 {
            return Err(StyleError::TooFewStops(stops.len()));
        }
        Ok(Self { stops })
    }

    /// Color at position `t` in [0, 1]
    pub fn at(&self, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f32;
        let index = (scaled.floor() as usize).min(segments - 1);
        self.stops[index].lerp(self.stops[index + 1], scaled - index as f32)
    }

    /// `count` colors sampled evenly from first stop to last
    pub fn samples(&self, count: usize) -> Vec<Rgb> {
        match count {
            0 => Vec::new(),
            1 => vec![self.stops[0]],
            _ => (0..count)
                .map(|i| self.at(i as f32 / (count - 1) as f32))
                .collect(),
        }
    }

    /// Color every unstyled visible character of `lines` by position
    ///
    /// Fragments that already carry a foreground color keep it and do not
    /// consume a gradient step.
    pub fn apply(&self, lines: &[StyledLine]) -> Vec<StyledLine> {
        let visible = lines
            .iter()
            .flat_map(|line| &line.fragments)
            .filter(|f| f.fg.is_none())
            .flat_map(|f| f.text.chars())
            .filter(|c| !c.is_whitespace())
            .count();
        let mut palette = self.samples(visible.max(self.stops.len())).into_iter();

        lines
            .iter()
            .map(|line| {
                let mut out = StyledLine::blank();
                for fragment in &line.fragments {
                    if fragment.fg.is_some() {
                        out.push(fragment.clone());
                        continue;
                    }
                    for ch in fragment.text.chars() {
                        let mut piece = Fragment {
                            text: ch.to_string(),
                            ..fragment.clone()
                        };
                        if !ch.is_whitespace() {
                            piece.fg = palette.next().map(Rgb::color);
                        }
                        out.push(piece);
                    }
                }
                out
            })
            .collect()
    }
}
