//! Animation Primitives
//!
//! Frame sets and per-frame color math for the sequence's animations. Nothing
//! here knows about clocks: the surface driver asks for "frame N" and decides
//! when to ask.
//!
//! # Motion Preferences
//!
//! - `Full`: Normal frame rate
//! - `Reduced`: Frames advance at a quarter of the normal rate
//! - `None`: A single static frame per animation, pacing holds unchanged
//!
//! Set `REDUCE_MOTION=1` (or `reduced`) for reduced motion and
//! `REDUCE_MOTION=none` (or `static`, `off`) for none.

mod timing;

pub use timing::ease_in_out;

use std::time::Duration;

use crate::style::gradient::Rgb;

/// Braille frames for the loading line
pub const LOADER_FRAMES: &[&str] = &["⠋", "⠙", "⠚", "⠞", "⠖", "⠦", "⠴", "⠲", "⠳", "⠓"];

/// Braille frames for the labeled spinner
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Glyph shown when the spinner settles
pub const SUCCESS_MARK: &str = "✔";

/// User preference for motion and animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    /// Full animation at normal speed
    #[default]
    Full,
    /// Reduced motion - frames advance at 0.25x speed
    Reduced,
    /// No motion - static frame only
    None,
}

impl MotionPreference {
    /// Interval between frames for a base interval, None when static
    #[must_use]
    pub fn frame_interval(&self, base: Duration) -> Option<Duration> {
        match self {
            MotionPreference::Full => Some(base),
            MotionPreference::Reduced => Some(base * 4),
            MotionPreference::None => None,
        }
    }

    /// Parse a `REDUCE_MOTION` value
    ///
    /// - `1`, `true`, `yes`, `reduced` -> `Reduced`
    /// - `none`, `static`, `off`, `2` -> `None`
    /// - anything else -> `Full`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().trim() {
            "1" | "true" | "yes" | "reduced" => MotionPreference::Reduced,
            "none" | "static" | "off" | "2" => MotionPreference::None,
            _ => MotionPreference::Full,
        }
    }
}

/// A periodic pulse: mostly `off`, briefly flaring to `on`
///
/// Within each cycle the color eases from `off` to `on` over `transition`
/// frames, holds `on` for `hold` frames, eases back, then rests on `off` for
/// the remainder of the cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseCycle {
    /// Frames per cycle
    pub length: u64,
    /// Frames spent easing in each direction
    pub transition: u64,
    /// Frames held at full `on`
    pub hold: u64,
    /// Flare color
    pub on: Rgb,
    /// Resting color
    pub off: Rgb,
}

impl Default for PulseCycle {
    fn default() -> Self {
        Self {
            length: 120,
            transition: 6,
            hold: 10,
            on: Rgb::from_hex(0xFF1010),
            off: Rgb::from_hex(0xE6E6E6),
        }
    }
}

impl PulseCycle {
    /// Color for an absolute frame number
    pub fn color_at(&self, frame: u64) -> Rgb {
        let length = self.length.max(1);
        let transition = self.transition.max(1);
        let f = frame % length + 1;

        if f >= 2 * transition + self.hold {
            return self.off;
        }
        if f >= transition && f <= transition + self.hold {
            return self.on;
        }

        let step = if f > transition + self.hold {
            2 * transition + self.hold - f
        } else {
            f
        };
        let t = ease_in_out(step as f32 / transition as f32);
        self.off.lerp(self.on, t)
    }

    /// Color shown when motion is disabled
    pub fn resting(&self) -> Rgb {
        self.off
    }
}
