//! Presenter Configuration
//!
//! The sequence takes no flags and reads no files. The only things resolved
//! at startup are terminal capabilities and accessibility preferences, which
//! change how the script looks but never what it says or in which order.
//!
//! # Environment Variables
//!
//! - `REDUCE_MOTION`: `1`/`reduced` slows frames, `none`/`static` freezes them
//! - `NO_COLOR`: any non-empty value disables color
//! - `FORCE_COLOR`: any value other than `0` enables color
//! - `FORCE_HYPERLINK`: `0` disables hyperlinks, anything else enables them

use std::time::Duration;

use crate::animation::MotionPreference;
use crate::hyperlink::HyperlinkSupport;

/// Whether ANSI colors are emitted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Always,
    Never,
}

impl ColorMode {
    /// Whether colors should be written
    pub fn enabled(self) -> bool {
        matches!(self, ColorMode::Always)
    }

    /// Resolve from `NO_COLOR` / `FORCE_COLOR`, else from the terminal check
    pub fn detect(lookup: impl Fn(&str) -> Option<String>, is_terminal: bool) -> Self {
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return ColorMode::Never;
        }
        if let Some(force) = lookup("FORCE_COLOR") {
            return if force.trim() == "0" {
                ColorMode::Never
            } else {
                ColorMode::Always
            };
        }
        if is_terminal {
            ColorMode::Always
        } else {
            ColorMode::Never
        }
    }
}

/// Scripted delays that set the rhythm of the sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Delay per loading frame
    pub loader_frame: Duration,
    /// Tick of the pulsing tagline
    pub pulse_frame: Duration,
    /// How long the tagline pulses
    pub tagline_hold: Duration,
    /// Tick of the labeled spinner
    pub spinner_frame: Duration,
    /// Pause after each skill box
    pub skill_gap: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            loader_frame: Duration::from_millis(100),
            pulse_frame: Duration::from_millis(16),
            tagline_hold: Duration::from_millis(2000),
            spinner_frame: Duration::from_millis(80),
            skill_gap: Duration::from_millis(300),
        }
    }
}

/// Everything the presenter needs to know about its terminal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresenterConfig {
    pub motion: MotionPreference,
    pub color: ColorMode,
    pub hyperlinks: HyperlinkSupport,
    pub pacing: Pacing,
}

impl PresenterConfig {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env(is_terminal: bool) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), is_terminal)
    }

    /// Create configuration from an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, is_terminal: bool) -> Self {
        let config = Self {
            motion: lookup("REDUCE_MOTION")
                .map(|v| MotionPreference::parse(&v))
                .unwrap_or_default(),
            color: ColorMode::detect(&lookup, is_terminal),
            hyperlinks: HyperlinkSupport::detect(&lookup, is_terminal),
            pacing: Pacing::default(),
        };
        tracing::debug!(
            motion = ?config.motion,
            color = ?config.color,
            hyperlinks = ?config.hyperlinks,
            is_terminal,
            "Resolved presenter configuration"
        );
        config
    }
}
