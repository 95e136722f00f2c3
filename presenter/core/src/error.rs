//! Error Types
//!
//! The sequence has exactly one failure kind: a presentation failure, tagged
//! with the section that was being rendered when the terminal gave up.

use std::fmt;
use std::io;

use thiserror::Error;

/// Structural sections of the sequence, in display order
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Frame-by-frame loading line
    LoadingAnimation,
    /// Gradient ASCII banner
    Banner,
    /// Pulsing tagline
    Tagline,
    /// Three-phase labeled spinner
    Spinner,
    /// Centred status card
    InfoBox,
    /// Gradient header above the skill boxes
    SectionHeader,
    /// One catalogue entry, by category label
    SkillBox(String),
    /// Closing box with links
    Footer,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadingAnimation => write!(f, "loading animation"),
            Self::Banner => write!(f, "banner"),
            Self::Tagline => write!(f, "tagline"),
            Self::Spinner => write!(f, "spinner"),
            Self::InfoBox => write!(f, "info box"),
            Self::SectionHeader => write!(f, "section header"),
            Self::SkillBox(category) => write!(f, "skill box '{category}'"),
            Self::Footer => write!(f, "footer"),
        }
    }
}

/// A failed terminal write, clear, or capability query
#[derive(Debug, Error)]
#[error("presentation failure during {section}: {source}")]
pub struct PresentError {
    /// Section being rendered when the failure happened
    pub section: Section,
    /// The underlying terminal error
    #[source]
    pub source: io::Error,
}

impl PresentError {
    pub fn new(section: Section, source: io::Error) -> Self {
        Self { section, source }
    }
}

/// Errors building styles from content
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// Gradients interpolate between stops, so one stop is not enough
    #[error("gradient needs at least two color stops, got {0}")]
    TooFewStops(usize),
}
