//! Voidkeeper Core - Pure Rendering for the Void Sequence
//!
//! This crate holds everything about the voidkeeper sequence that does not
//! touch a terminal or a clock. It turns the immutable script (theme, banner,
//! skill catalogue, footer links) into styled lines, and styled lines into
//! ANSI-encoded strings. The `voidkeeper-tui` crate drives these builders
//! against a real terminal with scripted pacing.
//!
//! # Architecture
//!
//! ```text
//! Script (immutable content)
//!     │
//!     ├─→ sections   (content → StyledLine)
//!     │      ├─→ gradient   (char-position color interpolation)
//!     │      ├─→ boxes      (bordered, padded, centred frames)
//!     │      └─→ hyperlink  (OSC 8 or plain fallback)
//!     │
//!     └─→ style::ansi::Encoder (StyledLine → String)
//! ```
//!
//! # Key Types
//!
//! - [`Script`]: All literal content, built once at startup
//! - [`Theme`]: Semantic role → color palette
//! - [`SkillCatalogue`]: Ordered (category, skills) pairs
//! - [`StyledLine`]: A line of styled fragments ready for encoding
//! - [`PresenterConfig`]: Terminal capabilities resolved from the environment
//! - [`PresentError`]: The single presentation failure kind

pub mod animation;
pub mod boxes;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod hyperlink;
pub mod script;
pub mod sections;
pub mod style;
pub mod theme;

pub use animation::{MotionPreference, PulseCycle};
pub use boxes::{render_box, Align, BorderStyle, BoxStyle, Float};
pub use catalogue::{CatalogueEntry, SkillCatalogue, SKILL_SEPARATOR};
pub use config::{ColorMode, Pacing, PresenterConfig};
pub use error::{PresentError, Section, StyleError};
pub use hyperlink::HyperlinkSupport;
pub use script::{Footer, FooterLink, InfoCard, LoaderScript, Script, SpinnerScript, SpinnerStep};
pub use style::ansi::Encoder;
pub use style::gradient::{Gradient, Rgb};
pub use style::{Fragment, StyledLine};
pub use theme::Theme;
