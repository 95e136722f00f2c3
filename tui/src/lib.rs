//! Voidkeeper TUI - Terminal presenter for the void sequence
//!
//! This crate drives the pure builders in `voidkeeper-core` against a
//! terminal, one section after another, with scripted pacing on the tokio
//! timer.
//!
//! # Architecture
//!
//! - **Surface**: Where encoded lines go (terminal, or a recorder in tests)
//! - **Animator**: Fixed-interval redraws bounded by a hold deadline
//! - **Spinner**: Labeled spinner handle (start, update, hold, success)
//! - **Presenter**: The seven-step sequence and its failure reporting

pub mod animator;
pub mod presenter;
pub mod spinner;
pub mod surface;

pub use presenter::{report_failure, Presenter};
pub use spinner::Spinner;
pub use surface::{Record, RecordingSurface, Surface, TerminalSurface};
