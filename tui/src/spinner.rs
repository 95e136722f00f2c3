//! Labeled Spinner
//!
//! A stateful spinner handle: start it with a label, update the label,
//! hold while the frames turn, then settle on success.

use std::io;
use std::time::Duration;

use voidkeeper_core::animation::SUCCESS_MARK;
use voidkeeper_core::{sections, Encoder, Theme};

use crate::animator::animate;
use crate::surface::Surface;

/// A running spinner line
pub struct Spinner {
    frames: &'static [&'static str],
    label: String,
    frame: u64,
    interval: Option<Duration>,
    theme: Theme,
    encoder: Encoder,
}

impl Spinner {
    /// Draw the first frame with `label`
    pub fn start<S: Surface + ?Sized>(
        surface: &mut S,
        frames: &'static [&'static str],
        label: &str,
        interval: Option<Duration>,
        theme: Theme,
        encoder: Encoder,
    ) -> io::Result<Self> {
        let spinner = Self {
            frames,
            label: label.to_string(),
            frame: 0,
            interval,
            theme,
            encoder,
        };
        spinner.draw(surface, 0)?;
        Ok(spinner)
    }

    /// Replace the label and redraw in place
    pub fn update<S: Surface + ?Sized>(&mut self, surface: &mut S, label: &str) -> io::Result<()> {
        self.label = label.to_string();
        self.draw(surface, self.frame)
    }

    /// Keep spinning for `hold`
    ///
    /// The current frame is already on screen, so the first tick of the hold
    /// is not redrawn; later ticks advance from it.
    pub async fn hold<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        hold: Duration,
    ) -> io::Result<()> {
        let start = self.frame;
        let ticks = {
            let this = &*self;
            animate(surface, hold, self.interval, |s, tick| match tick {
                0 => Ok(()),
                _ => this.draw(s, start + tick),
            })
            .await?
        };
        self.frame = start + ticks.saturating_sub(1);
        Ok(())
    }

    /// Settle on the success mark with a final label
    pub fn success<S: Surface + ?Sized>(self, surface: &mut S, label: &str) -> io::Result<()> {
        let line = sections::spinner_success(&self.theme, label);
        surface.redraw_line(&self.encoder.line(&line))?;
        surface.commit_line()
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, frame: u64) -> io::Result<()> {
        let glyph = self
            .frames
            .get(frame as usize % self.frames.len().max(1))
            .copied()
            .unwrap_or(SUCCESS_MARK);
        let line = sections::spinner_frame(&self.theme, glyph, &self.label);
        surface.redraw_line(&self.encoder.line(&line))
    }
}
