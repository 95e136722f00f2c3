//! The Presenter
//!
//! Runs the void sequence end to end against a [`Surface`]:
//!
//! 1. Loading animation
//! 2. Gradient banner
//! 3. Pulsing tagline
//! 4. Labeled spinner (three phases, then success)
//! 5. Info box
//! 6. Section header and one box per catalogue entry
//! 7. Footer with links
//!
//! Every step is strictly sequential. There is no local recovery: the first
//! failure ends the run and is returned, tagged with the section it hit.

use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, info};

use voidkeeper_core::{
    sections, Encoder, PresentError, PresenterConfig, Script, Section, StyleError, StyledLine,
};

use crate::animator::animate;
use crate::spinner::Spinner;
use crate::surface::Surface;

/// Drives the script against a surface
pub struct Presenter<'a, S: Surface> {
    surface: S,
    script: &'a Script,
    config: &'a PresenterConfig,
    encoder: Encoder,
    section: Section,
}

impl<'a, S: Surface> Presenter<'a, S> {
    pub fn new(surface: S, script: &'a Script, config: &'a PresenterConfig) -> Self {
        Self {
            surface,
            script,
            config,
            encoder: Encoder::new(config.color),
            section: Section::LoadingAnimation,
        }
    }

    /// Consume the presenter, returning its surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Sum of every scripted wait, the floor on a full run's duration
    pub fn scripted_delay(&self) -> Duration {
        let pacing = &self.config.pacing;
        let loader = pacing.loader_frame * self.script.loader.frames.len() as u32;
        let skills = pacing.skill_gap * self.script.catalogue.len() as u32;
        loader + pacing.tagline_hold + self.script.spinner.total_hold() + skills
    }

    /// Run the whole sequence
    pub async fn run(&mut self) -> Result<(), PresentError> {
        info!("Entering the void");

        self.play_loading_animation()
            .await
            .map_err(|e| self.failure(e))?;
        self.render_banner().map_err(|e| self.failure(e))?;
        self.pulse_tagline().await.map_err(|e| self.failure(e))?;
        self.run_labeled_spinner()
            .await
            .map_err(|e| self.failure(e))?;
        self.render_info_box().map_err(|e| self.failure(e))?;
        self.render_skill_section()
            .await
            .map_err(|e| self.failure(e))?;
        self.render_footer().map_err(|e| self.failure(e))?;

        info!("Void sequence complete");
        Ok(())
    }

    async fn play_loading_animation(&mut self) -> io::Result<()> {
        self.enter(Section::LoadingAnimation)?;
        self.surface.clear()?;

        let script = self.script;
        let encoder = self.encoder;
        let base = self.config.pacing.loader_frame;
        let frames = script.loader.frames;

        // One slot per frame at full speed; slower motion shows fewer frames
        animate(
            &mut self.surface,
            base * frames.len() as u32,
            self.config.motion.frame_interval(base),
            |surface, frame| match frames.get(frame as usize % frames.len().max(1)) {
                Some(glyph) => {
                    let line = sections::loader_frame(script, glyph);
                    surface.redraw_line(&encoder.line(&line))
                }
                None => Ok(()),
            },
        )
        .await?;
        self.surface.commit_line()
    }

    fn render_banner(&mut self) -> io::Result<()> {
        self.enter(Section::Banner)?;
        self.surface.clear()?;
        let lines = sections::banner(self.script).map_err(style_failure)?;
        self.print(&lines)
    }

    async fn pulse_tagline(&mut self) -> io::Result<()> {
        self.enter(Section::Tagline)?;
        self.surface.print_line("")?;

        let script = self.script;
        let encoder = self.encoder;
        let pulse = script.pulse;
        let interval = self.config.motion.frame_interval(self.config.pacing.pulse_frame);

        animate(
            &mut self.surface,
            self.config.pacing.tagline_hold,
            interval,
            |surface, frame| {
                let line = sections::tagline_frame(script, pulse.color_at(frame));
                surface.redraw_line(&encoder.line(&line))
            },
        )
        .await?;

        let resting = sections::tagline_frame(script, pulse.resting());
        self.surface.redraw_line(&encoder.line(&resting))?;
        self.surface.commit_line()?;
        self.surface.print_line("")
    }

    async fn run_labeled_spinner(&mut self) -> io::Result<()> {
        self.enter(Section::Spinner)?;

        let spinner_script = &self.script.spinner;
        let Some(first) = spinner_script.steps.first() else {
            let line = sections::spinner_success(&self.script.theme, spinner_script.success);
            self.surface.redraw_line(&self.encoder.line(&line))?;
            return self.surface.commit_line();
        };

        let interval = self.config.motion.frame_interval(self.config.pacing.spinner_frame);
        let mut spinner = Spinner::start(
            &mut self.surface,
            spinner_script.frames,
            first.label,
            interval,
            self.script.theme,
            self.encoder,
        )?;

        for (i, step) in spinner_script.steps.iter().enumerate() {
            if i > 0 {
                spinner.update(&mut self.surface, step.label)?;
            }
            debug!(label = step.label, hold_ms = step.hold.as_millis() as u64, "Spinner phase");
            spinner.hold(&mut self.surface, step.hold).await?;
        }

        spinner.success(&mut self.surface, spinner_script.success)
    }

    fn render_info_box(&mut self) -> io::Result<()> {
        self.enter(Section::InfoBox)?;
        let lines = sections::info_box(self.script, self.surface.columns());
        self.print(&lines)
    }

    async fn render_skill_section(&mut self) -> io::Result<()> {
        self.enter(Section::SectionHeader)?;
        let header = sections::section_header(self.script).map_err(style_failure)?;
        self.print(&header)?;

        let script = self.script;
        for entry in script.catalogue.entries() {
            self.enter(Section::SkillBox(entry.category.to_string()))?;
            let lines = sections::skill_box(&script.theme, entry, self.surface.columns());
            self.print(&lines)?;
            tokio::time::sleep(self.config.pacing.skill_gap).await;
        }
        Ok(())
    }

    fn render_footer(&mut self) -> io::Result<()> {
        self.enter(Section::Footer)?;
        let lines = sections::footer(self.script, self.config.hyperlinks, self.surface.columns());
        self.print(&lines)
    }

    fn enter(&mut self, section: Section) -> io::Result<()> {
        debug!(%section, "Rendering section");
        self.section = section;
        self.surface.begin(&self.section)
    }

    fn print(&mut self, lines: &[StyledLine]) -> io::Result<()> {
        for line in lines {
            self.surface.print_line(&self.encoder.line(line))?;
        }
        Ok(())
    }

    fn failure(&self, source: io::Error) -> PresentError {
        PresentError::new(self.section.clone(), source)
    }
}

fn style_failure(err: StyleError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}

/// Write the single failure report for a run
pub fn report_failure<W: Write>(err: &PresentError, out: &mut W) -> io::Result<()> {
    writeln!(out, "voidkeeper: {err}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_delay_default() {
        let script = Script::voidkeeper();
        let config = PresenterConfig::default();
        let presenter = Presenter::new(crate::surface::RecordingSurface::new(80), &script, &config);
        // 10 x 100ms + 2000ms + 2600ms + 5 x 300ms
        assert_eq!(presenter.scripted_delay(), Duration::from_millis(7100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_tagged_with_entered_section() {
        let script = Script::voidkeeper();
        let config = PresenterConfig::default();
        let surface = crate::surface::RecordingSurface::new(80).failing_at(Section::Banner);
        let mut presenter = Presenter::new(surface, &script, &config);

        let err = presenter.run().await.unwrap_err();
        assert_eq!(err.section, Section::Banner);
    }

    #[test]
    fn test_report_failure_single_line() {
        let err = PresentError::new(
            Section::Footer,
            io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"),
        );
        let mut out = Vec::new();
        report_failure(&err, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "voidkeeper: presentation failure during footer: stdout closed\n"
        );
    }
}
