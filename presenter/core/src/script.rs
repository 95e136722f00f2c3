//! The Void Script
//!
//! Every literal the sequence shows, gathered into one immutable value that
//! is built at startup and lent to the presenter.

use std::time::Duration;

use crate::animation::{PulseCycle, LOADER_FRAMES, SPINNER_FRAMES};
use crate::catalogue::SkillCatalogue;
use crate::style::gradient::Rgb;
use crate::theme::{Gradients, Theme};

const BANNER: &str = "
╔══════════════════════════════════════════════════════════════╗
║           ⚡ V O I D K E E P E R ⚡                    ║
║                         ◢▆▅▄▃━━━━━━━━━━━━                   ║
║                                                              ║
║    ██╗   ██╗ ██████╗ ██╗██████╗     ▼▼▼                    ║
║    ██║   ██║██╔═══██╗██║██╔══██╗   ◢█████◣                 ║
║    ██║   ██║██║   ██║██║██║  ██║  ◢███████◣                ║
║    ╚██╗ ██╔╝██║   ██║██║██║  ██║ ◢█████████◣               ║
║     ╚████╔╝ ╚██████╔╝██║██████╔╝ ▼▼▼▼▼▼▼▼▼▼▼               ║
║      ╚═══╝   ╚═════╝ ╚═╝╚═════╝                            ║
║                                                              ║
║        虚空の番人 - Guardian of the Digital Void            ║
║     [ WHERE CODE FLOWS LIKE DIGITAL RAIN ]                  ║
╚══════════════════════════════════════════════════════════════╝";

/// The fixed-frame loading line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderScript {
    pub frames: &'static [&'static str],
    pub caption: &'static str,
}

/// One phase of the labeled spinner: show `label`, then hold
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinnerStep {
    pub label: &'static str,
    pub hold: Duration,
}

/// The labeled spinner's phases and final success label
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinnerScript {
    pub frames: &'static [&'static str],
    pub steps: Vec<SpinnerStep>,
    pub success: &'static str,
}

impl SpinnerScript {
    /// Sum of all phase holds
    pub fn total_hold(&self) -> Duration {
        self.steps.iter().map(|s| s.hold).sum()
    }
}

/// The centred status card
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub divider: &'static str,
    pub status: &'static str,
    pub fields: Vec<(&'static str, &'static str)>,
}

/// A labeled destination in the footer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub url: &'static str,
    /// Draw the label in the accent role instead of primary
    pub accent: bool,
}

/// The closing box
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footer {
    pub title: &'static str,
    pub caption: &'static str,
    pub links: Vec<FooterLink>,
}

/// All literal content of the sequence
#[derive(Clone, Debug, PartialEq)]
pub struct Script {
    pub theme: Theme,
    pub gradient: [Rgb; 2],
    pub loader: LoaderScript,
    pub banner: &'static str,
    pub banner_highlight: char,
    pub tagline: &'static str,
    pub pulse: PulseCycle,
    pub spinner: SpinnerScript,
    pub info: InfoCard,
    pub section_header: &'static str,
    pub catalogue: SkillCatalogue,
    pub footer: Footer,
}

impl Script {
    /// The voidkeeper sequence
    pub fn voidkeeper() -> Self {
        Self {
            theme: Theme::matrix(),
            gradient: Gradients::MATRIX,
            loader: LoaderScript {
                frames: LOADER_FRAMES,
                caption: "ENTERING THE VOID",
            },
            banner: BANNER,
            banner_highlight: '⚡',
            tagline: " > 過去、現在、未来のコードを守る - Guarding Code: Past, Present, Future < ",
            pulse: PulseCycle::default(),
            spinner: SpinnerScript {
                frames: SPINNER_FRAMES,
                steps: vec![
                    SpinnerStep {
                        label: "Materializing from the void",
                        hold: Duration::from_millis(1000),
                    },
                    SpinnerStep {
                        label: "Synchronizing timelines",
                        hold: Duration::from_millis(800),
                    },
                    SpinnerStep {
                        label: "Establishing quantum link",
                        hold: Duration::from_millis(800),
                    },
                ],
                success: "Digital realm accessed!",
            },
            info: InfoCard {
                title: "VOID STATUS",
                divider: "••",
                status: "STABILIZED",
                fields: vec![
                    ("Sentinel", "Keshav Garg"),
                    ("Class", "Code Architect"),
                    ("Dimension", "量子の谷 // Quantum Valley"),
                ],
            },
            section_header: "< VOID ARSENAL >",
            catalogue: SkillCatalogue::arsenal(),
            footer: Footer {
                title: "[ VOID GATEWAY ACTIVE ]",
                caption: "Access the void through:",
                links: vec![
                    FooterLink {
                        label: "keshavgarg24",
                        url: "https://github.com/keshavgarg24",
                        accent: false,
                    },
                    FooterLink {
                        label: "keshavgarg24.me",
                        url: "https://www.keshavgarg24.me",
                        accent: true,
                    },
                ],
            },
        }
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::voidkeeper()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_has_three_phases() {
        let script = Script::voidkeeper();
        assert_eq!(script.spinner.steps.len(), 3);
        assert_eq!(script.spinner.total_hold(), Duration::from_millis(2600));
        assert_eq!(script.spinner.success, "Digital realm accessed!");
    }

    #[test]
    fn test_banner_shape() {
        let script = Script::voidkeeper();
        let lines: Vec<_> = script.banner.split('\n').collect();
        // leading blank line, then fourteen framed rows
        assert_eq!(lines.len(), 15);
        assert!(lines[0].is_empty());
        assert!(lines[1].starts_with('╔'));
        assert!(lines[14].starts_with('╚'));
        assert_eq!(script.banner.matches('⚡').count(), 2);
    }

    #[test]
    fn test_footer_links() {
        let script = Script::voidkeeper();
        assert_eq!(script.footer.links.len(), 2);
        assert!(script.footer.links[1].accent);
        assert!(script.footer.links.iter().all(|l| l.url.starts_with("https://")));
    }
}
