//! Section Builders
//!
//! Pure functions from the script to styled lines, one per structural
//! section. The presenter only sequences, paces and writes what these
//! return, so everything visible can be tested without a terminal.

use crate::animation::SUCCESS_MARK;
use crate::boxes::{render_box, Align, BorderStyle, BoxStyle, Float, Spacing};
use crate::catalogue::{CatalogueEntry, SKILL_SEPARATOR};
use crate::error::StyleError;
use crate::hyperlink::{self, HyperlinkSupport};
use crate::script::Script;
use crate::style::gradient::{Gradient, Rgb};
use crate::style::{Fragment, StyledLine};
use crate::theme::{Theme, SPINNER_FRAME, SUCCESS_GREEN};

/// Column the info card values start at
const FIELD_LABEL_WIDTH: usize = 14;

/// `glyph caption glyph`
pub fn loader_frame(script: &Script, glyph: &str) -> StyledLine {
    let theme = &script.theme;
    StyledLine::from_fragments([
        Fragment::colored(glyph, theme.primary),
        Fragment::plain(" "),
        Fragment::colored(script.loader.caption, theme.light),
        Fragment::plain(" "),
        Fragment::colored(glyph, theme.primary),
    ])
}

/// The banner, gradient-mapped with highlight glyphs kept in warning color
pub fn banner(script: &Script) -> Result<Vec<StyledLine>, StyleError> {
    let lines = StyledLine::highlighted(
        script.banner,
        script.banner_highlight,
        script.theme.warning,
    );
    Ok(Gradient::new(script.gradient)?.apply(&lines))
}

/// The tagline in a single pulse color
pub fn tagline_frame(script: &Script, color: Rgb) -> StyledLine {
    StyledLine::from_fragment(Fragment::colored(script.tagline, color.color()))
}

/// A running spinner line
pub fn spinner_frame(theme: &Theme, glyph: &str, label: &str) -> StyledLine {
    StyledLine::from_fragments([
        Fragment::colored(glyph, SPINNER_FRAME),
        Fragment::plain(" "),
        Fragment::colored(label, theme.primary),
    ])
}

/// The settled spinner line
pub fn spinner_success(theme: &Theme, label: &str) -> StyledLine {
    StyledLine::from_fragments([
        Fragment::colored(SUCCESS_MARK, SUCCESS_GREEN),
        Fragment::plain(" "),
        Fragment::colored(label, theme.warning),
    ])
}

/// The centred status card
pub fn info_box(script: &Script, columns: usize) -> Vec<StyledLine> {
    let theme = &script.theme;
    let card = &script.info;

    let mut content = vec![
        StyledLine::from_fragments([
            Fragment::colored(card.title, theme.primary),
            Fragment::plain(" "),
            Fragment::colored(card.divider, theme.light),
            Fragment::plain(" "),
            Fragment::colored(card.status, theme.warning),
        ]),
        StyledLine::blank(),
    ];
    content.extend(card.fields.iter().map(|(label, value)| {
        StyledLine::from_fragments([
            Fragment::colored(format!("{label:<FIELD_LABEL_WIDTH$}"), theme.light),
            Fragment::colored(*value, theme.primary),
        ])
    }));

    let style = BoxStyle::new(BorderStyle::Double)
        .padding(Spacing::uniform(1))
        .margin(Spacing::vertical(1))
        .border_color(theme.primary)
        .background(theme.dark)
        .float(Float::Center);
    render_box(&content, &style, columns)
}

/// Gradient header above the skill boxes, framed by blank lines
pub fn section_header(script: &Script) -> Result<Vec<StyledLine>, StyleError> {
    let lines = [
        StyledLine::blank(),
        StyledLine::from_fragment(Fragment::plain(script.section_header)),
        StyledLine::blank(),
    ];
    Ok(Gradient::new(script.gradient)?.apply(&lines))
}

/// Item line for a catalogue entry: skills joined by the separator glyph
pub fn skill_line(theme: &Theme, entry: &CatalogueEntry) -> StyledLine {
    let mut line = StyledLine::blank();
    for (i, skill) in entry.skills.iter().enumerate() {
        if i > 0 {
            line.push(Fragment::colored(SKILL_SEPARATOR, theme.primary));
        }
        line.push(Fragment::colored(*skill, theme.light));
    }
    line
}

/// One box per catalogue entry
pub fn skill_box(theme: &Theme, entry: &CatalogueEntry, columns: usize) -> Vec<StyledLine> {
    let content = [
        StyledLine::from_fragment(Fragment::colored(entry.category, theme.primary)),
        skill_line(theme, entry),
    ];
    let style = BoxStyle::new(BorderStyle::Round)
        .padding(Spacing::uniform(1))
        .border_color(theme.primary)
        .background(theme.dark);
    render_box(&content, &style, columns)
}

/// The closing box with caption and links
pub fn footer(script: &Script, support: HyperlinkSupport, columns: usize) -> Vec<StyledLine> {
    let theme = &script.theme;
    let footer = &script.footer;

    let mut content = vec![
        StyledLine::from_fragment(Fragment::colored(footer.title, theme.primary)),
        StyledLine::blank(),
        StyledLine::from_fragment(Fragment::colored(footer.caption, theme.light)),
    ];
    content.extend(footer.links.iter().map(|link| {
        let color = if link.accent {
            theme.accent
        } else {
            theme.primary
        };
        StyledLine::from_fragments(hyperlink::link(
            Fragment::colored(link.label, color),
            link.url,
            support,
        ))
    }));

    let style = BoxStyle::new(BorderStyle::Double)
        .padding(Spacing::uniform(1))
        .margin(Spacing::uniform(1))
        .border_color(theme.warning)
        .background(theme.dark)
        .align(Align::Center);
    render_box(&content, &style, columns)
}
