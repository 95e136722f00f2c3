//! Bordered Boxes
//!
//! Frames styled content in a border, with padding, margins, a background
//! fill and optional centring. Spacing follows the usual terminal box
//! convention: a numeric padding or margin of `n` means `n` rows above and
//! below and `3n` columns left and right, which looks square in a terminal
//! cell grid.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::style::{Fragment, StyledLine};

/// Border glyph set
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// `┌─┐`
    #[default]
    Single,
    /// `╔═╗`
    Double,
    /// `╭─╮`
    Round,
}

impl BorderStyle {
    fn set(self) -> border::Set {
        match self {
            BorderStyle::Single => border::PLAIN,
            BorderStyle::Double => border::DOUBLE,
            BorderStyle::Round => border::ROUNDED,
        }
    }
}

/// Horizontal placement of the whole box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Float {
    #[default]
    Left,
    /// Centred in the terminal width (left margin is ignored)
    Center,
}

/// Alignment of content lines inside the box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Space around an edge, in rows and columns
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spacing {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Spacing {
    /// `n` rows above and below, `3n` columns either side
    pub const fn uniform(n: usize) -> Self {
        Self {
            top: n,
            right: n * 3,
            bottom: n,
            left: n * 3,
        }
    }

    /// `n` rows above and below only
    pub const fn vertical(n: usize) -> Self {
        Self {
            top: n,
            right: 0,
            bottom: n,
            left: 0,
        }
    }
}

/// Cosmetic options for a box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoxStyle {
    pub border: BorderStyle,
    pub border_color: Option<Color>,
    pub background: Option<Color>,
    pub padding: Spacing,
    pub margin: Spacing,
    pub float: Float,
    pub align: Align,
}

impl BoxStyle {
    pub fn new(border: BorderStyle) -> Self {
        Self {
            border,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn float(mut self, float: Float) -> Self {
        self.float = float;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Render `content` inside a box for a terminal `columns` wide
pub fn render_box(content: &[StyledLine], style: &BoxStyle, columns: usize) -> Vec<StyledLine> {
    let glyphs = style.border.set();
    let inner = content.iter().map(StyledLine::width).max().unwrap_or(0);
    let span = inner + style.padding.left + style.padding.right;
    let outer = span + 2;

    let indent = match style.float {
        Float::Left => style.margin.left,
        Float::Center => columns.saturating_sub(outer) / 2,
    };

    let edge = |text: String| match style.border_color {
        Some(color) => Fragment::colored(text, color),
        None => Fragment::plain(text),
    };
    let fill = |width: usize| {
        let fragment = Fragment::plain(" ".repeat(width));
        match style.background {
            Some(bg) => fragment.on(bg),
            None => fragment,
        }
    };
    let framed = |body: Vec<Fragment>| {
        let mut line = StyledLine::blank();
        if indent > 0 {
            line.push(Fragment::plain(" ".repeat(indent)));
        }
        line.push(edge(glyphs.vertical_left.to_string()));
        for fragment in body {
            if !fragment.text.is_empty() {
                line.push(fragment);
            }
        }
        line.push(edge(glyphs.vertical_right.to_string()));
        line
    };
    let rule = |left: &str, middle: &str, right: &str| {
        let mut line = StyledLine::blank();
        if indent > 0 {
            line.push(Fragment::plain(" ".repeat(indent)));
        }
        line.push(edge(format!("{left}{}{right}", middle.repeat(span))));
        line
    };

    let mut out = Vec::with_capacity(content.len() + style.margin.top + style.margin.bottom + 4);
    out.extend(std::iter::repeat_with(StyledLine::blank).take(style.margin.top));
    out.push(rule(glyphs.top_left, glyphs.horizontal_top, glyphs.top_right));

    for _ in 0..style.padding.top {
        out.push(framed(vec![fill(span)]));
    }

    for line in content {
        let slack = inner - line.width();
        let (before, after) = match style.align {
            Align::Left => (0, slack),
            Align::Center => (slack / 2, slack - slack / 2),
        };
        let mut body = vec![fill(style.padding.left + before)];
        for fragment in &line.fragments {
            let mut fragment = fragment.clone();
            if let Some(bg) = style.background {
                fragment.bg.get_or_insert(bg);
            }
            body.push(fragment);
        }
        body.push(fill(after + style.padding.right));
        out.push(framed(body));
    }

    for _ in 0..style.padding.bottom {
        out.push(framed(vec![fill(span)]));
    }

    out.push(rule(
        glyphs.bottom_left,
        glyphs.horizontal_bottom,
        glyphs.bottom_right,
    ));
    out.extend(std::iter::repeat_with(StyledLine::blank).take(style.margin.bottom));
    out
}
