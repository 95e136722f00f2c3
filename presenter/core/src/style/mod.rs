//! Styled Text
//!
//! A tiny text model between the script and the terminal: a line is a list
//! of fragments, each carrying its own colors and an optional hyperlink
//! target. Widths are measured in terminal cells, so wide glyphs (CJK,
//! block art) line up inside boxes.

pub mod ansi;
pub mod gradient;

use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

/// A run of text sharing one style
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// The text to display
    pub text: String,
    /// Foreground color (None = terminal default, open to gradients)
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// OSC 8 hyperlink target
    pub link: Option<String>,
}

impl Fragment {
    /// Unstyled text
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            link: None,
        }
    }

    /// Text in a foreground color
    pub fn colored(text: impl Into<String>, fg: Color) -> Self {
        Self {
            fg: Some(fg),
            ..Self::plain(text)
        }
    }

    /// Set the background color
    #[must_use]
    pub fn on(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Attach a hyperlink target
    #[must_use]
    pub fn linked(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Width in terminal cells
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// A single line of styled fragments
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub fragments: Vec<Fragment>,
}

impl StyledLine {
    /// An empty line
    pub fn blank() -> Self {
        Self::default()
    }

    /// A line made of one fragment
    pub fn from_fragment(fragment: Fragment) -> Self {
        Self {
            fragments: vec![fragment],
        }
    }

    /// A line made of several fragments
    pub fn from_fragments(fragments: impl IntoIterator<Item = Fragment>) -> Self {
        Self {
            fragments: fragments.into_iter().collect(),
        }
    }

    /// Append a fragment
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Width in terminal cells
    pub fn width(&self) -> usize {
        self.fragments.iter().map(Fragment::width).sum()
    }

    /// Text content without any styling
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Split a literal into lines, coloring every occurrence of `glyph`
    ///
    /// The rest of each line stays unstyled so a gradient can claim it.
    pub fn highlighted(text: &str, glyph: char, color: Color) -> Vec<StyledLine> {
        text.split('\n')
            .map(|line| {
                let mut styled = StyledLine::blank();
                let mut run = String::new();
                for ch in line.chars() {
                    if ch == glyph {
                        if !run.is_empty() {
                            styled.push(Fragment::plain(std::mem::take(&mut run)));
                        }
                        styled.push(Fragment::colored(ch.to_string(), color));
                    } else {
                        run.push(ch);
                    }
                }
                if !run.is_empty() {
                    styled.push(Fragment::plain(run));
                }
                styled
            })
            .collect()
    }
}
