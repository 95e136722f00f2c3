//! Theme and Colors
//!
//! The Matrix-inspired palette of the void. Every color used by the sequence
//! comes from here, addressed by semantic role rather than by value.

use ratatui::style::Color;

use crate::style::gradient::Rgb;

// ============================================================================
// Matrix Palette
// ============================================================================

/// Matrix green - headings, spinner text, link labels
pub const MATRIX_GREEN: Rgb = Rgb::from_hex(0x00FF00);

/// Lime green
pub const LIME_GREEN: Rgb = Rgb::from_hex(0x32CD32);

/// Pale green - secondary link
pub const PALE_GREEN: Rgb = Rgb::from_hex(0x98FB98);

/// White - warnings and highlights
pub const WHITE: Rgb = Rgb::from_hex(0xFFFFFF);

/// Black - box backgrounds
pub const BLACK: Rgb = Rgb::from_hex(0x000000);

// ============================================================================
// Status Colors
// ============================================================================

/// Spinner success mark
pub const SUCCESS_GREEN: Color = Color::Rgb(120, 230, 120);

/// Spinner frame glyph
pub const SPINNER_FRAME: Color = Color::Rgb(0, 255, 0);

/// Semantic palette used to parameterize every output call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub warning: Color,
    pub dark: Color,
    pub light: Color,
}

impl Theme {
    /// The Matrix theme
    pub const fn matrix() -> Self {
        Self {
            primary: MATRIX_GREEN.color(),
            secondary: LIME_GREEN.color(),
            accent: PALE_GREEN.color(),
            warning: WHITE.color(),
            dark: BLACK.color(),
            light: WHITE.color(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::matrix()
    }
}

/// Named gradient presets
pub struct Gradients;

impl Gradients {
    /// Black fading into matrix green (banner, section header)
    pub const MATRIX: [Rgb; 2] = [BLACK, MATRIX_GREEN];
    /// Lime into pale green
    pub const SUBTLE: [Rgb; 2] = [LIME_GREEN, PALE_GREEN];
    /// Matrix green into white
    pub const BRIGHT: [Rgb; 2] = [MATRIX_GREEN, WHITE];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_roles() {
        let theme = Theme::matrix();
        assert_eq!(theme.primary, Color::Rgb(0, 255, 0));
        assert_eq!(theme.secondary, Color::Rgb(50, 205, 50));
        assert_eq!(theme.accent, Color::Rgb(152, 251, 152));
        assert_eq!(theme.warning, Color::Rgb(255, 255, 255));
        assert_eq!(theme.dark, Color::Rgb(0, 0, 0));
        assert_eq!(theme.light, theme.warning);
    }

    #[test]
    fn test_gradient_presets_have_two_stops() {
        assert_eq!(Gradients::MATRIX[0], BLACK);
        assert_eq!(Gradients::MATRIX[1], MATRIX_GREEN);
        assert_eq!(Gradients::SUBTLE.len(), 2);
        assert_eq!(Gradients::BRIGHT[1], WHITE);
    }
}
