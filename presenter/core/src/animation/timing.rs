//! Easing
//!
//! Shapes the transition phases of frame animations.

/// Quadratic ease in and out over progress `t` in [0, 1]
///
/// Slow at both ends, symmetric around the midpoint.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_fixed() {
        assert!(ease_in_out(0.0).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert!((ease_in_out(2.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_in_out(-1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_symmetric_around_midpoint() {
        let a = ease_in_out(0.25);
        let b = ease_in_out(0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!(a < 0.25, "starts slow");
    }
}
