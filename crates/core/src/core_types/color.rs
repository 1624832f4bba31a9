//! Temperature-banded flame color ramp.

use serde::{Deserialize, Serialize};

/// Normalized RGB color, each component nominally in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Creates a color from raw components. Values are not clamped.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Temperature thresholds (degrees Celsius) separating the flame color bands.
pub mod bands {
    /// Above this the flame reads near-white.
    pub const WHITE: f32 = 1000.0;
    /// Above this the flame reads yellow.
    pub const YELLOW: f32 = 800.0;
    /// Above this the flame reads orange; cooler flames fall back to deep red.
    pub const ORANGE: f32 = 500.0;
}

/// Maps an effective flame temperature to its display color.
///
/// Bands are open at the bottom: a flame at exactly 1000 degrees renders
/// yellow, not white.
#[inline]
#[must_use]
pub fn flame_color(effective_temperature: f32) -> Rgb {
    if effective_temperature > bands::WHITE {
        Rgb::new(1.0, 0.95, 0.8)
    } else if effective_temperature > bands::YELLOW {
        Rgb::new(1.0, 0.85, 0.2)
    } else if effective_temperature > bands::ORANGE {
        Rgb::new(1.0, 0.45, 0.05)
    } else {
        Rgb::new(0.85, 0.12, 0.02)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_exclusive() {
        assert_eq!(flame_color(1000.0), Rgb::new(1.0, 0.85, 0.2));
        assert_eq!(flame_color(800.0), Rgb::new(1.0, 0.45, 0.05));
        assert_eq!(flame_color(500.0), Rgb::new(0.85, 0.12, 0.02));
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(flame_color(1200.0), Rgb::new(1.0, 0.95, 0.8));
        assert_eq!(flame_color(900.0), Rgb::new(1.0, 0.85, 0.2));
        assert_eq!(flame_color(650.0), Rgb::new(1.0, 0.45, 0.05));
        assert_eq!(flame_color(300.0), Rgb::new(0.85, 0.12, 0.02));
        assert_eq!(flame_color(-50.0), Rgb::new(0.85, 0.12, 0.02));
    }
}
