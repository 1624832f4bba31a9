//! Simulation parameters driving particle emission and motion.

use serde::{Deserialize, Serialize};

use super::error::ParameterError;
use super::vec3::Vec3;

/// Temperature (degrees Celsius) at which the intensity scale is exactly 1.
pub const REFERENCE_TEMPERATURE: f32 = 800.0;
/// Lower clamp for the derived intensity scale.
pub const MIN_INTENSITY_SCALE: f32 = 0.25;
/// Upper clamp for the derived intensity scale.
pub const MAX_INTENSITY_SCALE: f32 = 2.0;

/// External conditions for a burning region.
///
/// All fields are plain scalars so presets can be serialized and shipped to
/// whatever channel a dashboard frontend uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Burning area in hectares. Drives pool capacity and spawn radius.
    pub area: f32,
    /// Base flame temperature in degrees Celsius.
    pub temperature: f32,
    /// Wind speed in meters per second.
    pub wind_speed: f32,
    /// Wind direction in degrees, math convention: 0 blows along +x,
    /// 90 along +y.
    pub wind_direction: f32,
    /// Terrain preset used for display-side elevation offsets.
    pub terrain_profile: TerrainProfile,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            area: 100.0,
            temperature: 800.0,
            wind_speed: 10.0,
            wind_direction: 0.0,
            terrain_profile: TerrainProfile::Flat,
        }
    }
}

impl SimulationParameters {
    /// Checks every scalar field, reporting the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameter`] if area, temperature or
    /// wind speed is NaN, infinite or negative, or if wind direction is not
    /// finite. Negative directions are fine; they wrap like a compass.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_non_negative("area", self.area)?;
        require_non_negative("temperature", self.temperature)?;
        require_non_negative("wind_speed", self.wind_speed)?;
        if !self.wind_direction.is_finite() {
            return Err(ParameterError::InvalidParameter {
                name: "wind_direction",
                value: self.wind_direction,
                constraint: "must be finite",
            });
        }
        Ok(())
    }

    /// Dimensionless flame intensity derived from temperature.
    ///
    /// Equal to 1 at the 800 degree reference, clamped to
    /// [`MIN_INTENSITY_SCALE`]..[`MAX_INTENSITY_SCALE`] so extreme presets
    /// stay renderable.
    #[must_use]
    pub fn intensity_scale(&self) -> f32 {
        (self.temperature / REFERENCE_TEMPERATURE).clamp(MIN_INTENSITY_SCALE, MAX_INTENSITY_SCALE)
    }

    /// Horizontal wind vector in world space (z is always 0).
    #[must_use]
    pub fn wind_vector(&self) -> Vec3 {
        let radians = self.wind_direction.to_radians();
        Vec3::new(
            radians.cos() * self.wind_speed,
            radians.sin() * self.wind_speed,
            0.0,
        )
    }
}

fn require_non_negative(name: &'static str, value: f32) -> Result<(), ParameterError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidParameter {
            name,
            value,
            constraint: "must be finite and non-negative",
        })
    }
}

/// Broad-stroke terrain presets for the dashboard backdrop.
///
/// The simulation itself runs over flat ground; the profile only shifts
/// where geometry is drawn, so switching presets never perturbs particle
/// motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TerrainProfile {
    /// Level plain, zero offset everywhere.
    #[default]
    Flat,
    /// Single broad ridge through the origin.
    Mountainous,
    /// Twin rises with a shallow dip between them.
    Valley,
}

impl TerrainProfile {
    /// Display elevation offset at a horizontal position.
    ///
    /// Purely cosmetic: callers add this to a mesh or sprite height when
    /// drawing. Nothing in particle motion reads it.
    #[must_use]
    pub fn elevation_offset(self, x: f32, y: f32) -> f32 {
        match self {
            Self::Flat => 0.0,
            Self::Mountainous => {
                // One Gaussian ridge centered on the emission origin.
                let dist_sq = x * x + y * y;
                6.0 * (-dist_sq / (40.0 * 40.0)).exp()
            }
            Self::Valley => {
                // Two rises flanking the origin along x, dipping between them.
                let left = (x + 30.0) * (x + 30.0) + y * y;
                let right = (x - 30.0) * (x - 30.0) + y * y;
                let rises =
                    4.0 * ((-left / (24.0 * 24.0)).exp() + (-right / (24.0 * 24.0)).exp());
                let rel = x / 30.0;
                let dip = -2.0 * (-(rel * rel)).exp();
                rises + dip
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_scalar_rejection() {
        let params = SimulationParameters {
            area: -1.0,
            ..SimulationParameters::default()
        };
        assert!(params.validate().is_err());

        let params = SimulationParameters {
            temperature: f32::NAN,
            ..SimulationParameters::default()
        };
        assert!(params.validate().is_err());

        let params = SimulationParameters {
            wind_speed: f32::INFINITY,
            ..SimulationParameters::default()
        };
        assert!(params.validate().is_err());

        let params = SimulationParameters {
            wind_direction: f32::NAN,
            ..SimulationParameters::default()
        };
        assert!(params.validate().is_err());

        // Negative direction is a legal bearing.
        let params = SimulationParameters {
            wind_direction: -90.0,
            ..SimulationParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_intensity_scale_clamping() {
        let cool = SimulationParameters {
            temperature: 100.0,
            ..SimulationParameters::default()
        };
        assert_relative_eq!(cool.intensity_scale(), 0.25);

        assert_relative_eq!(SimulationParameters::default().intensity_scale(), 1.0);

        let extreme = SimulationParameters {
            temperature: 5000.0,
            ..SimulationParameters::default()
        };
        assert_relative_eq!(extreme.intensity_scale(), 2.0);
    }

    #[test]
    fn test_wind_vector_math_convention() {
        let east = SimulationParameters {
            wind_speed: 4.0,
            wind_direction: 0.0,
            ..SimulationParameters::default()
        };
        let v = east.wind_vector();
        assert_relative_eq!(v.x, 4.0);
        assert_relative_eq!(v.y, 0.0);

        let north = SimulationParameters {
            wind_speed: 4.0,
            wind_direction: 90.0,
            ..SimulationParameters::default()
        };
        let v = north.wind_vector();
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 4.0);
    }

    #[test]
    fn test_terrain_elevation_offsets() {
        assert_relative_eq!(TerrainProfile::Flat.elevation_offset(12.0, -7.0), 0.0);

        // Ridge peaks at the origin and decays outward.
        assert_relative_eq!(TerrainProfile::Mountainous.elevation_offset(0.0, 0.0), 6.0);
        assert!(TerrainProfile::Mountainous.elevation_offset(40.0, 0.0) < 3.0);

        // Valley is lowest between the rises.
        let center = TerrainProfile::Valley.elevation_offset(0.0, 0.0);
        let rise = TerrainProfile::Valley.elevation_offset(30.0, 0.0);
        assert!(
            center < rise,
            "valley center {center} should sit below the rise {rise}"
        );
    }
}
