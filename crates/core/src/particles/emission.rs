//! Spawn rules and tuning constants for the particle populations.

use rand::rngs::StdRng;
use rand::Rng;

use crate::core_types::{color, math, Rgb, SimulationParameters, Vec3};

use super::particle::{Particle, ParticleClass};
use super::simulator::SimulatorConfig;

/// Tuning constants for emission and motion.
///
/// Values are chosen for visual plausibility at the nominal frame rate, not
/// for physical accuracy.
pub mod constants {
    /// Baseline frame rate the per-frame velocities are tuned against.
    pub const NOMINAL_FRAME_RATE: f32 = 60.0;
    /// Area (hectares) at which capacity and radius scales are 1:1.
    pub const AREA_REFERENCE: f32 = 100.0;

    /// Fire particles launch with at least this much lift per frame.
    pub const FIRE_LIFT_MIN: f32 = 0.06;
    /// Upper bound of the randomized base lift.
    pub const FIRE_LIFT_MAX: f32 = 0.10;
    /// Extra lift per unit of intensity scale.
    pub const FIRE_INTENSITY_LIFT: f32 = 0.05;
    /// Half-width of the horizontal wobble on fire launch velocity.
    pub const FIRE_JITTER: f32 = 0.015;
    /// Degrees of flame cooling per world unit of height.
    pub const FLAME_VERTICAL_COOLING: f32 = 40.0;

    /// Embers spawn this high above the grid plane.
    pub const EMBER_LAUNCH_HEIGHT: f32 = 2.0;
    /// Fraction of the wind vector an ember inherits at spawn.
    pub const EMBER_WIND_COUPLING: f32 = 0.012;
    /// Per-frame downward pull on ember vertical velocity.
    pub const EMBER_GRAVITY: f32 = 0.003;
    /// Minimum randomized upward kick at ember spawn.
    pub const EMBER_LIFT_MIN: f32 = 0.04;
    /// Maximum randomized upward kick at ember spawn.
    pub const EMBER_LIFT_MAX: f32 = 0.10;
    /// Half-width of the horizontal jitter on ember launch velocity.
    pub const EMBER_JITTER: f32 = 0.02;
    /// Lowest randomized green channel for ember sparks.
    pub const EMBER_GREEN_MIN: f32 = 0.15;
    /// Highest randomized green channel for ember sparks.
    pub const EMBER_GREEN_MAX: f32 = 0.45;
}

/// Fire pool capacity for the given parameters.
pub(crate) fn fire_capacity(params: &SimulationParameters, config: &SimulatorConfig) -> usize {
    let raw = params.area / constants::AREA_REFERENCE * config.fire_count_scale;
    (raw as usize).clamp(config.fire_count_min, config.fire_count_max)
}

/// Ember pool capacity for the given parameters.
pub(crate) fn ember_capacity(params: &SimulationParameters, config: &SimulatorConfig) -> usize {
    let raw = params.wind_speed * config.ember_count_scale;
    (raw as usize).clamp(config.ember_count_min, config.ember_count_max)
}

/// Emission disk radius, floored so a zero-area fire still has somewhere to
/// spawn.
pub(crate) fn spawn_radius(params: &SimulationParameters, config: &SimulatorConfig) -> f32 {
    ((params.area / constants::AREA_REFERENCE).sqrt() * config.radius_scale)
        .max(config.min_spawn_radius)
}

/// Spawns a fire particle on the emission disk.
///
/// Launch velocity is mostly vertical: a randomized base lift plus a bonus
/// scaled by the parameter intensity, with a little horizontal wobble so
/// columns of flame do not rise in lockstep.
pub(crate) fn spawn_fire(
    params: &SimulationParameters,
    radius: f32,
    rng: &mut StdRng,
) -> Particle {
    let (x, y) = math::sample_disk(rng, radius);
    let lift = rng.random_range(constants::FIRE_LIFT_MIN..constants::FIRE_LIFT_MAX)
        + params.intensity_scale() * constants::FIRE_INTENSITY_LIFT;
    let velocity = Vec3::new(
        rng.random_range(-constants::FIRE_JITTER..constants::FIRE_JITTER),
        rng.random_range(-constants::FIRE_JITTER..constants::FIRE_JITTER),
        lift,
    );
    Particle {
        position: Vec3::new(x, y, 0.0),
        velocity,
        color: flame_color_at(params.temperature, 0.0),
        class: ParticleClass::Fire,
    }
}

/// Spawns an ember above the emission disk, inheriting the current wind.
///
/// Horizontal velocity is the wind vector scaled to per-frame units plus
/// jitter, so a respawned ember immediately reflects a wind change.
pub(crate) fn spawn_ember(
    params: &SimulationParameters,
    radius: f32,
    rng: &mut StdRng,
) -> Particle {
    let (x, y) = math::sample_disk(rng, radius);
    let wind = params.wind_vector();
    let velocity = Vec3::new(
        wind.x * constants::EMBER_WIND_COUPLING
            + rng.random_range(-constants::EMBER_JITTER..constants::EMBER_JITTER),
        wind.y * constants::EMBER_WIND_COUPLING
            + rng.random_range(-constants::EMBER_JITTER..constants::EMBER_JITTER),
        rng.random_range(constants::EMBER_LIFT_MIN..constants::EMBER_LIFT_MAX),
    );
    Particle {
        position: Vec3::new(x, y, constants::EMBER_LAUNCH_HEIGHT),
        velocity,
        color: Rgb::new(
            1.0,
            rng.random_range(constants::EMBER_GREEN_MIN..constants::EMBER_GREEN_MAX),
            0.0,
        ),
        class: ParticleClass::Ember,
    }
}

/// Flame color at a given height, cooled as the particle climbs.
pub(crate) fn flame_color_at(base_temperature: f32, height: f32) -> Rgb {
    color::flame_color(base_temperature - height * constants::FLAME_VERTICAL_COOLING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    #[test]
    fn test_fire_capacity_clamping() {
        let config = SimulatorConfig::default();
        let tiny = SimulationParameters {
            area: 0.0,
            ..SimulationParameters::default()
        };
        assert_eq!(fire_capacity(&tiny, &config), config.fire_count_min);
        let huge = SimulationParameters {
            area: 1.0e9,
            ..SimulationParameters::default()
        };
        assert_eq!(fire_capacity(&huge, &config), config.fire_count_max);
    }

    #[test]
    fn test_ember_capacity_wind_scaling() {
        let config = SimulatorConfig::default();
        let calm = SimulationParameters {
            wind_speed: 0.0,
            ..SimulationParameters::default()
        };
        assert_eq!(ember_capacity(&calm, &config), config.ember_count_min);
        let storm = SimulationParameters {
            wind_speed: 1000.0,
            ..SimulationParameters::default()
        };
        assert_eq!(ember_capacity(&storm, &config), config.ember_count_max);
    }

    #[test]
    fn test_spawn_radius_floor() {
        let config = SimulatorConfig::default();
        let tiny = SimulationParameters {
            area: 0.0,
            ..SimulationParameters::default()
        };
        assert_eq!(spawn_radius(&tiny, &config), config.min_spawn_radius);
        let quadruple = SimulationParameters {
            area: 400.0,
            ..SimulationParameters::default()
        };
        assert_eq!(spawn_radius(&quadruple, &config), 2.0 * config.radius_scale);
    }

    #[test]
    fn test_ember_downwind_launch() {
        let mut rng = seeded_rng();
        let east = SimulationParameters {
            wind_speed: 10.0,
            wind_direction: 0.0,
            ..SimulationParameters::default()
        };
        for _ in 0..50 {
            let ember = spawn_ember(&east, 5.0, &mut rng);
            assert!(
                ember.velocity.x > 0.0,
                "downwind component should dominate jitter, got {}",
                ember.velocity.x
            );
            assert!(ember.velocity.z > 0.0);
            assert_eq!(ember.position.z, constants::EMBER_LAUNCH_HEIGHT);
        }

        let west = SimulationParameters {
            wind_speed: 10.0,
            wind_direction: 180.0,
            ..SimulationParameters::default()
        };
        for _ in 0..50 {
            let ember = spawn_ember(&west, 5.0, &mut rng);
            assert!(ember.velocity.x < 0.0);
        }
    }

    #[test]
    fn test_fire_vertical_launch() {
        let mut rng = seeded_rng();
        let params = SimulationParameters::default();
        for _ in 0..50 {
            let fire = spawn_fire(&params, 10.0, &mut rng);
            assert!(fire.velocity.z >= constants::FIRE_LIFT_MIN);
            assert!(fire.velocity.x.abs() <= constants::FIRE_JITTER);
            assert!(fire.velocity.y.abs() <= constants::FIRE_JITTER);
            assert_eq!(fire.position.z, 0.0);
        }
    }

    #[test]
    fn test_intensity_scaled_lift() {
        let mut rng = seeded_rng();
        let cool = SimulationParameters {
            temperature: 200.0,
            ..SimulationParameters::default()
        };
        let hot = SimulationParameters {
            temperature: 1600.0,
            ..SimulationParameters::default()
        };

        // The lift bands must not overlap for this comparison to be exact.
        let cool_max =
            constants::FIRE_LIFT_MAX + cool.intensity_scale() * constants::FIRE_INTENSITY_LIFT;
        let hot_min =
            constants::FIRE_LIFT_MIN + hot.intensity_scale() * constants::FIRE_INTENSITY_LIFT;
        assert!(cool_max < hot_min, "lift bands overlap: {cool_max} vs {hot_min}");

        for _ in 0..20 {
            let slow = spawn_fire(&cool, 5.0, &mut rng);
            let fast = spawn_fire(&hot, 5.0, &mut rng);
            assert!(slow.velocity.z < fast.velocity.z);
        }
    }

    #[test]
    fn test_height_cooled_color() {
        // 900 degrees at the base is yellow; 10 units up it has cooled to
        // 500, which lands in the deep red band.
        assert_eq!(flame_color_at(900.0, 0.0), color::flame_color(900.0));
        assert_eq!(flame_color_at(900.0, 10.0), color::flame_color(500.0));
    }
}
