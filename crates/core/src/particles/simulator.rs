//! Fixed-capacity particle pool with in-place recycling.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core_types::{ParameterError, SimulationParameters};

use super::emission::{self, constants};
use super::particle::{Particle, ParticleClass};

/// Pool sizing and world-extent tuning.
///
/// Defaults suit a dashboard viewport roughly 120 world units across. Count
/// fields expect `min <= max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Fire particles per normalized unit of area.
    pub fire_count_scale: f32,
    /// Smallest fire population; keeps a visible flame at tiny areas.
    pub fire_count_min: usize,
    /// Largest fire population; bounds the render cost.
    pub fire_count_max: usize,
    /// Ember particles per m/s of wind.
    pub ember_count_scale: f32,
    /// Smallest ember population.
    pub ember_count_min: usize,
    /// Largest ember population.
    pub ember_count_max: usize,
    /// Emission radius per normalized unit of area, applied after the
    /// square root.
    pub radius_scale: f32,
    /// Emission radius floor for degenerate areas.
    pub min_spawn_radius: f32,
    /// Height at which fire particles recycle back to the base.
    pub plume_top: f32,
    /// Height below which embers recycle.
    pub ember_floor: f32,
    /// Horizontal distance from the emission center beyond which embers
    /// recycle.
    pub domain_half_width: f32,
    /// Per-call ceiling on the advance timestep, in seconds.
    pub max_delta_time: f32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            fire_count_scale: 600.0,
            fire_count_min: 100,
            fire_count_max: 1500,
            ember_count_scale: 20.0,
            ember_count_min: 50,
            ember_count_max: 600,
            radius_scale: 10.0,
            min_spawn_radius: 2.0,
            plume_top: 14.0,
            ember_floor: 0.0,
            domain_half_width: 60.0,
            max_delta_time: 0.1,
        }
    }
}

/// Fixed-capacity pool of fire and ember particles.
///
/// Capacity is decided once at construction from the initial parameters and
/// never changes afterwards; expired particles are respawned in place, so
/// render buffers can be sized once. [`Self::set_parameters`] swaps the
/// conditions that motion and respawns read, it does not resize the pool.
///
/// # Example
///
/// ```
/// use ember_field_core::{ParticleSimulator, SimulationParameters};
///
/// let mut simulator =
///     ParticleSimulator::with_seed(SimulationParameters::default(), 42).unwrap();
/// simulator.advance(1.0 / 60.0);
/// assert!(!simulator.particles().is_empty());
/// ```
#[derive(Debug)]
pub struct ParticleSimulator {
    particles: Vec<Particle>,
    params: SimulationParameters,
    config: SimulatorConfig,
    spawn_radius: f32,
    fire_count: usize,
    ember_count: usize,
    rng: StdRng,
    ticks: u64,
    fire_respawns: u64,
    ember_respawns: u64,
}

impl ParticleSimulator {
    /// Creates a simulator with default tuning and a random seed.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameter`] if any parameter is
    /// negative or not finite.
    pub fn new(params: SimulationParameters) -> Result<Self, ParameterError> {
        Self::with_config(params, SimulatorConfig::default())
    }

    /// Creates a simulator with custom tuning.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameter`] if any parameter is
    /// negative or not finite.
    pub fn with_config(
        params: SimulationParameters,
        config: SimulatorConfig,
    ) -> Result<Self, ParameterError> {
        Self::build(params, config, rand::rng().random::<u64>())
    }

    /// Creates a simulator with default tuning and a fixed seed, for
    /// reproducible runs.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameter`] if any parameter is
    /// negative or not finite.
    pub fn with_seed(params: SimulationParameters, seed: u64) -> Result<Self, ParameterError> {
        Self::build(params, SimulatorConfig::default(), seed)
    }

    fn build(
        params: SimulationParameters,
        config: SimulatorConfig,
        seed: u64,
    ) -> Result<Self, ParameterError> {
        params.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let fire_count = emission::fire_capacity(&params, &config);
        let ember_count = emission::ember_capacity(&params, &config);
        let spawn_radius = emission::spawn_radius(&params, &config);

        let mut particles = Vec::with_capacity(fire_count + ember_count);
        for _ in 0..fire_count {
            particles.push(emission::spawn_fire(&params, spawn_radius, &mut rng));
        }
        for _ in 0..ember_count {
            particles.push(emission::spawn_ember(&params, spawn_radius, &mut rng));
        }

        info!(
            "Particle pool initialized: {} fire + {} embers, spawn radius {:.1}",
            fire_count, ember_count, spawn_radius
        );

        Ok(Self {
            particles,
            params,
            config,
            spawn_radius,
            fire_count,
            ember_count,
            rng,
            ticks: 0,
            fire_respawns: 0,
            ember_respawns: 0,
        })
    }

    /// Replaces the simulation parameters.
    ///
    /// Validation runs before anything is touched: on error the simulator
    /// keeps its previous parameters. Existing particles keep flying with
    /// their old velocities; the new conditions apply to motion scaling and
    /// to every respawn from the next [`Self::advance`] on.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameter`] if any parameter is
    /// negative or not finite.
    pub fn set_parameters(&mut self, params: SimulationParameters) -> Result<(), ParameterError> {
        params.validate()?;
        self.spawn_radius = emission::spawn_radius(&params, &self.config);
        debug!(
            "Parameters updated: wind {:.1} m/s @ {:.0} deg, temperature {:.0}, area {:.0}",
            params.wind_speed, params.wind_direction, params.temperature, params.area
        );
        self.params = params;
        Ok(())
    }

    /// Advances every particle by `delta_time` seconds.
    ///
    /// Motion is tuned against a 60 FPS baseline: the timestep is converted
    /// to nominal frames, so halving the frame rate doubles per-call travel.
    /// Non-finite or negative timesteps are treated as zero and the step is
    /// capped at the configured maximum, so a caller resuming after a long
    /// stall cannot teleport the whole pool.
    ///
    /// Fire particles climb with lift scaled by the current intensity,
    /// recolor as they cool with height, and recycle above the plume top.
    /// Embers fall under a light gravity pull and recycle when they drop
    /// below the floor or drift past the domain's horizontal extent,
    /// respawning with the wind in force right now.
    pub fn advance(&mut self, delta_time: f32) {
        let dt = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };
        let step = dt.min(self.config.max_delta_time) * constants::NOMINAL_FRAME_RATE;
        self.ticks += 1;
        if step <= 0.0 {
            debug!("Tick {}: empty step (dt={:.4}s)", self.ticks, delta_time);
            return;
        }

        let scale = self.params.intensity_scale();
        let mut fire_respawned: u64 = 0;
        let mut ember_respawned: u64 = 0;

        for particle in &mut self.particles {
            match particle.class {
                ParticleClass::Fire => {
                    particle.position.x += particle.velocity.x * step;
                    particle.position.y += particle.velocity.y * step;
                    particle.position.z += particle.velocity.z * step * scale;

                    if particle.position.z > self.config.plume_top {
                        *particle =
                            emission::spawn_fire(&self.params, self.spawn_radius, &mut self.rng);
                        fire_respawned += 1;
                    } else {
                        particle.color = emission::flame_color_at(
                            self.params.temperature,
                            particle.position.z,
                        );
                    }
                }
                ParticleClass::Ember => {
                    particle.velocity.z -= constants::EMBER_GRAVITY * step;
                    particle.position += particle.velocity * step;

                    let horizontal = particle.position.x.hypot(particle.position.y);
                    if particle.position.z < self.config.ember_floor
                        || horizontal > self.config.domain_half_width
                    {
                        *particle =
                            emission::spawn_ember(&self.params, self.spawn_radius, &mut self.rng);
                        ember_respawned += 1;
                    }
                }
            }
        }

        self.fire_respawns += fire_respawned;
        self.ember_respawns += ember_respawned;
        debug!(
            "Tick {}: step {:.2} frames, respawned {} fire / {} embers",
            self.ticks, step, fire_respawned, ember_respawned
        );
    }

    /// Live view of the pool, fire particles first.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Parameters currently driving motion and respawns.
    #[must_use]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Tuning the pool was built with.
    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Total pool capacity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when the pool holds no particles. Both capacity floors are
    /// positive, so this stays false for any constructed simulator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of fire particles (the pool's leading segment).
    #[must_use]
    pub fn fire_count(&self) -> usize {
        self.fire_count
    }

    /// Number of ember particles.
    #[must_use]
    pub fn ember_count(&self) -> usize {
        self.ember_count
    }

    /// Current emission disk radius.
    #[must_use]
    pub fn spawn_radius(&self) -> f32 {
        self.spawn_radius
    }

    /// Number of `advance` calls made so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Fire particles recycled since construction.
    #[must_use]
    pub fn fire_respawns(&self) -> u64 {
        self.fire_respawns
    }

    /// Embers recycled since construction.
    #[must_use]
    pub fn ember_respawns(&self) -> u64 {
        self.ember_respawns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_capacity_split() {
        let sim = ParticleSimulator::with_seed(SimulationParameters::default(), 7).unwrap();
        assert_eq!(sim.len(), sim.fire_count() + sim.ember_count());
        let fire = sim
            .particles()
            .iter()
            .filter(|p| p.class == ParticleClass::Fire)
            .count();
        assert_eq!(fire, sim.fire_count());
    }

    #[test]
    fn test_default_capacities() {
        // area 100 => 600 fire; wind 10 m/s => 200 embers; radius 10.
        let sim = ParticleSimulator::with_seed(SimulationParameters::default(), 7).unwrap();
        assert_eq!(sim.fire_count(), 600);
        assert_eq!(sim.ember_count(), 200);
        assert!((sim.spawn_radius() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_spawn_radius_update() {
        let mut sim = ParticleSimulator::with_seed(SimulationParameters::default(), 7).unwrap();
        let wider = SimulationParameters {
            area: 400.0,
            ..SimulationParameters::default()
        };
        sim.set_parameters(wider).unwrap();
        assert!((sim.spawn_radius() - 20.0).abs() < f32::EPSILON);
        // Pool capacity is fixed at construction.
        assert_eq!(sim.fire_count(), 600);
        assert_eq!(sim.len(), 800);
    }

    #[test]
    fn test_zero_step_no_motion() {
        let mut sim = ParticleSimulator::with_seed(SimulationParameters::default(), 7).unwrap();
        let before = sim.particles().to_vec();

        sim.advance(0.0);
        sim.advance(-5.0);
        sim.advance(f32::NAN);

        for (a, b) in before.iter().zip(sim.particles()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.velocity, b.velocity);
        }
        assert_eq!(sim.ticks(), 3);
    }
}
