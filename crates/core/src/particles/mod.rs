//! Particle pool simulation for flame bodies and wind-borne embers.

pub mod emission;
pub mod particle;
pub mod simulator;

pub use particle::{Particle, ParticleClass};
pub use simulator::{ParticleSimulator, SimulatorConfig};
