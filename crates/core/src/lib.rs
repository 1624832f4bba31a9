//! Wildfire Dashboard Visualization Engine
//!
//! Two independent components feed a live dashboard:
//!
//! - [`FieldSynthesizer`] turns a handful of heat sources into a dense
//!   intensity grid by summing Gaussian radial basis contributions, with
//!   optional per-cell jitter for visual texture. [`RiskLevel`] buckets the
//!   grid's peak for at-a-glance severity.
//! - [`ParticleSimulator`] animates a fixed pool of flame and ember
//!   particles driven by area, temperature and wind, recycling particles in
//!   place so buffer sizes never change mid-run.
//!
//! Both components take explicit seeds, so a dashboard session can be
//! replayed tick for tick.
//!
//! # Example
//!
//! ```
//! use ember_field_core::{
//!     FieldSynthesizer, ParticleSimulator, RiskLevel, SimulationParameters, Source,
//! };
//!
//! // Rasterize a hotspot into a 50x50 intensity field.
//! let mut synthesizer = FieldSynthesizer::with_seed(7);
//! let sources = [Source { row: 25, col: 25, intensity: 0.9 }];
//! let field = synthesizer.synthesize(50, 50, &sources, 0.05).unwrap();
//! assert_eq!(RiskLevel::classify(&field), RiskLevel::Critical);
//!
//! // Animate the matching particle system for one frame.
//! let mut simulator = ParticleSimulator::new(SimulationParameters::default()).unwrap();
//! simulator.advance(1.0 / 60.0);
//! assert!(!simulator.particles().is_empty());
//! ```

pub mod core_types;
pub mod field;
pub mod particles;

pub use core_types::{ParameterError, Rgb, SimulationParameters, TerrainProfile, Vec3};
pub use field::{Field, FieldSynthesizer, RiskLevel, Source};
pub use particles::{Particle, ParticleClass, ParticleSimulator, SimulatorConfig};
