//! Core data types shared by field synthesis and the particle pool.

pub mod color;
pub mod error;
pub mod math;
pub mod params;
pub mod vec3;

pub use color::Rgb;
pub use error::ParameterError;
pub use params::{SimulationParameters, TerrainProfile};
pub use vec3::Vec3;
