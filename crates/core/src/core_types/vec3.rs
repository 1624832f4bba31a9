//! Vector type alias for 3D positions and directions.

use nalgebra::Vector3;

/// 3D vector type for positions, velocities, and wind.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`. The intensity grid
/// is two-dimensional but particles live in the volume above it, so the z
/// component carries height over the grid plane.
pub type Vec3 = Vector3<f32>;
