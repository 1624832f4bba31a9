//! Particle data shared by the fire and ember populations.

use serde::{Deserialize, Serialize};

use crate::core_types::{Rgb, Vec3};

/// Which population a particle belongs to.
///
/// Fire particles render the flame body; embers are the wind-carried sparks
/// drifting off it. The two classes share one pool but follow different
/// motion and recycling rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleClass {
    Fire,
    Ember,
}

/// A single pooled particle.
///
/// Plain data, fully public: renderers iterate the pool every frame and read
/// positions and colors straight out of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// World-space position. The grid plane sits at z = 0.
    pub position: Vec3,
    /// Velocity in world units per nominal frame.
    pub velocity: Vec3,
    /// Current display color.
    pub color: Rgb,
    /// Population this particle belongs to.
    pub class: ParticleClass,
}
