//! Shared math helpers for kernel shaping and disk sampling.

use rand::Rng;

/// Divisor mapping grid rows to the Gaussian kernel width.
///
/// A 50-row grid gets a sigma of 6.25 cells, which keeps a centered source's
/// footprint comfortably inside the grid while still reaching the edges with
/// a visible tail.
pub const SIGMA_DIVISOR: f32 = 8.0;

/// Gaussian kernel width for a grid with the given number of rows.
#[inline]
#[must_use]
pub fn kernel_sigma(rows: usize) -> f32 {
    rows as f32 / SIGMA_DIVISOR
}

/// Samples a point uniformly from a disk of the given radius.
///
/// The square root on the uniform variate makes the distribution uniform
/// over area rather than over radius, so samples do not bunch at the center.
#[inline]
pub fn sample_disk(rng: &mut impl Rng, radius: f32) -> (f32, f32) {
    let r = rng.random::<f32>().sqrt() * radius;
    let theta = rng.random_range(0.0..std::f32::consts::TAU);
    (r * theta.cos(), r * theta.sin())
}
