//! Row-major scalar grid produced by field synthesis.

use serde::{Deserialize, Serialize};

/// Dense 2D scalar field in row-major order.
///
/// Cells are `f32` in `0.0..=1.0` after synthesis. Fields are plain data:
/// everything is public so a renderer can hand the buffer to a texture
/// upload or a heatmap widget without copying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Cell values, `rows * cols` entries, row-major.
    pub data: Vec<f32>,
    /// Number of rows (grid height).
    pub rows: usize,
    /// Number of columns (grid width).
    pub cols: usize,
}

impl Field {
    /// Creates a zero-filled field.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Field dimensions must be positive");
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Value at (row, col).
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < self.rows && col < self.cols,
            "Field coordinates out of bounds"
        );
        self.data[row * self.cols + col]
    }

    /// Sets the value at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(
            row < self.rows && col < self.cols,
            "Field coordinates out of bounds"
        );
        self.data[row * self.cols + col] = value;
    }

    /// All cells as a flat slice, row-major.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable view of all cells.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the field holds no cells. Dimensions are validated at
    /// construction, so this stays false for any constructed field.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Location and value of the hottest cell.
    ///
    /// Returns `(row, col, value)`. Ties resolve to the first cell in
    /// row-major order. A single linear scan, no allocation.
    #[must_use]
    pub fn peak(&self) -> (usize, usize, f32) {
        let mut best_idx = 0;
        let mut best = f32::NEG_INFINITY;
        for (idx, &value) in self.data.iter().enumerate() {
            if value > best {
                best = value;
                best_idx = idx;
            }
        }
        (best_idx / self.cols, best_idx % self.cols, best)
    }
}
