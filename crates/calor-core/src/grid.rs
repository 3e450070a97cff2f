//! Owned 2D grid storage for the finite-difference kernels.

use crate::error::GridError;
use std::ops::{Index, IndexMut};

/// A dense, row-major 2D grid of `f64` cells with explicit dimensions.
///
/// Cell `(i, j)` lives at flat index `i * ny + j`, with `0 <= i < nx` and
/// `0 <= j < ny`. The grid owns its storage; the length of the backing
/// vector is always exactly `nx * ny`, so kernels can validate shapes
/// instead of trusting raw pointers.
///
/// # Examples
///
/// ```
/// use calor_core::Grid2D;
///
/// let mut g = Grid2D::new(4, 3).unwrap();
/// g[(2, 1)] = 7.5;
/// assert_eq!(g[(2, 1)], 7.5);
/// assert_eq!(g.len(), 12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D {
    nx: u32,
    ny: u32,
    cells: Vec<f64>,
}

impl Grid2D {
    /// Maximum dimension size: flat indices must fit comfortably in `usize`
    /// on 32-bit targets, and row/column arithmetic stays within `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a zero-filled `nx x ny` grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(nx: u32, ny: u32) -> Result<Self, GridError> {
        Self::check_dims(nx, ny)?;
        Ok(Self {
            nx,
            ny,
            cells: vec![0.0; nx as usize * ny as usize],
        })
    }

    /// Create an `nx x ny` grid with every cell set to `value`.
    pub fn filled(nx: u32, ny: u32, value: f64) -> Result<Self, GridError> {
        Self::check_dims(nx, ny)?;
        Ok(Self {
            nx,
            ny,
            cells: vec![value; nx as usize * ny as usize],
        })
    }

    /// Create an `nx x ny` grid where cell `(i, j)` holds `f(i, j)`.
    pub fn from_fn(
        nx: u32,
        ny: u32,
        mut f: impl FnMut(u32, u32) -> f64,
    ) -> Result<Self, GridError> {
        Self::check_dims(nx, ny)?;
        let mut cells = Vec::with_capacity(nx as usize * ny as usize);
        for i in 0..nx {
            for j in 0..ny {
                cells.push(f(i, j));
            }
        }
        Ok(Self { nx, ny, cells })
    }

    fn check_dims(nx: u32, ny: u32) -> Result<(), GridError> {
        if nx == 0 || ny == 0 {
            return Err(GridError::EmptyGrid);
        }
        if nx > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "nx",
                value: nx,
                max: Self::MAX_DIM,
            });
        }
        if ny > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "ny",
                value: ny,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }

    /// Number of rows.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Number of columns.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Shape as `(nx, ny)`.
    pub fn shape(&self) -> (u32, u32) {
        (self.nx, self.ny)
    }

    /// Total cell count, `nx * ny`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `true` when `other` has the same `(nx, ny)` shape.
    pub fn same_shape(&self, other: &Grid2D) -> bool {
        self.nx == other.nx && self.ny == other.ny
    }

    /// Flat index of cell `(i, j)`.
    #[inline]
    pub fn idx(&self, i: u32, j: u32) -> usize {
        debug_assert!(i < self.nx && j < self.ny);
        i as usize * self.ny as usize + j as usize
    }

    /// Row `i` as a slice of `ny` cells.
    pub fn row(&self, i: u32) -> &[f64] {
        let start = self.idx(i, 0);
        &self.cells[start..start + self.ny as usize]
    }

    /// Flat row-major view of all cells.
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Mutable flat row-major view of all cells.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.cells.fill(value);
    }
}

impl Index<(u32, u32)> for Grid2D {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (u32, u32)) -> &f64 {
        &self.cells[self.idx(i, j)]
    }
}

impl IndexMut<(u32, u32)> for Grid2D {
    #[inline]
    fn index_mut(&mut self, (i, j): (u32, u32)) -> &mut f64 {
        let idx = self.idx(i, j);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_zero_rows_returns_error() {
        assert_eq!(Grid2D::new(0, 5), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_zero_cols_returns_error() {
        assert_eq!(Grid2D::new(5, 0), Err(GridError::EmptyGrid));
    }

    #[test]
    fn new_rejects_dims_exceeding_max() {
        let big = Grid2D::MAX_DIM + 1;
        assert!(matches!(
            Grid2D::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "nx", .. })
        ));
        assert!(matches!(
            Grid2D::new(5, big),
            Err(GridError::DimensionTooLarge { name: "ny", .. })
        ));
    }

    #[test]
    fn new_is_zero_filled() {
        let g = Grid2D::new(3, 4).unwrap();
        assert_eq!(g.len(), 12);
        assert!(g.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn filled_sets_every_cell() {
        let g = Grid2D::filled(2, 3, 1.5).unwrap();
        assert!(g.as_slice().iter().all(|&v| v == 1.5));
    }

    #[test]
    fn from_fn_row_major_layout() {
        let g = Grid2D::from_fn(3, 4, |i, j| (i * 10 + j) as f64).unwrap();
        assert_eq!(g[(0, 0)], 0.0);
        assert_eq!(g[(0, 3)], 3.0);
        assert_eq!(g[(2, 1)], 21.0);
        // Flat layout: cell (1, 0) directly follows (0, ny-1).
        assert_eq!(g.as_slice()[4], 10.0);
    }

    #[test]
    fn row_slices_have_ny_cells() {
        let g = Grid2D::from_fn(3, 4, |i, _| i as f64).unwrap();
        assert_eq!(g.row(1), &[1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn index_mut_writes_through() {
        let mut g = Grid2D::new(2, 2).unwrap();
        g[(1, 1)] = 9.0;
        assert_eq!(g.as_slice(), &[0.0, 0.0, 0.0, 9.0]);
    }

    #[test]
    fn same_shape_compares_both_axes() {
        let a = Grid2D::new(3, 4).unwrap();
        let b = Grid2D::new(3, 4).unwrap();
        let c = Grid2D::new(4, 3).unwrap();
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }

    proptest! {
        #[test]
        fn idx_is_bijective(nx in 1u32..20, ny in 1u32..20) {
            let g = Grid2D::new(nx, ny).unwrap();
            let mut seen = vec![false; g.len()];
            for i in 0..nx {
                for j in 0..ny {
                    let idx = g.idx(i, j);
                    prop_assert!(!seen[idx], "flat index {idx} hit twice");
                    seen[idx] = true;
                }
            }
            prop_assert!(seen.iter().all(|&s| s));
        }
    }
}
