use crate::error::{Error, Result};

/// Minimum grid side length. The tracked radius is clamped to ten cells short
/// of the half-size, so anything smaller leaves no room for the cluster.
pub const MIN_GRID_SIZE: usize = 30;

/// Square occupancy lattice holding the aggregate, stored as a flat
/// row-major `Vec<bool>`.
///
/// Cells are write-once: [`Grid::occupy`] marks cells and nothing ever
/// clears them, so the aggregate grows monotonically.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    center: i32,
    cells: Vec<bool>,
    occupied: usize,
}

impl Grid {
    /// Create an all-empty `size x size` grid with the center cell occupied
    /// (the seed of the aggregate).
    ///
    /// Errors: `Error::InvalidParam` if `size < MIN_GRID_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_GRID_SIZE {
            return Err(Error::InvalidParam(format!(
                "grid size must be at least {MIN_GRID_SIZE}, got {size}"
            )));
        }
        let center = (size / 2) as i32;
        let mut grid = Self {
            size,
            center,
            cells: vec![false; size * size],
            occupied: 0,
        };
        grid.set(center, center);
        Ok(grid)
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the center cell on both axes.
    #[inline]
    pub fn center(&self) -> i32 {
        self.center
    }

    /// Number of occupied cells (always >= 1: the seed).
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Whether `(row, col)` lies inside the lattice.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        row as usize * self.size + col as usize
    }

    /// Whether a cell is part of the aggregate.
    ///
    /// Callers must keep coordinates inside the grid; the boundary recycler
    /// guarantees this for every diffusing particle before any lookup.
    #[inline]
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.cells[self.index(row, col)]
    }

    #[inline]
    fn set(&mut self, row: i32, col: i32) {
        let i = self.index(row, col);
        if !self.cells[i] {
            self.cells[i] = true;
            self.occupied += 1;
        }
    }

    /// Mark a batch of cells occupied. Re-marking an already occupied cell
    /// is a no-op, so fusion order within a batch is irrelevant.
    pub fn occupy(&mut self, cells: &[(i32, i32)]) {
        for &(row, col) in cells {
            self.set(row, col);
        }
    }

    /// All occupied coordinates, in row-major order.
    pub fn occupied_cells(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::with_capacity(self.occupied);
        for row in 0..self.size as i32 {
            for col in 0..self.size as i32 {
                if self.cells[row as usize * self.size + col as usize] {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Exact cluster radius: the maximum Euclidean distance of any occupied
    /// cell from the center.
    ///
    /// Scans the whole grid; used once per run for the authoritative result,
    /// not in the iteration loop (the incrementally tracked radius is a
    /// rounded, clamped approximation that only sizes the working window).
    pub fn max_radius(&self) -> f64 {
        let mut best = 0.0_f64;
        for (row, col) in self.occupied_cells() {
            let dr = (row - self.center) as f64;
            let dc = (col - self.center) as f64;
            best = best.max((dr * dr + dc * dc).sqrt());
        }
        best
    }
}
