//! Boolean occupancy grid.
//!
//! A [`Grid`] is built once from a width, a height and an obstacle set, and
//! never mutated afterwards. Changing the environment means building a new
//! grid.

use crate::error::PathError;
use crate::geom::Cell;

/// Largest number of cells a grid may hold (256 Mi, one byte each).
pub const MAX_CELLS: usize = 1 << 28;

/// A fixed-size 2D occupancy map. `true` marks a blocked cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    blocked: Vec<bool>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Build a grid of `width` × `height` cells with every cell in
    /// `obstacles` marked as blocked.
    ///
    /// Fails with [`PathError::InvalidConfiguration`] if either dimension is
    /// not positive, the area exceeds [`MAX_CELLS`] or the cell buffer cannot
    /// be allocated, and with [`PathError::InvalidObstacle`] for the first
    /// obstacle outside the grid. Duplicate obstacles are accepted.
    pub fn new<I>(width: i32, height: i32, obstacles: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let invalid = PathError::InvalidConfiguration { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or_else(|| invalid.clone())?;
        let mut blocked = Vec::new();
        if blocked.try_reserve_exact(len).is_err() {
            return Err(invalid);
        }
        blocked.resize(len, false);

        let mut grid = Self {
            blocked,
            width,
            height,
        };
        for cell in obstacles {
            let Some(i) = grid.idx(cell) else {
                return Err(PathError::InvalidObstacle {
                    cell,
                    width,
                    height,
                });
            };
            grid.blocked[i] = true;
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Always false: grids have positive dimensions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Whether `c` lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    /// Whether `c` is an obstacle. Cells outside the grid are not obstacles.
    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        self.idx(c).is_some_and(|i| self.blocked[i])
    }

    /// Whether `c` lies inside the grid and is free.
    #[inline]
    pub fn is_traversable(&self, c: Cell) -> bool {
        self.free_idx(c).is_some()
    }

    /// Number of distinct blocked cells.
    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Blocked cells in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| self.cell(i))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Cell` to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.width as usize + c.x as usize)
    }

    /// Flat index of `c` if it is inside the grid and free.
    #[inline]
    pub(crate) fn free_idx(&self, c: Cell) -> Option<usize> {
        self.idx(c).filter(|&i| !self.blocked[i])
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((idx % w) as i32, (idx / w) as i32)
    }
}
