use crate::error::PathError;
use crate::geom::Cell;
use crate::grid::Grid;
use crate::options::SearchOptions;

/// Shortest-path finder over a fixed-size obstacle grid.
///
/// A `PathFinder` holds only its [`Grid`]. Every search allocates its own
/// open/closed sets and score tables and drops them on return, so searches
/// take `&self` and may run concurrently; reconfiguring takes `&mut self`
/// and is therefore never interleaved with a search.
#[derive(Debug, Clone)]
pub struct PathFinder {
    grid: Grid,
}

impl PathFinder {
    /// Create a finder over a `width` × `height` grid with the given
    /// obstacles. See [`Grid::new`] for the validation rules.
    pub fn new<I>(width: i32, height: i32, obstacles: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let grid = Grid::new(width, height, obstacles)?;
        log::debug!(
            "pathfinder configured: {}x{} grid, {} obstacles",
            width,
            height,
            grid.obstacle_count()
        );
        Ok(Self { grid })
    }

    /// Replace the grid with a freshly built one.
    ///
    /// On error the previous grid is kept unchanged.
    pub fn configure<I>(&mut self, width: i32, height: i32, obstacles: I) -> Result<(), PathError>
    where
        I: IntoIterator<Item = Cell>,
    {
        *self = Self::new(width, height, obstacles)?;
        Ok(())
    }

    /// Reconfigure and search in one call.
    ///
    /// Configuration errors are returned; an unreachable or invalid query
    /// yields an empty path, as with [`find_path`](Self::find_path).
    pub fn configure_and_find<I>(
        &mut self,
        width: i32,
        height: i32,
        obstacles: I,
        start: Cell,
        target: Cell,
        allow_diagonals: bool,
    ) -> Result<Vec<Cell>, PathError>
    where
        I: IntoIterator<Item = Cell>,
    {
        self.configure(width, height, obstacles)?;
        Ok(self.find_path(start, target, allow_diagonals))
    }

    /// The current occupancy grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether `c` is inside the grid and free.
    #[inline]
    pub fn is_traversable(&self, c: Cell) -> bool {
        self.grid.is_traversable(c)
    }

    /// Shortest path from `start` to `target`, excluding `start`.
    ///
    /// Returns an empty path when no move is needed or none is possible:
    /// `start == target`, an endpoint outside the grid or blocked, or a
    /// target cut off by obstacles. Use
    /// [`try_find_path`](Self::try_find_path) to tell these apart.
    pub fn find_path(&self, start: Cell, target: Cell, allow_diagonals: bool) -> Vec<Cell> {
        self.find_path_with(start, target, &SearchOptions::new(allow_diagonals))
    }

    /// [`find_path`](Self::find_path) with explicit search options.
    pub fn find_path_with(&self, start: Cell, target: Cell, opts: &SearchOptions) -> Vec<Cell> {
        match self.try_find_path(start, target, opts) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("no path returned: {e}");
                Vec::new()
            }
        }
    }
}
