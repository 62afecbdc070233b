//! A* shortest paths on fixed-size obstacle grids.
//!
//! A [`PathFinder`] owns an immutable occupancy [`Grid`] built from a width,
//! a height and a set of blocked cells. Queries run A* with a Chebyshev
//! heuristic and unit step cost under one of two movement models:
//!
//! - [`Movement::Cardinal`]: up, down, left, right
//! - [`Movement::Octile`]: cardinal plus the four diagonals
//!
//! ```
//! use gridpath::{Cell, PathFinder};
//!
//! let wall = (0..4).map(|y| Cell::new(2, y));
//! let pf = PathFinder::new(5, 5, wall).unwrap();
//! let path = pf.find_path(Cell::new(0, 0), Cell::new(4, 4), true);
//! assert_eq!(path.len(), 6);
//! assert_eq!(path.last(), Some(&Cell::new(4, 4)));
//! ```
//!
//! [`PathFinder::find_path`] folds every failure into an empty path;
//! [`PathFinder::try_find_path`] reports a [`PathError`] instead.

mod astar;
mod bfs;
mod distance;
mod error;
mod finder;
mod geom;
mod grid;
mod movement;
mod options;

pub use distance::{chebyshev, manhattan};
pub use error::{PathError, QueryFault};
pub use finder::PathFinder;
pub use geom::Cell;
pub use grid::{Grid, MAX_CELLS};
pub use movement::{Movement, STEP_COST};
pub use options::SearchOptions;
