use std::fmt;

use thiserror::Error;

use crate::geom::Cell;

/// Why a query endpoint was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFault {
    /// The cell lies outside the grid.
    OutOfBounds,
    /// The cell is an obstacle.
    Blocked,
}

impl fmt::Display for QueryFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Blocked => f.write_str("blocked"),
        }
    }
}

/// Errors raised while configuring a grid or running a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Width or height was not strictly positive, or the grid is too large
    /// to allocate.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidConfiguration { width: i32, height: i32 },
    /// An obstacle lies outside the grid.
    #[error("obstacle {cell} lies outside the {width}x{height} grid")]
    InvalidObstacle { cell: Cell, width: i32, height: i32 },
    /// Start or target cannot be stood on.
    #[error("query endpoint {cell} is {reason}")]
    InvalidQuery { cell: Cell, reason: QueryFault },
    /// The open set was exhausted before reaching the target.
    #[error("no path from {start} to {target}")]
    NoPath { start: Cell, target: Cell },
    /// The node-expansion ceiling was hit.
    #[error("search gave up after expanding {limit} cells")]
    ExpansionLimit { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_cell() {
        let e = PathError::InvalidObstacle {
            cell: Cell::new(9, 1),
            width: 5,
            height: 5,
        };
        assert_eq!(e.to_string(), "obstacle (9, 1) lies outside the 5x5 grid");

        let e = PathError::InvalidQuery {
            cell: Cell::new(0, 0),
            reason: QueryFault::Blocked,
        };
        assert_eq!(e.to_string(), "query endpoint (0, 0) is blocked");
    }
}
