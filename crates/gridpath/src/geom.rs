use std::fmt;
use std::ops::{Add, Sub};

/// An integer grid coordinate. Also used for movement offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 4);
        assert_eq!(a + b, Cell::new(4, 6));
        assert_eq!(b - a, Cell::new(2, 2));
        assert_eq!(a + Cell::new(-1, 1) - Cell::ZERO, Cell::new(0, 3));
        assert_eq!(Cell::from((7, -3)), Cell::new(7, -3));
    }

    #[test]
    fn cell_hash_matches_eq() {
        let set: HashSet<Cell> = [Cell::new(1, 1), Cell::new(1, 1), Cell::new(1, 2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(2, -1).to_string(), "(2, -1)");
    }
}
