use crate::geom::Cell;

/// Cost of a single move. Diagonal and orthogonal steps cost the same.
pub const STEP_COST: u32 = 1;

const OFFSETS: [Cell; 8] = [
    Cell::new(0, 1),
    Cell::new(0, -1),
    Cell::new(-1, 0),
    Cell::new(1, 0),
    Cell::new(-1, 1),
    Cell::new(1, 1),
    Cell::new(-1, -1),
    Cell::new(1, -1),
];

/// Movement model: which neighbours a cell can step to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Movement {
    /// Up, down, left, right.
    Cardinal,
    /// Cardinal plus the four diagonals.
    #[default]
    Octile,
}

impl Movement {
    /// Pick the model from an "allow diagonals" flag.
    #[inline]
    pub fn from_diagonals(allow_diagonals: bool) -> Self {
        if allow_diagonals {
            Self::Octile
        } else {
            Self::Cardinal
        }
    }

    #[inline]
    pub fn allows_diagonals(self) -> bool {
        matches!(self, Self::Octile)
    }

    /// Offsets in expansion order: up, down, left, right, then the
    /// diagonals up-left, up-right, down-left, down-right.
    #[inline]
    pub fn offsets(self) -> &'static [Cell] {
        match self {
            Self::Cardinal => &OFFSETS[..4],
            Self::Octile => &OFFSETS,
        }
    }

    /// Whether `to` is reachable from `from` in exactly one move.
    pub fn is_step(self, from: Cell, to: Cell) -> bool {
        self.offsets().contains(&(to - from))
    }
}
