use crate::geom::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Chebyshev (L∞) distance between two cells.
///
/// This is the search heuristic for both movement models: exact for
/// unobstructed octile movement, a lower bound for cardinal movement.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(chebyshev(b, a), 4);
        assert_eq!(chebyshev(a, a), 0);
    }

    #[test]
    fn chebyshev_never_exceeds_manhattan() {
        for x in -3..=3 {
            for y in -3..=3 {
                let c = Cell::new(x, y);
                assert!(chebyshev(Cell::ZERO, c) <= manhattan(Cell::ZERO, c));
            }
        }
    }
}
