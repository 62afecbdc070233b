use std::collections::VecDeque;

use crate::finder::PathFinder;
use crate::geom::Cell;
use crate::movement::Movement;

const UNREACHABLE: u32 = u32::MAX;

impl PathFinder {
    /// Minimum number of moves from `start` to `target` by breadth-first
    /// search, or `None` if either endpoint is not traversable or the target
    /// cannot be reached.
    ///
    /// Independent of the A* machinery; useful to cross-check path lengths.
    pub fn bfs_distance(&self, start: Cell, target: Cell, movement: Movement) -> Option<u32> {
        let grid = self.grid();
        let si = grid.free_idx(start)?;
        let gi = grid.free_idx(target)?;

        let mut dist = vec![UNREACHABLE; grid.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        dist[si] = 0;
        queue.push_back(si);

        while let Some(ci) = queue.pop_front() {
            if ci == gi {
                return Some(dist[ci]);
            }
            let cp = grid.cell(ci);
            for &d in movement.offsets() {
                let Some(ni) = grid.free_idx(cp + d) else {
                    continue;
                };
                if dist[ni] != UNREACHABLE {
                    continue;
                }
                dist[ni] = dist[ci] + 1;
                queue.push_back(ni);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_distances() {
        let pf = PathFinder::new(5, 5, []).unwrap();
        let (a, b) = (Cell::new(0, 0), Cell::new(4, 3));
        assert_eq!(pf.bfs_distance(a, b, Movement::Cardinal), Some(7));
        assert_eq!(pf.bfs_distance(a, b, Movement::Octile), Some(4));
        assert_eq!(pf.bfs_distance(a, a, Movement::Octile), Some(0));
    }

    #[test]
    fn blocked_endpoints_and_walls() {
        let wall: Vec<Cell> = (0..3).map(|y| Cell::new(1, y)).collect();
        let pf = PathFinder::new(3, 3, wall).unwrap();
        assert_eq!(
            pf.bfs_distance(Cell::new(0, 0), Cell::new(2, 0), Movement::Octile),
            None
        );
        assert_eq!(
            pf.bfs_distance(Cell::new(1, 0), Cell::new(0, 0), Movement::Octile),
            None
        );
        assert_eq!(
            pf.bfs_distance(Cell::new(0, 0), Cell::new(9, 9), Movement::Octile),
            None
        );
    }
}
