use std::collections::{BinaryHeap, HashMap};

use crate::distance::chebyshev;
use crate::error::{PathError, QueryFault};
use crate::finder::PathFinder;
use crate::geom::Cell;
use crate::grid::Grid;
use crate::movement::STEP_COST;
use crate::options::SearchOptions;

// ---------------------------------------------------------------------------
// Per-search bookkeeping
// ---------------------------------------------------------------------------

/// Best known cost and came-from link for one discovered cell. The f-score
/// travels with the cell's open-set entry.
#[derive(Clone, Debug)]
struct Node {
    g: u32,
    parent: Option<usize>,
    closed: bool,
}

/// Open-set entry. Pops by lowest `f`, then lowest `g`, then oldest `seq`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: u32,
    g: u32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then(other.g.cmp(&self.g))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set, closed set, came-from links and scores for a single query.
///
/// Only discovered cells get an entry, keyed by flat grid index, so memory
/// follows the searched region rather than the grid area.
#[derive(Default)]
struct SearchState {
    nodes: HashMap<usize, Node>,
    open: BinaryHeap<NodeRef>,
    seq: u64,
    expanded: usize,
}

impl SearchState {
    /// Record a (better) route to `idx` and queue it.
    fn relax(&mut self, idx: usize, g: u32, h: u32, parent: Option<usize>) {
        let f = g + h;
        self.nodes.insert(
            idx,
            Node {
                g,
                parent,
                closed: false,
            },
        );
        self.open.push(NodeRef {
            idx,
            f,
            g,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Pop the best live open entry, discarding superseded ones.
    fn pop(&mut self) -> Option<NodeRef> {
        while let Some(entry) = self.open.pop() {
            match self.nodes.get(&entry.idx) {
                Some(n) if !n.closed && n.g == entry.g => return Some(entry),
                _ => continue,
            }
        }
        None
    }

    fn close(&mut self, idx: usize) {
        if let Some(n) = self.nodes.get_mut(&idx) {
            n.closed = true;
        }
        self.expanded += 1;
    }
}

/// Walk came-from links back from `goal`. The start cell has no parent and
/// is left out.
fn reconstruct(grid: &Grid, nodes: &HashMap<usize, Node>, goal: usize) -> Vec<Cell> {
    let mut path = Vec::with_capacity(nodes.get(&goal).map_or(0, |n| n.g as usize));
    let mut ci = goal;
    while let Some(parent) = nodes.get(&ci).and_then(|n| n.parent) {
        path.push(grid.cell(ci));
        ci = parent;
    }
    path.reverse();
    path
}

impl PathFinder {
    /// Compute a shortest path from `start` to `target` with A*.
    ///
    /// The returned path lists the moves to make: it starts with the first
    /// step after `start` and ends with `target`. When `start == target` the
    /// path is empty.
    ///
    /// Ties on f-score are broken by the lower g-score, then by the entry
    /// queued first; neighbours are queued in [`Movement::offsets`] order.
    /// The result is therefore fully determined by the grid and the query.
    ///
    /// # Errors
    ///
    /// - [`PathError::InvalidQuery`] if `start` (checked first) or `target`
    ///   is outside the grid or blocked.
    /// - [`PathError::NoPath`] if the target cannot be reached.
    /// - [`PathError::ExpansionLimit`] if `opts.max_expansions` cells were
    ///   expanded without reaching the target.
    ///
    /// [`Movement::offsets`]: crate::Movement::offsets
    pub fn try_find_path(
        &self,
        start: Cell,
        target: Cell,
        opts: &SearchOptions,
    ) -> Result<Vec<Cell>, PathError> {
        self.astar(&mut SearchState::default(), start, target, opts)
    }

    fn astar(
        &self,
        state: &mut SearchState,
        start: Cell,
        target: Cell,
        opts: &SearchOptions,
    ) -> Result<Vec<Cell>, PathError> {
        let grid = self.grid();
        let start_idx = endpoint(grid, start)?;
        let goal_idx = endpoint(grid, target)?;

        if start_idx == goal_idx {
            return Ok(Vec::new());
        }

        state.relax(start_idx, 0, chebyshev(start, target), None);

        while let Some(current) = state.pop() {
            let ci = current.idx;
            if ci == goal_idx {
                let path = reconstruct(grid, &state.nodes, goal_idx);
                log::debug!(
                    "path {start} -> {target}: {} moves, {} expansions",
                    path.len(),
                    state.expanded
                );
                return Ok(path);
            }

            if let Some(limit) = opts.max_expansions {
                if state.expanded >= limit {
                    log::debug!("path {start} -> {target}: expansion limit {limit} reached");
                    return Err(PathError::ExpansionLimit { limit });
                }
            }

            state.close(ci);
            let cp = grid.cell(ci);
            log::trace!("expand {cp} g={} f={}", current.g, current.f);

            let tentative_g = current.g + STEP_COST;
            for &d in opts.movement.offsets() {
                let np = cp + d;
                let Some(ni) = grid.free_idx(np) else {
                    continue;
                };
                if let Some(n) = state.nodes.get(&ni) {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                }
                state.relax(ni, tentative_g, chebyshev(np, target), Some(ci));
            }
        }

        log::debug!(
            "path {start} -> {target}: unreachable after {} expansions",
            state.expanded
        );
        Err(PathError::NoPath { start, target })
    }
}

fn endpoint(grid: &Grid, c: Cell) -> Result<usize, PathError> {
    let Some(i) = grid.idx(c) else {
        return Err(PathError::InvalidQuery {
            cell: c,
            reason: QueryFault::OutOfBounds,
        });
    };
    if grid.is_blocked(c) {
        return Err(PathError::InvalidQuery {
            cell: c,
            reason: QueryFault::Blocked,
        });
    }
    Ok(i)
}
