use crate::error::{InvalidState, SetupError};
use crate::tag_grid::TagGrid;
use crate::{DIAGONAL_COST, STRAIGHT_COST};
use grid_util::point::Point;

pub mod astar;
pub mod dijkstra;
pub mod stepwise;

/// Estimate of the remaining cost between two points. Must never overestimate the cost of the
/// cheapest 8-connected route for the search to stay optimal.
pub trait Heuristic {
    fn estimate(&self, from: &Point, to: &Point) -> i32;
}

/// Where a search currently is. [Found](SearchStatus::Found) and
/// [NoPath](SearchStatus::NoPath) are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    Uninitialized,
    Running,
    Found,
    NoPath,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchStatus::Found | SearchStatus::NoPath)
    }
}

/// The contract a driver (renderer, replay tool, test) uses to run a search one expansion at a
/// time.
pub trait IncrementalSearch {
    /// Discards any previous search and prepares a new one over `cells`.
    fn initialize(&mut self, cells: TagGrid) -> Result<(), SetupError>;

    /// Performs a single expansion and returns the resulting tags together with whether the
    /// search is still running.
    fn step(&mut self) -> Result<(TagGrid, bool), InvalidState>;

    fn status(&self) -> SearchStatus;

    /// Steps until the search finishes. Returns the final snapshot and the number of steps that
    /// reported the search as still running.
    fn run_to_end(&mut self) -> Result<(TagGrid, usize), InvalidState> {
        let mut running_steps = 0;
        loop {
            let (snapshot, running) = self.step()?;
            if !running {
                return Ok((snapshot, running_steps));
            }
            running_steps += 1;
        }
    }
}

/// Cost of a single move between adjacent points: [STRAIGHT_COST] or [DIAGONAL_COST].
pub fn move_cost(p1: &Point, p2: &Point) -> i32 {
    let delta_x = (p1.x - p2.x).abs();
    let delta_y = (p1.y - p2.y).abs();
    debug_assert!(delta_x <= 1 && delta_y <= 1);
    if delta_x != 0 && delta_y != 0 {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

/// Sums [move_cost] over consecutive points of a route.
pub fn path_cost(path: &[Point]) -> i32 {
    path.windows(2).map(|w| move_cost(&w[0], &w[1])).sum()
}
