use grid_util::Point;

use crate::solver::stepwise::StepwiseSearch;
use crate::solver::Heuristic;

/// Never estimates anything, which reduces the search to Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}

/// Step-wise uniform-cost search, flooding outwards from the start.
pub type StepwiseDijkstra = StepwiseSearch<Zero>;
