use grid_util::Point;

use crate::solver::stepwise::StepwiseSearch;
use crate::solver::Heuristic;
use crate::{DIAGONAL_COST, STRAIGHT_COST};

/// Octile distance: as many diagonal moves as possible, the rest straight. Matches the move costs
/// exactly on an open grid, so it is admissible and consistent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Octile;

impl Heuristic for Octile {
    fn estimate(&self, from: &Point, to: &Point) -> i32 {
        let delta_x = (from.x - to.x).abs();
        let delta_y = (from.y - to.y).abs();
        DIAGONAL_COST * delta_x.min(delta_y) + STRAIGHT_COST * (delta_x - delta_y).abs()
    }
}

/// Step-wise A* guided by the [Octile] heuristic.
pub type StepwiseAstar = StepwiseSearch<Octile>;
