//! # stepwise_astar
//!
//! Incremental [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on a fixed-size grid with
//! 8-directional movement. Instead of running to completion, the search performs exactly one
//! frontier expansion per [step](solver::IncrementalSearch::step) and hands back the tags of the
//! whole grid, so a renderer or test can watch it unfold call by call.
//!
//! Straight moves cost [STRAIGHT_COST] and diagonal moves [DIAGONAL_COST], an integer
//! approximation of 1 : √2. The default heuristic is the matching
//! [octile distance](solver::astar::Octile).
//!
//! ```
//! use stepwise_astar::{CellTag, IncrementalSearch, StepwiseAstar, TagGrid};
//!
//! let cells: TagGrid = "S.#\n.##\n..E".parse().unwrap();
//! let mut search = StepwiseAstar::new();
//! search.initialize(cells).unwrap();
//! loop {
//!     let (snapshot, running) = search.step().unwrap();
//!     if !running {
//!         assert_eq!(snapshot.count(CellTag::Path), 2);
//!         break;
//!     }
//! }
//! assert_eq!(search.path_cost(), Some(34));
//! ```
pub mod error;
pub mod frontier;
pub mod reference;
mod search_grid;
pub mod solver;
pub mod tag_grid;

pub use error::{InvalidState, SetupError};
pub use grid_util::point::Point;
pub use solver::astar::StepwiseAstar;
pub use solver::dijkstra::StepwiseDijkstra;
pub use solver::{IncrementalSearch, SearchStatus};
pub use tag_grid::{CellTag, TagGrid};

/// Cost of moving to a horizontally or vertically adjacent cell.
pub const STRAIGHT_COST: i32 = 10;
/// Cost of moving to a diagonally adjacent cell.
pub const DIAGONAL_COST: i32 = 14;
