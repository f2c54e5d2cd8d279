use grid_util::point::Point;
use log::{debug, info, trace, warn};

use crate::error::{InvalidState, SetupError};
use crate::frontier::Frontier;
use crate::search_grid::SearchGrid;
use crate::solver::{Heuristic, IncrementalSearch, SearchStatus};
use crate::tag_grid::{CellTag, TagGrid};

/// Best-first search that performs exactly one expansion per [step](IncrementalSearch::step).
/// All state lives here between calls: the node arena, the frontier and the outcome.
///
/// The frontier keeps every push, including ones superseded by a cheaper route to the same
/// node. Those entries are dropped when popped because their node is already
/// [Visited](CellTag::Visited); skipping that check would expand finalized nodes a second time.
pub struct StepwiseSearch<H> {
    pub heuristic: H,
    grid: Option<SearchGrid>,
    /// Items are (node index, g at push time), keyed by g + h.
    frontier: Frontier<(usize, i32), i32>,
    status: SearchStatus,
    expansions: usize,
    path: Vec<Point>,
}

impl<H: Heuristic + Default> StepwiseSearch<H> {
    pub fn new() -> StepwiseSearch<H> {
        StepwiseSearch::with_heuristic(H::default())
    }
}

impl<H: Heuristic + Default> Default for StepwiseSearch<H> {
    fn default() -> Self {
        StepwiseSearch::new()
    }
}

impl<H: Heuristic> StepwiseSearch<H> {
    pub fn with_heuristic(heuristic: H) -> StepwiseSearch<H> {
        StepwiseSearch {
            heuristic,
            grid: None,
            frontier: Frontier::new(),
            status: SearchStatus::Uninitialized,
            expansions: 0,
            path: Vec::new(),
        }
    }

    /// The route from start to end, both included. Only available once the end was reached.
    pub fn path(&self) -> Option<&[Point]> {
        if self.status == SearchStatus::Found {
            Some(&self.path)
        } else {
            None
        }
    }

    /// Cost of the found route, i.e. g of the end node.
    pub fn path_cost(&self) -> Option<i32> {
        match (&self.grid, self.status) {
            (Some(grid), SearchStatus::Found) => grid.nodes[grid.end].g,
            _ => None,
        }
    }

    /// Number of nodes expanded so far in the current search.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of entries currently in the frontier, stale ones included.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    fn reset(&mut self) {
        self.grid = None;
        self.frontier.clear();
        self.status = SearchStatus::Uninitialized;
        self.expansions = 0;
        self.path.clear();
    }
}

/// Returns h of a node, computing and caching it on first use.
fn cached_heuristic<H: Heuristic>(heuristic: &H, grid: &mut SearchGrid, ix: usize) -> i32 {
    let end = grid.nodes[grid.end].position;
    let node = &mut grid.nodes[ix];
    let position = node.position;
    *node
        .h
        .get_or_insert_with(|| heuristic.estimate(&position, &end))
}

/// Follows predecessors back from the end, marks the nodes strictly between the endpoints as
/// [Path](CellTag::Path) and returns the route in start-to-end order.
fn reconstruct_path(grid: &mut SearchGrid) -> Vec<Point> {
    let mut route: Vec<usize> =
        std::iter::successors(Some(grid.end), |&ix| grid.nodes[ix].predecessor).collect();
    route.reverse();
    for &ix in &route {
        if ix != grid.start && ix != grid.end {
            grid.nodes[ix].tag = CellTag::Path;
        }
    }
    route.iter().map(|&ix| grid.nodes[ix].position).collect()
}

impl<H: Heuristic> IncrementalSearch for StepwiseSearch<H> {
    fn initialize(&mut self, cells: TagGrid) -> Result<(), SetupError> {
        self.reset();
        let mut grid = SearchGrid::build(&cells)?;
        let start = grid.start;
        grid.nodes[start].g = Some(0);
        let h = cached_heuristic(&self.heuristic, &mut grid, start);
        self.frontier.push((start, 0), h);
        info!(
            "Initialized {}x{} search from {} to {}",
            grid.width, grid.height, grid.nodes[start].position, grid.nodes[grid.end].position
        );
        self.grid = Some(grid);
        self.status = SearchStatus::Running;
        Ok(())
    }

    fn step(&mut self) -> Result<(TagGrid, bool), InvalidState> {
        let grid = self.grid.as_mut().ok_or(InvalidState)?;
        if self.status.is_terminal() {
            warn!("Stepping a finished search ({:?})", self.status);
            return Ok((grid.snapshot(), false));
        }

        let mut next = None;
        while let Some(((ix, g), _)) = self.frontier.pop_min() {
            if grid.nodes[ix].tag == CellTag::Visited {
                trace!("Discarding stale entry for {}", grid.nodes[ix].position);
                continue;
            }
            next = Some((ix, g));
            break;
        }
        let Some((current, g_current)) = next else {
            self.status = SearchStatus::NoPath;
            info!("Frontier exhausted after {} expansions, no path", self.expansions);
            return Ok((grid.snapshot(), false));
        };

        if current == grid.end {
            self.path = reconstruct_path(grid);
            self.status = SearchStatus::Found;
            info!(
                "Reached {} with cost {} after {} expansions",
                grid.nodes[current].position, g_current, self.expansions
            );
            return Ok((grid.snapshot(), false));
        }

        if grid.nodes[current].tag == CellTag::Explored {
            grid.nodes[current].tag = CellTag::Visited;
        }
        self.expansions += 1;
        debug!(
            "Expanding {} (g = {}, frontier = {})",
            grid.nodes[current].position,
            g_current,
            self.frontier.len()
        );

        for (neighbor, move_cost) in grid.neighbors_of(current) {
            if matches!(
                grid.nodes[neighbor].tag,
                CellTag::Obstacle | CellTag::Start | CellTag::Visited
            ) {
                continue;
            }
            let tentative_g = g_current + move_cost;
            if grid.nodes[neighbor].g.map_or(false, |g| tentative_g >= g) {
                continue;
            }
            grid.nodes[neighbor].g = Some(tentative_g);
            grid.nodes[neighbor].predecessor = Some(current);
            let h = cached_heuristic(&self.heuristic, grid, neighbor);
            self.frontier.push((neighbor, tentative_g), tentative_g + h);
            if grid.nodes[neighbor].tag == CellTag::Empty {
                grid.nodes[neighbor].tag = CellTag::Explored;
            }
            trace!(
                "Relaxed {} to g = {}, f = {}",
                grid.nodes[neighbor].position,
                tentative_g,
                tentative_g + h
            );
        }

        Ok((grid.snapshot(), true))
    }

    fn status(&self) -> SearchStatus {
        self.status
    }
}
