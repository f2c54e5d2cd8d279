//! Independent optimal-cost oracle. Builds the full movement graph up front and solves it with
//! [petgraph's Dijkstra](petgraph::algo::dijkstra), sharing nothing with the step-wise engine
//! except the grid model, so it can be used to check the engine's answers.
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::error::SetupError;
use crate::search_grid::SearchGrid;
use crate::tag_grid::{CellTag, TagGrid};

/// Minimum cost between the start and end of `cells`, or [None] if they are not connected.
pub fn optimal_cost(cells: &TagGrid) -> Result<Option<i32>, SetupError> {
    let grid = SearchGrid::build(cells)?;
    let mut graph: UnGraph<usize, i32> = UnGraph::default();
    let indices: Vec<Option<NodeIndex>> = grid
        .nodes
        .iter()
        .enumerate()
        .map(|(ix, node)| (node.tag != CellTag::Obstacle).then(|| graph.add_node(ix)))
        .collect();
    for (ix, from) in indices.iter().enumerate() {
        let Some(from) = *from else { continue };
        for (neighbor, cost) in grid.neighbors_of(ix) {
            // Each undirected edge once.
            if neighbor <= ix {
                continue;
            }
            if let Some(to) = indices[neighbor] {
                graph.add_edge(from, to, cost);
            }
        }
    }
    let (Some(start), Some(end)) = (indices[grid.start], indices[grid.end]) else {
        return Ok(None);
    };
    let costs = dijkstra(&graph, start, Some(end), |e| *e.weight());
    Ok(costs.get(&end).copied())
}
