use crate::error::SetupError;
use crate::tag_grid::{CellTag, TagGrid};
use crate::{DIAGONAL_COST, STRAIGHT_COST};
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::Itertools;

/// Up, down, left, right as (dx, dy) with y growing downwards.
const STRAIGHTS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
/// Up-left, up-right, down-left, down-right.
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Search bookkeeping for one cell. `None` means unknown for `g`, not yet computed for `h`, and
/// undefined for the predecessor, which is an index into the owning [SearchGrid].
#[derive(Clone, Debug)]
pub struct Node {
    pub position: Point,
    pub g: Option<i32>,
    pub h: Option<i32>,
    pub predecessor: Option<usize>,
    pub tag: CellTag,
}

/// Arena of [Node]s for one search, indexed row-major.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    pub width: usize,
    pub height: usize,
    pub nodes: Vec<Node>,
    pub start: usize,
    pub end: usize,
}

impl SearchGrid {
    /// Creates one node per cell of `tags` and locates the single start and end. Tags written by
    /// a previous search (explored, visited, path) are reset to empty so that a snapshot can be
    /// fed back in.
    pub fn build(tags: &TagGrid) -> Result<SearchGrid, SetupError> {
        let (width, height) = (tags.width(), tags.height());
        if width == 0 || height == 0 || tags.cells().len() != width * height {
            return Err(SetupError::InvalidDimensions { width, height });
        }
        let starts = tags.cells().iter().positions(|t| *t == CellTag::Start).collect_vec();
        let ends = tags.cells().iter().positions(|t| *t == CellTag::End).collect_vec();
        let start = match starts[..] {
            [ix] => ix,
            _ => return Err(SetupError::StartCount(starts.len())),
        };
        let end = match ends[..] {
            [ix] => ix,
            _ => return Err(SetupError::EndCount(ends.len())),
        };
        let nodes = tags
            .cells()
            .iter()
            .enumerate()
            .map(|(ix, &tag)| Node {
                position: Point::new((ix % width) as i32, (ix / width) as i32),
                g: None,
                h: None,
                predecessor: None,
                tag: match tag {
                    CellTag::Explored | CellTag::Visited | CellTag::Path => CellTag::Empty,
                    fixed => fixed,
                },
            })
            .collect();
        Ok(SearchGrid {
            width,
            height,
            nodes,
            start,
            end,
        })
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn ix(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// In-bounds neighbours of `ix` with their move cost: the four straight moves first, then the
    /// four diagonals. The order is fixed so that frontier ties resolve reproducibly.
    pub fn neighbors_of(&self, ix: usize) -> Vec<(usize, i32)> {
        let p = self.nodes[ix].position;
        STRAIGHTS
            .iter()
            .map(|d| (d, STRAIGHT_COST))
            .chain(DIAGONALS.iter().map(|d| (d, DIAGONAL_COST)))
            .map(|(&(dx, dy), cost)| (p.x + dx, p.y + dy, cost))
            .filter(|&(x, y, _)| self.in_bounds(x, y))
            .map(|(x, y, cost)| (self.ix(Point::new(x, y)), cost))
            .collect()
    }

    /// Copies the current tags into a [TagGrid], leaving all bookkeeping behind.
    pub fn snapshot(&self) -> TagGrid {
        TagGrid::from_cells(
            self.width,
            self.height,
            self.nodes.iter().map(|n| n.tag).collect(),
        )
    }
}
