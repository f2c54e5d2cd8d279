use crate::error::SetupError;
use core::fmt;
use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use itertools::Itertools;
use std::str::FromStr;

/// Classification of a single cell. Obstacle, start and end are set by the caller, the remaining
/// tags are written by the search as it progresses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellTag {
    #[default]
    Empty,
    Obstacle,
    Start,
    End,
    /// Discovered and waiting in the frontier.
    Explored,
    /// Expanded; final for the rest of the search.
    Visited,
    /// On the reconstructed route, endpoints excluded.
    Path,
}

impl CellTag {
    /// Character used by the ASCII form of a [TagGrid].
    pub fn symbol(self) -> char {
        match self {
            CellTag::Empty => '.',
            CellTag::Obstacle => '#',
            CellTag::Start => 'S',
            CellTag::End => 'E',
            CellTag::Explored => 'o',
            CellTag::Visited => 'x',
            CellTag::Path => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<CellTag> {
        match symbol {
            '.' => Some(CellTag::Empty),
            '#' => Some(CellTag::Obstacle),
            'S' => Some(CellTag::Start),
            'E' => Some(CellTag::End),
            'o' => Some(CellTag::Explored),
            'x' => Some(CellTag::Visited),
            '*' => Some(CellTag::Path),
            _ => None,
        }
    }
}

/// A width×height matrix of [CellTag] values. Callers hand one to the engine to describe the
/// initial grid and get one back from every step, so it is a plain value without any search
/// bookkeeping. Points use `x` for the column and `y` for the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagGrid {
    width: usize,
    height: usize,
    cells: Vec<CellTag>,
}

impl TagGrid {
    /// Builds a grid from row-major nested vectors, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<CellTag>>) -> Result<TagGrid, SetupError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(SetupError::InvalidDimensions { width, height });
        }
        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(SetupError::RaggedRows {
                row,
                expected: width,
                actual,
            });
        }
        Ok(TagGrid {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellTag>) -> TagGrid {
        debug_assert_eq!(cells.len(), width * height);
        TagGrid {
            width,
            height,
            cells,
        }
    }

    pub(crate) fn cells(&self) -> &[CellTag] {
        &self.cells
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Bounds-checked lookup; [ValueGrid::get] panics outside the grid.
    pub fn tag(&self, point: Point) -> Option<CellTag> {
        if self.in_bounds(point) {
            Some(self.cells[self.ix(point.x, point.y)])
        } else {
            None
        }
    }

    /// All points carrying the given tag, in row-major order.
    pub fn positions(&self, tag: CellTag) -> Vec<Point> {
        self.cells
            .iter()
            .positions(|t| *t == tag)
            .map(|ix| Point::new((ix % self.width) as i32, (ix / self.width) as i32))
            .collect_vec()
    }

    pub fn count(&self, tag: CellTag) -> usize {
        self.cells.iter().filter(|t| **t == tag).count()
    }

    fn ix(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }
}

impl ValueGrid<CellTag> for TagGrid {
    fn new(width: usize, height: usize, default_value: CellTag) -> Self {
        TagGrid {
            width,
            height,
            cells: vec![default_value; width * height],
        }
    }
    fn get(&self, x: i32, y: i32) -> CellTag {
        self.cells[self.ix(x, y)]
    }
    fn set(&mut self, x: i32, y: i32, value: CellTag) {
        let ix = self.ix(x, y);
        self.cells[ix] = value;
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

impl FromStr for TagGrid {
    type Err = SetupError;

    /// Parses one line per row, ignoring blank lines and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, symbol)| {
                        CellTag::from_symbol(symbol).ok_or(SetupError::UnknownSymbol {
                            symbol,
                            row,
                            column,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        TagGrid::from_rows(rows)
    }
}

impl fmt::Display for TagGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            let row = &self.cells[y * self.width..(y + 1) * self.width];
            writeln!(f, "{}", row.iter().map(|t| t.symbol()).collect::<String>())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let text = "S.#\n.o.\nx*E\n";
        let grid: TagGrid = text.parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(2, 0), CellTag::Obstacle);
        assert_eq!(grid.get(0, 2), CellTag::Visited);
        assert_eq!(grid.to_string(), text);
    }

    /// Degenerate grids can be built through [ValueGrid::new] and must still print.
    #[test]
    fn display_degenerate_grids() {
        assert_eq!(TagGrid::new(0, 3, CellTag::Empty).to_string(), "\n\n\n");
        assert_eq!(TagGrid::new(4, 0, CellTag::Empty).to_string(), "");
        assert_eq!(TagGrid::new(0, 0, CellTag::Empty).to_string(), "");
    }

    /// Shape is fixed at construction and only readable through the accessors.
    #[test]
    fn dimensions_follow_layout() {
        let grid: TagGrid = "S...\n...E".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert_eq!(grid.cells().len(), grid.width() * grid.height());
        assert_eq!(grid.positions(CellTag::End), vec![Point::new(3, 1)]);
        let blank = TagGrid::new(2, 5, CellTag::Obstacle);
        assert_eq!((blank.width(), blank.height()), (2, 5));
        assert_eq!(blank.to_string(), "##\n".repeat(5));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = "S..\n.E\n".parse::<TagGrid>().unwrap_err();
        assert_eq!(
            err,
            SetupError::RaggedRows {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn rejects_unknown_symbols() {
        let err = "S.\n.?\n".parse::<TagGrid>().unwrap_err();
        assert_eq!(
            err,
            SetupError::UnknownSymbol {
                symbol: '?',
                row: 1,
                column: 1
            }
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(
            TagGrid::from_rows(vec![]).unwrap_err(),
            SetupError::InvalidDimensions {
                width: 0,
                height: 0
            }
        );
        assert_eq!(
            TagGrid::from_rows(vec![vec![], vec![]]).unwrap_err(),
            SetupError::InvalidDimensions {
                width: 0,
                height: 2
            }
        );
    }

    #[test]
    fn positions_use_column_as_x() {
        let grid: TagGrid = "..S\nE..".parse().unwrap();
        assert_eq!(grid.positions(CellTag::Start), vec![Point::new(2, 0)]);
        assert_eq!(grid.positions(CellTag::End), vec![Point::new(0, 1)]);
        assert_eq!(grid.tag(Point::new(3, 0)), None);
        assert_eq!(grid.tag(Point::new(-1, 0)), None);
        assert_eq!(grid.count(CellTag::Empty), 4);
    }
}
