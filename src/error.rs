//! Error types for grid setup and engine misuse.

use thiserror::Error;

/// Errors raised while turning caller input into a searchable grid.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// Width or height is zero.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        /// Number of columns.
        width: usize,
        /// Number of rows.
        height: usize,
    },

    /// A row does not have the same length as the first row.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },

    /// A character in the ASCII form does not name a cell tag.
    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        /// The character that was read.
        symbol: char,
        /// Row of the character.
        row: usize,
        /// Column of the character.
        column: usize,
    },

    /// The grid must contain exactly one start cell.
    #[error("expected exactly one start cell, found {0}")]
    StartCount(usize),

    /// The grid must contain exactly one end cell.
    #[error("expected exactly one end cell, found {0}")]
    EndCount(usize),
}

/// Returned by [step](crate::solver::IncrementalSearch::step) when no grid has been initialized.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("step called before initialize")]
pub struct InvalidState;
