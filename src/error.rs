//! Error types for board construction and input parsing.
//!
//! The search itself is infallible: everything that can go wrong is
//! surfaced here, when a board is built from external input.

use thiserror::Error;

/// Result type for board-construction and parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a board from external input.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol outside the closed element set was encountered.
    #[error("unrecognized element symbol '{0}'")]
    UnknownSymbol(String),

    /// A marble was placed outside the radius-5 hexagonal window.
    #[error("cell ({q}, {r}) is outside the hexagonal board window")]
    OutOfWindow { q: i32, r: i32 },

    /// Two marbles were placed on the same cell.
    #[error("cell ({q}, {r}) holds more than one marble")]
    CellOccupied { q: usize, r: usize },

    /// A text board had more rows than the grid.
    #[error("expected at most {max} rows, found {found}")]
    TooManyRows { max: usize, found: usize },

    /// A text board row had more cells than the grid.
    #[error("row {row} is too long: expected at most {max} cells, found {found}")]
    RowTooLong { row: usize, max: usize, found: usize },

    /// Detection output contained no gold marble to anchor the center.
    #[error("no gold marble in detection output to anchor the board center")]
    CenterNotFound,

    /// Detection output was not valid JSON.
    #[error("detection output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
