//! Text-grid board parsing, used by tests and the CLI.
//!
//! The format is one line per `r` row, one character per `q` column:
//! `.` (or a space) marks an empty cell, and each element has the single
//! letter given by [`Element::to_char`]: `F`ire, `W`ater, `E`arth, `A`ir,
//! `L`ead, `T`in, `I`ron, `C`opper, `S`ilver, `G`old, `M`ercury, `V` for
//! life, `D`eath, `X` for salt and `Q` for essence. Missing trailing cells
//! and missing trailing rows are empty; anything else is an error.

use crate::engine::{Board, Element, GRID_SIZE};
use crate::error::{Error, Result};

/// Parses an array of row strings into a [`Board`].
///
/// Rows are `r` top to bottom, columns are `q` left to right, so a marble
/// at line 5, column 5 sits on the board center. Placing a marble on a
/// cell outside the hexagonal window fails, as does any unrecognized
/// character.
///
/// # Examples
///
/// ```
/// use sigmar_solver::utils::board_from_str_rows;
/// use sigmar_solver::engine::Element;
///
/// let board = board_from_str_rows(&[
///     "",
///     "",
///     "",
///     "",
///     "",
///     "FF",
/// ]).unwrap();
/// assert_eq!(board.marble_at(0, 5).unwrap().symbol(), Element::Fire);
/// assert_eq!(board.marble_at(1, 5).unwrap().symbol(), Element::Fire);
/// ```
pub fn board_from_str_rows(rows: &[&str]) -> Result<Board> {
    if rows.len() > GRID_SIZE {
        return Err(Error::TooManyRows {
            max: GRID_SIZE,
            found: rows.len(),
        });
    }

    let mut entries = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        if row.chars().count() > GRID_SIZE {
            return Err(Error::RowTooLong {
                row: r,
                max: GRID_SIZE,
                found: row.chars().count(),
            });
        }
        for (q, c) in row.chars().enumerate() {
            match c {
                '.' | ' ' => {}
                _ => entries.push((q, r, Element::from_char(c)?)),
            }
        }
    }
    Board::from_entries(&entries)
}
