//! Exercise 10: a 5x4 matrix typed in cell by cell.

use super::ExerciseError;
use crate::console::{Bounds, Console};
use crate::i18n::Message;
use crate::matrix::{Matrix, MatrixError};
use std::io::{BufRead, Write};
use tracing::instrument;

/// Rows of the typed matrix.
pub const KEYBOARD_ROWS: usize = 5;
/// Columns of the typed matrix.
pub const KEYBOARD_COLUMNS: usize = 4;

/// Reads every cell, then reports the extremes and where they occur.
#[instrument(skip(console))]
pub fn keyboard_matrix<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Matrix, ExerciseError> {
    console.say(Message::EnterCells {
        rows: KEYBOARD_ROWS,
        columns: KEYBOARD_COLUMNS,
    })?;

    let mut rows = Vec::with_capacity(KEYBOARD_ROWS);
    for row in 0..KEYBOARD_ROWS {
        let mut cells = Vec::with_capacity(KEYBOARD_COLUMNS);
        for column in 0..KEYBOARD_COLUMNS {
            cells.push(console.ask_integer(Message::ElementPrompt { row, column }, Bounds::any())?);
        }
        rows.push(cells);
    }
    let matrix = Matrix::from_rows(rows)?;

    console.say(Message::ReadMatrix)?;
    console.print_matrix(&matrix)?;

    let maximum = matrix.max().ok_or(MatrixError::Empty)?;
    let minimum = matrix.min().ok_or(MatrixError::Empty)?;
    console.say(Message::MaximumAt {
        value: maximum,
        positions: &matrix.positions_of(maximum),
    })?;
    console.say(Message::MinimumAt {
        value: minimum,
        positions: &matrix.positions_of(minimum),
    })?;

    Ok(matrix)
}
