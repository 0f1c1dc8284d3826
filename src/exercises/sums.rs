//! Element-wise sums and single-line sums.

use super::ExerciseError;
use crate::console::Console;
use crate::i18n::Message;
use crate::matrix::{Matrix, MatrixError};
use derive_getters::Getters;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Two random operands and their element-wise sum.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Summation {
    left: Matrix,
    right: Matrix,
    total: Matrix,
}

/// Exercise 3: prompts for n, then prints A, B and A + B.
#[instrument(skip(console, rng))]
pub fn matrix_sum<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<Summation, ExerciseError> {
    let n = console.ask_size(Message::SquareSizePrompt, 1, None)?;
    let left = Matrix::random(n, n, 0..=9, rng);
    let right = Matrix::random(n, n, 0..=9, rng);
    let total = left.add(&right)?;

    console.say(Message::MatrixA)?;
    console.print_matrix(&left)?;
    console.say(Message::MatrixB)?;
    console.print_matrix(&right)?;
    console.say(Message::MatrixSum)?;
    console.print_matrix(&total)?;

    Ok(Summation { left, right, total })
}

/// Which line was drawn and what it adds up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePick {
    /// A row.
    Row {
        /// Row index.
        index: usize,
        /// Row sum.
        sum: i64,
    },
    /// A column.
    Column {
        /// Column index.
        index: usize,
        /// Column sum.
        sum: i64,
    },
}

/// Flips a fair coin between row and column, then draws a uniform index.
#[instrument(skip(matrix, rng))]
pub fn pick_line<G: Rng + ?Sized>(matrix: &Matrix, rng: &mut G) -> Result<LinePick, MatrixError> {
    if matrix.is_empty() {
        return Err(MatrixError::Empty);
    }
    let pick = if rng.gen_bool(0.5) {
        let index = rng.gen_range(0..matrix.row_count());
        LinePick::Row {
            index,
            sum: matrix.row_sum(index)?,
        }
    } else {
        let index = rng.gen_range(0..matrix.column_count());
        LinePick::Column {
            index,
            sum: matrix.column_sum(index)?,
        }
    };
    debug!(?pick, "Line picked");
    Ok(pick)
}

/// Exercise 6: prompted dimensions, cells in `[0, 9]`, one random line summed.
#[instrument(skip(console, rng))]
pub fn random_line_sum<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<(Matrix, LinePick), ExerciseError> {
    let rows = console.ask_size(Message::RowCountPrompt, 1, None)?;
    let columns = console.ask_size(Message::ColumnCountPlainPrompt, 1, None)?;
    let matrix = Matrix::random(rows, columns, 0..=9, rng);
    console.say(Message::GeneratedMatrix)?;
    console.print_matrix(&matrix)?;

    let pick = pick_line(&matrix, rng)?;
    match pick {
        LinePick::Row { index, sum } => console.say(Message::RandomRowPick { row: index, sum })?,
        LinePick::Column { index, sum } => {
            console.say(Message::RandomColumnPick { column: index, sum })?
        }
    }
    Ok((matrix, pick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_pick_line_sum_matches_reduction() {
        let mut rng = Pcg64::seed_from_u64(21);
        let matrix = Matrix::random(3, 6, 0..=9, &mut rng);
        let (mut rows, mut columns) = (0, 0);
        for _ in 0..200 {
            match pick_line(&matrix, &mut rng).unwrap() {
                LinePick::Row { index, sum } => {
                    rows += 1;
                    assert!(index < 3);
                    assert_eq!(matrix.row_sum(index), Ok(sum));
                }
                LinePick::Column { index, sum } => {
                    columns += 1;
                    assert!(index < 6);
                    assert_eq!(matrix.column_sum(index), Ok(sum));
                }
            }
        }
        assert!(rows > 0 && columns > 0);
    }

    #[test]
    fn test_pick_line_rejects_empty() {
        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(
            pick_line(&Matrix::default(), &mut rng),
            Err(MatrixError::Empty)
        );
    }
}
