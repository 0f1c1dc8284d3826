//! Generation-only scenarios: counter, bounded random and shuffled fills.

use super::ExerciseError;
use crate::console::Console;
use crate::i18n::Message;
use crate::matrix::Matrix;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::instrument;

/// Rows in the 5 x n matrix.
const FIVE_BY_N_ROWS: usize = 5;

/// Exercise 1: 3x3 matrix holding 1..=9 in row-major order.
#[instrument(skip(console))]
pub fn sequential<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Matrix, ExerciseError> {
    let matrix = Matrix::sequential(3, 3);
    console.say(Message::SequentialTitle)?;
    console.print_matrix(&matrix)?;
    Ok(matrix)
}

/// Exercise 2: 5 rows, a prompted column count, cells in `[0, 10]`.
#[instrument(skip(console, rng))]
pub fn five_by_n<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<Matrix, ExerciseError> {
    let columns = console.ask_size(Message::ColumnCountPrompt, 1, None)?;
    let matrix = Matrix::random(FIVE_BY_N_ROWS, columns, 0..=10, rng);
    console.say(Message::FiveByNTitle)?;
    console.print_matrix(&matrix)?;
    Ok(matrix)
}

/// Exercise 5: 3x3 matrix with no repeated value.
#[instrument(skip(console, rng))]
pub fn unique_values<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<Matrix, ExerciseError> {
    let matrix = Matrix::permutation(3, rng);
    console.say(Message::PermutationTitle)?;
    console.print_matrix(&matrix)?;
    Ok(matrix)
}
