//! Exercise 9: assorted statistics over a random 5x5 matrix, then a sort.

use super::ExerciseError;
use crate::console::Console;
use crate::i18n::Message;
use crate::matrix::{Matrix, MatrixError};
use crate::sort::selection_sort;
use derive_getters::Getters;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::instrument;

const SIDE: usize = 5;

/// Everything printed for one matrix.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct MatrixReport {
    matrix: Matrix,
    mean: f64,
    maximum: i64,
    maximum_count: usize,
    evens: Vec<i64>,
    main_diagonal: i64,
    last_row_sum: i64,
    sorted: Matrix,
}

impl MatrixReport {
    /// Computes the report for a non-empty square matrix.
    ///
    /// `sorted` is the selection-sorted flattening cut back into rows of the
    /// original width.
    #[instrument(skip(matrix))]
    pub fn analyze(matrix: Matrix) -> Result<Self, MatrixError> {
        let maximum = matrix.max().ok_or(MatrixError::Empty)?;
        let mut flat = matrix.flatten();
        let maximum_count = flat.iter().filter(|&&x| x == maximum).count();
        let evens: Vec<i64> = flat.iter().copied().filter(|x| x % 2 == 0).collect();
        let main_diagonal = matrix.main_diagonal_sum()?;
        let last_row_sum = matrix.row_sum(matrix.row_count() - 1)?;

        selection_sort(&mut flat);
        let sorted = Matrix::from_flat(flat, matrix.column_count())?;

        Ok(Self {
            mean: matrix.mean(),
            maximum,
            maximum_count,
            evens,
            main_diagonal,
            last_row_sum,
            sorted,
            matrix,
        })
    }
}

/// Fills a 5x5 matrix from `[0, 99]` and prints its report.
#[instrument(skip(console, rng))]
pub fn matrix_statistics<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<MatrixReport, ExerciseError> {
    let report = MatrixReport::analyze(Matrix::random(SIDE, SIDE, 0..=99, rng))?;

    console.say(Message::OriginalFiveByFive)?;
    console.print_matrix(report.matrix())?;
    console.say(Message::MatrixAverage(*report.mean()))?;
    console.say(Message::MaximumRepeats {
        value: *report.maximum(),
        count: *report.maximum_count(),
    })?;
    console.say(Message::EvenNumbers(report.evens()))?;
    console.say(Message::MainDiagonalSum(*report.main_diagonal()))?;
    console.say(Message::LastRowSum(*report.last_row_sum()))?;
    console.say(Message::SortedMatrix)?;
    console.print_matrix(report.sorted())?;

    Ok(report)
}
