//! The eleven menu scenarios.
//!
//! Each scenario builds its own data from scratch, prints it through the
//! [`Console`], and returns what it built so callers and tests can inspect it.

mod fills;
mod jagged;
mod keyboard;
mod operations;
mod statistics;
mod sums;
mod survey;
mod tictactoe;

pub use fills::{five_by_n, sequential, unique_values};
pub use jagged::jagged;
pub use keyboard::{KEYBOARD_COLUMNS, KEYBOARD_ROWS, keyboard_matrix};
pub use operations::{
    Command, OPERATIONS_SIZE, Operation, OperationError, OperationsPanel, Outcome, PanelState,
    operations_menu,
};
pub use statistics::{MatrixReport, matrix_statistics};
pub use sums::{LinePick, Summation, matrix_sum, pick_line, random_line_sum};
pub use survey::survey;
pub use tictactoe::tic_tac_toe;

use crate::console::{Console, ConsoleError};
use crate::i18n::Language;
use crate::matrix::MatrixError;
use derive_more::{Display, Error, From};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Failure while running a scenario.
#[derive(Debug, Clone, Display, Error, From)]
pub enum ExerciseError {
    /// Terminal I/O failed or input ended.
    #[display("{_0}")]
    Console(ConsoleError),
    /// A matrix shape requirement was violated.
    #[display("{_0}")]
    Matrix(MatrixError),
}

impl ExerciseError {
    /// True when the user closed the input stream.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, ExerciseError::Console(err) if err.is_input_closed())
    }
}

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::FromRepr)]
#[repr(u8)]
pub enum Exercise {
    /// 3x3 counter fill.
    SequentialFill = 1,
    /// 5 x n random fill.
    RandomFiveByN = 2,
    /// Element-wise sum of two n x n matrices.
    MatrixSum = 3,
    /// Guarded operations menu over a 4x4 matrix.
    OperationsMenu = 4,
    /// 3x3 shuffle of 1..=9.
    UniqueValues = 5,
    /// Sum of a randomly chosen row or column.
    RandomLineSum = 6,
    /// Two-player tic-tac-toe.
    TicTacToe = 7,
    /// Survey of ten synthetic respondents.
    Survey = 8,
    /// Statistics and sorting over a 5x5 matrix.
    MatrixStatistics = 9,
    /// 5x4 matrix typed cell by cell.
    KeyboardMatrix = 10,
    /// Rows of independent length.
    JaggedMatrix = 11,
}

impl Exercise {
    /// Menu number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Looks up an exercise by menu number.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::from_repr(number)
    }

    /// Short title shown in the menu.
    pub fn title(self, language: Language) -> &'static str {
        match self {
            Exercise::SequentialFill => language.pick(
                "3x3 matrix with numbers 1 to 9",
                "Matriz 3x3 con números del 1 al 9",
            ),
            Exercise::RandomFiveByN => language.pick(
                "5xn matrix with random numbers",
                "Matriz 5xn con números aleatorios",
            ),
            Exercise::MatrixSum => {
                language.pick("Sum of two n x n matrices", "Suma de dos matrices n x n")
            }
            Exercise::OperationsMenu => language.pick(
                "Menu of operations on 4x4 matrix",
                "Menú de operaciones sobre matriz 4x4",
            ),
            Exercise::UniqueValues => language.pick(
                "3x3 matrix without repeated numbers",
                "Matriz 3x3 sin números repetidos",
            ),
            Exercise::RandomLineSum => language.pick(
                "Random row or column sum",
                "Suma aleatoria de fila o columna",
            ),
            Exercise::TicTacToe => language.pick("Tic-tac-toe game", "Juego del 3 en raya"),
            Exercise::Survey => language.pick("Survey of 10 people", "Encuesta a 10 personas"),
            Exercise::MatrixStatistics => language.pick(
                "Various operations on 5x5 matrix",
                "Operaciones varias sobre matriz 5x5",
            ),
            Exercise::KeyboardMatrix => language.pick(
                "Read 5x4 matrix from keyboard",
                "Leer matriz 5x4 desde teclado",
            ),
            Exercise::JaggedMatrix => language.pick(
                "Irregular matrix generation",
                "Matriz irregular generada",
            ),
        }
    }

    /// Runs the scenario to completion.
    #[instrument(skip(console, rng))]
    pub fn run<R: BufRead, W: Write, G: Rng + ?Sized>(
        self,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<(), ExerciseError> {
        info!(number = self.number(), "Running exercise");
        match self {
            Exercise::SequentialFill => sequential(console).map(drop),
            Exercise::RandomFiveByN => five_by_n(console, rng).map(drop),
            Exercise::MatrixSum => matrix_sum(console, rng).map(drop),
            Exercise::OperationsMenu => operations_menu(console, rng).map(drop),
            Exercise::UniqueValues => unique_values(console, rng).map(drop),
            Exercise::RandomLineSum => random_line_sum(console, rng).map(drop),
            Exercise::TicTacToe => tic_tac_toe(console).map(drop),
            Exercise::Survey => survey(console, rng).map(drop),
            Exercise::MatrixStatistics => matrix_statistics(console, rng).map(drop),
            Exercise::KeyboardMatrix => keyboard_matrix(console).map(drop),
            Exercise::JaggedMatrix => jagged(console, rng).map(drop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_numbers_are_one_through_eleven() {
        let numbers: Vec<u8> = Exercise::iter().map(Exercise::number).collect();
        assert_eq!(numbers, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Exercise::from_number(7), Some(Exercise::TicTacToe));
        assert_eq!(Exercise::from_number(0), None);
        assert_eq!(Exercise::from_number(12), None);
    }
}
