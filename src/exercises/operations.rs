//! Exercise 4: a 4x4 matrix behind an operations menu.
//!
//! The panel starts [`PanelState::Empty`]. Only [`Command::Fill`] moves it
//! to [`PanelState::Filled`] (and refills when already filled). Every
//! reduction is refused while empty and recomputed from the current cells
//! once filled.

use super::ExerciseError;
use crate::console::{Bounds, Console};
use crate::i18n::Message;
use crate::matrix::{Matrix, MatrixError};
use derive_more::{Display, Error};
use rand::Rng;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use tracing::{debug, info, instrument, warn};

/// Side of the operations matrix.
pub const OPERATIONS_SIZE: usize = 4;

/// Cell range used by the fill command.
const FILL_RANGE: RangeInclusive<i64> = 0..=20;

/// A menu option, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::FromRepr)]
#[repr(u8)]
pub enum Operation {
    /// Leave the panel.
    Exit = 0,
    /// Fill with random values.
    Fill = 1,
    /// Sum one row.
    RowSum = 2,
    /// Sum one column.
    ColumnSum = 3,
    /// Sum the main diagonal.
    MainDiagonal = 4,
    /// Sum the anti-diagonal.
    AntiDiagonal = 5,
    /// Mean of all cells.
    Mean = 6,
}

impl Operation {
    /// True for the reductions, which need a filled matrix.
    pub fn needs_fill(self) -> bool {
        !matches!(self, Operation::Exit | Operation::Fill)
    }
}

/// A fully specified request to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fill (or refill) every cell.
    Fill,
    /// Sum of the given row.
    RowSum(usize),
    /// Sum of the given column.
    ColumnSum(usize),
    /// Sum of the main diagonal.
    MainDiagonal,
    /// Sum of the anti-diagonal.
    AntiDiagonal,
    /// Mean of all cells.
    Mean,
}

/// Whether the matrix has been filled yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Not filled; reductions are refused.
    #[default]
    Empty,
    /// Filled with the held matrix.
    Filled(Matrix),
}

/// Result of an accepted command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The matrix was (re)filled.
    Filled,
    /// Row sum.
    RowSum {
        /// Row index.
        row: usize,
        /// Sum.
        sum: i64,
    },
    /// Column sum.
    ColumnSum {
        /// Column index.
        column: usize,
        /// Sum.
        sum: i64,
    },
    /// Main diagonal sum.
    MainDiagonal(i64),
    /// Anti-diagonal sum.
    AntiDiagonal(i64),
    /// Mean of all cells.
    Mean(f64),
}

impl Outcome {
    /// The line reporting a reduction, or `None` for a fill.
    pub fn message(self) -> Option<Message<'static>> {
        match self {
            Outcome::Filled => None,
            Outcome::RowSum { row, sum } => Some(Message::RowSum { row, sum }),
            Outcome::ColumnSum { column, sum } => Some(Message::ColumnSum { column, sum }),
            Outcome::MainDiagonal(sum) => Some(Message::MainDiagonalSum(sum)),
            Outcome::AntiDiagonal(sum) => Some(Message::AntiDiagonalSum(sum)),
            Outcome::Mean(mean) => Some(Message::MatrixMean(mean)),
        }
    }
}

/// Refusal of a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum OperationError {
    /// A reduction was requested before the first fill.
    #[display("Matrix has not been filled yet")]
    NotFilled,
    /// The reduction itself failed.
    #[display("{_0}")]
    Matrix(#[error(source)] MatrixError),
}

impl From<MatrixError> for OperationError {
    fn from(err: MatrixError) -> Self {
        OperationError::Matrix(err)
    }
}

/// The two-state matrix holder behind the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationsPanel {
    size: usize,
    state: PanelState,
}

impl OperationsPanel {
    /// Creates an empty panel for a `size x size` matrix.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            state: PanelState::Empty,
        }
    }

    /// Current state.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// The matrix, once filled.
    pub fn matrix(&self) -> Option<&Matrix> {
        match &self.state {
            PanelState::Empty => None,
            PanelState::Filled(matrix) => Some(matrix),
        }
    }

    /// True once the first fill has happened.
    pub fn is_filled(&self) -> bool {
        self.matrix().is_some()
    }

    /// Applies a command. Refused commands leave the state untouched.
    #[instrument(skip(self, rng))]
    pub fn apply<G: Rng + ?Sized>(
        &mut self,
        command: Command,
        rng: &mut G,
    ) -> Result<Outcome, OperationError> {
        let outcome = match (command, &self.state) {
            (Command::Fill, _) => {
                let matrix = Matrix::random(self.size, self.size, FILL_RANGE, rng);
                info!(size = self.size, "Operations matrix filled");
                self.state = PanelState::Filled(matrix);
                Outcome::Filled
            }
            (_, PanelState::Empty) => {
                debug!(?command, "Refused before fill");
                return Err(OperationError::NotFilled);
            }
            (Command::RowSum(row), PanelState::Filled(matrix)) => Outcome::RowSum {
                row,
                sum: matrix.row_sum(row)?,
            },
            (Command::ColumnSum(column), PanelState::Filled(matrix)) => Outcome::ColumnSum {
                column,
                sum: matrix.column_sum(column)?,
            },
            (Command::MainDiagonal, PanelState::Filled(matrix)) => {
                Outcome::MainDiagonal(matrix.main_diagonal_sum()?)
            }
            (Command::AntiDiagonal, PanelState::Filled(matrix)) => {
                Outcome::AntiDiagonal(matrix.anti_diagonal_sum()?)
            }
            (Command::Mean, PanelState::Filled(matrix)) => Outcome::Mean(matrix.mean()),
        };
        Ok(outcome)
    }
}

/// Runs the menu loop until the user picks 0.
///
/// Returns the panel as it stood on exit.
#[instrument(skip(console, rng))]
pub fn operations_menu<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<OperationsPanel, ExerciseError> {
    let mut panel = OperationsPanel::new(OPERATIONS_SIZE);
    let last = OPERATIONS_SIZE - 1;

    loop {
        console.say(Message::OperationsMenu)?;
        let choice = console.ask_integer(Message::ChooseOption, Bounds::between(0, 6))?;
        let Some(operation) = u8::try_from(choice).ok().and_then(Operation::from_repr) else {
            continue;
        };
        debug!(?operation, "Operation chosen");

        if operation.needs_fill() && !panel.is_filled() {
            console.say(Message::FillFirst)?;
            continue;
        }

        let command = match operation {
            Operation::Exit => break,
            Operation::Fill => Command::Fill,
            Operation::RowSum => Command::RowSum(
                console.ask_size(Message::RowIndexPrompt(last), 0, Some(last))?,
            ),
            Operation::ColumnSum => Command::ColumnSum(
                console.ask_size(Message::ColumnIndexPrompt(last), 0, Some(last))?,
            ),
            Operation::MainDiagonal => Command::MainDiagonal,
            Operation::AntiDiagonal => Command::AntiDiagonal,
            Operation::Mean => Command::Mean,
        };

        match panel.apply(command, rng) {
            Ok(Outcome::Filled) => {
                console.say(Message::MatrixFilled)?;
                if let Some(matrix) = panel.matrix() {
                    console.print_matrix(matrix)?;
                }
            }
            Ok(outcome) => {
                if let Some(message) = outcome.message() {
                    console.say(message)?;
                }
            }
            Err(OperationError::NotFilled) => console.say(Message::FillFirst)?,
            Err(OperationError::Matrix(err)) => {
                warn!(%err, "Reduction failed");
                return Err(err.into());
            }
        }
    }

    Ok(panel)
}
