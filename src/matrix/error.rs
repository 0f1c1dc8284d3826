//! Matrix error types.

use derive_more::{Display, Error};

/// Error returned when a matrix operation's shape requirements are not met.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MatrixError {
    /// A row differs in length from the first row.
    #[display("Row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Row index past the last row.
    #[display("Row {index} is out of bounds ({rows} rows)")]
    RowOutOfBounds {
        /// Requested row.
        index: usize,
        /// Number of rows.
        rows: usize,
    },

    /// Column index past the last column.
    #[display("Column {index} is out of bounds ({columns} columns)")]
    ColumnOutOfBounds {
        /// Requested column.
        index: usize,
        /// Number of columns.
        columns: usize,
    },

    /// Diagonal requested on a non-square matrix.
    #[display("Matrix is {rows}x{columns}, not square")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        columns: usize,
    },

    /// Element-wise operation on matrices of different shape.
    #[display("Cannot combine {left:?} with {right:?}")]
    DimensionMismatch {
        /// Dimensions of the left operand.
        left: (usize, usize),
        /// Dimensions of the right operand.
        right: (usize, usize),
    },

    /// A flat sequence cannot be cut into rows of the requested width.
    #[display("Cannot split {len} values into rows of {width}")]
    InvalidWidth {
        /// Length of the flat sequence.
        len: usize,
        /// Requested row width.
        width: usize,
    },

    /// Statistic requested on a matrix without cells.
    #[display("Matrix has no cells")]
    Empty,
}
