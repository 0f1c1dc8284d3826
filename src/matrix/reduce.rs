//! Aggregations over a rectangular matrix.
//!
//! Row, column and diagonal sums plus the arithmetic mean. These are pure
//! functions of the matrix contents; callers recompute them on demand.

use super::error::MatrixError;
use super::grid::Matrix;
use tracing::instrument;

impl Matrix {
    /// Sum of row `index`.
    #[instrument(skip(self))]
    pub fn row_sum(&self, index: usize) -> Result<i64, MatrixError> {
        self.rows()
            .get(index)
            .map(|row| row.iter().sum())
            .ok_or(MatrixError::RowOutOfBounds {
                index,
                rows: self.row_count(),
            })
    }

    /// Sum of column `index` across all rows.
    #[instrument(skip(self))]
    pub fn column_sum(&self, index: usize) -> Result<i64, MatrixError> {
        if index >= self.column_count() {
            return Err(MatrixError::ColumnOutOfBounds {
                index,
                columns: self.column_count(),
            });
        }
        Ok(self.rows().iter().map(|row| row[index]).sum())
    }

    /// Sum of the cells where row equals column.
    #[instrument(skip(self))]
    pub fn main_diagonal_sum(&self) -> Result<i64, MatrixError> {
        self.require_square()?;
        Ok(self.rows().iter().enumerate().map(|(i, row)| row[i]).sum())
    }

    /// Sum of the cells where row + column = size - 1.
    #[instrument(skip(self))]
    pub fn anti_diagonal_sum(&self) -> Result<i64, MatrixError> {
        self.require_square()?;
        let n = self.row_count();
        Ok(self
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| row[n - 1 - i])
            .sum())
    }

    /// Sum of every cell.
    pub fn total(&self) -> i64 {
        self.cells().sum()
    }

    /// Arithmetic mean over `rows * columns` cells, 0 when empty.
    #[instrument(skip(self))]
    pub fn mean(&self) -> f64 {
        let cells = self.row_count() * self.column_count();
        if cells == 0 {
            return 0.0;
        }
        self.total() as f64 / cells as f64
    }

    fn require_square(&self) -> Result<(), MatrixError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatrixError::NotSquare {
                rows: self.row_count(),
                columns: self.column_count(),
            })
        }
    }
}
