//! Rectangular integer matrix and its generators.

use super::error::MatrixError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// A rectangular matrix of integers stored row by row.
///
/// Every row has the same length. Constructors that accept caller data
/// check this and return [`MatrixError::Ragged`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Creates a `rows x columns` matrix where every cell holds `value`.
    #[instrument]
    pub fn filled(rows: usize, columns: usize, value: i64) -> Self {
        Self {
            rows: vec![vec![value; columns]; rows],
        }
    }

    /// Creates a `rows x columns` matrix of zeros.
    #[instrument]
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, 0)
    }

    /// Fills row-major with a counter starting at 1.
    ///
    /// The cell at `(i, j)` holds `i * columns + j + 1`.
    #[instrument]
    pub fn sequential(rows: usize, columns: usize) -> Self {
        let rows = (0..rows)
            .map(|i| (0..columns).map(|j| (i * columns + j + 1) as i64).collect())
            .collect();
        Self { rows }
    }

    /// Fills every cell with an independent uniform draw from `range`.
    #[instrument(skip(rng))]
    pub fn random<G: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        range: RangeInclusive<i64>,
        rng: &mut G,
    ) -> Self {
        let rows = (0..rows)
            .map(|_| (0..columns).map(|_| rng.gen_range(range.clone())).collect())
            .collect();
        Self { rows }
    }

    /// Shuffles `1..=side*side` once and lays it out in rows of `side`.
    ///
    /// The result never repeats a value.
    #[instrument(skip(rng))]
    pub fn permutation<G: Rng + ?Sized>(side: usize, rng: &mut G) -> Self {
        let mut values: Vec<i64> = (1..=(side * side) as i64).collect();
        values.shuffle(rng);
        debug!(?values, "Shuffled values");
        Self {
            rows: values.chunks(side.max(1)).map(<[i64]>::to_vec).collect(),
        }
    }

    /// Builds a matrix from explicit rows.
    #[instrument(skip(rows), fields(row_count = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, found)) = rows
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|(_, len)| *len != expected)
            {
                return Err(MatrixError::Ragged {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Reshapes a flat row-major sequence into rows of `width`.
    #[instrument(skip(values), fields(len = values.len()))]
    pub fn from_flat(values: Vec<i64>, width: usize) -> Result<Self, MatrixError> {
        if width == 0 || values.len() % width != 0 {
            return Err(MatrixError::InvalidWidth {
                len: values.len(),
                width,
            });
        }
        Ok(Self {
            rows: values.chunks(width).map(<[i64]>::to_vec).collect(),
        })
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 for a matrix without rows).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// True when there are no cells at all.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    /// True when rows and columns agree.
    pub fn is_square(&self) -> bool {
        self.row_count() == self.column_count()
    }

    /// Returns the cell at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Option<i64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Flattens the matrix into a row-major sequence.
    #[instrument(skip(self))]
    pub fn flatten(&self) -> Vec<i64> {
        self.cells().collect()
    }

    /// Element-wise sum of two matrices of equal dimensions.
    #[instrument(skip(self, other))]
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        let left = (self.row_count(), self.column_count());
        let right = (other.row_count(), other.column_count());
        if left != right {
            return Err(MatrixError::DimensionMismatch { left, right });
        }
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x + y).collect())
            .collect();
        Ok(Matrix { rows })
    }

    /// Largest cell, if any.
    pub fn max(&self) -> Option<i64> {
        self.cells().max()
    }

    /// Smallest cell, if any.
    pub fn min(&self) -> Option<i64> {
        self.cells().min()
    }

    /// Every `(row, column)` holding `value`, in row-major order.
    #[instrument(skip(self))]
    pub fn positions_of(&self, value: i64) -> Vec<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(_, cell)| **cell == value)
                    .map(move |(j, _)| (i, j))
            })
            .collect()
    }

    /// Renders rows on separate lines, each cell right-aligned to `width`.
    pub fn render(&self, width: usize) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| format!("{cell:>width$}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_sequential_cell_formula() {
        for n in 1..=6 {
            let matrix = Matrix::sequential(n, n);
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(matrix.get(i, j), Some((i * n + j + 1) as i64));
                }
            }
        }
    }

    #[test]
    fn test_random_respects_bounds() {
        let mut rng = Pcg64::seed_from_u64(7);
        let matrix = Matrix::random(5, 8, 0..=10, &mut rng);
        assert_eq!(matrix.row_count(), 5);
        assert_eq!(matrix.column_count(), 8);
        assert!(matrix.cells().all(|c| (0..=10).contains(&c)));
    }

    #[test]
    fn test_permutation_has_no_duplicates() {
        let mut rng = Pcg64::seed_from_u64(11);
        for _ in 0..50 {
            let mut values = Matrix::permutation(3, &mut rng).flatten();
            values.sort_unstable();
            assert_eq!(values, (1..=9).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_from_flat_requires_exact_width() {
        assert!(Matrix::from_flat(vec![1, 2, 3], 2).is_err());
        assert!(Matrix::from_flat(vec![1, 2, 3], 0).is_err());
        let matrix = Matrix::from_flat(vec![1, 2, 3, 4], 2).unwrap();
        assert_eq!(matrix.rows(), &[vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_add_is_element_wise() {
        let mut rng = Pcg64::seed_from_u64(3);
        let a = Matrix::random(4, 4, 0..=9, &mut rng);
        let b = Matrix::random(4, 4, 0..=9, &mut rng);
        let c = a.add(&b).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(c.get(i, j), Some(a.get(i, j).unwrap() + b.get(i, j).unwrap()));
            }
        }
    }

    #[test]
    fn test_add_rejects_mismatched_dimensions() {
        let err = Matrix::zeros(2, 3).add(&Matrix::zeros(3, 2)).unwrap_err();
        assert_eq!(
            err,
            MatrixError::DimensionMismatch {
                left: (2, 3),
                right: (3, 2)
            }
        );
    }

    #[test]
    fn test_positions_of_row_major() {
        let matrix = Matrix::from_rows(vec![vec![5, 1], vec![1, 5]]).unwrap();
        assert_eq!(matrix.positions_of(5), vec![(0, 0), (1, 1)]);
        assert_eq!(matrix.positions_of(1), vec![(0, 1), (1, 0)]);
        assert!(matrix.positions_of(9).is_empty());
    }

    #[test]
    fn test_render_right_aligns() {
        let matrix = Matrix::from_rows(vec![vec![1, 20], vec![300, 4]]).unwrap();
        assert_eq!(matrix.render(4), "   1   20\n 300    4");
    }
}
