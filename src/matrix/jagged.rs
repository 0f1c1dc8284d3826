//! Non-rectangular matrix where every row has its own length.

use rand::Rng;
use std::ops::RangeInclusive;
use tracing::instrument;

/// Rows of independent length. No cross-row invariant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JaggedMatrix {
    rows: Vec<Vec<i64>>,
}

impl JaggedMatrix {
    /// Wraps rows as given.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        Self { rows }
    }

    /// One row per entry of `lengths`, each cell drawn uniformly from `range`.
    #[instrument(skip(rng))]
    pub fn random<G: Rng + ?Sized>(
        lengths: &[usize],
        range: RangeInclusive<i64>,
        rng: &mut G,
    ) -> Self {
        let rows = lengths
            .iter()
            .map(|&len| (0..len).map(|_| rng.gen_range(range.clone())).collect())
            .collect();
        Self { rows }
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of each row, in order.
    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_rows_keep_requested_lengths() {
        let mut rng = Pcg64::seed_from_u64(5);
        let lengths = [1, 4, 2, 7];
        let jagged = JaggedMatrix::random(&lengths, 1..=5, &mut rng);
        assert_eq!(jagged.row_count(), 4);
        assert_eq!(jagged.row_lengths(), lengths.to_vec());
        assert!(jagged.rows().iter().flatten().all(|c| (1..=5).contains(c)));
    }
}
