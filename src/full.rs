//! Unrestricted global alignment over the complete `(n+1) × (m+1)` matrix.

use std::time::Instant;

use log::{debug, trace};

use crate::scoring::{Cost, ScoringScheme};
use crate::traceback::{choose, AlignmentResult, Direction, Optimality, Traceback, TracebackMatrix};
use crate::Result;

#[derive(Debug, Clone)]
pub struct FullAligner {
    scoring: ScoringScheme,
}

impl FullAligner {
    /// Symbols that differ only in case always cost a full substitution here;
    /// partial credit for case is a banded-mode rule.
    pub fn new(scoring: ScoringScheme) -> Self {
        Self {
            scoring: scoring.case_sensitive(),
        }
    }

    /// Minimum-cost global alignment of `seq1` against `seq2`.
    ///
    /// `matrix[i][j]` holds the cheapest way to turn the first `i` symbols of
    /// `seq1` into the first `j` symbols of `seq2`; row 0 and column 0 are
    /// pure gap ladders. Time and space are O(n·m).
    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> Result<AlignmentResult> {
        let start_time = Instant::now();
        let (n, m) = (seq1.len(), seq2.len());
        let cols = m + 1;
        let gap = self.scoring.gap_cost();

        let mut costs = vec![Cost::ZERO; (n + 1) * cols];
        let mut traceback = TracebackMatrix::new(n + 1, cols);

        for i in 1..=n {
            costs[i * cols] = gap * i;
            traceback.set(i, 0, Direction::Up);
        }
        for j in 1..=m {
            costs[j] = gap * j;
            traceback.set(0, j, Direction::Left);
        }

        for i in 1..=n {
            for j in 1..=m {
                let diagonal =
                    costs[(i - 1) * cols + j - 1] + self.scoring.pair_cost(seq1[i - 1], seq2[j - 1]);
                let up = costs[(i - 1) * cols + j] + gap;
                let left = costs[i * cols + j - 1] + gap;

                let (cost, direction) = choose(diagonal, up, left);
                costs[i * cols + j] = cost;
                traceback.set(i, j, direction);
            }
        }

        let score = costs[n * cols + m];
        debug!(
            "full matrix {}x{} filled in {:?}, score {}",
            n + 1,
            cols,
            start_time.elapsed(),
            score
        );

        let path = Traceback::new(seq1, seq2, &self.scoring).reconstruct(&traceback)?;
        debug_assert_eq!(path.cost, score);
        trace!("full traceback produced {} columns", path.operations.len());

        Ok(AlignmentResult {
            score,
            aligned_seq1: path.aligned_seq1,
            aligned_seq2: path.aligned_seq2,
            operations: path.operations,
            optimality: Optimality::Exact,
        })
    }

    /// Score only, keeping two rows of the matrix.
    pub fn score(&self, seq1: &[u8], seq2: &[u8]) -> Cost {
        let gap = self.scoring.gap_cost();
        let mut prev: Vec<Cost> = (0..=seq2.len()).map(|j| gap * j).collect();
        let mut curr = vec![Cost::ZERO; seq2.len() + 1];

        for (i, &a) in seq1.iter().enumerate() {
            curr[0] = gap * (i + 1);
            for (j, &b) in seq2.iter().enumerate() {
                let diagonal = prev[j] + self.scoring.pair_cost(a, b);
                let up = prev[j + 1] + gap;
                let left = curr[j] + gap;
                curr[j + 1] = choose(diagonal, up, left).0;
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        prev[seq2.len()]
    }
}
