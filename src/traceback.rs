use std::borrow::Cow;

use crate::scoring::{Cost, ScoringScheme};
use crate::{AlignerError, Result, GAP};

/// Predecessor that produced a cell's minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Diagonal, // (i-1, j-1): match or substitution
    Up,       // (i-1, j): symbol of seq1 against a gap
    Left,     // (i, j-1): gap against a symbol of seq2
}

/// Picks the cheapest of the three moves. Ties go diagonal, then up, then left.
pub(crate) fn choose(diagonal: Cost, up: Cost, left: Cost) -> (Cost, Direction) {
    if diagonal <= up && diagonal <= left {
        (diagonal, Direction::Diagonal)
    } else if up <= left {
        (up, Direction::Up)
    } else {
        (left, Direction::Left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    CaseMismatch,
    Mismatch,
    Insertion,
    Deletion,
}

/// How much of the search space backs the reported score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optimality {
    /// Every cell of the matrix was evaluated.
    Exact,
    /// Banded, and no path leaving the band can be cheaper.
    BandProven,
    /// Banded, and a path leaving the band might be cheaper.
    BandLimited,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub case_mismatches: usize,
    pub mismatches: usize,
    pub insertions: usize,
    pub deletions: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    pub score: Cost,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub operations: Vec<TracebackOperation>,
    pub optimality: Optimality,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn aligned_seq1_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_seq1)
    }

    pub fn aligned_seq2_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_seq2)
    }

    /// Leading `width` columns of both rows, for display.
    pub fn preview(&self, width: usize) -> (&[u8], &[u8]) {
        let end = width.min(self.len());
        (&self.aligned_seq1[..end], &self.aligned_seq2[..end])
    }

    pub fn stats(&self) -> AlignmentStats {
        self.operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    TracebackOperation::Match => acc.matches += 1,
                    TracebackOperation::CaseMismatch => acc.case_mismatches += 1,
                    TracebackOperation::Mismatch => acc.mismatches += 1,
                    TracebackOperation::Insertion => acc.insertions += 1,
                    TracebackOperation::Deletion => acc.deletions += 1,
                }
                acc
            })
    }
}

/// Row-major grid of traceback choices. `None` marks the origin or an
/// uncomputed cell.
pub(crate) struct TracebackMatrix {
    data: Vec<Option<Direction>>,
    cols: usize,
}

impl TracebackMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![None; rows * cols],
            cols,
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: Direction) {
        self.data[row * self.cols + col] = Some(value);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Direction> {
        self.data[row * self.cols + col]
    }
}

/// Maps a logical cell `(i, j)` to its stored traceback choice.
pub(crate) trait DirectionLookup {
    fn direction(&self, i: usize, j: usize) -> Option<Direction>;
}

impl DirectionLookup for TracebackMatrix {
    fn direction(&self, i: usize, j: usize) -> Option<Direction> {
        self.get(i, j)
    }
}

pub(crate) struct TracebackPath {
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub operations: Vec<TracebackOperation>,
    pub cost: Cost,
}

pub(crate) struct Traceback<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    scoring: &'a ScoringScheme,
}

impl<'a> Traceback<'a> {
    pub fn new(seq1: &'a [u8], seq2: &'a [u8], scoring: &'a ScoringScheme) -> Self {
        Self {
            seq1,
            seq2,
            scoring,
        }
    }

    /// Walks from `(|seq1|, |seq2|)` back to the origin.
    pub fn reconstruct<L: DirectionLookup>(&self, lookup: &L) -> Result<TracebackPath> {
        let capacity = self.seq1.len() + self.seq2.len();
        let mut aligned_seq1 = Vec::with_capacity(capacity);
        let mut aligned_seq2 = Vec::with_capacity(capacity);
        let mut operations = Vec::with_capacity(capacity);
        let mut cost = Cost::ZERO;

        let (mut i, mut j) = (self.seq1.len(), self.seq2.len());
        while i > 0 || j > 0 {
            let step = lookup.direction(i, j).ok_or_else(|| {
                AlignerError::TracebackError(format!("no recorded move at cell ({}, {})", i, j))
            })?;
            match step {
                Direction::Diagonal => {
                    let (a, b) = (self.seq1[i - 1], self.seq2[j - 1]);
                    aligned_seq1.push(a);
                    aligned_seq2.push(b);
                    operations.push(if a == b {
                        TracebackOperation::Match
                    } else if self.scoring.folds_case() && a.eq_ignore_ascii_case(&b) {
                        TracebackOperation::CaseMismatch
                    } else {
                        TracebackOperation::Mismatch
                    });
                    cost = cost + self.scoring.pair_cost(a, b);
                    i -= 1;
                    j -= 1;
                }
                Direction::Up => {
                    aligned_seq1.push(self.seq1[i - 1]);
                    aligned_seq2.push(GAP);
                    operations.push(TracebackOperation::Deletion);
                    cost = cost + self.scoring.gap_cost();
                    i -= 1;
                }
                Direction::Left => {
                    aligned_seq1.push(GAP);
                    aligned_seq2.push(self.seq2[j - 1]);
                    operations.push(TracebackOperation::Insertion);
                    cost = cost + self.scoring.gap_cost();
                    j -= 1;
                }
            }
        }

        // Built backwards from the end cell
        aligned_seq1.reverse();
        aligned_seq2.reverse();
        operations.reverse();

        Ok(TracebackPath {
            aligned_seq1,
            aligned_seq2,
            operations,
            cost,
        })
    }
}
