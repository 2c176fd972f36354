//! Global alignment restricted to a diagonal band.
//!
//! Only cells with `|i - j| <= k` are evaluated. Row `i` of the band is
//! stored as `2k + 1` slots indexed by offset `d = j + k - i`; everything
//! outside the band is treated as unreachable.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::scoring::{Cost, ScoringScheme};
use crate::traceback::{
    choose, AlignmentResult, Direction, DirectionLookup, Optimality, Traceback, TracebackMatrix,
};
use crate::{AlignerError, Result, MAX_BAND_RADIUS};

#[derive(Debug, Clone)]
pub struct BandedAligner {
    scoring: ScoringScheme,
    radius: usize,
}

struct BandedTraceback {
    matrix: TracebackMatrix,
    radius: usize,
}

impl DirectionLookup for BandedTraceback {
    fn direction(&self, i: usize, j: usize) -> Option<Direction> {
        if j + self.radius < i || j > i + self.radius {
            return None;
        }
        self.matrix.get(i, j + self.radius - i)
    }
}

impl BandedAligner {
    pub fn new(scoring: ScoringScheme, radius: usize) -> Result<Self> {
        if radius > MAX_BAND_RADIUS {
            return Err(AlignerError::InvalidConfig(format!(
                "band radius cannot be greater than {}",
                MAX_BAND_RADIUS
            )));
        }
        Ok(Self { scoring, radius })
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    fn width(&self) -> usize {
        2 * self.radius + 1
    }

    /// The end cell `(n, m)` is only inside the band when the lengths differ
    /// by at most the radius.
    fn check_reachable(&self, seq1: &[u8], seq2: &[u8]) -> Result<()> {
        if seq1.len().abs_diff(seq2.len()) > self.radius {
            return Err(AlignerError::BandExhausted {
                len1: seq1.len(),
                len2: seq2.len(),
                radius: self.radius,
            });
        }
        Ok(())
    }

    /// Banded alignment of `seq1` against `seq2` in O(n·k) time and space.
    ///
    /// Fails with [`AlignerError::BandExhausted`] when the end cell lies
    /// outside the band. The returned [`Optimality`] says whether the score
    /// is proven equal to the unrestricted optimum.
    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> Result<AlignmentResult> {
        self.check_reachable(seq1, seq2)?;

        let start_time = Instant::now();
        let (n, m, k) = (seq1.len(), seq2.len(), self.radius);
        let width = self.width();
        let gap = self.scoring.gap_cost();

        let mut costs = vec![Cost::INFINITY; (n + 1) * width];
        let mut traceback = TracebackMatrix::new(n + 1, width);

        for i in 0..=n {
            let lo = i.saturating_sub(k);
            let hi = m.min(i + k);
            for j in lo..=hi {
                let d = j + k - i;
                if i == 0 {
                    costs[d] = gap * j;
                    if j > 0 {
                        traceback.set(0, d, Direction::Left);
                    }
                    continue;
                }
                if j == 0 {
                    costs[i * width + d] = gap * i;
                    traceback.set(i, d, Direction::Up);
                    continue;
                }

                let diagonal =
                    costs[(i - 1) * width + d] + self.scoring.pair_cost(seq1[i - 1], seq2[j - 1]);
                let up = if d + 1 < width {
                    costs[(i - 1) * width + d + 1] + gap
                } else {
                    Cost::INFINITY
                };
                let left = if d > 0 {
                    costs[i * width + d - 1] + gap
                } else {
                    Cost::INFINITY
                };

                let (cost, direction) = choose(diagonal, up, left);
                costs[i * width + d] = cost;
                traceback.set(i, d, direction);
            }
        }

        let score = costs[n * width + m + k - n];
        debug!(
            "banded matrix {}x{} (radius {}) filled in {:?}, score {}",
            n + 1,
            width,
            k,
            start_time.elapsed(),
            score
        );

        let optimality = self.certify(n, m, score);
        if optimality == Optimality::BandLimited {
            warn!(
                "banded score {} for {}x{} with radius {} is not proven optimal",
                score, n, m, k
            );
        }

        let lookup = BandedTraceback {
            matrix: traceback,
            radius: k,
        };
        let path = Traceback::new(seq1, seq2, &self.scoring).reconstruct(&lookup)?;
        debug_assert_eq!(path.cost, score);
        trace!("banded traceback produced {} columns", path.operations.len());

        Ok(AlignmentResult {
            score,
            aligned_seq1: path.aligned_seq1,
            aligned_seq2: path.aligned_seq2,
            operations: path.operations,
            optimality,
        })
    }

    /// Score only, keeping two band rows.
    pub fn score(&self, seq1: &[u8], seq2: &[u8]) -> Result<Cost> {
        self.check_reachable(seq1, seq2)?;

        let (n, m, k) = (seq1.len(), seq2.len(), self.radius);
        let width = self.width();
        let gap = self.scoring.gap_cost();

        let mut prev = vec![Cost::INFINITY; width];
        let mut curr = vec![Cost::INFINITY; width];
        for j in 0..=m.min(k) {
            prev[j + k] = gap * j;
        }

        for i in 1..=n {
            curr.fill(Cost::INFINITY);
            let lo = i.saturating_sub(k);
            let hi = m.min(i + k);
            for j in lo..=hi {
                let d = j + k - i;
                if j == 0 {
                    curr[d] = gap * i;
                    continue;
                }
                let diagonal = prev[d] + self.scoring.pair_cost(seq1[i - 1], seq2[j - 1]);
                let up = if d + 1 < width {
                    prev[d + 1] + gap
                } else {
                    Cost::INFINITY
                };
                let left = if d > 0 { curr[d - 1] + gap } else { Cost::INFINITY };
                curr[d] = choose(diagonal, up, left).0;
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        Ok(prev[m + k - n])
    }

    /// Decides whether any path that leaves the band could beat `score`.
    ///
    /// A path reaching offset `k + 1` needs at least `2(k + 1) - |n - m|`
    /// gaps, and each remaining diagonal column costs at least the cheapest
    /// pair cost. Costs are compared doubled to stay in whole half units.
    fn certify(&self, n: usize, m: usize, score: Cost) -> Optimality {
        let total = (n + m) as i64;
        let min_gaps = 2 * (self.radius as i64 + 1) - n.abs_diff(m) as i64;
        if min_gaps > total {
            return Optimality::BandProven;
        }

        let gap = self.scoring.gap_cost().halves();
        let pair = self.scoring.min_pair_cost().halves();
        let doubled_bound = |gaps: i64| 2 * gaps * gap + (total - gaps) * pair;
        let bound = doubled_bound(min_gaps).min(doubled_bound(total));

        if 2 * score.halves() <= bound {
            Optimality::BandProven
        } else {
            Optimality::BandLimited
        }
    }
}
