use std::fmt;
use std::ops::{Add, Mul};

use crate::{DEFAULT_INDEL, DEFAULT_MATCH, DEFAULT_SUB};

/// Alignment cost in half units.
///
/// The case-mismatch rule charges half a substitution, so every cost is kept
/// as a whole number of halves. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(i64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    /// Cost of an unreachable cell. Sticky under addition.
    pub const INFINITY: Cost = Cost(i64::MAX);

    /// Whole-unit cost.
    pub const fn units(value: i32) -> Self {
        Cost(value as i64 * 2)
    }

    pub const fn from_halves(halves: i64) -> Self {
        Cost(halves)
    }

    pub const fn halves(self) -> i64 {
        self.0
    }

    pub fn is_infinite(self) -> bool {
        self == Cost::INFINITY
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 2.0
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        if self.is_infinite() || rhs.is_infinite() {
            Cost::INFINITY
        } else {
            Cost(self.0 + rhs.0)
        }
    }
}

impl Mul<usize> for Cost {
    type Output = Cost;

    fn mul(self, rhs: usize) -> Cost {
        if self.is_infinite() {
            Cost::INFINITY
        } else {
            Cost(self.0 * rhs as i64)
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        } else if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}", self.as_f64())
        }
    }
}

/// Cost policy shared by the full and banded aligners. The case-fold
/// partial credit is only applied in banded mode.
///
/// Follows a minimisation convention: a match carries a negative cost so
/// that longer runs of agreement pull the total down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    pub match_cost: Cost,
    pub sub_cost: Cost,
    /// Charged when two symbols differ only in ASCII case (banded mode).
    pub case_sub_cost: Cost,
    pub indel_cost: Cost,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_cost: Cost::units(DEFAULT_MATCH),
            sub_cost: Cost::units(DEFAULT_SUB),
            case_sub_cost: Cost::from_halves(DEFAULT_SUB as i64),
            indel_cost: Cost::units(DEFAULT_INDEL),
        }
    }
}

impl ScoringScheme {
    pub fn new(match_cost: i32, sub_cost: i32, indel_cost: i32) -> Self {
        Self {
            match_cost: Cost::units(match_cost),
            sub_cost: Cost::units(sub_cost),
            case_sub_cost: Cost::from_halves(sub_cost as i64),
            indel_cost: Cost::units(indel_cost),
        }
    }

    /// Same costs, but symbols differing only in case count as a full substitution.
    pub fn case_sensitive(mut self) -> Self {
        self.case_sub_cost = self.sub_cost;
        self
    }

    /// Cost of aligning `a` against `b` in one column.
    pub fn pair_cost(&self, a: u8, b: u8) -> Cost {
        if a == b {
            self.match_cost
        } else if a.eq_ignore_ascii_case(&b) {
            self.case_sub_cost
        } else {
            self.sub_cost
        }
    }

    /// Whether case-only differences get partial credit.
    pub fn folds_case(&self) -> bool {
        self.case_sub_cost != self.sub_cost
    }

    pub fn gap_cost(&self) -> Cost {
        self.indel_cost
    }

    /// Cheapest cost any diagonal step can have.
    pub fn min_pair_cost(&self) -> Cost {
        self.match_cost.min(self.sub_cost).min(self.case_sub_cost)
    }
}
