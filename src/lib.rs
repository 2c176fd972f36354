//! Global pairwise alignment of symbol sequences.
//!
//! Two variants share one [`ScoringScheme`]: [`FullAligner`] evaluates the
//! whole edit matrix, [`BandedAligner`] only the cells within a fixed
//! distance of the main diagonal. [`Aligner`] truncates the inputs and
//! dispatches to one of them.
//!
//! ```
//! use gene_aligner::{align, Cost};
//!
//! let result = align(b"ACGT", b"AGT", false, 4).unwrap();
//! assert_eq!(result.score, Cost::units(-4));
//! assert_eq!(result.aligned_seq2_str(), "A-GT");
//! ```

use thiserror::Error;

pub mod alignment_mode;
pub mod banded;
pub mod batch;
pub mod config;
pub mod full;
pub mod scoring;
pub mod traceback;

pub use crate::alignment_mode::{AlignmentMode, AlignmentParams};
pub use crate::banded::BandedAligner;
pub use crate::batch::BatchAligner;
pub use crate::config::AlignerConfig;
pub use crate::full::FullAligner;
pub use crate::scoring::{Cost, ScoringScheme};
pub use crate::traceback::{AlignmentResult, AlignmentStats, Optimality, TracebackOperation};

// Default costs, minimisation convention
pub const DEFAULT_MATCH: i32 = -3;
pub const DEFAULT_SUB: i32 = 1;
pub const DEFAULT_INDEL: i32 = 5;

pub const DEFAULT_BAND_RADIUS: usize = 3;
pub const MAX_BAND_RADIUS: usize = 4096;
pub const DEFAULT_PREVIEW_WIDTH: usize = 100;

/// Gap marker in aligned output.
pub const GAP: u8 = b'-';

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("Invalid symbol {symbol:?} at position {position} of sequence {sequence}")]
    InvalidSymbol {
        sequence: usize,
        position: usize,
        symbol: char,
    },
    #[error("Sequences of length {len1} and {len2} cannot meet within a band of radius {radius}")]
    BandExhausted {
        len1: usize,
        len2: usize,
        radius: usize,
    },
    #[error("Banded score {score} is not proven optimal for radius {radius}")]
    BandTooNarrow { radius: usize, score: Cost },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Traceback error: {0}")]
    TracebackError(String),
    #[error("Worker error: {0}")]
    WorkerError(String),
}

pub type Result<T> = std::result::Result<T, AlignerError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<&str> for Sequence {
    fn from(value: &str) -> Self {
        Sequence::new(value.as_bytes())
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Symbols must be ASCII letters. `sequence` is 1 or 2, for error reporting.
fn validate(sequence: usize, symbols: &[u8]) -> Result<()> {
    match symbols.iter().position(|b| !b.is_ascii_alphabetic()) {
        Some(position) => Err(AlignerError::InvalidSymbol {
            sequence,
            position,
            symbol: char::from(symbols[position]),
        }),
        None => Ok(()),
    }
}

/// Entry point that truncates, validates and dispatches.
#[derive(Debug, Clone)]
pub struct Aligner {
    config: AlignerConfig,
    full: FullAligner,
    banded: BandedAligner,
}

impl Aligner {
    /// Fails when `config.band_radius` exceeds [`MAX_BAND_RADIUS`].
    pub fn new(config: AlignerConfig) -> Result<Self> {
        Ok(Self {
            full: FullAligner::new(config.scoring),
            banded: BandedAligner::new(config.scoring, config.band_radius)?,
            config,
        })
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Aligns the first `params.align_length` symbols of each sequence.
    pub fn align(&self, seq1: &[u8], seq2: &[u8], params: AlignmentParams) -> Result<AlignmentResult> {
        let seq1 = &seq1[..params.truncated_len(seq1.len())];
        let seq2 = &seq2[..params.truncated_len(seq2.len())];
        validate(1, seq1)?;
        validate(2, seq2)?;

        log::debug!(
            "{:?} alignment of {} x {} symbols",
            params.mode,
            seq1.len(),
            seq2.len()
        );

        match params.mode {
            AlignmentMode::Full => self.full.align(seq1, seq2),
            AlignmentMode::Banded => {
                let result = self.banded.align(seq1, seq2)?;
                if self.config.strict_band && result.optimality == Optimality::BandLimited {
                    return Err(AlignerError::BandTooNarrow {
                        radius: self.banded.radius(),
                        score: result.score,
                    });
                }
                Ok(result)
            }
        }
    }
}

/// Aligns with the default configuration.
pub fn align(seq1: &[u8], seq2: &[u8], banded: bool, align_length: i64) -> Result<AlignmentResult> {
    let params = AlignmentParams::new(AlignmentMode::from_banded(banded), align_length);
    Aligner::new(AlignerConfig::default())?.align(seq1, seq2, params)
}
