use crate::scoring::{Cost, ScoringScheme};
use crate::{AlignerError, Result, DEFAULT_BAND_RADIUS, DEFAULT_PREVIEW_WIDTH, MAX_BAND_RADIUS};

#[derive(Debug, Clone)]
pub struct AlignerConfig {
    pub scoring: ScoringScheme,
    /// Half-width `k` of the band; the band spans `2k + 1` diagonals.
    pub band_radius: usize,
    /// Report a banded result that could not be proven optimal as an error.
    pub strict_band: bool,
    pub preview_width: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringScheme::default(),
            band_radius: DEFAULT_BAND_RADIUS,
            strict_band: false,
            preview_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

impl AlignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoring(mut self, scoring: ScoringScheme) -> Result<Self> {
        if scoring.indel_cost < Cost::ZERO {
            return Err(AlignerError::InvalidConfig(format!(
                "indel cost must be non-negative, got {}",
                scoring.indel_cost
            )));
        }
        if scoring.match_cost > scoring.sub_cost {
            return Err(AlignerError::InvalidConfig(format!(
                "match cost {} must not exceed substitution cost {}",
                scoring.match_cost, scoring.sub_cost
            )));
        }
        self.scoring = scoring;
        Ok(self)
    }

    pub fn with_band_radius(mut self, radius: usize) -> Result<Self> {
        if radius > MAX_BAND_RADIUS {
            return Err(AlignerError::InvalidConfig(format!(
                "band radius cannot be greater than {}",
                MAX_BAND_RADIUS
            )));
        }
        self.band_radius = radius;
        Ok(self)
    }

    pub fn with_strict_band(mut self, strict: bool) -> Self {
        self.strict_band = strict;
        self
    }

    pub fn with_preview_width(mut self, width: usize) -> Self {
        self.preview_width = width;
        self
    }
}
