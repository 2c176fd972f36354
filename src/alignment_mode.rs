#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentMode {
    #[default]
    Full,   // Needleman-Wunsch over the whole matrix
    Banded, // Cells within a fixed distance of the main diagonal
}

impl AlignmentMode {
    pub fn from_banded(banded: bool) -> Self {
        if banded {
            AlignmentMode::Banded
        } else {
            AlignmentMode::Full
        }
    }
}

/// Per-call request: which aligner and how many leading symbols to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentParams {
    pub mode: AlignmentMode,
    /// Values of zero or below result in an empty alignment.
    pub align_length: i64,
}

impl AlignmentParams {
    pub fn new(mode: AlignmentMode, align_length: i64) -> Self {
        Self { mode, align_length }
    }

    /// Number of leading symbols kept from a sequence of length `len`.
    pub fn truncated_len(&self, len: usize) -> usize {
        if self.align_length <= 0 {
            0
        } else {
            len.min(usize::try_from(self.align_length).unwrap_or(usize::MAX))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_banded() {
        assert_eq!(AlignmentMode::from_banded(true), AlignmentMode::Banded);
        assert_eq!(AlignmentMode::from_banded(false), AlignmentMode::Full);
    }

    #[test]
    fn test_truncated_len() {
        let params = AlignmentParams::new(AlignmentMode::Full, 3);
        assert_eq!(params.truncated_len(10), 3);
        assert_eq!(params.truncated_len(2), 2);
        assert_eq!(AlignmentParams::new(AlignmentMode::Full, 0).truncated_len(10), 0);
        assert_eq!(AlignmentParams::new(AlignmentMode::Full, -5).truncated_len(10), 0);
    }
}
