mod spans;

#[cfg(test)]
mod tests;

pub use spans::{chunk_spans, TextMap};

use crate::error::ChunkError;

/// Maximum characters per chunk (configurable)
pub const DEFAULT_MAX_CHARS: usize = 15_000;

/// Overlap between consecutive chunks in characters
pub const DEFAULT_OVERLAP_CHARS: usize = 200;

/// Minimum fraction of the window a chunk must fill before a newline
/// boundary is accepted over the hard window end
pub const DEFAULT_MIN_BREAK_RATIO: f64 = 0.6;

/// Parameters for character-window chunking
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Maximum characters per chunk
    pub max_chars: usize,
    /// Characters shared between consecutive chunks
    pub overlap_chars: usize,
    /// Newline snapping threshold; a candidate newline closer to the chunk
    /// start than this fraction of the window is ignored
    pub min_break_ratio: f64,
}

impl SplitConfig {
    pub fn new(max_chars: usize, overlap_chars: usize) -> Self {
        Self {
            max_chars,
            overlap_chars,
            min_break_ratio: DEFAULT_MIN_BREAK_RATIO,
        }
    }

    /// Reject degenerate configurations before any work is done
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.max_chars == 0 {
            return Err(ChunkError::InvalidConfig(
                "max_chars must be > 0".to_string(),
            ));
        }
        if self.overlap_chars >= self.max_chars {
            return Err(ChunkError::InvalidConfig(
                "overlap_chars must be < max_chars".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS, DEFAULT_OVERLAP_CHARS)
    }
}
