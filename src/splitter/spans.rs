use super::SplitConfig;
use crate::error::ChunkError;

/// Offset tables for one document, built in a single pass.
///
/// Chunk spans are expressed in character offsets; the table maps them back
/// to byte offsets for slicing and to 1-based line numbers for the index.
#[derive(Debug)]
pub struct TextMap {
    /// Byte offset of each character
    char_starts: Vec<usize>,
    /// Character positions of every newline
    newlines: Vec<usize>,
    byte_len: usize,
}

impl TextMap {
    pub fn new(text: &str) -> Self {
        let mut char_starts = Vec::new();
        let mut newlines = Vec::new();
        for (char_pos, (byte_pos, ch)) in text.char_indices().enumerate() {
            char_starts.push(byte_pos);
            if ch == '\n' {
                newlines.push(char_pos);
            }
        }
        Self {
            char_starts,
            newlines,
            byte_len: text.len(),
        }
    }

    /// Length of the document in characters
    pub fn char_len(&self) -> usize {
        self.char_starts.len()
    }

    /// Convert a half-open character span to the matching byte span
    pub fn byte_range(&self, start: usize, end: usize) -> (usize, usize) {
        let to_byte = |pos: usize| self.char_starts.get(pos).copied().unwrap_or(self.byte_len);
        (to_byte(start), to_byte(end))
    }

    /// 1-based line number containing the character at `pos`
    pub fn line_at(&self, pos: usize) -> usize {
        // Count newlines strictly before `pos`.
        self.newlines.partition_point(|&nl| nl < pos) + 1
    }

    /// Last newline at or after `start` and strictly before `end`
    fn last_newline_in(&self, start: usize, end: usize) -> Option<usize> {
        let idx = self.newlines.partition_point(|&nl| nl < end);
        if idx == 0 {
            return None;
        }
        let nl = self.newlines[idx - 1];
        (nl >= start).then_some(nl)
    }
}

/// Compute the ordered chunk spans for a document.
///
/// Spans are half-open character ranges covering the document from offset 0
/// to its end. Consecutive spans share at most `overlap_chars` characters:
/// the next span starts `overlap_chars` before the previous end.
pub fn chunk_spans(map: &TextMap, config: &SplitConfig) -> Result<Vec<(usize, usize)>, ChunkError> {
    config.validate()?;

    let len = map.char_len();
    let mut spans = Vec::new();
    let mut start = 0;
    while start < len {
        let hard_end = (start + config.max_chars).min(len);
        let mut end = choose_chunk_end(map, start, hard_end, config.min_break_ratio);
        if end <= start {
            // Fallback to ensure forward progress.
            end = hard_end;
            if end <= start {
                break;
            }
        }
        spans.push((start, end));
        if end >= len {
            break;
        }
        start = end.saturating_sub(config.overlap_chars);
    }
    Ok(spans)
}

/// Pick a chunk end close to `hard_end`, preferring a newline boundary.
///
/// A newline closer to `start` than `min_ratio` of the window would produce
/// a tiny chunk, so it is ignored in favor of the hard window end.
fn choose_chunk_end(map: &TextMap, start: usize, hard_end: usize, min_ratio: f64) -> usize {
    if hard_end >= map.char_len() {
        return map.char_len();
    }

    let min_end = start + ((hard_end - start) as f64 * min_ratio) as usize;
    match map.last_newline_in(start, hard_end) {
        // Include the newline.
        Some(nl) if nl >= min_end => nl + 1,
        _ => hard_end,
    }
}
