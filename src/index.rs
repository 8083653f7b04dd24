use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// Manifest file name, one per chunking unit
pub const INDEX_FILE_NAME: &str = "index.json";

/// One character-window chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextChunk {
    pub chunk_id: String,
    /// Chunk file name, relative to the index
    pub path: String,
    pub start_char: usize,
    pub end_char: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub sha256: String,
}

/// One syntax-aware chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeChunk {
    pub chunk_id: String,
    /// Source file, relative to the chunked root (posix separators)
    pub source_file: String,
    pub language: String,
    pub node_type: String,
    pub start_line: usize,
    pub end_line: usize,
    pub start_byte: usize,
    pub end_byte: usize,
    /// Chunk file path, relative to the output root
    pub path: String,
    pub sha256: String,
}

/// Manifest for one character-window run
#[derive(Debug, Serialize, Deserialize)]
pub struct TextIndex {
    pub source_file: String,
    pub out_dir: String,
    pub max_chars: usize,
    pub overlap_chars: usize,
    pub generator: String,
    pub chunks: Vec<TextChunk>,
}

/// Per-source-file manifest for a syntax-aware run
#[derive(Debug, Serialize, Deserialize)]
pub struct FileIndex {
    pub source_file: String,
    pub language: String,
    pub chunks: Vec<CodeChunk>,
}

/// Aggregate manifest spanning all files of a syntax-aware run
#[derive(Debug, Serialize, Deserialize)]
pub struct CodeIndex {
    pub source_root: String,
    pub out_dir: String,
    pub language_override: Option<String>,
    pub generator: String,
    pub chunks: Vec<CodeChunk>,
}

pub fn generator_tag() -> String {
    format!("docsplit v{}", env!("CARGO_PKG_VERSION"))
}

/// Serialize a manifest into `dir`, fully replacing any prior one
pub fn write_index<T: Serialize>(dir: &Path, index: &T) -> Result<(), ChunkError> {
    let json = serde_json::to_string_pretty(index)?;
    fs::write(dir.join(INDEX_FILE_NAME), format!("{json}\n"))?;
    Ok(())
}
