// Public API exports
pub mod emitter;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod splitter;
pub mod syntax;
pub mod walker;

// Re-export main types for convenience
pub use error::ChunkError;

pub use index::{CodeChunk, CodeIndex, FileIndex, TextChunk, TextIndex, INDEX_FILE_NAME};

pub use pipeline::{chunk_source, chunk_text_file};

pub use splitter::{
    chunk_spans, SplitConfig, TextMap, DEFAULT_MAX_CHARS, DEFAULT_MIN_BREAK_RATIO,
    DEFAULT_OVERLAP_CHARS,
};

pub use syntax::{
    language_by_name, language_for_extension, select_top_level_nodes, GrammarRegistry,
    LanguageSpec, ScanLimits, SyntaxParser, LANGUAGES,
};

pub use walker::{collect_source_files, WalkOptions, DEFAULT_SKIP_DIRS};
