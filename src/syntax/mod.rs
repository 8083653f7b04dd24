mod grammars;
mod languages;
mod selector;


pub use grammars::GrammarRegistry;
pub use languages::{language_by_name, language_for_extension, LanguageSpec, LANGUAGES};
pub use selector::{select_top_level_nodes, ScanLimits};

use crate::error::ChunkError;

/// Capability to parse raw bytes into a syntax tree for a language tag.
///
/// Character-window chunking never touches this; the syntax-aware pipeline
/// takes it as an injected collaborator so grammar acquisition stays
/// swappable (and testable) behind one seam.
pub trait SyntaxParser: Send + Sync {
    /// Parse `bytes` as `language`.
    ///
    /// Fails with `UnsupportedLanguage` when no grammar is registered for
    /// the tag, and `ParseFailed` when the parser yields no tree.
    fn parse(&self, bytes: &[u8], language: &str) -> Result<tree_sitter::Tree, ChunkError>;
}
