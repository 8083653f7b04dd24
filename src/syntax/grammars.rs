use std::collections::HashMap;

use tree_sitter::{Language, Parser, Tree};

use super::SyntaxParser;
use crate::error::ChunkError;

/// Language tag -> compiled tree-sitter grammar
pub struct GrammarRegistry {
    grammars: HashMap<String, Language>,
}

impl GrammarRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            grammars: HashMap::new(),
        }
    }

    /// Registry with the bundled grammars.
    ///
    /// `jsx` parses with the javascript grammar; `tsx` has its own.
    /// Languages present in the chunking tables but absent here are
    /// reported as unsupported at parse time and skipped per file.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("rust", tree_sitter_rust::LANGUAGE.into());
        registry.register("python", tree_sitter_python::LANGUAGE.into());
        registry.register("javascript", tree_sitter_javascript::LANGUAGE.into());
        registry.register("jsx", tree_sitter_javascript::LANGUAGE.into());
        registry.register(
            "typescript",
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        );
        registry.register("tsx", tree_sitter_typescript::LANGUAGE_TSX.into());
        registry.register("go", tree_sitter_go::LANGUAGE.into());
        registry
    }

    /// Register a grammar for a language tag
    pub fn register(&mut self, tag: impl Into<String>, grammar: Language) {
        self.grammars.insert(tag.into(), grammar);
    }

    /// Whether a grammar is registered for the tag
    pub fn supports(&self, tag: &str) -> bool {
        self.grammars.contains_key(tag)
    }

    /// Number of registered grammars
    pub fn grammar_count(&self) -> usize {
        self.grammars.len()
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxParser for GrammarRegistry {
    fn parse(&self, bytes: &[u8], language: &str) -> Result<Tree, ChunkError> {
        let grammar = self
            .grammars
            .get(language)
            .ok_or_else(|| ChunkError::UnsupportedLanguage(language.to_string()))?;

        let mut parser = Parser::new();
        parser
            .set_language(grammar)
            .map_err(|e| ChunkError::ParseFailed(format!("{language} grammar rejected: {e}")))?;

        parser
            .parse(bytes, None)
            .ok_or_else(|| ChunkError::ParseFailed(format!("no tree produced for {language} input")))
    }
}
