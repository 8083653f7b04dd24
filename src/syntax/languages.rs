/// Chunking configuration for one language.
///
/// Everything here is data: which file extensions map to the language,
/// which top-level node types are worth emitting as chunks, and which
/// node types merely wrap a declaration (decorators, export statements).
/// Adding a language is a new table entry, not new code.
#[derive(Debug)]
pub struct LanguageSpec {
    /// Language tag used in chunk records and grammar lookup
    pub name: &'static str,
    /// File extensions (lowercase, without dot) handled by this language
    pub extensions: &'static [&'static str],
    /// Top-level node types emitted as chunks
    pub interesting: &'static [&'static str],
    /// Node types that wrap a declaration and should stay attached to it
    pub wrappers: &'static [&'static str],
}

pub const LANGUAGES: &[LanguageSpec] = &[
    LanguageSpec {
        name: "python",
        extensions: &["py"],
        interesting: &[
            "function_definition",
            "class_definition",
            "decorated_definition",
        ],
        wrappers: &["decorated_definition"],
    },
    LanguageSpec {
        name: "javascript",
        extensions: &["js"],
        interesting: &["function_declaration", "class_declaration"],
        wrappers: &["export_statement", "export_default_declaration"],
    },
    LanguageSpec {
        name: "jsx",
        extensions: &["jsx"],
        interesting: &["function_declaration", "class_declaration"],
        wrappers: &["export_statement", "export_default_declaration"],
    },
    LanguageSpec {
        name: "typescript",
        extensions: &["ts"],
        interesting: &[
            "function_declaration",
            "class_declaration",
            "interface_declaration",
            "enum_declaration",
            "type_alias_declaration",
        ],
        wrappers: &["export_statement", "export_default_declaration"],
    },
    LanguageSpec {
        name: "tsx",
        extensions: &["tsx"],
        interesting: &[
            "function_declaration",
            "class_declaration",
            "interface_declaration",
            "enum_declaration",
            "type_alias_declaration",
        ],
        wrappers: &["export_statement", "export_default_declaration"],
    },
    LanguageSpec {
        name: "go",
        extensions: &["go"],
        interesting: &[
            "function_declaration",
            "method_declaration",
            "type_declaration",
        ],
        wrappers: &[],
    },
    LanguageSpec {
        name: "rust",
        extensions: &["rs"],
        interesting: &[
            "function_item",
            "struct_item",
            "enum_item",
            "impl_item",
            "trait_item",
            "mod_item",
        ],
        wrappers: &[],
    },
    LanguageSpec {
        name: "java",
        extensions: &["java"],
        interesting: &[
            "class_declaration",
            "interface_declaration",
            "enum_declaration",
            "method_declaration",
            "constructor_declaration",
        ],
        wrappers: &[],
    },
    LanguageSpec {
        name: "c",
        extensions: &["c", "h"],
        interesting: &[
            "function_definition",
            "struct_specifier",
            "enum_specifier",
            "union_specifier",
        ],
        wrappers: &[],
    },
    LanguageSpec {
        name: "cpp",
        extensions: &["cc", "cpp", "cxx", "hpp", "hh"],
        interesting: &[
            "function_definition",
            "class_specifier",
            "struct_specifier",
            "enum_specifier",
            "namespace_definition",
        ],
        wrappers: &[],
    },
    LanguageSpec {
        name: "ruby",
        extensions: &["rb"],
        interesting: &["method", "class", "module"],
        wrappers: &[],
    },
    LanguageSpec {
        name: "php",
        extensions: &["php"],
        interesting: &[
            "function_definition",
            "class_declaration",
            "interface_declaration",
            "trait_declaration",
        ],
        wrappers: &[],
    },
    LanguageSpec {
        name: "bash",
        extensions: &["sh"],
        interesting: &["function_definition"],
        wrappers: &[],
    },
];

/// Look up the language for a file extension (lowercase, without dot)
pub fn language_for_extension(ext: &str) -> Option<&'static LanguageSpec> {
    LANGUAGES
        .iter()
        .find(|spec| spec.extensions.contains(&ext))
}

/// Look up a language by its tag
pub fn language_by_name(name: &str) -> Option<&'static LanguageSpec> {
    LANGUAGES.iter().find(|spec| spec.name == name)
}
