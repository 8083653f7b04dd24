use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::emitter;
use crate::error::ChunkError;
use crate::index::{self, CodeChunk, CodeIndex, FileIndex, TextChunk, TextIndex};
use crate::splitter::{chunk_spans, SplitConfig, TextMap};
use crate::syntax::{
    language_by_name, language_for_extension, select_top_level_nodes, LanguageSpec, ScanLimits,
    SyntaxParser,
};
use crate::walker::{collect_source_files, WalkOptions};

/// Split one text file into overlapping character chunks plus a manifest.
///
/// Chunk files land in `out_dir` as `chunk_NNNN.txt` next to `index.json`.
/// The configuration is validated before anything touches the filesystem,
/// and a populated destination is rejected unless `force` is set.
pub fn chunk_text_file(
    source: &Path,
    out_dir: &Path,
    config: &SplitConfig,
    force: bool,
) -> Result<Vec<TextChunk>> {
    config.validate()?;

    let raw = fs::read(source)
        .with_context(|| format!("failed to read source file: {}", source.display()))?;
    let text = String::from_utf8_lossy(&raw);
    let map = TextMap::new(&text);
    let spans = chunk_spans(&map, config)?;

    emitter::prepare_destination(out_dir, force)?;
    debug!(
        source = %source.display(),
        chunks = spans.len(),
        "emitting text chunks"
    );

    let width = emitter::id_width(spans.len());
    let mut chunks = Vec::with_capacity(spans.len());
    for (i, &(start, end)) in spans.iter().enumerate() {
        let seq = i + 1;
        let file_name = emitter::chunk_file_name(seq, width);
        let (byte_start, byte_end) = map.byte_range(start, end);
        let bytes = text[byte_start..byte_end].as_bytes();
        emitter::write_chunk(out_dir, &file_name, bytes)
            .with_context(|| format!("failed to write chunk {seq}"))?;

        chunks.push(TextChunk {
            chunk_id: emitter::chunk_label(seq, width),
            path: file_name,
            start_char: start,
            end_char: end,
            start_line: map.line_at(start),
            // Line of the last included character, not the exclusive end.
            end_line: map.line_at((end - 1).max(start)),
            sha256: emitter::sha256_hex(bytes),
        });
    }

    let manifest = TextIndex {
        source_file: source.display().to_string(),
        out_dir: out_dir.display().to_string(),
        max_chars: config.max_chars,
        overlap_chars: config.overlap_chars,
        generator: index::generator_tag(),
        chunks: chunks.clone(),
    };
    index::write_index(out_dir, &manifest).context("failed to write index.json")?;

    Ok(chunks)
}

/// Split a source file or tree into top-level declaration chunks.
///
/// Each processed file gets its own `<name>.chunks/` directory under
/// `out_dir` holding `chunk_NNNN.txt` files and a per-file `index.json`;
/// an aggregate `index.json` at the output root spans all files. Files
/// without a language mapping, without a registered grammar, or without
/// any top-level declaration are skipped; the run continues.
pub fn chunk_source(
    source: &Path,
    out_dir: &Path,
    language_override: Option<&str>,
    force: bool,
    parser: &dyn SyntaxParser,
    walk: &WalkOptions,
) -> Result<Vec<CodeChunk>> {
    let (files, rel_root) = if source.is_file() {
        let parent = source.parent().unwrap_or_else(|| Path::new(""));
        (vec![source.to_path_buf()], parent.to_path_buf())
    } else {
        (collect_source_files(source, walk)?, source.to_path_buf())
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory: {}", out_dir.display()))?;

    let mut all_chunks: Vec<CodeChunk> = Vec::new();
    for src in &files {
        let spec = match resolve_language(src, language_override) {
            Some(spec) => spec,
            None => {
                debug!(path = %src.display(), "no language mapping, skipping");
                continue;
            }
        };

        let data = match fs::read(src) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %src.display(), error = %e, "unreadable file, skipping");
                continue;
            }
        };

        let tree = match parser.parse(&data, spec.name) {
            Ok(tree) => tree,
            Err(ChunkError::UnsupportedLanguage(tag)) => {
                warn!(path = %src.display(), language = %tag, "no grammar registered, skipping");
                continue;
            }
            Err(ChunkError::ParseFailed(reason)) => {
                warn!(path = %src.display(), %reason, "parse failed, skipping");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let nodes = select_top_level_nodes(&tree, spec, &ScanLimits::default());
        if nodes.is_empty() {
            debug!(path = %src.display(), "no top-level declarations, skipping");
            continue;
        }

        let rel = src.strip_prefix(&rel_root).unwrap_or(src);
        let rel_posix = posix_path(rel);
        let chunk_dir = chunk_dir_for(out_dir, rel);
        emitter::prepare_destination(&chunk_dir, force)?;

        let dir_posix = posix_path(chunk_dir.strip_prefix(out_dir).unwrap_or(&chunk_dir));
        let width = emitter::id_width(nodes.len());
        let mut file_chunks = Vec::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            let seq = i + 1;
            let (start_byte, end_byte) = (node.start_byte(), node.end_byte());
            let bytes = &data[start_byte..end_byte];
            let file_name = emitter::chunk_file_name(seq, width);
            emitter::write_chunk(&chunk_dir, &file_name, bytes)
                .with_context(|| format!("failed to write chunk {seq} for {rel_posix}"))?;

            file_chunks.push(CodeChunk {
                chunk_id: format!("{rel_posix}::{}", emitter::chunk_label(seq, width)),
                source_file: rel_posix.clone(),
                language: spec.name.to_string(),
                node_type: node.kind().to_string(),
                start_line: node.start_position().row + 1,
                end_line: node.end_position().row + 1,
                start_byte,
                end_byte,
                path: format!("{dir_posix}/{file_name}"),
                sha256: emitter::sha256_hex(bytes),
            });
        }

        debug!(path = %rel_posix, chunks = file_chunks.len(), "emitted code chunks");
        let manifest = FileIndex {
            source_file: rel_posix.clone(),
            language: spec.name.to_string(),
            chunks: file_chunks.clone(),
        };
        index::write_index(&chunk_dir, &manifest)
            .with_context(|| format!("failed to write index.json for {rel_posix}"))?;
        all_chunks.extend(file_chunks);
    }

    let manifest = CodeIndex {
        source_root: source.display().to_string(),
        out_dir: out_dir.display().to_string(),
        language_override: language_override.map(str::to_string),
        generator: index::generator_tag(),
        chunks: all_chunks.clone(),
    };
    index::write_index(out_dir, &manifest).context("failed to write aggregate index.json")?;

    Ok(all_chunks)
}

fn resolve_language(
    path: &Path,
    override_tag: Option<&str>,
) -> Option<&'static LanguageSpec> {
    match override_tag {
        Some(tag) => language_by_name(tag),
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| language_for_extension(&ext.to_lowercase())),
    }
}

/// `<out_dir>/<rel parent>/<file name>.chunks`
fn chunk_dir_for(out_dir: &Path, rel: &Path) -> PathBuf {
    let name = rel
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let parent = rel.parent().unwrap_or_else(|| Path::new(""));
    out_dir.join(parent).join(format!("{name}.chunks"))
}

/// Relative path with forward slashes, for ids and manifests
fn posix_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
