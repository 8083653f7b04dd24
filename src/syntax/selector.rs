use tree_sitter::{Node, Tree};

use super::LanguageSpec;

/// Bounds for the wrapper-descendant scan.
///
/// Wrappers usually hold the declaration as a direct named child, so a
/// shallow bounded scan is enough; the limits keep cost flat on
/// adversarial trees. The defaults are preserved heuristics, not tuned.
#[derive(Debug, Clone)]
pub struct ScanLimits {
    /// How many levels below the wrapper to inspect
    pub max_depth: usize,
    /// Named children considered per level
    pub max_children: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_children: 8,
        }
    }
}

/// Select the top-level nodes worth emitting as chunks, in source order.
///
/// A direct child of the root is selected when its type is in the
/// language's interesting set. A wrapper (decorator, export) holding an
/// interesting declaration within `limits` is selected as the wrapper
/// itself, so the wrapping syntax stays attached to the chunk. Imports
/// and other top-level statements are skipped.
pub fn select_top_level_nodes<'tree>(
    tree: &'tree Tree,
    spec: &LanguageSpec,
    limits: &ScanLimits,
) -> Vec<Node<'tree>> {
    let root = tree.root_node();
    let mut cursor = root.walk();
    let mut selected = Vec::new();

    for child in root.named_children(&mut cursor) {
        let kind = child.kind();
        if spec.interesting.contains(&kind) {
            selected.push(child);
        } else if spec.wrappers.contains(&kind)
            && has_interesting_descendant(child, spec.interesting, limits)
        {
            selected.push(child);
        }
    }
    selected
}

/// Bounded scan for an interesting node type below a wrapper
fn has_interesting_descendant(node: Node<'_>, interesting: &[&str], limits: &ScanLimits) -> bool {
    let mut stack: Vec<(Node<'_>, usize)> = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor).take(limits.max_children) {
        stack.push((child, 1));
    }

    while let Some((candidate, depth)) = stack.pop() {
        if interesting.contains(&candidate.kind()) {
            return true;
        }
        if depth < limits.max_depth {
            let mut cursor = candidate.walk();
            for child in candidate
                .named_children(&mut cursor)
                .take(limits.max_children)
            {
                stack.push((child, depth + 1));
            }
        }
    }
    false
}
