//! Documentation tree builder.
//!
//! Builds a nested sidebar tree from the flat page list a templating host
//! provides. Pages are selected by a fixed source-path prefix (`docs/` by
//! default), segmented on `/`, and merged so that pages sharing a path
//! prefix share the same ancestor node.
//!
//! # Architecture
//!
//! Insertion goes through a flat `Vec` of raw nodes with children tracked
//! by indices and a per-node segment map for O(1) dedup at each depth. The
//! arena is converted to the public [`TreeNode`] shape at the end, sorting
//! each child list by `order` (stable, so colliding orders keep insertion
//! order).
//!
//! # Example
//!
//! ```
//! use sitekit_meta::PageRecord;
//! use sitekit_nav::{TreeConfig, build_docs_tree};
//!
//! let pages = vec![
//!     PageRecord::new("docs/guide/setup.md", "docs/guide/setup/index.html").with_title("Setup"),
//!     PageRecord::new("docs/guide/index.md", "docs/guide/index.html").with_title("Guide"),
//! ];
//! let tree = build_docs_tree(&pages, &TreeConfig::default());
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree[0].title, "Guide");
//! assert_eq!(tree[0].children[0].title, "Setup");
//! ```

use std::collections::HashMap;

use serde::Serialize;
use sitekit_meta::PageRecord;

/// Fallback sort order for pages without an explicit `order`.
pub const DEFAULT_ORDER: u32 = 999;

/// Configuration for [`build_docs_tree`].
#[derive(Clone, Debug)]
pub struct TreeConfig {
    /// Source-path prefix marking documentation pages.
    pub prefix: String,
    /// Sort order assigned to nodes without an explicit one.
    pub default_order: u32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            prefix: "docs/".to_owned(),
            default_order: DEFAULT_ORDER,
        }
    }
}

/// Sidebar tree node.
///
/// Grouping nodes (path segments with no directly associated page) carry
/// `path: None` and exist only to hold children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Display title.
    pub title: String,
    /// Sidebar sort order.
    pub order: u32,
    /// Rendered output path, absent for grouping nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Child nodes, sorted ascending by `order`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// Raw arena node during insertion.
struct RawNode {
    segment: String,
    title: Option<String>,
    path: Option<String>,
    order: Option<u32>,
    children: Vec<usize>,
    child_index: HashMap<String, usize>,
}

impl RawNode {
    fn new(segment: &str) -> Self {
        Self {
            segment: segment.to_owned(),
            title: None,
            path: None,
            order: None,
            children: Vec::new(),
            child_index: HashMap::new(),
        }
    }
}

/// Arena of raw nodes; index 0 is a synthetic root.
struct TreeArena {
    nodes: Vec<RawNode>,
}

impl TreeArena {
    fn new() -> Self {
        Self {
            nodes: vec![RawNode::new("")],
        }
    }

    /// Get the child of `parent` named `segment`, creating it if absent.
    fn child(&mut self, parent: usize, segment: &str) -> usize {
        if let Some(&idx) = self.nodes[parent].child_index.get(segment) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(RawNode::new(segment));
        self.nodes[parent].children.push(idx);
        self.nodes[parent]
            .child_index
            .insert(segment.to_owned(), idx);
        idx
    }

    /// Insert a page at the node addressed by `segments`.
    fn insert(&mut self, segments: &[&str], page: &PageRecord) {
        let mut current = 0;
        for segment in segments {
            current = self.child(current, segment);
        }
        let node = &mut self.nodes[current];
        node.title = page.title.clone();
        node.path = Some(page.path.clone());
        node.order = page.order;
    }

    /// Convert a raw node's children into the public shape, sorted by order.
    fn convert_children(&self, idx: usize, default_order: u32) -> Vec<TreeNode> {
        let mut children: Vec<TreeNode> = self.nodes[idx]
            .children
            .iter()
            .map(|&child| self.convert(child, default_order))
            .collect();
        // Stable sort keeps first-seen order for colliding keys.
        children.sort_by_key(|node| node.order);
        children
    }

    fn convert(&self, idx: usize, default_order: u32) -> TreeNode {
        let raw = &self.nodes[idx];
        TreeNode {
            title: raw
                .title
                .clone()
                .unwrap_or_else(|| title_from_segment(&raw.segment)),
            order: raw.order.unwrap_or(default_order),
            path: raw.path.clone(),
            children: self.convert_children(idx, default_order),
        }
    }
}

/// Build the documentation sidebar tree from the full page list.
///
/// Pages whose `source` does not start with the configured prefix are
/// ignored; if none match, the result is empty. A trailing `index` segment
/// is collapsed so `docs/a/index.md` attaches its page to node `a` rather
/// than producing an `a > index` child.
#[must_use]
pub fn build_docs_tree(pages: &[PageRecord], config: &TreeConfig) -> Vec<TreeNode> {
    let mut arena = TreeArena::new();
    let mut matched = 0usize;

    for page in pages {
        let Some(rest) = page.source.strip_prefix(&config.prefix) else {
            continue;
        };
        let rel = strip_extension(rest);
        let rel = rel.strip_suffix("/index").unwrap_or(rel);
        let rel = if rel == "index" { "" } else { rel };
        let segments: Vec<&str> = rel.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            // Page at the prefix itself (e.g. docs/index.md) has no node.
            continue;
        }
        arena.insert(&segments, page);
        matched += 1;
    }

    let tree = arena.convert_children(0, config.default_order);
    tracing::debug!(
        pages = matched,
        roots = tree.len(),
        "built documentation tree"
    );
    tree
}

/// Strip the content-file extension from the last path segment.
fn strip_extension(path: &str) -> &str {
    let seg_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[seg_start..].rfind('.') {
        None | Some(0) => path,
        Some(dot) => &path[..seg_start + dot],
    }
}

/// Generate a display title from a raw path segment.
///
/// Replaces `-`/`_` with spaces and uppercases the first letter of each
/// word, so grouping nodes never fall back to a placeholder.
#[must_use]
pub fn title_from_segment(segment: &str) -> String {
    segment
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn build(pages: &[PageRecord]) -> Vec<TreeNode> {
        build_docs_tree(pages, &TreeConfig::default())
    }

    #[test]
    fn test_no_docs_pages_returns_empty() {
        let pages = vec![
            PageRecord::new("posts/hello.md", "posts/hello/index.html"),
            PageRecord::new("about.md", "about/index.html"),
        ];

        let tree = build(&pages);

        assert!(tree.is_empty());
    }

    #[test]
    fn test_empty_page_list_returns_empty() {
        assert!(build(&[]).is_empty());
    }

    #[test]
    fn test_siblings_share_grouping_node() {
        let pages = vec![
            PageRecord::new("docs/a/b.md", "docs/a/b/index.html")
                .with_title("B")
                .with_order(2),
            PageRecord::new("docs/a/c.md", "docs/a/c/index.html")
                .with_title("C")
                .with_order(1),
        ];

        let tree = build(&pages);

        assert_eq!(tree.len(), 1);
        let group = &tree[0];
        assert_eq!(group.title, "A");
        assert!(group.path.is_none());
        assert_eq!(group.children.len(), 2);
        // Sorted ascending by order.
        assert_eq!(group.children[0].title, "C");
        assert_eq!(group.children[1].title, "B");
    }

    #[test]
    fn test_index_page_collapses_onto_directory_node() {
        let pages = vec![
            PageRecord::new("docs/a/index.md", "docs/a/index.html")
                .with_title("Section A")
                .with_order(5),
            PageRecord::new("docs/a/b.md", "docs/a/b/index.html").with_title("B"),
        ];

        let tree = build(&pages);

        assert_eq!(tree.len(), 1);
        let section = &tree[0];
        assert_eq!(section.title, "Section A");
        assert_eq!(section.path.as_deref(), Some("docs/a/index.html"));
        assert_eq!(section.order, 5);
        // No spurious `index` child.
        assert_eq!(section.children.len(), 1);
        assert_eq!(section.children[0].title, "B");
    }

    #[test]
    fn test_page_at_prefix_is_ignored() {
        let pages = vec![PageRecord::new("docs/index.md", "docs/index.html").with_title("Docs")];

        let tree = build(&pages);

        assert!(tree.is_empty());
    }

    #[test]
    fn test_missing_title_falls_back_to_formatted_segment() {
        let pages = vec![PageRecord::new(
            "docs/getting-started/first_steps.md",
            "docs/getting-started/first_steps/index.html",
        )];

        let tree = build(&pages);

        assert_eq!(tree[0].title, "Getting Started");
        assert_eq!(tree[0].children[0].title, "First Steps");
    }

    #[test]
    fn test_missing_order_defaults_to_999() {
        let pages = vec![PageRecord::new("docs/a.md", "docs/a/index.html")];

        let tree = build(&pages);

        assert_eq!(tree[0].order, DEFAULT_ORDER);
    }

    #[test]
    fn test_colliding_orders_keep_insertion_order() {
        let pages = vec![
            PageRecord::new("docs/first.md", "docs/first/index.html").with_order(1),
            PageRecord::new("docs/second.md", "docs/second/index.html").with_order(1),
            PageRecord::new("docs/third.md", "docs/third/index.html").with_order(1),
        ];

        let tree = build(&pages);

        let titles: Vec<_> = tree.iter().map(|node| node.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_deep_nesting_builds_full_chain() {
        let pages = vec![
            PageRecord::new("docs/a/b/c.md", "docs/a/b/c/index.html").with_title("C"),
        ];

        let tree = build(&pages);

        assert_eq!(tree[0].title, "A");
        assert!(tree[0].path.is_none());
        assert_eq!(tree[0].children[0].title, "B");
        assert!(tree[0].children[0].path.is_none());
        assert_eq!(tree[0].children[0].children[0].title, "C");
        assert_eq!(
            tree[0].children[0].children[0].path.as_deref(),
            Some("docs/a/b/c/index.html")
        );
    }

    #[test]
    fn test_custom_prefix_selects_other_pages() {
        let config = TreeConfig {
            prefix: "manual/".to_owned(),
            ..TreeConfig::default()
        };
        let pages = vec![
            PageRecord::new("manual/setup.md", "manual/setup/index.html").with_title("Setup"),
            PageRecord::new("docs/other.md", "docs/other/index.html"),
        ];

        let tree = build_docs_tree(&pages, &config);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].title, "Setup");
    }

    #[test]
    fn test_later_page_overwrites_node_attributes() {
        let pages = vec![
            PageRecord::new("docs/a.md", "docs/a/index.html").with_title("Old"),
            PageRecord::new("docs/a.markdown", "docs/a-new/index.html").with_title("New"),
        ];

        let tree = build(&pages);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].title, "New");
        assert_eq!(tree[0].path.as_deref(), Some("docs/a-new/index.html"));
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("a/b.md"), "a/b");
        assert_eq!(strip_extension("a/b.post.md"), "a/b.post");
        assert_eq!(strip_extension("a.dir/b"), "a.dir/b");
        assert_eq!(strip_extension("a/.hidden"), "a/.hidden");
        assert_eq!(strip_extension("plain"), "plain");
    }

    #[test]
    fn test_title_from_segment() {
        assert_eq!(title_from_segment("setup-guide"), "Setup Guide");
        assert_eq!(title_from_segment("my_page"), "My Page");
        assert_eq!(title_from_segment("complex-name_here"), "Complex Name Here");
        assert_eq!(title_from_segment("simple"), "Simple");
    }

    #[test]
    fn test_serialization_omits_empty_children_and_path() {
        let pages = vec![PageRecord::new("docs/a/b.md", "docs/a/b/index.html")];

        let json = serde_json::to_value(build(&pages)).unwrap();

        let group = &json[0];
        assert!(group.get("path").is_none());
        let leaf = &group["children"][0];
        assert_eq!(leaf["path"], "docs/a/b/index.html");
        assert!(leaf.get("children").is_none());
    }
}
