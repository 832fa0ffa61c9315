//! Previous/next navigation and breadcrumbs over the documentation tree.
//!
//! Navigation is a flat view: the tree is walked depth-first and only
//! nodes carrying a rendered `path` are kept (grouping nodes are skipped,
//! their children are still visited). Previous/next links for the current
//! page are the neighbors of its entry in that flat list.
//!
//! Matching the current page uses substring containment rather than exact
//! equality, tolerating trailing slashes and host-added suffixes. The
//! first flattened entry whose path is contained in the current path wins,
//! so nested routes sharing a prefix can match an earlier entry.

use serde::Serialize;

use crate::tree::TreeNode;

/// Flat navigation entry (a [`TreeNode`] without children).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Display title.
    pub title: String,
    /// Rendered output path.
    pub path: String,
    /// Sidebar sort order.
    pub order: u32,
}

/// Previous/next links for the current page.
///
/// Both fields serialize to `null` when absent so templates can test them
/// directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DocNav {
    /// Entry preceding the current page in flattened order.
    pub prev: Option<NavEntry>,
    /// Entry following the current page in flattened order.
    pub next: Option<NavEntry>,
}

/// Breadcrumb item for ancestor navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Rendered output path, absent for grouping nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Flatten the tree depth-first into path-bearing entries.
///
/// Grouping nodes contribute nothing themselves but their children are
/// still traversed in order.
#[must_use]
pub fn flatten(nodes: &[TreeNode]) -> Vec<NavEntry> {
    let mut entries = Vec::new();
    flatten_into(nodes, &mut entries);
    entries
}

fn flatten_into(nodes: &[TreeNode], entries: &mut Vec<NavEntry>) {
    for node in nodes {
        if let Some(path) = &node.path {
            entries.push(NavEntry {
                title: node.title.clone(),
                path: path.clone(),
                order: node.order,
            });
        }
        flatten_into(&node.children, entries);
    }
}

/// Compute previous/next links for `current_path`.
///
/// The current page is the first flattened entry whose path is contained
/// within `current_path`. No match leaves both links empty.
#[must_use]
pub fn doc_nav(nodes: &[TreeNode], current_path: &str) -> DocNav {
    let entries = flatten(nodes);
    let Some(pos) = entries
        .iter()
        .position(|entry| current_path.contains(&entry.path))
    else {
        return DocNav::default();
    };

    DocNav {
        prev: pos.checked_sub(1).map(|i| entries[i].clone()),
        next: entries.get(pos + 1).cloned(),
    }
}

/// Build the breadcrumb chain for `current_path`.
///
/// Returns the ancestors of the first matching node, root-first, excluding
/// the matched node itself. Grouping ancestors are included with no path.
/// Unknown paths produce an empty chain.
#[must_use]
pub fn breadcrumbs(nodes: &[TreeNode], current_path: &str) -> Vec<BreadcrumbItem> {
    let mut trail = Vec::new();
    if find_trail(nodes, current_path, &mut trail) {
        trail
    } else {
        Vec::new()
    }
}

/// Depth-first search; `trail` holds the ancestors of the node under visit.
fn find_trail(nodes: &[TreeNode], current_path: &str, trail: &mut Vec<BreadcrumbItem>) -> bool {
    for node in nodes {
        if node
            .path
            .as_ref()
            .is_some_and(|path| current_path.contains(path))
        {
            return true;
        }
        trail.push(BreadcrumbItem {
            title: node.title.clone(),
            path: node.path.clone(),
        });
        if find_trail(&node.children, current_path, trail) {
            return true;
        }
        trail.pop();
    }
    false
}
