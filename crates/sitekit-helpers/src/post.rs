//! Projections over host post records.

use sitekit_meta::{CategoryRef, PageRecord};

/// Project categories to the `{name, path}` shape templates consume.
///
/// Input order is preserved; an empty input yields an empty sequence.
#[must_use]
pub fn category_paths(categories: &[CategoryRef]) -> Vec<CategoryRef> {
    categories
        .iter()
        .map(|category| CategoryRef {
            name: category.name.clone(),
            path: category.path.clone(),
        })
        .collect()
}

/// Whether a post carries a usable cover image.
///
/// Whitespace-only cover fields count as absent.
#[must_use]
pub fn has_cover(post: &PageRecord) -> bool {
    post.cover
        .as_deref()
        .is_some_and(|cover| !cover.trim().is_empty())
}
