//! Page and post record types shared by the Sitekit theme helpers.
//!
//! These mirror the record shape a templating host hands to theme code:
//! every field beyond `source` and `path` is optional, and deserialization
//! never fails on partially-populated records.
//!
//! # Example
//!
//! ```
//! use sitekit_meta::PageRecord;
//!
//! let page: PageRecord = serde_json::from_str(
//!     r#"{"source": "docs/guide.md", "path": "docs/guide/index.html"}"#,
//! ).unwrap();
//! assert_eq!(page.source, "docs/guide.md");
//! assert!(page.title.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Category reference attached to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Display name.
    pub name: String,
    /// Rendered category path.
    pub path: String,
}

/// Page or post record as provided by the templating host.
///
/// Only `source` and `path` are required; everything else defaults so that
/// records produced by hosts with sparse front matter still deserialize.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Slash-delimited relative source path (e.g. `docs/golang/basics.md`).
    #[serde(default)]
    pub source: String,
    /// Rendered output path (e.g. `docs/golang/basics/index.html`).
    #[serde(default)]
    pub path: String,
    /// Page title from front matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Sidebar sort order from front matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Cover image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Categories the post belongs to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryRef>,
    /// Rendered markup content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PageRecord {
    /// Create a record with only the required fields set.
    #[must_use]
    pub fn new(source: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the sidebar sort order.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the cover image path.
    #[must_use]
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// Set the rendered markup content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let page: PageRecord =
            serde_json::from_str(r#"{"source": "docs/a.md", "path": "docs/a/index.html"}"#)
                .unwrap();

        assert_eq!(page.source, "docs/a.md");
        assert_eq!(page.path, "docs/a/index.html");
        assert!(page.title.is_none());
        assert!(page.order.is_none());
        assert!(page.categories.is_empty());
    }

    #[test]
    fn test_deserialize_full_record() {
        let page: PageRecord = serde_json::from_str(
            r#"{
                "source": "docs/a.md",
                "path": "docs/a/index.html",
                "title": "A",
                "order": 3,
                "cover": "/img/a.png",
                "categories": [{"name": "Go", "path": "categories/go/"}],
                "content": "<p>hi</p>"
            }"#,
        )
        .unwrap();

        assert_eq!(page.title.as_deref(), Some("A"));
        assert_eq!(page.order, Some(3));
        assert_eq!(page.categories.len(), 1);
        assert_eq!(page.categories[0].name, "Go");
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let page: PageRecord = serde_json::from_str("{}").unwrap();

        assert!(page.source.is_empty());
        assert!(page.path.is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let page = PageRecord::new("docs/a.md", "docs/a/index.html")
            .with_title("A")
            .with_order(2)
            .with_cover("/img/a.png");

        assert_eq!(page.title.as_deref(), Some("A"));
        assert_eq!(page.order, Some(2));
        assert_eq!(page.cover.as_deref(), Some("/img/a.png"));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let page = PageRecord::new("docs/a.md", "docs/a/index.html");

        let json = serde_json::to_value(&page).unwrap();

        assert!(json.get("title").is_none());
        assert!(json.get("categories").is_none());
        assert!(json.get("cover").is_none());
    }
}
