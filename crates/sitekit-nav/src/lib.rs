//! Documentation tree and sidebar navigation for Sitekit.
//!
//! This crate provides:
//! - **Tree building**: [`build_docs_tree`] turns the host's flat page list
//!   into a nested sidebar tree
//! - **Navigation**: [`doc_nav`] computes previous/next links,
//!   [`breadcrumbs`] the ancestor chain
//! - **Active-link matching**: [`is_current_path`] for menu highlighting
//!
//! # Example
//!
//! ```
//! use sitekit_meta::PageRecord;
//! use sitekit_nav::{TreeConfig, build_docs_tree, doc_nav};
//!
//! let pages = vec![
//!     PageRecord::new("docs/intro.md", "docs/intro/index.html")
//!         .with_title("Intro")
//!         .with_order(1),
//!     PageRecord::new("docs/setup.md", "docs/setup/index.html")
//!         .with_title("Setup")
//!         .with_order(2),
//! ];
//! let tree = build_docs_tree(&pages, &TreeConfig::default());
//! let nav = doc_nav(&tree, "/docs/setup/index.html");
//! assert_eq!(nav.prev.unwrap().title, "Intro");
//! assert!(nav.next.is_none());
//! ```

mod navigation;
mod path_match;
mod tree;

pub use navigation::{BreadcrumbItem, DocNav, NavEntry, breadcrumbs, doc_nav, flatten};
pub use path_match::is_current_path;
pub use tree::{DEFAULT_ORDER, TreeConfig, TreeNode, build_docs_tree, title_from_segment};
