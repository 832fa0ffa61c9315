//! Formatting helpers for Sitekit theme templates.
//!
//! Small, independent transformations over strings, timestamps, and host
//! post records: text metrics, excerpting, relative time, deterministic
//! colors, inline-JSON escaping. Every helper degrades to a safe default
//! (zero, empty, `null`) on missing input; none of them raise.
//!
//! Helpers are plain functions. Hosts that dispatch by name can bind them
//! through [`HelperRegistry`] instead of any global registration.
//!
//! # Example
//!
//! ```
//! use sitekit_helpers::{excerpt, format_word_count, random_color, word_count};
//!
//! let content = Some("<p>hello world</p>");
//! assert_eq!(word_count(content), 10);
//! assert_eq!(format_word_count(12_345), "1.2万");
//! assert_eq!(excerpt(content, 200), "hello world");
//! assert_eq!(random_color("tag"), random_color("tag"));
//! ```

mod color;
mod embed;
mod ident;
mod post;
mod registry;
mod text;
mod time;

pub use color::{PALETTE, random_color};
pub use embed::embed_json;
pub use ident::unique_id;
pub use post::{category_paths, has_cover};
pub use registry::{HelperError, HelperRegistry};
pub use text::{
    DEFAULT_EXCERPT_LEN, DEFAULT_READING_RATE, excerpt, format_word_count, reading_time,
    strip_tags, word_count,
};
pub use time::{time_ago, time_ago_from_now};
