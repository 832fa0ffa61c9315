//! Explicit helper registry for string-dispatching template hosts.
//!
//! Helpers are plain functions; nothing registers itself globally at load
//! time. A host that dispatches helpers by name builds a [`HelperRegistry`]
//! (usually via [`HelperRegistry::with_builtins`]) and calls through it with
//! JSON arguments.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use sitekit_helpers::HelperRegistry;
//!
//! let registry = HelperRegistry::with_builtins();
//! let count = registry.call("word_count", &[json!("<p>hello world</p>")]).unwrap();
//! assert_eq!(count, json!(10));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::color::random_color;
use crate::embed::embed_json;
use crate::ident::unique_id;
use crate::text::{
    DEFAULT_EXCERPT_LEN, DEFAULT_READING_RATE, excerpt, format_word_count, reading_time,
    word_count,
};
use crate::time::time_ago;

/// Error from a registry dispatch.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    /// No helper registered under this name.
    #[error("Unknown helper: {0}")]
    UnknownHelper(String),
    /// An argument was missing or of the wrong shape.
    #[error("Bad argument for helper '{helper}': expected {expected}")]
    BadArgument {
        /// Helper that rejected the call.
        helper: &'static str,
        /// Description of the expected argument.
        expected: &'static str,
    },
}

type HelperFn = Box<dyn Fn(&[Value]) -> Result<Value, HelperError> + Send + Sync>;

/// Named helper collection for host adapters.
#[derive(Default)]
pub struct HelperRegistry {
    helpers: HashMap<String, HelperFn>,
}

impl HelperRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all built-in formatting helpers bound.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register("word_count", |args| {
            Ok(json!(word_count(opt_str_arg(args, 0))))
        });
        registry.register("reading_time", |args| {
            let rate = match args.get(1) {
                None | Some(Value::Null) => DEFAULT_READING_RATE,
                Some(value) => usize_from(value).ok_or(HelperError::BadArgument {
                    helper: "reading_time",
                    expected: "integer chars-per-minute as second argument",
                })?,
            };
            Ok(json!(reading_time(opt_str_arg(args, 0), rate)))
        });
        registry.register("format_word_count", |args| {
            let count =
                args.first()
                    .and_then(usize_from)
                    .ok_or(HelperError::BadArgument {
                        helper: "format_word_count",
                        expected: "non-negative integer count",
                    })?;
            Ok(json!(format_word_count(count)))
        });
        registry.register("excerpt", |args| {
            let max_len = match args.get(1) {
                None | Some(Value::Null) => DEFAULT_EXCERPT_LEN,
                Some(value) => usize_from(value).ok_or(HelperError::BadArgument {
                    helper: "excerpt",
                    expected: "integer max length as second argument",
                })?,
            };
            Ok(json!(excerpt(opt_str_arg(args, 0), max_len)))
        });
        registry.register("time_ago", |args| {
            let then = datetime_arg(args, 0).ok_or(HelperError::BadArgument {
                helper: "time_ago",
                expected: "RFC 3339 timestamp",
            })?;
            let now = match args.get(1) {
                None | Some(Value::Null) => Utc::now(),
                Some(_) => datetime_arg(args, 1).ok_or(HelperError::BadArgument {
                    helper: "time_ago",
                    expected: "RFC 3339 timestamp as second argument",
                })?,
            };
            Ok(json!(time_ago(then, now)))
        });
        registry.register("unique_id", |args| {
            Ok(json!(unique_id(opt_str_arg(args, 0).unwrap_or(""))))
        });
        registry.register("random_color", |args| {
            Ok(json!(random_color(opt_str_arg(args, 0).unwrap_or(""))))
        });
        registry.register("embed_json", |args| {
            Ok(json!(embed_json(args.first().unwrap_or(&Value::Null))))
        });

        registry
    }

    /// Register a helper under `name`, replacing any previous binding.
    pub fn register<F>(&mut self, name: impl Into<String>, helper: F)
    where
        F: Fn(&[Value]) -> Result<Value, HelperError> + Send + Sync + 'static,
    {
        self.helpers.insert(name.into(), Box::new(helper));
    }

    /// Dispatch a helper by name.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, HelperError> {
        let helper = self
            .helpers
            .get(name)
            .ok_or_else(|| HelperError::UnknownHelper(name.to_owned()))?;
        helper(args)
    }

    /// Registered helper names, unordered.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.helpers.keys().map(String::as_str).collect()
    }
}

/// Read an optional string argument; `null` and absence count as absent.
fn opt_str_arg(args: &[Value], idx: usize) -> Option<&str> {
    args.get(idx).and_then(Value::as_str)
}

fn datetime_arg(args: &[Value], idx: usize) -> Option<DateTime<Utc>> {
    let raw = opt_str_arg(args, idx)?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn usize_from(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|n| usize::try_from(n).ok())
}
