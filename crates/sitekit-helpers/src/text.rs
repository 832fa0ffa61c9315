//! Text metrics and excerpting over rendered markup.
//!
//! All helpers strip markup tags first and count Unicode characters rather
//! than words, which is the meaningful unit for CJK-heavy content. Absent
//! input degrades to zero or an empty string, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// Characters read per minute used by [`reading_time`] when no rate is given.
pub const DEFAULT_READING_RATE: usize = 300;

/// Maximum excerpt length used by [`excerpt`] when no limit is given.
pub const DEFAULT_EXCERPT_LEN: usize = 200;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Remove markup tags (`<...>` runs) from rendered content.
#[must_use]
pub fn strip_tags(content: &str) -> String {
    TAG_RE.replace_all(content, "").into_owned()
}

/// Count content characters after stripping tags and all whitespace.
///
/// # Example
///
/// ```
/// use sitekit_helpers::word_count;
///
/// assert_eq!(word_count(Some("<p>hello world</p>")), 10);
/// assert_eq!(word_count(None), 0);
/// ```
#[must_use]
pub fn word_count(content: Option<&str>) -> usize {
    let Some(content) = content else {
        return 0;
    };
    strip_tags(content)
        .chars()
        .filter(|c| !c.is_whitespace())
        .count()
}

/// Estimate reading time in whole minutes, rounded up.
///
/// A zero rate is clamped to [`DEFAULT_READING_RATE`] rather than dividing
/// by zero. Absent content reads in zero minutes.
#[must_use]
pub fn reading_time(content: Option<&str>, chars_per_minute: usize) -> usize {
    let rate = if chars_per_minute == 0 {
        DEFAULT_READING_RATE
    } else {
        chars_per_minute
    };
    word_count(content).div_ceil(rate)
}

/// Render a character count with `万` / `k` unit suffixes.
///
/// Counts of 10,000 and above show one decimal of ten-thousands, counts of
/// 1,000 and above one decimal of thousands, anything smaller the raw
/// integer.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Counts stay far below 2^52.
pub fn format_word_count(count: usize) -> String {
    if count >= 10_000 {
        format!("{:.1}万", count as f64 / 10_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Produce a plain-text excerpt of at most `max_len` characters.
///
/// Tags are stripped and whitespace runs collapsed to single spaces before
/// measuring. Content over the limit is cut at `max_len` characters with a
/// trailing `...` marker.
#[must_use]
pub fn excerpt(content: Option<&str>, max_len: usize) -> String {
    let Some(content) = content else {
        return String::new();
    };
    let stripped = strip_tags(content);
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    let text = collapsed.trim();

    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(max_len).collect();
    cut.push_str("...");
    cut
}
