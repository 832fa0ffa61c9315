//! Deterministic color assignment for tags and categories.

/// Fixed palette indexed by [`random_color`].
pub const PALETTE: [&str; 12] = [
    "#e74c3c", "#e67e22", "#f1c40f", "#2ecc71", "#1abc9c", "#3498db", "#9b59b6", "#e91e63",
    "#00bcd4", "#8bc34a", "#ff5722", "#607d8b",
];

/// Pick a palette color for a string, deterministically.
///
/// Hashes the string's character codes with the classic polynomial hash
/// (`hash = code + ((hash << 5) - hash)`, wrapping 32-bit) and indexes the
/// palette by the absolute value. The same input always yields the same
/// color; different inputs colliding onto one color is expected.
///
/// # Example
///
/// ```
/// use sitekit_helpers::random_color;
///
/// assert_eq!(random_color("tag"), random_color("tag"));
/// ```
#[must_use]
pub fn random_color(input: &str) -> &'static str {
    let mut hash: i32 = 0;
    for c in input.chars() {
        hash = (c as i32).wrapping_add((hash << 5).wrapping_sub(hash));
    }
    let idx = hash.unsigned_abs() as usize % PALETTE.len();
    PALETTE[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_input_same_color() {
        assert_eq!(random_color("tag"), random_color("tag"));
        assert_eq!(random_color("rust"), random_color("rust"));
    }

    #[test]
    fn test_color_comes_from_palette() {
        for input in ["a", "rust", "文档", "some-long-tag-name"] {
            assert!(PALETTE.contains(&random_color(input)));
        }
    }

    #[test]
    fn test_empty_string_is_stable() {
        assert_eq!(random_color(""), PALETTE[0]);
    }

    #[test]
    fn test_known_hash_value() {
        // "a" hashes to its own character code.
        let idx = ('a' as usize) % PALETTE.len();
        assert_eq!(random_color("a"), PALETTE[idx]);
    }
}
