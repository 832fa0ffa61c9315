//! Decorative DOM id generation.

use rand::RngExt;

const TOKEN_LEN: usize = 8;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a prefixed id with a short random base-36 token.
///
/// Collision-prone by design: the token exists to keep DOM ids distinct
/// within one rendered page, nothing more.
///
/// # Example
///
/// ```
/// use sitekit_helpers::unique_id;
///
/// let id = unique_id("tab-");
/// assert!(id.starts_with("tab-"));
/// assert_eq!(id.len(), "tab-".len() + 8);
/// ```
#[must_use]
pub fn unique_id(prefix: &str) -> String {
    let mut token = rand::rng().random::<u64>();
    let mut id = String::with_capacity(prefix.len() + TOKEN_LEN);
    id.push_str(prefix);
    for _ in 0..TOKEN_LEN {
        id.push(ALPHABET[(token % 36) as usize] as char);
        token /= 36;
    }
    id
}
