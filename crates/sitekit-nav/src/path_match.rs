//! Active-link matching for menu items.

/// Test whether a menu target matches the page currently being rendered.
///
/// Both paths are normalized by trimming leading/trailing slashes and
/// stripping a trailing `index.html`. An empty target (the site root)
/// matches only an empty or `index.html`-only current path; any other
/// target matches when the normalized current path starts with it.
///
/// # Example
///
/// ```
/// use sitekit_nav::is_current_path;
///
/// assert!(is_current_path("/docs/", "/docs/guide/index.html"));
/// assert!(is_current_path("/", "/index.html"));
/// assert!(!is_current_path("/", "/docs/guide/"));
/// ```
#[must_use]
pub fn is_current_path(target: &str, current: &str) -> bool {
    let target = normalize(target);
    let current = normalize(current);

    if target.is_empty() {
        current.is_empty()
    } else {
        current.starts_with(target)
    }
}

/// Trim surrounding slashes and a trailing `index.html`.
fn normalize(path: &str) -> &str {
    let path = path.trim_matches('/');
    path.strip_suffix("index.html")
        .map_or(path, |rest| rest.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_target_matches_root_current() {
        assert!(is_current_path("/", "/"));
        assert!(is_current_path("/", "/index.html"));
        assert!(is_current_path("", "index.html"));
    }

    #[test]
    fn test_root_target_rejects_inner_pages() {
        assert!(!is_current_path("/", "/docs/guide/"));
        assert!(!is_current_path("/", "/about/index.html"));
    }

    #[test]
    fn test_prefix_match() {
        assert!(is_current_path("/docs/", "/docs/guide/setup/index.html"));
        assert!(is_current_path("docs", "/docs/"));
        assert!(!is_current_path("/docs/", "/posts/hello/"));
    }

    #[test]
    fn test_trailing_index_html_is_ignored_on_both_sides() {
        assert!(is_current_path("/docs/index.html", "/docs/"));
        assert!(is_current_path("/docs/", "/docs/index.html"));
    }

    #[test]
    fn test_exact_page_matches_itself() {
        assert!(is_current_path("/about/", "/about/index.html"));
    }
}
