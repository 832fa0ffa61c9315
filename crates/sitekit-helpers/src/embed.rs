//! Safe inline JSON embedding.

use serde::Serialize;

/// Serialize a value to JSON safe for inline embedding in markup.
///
/// Literal `<` and `>` are escaped to their Unicode escape sequences so a
/// string value containing `</script>` cannot terminate the surrounding
/// tag. Values that fail to serialize degrade to `"null"` rather than
/// erroring, with a warning logged.
///
/// # Example
///
/// ```
/// use sitekit_helpers::embed_json;
///
/// assert_eq!(embed_json(&"</script>"), r#""\u003c/script\u003e""#);
/// assert_eq!(embed_json(&vec![1, 2, 3]), "[1,2,3]");
/// ```
#[must_use]
pub fn embed_json<T: Serialize + ?Sized>(value: &T) -> String {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("failed to serialize value for inline embed: {e}");
            return "null".to_owned();
        }
    };
    json.replace('<', "\\u003c").replace('>', "\\u003e")
}
