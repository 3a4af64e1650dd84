//! Child keys and key paths.
//!
//! A key path is a dot-delimited sequence of child keys. The empty key path
//! names the root, so child keys themselves may never be empty or contain a
//! dot.

use crate::error::{Error, Result};

/// Separator between keys in a key path.
pub const KEYPATH_SEPARATOR: char = '.';

/// Validates a child key.
///
/// Keys must be non-empty and free of `.`, whitespace, and control
/// characters.
///
/// # Errors
///
/// Returns [`Error::InvalidChildKey`] describing the first violated rule.
///
/// # Examples
///
/// ```
/// use treepath::model::validate_child_key;
///
/// assert!(validate_child_key("variantStream").is_ok());
/// assert!(validate_child_key("a.b").is_err());
/// assert!(validate_child_key("").is_err());
/// ```
pub fn validate_child_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        "keys cannot be empty"
    } else if key.contains(KEYPATH_SEPARATOR) {
        "keys must not contain '.'"
    } else if key.chars().any(char::is_whitespace) {
        "keys must not contain whitespace"
    } else if key.chars().any(char::is_control) {
        "keys must not contain control characters"
    } else {
        return Ok(());
    };

    Err(Error::InvalidChildKey {
        key: key.to_string(),
        reason: reason.to_string(),
    })
}

/// Whether `name` may be used as a parameter name.
///
/// Parameter names are non-empty runs of ASCII letters, digits, `_` and `-`.
#[must_use]
pub fn is_valid_param_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Splits a key path into its keys.
///
/// The empty key path yields no keys.
///
/// # Examples
///
/// ```
/// use treepath::model::split_keypath;
///
/// assert!(split_keypath("").is_empty());
/// assert_eq!(split_keypath("variantStream.segment"), vec!["variantStream", "segment"]);
/// ```
#[must_use]
pub fn split_keypath(keypath: &str) -> Vec<&str> {
    if keypath.is_empty() {
        Vec::new()
    } else {
        keypath.split(KEYPATH_SEPARATOR).collect()
    }
}

/// Appends `key` to `parent`, treating the empty parent as the root.
#[must_use]
pub fn join_keypath(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{KEYPATH_SEPARATOR}{key}")
    }
}
