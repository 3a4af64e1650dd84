//! Relative path computation between two resolved paths.
//!
//! Paths are plain strings whose trailing `/` marks a directory. The result
//! is the shortest `..`/descend sequence from the origin's base directory to
//! the target, with the target's trailing `/` carried over.

use crate::path::mode::RelativePathMode;

/// Splits a path into its non-empty components.
pub(crate) fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

/// The directory a relative path is resolved against.
///
/// Under [`RelativePathMode::Url`], a path without a trailing `/` loses its
/// last component, the way a browser resolves links on a document.
pub(crate) fn base_directory(from_path: &str, mode: RelativePathMode) -> &str {
    match mode {
        RelativePathMode::Fs => from_path,
        RelativePathMode::Url if from_path.ends_with('/') => from_path,
        RelativePathMode::Url => match from_path.rfind('/') {
            Some(index) => &from_path[..index],
            None => "",
        },
    }
}

/// Computes the relative path from `from_path` to `to_path`.
///
/// # Examples
///
/// ```
/// use treepath::{relative_path_between, RelativePathMode};
///
/// assert_eq!(relative_path_between("a/b", "a/c", RelativePathMode::Fs), "../c");
/// assert_eq!(relative_path_between("a/b", "a/b", RelativePathMode::Url), "b");
/// assert_eq!(relative_path_between("a/b/", "a/b/", RelativePathMode::Url), "./");
/// ```
#[must_use]
pub fn relative_path_between(from_path: &str, to_path: &str, mode: RelativePathMode) -> String {
    let from_parts: Vec<&str> = components(base_directory(from_path, mode)).collect();
    let to_parts: Vec<&str> = components(to_path).collect();

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut steps = vec![".."; from_parts.len() - common];
    steps.extend_from_slice(&to_parts[common..]);
    let joined = steps.join("/");

    let to_is_dir = to_path.ends_with('/');
    match (joined.is_empty(), to_is_dir) {
        (true, true) => "./".to_string(),
        (true, false) => ".".to_string(),
        (false, true) => format!("{joined}/"),
        (false, false) => joined,
    }
}
