//! Applying a relative path to an origin path.
//!
//! This is the inverse of [`relative_path_between`](super::relative_path_between):
//! for clean paths, applying the computed relative path to the origin yields
//! the target again.

use crate::path::mode::RelativePathMode;
use crate::path::relative::{base_directory, components};

/// Resolves `relative` against `from_path`.
///
/// The base directory follows the same mode rules as
/// [`relative_path_between`](super::relative_path_between). `.` steps are
/// skipped and `..` steps never climb above the root. A leading `/` on
/// `from_path` is kept. The result ends in `/` when `relative` does. An
/// absolute `relative` is returned unchanged.
///
/// This is not full URL resolution. A trailing `/` comes only from
/// `relative`, so in url mode `"."` against `"a/b"` gives `"a"`, where a
/// browser would give `"a/"`. That keeps `"a"` reachable from `"a/b"` as the
/// inverse of [`relative_path_between`](super::relative_path_between).
///
/// # Examples
///
/// ```
/// use treepath::{apply_relative, RelativePathMode};
///
/// assert_eq!(apply_relative("a/b", "../c", RelativePathMode::Fs), "a/c");
/// assert_eq!(apply_relative("a/b", "c", RelativePathMode::Url), "a/c");
/// assert_eq!(apply_relative("a/b/", "./", RelativePathMode::Url), "a/b/");
/// ```
#[must_use]
pub fn apply_relative(from_path: &str, relative: &str, mode: RelativePathMode) -> String {
    if relative.starts_with('/') {
        return relative.to_string();
    }

    let mut stack: Vec<&str> = components(base_directory(from_path, mode)).collect();
    for step in relative.split('/') {
        match step {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name),
        }
    }

    let mut out = String::new();
    if from_path.starts_with('/') {
        out.push('/');
    }
    out.push_str(&stack.join("/"));
    if relative.ends_with('/') && !stack.is_empty() {
        out.push('/');
    }
    out
}
