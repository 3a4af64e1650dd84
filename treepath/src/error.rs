//! Error types for the treepath library.
//!
//! This module provides the error hierarchy for building layouts, resolving
//! key paths, and loading layout files, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a treepath error.
///
/// # Examples
///
/// ```
/// use treepath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("videos/1/".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the treepath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path segment could not be constructed.
    ///
    /// Raised for empty literals, malformed templates, and dynamic paths
    /// that declare no dependencies.
    #[error("invalid path segment {segment:?}: {reason}")]
    InvalidSegment {
        /// The offending segment source.
        segment: String,
        /// The reason the segment is invalid.
        reason: String,
    },

    /// A child key cannot be used as a key-path component.
    #[error("invalid child key {key:?}: {reason}")]
    InvalidChildKey {
        /// The offending key.
        key: String,
        /// The reason the key is invalid.
        reason: String,
    },

    /// The same child key was given twice for one directory.
    #[error("duplicate child key {key:?}")]
    DuplicateChildKey {
        /// The repeated key.
        key: String,
    },

    /// A key path tried to descend into the children of a file node.
    #[error("cannot traverse key {key:?} of key path {keypath:?}: parent is a file")]
    NotTraversable {
        /// The full key path being resolved.
        keypath: String,
        /// The key that could not be followed.
        key: String,
    },

    /// A key path named a child that does not exist.
    #[error("key {key:?} of key path {keypath:?} not found in children")]
    KeyNotFound {
        /// The full key path being resolved.
        keypath: String,
        /// The key that was not found.
        key: String,
    },

    /// The parameter bag lacks a value a dynamic path needs.
    #[error("missing dependency {name:?} for key path {keypath:?}")]
    MissingDependency {
        /// The key path being resolved.
        keypath: String,
        /// The name of the missing parameter.
        name: String,
    },

    /// A template or dynamic path rendered to the empty string.
    #[error("path segment rendered empty while resolving key path {keypath:?}")]
    EmptyRenderedSegment {
        /// The key path being resolved.
        keypath: String,
    },

    /// A layout file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An unrecognised relative path mode was given.
    #[error("invalid relative path mode {value:?} (expected \"fs\" or \"url\")")]
    InvalidMode {
        /// The unrecognised value.
        value: String,
    },

    /// No layout file was found.
    #[error("layout file not found: {}", path.display())]
    LayoutNotFound {
        /// The path that was searched.
        path: PathBuf,
    },
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl Error {
    /// Check if the error was raised while constructing a node.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::Error;
    ///
    /// let err = Error::DuplicateChildKey { key: "manifest".into() };
    /// assert!(err.is_construction_error());
    /// ```
    #[must_use]
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSegment { .. } | Self::InvalidChildKey { .. } | Self::DuplicateChildKey { .. }
        )
    }

    /// Check if the error was raised while walking a key path.
    ///
    /// # Examples
    ///
    /// ```
    /// use treepath::Error;
    ///
    /// let err = Error::KeyNotFound { keypath: "a.b".into(), key: "b".into() };
    /// assert!(err.is_traversal_error());
    /// ```
    #[must_use]
    pub fn is_traversal_error(&self) -> bool {
        matches!(self, Self::NotTraversable { .. } | Self::KeyNotFound { .. })
    }

    /// Check if the error reports a missing parameter.
    #[must_use]
    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, Self::MissingDependency { .. })
    }

    /// Fills in the key path of errors raised below the resolver.
    pub(crate) fn at_keypath(self, at: &str) -> Self {
        match self {
            Self::MissingDependency { keypath, name } if keypath.is_empty() => {
                Self::MissingDependency {
                    keypath: at.to_string(),
                    name,
                }
            }
            Self::EmptyRenderedSegment { keypath } if keypath.is_empty() => {
                Self::EmptyRenderedSegment {
                    keypath: at.to_string(),
                }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_segment_error() {
        let err = Error::InvalidSegment {
            segment: String::new(),
            reason: "path segments cannot be empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path segment"));
        assert!(display.contains("cannot be empty"));
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_invalid_child_key_error() {
        let err = Error::InvalidChildKey {
            key: "a.b".to_string(),
            reason: "must not contain '.'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("\"a.b\""));
        assert!(display.contains("must not contain"));
    }

    #[test]
    fn test_not_traversable_error() {
        let err = Error::NotTraversable {
            keypath: "manifest.child".to_string(),
            key: "child".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("manifest.child"));
        assert!(display.contains("parent is a file"));
        assert!(err.is_traversal_error());
        assert!(!err.is_construction_error());
    }

    #[test]
    fn test_key_not_found_error() {
        let err = Error::KeyNotFound {
            keypath: "variantStream.missing".to_string(),
            key: "missing".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("\"missing\""));
        assert!(err.is_traversal_error());
    }

    #[test]
    fn test_missing_dependency_error() {
        let err = Error::MissingDependency {
            keypath: "manifest".to_string(),
            name: "videoId".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("missing dependency"));
        assert!(display.contains("videoId"));
        assert!(err.is_missing_dependency());
        assert!(!err.is_traversal_error());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "TREEPATH_MODE".to_string(),
            message: "must be fs or url".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("TREEPATH_MODE"));
    }

    #[test]
    fn test_invalid_mode_error() {
        let err = Error::InvalidMode {
            value: "ftp".to_string(),
        };
        assert!(format!("{err}").contains("\"ftp\""));
    }

    #[test]
    fn test_layout_not_found_error() {
        let err = Error::LayoutNotFound {
            path: PathBuf::from("/work/treepath.yaml"),
        };
        let display = format!("{err}");
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/work/treepath.yaml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(Error::DuplicateChildKey {
                key: "segment".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
