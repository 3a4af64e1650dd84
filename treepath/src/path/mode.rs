//! Relative path modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How the origin of a relative path is interpreted.
///
/// # Examples
///
/// ```
/// use treepath::RelativePathMode;
///
/// let mode: RelativePathMode = "URL".parse().unwrap();
/// assert_eq!(mode, RelativePathMode::Url);
/// assert_eq!(mode.to_string(), "url");
/// assert!("ftp".parse::<RelativePathMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativePathMode {
    /// Filesystem semantics: the origin is always a directory.
    #[default]
    Fs,
    /// URL semantics: an origin without a trailing `/` is a document whose
    /// last component is not part of the base.
    Url,
}

impl fmt::Display for RelativePathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fs => write!(f, "fs"),
            Self::Url => write!(f, "url"),
        }
    }
}

impl FromStr for RelativePathMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fs" => Ok(Self::Fs),
            "url" => Ok(Self::Url),
            _ => Err(Error::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}
