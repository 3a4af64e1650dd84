//! Relative path computation.
//!
//! This module works on plain path strings and knows nothing about layout
//! trees. A trailing `/` marks a directory.
//!
//! # Modes
//!
//! ## Filesystem
//!
//! [`RelativePathMode::Fs`] treats the origin as a directory: the relative
//! path is what you would pass to `cd` from inside it.
//!
//! ## URL
//!
//! [`RelativePathMode::Url`] mirrors how a browser resolves a link: an origin
//! that does not end in `/` names a document, and its last component is not
//! part of the base.
//!
//! # Examples
//!
//! ```
//! use treepath::path::{apply_relative, relative_path_between, RelativePathMode};
//!
//! let from = "videos/1/master.m3u8";
//! let to = "videos/1/stream_2/playlist.m3u8";
//!
//! let fs = relative_path_between(from, to, RelativePathMode::Fs);
//! assert_eq!(fs, "../stream_2/playlist.m3u8");
//!
//! let url = relative_path_between(from, to, RelativePathMode::Url);
//! assert_eq!(url, "stream_2/playlist.m3u8");
//! assert_eq!(apply_relative(from, &url, RelativePathMode::Url), to);
//! ```

pub mod join;
pub mod mode;
pub mod relative;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key items
pub use join::apply_relative;
pub use mode::RelativePathMode;
pub use relative::relative_path_between;
