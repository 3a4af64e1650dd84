#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # treepath
//!
//! Declarative artifact layouts: describe a directory tree once, then ask
//! for the absolute path of any node by key path, or for the relative path
//! between two nodes in filesystem or URL semantics.
//!
//! ## Core Types
//!
//! - [`Node`] and [`PathSegment`]: the layout tree and its path segments
//! - [`Params`] and [`ParamValue`]: parameters for templates and dynamic paths
//! - [`Layout`] and [`Schema`]: a tree with its per-key-path requirements
//! - [`RelativePathMode`]: `fs` or `url` relative path semantics
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use treepath::{resolve_fs_path, resolve_path, resolve_url_path, Node, Params, PathSegment};
//!
//! let tree = Node::dir(
//!     PathSegment::template("videos/{videoId}").unwrap(),
//!     [
//!         ("manifest", Node::file("master.m3u8").unwrap()),
//!         (
//!             "variantStream",
//!             Node::dir(
//!                 PathSegment::template("stream_{quality}").unwrap(),
//!                 [("playlist", Node::file("playlist.m3u8").unwrap())],
//!             )
//!             .unwrap(),
//!         ),
//!     ],
//! )
//! .unwrap();
//!
//! let video = Params::new().with("videoId", 1);
//! let stream = video.clone().with("quality", 2);
//!
//! assert_eq!(resolve_path(&tree, "manifest", &video).unwrap(), "videos/1/master.m3u8");
//! assert_eq!(
//!     resolve_fs_path(&tree, ("manifest", &video), ("variantStream.playlist", &stream)).unwrap(),
//!     "../stream_2/playlist.m3u8"
//! );
//! assert_eq!(
//!     resolve_url_path(&tree, ("manifest", &video), ("variantStream.playlist", &stream)).unwrap(),
//!     "stream_2/playlist.m3u8"
//! );
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod params;
pub mod path;
pub mod resolve;

// Re-export key types at crate root for convenience
pub use api::{resolve_fs_path, resolve_relative_path, resolve_url_path, Layout, Target};
pub use config::{LayoutConfig, LayoutLoader, NodeSpec};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{dir, file, Node, NodeKind, PathSegment};
pub use params::{ParamValue, Params};
pub use path::{apply_relative, relative_path_between, RelativePathMode};
pub use resolve::{resolve_path, Requirement, Schema};
