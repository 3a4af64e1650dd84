//! The node model: files, directories, and their path segments.
//!
//! A layout is a tree of [`Node`]s. Each node carries a [`PathSegment`];
//! directories additionally own a map of named children. Everything is
//! validated when constructed, so a tree that exists is a tree that can be
//! walked.
//!
//! # Examples
//!
//! ```
//! use treepath::model::{dir, file};
//! use treepath::PathSegment;
//!
//! let hls = dir(
//!     PathSegment::template("videos/{videoId}").unwrap(),
//!     [
//!         ("manifest", file("master.m3u8").unwrap()),
//!         (
//!             "variantStream",
//!             dir(
//!                 PathSegment::template("stream_{quality}").unwrap(),
//!                 [("playlist", file("playlist.m3u8").unwrap())],
//!             )
//!             .unwrap(),
//!         ),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(hls.child("variantStream").unwrap().is_dir());
//! ```

mod key;
mod node;
mod segment;

pub use key::{is_valid_param_name, join_keypath, split_keypath, validate_child_key, KEYPATH_SEPARATOR};
pub use node::{dir, file, DirNode, FileNode, Node, NodeKind};
pub use segment::{DynamicSegment, PathSegment, Template};
