//! File and directory nodes.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::model::key::validate_child_key;
use crate::model::segment::PathSegment;

/// The two node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A leaf rendered without a trailing separator.
    File,
    /// A node with children, rendered with a trailing `/`.
    #[serde(rename = "dir")]
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "dir"),
        }
    }
}

/// A leaf node.
#[derive(Debug, Clone)]
pub struct FileNode {
    path: PathSegment,
}

/// A node owning named children.
#[derive(Debug, Clone)]
pub struct DirNode {
    path: PathSegment,
    children: BTreeMap<String, Node>,
}

impl DirNode {
    /// The children of this directory, ordered by key.
    #[must_use]
    pub fn children(&self) -> &BTreeMap<String, Node> {
        &self.children
    }
}

/// A node in a layout tree.
///
/// Nodes are immutable once built. A directory owns its children outright,
/// so a tree never shares or cycles.
///
/// # Examples
///
/// ```
/// use treepath::{Node, PathSegment};
///
/// let tree = Node::dir(
///     PathSegment::template("videos/{videoId}").unwrap(),
///     [("manifest", Node::file("master.m3u8").unwrap())],
/// )
/// .unwrap();
///
/// assert!(tree.is_dir());
/// assert!(tree.child("manifest").unwrap().is_file());
/// ```
#[derive(Debug, Clone)]
pub enum Node {
    /// A leaf.
    File(FileNode),
    /// A directory.
    Directory(DirNode),
}

impl Node {
    /// Builds a file node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] if `path` cannot become a segment
    /// (for a string, when it is empty).
    pub fn file<S>(path: S) -> Result<Self>
    where
        S: TryInto<PathSegment>,
        Error: From<S::Error>,
    {
        Ok(Self::File(FileNode {
            path: path.try_into()?,
        }))
    }

    /// Builds a directory node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSegment`] for an invalid path,
    /// [`Error::InvalidChildKey`] for a key that cannot appear in a key path,
    /// or [`Error::DuplicateChildKey`] if a key repeats.
    pub fn dir<S, I, K>(path: S, children: I) -> Result<Self>
    where
        S: TryInto<PathSegment>,
        Error: From<S::Error>,
        I: IntoIterator<Item = (K, Node)>,
        K: Into<String>,
    {
        let path = path.try_into()?;

        let mut map = BTreeMap::new();
        for (key, child) in children {
            let key = key.into();
            validate_child_key(&key)?;
            if map.contains_key(&key) {
                return Err(Error::DuplicateChildKey { key });
            }
            map.insert(key, child);
        }

        Ok(Self::Directory(DirNode {
            path,
            children: map,
        }))
    }

    /// The node's path segment.
    #[must_use]
    pub fn path(&self) -> &PathSegment {
        match self {
            Self::File(file) => &file.path,
            Self::Directory(dir) => &dir.path,
        }
    }

    /// The node's variant.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::File(_) => NodeKind::File,
            Self::Directory(_) => NodeKind::Directory,
        }
    }

    /// Whether this is a file node.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Whether this is a directory node.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// The children of a directory; `None` for a file.
    #[must_use]
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Self::File(_) => None,
            Self::Directory(dir) => Some(&dir.children),
        }
    }

    /// Looks up a direct child.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Node> {
        self.children().and_then(|children| children.get(key))
    }
}

/// Builds a file node. See [`Node::file`].
///
/// # Errors
///
/// Same as [`Node::file`].
pub fn file<S>(path: S) -> Result<Node>
where
    S: TryInto<PathSegment>,
    Error: From<S::Error>,
{
    Node::file(path)
}

/// Builds a directory node. See [`Node::dir`].
///
/// # Errors
///
/// Same as [`Node::dir`].
pub fn dir<S, I, K>(path: S, children: I) -> Result<Node>
where
    S: TryInto<PathSegment>,
    Error: From<S::Error>,
    I: IntoIterator<Item = (K, Node)>,
    K: Into<String>,
{
    Node::dir(path, children)
}
