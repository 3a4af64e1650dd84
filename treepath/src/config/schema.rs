//! Layout file schema.
//!
//! A layout file describes one tree. Every node has a `path` template; a
//! node with a `children` mapping (even an empty one) is a directory, any
//! other node is a file.
//!
//! ```yaml
//! mode: url
//! root:
//!   path: "videos/{videoId}"
//!   children:
//!     manifest: { path: master.m3u8 }
//!     variantStream:
//!       path: "stream_{quality}"
//!       children:
//!         playlist: { path: playlist.m3u8 }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::Layout;
use crate::error::Result;
use crate::model::{Node, PathSegment};
use crate::path::RelativePathMode;

/// A whole layout file.
///
/// # Examples
///
/// ```
/// use treepath::config::LayoutConfig;
/// use treepath::Params;
///
/// let config: LayoutConfig = serde_yaml::from_str(
///     "root:\n  path: \"videos/{videoId}\"\n  children:\n    manifest: { path: master.m3u8 }\n",
/// )
/// .unwrap();
///
/// let layout = config.into_layout().unwrap();
/// let params = Params::new().with("videoId", 1);
/// assert_eq!(layout.path("manifest", &params).unwrap(), "videos/1/master.m3u8");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Default relative path mode for this layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RelativePathMode>,

    /// The root node.
    pub root: NodeSpec,
}

/// One node of a layout file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    /// Path template for this node.
    pub path: String,

    /// Children by key. Present means directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<BTreeMap<String, NodeSpec>>,
}

impl NodeSpec {
    /// A file node spec.
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            children: None,
        }
    }

    /// A directory node spec.
    #[must_use]
    pub fn dir<I, K>(path: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = (K, NodeSpec)>,
        K: Into<String>,
    {
        Self {
            path: path.into(),
            children: Some(children.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    /// Builds the node this spec describes.
    ///
    /// # Errors
    ///
    /// Returns the construction error of the first invalid template or
    /// child key.
    pub fn into_node(self) -> Result<Node> {
        let segment = PathSegment::template(self.path)?;
        match self.children {
            None => Node::file(segment),
            Some(children) => {
                let children = children
                    .into_iter()
                    .map(|(key, spec)| Ok((key, spec.into_node()?)))
                    .collect::<Result<Vec<_>>>()?;
                Node::dir(segment, children)
            }
        }
    }
}

impl LayoutConfig {
    /// Builds the tree and wraps it in a [`Layout`].
    ///
    /// # Errors
    ///
    /// Returns the construction error of the first invalid node.
    pub fn into_layout(self) -> Result<Layout> {
        let root = self.root.into_node()?;
        Ok(Layout::new(root).with_mode(self.mode.unwrap_or_default()))
    }
}
