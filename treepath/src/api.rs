//! High-level entry points: relative resolution between key paths and the
//! [`Layout`] wrapper that caches a tree's schema.

use std::borrow::Cow;

use crate::error::Result;
use crate::model::Node;
use crate::params::Params;
use crate::path::{relative_path_between, RelativePathMode};
use crate::resolve::{resolve_path, Requirement, Schema};

/// One side of a relative path request: a key path and the parameters it
/// resolves with.
///
/// Built from a bare key path (no parameters) or a `(keypath, params)` pair.
///
/// # Examples
///
/// ```
/// use treepath::{Params, Target};
///
/// let bare = Target::from("manifest");
/// assert!(bare.params().is_empty());
///
/// let params = Params::new().with("quality", 2);
/// let paired = Target::from(("variantStream.playlist", &params));
/// assert_eq!(paired.keypath(), "variantStream.playlist");
/// ```
#[derive(Debug, Clone)]
pub struct Target<'a> {
    keypath: &'a str,
    params: Cow<'a, Params>,
}

impl<'a> Target<'a> {
    /// Creates a target from a key path and owned or borrowed parameters.
    #[must_use]
    pub fn new(keypath: &'a str, params: Cow<'a, Params>) -> Self {
        Self { keypath, params }
    }

    /// The key path.
    #[must_use]
    pub fn keypath(&self) -> &str {
        self.keypath
    }

    /// The parameters.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(keypath: &'a str) -> Self {
        Self::new(keypath, Cow::Owned(Params::new()))
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(keypath: &'a String) -> Self {
        Self::from(keypath.as_str())
    }
}

impl<'a> From<(&'a str, Params)> for Target<'a> {
    fn from((keypath, params): (&'a str, Params)) -> Self {
        Self::new(keypath, Cow::Owned(params))
    }
}

impl<'a> From<(&'a str, &'a Params)> for Target<'a> {
    fn from((keypath, params): (&'a str, &'a Params)) -> Self {
        Self::new(keypath, Cow::Borrowed(params))
    }
}

/// Resolves both targets and computes the relative path between them.
///
/// # Errors
///
/// Returns any error [`resolve_path`] raises for either side.
///
/// # Examples
///
/// ```
/// use treepath::{resolve_relative_path, Node, Params, PathSegment, RelativePathMode};
///
/// let tree = Node::dir(
///     PathSegment::template("videos/{videoId}").unwrap(),
///     [
///         ("manifest", Node::file("master.m3u8").unwrap()),
///         ("poster", Node::file("poster.jpg").unwrap()),
///     ],
/// )
/// .unwrap();
/// let params = Params::new().with("videoId", 7);
///
/// let rel = resolve_relative_path(
///     &tree,
///     ("manifest", &params),
///     ("poster", &params),
///     RelativePathMode::Url,
/// )
/// .unwrap();
/// assert_eq!(rel, "poster.jpg");
/// ```
pub fn resolve_relative_path<'f, 't>(
    root: &Node,
    from: impl Into<Target<'f>>,
    to: impl Into<Target<'t>>,
    mode: RelativePathMode,
) -> Result<String> {
    let from = from.into();
    let to = to.into();
    let from_path = resolve_path(root, from.keypath, &from.params)?;
    let to_path = resolve_path(root, to.keypath, &to.params)?;
    Ok(relative_path_between(&from_path, &to_path, mode))
}

/// [`resolve_relative_path`] in [`RelativePathMode::Fs`].
///
/// # Errors
///
/// Same as [`resolve_relative_path`].
pub fn resolve_fs_path<'f, 't>(
    root: &Node,
    from: impl Into<Target<'f>>,
    to: impl Into<Target<'t>>,
) -> Result<String> {
    resolve_relative_path(root, from, to, RelativePathMode::Fs)
}

/// [`resolve_relative_path`] in [`RelativePathMode::Url`].
///
/// # Errors
///
/// Same as [`resolve_relative_path`].
pub fn resolve_url_path<'f, 't>(
    root: &Node,
    from: impl Into<Target<'f>>,
    to: impl Into<Target<'t>>,
) -> Result<String> {
    resolve_relative_path(root, from, to, RelativePathMode::Url)
}

/// A layout tree together with its precomputed [`Schema`].
///
/// Parameter bags are checked against the schema before any traversal, so a
/// missing parameter is reported even when it belongs to an ancestor.
///
/// # Examples
///
/// ```
/// use treepath::{Layout, Node, Params, PathSegment};
///
/// let layout = Layout::new(
///     Node::dir(
///         PathSegment::template("videos/{videoId}").unwrap(),
///         [("manifest", Node::file("master.m3u8").unwrap())],
///     )
///     .unwrap(),
/// );
///
/// let params = Params::new().with("videoId", 1);
/// assert_eq!(layout.path("manifest", &params).unwrap(), "videos/1/master.m3u8");
/// assert!(layout.path("manifest", &Params::new()).unwrap_err().is_missing_dependency());
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    root: Node,
    schema: Schema,
    mode: RelativePathMode,
}

impl Layout {
    /// Wraps a tree, building its schema.
    #[must_use]
    pub fn new(root: Node) -> Self {
        let schema = Schema::build(&root);
        Self {
            root,
            schema,
            mode: RelativePathMode::default(),
        }
    }

    /// Sets the mode used by [`Layout::relative`].
    #[must_use]
    pub fn with_mode(mut self, mode: RelativePathMode) -> Self {
        self.mode = mode;
        self
    }

    /// The default relative path mode.
    #[must_use]
    pub fn mode(&self) -> RelativePathMode {
        self.mode
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The cached schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// All key paths of the tree.
    pub fn keypaths(&self) -> impl Iterator<Item = &str> {
        self.schema.keypaths()
    }

    /// The requirement of one key path.
    #[must_use]
    pub fn requirement(&self, keypath: &str) -> Option<&Requirement> {
        self.schema.requirement(keypath)
    }

    /// Checks `params` against the requirement of `keypath`.
    ///
    /// # Errors
    ///
    /// See [`Schema::check`].
    pub fn check(&self, keypath: &str, params: &Params) -> Result<()> {
        self.schema.check(keypath, params)
    }

    /// Resolves the absolute path of `keypath`.
    ///
    /// # Errors
    ///
    /// Returns a traversal or dependency error from the schema check, or an
    /// [`Error::EmptyRenderedSegment`](crate::Error::EmptyRenderedSegment)
    /// from resolution.
    pub fn path(&self, keypath: &str, params: &Params) -> Result<String> {
        self.schema.check(keypath, params)?;
        resolve_path(&self.root, keypath, params)
    }

    /// Relative path between two targets in an explicit mode.
    ///
    /// # Errors
    ///
    /// Same as [`Layout::path`] for either side.
    pub fn relative_path<'f, 't>(
        &self,
        from: impl Into<Target<'f>>,
        to: impl Into<Target<'t>>,
        mode: RelativePathMode,
    ) -> Result<String> {
        let from = from.into();
        let to = to.into();
        let from_path = self.path(from.keypath, &from.params)?;
        let to_path = self.path(to.keypath, &to.params)?;
        Ok(relative_path_between(&from_path, &to_path, mode))
    }

    /// Relative path between two targets in the layout's own mode.
    ///
    /// # Errors
    ///
    /// Same as [`Layout::path`] for either side.
    pub fn relative<'f, 't>(
        &self,
        from: impl Into<Target<'f>>,
        to: impl Into<Target<'t>>,
    ) -> Result<String> {
        self.relative_path(from, to, self.mode)
    }

    /// Relative path in [`RelativePathMode::Fs`].
    ///
    /// # Errors
    ///
    /// Same as [`Layout::path`] for either side.
    pub fn fs_path<'f, 't>(
        &self,
        from: impl Into<Target<'f>>,
        to: impl Into<Target<'t>>,
    ) -> Result<String> {
        self.relative_path(from, to, RelativePathMode::Fs)
    }

    /// Relative path in [`RelativePathMode::Url`].
    ///
    /// # Errors
    ///
    /// Same as [`Layout::path`] for either side.
    pub fn url_path<'f, 't>(
        &self,
        from: impl Into<Target<'f>>,
        to: impl Into<Target<'t>>,
    ) -> Result<String> {
        self.relative_path(from, to, RelativePathMode::Url)
    }
}

impl From<Node> for Layout {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}
