//! Key-path traversal and absolute path resolution.

use crate::error::{Error, Result};
use crate::model::{split_keypath, Node};
use crate::params::Params;

/// Walks from `root` along `keypath`, calling `visit` on the root and on
/// every node reached.
///
/// Returns the node the key path names.
///
/// # Errors
///
/// Returns [`Error::NotTraversable`] when a key follows a file node,
/// [`Error::KeyNotFound`] when a key is absent, or the first error `visit`
/// returns.
///
/// # Examples
///
/// ```
/// use treepath::resolve::traverse;
/// use treepath::Node;
///
/// let tree = Node::dir("root", [("leaf", Node::file("leaf.txt").unwrap())]).unwrap();
///
/// let mut seen = Vec::new();
/// let target = traverse(&tree, "leaf", |node| {
///     seen.push(node.path().to_string());
///     Ok(())
/// })
/// .unwrap();
///
/// assert!(target.is_file());
/// assert_eq!(seen, ["root", "leaf.txt"]);
/// ```
pub fn traverse<'a, F>(root: &'a Node, keypath: &str, mut visit: F) -> Result<&'a Node>
where
    F: FnMut(&'a Node) -> Result<()>,
{
    let mut current = root;
    visit(current)?;

    for key in split_keypath(keypath) {
        let Some(children) = current.children() else {
            return Err(Error::NotTraversable {
                keypath: keypath.to_string(),
                key: key.to_string(),
            });
        };

        current = children.get(key).ok_or_else(|| Error::KeyNotFound {
            keypath: keypath.to_string(),
            key: key.to_string(),
        })?;
        visit(current)?;
    }

    Ok(current)
}

/// Finds the node a key path names.
///
/// # Errors
///
/// Same traversal errors as [`traverse`].
pub fn lookup<'a>(root: &'a Node, keypath: &str) -> Result<&'a Node> {
    traverse(root, keypath, |_| Ok(()))
}

/// Resolves the absolute path of the node `keypath` names.
///
/// The key path is walked first. Then each node's segment along it is
/// rendered with the whole parameter bag and appended; directories are
/// followed by `/`, including the target.
///
/// # Errors
///
/// Returns a traversal error for a bad key path, even when parameters are
/// also missing,
/// [`Error::MissingDependency`] when a segment needs an absent parameter, or
/// [`Error::EmptyRenderedSegment`] when a segment renders empty.
///
/// # Examples
///
/// ```
/// use treepath::{resolve_path, Node, Params, PathSegment};
///
/// let tree = Node::dir(
///     PathSegment::template("videos/{videoId}").unwrap(),
///     [("manifest", Node::file("master.m3u8").unwrap())],
/// )
/// .unwrap();
///
/// let params = Params::new().with("videoId", 1);
/// assert_eq!(resolve_path(&tree, "", &params).unwrap(), "videos/1/");
/// assert_eq!(resolve_path(&tree, "manifest", &params).unwrap(), "videos/1/master.m3u8");
/// ```
pub fn resolve_path(root: &Node, keypath: &str, params: &Params) -> Result<String> {
    let mut chain = Vec::new();
    traverse(root, keypath, |node| {
        chain.push(node);
        Ok(())
    })?;

    let mut out = String::new();
    for node in chain {
        let segment = node
            .path()
            .render(params)
            .map_err(|e| e.at_keypath(keypath))?;
        out.push_str(&segment);
        if node.is_dir() {
            out.push('/');
        }
    }

    log::trace!("resolved key path {keypath:?} to {out:?}");
    Ok(out)
}
