//! Per-key-path requirements computed once per tree.
//!
//! A [`Schema`] records, for every key path in a tree, the kind of node it
//! names and the parameter names needed to resolve it. Requirements
//! accumulate from the root down; a name needed at several levels is listed
//! once, at its shallowest position.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{join_keypath, split_keypath, Node, NodeKind};
use crate::params::Params;

/// What resolving one key path takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    kind: NodeKind,
    dependencies: Vec<String>,
}

impl Requirement {
    /// The kind of node the key path names.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Required parameter names, root to leaf.
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }
}

/// Requirements for every key path of a tree.
///
/// # Examples
///
/// ```
/// use treepath::resolve::Schema;
/// use treepath::{Node, Params, PathSegment};
///
/// let tree = Node::dir(
///     PathSegment::template("videos/{videoId}").unwrap(),
///     [(
///         "segment",
///         Node::file(PathSegment::template("segment_{index}.ts").unwrap()).unwrap(),
///     )],
/// )
/// .unwrap();
///
/// let schema = Schema::build(&tree);
/// assert_eq!(schema.keypaths().collect::<Vec<_>>(), ["", "segment"]);
/// assert_eq!(schema.requirement("segment").unwrap().dependencies(), ["videoId", "index"]);
///
/// let params = Params::new().with("videoId", 1);
/// assert!(schema.check("", &params).is_ok());
/// assert!(schema.check("segment", &params).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    entries: BTreeMap<String, Requirement>,
}

impl Schema {
    /// Walks `root` and records the requirements of each key path.
    #[must_use]
    pub fn build(root: &Node) -> Self {
        let mut entries = BTreeMap::new();
        collect(root, String::new(), &[], &mut entries);
        log::debug!("built schema with {} key path(s)", entries.len());
        Self { entries }
    }

    /// All key paths, in lexical order. The root is `""`.
    pub fn keypaths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key paths paired with their requirements.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Requirement)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The requirement of one key path.
    #[must_use]
    pub fn requirement(&self, keypath: &str) -> Option<&Requirement> {
        self.entries.get(keypath)
    }

    /// Whether the tree has this key path.
    #[must_use]
    pub fn contains(&self, keypath: &str) -> bool {
        self.entries.contains_key(keypath)
    }

    /// Number of key paths (including the root).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema is empty. Schemas built from a tree never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The requirement of a key path, or the traversal error resolving it
    /// would raise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTraversable`] or [`Error::KeyNotFound`] for a key
    /// path the tree does not have.
    pub fn require(&self, keypath: &str) -> Result<&Requirement> {
        if let Some(requirement) = self.entries.get(keypath) {
            return Ok(requirement);
        }

        let mut known = String::new();
        for key in split_keypath(keypath) {
            let next = join_keypath(&known, key);
            if !self.entries.contains_key(&next) {
                let parent_is_file =
                    self.entries.get(&known).map(Requirement::kind) == Some(NodeKind::File);
                return Err(if parent_is_file {
                    Error::NotTraversable {
                        keypath: keypath.to_string(),
                        key: key.to_string(),
                    }
                } else {
                    Error::KeyNotFound {
                        keypath: keypath.to_string(),
                        key: key.to_string(),
                    }
                });
            }
            known = next;
        }

        Err(Error::KeyNotFound {
            keypath: keypath.to_string(),
            key: String::new(),
        })
    }

    /// Names required by `keypath` that `params` lacks, in requirement order.
    ///
    /// # Errors
    ///
    /// Same as [`Schema::require`].
    pub fn missing<'s>(&'s self, keypath: &str, params: &Params) -> Result<Vec<&'s str>> {
        Ok(self
            .require(keypath)?
            .dependencies
            .iter()
            .map(String::as_str)
            .filter(|name| !params.contains(name))
            .collect())
    }

    /// Checks that `params` covers everything `keypath` needs.
    ///
    /// # Errors
    ///
    /// Returns a traversal error for an unknown key path, or
    /// [`Error::MissingDependency`] naming the first absent parameter.
    pub fn check(&self, keypath: &str, params: &Params) -> Result<()> {
        match self.missing(keypath, params)?.first() {
            Some(name) => Err(Error::MissingDependency {
                keypath: keypath.to_string(),
                name: (*name).to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn collect(
    node: &Node,
    keypath: String,
    inherited: &[String],
    entries: &mut BTreeMap<String, Requirement>,
) {
    let mut dependencies = inherited.to_vec();
    for name in node.path().dependencies() {
        if !dependencies.contains(name) {
            dependencies.push(name.clone());
        }
    }

    if let Some(children) = node.children() {
        for (key, child) in children {
            collect(child, join_keypath(&keypath, key), &dependencies, entries);
        }
    }

    entries.insert(
        keypath,
        Requirement {
            kind: node.kind(),
            dependencies,
        },
    );
}
