//! Resolved route trees.

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::RoutePath;

use super::builder::{build_node, child_base, trail_for};
use super::node::{RouteFn, RouteTarget};

/// A resolved route entry.
#[derive(Debug, Clone)]
pub enum ResolvedValue {
    /// An absolute path.
    Path(RoutePath),
    /// A resolved sub-tree.
    Tree(ResolvedRouteNode),
    /// A function producing an absolute path or a resolved sub-tree.
    Func(ResolvedRouteFn),
}

/// What a resolved route function produces.
#[derive(Debug, Clone)]
pub enum ResolvedTarget {
    /// An absolute path.
    Path(RoutePath),
    /// A resolved sub-tree.
    Tree(ResolvedRouteNode),
}

impl ResolvedTarget {
    /// The path, if this target is a path.
    #[must_use]
    pub fn as_path(&self) -> Option<&RoutePath> {
        match self {
            Self::Path(path) => Some(path),
            Self::Tree(_) => None,
        }
    }

    /// The tree, if this target is a tree.
    #[must_use]
    pub fn as_tree(&self) -> Option<&ResolvedRouteNode> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Path(_) => None,
        }
    }

    /// Convert into the path, if this target is a path.
    #[must_use]
    pub fn into_path(self) -> Option<RoutePath> {
        match self {
            Self::Path(path) => Some(path),
            Self::Tree(_) => None,
        }
    }

    /// Convert into the tree, if this target is a tree.
    #[must_use]
    pub fn into_tree(self) -> Option<ResolvedRouteNode> {
        match self {
            Self::Tree(tree) => Some(tree),
            Self::Path(_) => None,
        }
    }
}

/// A route function bound to the base path it was declared under.
///
/// Calling it invokes the declared function and resolves the result: a path
/// fragment is joined onto the base path, a tree is resolved beneath the
/// base path extended by the tree's override or, lacking one, by the
/// kebab-cased key.
#[derive(Clone)]
pub struct ResolvedRouteFn {
    key: String,
    base: RoutePath,
    trail: String,
    inner: RouteFn,
}

impl ResolvedRouteFn {
    pub(crate) fn new(key: &str, base: RoutePath, trail: String, inner: RouteFn) -> Self {
        Self {
            key: key.to_string(),
            base,
            trail,
            inner,
        }
    }

    /// The base path this function resolves beneath.
    #[must_use]
    pub fn base_path(&self) -> &RoutePath {
        &self.base
    }

    /// Invoke the function and resolve its result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedKey`] if the returned tree declares an entry
    /// named `_basePath`.
    pub fn call(&self, args: &[&str]) -> Result<ResolvedTarget> {
        match self.inner.call(args) {
            RouteTarget::Path(fragment) => Ok(ResolvedTarget::Path(self.base.child(&fragment))),
            RouteTarget::Tree(tree) => {
                let base = child_base(&self.base, &self.key, &tree);
                let trail = trail_for(&self.trail, &self.key);
                log::debug!("resolving tree returned by {trail} beneath {base}");
                build_node(&tree, &base, &trail).map(ResolvedTarget::Tree)
            }
        }
    }
}

impl fmt::Debug for ResolvedRouteFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedRouteFn")
            .field("key", &self.key)
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

/// A tree of resolved routes, in declaration order.
///
/// Serializes as nested mappings of paths; function entries have no static
/// path and are omitted.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRouteNode {
    entries: IndexMap<String, ResolvedValue>,
}

impl ResolvedRouteNode {
    pub(crate) fn from_entries(entries: IndexMap<String, ResolvedValue>) -> Self {
        Self { entries }
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.entries.get(key)
    }

    /// The path stored under `key`, if that entry is a path.
    #[must_use]
    pub fn path(&self, key: &str) -> Option<&RoutePath> {
        match self.entries.get(key)? {
            ResolvedValue::Path(path) => Some(path),
            _ => None,
        }
    }

    /// The sub-tree stored under `key`, if that entry is a tree.
    #[must_use]
    pub fn subtree(&self, key: &str) -> Option<&ResolvedRouteNode> {
        match self.entries.get(key)? {
            ResolvedValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// The function stored under `key`, if that entry is a function.
    #[must_use]
    pub fn func(&self, key: &str) -> Option<&ResolvedRouteFn> {
        match self.entries.get(key)? {
            ResolvedValue::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Call the function stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RouteLookup`] if there is no function under `key`,
    /// or any error from [`ResolvedRouteFn::call`].
    pub fn call(&self, key: &str, args: &[&str]) -> Result<ResolvedTarget> {
        match self.entries.get(key) {
            Some(ResolvedValue::Func(f)) => f.call(args),
            Some(_) => Err(Error::RouteLookup {
                key: key.to_string(),
                reason: "entry is not a function".to_string(),
            }),
            None => Err(Error::RouteLookup {
                key: key.to_string(),
                reason: "no such entry".to_string(),
            }),
        }
    }

    /// Look up an entry by dotted key chain, e.g. `dashboard.users`.
    #[must_use]
    pub fn lookup(&self, dotted: &str) -> Option<&ResolvedValue> {
        let mut keys = dotted.split('.');
        let mut value = self.entries.get(keys.next()?)?;
        for key in keys {
            match value {
                ResolvedValue::Tree(tree) => value = tree.entries.get(key)?,
                _ => return None,
            }
        }
        Some(value)
    }

    /// Look up a path by dotted key chain.
    #[must_use]
    pub fn lookup_path(&self, dotted: &str) -> Option<&RoutePath> {
        match self.lookup(dotted)? {
            ResolvedValue::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Every path entry in the tree as `(dotted key chain, path)` pairs,
    /// depth first in declaration order. Function entries are skipped.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, &RoutePath)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a RoutePath)>) {
        for (key, value) in &self.entries {
            let trail = trail_for(prefix, key);
            match value {
                ResolvedValue::Path(path) => out.push((trail, path)),
                ResolvedValue::Tree(tree) => tree.flatten_into(&trail, out),
                ResolvedValue::Func(_) => {}
            }
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for ResolvedRouteNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = self
            .entries
            .values()
            .filter(|v| !matches!(v, ResolvedValue::Func(_)))
            .count();
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, value) in &self.entries {
            match value {
                ResolvedValue::Path(path) => map.serialize_entry(key, path)?,
                ResolvedValue::Tree(tree) => map.serialize_entry(key, tree)?,
                ResolvedValue::Func(_) => {}
            }
        }
        map.end()
    }
}
