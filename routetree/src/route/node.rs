//! Route declaration types.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Key that carries a base path override in route schema files.
///
/// In schema text it sits alongside the route keys; once loaded it becomes
/// [`RouteNode::base_path`] and is never treated as a route. Typed trees set
/// the override with [`RouteNode::with_base_path`], and an entry using this
/// key is rejected when the tree is built.
pub const BASE_PATH_KEY: &str = "_basePath";

/// What a route function produces when invoked.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    /// A path fragment, joined onto the function's base path.
    Path(String),
    /// A sub-tree, resolved beneath the function's base path.
    Tree(RouteNode),
}

impl From<String> for RouteTarget {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<&str> for RouteTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<RouteNode> for RouteTarget {
    fn from(node: RouteNode) -> Self {
        Self::Tree(node)
    }
}

type RouteFnInner = dyn Fn(&[&str]) -> RouteTarget + Send + Sync;

/// A shareable function producing a route from call arguments.
///
/// # Examples
///
/// ```
/// use routetree::{RouteFn, RouteNode, RouteTarget};
///
/// let blog = RouteFn::new(|args: &[&str]| format!("/blogs/{}", args[0]));
/// assert!(matches!(blog.call(&["1"]), RouteTarget::Path(p) if p == "/blogs/1"));
///
/// let user = RouteFn::new(|args: &[&str]| {
///     RouteNode::new()
///         .with_base_path(format!("/{}", args[0]))
///         .path("update", "/update")
/// });
/// assert!(matches!(user.call(&["1"]), RouteTarget::Tree(_)));
/// ```
#[derive(Clone)]
pub struct RouteFn(Arc<RouteFnInner>);

impl RouteFn {
    /// Wrap a closure returning anything convertible into a [`RouteTarget`].
    pub fn new<F, T>(f: F) -> Self
    where
        F: Fn(&[&str]) -> T + Send + Sync + 'static,
        T: Into<RouteTarget>,
    {
        Self(Arc::new(move |args: &[&str]| -> RouteTarget { f(args).into() }))
    }

    /// Invoke the function.
    #[must_use]
    pub fn call(&self, args: &[&str]) -> RouteTarget {
        (self.0)(args)
    }
}

impl fmt::Debug for RouteFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RouteFn(..)")
    }
}

/// A single route declaration.
#[derive(Debug, Clone)]
pub enum RouteValue {
    /// A path fragment relative to the enclosing base path.
    Path(String),
    /// A nested declaration tree.
    Tree(RouteNode),
    /// A function producing a fragment or a tree when called.
    Func(RouteFn),
}

/// An ordered tree of route declarations.
///
/// Entries keep their insertion order, and the resolved tree reports them in
/// the same order.
///
/// # Examples
///
/// ```
/// use routetree::RouteNode;
///
/// let dashboard = RouteNode::new()
///     .path("home", "/")
///     .path("settings", "/settings");
///
/// let keys: Vec<_> = dashboard.keys().collect();
/// assert_eq!(keys, vec!["home", "settings"]);
/// assert_eq!(dashboard.base_path(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteNode {
    base_path: Option<String>,
    entries: IndexMap<String, RouteValue>,
}

impl RouteNode {
    /// Create an empty node without a base path override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path override used for this node's children.
    ///
    /// An empty override suppresses the segment the node's key would
    /// otherwise contribute.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Add a path fragment entry.
    #[must_use]
    pub fn path(mut self, key: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.insert(key, RouteValue::Path(fragment.into()));
        self
    }

    /// Add a nested tree entry.
    #[must_use]
    pub fn tree(mut self, key: impl Into<String>, node: RouteNode) -> Self {
        self.insert(key, RouteValue::Tree(node));
        self
    }

    /// Add a function entry.
    #[must_use]
    pub fn func<F, T>(mut self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[&str]) -> T + Send + Sync + 'static,
        T: Into<RouteTarget>,
    {
        self.insert(key, RouteValue::Func(RouteFn::new(f)));
        self
    }

    /// Insert an entry, returning the value it replaced.
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: RouteValue) -> Option<RouteValue> {
        self.entries.insert(key.into(), value)
    }

    /// Replace the base path override.
    pub fn set_base_path(&mut self, base_path: Option<String>) {
        self.base_path = base_path;
    }

    /// The base path override, if any.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RouteValue> {
        self.entries.get(key)
    }

    /// Number of entries (the base path override is not an entry).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the node has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let node = RouteNode::new()
            .path("zeta", "/z")
            .path("alpha", "/a")
            .tree("mid", RouteNode::new());
        let keys: Vec<_> = node.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(node.len(), 3);
        assert!(!node.is_empty());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut node = RouteNode::new().path("a", "/a").path("b", "/b");
        let old = node.insert("a", RouteValue::Path("/new".to_string()));
        assert!(matches!(old, Some(RouteValue::Path(p)) if p == "/a"));
        let keys: Vec<_> = node.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(matches!(node.get("a"), Some(RouteValue::Path(p)) if p == "/new"));
    }

    #[test]
    fn test_base_path_is_not_an_entry() {
        let mut node = RouteNode::new().with_base_path("").path("login", "/login");
        assert_eq!(node.base_path(), Some(""));
        assert_eq!(node.len(), 1);

        node.set_base_path(None);
        assert_eq!(node.base_path(), None);
    }

    #[test]
    fn test_route_fn_converts_targets() {
        let literal = RouteFn::new(|_: &[&str]| "/static");
        assert!(matches!(literal.call(&[]), RouteTarget::Path(p) if p == "/static"));

        let tree = RouteFn::new(|args: &[&str]| RouteNode::new().path("id", args[0].to_string()));
        match tree.call(&["7"]) {
            RouteTarget::Tree(node) => {
                assert!(matches!(node.get("id"), Some(RouteValue::Path(p)) if p == "7"));
            }
            RouteTarget::Path(p) => panic!("expected tree, got path {p}"),
        }
    }

    #[test]
    fn test_route_fn_debug_is_opaque() {
        let f = RouteFn::new(|_: &[&str]| "/x");
        assert_eq!(format!("{f:?}"), "RouteFn(..)");
    }

    #[test]
    fn test_node_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RouteNode>();
        assert_send_sync::<RouteFn>();
    }
}
