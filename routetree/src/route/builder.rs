//! Recursive resolution of route declarations.

use indexmap::IndexMap;

use crate::case::to_kebab_case;
use crate::error::{Error, Result};
use crate::path::RoutePath;

use super::node::{RouteNode, RouteValue, BASE_PATH_KEY};
use super::resolved::{ResolvedRouteFn, ResolvedRouteNode, ResolvedValue};

/// Resolves [`RouteNode`] declarations beneath a base path.
///
/// # Examples
///
/// ```
/// use routetree::{RouteNode, RouteTreeBuilder};
///
/// let routes = RouteNode::new().tree(
///     "dashboard",
///     RouteNode::new().path("home", "/").path("stats", "/stats"),
/// );
///
/// let resolved = RouteTreeBuilder::new()
///     .with_base_path("/app")
///     .build(&routes)
///     .unwrap();
///
/// assert_eq!(resolved.lookup_path("dashboard.home").unwrap(), "/app/dashboard");
/// assert_eq!(resolved.lookup_path("dashboard.stats").unwrap(), "/app/dashboard/stats");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTreeBuilder {
    base_path: String,
}

impl RouteTreeBuilder {
    /// Create a builder rooted at `/`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path every route is resolved beneath.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// The configured base path, as given.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve a declaration tree.
    ///
    /// Base path overrides only apply to nested nodes; an override on the
    /// root node is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservedKey`] if any node (including trees returned
    /// by route functions) declares an entry named `_basePath`.
    pub fn build(&self, routes: &RouteNode) -> Result<ResolvedRouteNode> {
        let base = RoutePath::join([self.base_path.as_str()]);
        if let Some(override_path) = routes.base_path() {
            log::debug!("ignoring base path override {override_path:?} on the root node");
        }

        log::debug!("resolving {} route entries beneath {base}", routes.len());
        let resolved = build_node(routes, &base, "")?;
        log::debug!("resolved route tree beneath {base}");
        Ok(resolved)
    }
}

/// Resolve `routes` beneath `base_path`.
///
/// Shorthand for `RouteTreeBuilder::new().with_base_path(base_path).build(routes)`.
///
/// # Errors
///
/// See [`RouteTreeBuilder::build`].
pub fn create_routes(routes: &RouteNode, base_path: &str) -> Result<ResolvedRouteNode> {
    RouteTreeBuilder::new().with_base_path(base_path).build(routes)
}

/// Base path a nested node resolves its entries beneath.
///
/// The node's own override wins over the segment derived from its key.
pub(crate) fn child_base(parent: &RoutePath, key: &str, node: &RouteNode) -> RoutePath {
    match node.base_path() {
        Some(override_path) => parent.child(override_path),
        None => parent.child(&to_kebab_case(key)),
    }
}

/// Dotted key chain used to locate entries in error messages.
pub(crate) fn trail_for(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Resolve every entry of `node` beneath `base`.
///
/// `trail` is the dotted key chain of `node` itself.
pub(crate) fn build_node(node: &RouteNode, base: &RoutePath, trail: &str) -> Result<ResolvedRouteNode> {
    let mut entries = IndexMap::with_capacity(node.len());

    for (key, value) in node.iter() {
        if key == BASE_PATH_KEY {
            return Err(Error::ReservedKey {
                path: trail.to_string(),
            });
        }

        let resolved = match value {
            RouteValue::Path(fragment) => ResolvedValue::Path(base.child(fragment)),
            RouteValue::Tree(child) => {
                let nested_base = child_base(base, key, child);
                ResolvedValue::Tree(build_node(child, &nested_base, &trail_for(trail, key))?)
            }
            RouteValue::Func(f) => ResolvedValue::Func(ResolvedRouteFn::new(
                key,
                base.clone(),
                trail.to_string(),
                f.clone(),
            )),
        };

        log::trace!("resolved {} -> {:?}", trail_for(trail, key), resolved);
        entries.insert(key.to_string(), resolved);
    }

    Ok(ResolvedRouteNode::from_entries(entries))
}
