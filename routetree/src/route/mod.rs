//! Route declaration trees and their resolution.
//!
//! A [`RouteNode`] is the author-facing declaration: path fragments, nested
//! sub-trees, and functions producing either. [`RouteTreeBuilder`] walks a
//! declaration and produces a [`ResolvedRouteNode`] in which every fragment
//! has been prefixed with the segments of its ancestors.
//!
//! # Segment derivation
//!
//! A nested node contributes the kebab-cased form of its key as a segment
//! (`userSettings` becomes `/user-settings`) unless it declares a base path
//! override, in which case the override is joined instead. An empty override
//! contributes no segment at all.
//!
//! # Examples
//!
//! ```
//! use routetree::{create_routes, RouteNode};
//!
//! let routes = RouteNode::new()
//!     .path("index", "")
//!     .tree(
//!         "userSettings",
//!         RouteNode::new()
//!             .path("home", "/")
//!             .func("profile", |args: &[&str]| format!("/profile/{}", args[0])),
//!     )
//!     .tree(
//!         "auth",
//!         RouteNode::new().with_base_path("").path("login", "/login"),
//!     );
//!
//! let resolved = create_routes(&routes, "").unwrap();
//! assert_eq!(resolved.lookup_path("index").unwrap(), "/");
//! assert_eq!(resolved.lookup_path("userSettings.home").unwrap(), "/user-settings");
//! assert_eq!(resolved.lookup_path("auth.login").unwrap(), "/login");
//!
//! let settings = resolved.subtree("userSettings").unwrap();
//! let profile = settings.call("profile", &["42"]).unwrap();
//! assert_eq!(profile.as_path().unwrap(), "/user-settings/profile/42");
//! ```

mod builder;
mod node;
mod resolved;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::{create_routes, RouteTreeBuilder};
pub use node::{RouteFn, RouteNode, RouteTarget, RouteValue, BASE_PATH_KEY};
pub use resolved::{ResolvedRouteFn, ResolvedRouteNode, ResolvedTarget, ResolvedValue};
