#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # routetree
//!
//! A library for resolving nested route declarations into absolute URL paths.
//!
//! Routes are declared as a tree of path fragments, nested sub-trees, and
//! functions. Resolution prefixes every fragment with the segments of its
//! ancestors, deriving each segment from the kebab-cased key of the nested
//! node unless the node overrides it.
//!
//! ## Core Types
//!
//! - [`RouteNode`] and [`RouteValue`]: Route declarations
//! - [`ResolvedRouteNode`] and [`ResolvedValue`]: Resolved routes
//! - [`RouteTreeBuilder`] and [`create_routes`]: Resolution
//! - [`merge_paths`] and [`to_kebab_case`]: Path helpers
//! - [`Error`] and [`Result`]: Error handling types
//! - [`init_logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use routetree::{create_routes, RouteNode};
//!
//! let routes = RouteNode::new()
//!     .path("index", "")
//!     .path("aboutUs", "/about-us")
//!     .tree(
//!         "dashboard",
//!         RouteNode::new()
//!             .path("home", "/")
//!             .func("blogs", |args: &[&str]| format!("/blogs/{}", args[0])),
//!     );
//!
//! let resolved = create_routes(&routes, "").unwrap();
//! assert_eq!(resolved.path("index").unwrap(), "/");
//! assert_eq!(resolved.path("aboutUs").unwrap(), "/about-us");
//!
//! let dashboard = resolved.subtree("dashboard").unwrap();
//! assert_eq!(dashboard.path("home").unwrap(), "/dashboard");
//!
//! let blog = dashboard.call("blogs", &["1"]).unwrap();
//! assert_eq!(blog.as_path().unwrap(), "/dashboard/blogs/1");
//! ```

pub mod case;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod route;
pub mod schema;

// Re-export key types at crate root for convenience
pub use case::to_kebab_case;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{merge_paths, RoutePath};
pub use route::{
    create_routes, ResolvedRouteFn, ResolvedRouteNode, ResolvedTarget, ResolvedValue, RouteFn,
    RouteNode, RouteTarget, RouteTreeBuilder, RouteValue,
};
pub use schema::{load_file, SchemaFormat};
