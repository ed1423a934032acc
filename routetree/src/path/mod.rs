//! URL path joining and the normalized path type.
//!
//! Every path produced by the route builder goes through [`merge_paths`],
//! which guarantees the normalized form:
//!
//! - exactly one leading `/`
//! - no trailing `/`, except for the root path `/` itself
//! - no consecutive `/`
//!
//! [`RoutePath`] carries that guarantee in the type system.
//!
//! # Examples
//!
//! ```
//! use routetree::path::{merge_paths, RoutePath};
//!
//! assert_eq!(merge_paths(["dashboard", "/users/"]), "/dashboard/users");
//! assert_eq!(merge_paths(Vec::<&str>::new()), "/");
//!
//! let path = RoutePath::join(["/dashboard", "users"]);
//! assert_eq!(path.child("1/update").as_str(), "/dashboard/users/1/update");
//! ```

pub mod join;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use join::merge_paths;
pub use types::RoutePath;
