//! The normalized route path type.

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

use super::join::merge_paths;

/// An absolute, normalized URL path.
///
/// A `RoutePath` always starts with exactly one `/`, never ends with `/`
/// unless it is the root path, and never contains consecutive `/`. The only
/// way to construct one is through [`merge_paths`], so the invariant holds
/// for every value.
///
/// # Examples
///
/// ```
/// use routetree::path::RoutePath;
///
/// let root = RoutePath::root();
/// assert!(root.is_root());
///
/// let users = root.child("dashboard").child("/users/");
/// assert_eq!(users, "/dashboard/users");
/// assert_eq!(users.segments().collect::<Vec<_>>(), vec!["dashboard", "users"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(String);

impl RoutePath {
    /// The root path `/`.
    #[must_use]
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build a path by joining fragments with [`merge_paths`].
    #[must_use]
    pub fn join<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(merge_paths(fragments))
    }

    /// Return a new path with `fragment` appended.
    ///
    /// An empty fragment (or `/`) yields a copy of this path.
    #[must_use]
    pub fn child(&self, fragment: &str) -> Self {
        Self::join([self.as_str(), fragment])
    }

    /// Returns true if this is the root path `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Iterate over the non-empty segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Get the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for RoutePath {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.0
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for RoutePath {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

impl Serialize for RoutePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
