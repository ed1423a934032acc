//! Common test utilities for integration tests.
//!
//! This module provides fixture builders shared by the routetree
//! integration tests.

use routetree::RouteNode;

/// The reference navigation tree: literal paths, an index route, nested
/// trees, functions returning strings and trees, and an empty base path
/// override.
#[allow(dead_code)]
pub fn navigation_routes() -> RouteNode {
    RouteNode::new()
        .path("index", "")
        .path("aboutUs", "/about-us")
        .tree(
            "dashboard",
            RouteNode::new()
                .path("home", "/")
                .tree(
                    "users",
                    RouteNode::new().func("user", |args: &[&str]| {
                        RouteNode::new()
                            .with_base_path(format!("/{}", args[0]))
                            .path("update", "/update")
                            .path("delete", "/delete")
                    }),
                )
                .func("blogs", |args: &[&str]| format!("/blogs/{}", args[0])),
        )
        .tree(
            "auth",
            RouteNode::new()
                .with_base_path("")
                .path("login", "/login")
                .path("register", "/register"),
        )
}

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
