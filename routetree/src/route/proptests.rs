//! Property-based tests for route tree resolution.

use super::{
    create_routes, ResolvedRouteNode, ResolvedTarget, ResolvedValue, RouteFn, RouteNode,
    RouteTarget, RouteValue,
};
use crate::case::to_kebab_case;
use crate::path::merge_paths;
use proptest::prelude::*;

const CALL_ARGS: &[&str] = &["42"];

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z]{0,8}"
}

fn fragment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/-]{0,12}"
}

fn node_from(base_path: Option<String>, entries: Vec<(String, RouteValue)>) -> RouteNode {
    let mut node = RouteNode::new();
    node.set_base_path(base_path);
    for (key, value) in entries {
        node.insert(key, value);
    }
    node
}

// Functions return either a fragment or a flat tree, with or without override
fn target_strategy() -> impl Strategy<Value = RouteTarget> {
    let flat_tree = (
        prop::option::of(fragment_strategy()),
        prop::collection::vec((key_strategy(), fragment_strategy()), 0..4),
    )
        .prop_map(|(base_path, leaves)| {
            let entries = leaves
                .into_iter()
                .map(|(key, fragment)| (key, RouteValue::Path(fragment)))
                .collect();
            RouteTarget::Tree(node_from(base_path, entries))
        });

    prop_oneof![fragment_strategy().prop_map(RouteTarget::Path), flat_tree]
}

fn func_strategy() -> impl Strategy<Value = RouteValue> {
    target_strategy().prop_map(|target| {
        RouteValue::Func(RouteFn::new(move |_: &[&str]| target.clone()))
    })
}

fn value_strategy() -> impl Strategy<Value = RouteValue> {
    let leaf = prop_oneof![
        3 => fragment_strategy().prop_map(RouteValue::Path),
        1 => func_strategy(),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        (
            prop::option::of(fragment_strategy()),
            prop::collection::vec((key_strategy(), inner), 0..6),
        )
            .prop_map(|(base_path, entries)| RouteValue::Tree(node_from(base_path, entries)))
    })
}

fn tree_strategy() -> impl Strategy<Value = RouteNode> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..8)
        .prop_map(|entries| node_from(None, entries))
}

fn join_trail(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn nested_base(base: &str, key: &str, child: &RouteNode) -> String {
    let segment = child
        .base_path()
        .map_or_else(|| to_kebab_case(key), str::to_string);
    merge_paths([base, segment.as_str()])
}

// Derive each leaf's path directly from its key chain and declared fragment.
// With `call_functions`, function leaves are invoked and their results
// derived the same way; otherwise they are skipped.
fn expected_paths(
    node: &RouteNode,
    base: &str,
    prefix: &str,
    call_functions: bool,
    out: &mut Vec<(String, String)>,
) {
    for (key, value) in node.iter() {
        let trail = join_trail(prefix, key);
        match value {
            RouteValue::Path(fragment) => out.push((trail, merge_paths([base, fragment.as_str()]))),
            RouteValue::Tree(child) => {
                let child_base = nested_base(base, key, child);
                expected_paths(child, &child_base, &trail, call_functions, out);
            }
            RouteValue::Func(f) if call_functions => match f.call(CALL_ARGS) {
                RouteTarget::Path(fragment) => {
                    out.push((trail, merge_paths([base, fragment.as_str()])));
                }
                RouteTarget::Tree(child) => {
                    let child_base = nested_base(base, key, &child);
                    expected_paths(&child, &child_base, &trail, call_functions, out);
                }
            },
            RouteValue::Func(_) => {}
        }
    }
}

// Every path reachable from a resolved tree, calling function leaves
fn called_paths(node: &ResolvedRouteNode, prefix: &str, out: &mut Vec<(String, String)>) {
    for (key, value) in node.iter() {
        let trail = join_trail(prefix, key);
        match value {
            ResolvedValue::Path(path) => out.push((trail, path.to_string())),
            ResolvedValue::Tree(tree) => called_paths(tree, &trail, out),
            ResolvedValue::Func(f) => match f.call(CALL_ARGS).unwrap() {
                ResolvedTarget::Path(path) => out.push((trail, path.to_string())),
                ResolvedTarget::Tree(tree) => called_paths(&tree, &trail, out),
            },
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Every resolved path matches the path re-derived from its key chain
    #[test]
    fn resolved_paths_match_key_chain(tree in tree_strategy(), base in fragment_strategy()) {
        let resolved = create_routes(&tree, &base).unwrap();
        let actual: Vec<(String, String)> = resolved
            .flatten()
            .into_iter()
            .map(|(k, p)| (k, p.to_string()))
            .collect();

        let mut expected = Vec::new();
        expected_paths(&tree, &base, "", false, &mut expected);

        prop_assert_eq!(actual, expected);
    }

    // Function results match the same derivation as declared paths
    #[test]
    fn called_paths_match_key_chain(tree in tree_strategy(), base in fragment_strategy()) {
        let resolved = create_routes(&tree, &base).unwrap();
        let mut actual = Vec::new();
        called_paths(&resolved, "", &mut actual);

        let mut expected = Vec::new();
        expected_paths(&tree, &base, "", true, &mut expected);

        prop_assert_eq!(actual, expected);
    }

    // Resolution is deterministic
    #[test]
    fn resolution_is_deterministic(tree in tree_strategy()) {
        let first = serde_json::to_string(&create_routes(&tree, "").unwrap()).unwrap();
        let second = serde_json::to_string(&create_routes(&tree, "").unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    // Every resolved path, including function results, is normalized
    #[test]
    fn resolved_paths_are_normalized(tree in tree_strategy(), base in fragment_strategy()) {
        let resolved = create_routes(&tree, &base).unwrap();
        let mut paths = Vec::new();
        called_paths(&resolved, "", &mut paths);
        for (_, path) in paths {
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.contains("//"));
            prop_assert!(path == "/" || !path.ends_with('/'));
        }
    }

    // Resolved trees keep the key order of the declaration
    #[test]
    fn resolved_keys_follow_declaration(tree in tree_strategy()) {
        let resolved = create_routes(&tree, "").unwrap();
        let declared: Vec<&str> = tree.keys().collect();
        let produced: Vec<&str> = resolved.keys().collect();
        prop_assert_eq!(declared, produced);
    }
}
