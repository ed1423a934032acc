//! Property-based tests for path joining and kebab-case conversion.

use super::join::merge_paths;
use super::types::RoutePath;
use crate::case::to_kebab_case;
use proptest::prelude::*;

// Fragments mixing segment characters with stray slashes
fn fragment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/_-]{0,20}"
}

fn fragments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(fragment_strategy(), 0..6)
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,20}"
}

fn kebab_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]{1,8}", 1..5).prop_map(|parts| parts.join("-"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Joined paths always start with a single slash
    #[test]
    fn merged_path_has_leading_slash(fragments in fragments_strategy()) {
        let path = merge_paths(&fragments);
        prop_assert!(path.starts_with('/'));
    }

    // Joined paths never contain consecutive slashes
    #[test]
    fn merged_path_has_no_double_slash(fragments in fragments_strategy()) {
        let path = merge_paths(&fragments);
        prop_assert!(!path.contains("//"), "path {:?} contains //", path);
    }

    // Only the root path may end with a slash
    #[test]
    fn merged_path_has_no_trailing_slash(fragments in fragments_strategy()) {
        let path = merge_paths(&fragments);
        prop_assert!(path == "/" || !path.ends_with('/'));
    }

    // Joining is idempotent on an already joined path
    #[test]
    fn merge_paths_idempotent(fragments in fragments_strategy()) {
        let once = merge_paths(&fragments);
        let twice = merge_paths([once.as_str()]);
        prop_assert_eq!(once, twice);
    }

    // Joining is associative: nesting joins gives the same result as a flat join
    #[test]
    fn merge_paths_associative(a in fragment_strategy(), b in fragment_strategy(), c in fragment_strategy()) {
        let nested = merge_paths([merge_paths([a.as_str(), b.as_str()]), c.clone()]);
        let flat = merge_paths([a, b, c]);
        prop_assert_eq!(nested, flat);
    }

    // Joined paths preserve every non-empty segment in order
    #[test]
    fn merge_paths_preserves_segments(fragments in fragments_strategy()) {
        let expected: Vec<&str> = fragments
            .iter()
            .flat_map(|f| f.split('/'))
            .filter(|s| !s.is_empty())
            .collect();
        let path = RoutePath::join(&fragments);
        let actual: Vec<&str> = path.segments().collect();
        prop_assert_eq!(actual, expected);
    }

    // Kebab-case conversion is idempotent
    #[test]
    fn kebab_case_idempotent(ident in identifier_strategy()) {
        let once = to_kebab_case(&ident);
        let twice = to_kebab_case(&once);
        prop_assert_eq!(once, twice);
    }

    // Already-kebab input is a fixed point
    #[test]
    fn kebab_case_fixed_point(kebab in kebab_strategy()) {
        prop_assert_eq!(to_kebab_case(&kebab), kebab);
    }

    // Kebab-case output never contains uppercase ASCII or whitespace
    #[test]
    fn kebab_case_output_shape(ident in identifier_strategy()) {
        let out = to_kebab_case(&ident);
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace()));
    }
}
