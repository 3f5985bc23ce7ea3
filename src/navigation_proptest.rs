//! Property-based tests for navigation prefixing and merging.
//!
//! These tests use proptest to generate random navigation trees and verify
//! that the prefix and merge invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::navigation::{merge_navigation, prefix_group, NavigationEntry, NavigationGroup};
    use proptest::prelude::*;

    fn arb_page() -> impl Strategy<Value = String> {
        "[a-z]{1,6}(/[a-z]{1,6}){0,2}"
    }

    fn arb_group() -> impl Strategy<Value = NavigationGroup> {
        let leaf = ("[A-Z][a-z]{0,5}", prop::collection::vec(arb_page(), 0..4)).prop_map(
            |(name, pages)| {
                NavigationGroup::new(name, pages.into_iter().map(NavigationEntry::Page).collect())
            },
        );
        leaf.prop_recursive(3, 24, 4, |inner| {
            (
                "[A-Z][a-z]{0,5}",
                prop::collection::vec(
                    prop_oneof![
                        arb_page().prop_map(NavigationEntry::Page),
                        inner.prop_map(NavigationEntry::Group),
                    ],
                    0..4,
                ),
            )
                .prop_map(|(name, pages)| NavigationGroup::new(name, pages))
        })
    }

    fn arb_navigation() -> impl Strategy<Value = Vec<NavigationGroup>> {
        prop::collection::vec(arb_group(), 0..5)
    }

    fn leaves(group: &NavigationGroup) -> Vec<String> {
        let mut out = Vec::new();
        for entry in &group.pages {
            match entry {
                NavigationEntry::Page(page) => out.push(page.clone()),
                NavigationEntry::Group(nested) => out.extend(leaves(nested)),
            }
        }
        out
    }

    fn shape(group: &NavigationGroup) -> Vec<Option<(String, usize)>> {
        group
            .pages
            .iter()
            .map(|entry| match entry {
                NavigationEntry::Page(_) => None,
                NavigationEntry::Group(nested) => Some((nested.group.clone(), nested.pages.len())),
            })
            .collect()
    }

    // ============================================================================
    // prefix_group property tests
    // ============================================================================

    proptest! {
        /// Property: every leaf of the result is the original leaf under the prefix
        #[test]
        fn prefix_group_prefixes_every_leaf(group in arb_group(), prefix in "[a-z]{1,8}") {
            let prefixed = prefix_group(&group, &prefix);
            let expected: Vec<String> = leaves(&group)
                .into_iter()
                .map(|leaf| format!("{}/{}", prefix, leaf))
                .collect();
            prop_assert_eq!(leaves(&prefixed), expected);
        }

        /// Property: prefixing never changes group names or nesting
        #[test]
        fn prefix_group_preserves_structure(group in arb_group(), prefix in "[a-z]{1,8}") {
            let prefixed = prefix_group(&group, &prefix);
            prop_assert_eq!(&prefixed.group, &group.group);
            prop_assert_eq!(shape(&prefixed), shape(&group));
            prop_assert_eq!(prefixed.page_count(), group.page_count());
        }

        /// Property: the input group is never modified
        #[test]
        fn prefix_group_is_pure(group in arb_group(), prefix in "[a-z]{1,8}") {
            let before = group.clone();
            let _ = prefix_group(&group, &prefix);
            prop_assert_eq!(group, before);
        }
    }

    // ============================================================================
    // merge_navigation property tests
    // ============================================================================

    proptest! {
        /// Property: merging the same source twice gives the same result as once
        #[test]
        fn merge_navigation_is_idempotent(
            destination in arb_navigation(),
            source in arb_navigation(),
            prefix in "[a-z]{1,8}",
        ) {
            let once = merge_navigation(destination, &source, &prefix);
            let twice = merge_navigation(once.clone(), &source, &prefix);
            prop_assert_eq!(once, twice);
        }

        /// Property: an empty source leaves the destination as it was
        #[test]
        fn merge_navigation_empty_source_is_noop(destination in arb_navigation()) {
            let merged = merge_navigation(destination.clone(), &[], "p");
            prop_assert_eq!(merged, destination);
        }

        /// Property: destination groups keep their relative order and the
        /// result only ever grows
        #[test]
        fn merge_navigation_keeps_destination_order(
            destination in arb_navigation(),
            source in arb_navigation(),
        ) {
            let merged = merge_navigation(destination.clone(), &source, "r");
            prop_assert!(merged.len() >= destination.len());
            for (before, after) in destination.iter().zip(merged.iter()) {
                prop_assert_eq!(&before.group, &after.group);
            }
        }

        /// Property: every source group ends up in the result, prefixed
        #[test]
        fn merge_navigation_contains_every_source_group(
            destination in arb_navigation(),
            source in arb_navigation(),
        ) {
            let merged = merge_navigation(destination, &source, "r");
            for group in &source {
                let expected = prefix_group(group, "r");
                prop_assert!(merged.contains(&expected));
            }
        }
    }
}
