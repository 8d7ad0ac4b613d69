#![allow(unused)]
//! Edit-distance harness.
//!
//! # What this covers
//!
//! - **Metric laws**: symmetry, identity, distance from the empty string is
//!   the length in code points.
//! - **Oracle agreement**: matches `strsim::levenshtein` on random ASCII and
//!   multi-byte strings.
//! - **Case sensitivity**: no normalization inside the distance.
//!
//! # Running
//!
//! ```sh
//! cargo test --test ranking_harness
//! ```

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use qdict_core::distance;
use rstest::rstest;

#[rstest]
#[case("", "", 0)]
#[case("a", "", 1)]
#[case("ap", "apple", 3)]
#[case("ap", "apricot", 5)]
#[case("kitten", "sitting", 3)]
#[case("New York", "new york", 2)]
#[case("简单查词工具", "查词工具", 2)]
fn known_distances(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
    assert_eq!(distance(a, b), expected);
    assert_eq!(distance(b, a), expected);
}

proptest! {
    #[test]
    fn prop_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn prop_identity(a in "\\PC{0,16}") {
        prop_assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn prop_empty_is_length(a in "\\PC{0,16}") {
        prop_assert_eq!(distance("", &a), a.chars().count());
        prop_assert_eq!(distance(&a, ""), a.chars().count());
    }

    #[test]
    fn prop_matches_strsim(a in "[a-dA-D词典 ]{0,12}", b in "[a-dA-D词典 ]{0,12}") {
        prop_assert_eq!(distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_bounded_by_longer_length(a in "[a-c]{0,10}", b in "[a-c]{0,10}") {
        let d = distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }
}
