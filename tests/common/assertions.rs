//! Domain-specific assertion macros for qdict harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* ordering invariant was violated.

/// Assert the result terms, in order.
///
/// ```rust
/// assert_terms!(search(&v, "ap"), ["apple", "apricot"]);
/// ```
#[macro_export]
macro_rules! assert_terms {
    ($results:expr, [$($term:expr),* $(,)?]) => {{
        let expected: Vec<&str> = vec![$($term),*];
        pretty_assertions::assert_eq!($results.terms(), expected);
    }};
}

/// Assert that the partial portion is sorted by non-decreasing distance and
/// that ties keep vocabulary order.
#[macro_export]
macro_rules! assert_partials_ranked {
    ($results:expr, $vocab:expr) => {{
        let partial = $results.partial();
        for pair in partial.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (qdict_core::MatchKind::Partial { distance: da }, qdict_core::MatchKind::Partial { distance: db }) =
                (a.kind, b.kind)
            else {
                panic!("assert_partials_ranked! failed: exact hit in partial portion: {:?} / {:?}", a.term, b.term);
            };
            if da > db {
                panic!(
                    "assert_partials_ranked! failed: {:?} (distance {}) ranked before {:?} (distance {})",
                    a.term, da, b.term, db
                );
            }
            if da == db {
                let pa = $vocab.position(a.term).expect("hit term must be in vocabulary");
                let pb = $vocab.position(b.term).expect("hit term must be in vocabulary");
                if pa > pb {
                    panic!(
                        "assert_partials_ranked! failed: tie at distance {} broke vocabulary order: {:?} (#{}) before {:?} (#{})",
                        da, a.term, pa, b.term, pb
                    );
                }
            }
        }
    }};
}

/// Assert that no term appears twice in the results, which also rules out a
/// term sitting in both the exact and the partial portion.
#[macro_export]
macro_rules! assert_no_duplicates {
    ($results:expr) => {{
        let mut seen = std::collections::HashSet::new();
        for hit in $results.hits() {
            if !seen.insert(hit.term) {
                panic!("assert_no_duplicates! failed: {:?} returned twice", hit.term);
            }
        }
    }};
}
