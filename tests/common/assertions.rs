//! Domain-specific assertions for hyc harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! clustering invariant was violated.

use hyc::hyc_core::{ClusterRun, Ontology};

/// Assert that a `ClusterSet` has a cluster for `concept` with exactly the
/// given members.
///
/// ```rust
/// assert_cluster!(run.clusters(), "ANIMAL", ["cat", "dog"]);
/// ```
#[macro_export]
macro_rules! assert_cluster {
    ($set:expr, $concept:expr, [$($member:expr),* $(,)?]) => {{
        let set: &hyc::hyc_core::ClusterSet = &$set;
        let concept = hyc::hyc_core::ConceptId::from($concept);
        let expected: std::collections::BTreeSet<String> =
            [$($member.to_string()),*].into_iter().collect();
        match set.get(&concept) {
            Some(actual) => pretty_assertions::assert_eq!(
                actual, &expected,
                "assert_cluster! failed: members of {}", concept
            ),
            None => panic!(
                "assert_cluster! failed: no cluster {}.\n  Present: {:?}",
                concept,
                set.concepts().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a `ClusterSet` has no cluster for `concept`.
#[macro_export]
macro_rules! assert_no_cluster {
    ($set:expr, $concept:expr) => {{
        let set: &hyc::hyc_core::ClusterSet = &$set;
        let concept = hyc::hyc_core::ConceptId::from($concept);
        if let Some(members) = set.get(&concept) {
            panic!(
                "assert_no_cluster! failed: {} is present with members {:?}",
                concept, members
            );
        }
    }};
}

/// Every retained cluster satisfies the depth and size filters.
pub fn assert_filter_invariant<O: Ontology + ?Sized>(run: &ClusterRun, ontology: &O) {
    let cfg = run.filter;
    for (concept, members) in run.clusters().iter() {
        let depth = ontology.depth_of(concept).expect("depth of retained concept");
        assert!(
            depth >= cfg.min_depth,
            "retained {concept} has depth {depth} < min_depth {}",
            cfg.min_depth
        );
        assert!(
            members.len() >= cfg.min_size,
            "retained {concept} has {} members < min_size {}",
            members.len(),
            cfg.min_size
        );
        if let Some(max) = cfg.max_size {
            assert!(
                members.len() <= max,
                "retained {concept} has {} members > max_size {max}",
                members.len()
            );
        }
        assert!(!members.is_empty(), "retained {concept} is empty");
    }
}
