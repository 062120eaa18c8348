//! Aggregation — invert word → concepts into concept → words.

use crate::expansion::Expansion;
use crate::types::ClusterSet;

/// Build the unfiltered [`ClusterSet`] from an expansion.
///
/// Every (word, concept) pair puts the word in that concept's cluster; set
/// semantics make a word count once per cluster however many of its senses
/// reach the concept.
pub fn aggregate(expansion: &Expansion) -> ClusterSet {
    let clusters: ClusterSet = expansion
        .pairs()
        .map(|(word, concept)| (concept.clone(), word.clone()))
        .collect();
    tracing::debug!(clusters = clusters.len(), "aggregation done");
    clusters
}
