//! Filtering — drop clusters that are too generic, too narrow or too broad.
//!
//! Depth is checked first, then size. Clusters are removed whole; surviving
//! member sets are untouched.

use crate::config::FilterConfig;
use crate::error::ClusterError;
use crate::ontology::Ontology;
use crate::types::{ClusterSet, ConceptId};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Clusters satisfying every filter.
    pub clusters: ClusterSet,
    /// Depth of every examined concept.
    pub depths: BTreeMap<ConceptId, u32>,
    /// Concepts shallower than `min_depth`.
    pub depth_rejected: BTreeSet<ConceptId>,
    /// Depth-valid concepts whose size fell outside the range.
    pub size_rejected: BTreeSet<ConceptId>,
}

/// Apply `cfg` to `clusters`. The configuration is validated before any
/// ontology lookup is made.
pub fn filter<O: Ontology + ?Sized>(
    clusters: ClusterSet,
    cfg: &FilterConfig,
    ontology: &O,
) -> Result<FilterOutcome, ClusterError> {
    cfg.validate()?;

    let mut depths = BTreeMap::new();
    for concept in clusters.concepts() {
        let depth = ontology
            .depth_of(concept)
            .map_err(|e| ClusterError::lookup(concept.as_str(), e))?;
        depths.insert(concept.clone(), depth);
    }

    let mut depth_rejected = BTreeSet::new();
    let mut size_rejected = BTreeSet::new();
    let mut kept = clusters;
    kept.retain(|concept, members| {
        if !cfg.admits_depth(depths[concept]) {
            depth_rejected.insert(concept.clone());
            false
        } else if !cfg.admits_size(members.len()) {
            size_rejected.insert(concept.clone());
            false
        } else {
            true
        }
    });

    tracing::debug!(
        kept = kept.len(),
        by_depth = depth_rejected.len(),
        by_size = size_rejected.len(),
        "filtering done"
    );

    Ok(FilterOutcome {
        clusters: kept,
        depths,
        depth_rejected,
        size_rejected,
    })
}
