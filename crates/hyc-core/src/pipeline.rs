//! Pipeline driver: Expansion ──► Aggregation ──► Filtering.
//!
//! Stages run strictly in sequence. Configuration is validated before the
//! ontology is touched, and any lookup failure aborts the whole run.

use crate::aggregation::aggregate;
use crate::config::FilterConfig;
use crate::error::ClusterError;
use crate::expansion::{Expander, Expansion, ExpansionStats};
use crate::filtering::{filter, FilterOutcome};
use crate::ontology::Ontology;
use crate::types::{ClusterSet, ConceptId, Word};
use std::collections::{BTreeMap, BTreeSet};

/// Per-word bookkeeping for the run summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordAccounting {
    /// Words with no senses in the ontology.
    pub not_found: BTreeSet<Word>,
    /// Recognised words whose senses reach no candidate concept at all
    /// (every sense is a root and own senses are not candidates).
    pub no_candidates: BTreeSet<Word>,
    /// Words with candidates, every one of which is shallower than `min_depth`.
    pub excluded_by_depth: BTreeSet<Word>,
    /// Words that had depth-valid clusters, all of which failed the size range.
    pub excluded_by_size: BTreeSet<Word>,
    /// Surviving clusters of each clustered word.
    pub memberships: BTreeMap<Word, BTreeSet<ConceptId>>,
}

impl WordAccounting {
    fn compute(expansion: &Expansion, outcome: &FilterOutcome) -> Self {
        let memberships = outcome.clusters.memberships();
        let mut no_candidates = BTreeSet::new();
        let mut excluded_by_depth = BTreeSet::new();
        let mut excluded_by_size = BTreeSet::new();

        for (word, concepts) in &expansion.reached {
            if concepts.is_empty() {
                no_candidates.insert(word.clone());
            } else if concepts.iter().all(|c| outcome.depth_rejected.contains(c)) {
                excluded_by_depth.insert(word.clone());
            } else if !memberships.contains_key(word) {
                excluded_by_size.insert(word.clone());
            }
        }

        Self {
            not_found: expansion.not_found.clone(),
            no_candidates,
            excluded_by_depth,
            excluded_by_size,
            memberships,
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterRun {
    pub filter: FilterConfig,
    pub input_words: usize,
    /// Aggregation output before filtering.
    pub unfiltered: ClusterSet,
    pub outcome: FilterOutcome,
    pub words: WordAccounting,
    pub stats: ExpansionStats,
}

impl ClusterRun {
    /// Clusters that survived filtering.
    pub fn clusters(&self) -> &ClusterSet {
        &self.outcome.clusters
    }
}

/// Runs the clustering pipeline against an injected ontology.
pub struct Clusterer<'o, O: ?Sized> {
    ontology: &'o O,
    filter: FilterConfig,
    include_own_senses: bool,
}

impl<'o, O: Ontology + ?Sized> Clusterer<'o, O> {
    pub fn new(ontology: &'o O, filter: FilterConfig) -> Self {
        Self {
            ontology,
            filter,
            include_own_senses: false,
        }
    }

    pub fn include_own_senses(mut self, yes: bool) -> Self {
        self.include_own_senses = yes;
        self
    }

    pub fn run(&self, words: &[Word]) -> Result<ClusterRun, ClusterError> {
        self.filter.validate()?;
        if words.is_empty() {
            return Err(ClusterError::EmptyInput);
        }

        let mut expander = Expander::new(self.ontology).include_own_senses(self.include_own_senses);
        let expansion = expander.expand(words)?;
        let unfiltered = aggregate(&expansion);
        let outcome = filter(unfiltered.clone(), &self.filter, self.ontology)?;
        let accounting = WordAccounting::compute(&expansion, &outcome);

        tracing::info!(
            words = words.len(),
            candidates = unfiltered.len(),
            clusters = outcome.clusters.len(),
            not_found = accounting.not_found.len(),
            no_candidates = accounting.no_candidates.len(),
            excluded_by_depth = accounting.excluded_by_depth.len(),
            excluded_by_size = accounting.excluded_by_size.len(),
            "clustering complete"
        );

        Ok(ClusterRun {
            filter: self.filter,
            input_words: words.len(),
            unfiltered,
            outcome,
            words: accounting,
            stats: expander.stats(),
        })
    }
}
