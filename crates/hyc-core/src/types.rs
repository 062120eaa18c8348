//! Core types for hyc-core.
//!
//! This module defines the data model shared by every pipeline stage: the
//! opaque [`SenseId`] and [`ConceptId`] identifiers handed out by the
//! ontology, the per-concept [`Cluster`], and the [`ClusterSet`] that maps
//! concepts to their member words.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// An input token after case and phrase normalisation.
pub type Word = String;

/// One meaning of a word, as identified by the ontology (e.g. `bank.n.01`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SenseId(pub String);

/// A node in the ontology's generalisation hierarchy.
///
/// Senses and ancestor concepts live in the same identifier space: a sense
/// that is reached as someone else's hypernym is an ancestor concept.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ConceptId(pub String);

impl SenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// View this sense as a concept of the hierarchy.
    pub fn as_concept(&self) -> ConceptId {
        ConceptId(self.0.clone())
    }
}

impl ConceptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ConceptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SenseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for ConceptId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A cluster: one ancestor concept and the distinct input words that reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    pub concept: ConceptId,
    pub members: BTreeSet<Word>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for clusters produced by aggregation.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Mapping from ancestor concept to the set of words that reached it.
///
/// Backed by ordered maps so that iteration, equality and serialisation are
/// deterministic; callers must still not attach meaning to the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClusterSet {
    clusters: BTreeMap<ConceptId, BTreeSet<Word>>,
}

impl ClusterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` to the cluster keyed by `concept`, creating it on first use.
    /// Returns `true` if the word was not already a member.
    pub fn insert(&mut self, concept: ConceptId, word: Word) -> bool {
        self.clusters.entry(concept).or_default().insert(word)
    }

    pub fn get(&self, concept: &ConceptId) -> Option<&BTreeSet<Word>> {
        self.clusters.get(concept)
    }

    pub fn contains(&self, concept: &ConceptId) -> bool {
        self.clusters.contains_key(concept)
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConceptId, &BTreeSet<Word>)> {
        self.clusters.iter()
    }

    pub fn concepts(&self) -> impl Iterator<Item = &ConceptId> {
        self.clusters.keys()
    }

    /// Keep only the clusters for which `keep` returns true. Clusters are
    /// dropped whole; member sets are never edited.
    pub fn retain(&mut self, mut keep: impl FnMut(&ConceptId, &BTreeSet<Word>) -> bool) {
        self.clusters.retain(|concept, members| keep(concept, members));
    }

    /// Word → concepts view of this set.
    pub fn memberships(&self) -> BTreeMap<Word, BTreeSet<ConceptId>> {
        let mut by_word: BTreeMap<Word, BTreeSet<ConceptId>> = BTreeMap::new();
        for (concept, members) in &self.clusters {
            for word in members {
                by_word
                    .entry(word.clone())
                    .or_default()
                    .insert(concept.clone());
            }
        }
        by_word
    }

    pub fn into_clusters(self) -> Vec<Cluster> {
        self.clusters
            .into_iter()
            .map(|(concept, members)| Cluster { concept, members })
            .collect()
    }
}

impl FromIterator<(ConceptId, Word)> for ClusterSet {
    fn from_iter<I: IntoIterator<Item = (ConceptId, Word)>>(iter: I) -> Self {
        let mut set = ClusterSet::new();
        for (concept, word) in iter {
            set.insert(concept, word);
        }
        set
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
