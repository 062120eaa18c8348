//! Test builders — a flat stub ontology and small helpers around it.
//!
//! The stub exposes precomputed ancestor sets and depths directly, so a test
//! can state "cat and dog share only ANIMAL at depth 3" without building a
//! whole hierarchy. It panics on inconsistent input rather than returning
//! `Result`.

use hyc::hyc_core::{ConceptId, Ontology, OntologyError, SenseId, Word};
use std::cell::Cell;
use std::collections::{BTreeSet, HashMap, HashSet};

// ---------------------------------------------------------------------------
// StubOntology
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct StubOntology {
    senses: HashMap<String, Vec<SenseId>>,
    ancestors: HashMap<SenseId, BTreeSet<ConceptId>>,
    depths: HashMap<ConceptId, u32>,
    broken: HashSet<SenseId>,
    lookups: Cell<usize>,
}

impl StubOntology {
    pub fn builder() -> StubOntologyBuilder {
        StubOntologyBuilder::default()
    }

    /// Number of ontology calls made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    fn tick(&self) {
        self.lookups.set(self.lookups.get() + 1);
    }
}

impl Ontology for StubOntology {
    fn senses_of(&self, word: &str) -> Result<Vec<SenseId>, OntologyError> {
        self.tick();
        Ok(self.senses.get(word).cloned().unwrap_or_default())
    }

    fn ancestors_of(&self, sense: &SenseId) -> Result<BTreeSet<ConceptId>, OntologyError> {
        self.tick();
        if self.broken.contains(sense) {
            return Err(OntologyError::Backend(format!("cannot read sense {sense}")));
        }
        Ok(self.ancestors.get(sense).cloned().unwrap_or_default())
    }

    fn depth_of(&self, concept: &ConceptId) -> Result<u32, OntologyError> {
        self.tick();
        self.depths
            .get(concept)
            .copied()
            .ok_or_else(|| OntologyError::UnknownConcept(concept.clone()))
    }

    fn label_of(&self, concept: &ConceptId) -> Result<String, OntologyError> {
        Ok(concept.as_str().to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// StubOntologyBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`StubOntology`].
///
/// # Example
///
/// ```rust
/// let onto = StubOntology::builder()
///     .concept("ANIMAL", 3)
///     .sense("cat.n.01", &["ANIMAL"])
///     .word("cat", &["cat.n.01"])
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct StubOntologyBuilder {
    onto: StubOntology,
}

impl StubOntologyBuilder {
    pub fn concept(mut self, id: &str, depth: u32) -> Self {
        self.onto.depths.insert(ConceptId::from(id), depth);
        self
    }

    pub fn sense(mut self, id: &str, ancestors: &[&str]) -> Self {
        self.onto.ancestors.insert(
            SenseId::from(id),
            ancestors.iter().map(|a| ConceptId::from(*a)).collect(),
        );
        self
    }

    pub fn word(mut self, word: &str, senses: &[&str]) -> Self {
        self.onto
            .senses
            .insert(word.to_string(), senses.iter().map(|s| SenseId::from(*s)).collect());
        self
    }

    /// Make `ancestors_of(sense)` fail as if the backing store were corrupt.
    pub fn broken(mut self, sense: &str) -> Self {
        self.onto.broken.insert(SenseId::from(sense));
        self
    }

    pub fn build(self) -> StubOntology {
        for (sense, ancestors) in &self.onto.ancestors {
            for a in ancestors {
                assert!(
                    self.onto.depths.contains_key(a),
                    "sense {sense} reaches {a}, which has no depth"
                );
            }
        }
        self.onto
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

pub fn words(xs: &[&str]) -> Vec<Word> {
    xs.iter().map(|w| w.to_string()).collect()
}

pub fn word_set(xs: &[&str]) -> BTreeSet<Word> {
    xs.iter().map(|w| w.to_string()).collect()
}

/// Build a stub from index-based shapes, as generated by proptest.
///
/// Concept `i` is `C{i}` with depth `i % 5`; sense `j` is `S{j}` reaching the
/// concepts in `sense_ancestors[j]`; word `k` is `w{k}` with the senses in
/// `word_senses[k]`.
pub fn stub_from_indices(
    concepts: usize,
    sense_ancestors: &[BTreeSet<usize>],
    word_senses: &[BTreeSet<usize>],
) -> (StubOntology, Vec<Word>) {
    let mut b = StubOntology::builder();
    for i in 0..concepts {
        b = b.concept(&format!("C{i}"), (i % 5) as u32);
    }
    for (j, ancestors) in sense_ancestors.iter().enumerate() {
        let names: Vec<String> = ancestors.iter().map(|i| format!("C{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        b = b.sense(&format!("S{j}"), &refs);
    }
    let mut ws = Vec::new();
    for (k, senses) in word_senses.iter().enumerate() {
        let names: Vec<String> = senses.iter().map(|j| format!("S{j}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let word = format!("w{k}");
        b = b.word(&word, &refs);
        ws.push(word);
    }
    (b.build(), ws)
}
