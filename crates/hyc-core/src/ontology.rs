//! Ontology capability consumed by the pipeline.
//!
//! The pipeline never reaches for a global lexical database. Callers inject
//! an [`Ontology`]; tests inject a stub, the binary injects one of the
//! backends from `hyc-lexicon` wrapped in [`GraphOntology`].
//!
//! # Depth
//!
//! [`GraphOntology`] defines depth as the **minimum** number of hypernym
//! edges between a concept and any root (a concept with no hypernyms). Roots
//! have depth 0. This is the metric the `min_depth` filter gates on.

use crate::error::OntologyError;
use crate::types::{ConceptId, SenseId};
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Lookups the clustering pipeline needs from a lexical ontology.
pub trait Ontology {
    /// Senses of `word`. Empty if the word is unknown.
    fn senses_of(&self, word: &str) -> Result<Vec<SenseId>, OntologyError>;

    /// Transitive generalisation closure of `sense`, excluding the sense itself.
    fn ancestors_of(&self, sense: &SenseId) -> Result<BTreeSet<ConceptId>, OntologyError>;

    /// Distance of `concept` from the ontology root.
    fn depth_of(&self, concept: &ConceptId) -> Result<u32, OntologyError>;

    /// Human-readable name of `concept`, for reports only.
    fn label_of(&self, concept: &ConceptId) -> Result<String, OntologyError>;
}

impl<O: Ontology + ?Sized> Ontology for &O {
    fn senses_of(&self, word: &str) -> Result<Vec<SenseId>, OntologyError> {
        (**self).senses_of(word)
    }

    fn ancestors_of(&self, sense: &SenseId) -> Result<BTreeSet<ConceptId>, OntologyError> {
        (**self).ancestors_of(sense)
    }

    fn depth_of(&self, concept: &ConceptId) -> Result<u32, OntologyError> {
        (**self).depth_of(concept)
    }

    fn label_of(&self, concept: &ConceptId) -> Result<String, OntologyError> {
        (**self).label_of(concept)
    }
}

/// Raw hypernym graph exposed by a lexicon backend.
pub trait HypernymGraph {
    fn senses_of_lemma(&self, lemma: &str) -> Result<Vec<SenseId>, OntologyError>;

    /// Direct hypernyms of `concept`. Errors with
    /// [`OntologyError::UnknownConcept`] if the concept does not exist.
    fn hypernyms_of(&self, concept: &ConceptId) -> Result<Vec<ConceptId>, OntologyError>;

    fn lemmas_of(&self, concept: &ConceptId) -> Result<Vec<String>, OntologyError>;
}

/// Adapts a [`HypernymGraph`] into an [`Ontology`] by graph traversal.
#[derive(Debug, Clone)]
pub struct GraphOntology<G> {
    graph: G,
}

impl<G: HypernymGraph> GraphOntology<G> {
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: HypernymGraph> Ontology for GraphOntology<G> {
    fn senses_of(&self, word: &str) -> Result<Vec<SenseId>, OntologyError> {
        self.graph.senses_of_lemma(word)
    }

    fn ancestors_of(&self, sense: &SenseId) -> Result<BTreeSet<ConceptId>, OntologyError> {
        hypernym_closure(&sense.as_concept(), |c| self.graph.hypernyms_of(c))
    }

    fn depth_of(&self, concept: &ConceptId) -> Result<u32, OntologyError> {
        min_depth(concept, |c| self.graph.hypernyms_of(c))
    }

    fn label_of(&self, concept: &ConceptId) -> Result<String, OntologyError> {
        let mut lemmas = self.graph.lemmas_of(concept)?;
        if lemmas.is_empty() {
            return Ok(concept.to_string());
        }
        lemmas.sort();
        lemmas.dedup();
        Ok(lemmas.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Every concept reachable from `start` over `parents`, excluding `start`.
///
/// Breadth-first with a visited set, so diamonds are expanded once and
/// cycles terminate.
pub fn hypernym_closure<F>(start: &ConceptId, mut parents: F) -> Result<BTreeSet<ConceptId>, OntologyError>
where
    F: FnMut(&ConceptId) -> Result<Vec<ConceptId>, OntologyError>,
{
    let mut seen: HashSet<ConceptId> = HashSet::from([start.clone()]);
    let mut queue: VecDeque<ConceptId> = VecDeque::from([start.clone()]);
    let mut closure = BTreeSet::new();

    while let Some(concept) = queue.pop_front() {
        for parent in parents(&concept)? {
            if seen.insert(parent.clone()) {
                closure.insert(parent.clone());
                queue.push_back(parent);
            }
        }
    }
    Ok(closure)
}

/// Length of the shortest hypernym path from `start` to a root.
pub fn min_depth<F>(start: &ConceptId, mut parents: F) -> Result<u32, OntologyError>
where
    F: FnMut(&ConceptId) -> Result<Vec<ConceptId>, OntologyError>,
{
    let mut seen: HashSet<ConceptId> = HashSet::from([start.clone()]);
    let mut queue: VecDeque<(ConceptId, u32)> = VecDeque::from([(start.clone(), 0)]);

    while let Some((concept, depth)) = queue.pop_front() {
        let up = parents(&concept)?;
        if up.is_empty() {
            return Ok(depth);
        }
        for parent in up {
            if seen.insert(parent.clone()) {
                queue.push_back((parent, depth + 1));
            }
        }
    }
    Err(OntologyError::Unrooted(start.clone()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Tiny in-memory graph: concept -> (lemmas, parents).
    struct MapGraph(HashMap<&'static str, (&'static [&'static str], &'static [&'static str])>);

    impl HypernymGraph for MapGraph {
        fn senses_of_lemma(&self, lemma: &str) -> Result<Vec<SenseId>, OntologyError> {
            let mut senses: Vec<SenseId> = self
                .0
                .iter()
                .filter(|(_, (lemmas, _))| lemmas.contains(&lemma))
                .map(|(id, _)| SenseId::from(*id))
                .collect();
            senses.sort();
            Ok(senses)
        }

        fn hypernyms_of(&self, concept: &ConceptId) -> Result<Vec<ConceptId>, OntologyError> {
            self.0
                .get(concept.as_str())
                .map(|(_, parents)| parents.iter().map(|p| ConceptId::from(*p)).collect())
                .ok_or_else(|| OntologyError::UnknownConcept(concept.clone()))
        }

        fn lemmas_of(&self, concept: &ConceptId) -> Result<Vec<String>, OntologyError> {
            self.0
                .get(concept.as_str())
                .map(|(lemmas, _)| lemmas.iter().map(|l| l.to_string()).collect())
                .ok_or_else(|| OntologyError::UnknownConcept(concept.clone()))
        }
    }

    // entity <- object <- {animal, pet} <- dog (diamond through animal/pet)
    fn diamond() -> GraphOntology<MapGraph> {
        GraphOntology::new(MapGraph(HashMap::from([
            ("entity", (&["entity"][..], &[][..])),
            ("object", (&["object", "physical_object"][..], &["entity"][..])),
            ("animal", (&["animal", "beast"][..], &["object"][..])),
            ("pet", (&["pet"][..], &["animal", "object"][..])),
            ("dog", (&["dog"][..], &["animal", "pet"][..])),
        ])))
    }

    fn ids(xs: &[&str]) -> BTreeSet<ConceptId> {
        xs.iter().map(|x| ConceptId::from(*x)).collect()
    }

    #[test]
    fn closure_over_diamond_visits_each_ancestor_once() {
        let onto = diamond();
        let ancestors = onto.ancestors_of(&SenseId::from("dog")).unwrap();
        assert_eq!(ancestors, ids(&["animal", "entity", "object", "pet"]));
    }

    #[test]
    fn depth_is_shortest_path_to_root() {
        let onto = diamond();
        assert_eq!(onto.depth_of(&"entity".into()).unwrap(), 0);
        assert_eq!(onto.depth_of(&"animal".into()).unwrap(), 2);
        // pet -> object -> entity is shorter than pet -> animal -> object -> entity
        assert_eq!(onto.depth_of(&"pet".into()).unwrap(), 2);
        assert_eq!(onto.depth_of(&"dog".into()).unwrap(), 3);
    }

    #[test]
    fn closure_terminates_on_cycle() {
        let graph = MapGraph(HashMap::from([
            ("a", (&["a"][..], &["b"][..])),
            ("b", (&["b"][..], &["a"][..])),
        ]));
        let onto = GraphOntology::new(graph);
        assert_eq!(onto.ancestors_of(&SenseId::from("a")).unwrap(), ids(&["b"]));
        assert_eq!(
            onto.depth_of(&"a".into()),
            Err(OntologyError::Unrooted("a".into()))
        );
    }

    #[test]
    fn dangling_parent_is_an_error() {
        let graph = MapGraph(HashMap::from([("a", (&["a"][..], &["ghost"][..]))]));
        let onto = GraphOntology::new(graph);
        assert_eq!(
            onto.ancestors_of(&SenseId::from("a")),
            Err(OntologyError::UnknownConcept("ghost".into()))
        );
    }

    #[test]
    fn label_joins_sorted_lemmas() {
        let onto = diamond();
        assert_eq!(onto.label_of(&"animal".into()).unwrap(), "animal, beast");
        assert_eq!(onto.label_of(&"object".into()).unwrap(), "object, physical_object");
    }

    #[test]
    fn unknown_word_has_no_senses() {
        assert!(diamond().senses_of("frobnicate123xyz").unwrap().is_empty());
    }
}
