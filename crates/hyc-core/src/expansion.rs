//! Expansion — word → senses → ancestor concepts.
//!
//! For each input word the expander fetches its senses and unions their
//! ancestor closures. Closures are memoized by sense for the lifetime of the
//! [`Expander`], since the ontology is static for one run and synonyms share
//! senses.

use crate::error::ClusterError;
use crate::ontology::Ontology;
use crate::types::{ConceptId, SenseId, Word};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

/// Output of the expansion stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Every recognised word and the candidate concepts it reaches. A word
    /// whose senses have no ancestors maps to an empty set.
    pub reached: BTreeMap<Word, BTreeSet<ConceptId>>,
    /// Words with zero senses in the ontology.
    pub not_found: BTreeSet<Word>,
}

impl Expansion {
    /// Distinct concepts touched by any word.
    pub fn concepts(&self) -> BTreeSet<&ConceptId> {
        self.reached.values().flatten().collect()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&Word, &ConceptId)> {
        self.reached
            .iter()
            .flat_map(|(word, concepts)| concepts.iter().map(move |c| (word, c)))
    }
}

/// Counters reported after a run, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    pub senses_visited: usize,
    pub closure_cache_hits: usize,
}

pub struct Expander<'o, O: ?Sized> {
    ontology: &'o O,
    include_own_senses: bool,
    closures: HashMap<SenseId, Rc<BTreeSet<ConceptId>>>,
    stats: ExpansionStats,
}

impl<'o, O: Ontology + ?Sized> Expander<'o, O> {
    pub fn new(ontology: &'o O) -> Self {
        Self {
            ontology,
            include_own_senses: false,
            closures: HashMap::new(),
            stats: ExpansionStats::default(),
        }
    }

    /// Also count each sense as a cluster candidate for its own word.
    pub fn include_own_senses(mut self, yes: bool) -> Self {
        self.include_own_senses = yes;
        self
    }

    pub fn stats(&self) -> ExpansionStats {
        self.stats
    }

    /// Expand every word. Aborts on the first lookup failure; no partial
    /// result is returned.
    pub fn expand<'w, I>(&mut self, words: I) -> Result<Expansion, ClusterError>
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut out = Expansion::default();
        for word in words {
            match self.expand_word(word)? {
                Some(concepts) => {
                    out.reached.insert(word.clone(), concepts);
                }
                None => {
                    tracing::debug!(word = %word, "no senses; skipping");
                    out.not_found.insert(word.clone());
                }
            }
        }
        tracing::debug!(
            recognised = out.reached.len(),
            not_found = out.not_found.len(),
            senses = self.stats.senses_visited,
            cache_hits = self.stats.closure_cache_hits,
            "expansion done"
        );
        Ok(out)
    }

    /// Candidate concepts for one word, or `None` if the word has no senses.
    pub fn expand_word(&mut self, word: &str) -> Result<Option<BTreeSet<ConceptId>>, ClusterError> {
        let senses = self
            .ontology
            .senses_of(word)
            .map_err(|e| ClusterError::lookup(word, e))?;
        if senses.is_empty() {
            return Ok(None);
        }

        let mut concepts = BTreeSet::new();
        for sense in &senses {
            self.stats.senses_visited += 1;
            let closure = self.closure(sense).map_err(|e| ClusterError::lookup(word, e))?;
            concepts.extend(closure.iter().cloned());
            if self.include_own_senses {
                concepts.insert(sense.as_concept());
            }
        }
        Ok(Some(concepts))
    }

    fn closure(
        &mut self,
        sense: &SenseId,
    ) -> Result<Rc<BTreeSet<ConceptId>>, crate::error::OntologyError> {
        if let Some(hit) = self.closures.get(sense) {
            self.stats.closure_cache_hits += 1;
            return Ok(Rc::clone(hit));
        }
        let closure = Rc::new(self.ontology.ancestors_of(sense)?);
        self.closures.insert(sense.clone(), Rc::clone(&closure));
        Ok(closure)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
