//! JSON lexicon backend.
//!
//! File layout:
//!
//! ```json
//! {
//!   "synsets": {
//!     "cat.n.01":    { "lemmas": ["cat", "true_cat"], "hypernyms": ["feline.n.01"] },
//!     "feline.n.01": { "lemmas": ["feline", "felid"], "hypernyms": ["carnivore.n.01"] }
//!   }
//! }
//! ```
//!
//! Lemma → sense lookup goes through an FST built once at load time.
//! Hypernym references are not checked on load; a dangling one surfaces as
//! [`OntologyError::UnknownConcept`] when traversal reaches it.

use crate::LexiconError;
use hyc_core::{ConceptId, HypernymGraph, OntologyError, SenseId};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct LexiconFile {
    synsets: HashMap<String, SynsetEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SynsetEntry {
    #[serde(default)]
    lemmas: Vec<String>,
    #[serde(default)]
    hypernyms: Vec<String>,
}

/// In-memory lexicon loaded from a JSON file.
pub struct JsonLexicon {
    synsets: HashMap<String, SynsetEntry>,
    /// lemma → slot in `senses`
    index: fst::Map<Vec<u8>>,
    senses: Vec<Vec<SenseId>>,
}

impl std::fmt::Debug for JsonLexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLexicon")
            .field("synsets", &self.synsets.len())
            .field("lemmas", &self.senses.len())
            .finish()
    }
}

impl JsonLexicon {
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&text).map_err(|e| match e {
            LexiconError::Json { source, .. } => LexiconError::Json {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), ?lexicon, "lexicon loaded");
        Ok(lexicon)
    }

    pub fn from_json(text: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile =
            serde_json::from_str(text).map_err(|source| LexiconError::Json { path: None, source })?;
        Self::from_synsets(file.synsets)
    }

    fn from_synsets(synsets: HashMap<String, SynsetEntry>) -> Result<Self, LexiconError> {
        // FST keys must be inserted in lexicographic order.
        let mut by_lemma: BTreeMap<&str, Vec<SenseId>> = BTreeMap::new();
        for (id, entry) in &synsets {
            for lemma in &entry.lemmas {
                by_lemma.entry(lemma.as_str()).or_default().push(SenseId::new(id.clone()));
            }
        }

        let mut builder = fst::MapBuilder::memory();
        let mut senses = Vec::with_capacity(by_lemma.len());
        for (slot, (lemma, mut ids)) in by_lemma.into_iter().enumerate() {
            ids.sort();
            ids.dedup();
            builder.insert(lemma, slot as u64)?;
            senses.push(ids);
        }
        let index = fst::Map::new(builder.into_inner()?)?;

        Ok(Self {
            synsets,
            index,
            senses,
        })
    }

    pub fn synset_count(&self) -> usize {
        self.synsets.len()
    }

    fn entry(&self, concept: &ConceptId) -> Result<&SynsetEntry, OntologyError> {
        self.synsets
            .get(concept.as_str())
            .ok_or_else(|| OntologyError::UnknownConcept(concept.clone()))
    }

    fn lookup(&self, lemma: &str) -> Option<&[SenseId]> {
        self.index
            .get(lemma)
            .and_then(|slot| self.senses.get(slot as usize))
            .map(Vec::as_slice)
    }
}

impl HypernymGraph for JsonLexicon {
    /// Exact lemma first, then its lowercase form.
    fn senses_of_lemma(&self, lemma: &str) -> Result<Vec<SenseId>, OntologyError> {
        let hit = self
            .lookup(lemma)
            .or_else(|| self.lookup(&lemma.to_lowercase()));
        Ok(hit.map(<[SenseId]>::to_vec).unwrap_or_default())
    }

    fn hypernyms_of(&self, concept: &ConceptId) -> Result<Vec<ConceptId>, OntologyError> {
        Ok(self
            .entry(concept)?
            .hypernyms
            .iter()
            .map(|h| ConceptId::new(h.clone()))
            .collect())
    }

    fn lemmas_of(&self, concept: &ConceptId) -> Result<Vec<String>, OntologyError> {
        Ok(self.entry(concept)?.lemmas.clone())
    }
}
