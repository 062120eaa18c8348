//! Built-in sample taxonomy.
//!
//! A small WordNet-shaped noun hierarchy compiled into perfect-hash maps, so
//! the binary works without a lexicon file and tests have a realistic graph
//! with multiple parents and polysemous words. Two maps are kept in sync by
//! hand: `SYNSETS` (id → lemmas, hypernyms) and `LEMMAS` (lemma → ids).

use hyc_core::{ConceptId, HypernymGraph, OntologyError, SenseId};
use phf::phf_map;

struct StaticSynset {
    lemmas: &'static [&'static str],
    hypernyms: &'static [&'static str],
}

const fn s(lemmas: &'static [&'static str], hypernyms: &'static [&'static str]) -> StaticSynset {
    StaticSynset { lemmas, hypernyms }
}

static SYNSETS: phf::Map<&'static str, StaticSynset> = phf_map! {
    "entity.n.01" => s(&["entity"], &[]),
    "physical_entity.n.01" => s(&["physical_entity"], &["entity.n.01"]),
    "abstraction.n.06" => s(&["abstraction", "abstract_entity"], &["entity.n.01"]),
    "object.n.01" => s(&["object", "physical_object"], &["physical_entity.n.01"]),
    "whole.n.02" => s(&["whole", "unit"], &["object.n.01"]),
    "living_thing.n.01" => s(&["living_thing", "animate_thing"], &["whole.n.02"]),
    "organism.n.01" => s(&["organism", "being"], &["living_thing.n.01"]),
    "animal.n.01" => s(&["animal", "animate_being", "beast", "brute", "creature", "fauna"], &["organism.n.01"]),
    "domestic_animal.n.01" => s(&["domestic_animal", "domesticated_animal"], &["animal.n.01"]),
    "chordate.n.01" => s(&["chordate"], &["animal.n.01"]),
    "vertebrate.n.01" => s(&["vertebrate", "craniate"], &["chordate.n.01"]),
    "mammal.n.01" => s(&["mammal", "mammalian"], &["vertebrate.n.01"]),
    "placental.n.01" => s(&["placental", "placental_mammal", "eutherian", "eutherian_mammal"], &["mammal.n.01"]),
    "carnivore.n.01" => s(&["carnivore"], &["placental.n.01"]),
    "feline.n.01" => s(&["feline", "felid"], &["carnivore.n.01"]),
    "cat.n.01" => s(&["cat", "true_cat"], &["feline.n.01"]),
    "big_cat.n.01" => s(&["big_cat", "cat"], &["feline.n.01"]),
    "tiger.n.02" => s(&["tiger", "Panthera_tigris"], &["big_cat.n.01"]),
    "canine.n.02" => s(&["canine", "canid"], &["carnivore.n.01"]),
    "dog.n.01" => s(&["dog", "domestic_dog", "Canis_familiaris"], &["canine.n.02", "domestic_animal.n.01"]),
    "wolf.n.01" => s(&["wolf"], &["canine.n.02"]),
    "rodent.n.01" => s(&["rodent", "gnawer"], &["placental.n.01"]),
    "mouse.n.01" => s(&["mouse"], &["rodent.n.01"]),
    "bird.n.01" => s(&["bird"], &["vertebrate.n.01"]),
    "artifact.n.01" => s(&["artifact", "artefact"], &["whole.n.02"]),
    "instrumentality.n.03" => s(&["instrumentality", "instrumentation"], &["artifact.n.01"]),
    "device.n.01" => s(&["device"], &["instrumentality.n.03"]),
    "electronic_device.n.01" => s(&["electronic_device"], &["device.n.01"]),
    "mouse.n.04" => s(&["mouse", "computer_mouse"], &["electronic_device.n.01"]),
    "keyboard.n.01" => s(&["keyboard"], &["device.n.01"]),
    "geological_formation.n.01" => s(&["geological_formation", "formation"], &["object.n.01"]),
    "slope.n.01" => s(&["slope", "incline", "side"], &["geological_formation.n.01"]),
    "bank.n.01" => s(&["bank"], &["slope.n.01"]),
    "group.n.01" => s(&["group", "grouping"], &["abstraction.n.06"]),
    "social_group.n.01" => s(&["social_group"], &["group.n.01"]),
    "organization.n.01" => s(&["organization", "organisation"], &["social_group.n.01"]),
    "institution.n.01" => s(&["institution", "establishment"], &["organization.n.01"]),
    "financial_institution.n.01" => s(&["financial_institution", "financial_organization"], &["institution.n.01"]),
    "depository_financial_institution.n.01" => s(&["depository_financial_institution", "bank", "banking_concern", "banking_company"], &["financial_institution.n.01"]),
};

static LEMMAS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "entity" => &["entity.n.01"],
    "physical_entity" => &["physical_entity.n.01"],
    "abstraction" => &["abstraction.n.06"],
    "abstract_entity" => &["abstraction.n.06"],
    "object" => &["object.n.01"],
    "physical_object" => &["object.n.01"],
    "whole" => &["whole.n.02"],
    "unit" => &["whole.n.02"],
    "living_thing" => &["living_thing.n.01"],
    "animate_thing" => &["living_thing.n.01"],
    "organism" => &["organism.n.01"],
    "being" => &["organism.n.01"],
    "animal" => &["animal.n.01"],
    "animate_being" => &["animal.n.01"],
    "beast" => &["animal.n.01"],
    "brute" => &["animal.n.01"],
    "creature" => &["animal.n.01"],
    "fauna" => &["animal.n.01"],
    "domestic_animal" => &["domestic_animal.n.01"],
    "domesticated_animal" => &["domestic_animal.n.01"],
    "chordate" => &["chordate.n.01"],
    "vertebrate" => &["vertebrate.n.01"],
    "craniate" => &["vertebrate.n.01"],
    "mammal" => &["mammal.n.01"],
    "mammalian" => &["mammal.n.01"],
    "placental" => &["placental.n.01"],
    "placental_mammal" => &["placental.n.01"],
    "eutherian" => &["placental.n.01"],
    "eutherian_mammal" => &["placental.n.01"],
    "carnivore" => &["carnivore.n.01"],
    "feline" => &["feline.n.01"],
    "felid" => &["feline.n.01"],
    "cat" => &["cat.n.01", "big_cat.n.01"],
    "true_cat" => &["cat.n.01"],
    "big_cat" => &["big_cat.n.01"],
    "tiger" => &["tiger.n.02"],
    "Panthera_tigris" => &["tiger.n.02"],
    "canine" => &["canine.n.02"],
    "canid" => &["canine.n.02"],
    "dog" => &["dog.n.01"],
    "domestic_dog" => &["dog.n.01"],
    "Canis_familiaris" => &["dog.n.01"],
    "wolf" => &["wolf.n.01"],
    "rodent" => &["rodent.n.01"],
    "gnawer" => &["rodent.n.01"],
    "mouse" => &["mouse.n.01", "mouse.n.04"],
    "computer_mouse" => &["mouse.n.04"],
    "bird" => &["bird.n.01"],
    "artifact" => &["artifact.n.01"],
    "artefact" => &["artifact.n.01"],
    "instrumentality" => &["instrumentality.n.03"],
    "instrumentation" => &["instrumentality.n.03"],
    "device" => &["device.n.01"],
    "electronic_device" => &["electronic_device.n.01"],
    "keyboard" => &["keyboard.n.01"],
    "geological_formation" => &["geological_formation.n.01"],
    "formation" => &["geological_formation.n.01"],
    "slope" => &["slope.n.01"],
    "incline" => &["slope.n.01"],
    "side" => &["slope.n.01"],
    "bank" => &["bank.n.01", "depository_financial_institution.n.01"],
    "group" => &["group.n.01"],
    "grouping" => &["group.n.01"],
    "social_group" => &["social_group.n.01"],
    "organization" => &["organization.n.01"],
    "organisation" => &["organization.n.01"],
    "institution" => &["institution.n.01"],
    "establishment" => &["institution.n.01"],
    "financial_institution" => &["financial_institution.n.01"],
    "financial_organization" => &["financial_institution.n.01"],
    "depository_financial_institution" => &["depository_financial_institution.n.01"],
    "banking_concern" => &["depository_financial_institution.n.01"],
    "banking_company" => &["depository_financial_institution.n.01"],
};

/// The compiled-in sample taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLexicon;

impl BuiltinLexicon {
    pub fn synset_count(&self) -> usize {
        SYNSETS.len()
    }

    fn entry(concept: &ConceptId) -> Result<&'static StaticSynset, OntologyError> {
        SYNSETS
            .get(concept.as_str())
            .ok_or_else(|| OntologyError::UnknownConcept(concept.clone()))
    }
}

impl HypernymGraph for BuiltinLexicon {
    fn senses_of_lemma(&self, lemma: &str) -> Result<Vec<SenseId>, OntologyError> {
        let ids = LEMMAS
            .get(lemma)
            .or_else(|| LEMMAS.get(lemma.to_lowercase().as_str()))
            .copied()
            .unwrap_or_default();
        Ok(ids.iter().map(|id| SenseId::from(*id)).collect())
    }

    fn hypernyms_of(&self, concept: &ConceptId) -> Result<Vec<ConceptId>, OntologyError> {
        Ok(Self::entry(concept)?
            .hypernyms
            .iter()
            .map(|h| ConceptId::from(*h))
            .collect())
    }

    fn lemmas_of(&self, concept: &ConceptId) -> Result<Vec<String>, OntologyError> {
        Ok(Self::entry(concept)?
            .lemmas
            .iter()
            .map(|l| l.to_string())
            .collect())
    }
}
