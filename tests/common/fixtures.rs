//! Static fixtures used across harnesses: stub ontologies, lexicon files and
//! word lists.

use super::builders::StubOntology;
use std::path::{Path, PathBuf};

/// "cat" and "dog" share exactly one ancestor, ANIMAL at depth 3.
pub fn cat_dog_stub() -> StubOntology {
    StubOntology::builder()
        .concept("ANIMAL", 3)
        .concept("FELINE", 4)
        .concept("CANINE", 4)
        .sense("cat.n.01", &["FELINE", "ANIMAL"])
        .sense("dog.n.01", &["CANINE", "ANIMAL"])
        .word("cat", &["cat.n.01"])
        .word("dog", &["dog.n.01"])
        .build()
}

/// "bank" has two senses whose ancestor sets are disjoint; "shore" shares
/// the river sense.
pub fn polysemy_stub() -> StubOntology {
    StubOntology::builder()
        .concept("SLOPE", 4)
        .concept("LANDFORM", 3)
        .concept("INSTITUTION", 5)
        .concept("ORGANIZATION", 4)
        .concept("ENTITY", 0)
        .sense("bank.n.01", &["SLOPE", "LANDFORM"])
        .sense("bank.n.02", &["INSTITUTION", "ORGANIZATION"])
        .sense("bank.n.03", &["SLOPE", "ENTITY"])
        .sense("shore.n.01", &["LANDFORM", "ENTITY"])
        .word("bank", &["bank.n.01", "bank.n.02", "bank.n.03"])
        .word("shore", &["shore.n.01"])
        .build()
}

/// A small lexicon in the JSON file format, including a diamond (dog is both
/// a canine and a domestic animal).
pub const LEXICON_JSON: &str = r#"{
  "synsets": {
    "entity.n.01":          { "lemmas": ["entity"] },
    "organism.n.01":        { "lemmas": ["organism", "being"], "hypernyms": ["entity.n.01"] },
    "animal.n.01":          { "lemmas": ["animal", "beast"], "hypernyms": ["organism.n.01"] },
    "domestic_animal.n.01": { "lemmas": ["domestic_animal"], "hypernyms": ["animal.n.01"] },
    "carnivore.n.01":       { "lemmas": ["carnivore"], "hypernyms": ["animal.n.01"] },
    "feline.n.01":          { "lemmas": ["feline", "felid"], "hypernyms": ["carnivore.n.01"] },
    "canine.n.02":          { "lemmas": ["canine", "canid"], "hypernyms": ["carnivore.n.01"] },
    "cat.n.01":             { "lemmas": ["cat"], "hypernyms": ["feline.n.01", "domestic_animal.n.01"] },
    "dog.n.01":             { "lemmas": ["dog"], "hypernyms": ["canine.n.02", "domestic_animal.n.01"] },
    "wolf.n.01":            { "lemmas": ["wolf"], "hypernyms": ["canine.n.02"] },
    "hot_dog.n.01":         { "lemmas": ["hot_dog", "frank"], "hypernyms": ["entity.n.01"] }
  }
}"#;

/// A lexicon whose "ghost" sense points at a synset that does not exist.
pub const DANGLING_LEXICON_JSON: &str = r#"{
  "synsets": {
    "entity.n.01": { "lemmas": ["entity"] },
    "cat.n.01":    { "lemmas": ["cat"], "hypernyms": ["entity.n.01"] },
    "ghost.n.01":  { "lemmas": ["ghost"], "hypernyms": ["spirit.n.99"] }
  }
}"#;

pub const WORDS_ANIMALS: &str = "cat dog wolf\nzebra\n";

/// Mixed words for the built-in taxonomy: two polysemous words, one unknown.
pub const WORDS_BUILTIN: &str = "cat dog wolf tiger\nmouse keyboard\nbank zebra\n";

// ---------------------------------------------------------------------------
// Fixture file helpers
// ---------------------------------------------------------------------------

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
