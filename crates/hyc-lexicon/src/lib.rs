//! hyc-lexicon — lexical ontology backends for hyc.
//!
//! Each backend implements [`hyc_core::HypernymGraph`] and is exposed to the
//! pipeline through [`hyc_core::GraphOntology`].

pub mod builtin;
pub mod json;

pub use builtin::BuiltinLexicon;
pub use json::JsonLexicon;

use hyc_core::{GraphOntology, Ontology};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("cannot read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon{}: {source}", display_path(.path))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot build lemma index: {0}")]
    Index(#[from] fst::Error),
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Where the ontology comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    Builtin,
    Json(PathBuf),
}

/// Open `source` as a ready-to-use [`Ontology`].
pub fn open(source: &LexiconSource) -> Result<Box<dyn Ontology>, LexiconError> {
    match source {
        LexiconSource::Builtin => {
            tracing::debug!(synsets = BuiltinLexicon.synset_count(), "using built-in taxonomy");
            Ok(Box::new(GraphOntology::new(BuiltinLexicon)))
        }
        LexiconSource::Json(path) => Ok(Box::new(GraphOntology::new(JsonLexicon::load(path)?))),
    }
}
