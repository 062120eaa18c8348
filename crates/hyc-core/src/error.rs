//! Error taxonomy for the clustering pipeline.

use crate::types::ConceptId;

/// Failures reported by an ontology backend.
///
/// "Word unknown" is not an error: `senses_of` returns an empty set for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OntologyError {
    #[error("unknown concept `{0}`")]
    UnknownConcept(ConceptId),

    #[error("concept `{0}` has no path to a root")]
    Unrooted(ConceptId),

    #[error("ontology backend unavailable: {0}")]
    Backend(String),
}

/// Fatal pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("invalid configuration: {parameter}: {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    /// `subject` names the word (during expansion) or concept (during
    /// filtering) whose lookup failed.
    #[error("ontology lookup failed for `{subject}`: {source}")]
    LookupFailure {
        subject: String,
        #[source]
        source: OntologyError,
    },

    #[error("input word list is empty")]
    EmptyInput,
}

impl ClusterError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }

    pub(crate) fn lookup(subject: impl Into<String>, source: OntologyError) -> Self {
        Self::LookupFailure {
            subject: subject.into(),
            source,
        }
    }
}
