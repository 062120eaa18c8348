//! hyc-core — hypernym clustering core library.
//!
//! Groups input words into overlapping clusters keyed by the ancestor
//! concepts ("is-a" generalisations) that their senses share in a lexical
//! ontology.
//!
//! # Architecture
//!
//! ```text
//! words ──► Expansion ──► Aggregation ──► Filtering ──► Report
//!              │                             │
//!              └──────── Ontology ◄──────────┘
//! ```
//!
//! Stages run in sequence on one thread. The [`Ontology`] is always passed
//! in explicitly; nothing here reaches for a global lexical database.

pub mod aggregation;
pub mod config;
pub mod error;
pub mod expansion;
pub mod filtering;
pub mod input;
pub mod ontology;
pub mod pipeline;
pub mod report;
pub mod types;

pub use config::{FilterConfig, Settings};
pub use error::{ClusterError, OntologyError};
pub use ontology::{GraphOntology, HypernymGraph, Ontology};
pub use pipeline::{ClusterRun, Clusterer};
pub use report::Report;
pub use types::{Cluster, ClusterSet, ConceptId, SenseId, Word};
