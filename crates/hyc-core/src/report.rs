//! Report — ranked, labelled view of a [`ClusterRun`].
//!
//! Clusters are ranked by decreasing size, ties broken by concept id. The
//! text form is the `Display` impl; the JSON form is the serde derive.

use crate::config::{FilterConfig, ReportFormat};
use crate::error::ClusterError;
use crate::ontology::Ontology;
use crate::pipeline::ClusterRun;
use crate::types::{ConceptId, Word};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub filter: FilterConfig,
    pub summary: Summary,
    pub clusters: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub words: usize,
    pub clusters: usize,
    pub not_found: Vec<Word>,
    pub no_candidates: Vec<Word>,
    pub excluded_by_depth: Vec<Word>,
    pub excluded_by_size: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub rank: usize,
    pub concept: ConceptId,
    pub label: String,
    pub depth: u32,
    pub size: usize,
    pub members: Vec<Word>,
}

impl Report {
    /// Rank and label the surviving clusters of `run`.
    pub fn build<O: Ontology + ?Sized>(run: &ClusterRun, ontology: &O) -> Result<Self, ClusterError> {
        let mut entries = Vec::with_capacity(run.clusters().len());
        for (concept, members) in run.clusters().iter() {
            let label = ontology
                .label_of(concept)
                .map_err(|e| ClusterError::lookup(concept.as_str(), e))?;
            // filtering recorded a depth for every concept it examined
            let depth = run.outcome.depths[concept];
            entries.push(ReportEntry {
                rank: 0,
                concept: concept.clone(),
                label,
                depth,
                size: members.len(),
                members: members.iter().cloned().collect(),
            });
        }

        entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.concept.cmp(&b.concept)));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        Ok(Self {
            filter: run.filter,
            summary: Summary {
                words: run.input_words,
                clusters: entries.len(),
                not_found: run.words.not_found.iter().cloned().collect(),
                no_candidates: run.words.no_candidates.iter().cloned().collect(),
                excluded_by_depth: run.words.excluded_by_depth.iter().cloned().collect(),
                excluded_by_size: run.words.excluded_by_size.iter().cloned().collect(),
            },
            clusters: entries,
        })
    }

    /// Report for a run that had no input words.
    pub fn empty(filter: FilterConfig) -> Self {
        Self {
            filter,
            summary: Summary::default(),
            clusters: Vec::new(),
        }
    }

    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

fn word_list(words: &[Word]) -> String {
    if words.is_empty() {
        "0".to_string()
    } else {
        format!("{} ({})", words.len(), words.join(", "))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self
            .filter
            .max_size
            .map_or_else(|| "unbounded".to_string(), |m| m.to_string());
        writeln!(f, "words: {}", self.summary.words)?;
        writeln!(f, "clusters: {}", self.summary.clusters)?;
        writeln!(
            f,
            "filter: min_depth={} min_size={} max_size={}",
            self.filter.min_depth, self.filter.min_size, max
        )?;
        writeln!(f, "not found: {}", word_list(&self.summary.not_found))?;
        writeln!(f, "no candidates: {}", word_list(&self.summary.no_candidates))?;
        writeln!(f, "excluded by depth: {}", word_list(&self.summary.excluded_by_depth))?;
        writeln!(f, "excluded by size: {}", word_list(&self.summary.excluded_by_size))?;

        for entry in &self.clusters {
            writeln!(f)?;
            writeln!(
                f,
                "{})  [depth = {}] {} ({}): {} elements",
                entry.rank, entry.depth, entry.label, entry.concept, entry.size
            )?;
            writeln!(f, "\t{}", entry.members.join(", "))?;
        }
        Ok(())
    }
}
