//! hyc — hypernym clustering.
//!
//! Groups a list of words into overlapping clusters, one per ancestor
//! concept their senses share in a WordNet-style lexicon, then keeps the
//! clusters that are specific enough (`min_depth`) and neither too narrow nor
//! too broad (`min_size`..=`max_size`).
//!
//! # Architecture
//!
//! ```text
//! words file ──► input ──► Clusterer ──► Report ──► stdout / --output
//!                            │
//!           lexicon ──► Ontology (hyc-lexicon)
//! ```
//!
//! This crate only wires the layers together; the stages live in `hyc-core`
//! and the lexicon backends in `hyc-lexicon`.

use anyhow::Context;
use hyc_core::config::{ReportFormat, Settings};
use hyc_core::input::parse_words;
use hyc_core::{ClusterError, Clusterer, Ontology, Report};
use hyc_lexicon::LexiconSource;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

pub use hyc_core;
pub use hyc_lexicon;

/// Where the input words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordsSource {
    Stdin,
    File(PathBuf),
}

/// Everything one invocation needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub words: WordsSource,
    pub lexicon: LexiconSource,
    pub settings: Settings,
    /// Write the report here instead of stdout.
    pub output: Option<PathBuf>,
}

/// Cluster the words in `text` against `ontology`.
///
/// An empty word list is not fatal: it is logged and yields an empty report.
pub fn cluster_text(
    text: &str,
    settings: &Settings,
    ontology: &dyn Ontology,
) -> Result<Report, ClusterError> {
    let filter = settings.filter_config()?;
    let words = parse_words(text, &settings.input);
    tracing::info!(words = words.len(), duplicates = words.duplicates, "input parsed");

    let run = Clusterer::new(ontology, filter)
        .include_own_senses(settings.expansion.include_own_senses)
        .run(&words.words);

    match run {
        Ok(run) => Report::build(&run, ontology),
        Err(ClusterError::EmptyInput) => {
            tracing::warn!("input word list is empty; nothing to cluster");
            Ok(Report::empty(filter))
        }
        Err(e) => Err(e),
    }
}

/// Full invocation: validate settings, read words, open the lexicon, cluster
/// and write the rendered report. Returns the rendered report.
pub fn run(opts: &RunOptions) -> anyhow::Result<String> {
    // Fail on bad filter parameters before touching any file or lexicon.
    opts.settings.filter_config()?;

    let text = read_words(&opts.words)?;
    let ontology = hyc_lexicon::open(&opts.lexicon).context("cannot open lexicon")?;
    let report = cluster_text(&text, &opts.settings, ontology.as_ref())?;
    let rendered = report
        .render(opts.settings.report.format)
        .context("cannot render report")?;

    match &opts.output {
        Some(path) => std::fs::write(path, &rendered)
            .with_context(|| format!("cannot write report to {}", path.display()))?,
        None => {
            print!("{rendered}");
            if opts.settings.report.format == ReportFormat::Json {
                println!();
            }
        }
    }
    Ok(rendered)
}

fn read_words(source: &WordsSource) -> anyhow::Result<String> {
    match source {
        WordsSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("cannot read words from stdin")?;
            Ok(text)
        }
        WordsSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read words from {}", path.display())),
    }
}

/// Exit status for a failed run: 2 for configuration errors, 3 for ontology
/// lookup failures, 1 for everything else.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<ClusterError>() {
        Some(ClusterError::InvalidConfiguration { .. }) => ExitCode::from(2),
        Some(ClusterError::LookupFailure { .. }) => ExitCode::from(3),
        _ => ExitCode::FAILURE,
    }
}
