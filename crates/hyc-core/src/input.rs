//! Input word parsing.
//!
//! Splits raw text into words according to [`InputConfig`], folds case if
//! asked to, and de-duplicates while preserving first occurrence.

use crate::config::{CaseFolding, InputConfig, InputMode};
use crate::types::Word;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Words parsed from one input, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<Word>,
    /// Number of tokens dropped because they repeated an earlier word.
    pub duplicates: usize,
}

impl WordList {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

fn phrase_separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s\-]+").expect("phrase separator regex is valid"))
}

/// Parse `text` into a [`WordList`].
///
/// In [`InputMode::Line`] each non-blank line is one phrase and its internal
/// whitespace/hyphen runs become `_`, the lexicon's multi-word form.
pub fn parse_words(text: &str, cfg: &InputConfig) -> WordList {
    let tokens: Box<dyn Iterator<Item = String>> = match cfg.mode {
        InputMode::Whitespace => Box::new(text.split_whitespace().map(str::to_string)),
        InputMode::Line => Box::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(|l| phrase_separators().replace_all(l, "_").into_owned()),
        ),
    };

    let mut seen = HashSet::new();
    let mut list = WordList::default();
    for token in tokens {
        let word = match cfg.case {
            CaseFolding::Preserve => token,
            CaseFolding::Lower => token.to_lowercase(),
        };
        if seen.insert(word.clone()) {
            list.words.push(word);
        } else {
            list.duplicates += 1;
        }
    }

    if list.duplicates > 0 {
        tracing::warn!(duplicates = list.duplicates, "some input words are repeated");
    }
    list
}
