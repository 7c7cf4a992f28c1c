//! Word set used by the word-based permutators
//!
//! Built once per generation run from a static wordlist (bundled, file or
//! caller-supplied lines) plus tokens mined from the input domains.

use crate::domain::partition_all;
use crate::error::{DnsgenError, Result};
use crate::types::WordlistSource;
use std::collections::BTreeSet;

/// Wordlist compiled into the binary
const BUNDLED_WORDLIST: &str = include_str!("../wordlists/words.txt");

/// Number of static words kept in fast mode
pub const FAST_WORDLIST_LIMIT: usize = 10;

/// Deduplicated, lowercase, sorted set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
}

impl WordSet {
    /// Build the word set for a run.
    ///
    /// Fails with [`DnsgenError::Resource`] when a wordlist file cannot be read.
    pub fn build<S: AsRef<str>>(
        source: &WordlistSource,
        domains: &[S],
        wordlen: usize,
        fast: bool,
    ) -> Result<Self> {
        let lines = load_wordlist(source)?;
        let words = build_words(&lines, domains, wordlen, fast);
        tracing::debug!(
            source = %source,
            static_lines = lines.len(),
            words = words.len(),
            fast,
            "Word set built"
        );
        Ok(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn is_subset(&self, other: &WordSet) -> bool {
        self.words.is_subset(&other.words)
    }
}

impl FromIterator<String> for WordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// Read the raw lines of a wordlist source
pub fn load_wordlist(source: &WordlistSource) -> Result<Vec<String>> {
    match source {
        WordlistSource::Bundled => Ok(BUNDLED_WORDLIST.lines().map(str::to_string).collect()),
        WordlistSource::File(path) => std::fs::read_to_string(path)
            .map(|content| content.lines().map(str::to_string).collect())
            .map_err(|e| DnsgenError::resource(e.to_string(), Some(path.display().to_string()))),
        WordlistSource::Lines(lines) => Ok(lines.clone()),
    }
}

/// Drop blank and `#` comment lines, lowercase the rest
pub fn filter_wordlist<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Mine naming tokens from the subdomain labels of `domains`.
///
/// Each label is kept whole and also split on `-`; tokens shorter than
/// `wordlen` are discarded. Roots never contribute.
pub fn extract_custom_words<S: AsRef<str>>(domains: &[S], wordlen: usize) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();

    for parts in partition_all(domains.iter().map(|d| d.as_ref())) {
        for label in parts.labels() {
            let label = label.to_lowercase();
            for piece in label.split('-') {
                if piece.len() >= wordlen {
                    tokens.insert(piece.to_string());
                }
            }
            if label.len() >= wordlen {
                tokens.insert(label);
            }
        }
    }

    tokens
}

/// Merge the filtered wordlist with mined tokens.
///
/// In fast mode only the first [`FAST_WORDLIST_LIMIT`] static entries are
/// kept; mined tokens are never truncated.
pub fn build_words<L: AsRef<str>, D: AsRef<str>>(
    wordlist_lines: &[L],
    domains: &[D],
    wordlen: usize,
    fast: bool,
) -> WordSet {
    let mut words = filter_wordlist(wordlist_lines);
    if fast {
        words.truncate(FAST_WORDLIST_LIMIT);
    }

    let mut set: WordSet = words.into_iter().collect();
    set.words.extend(extract_custom_words(domains, wordlen));
    set
}
