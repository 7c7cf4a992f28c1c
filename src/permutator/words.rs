//! Word-based permutators

use crate::domain::join_host;
use crate::words::WordSet;

/// Shortest word that `replace_word_with_word` looks for in the labels
pub const MIN_REPLACE_LEN: usize = 4;

/// Insert each word as a new label at every position.
///
/// `test.1.foo.example.com` -> `WORD.test.1.foo.example.com`,
/// `test.WORD.1.foo.example.com`, ..., `test.1.foo.WORD.example.com`
pub fn insert_word_every_index(
    labels: &[String],
    root: &str,
    words: &WordSet,
    _num_count: usize,
) -> Vec<String> {
    let mut domains = Vec::with_capacity(words.len() * (labels.len() + 1));

    for word in words.iter() {
        for i in 0..=labels.len() {
            let mut tmp = labels.to_vec();
            tmp.insert(i, word.to_string());
            domains.push(join_host(&tmp, root));
        }
    }

    domains
}

/// Prefix every label with `WORD` and `WORD-`
pub fn prepend_word_every_index(
    labels: &[String],
    root: &str,
    words: &WordSet,
    _num_count: usize,
) -> Vec<String> {
    rewrite_every_label(labels, root, words, |word, label| {
        [format!("{}{}", word, label), format!("{}-{}", word, label)]
    })
}

/// Suffix every label with `WORD` and `-WORD`
pub fn append_word_every_index(
    labels: &[String],
    root: &str,
    words: &WordSet,
    _num_count: usize,
) -> Vec<String> {
    rewrite_every_label(labels, root, words, |word, label| {
        [format!("{}{}", label, word), format!("{}-{}", label, word)]
    })
}

fn rewrite_every_label<F>(labels: &[String], root: &str, words: &WordSet, variants: F) -> Vec<String>
where
    F: Fn(&str, &str) -> [String; 2],
{
    let mut domains = Vec::with_capacity(words.len() * labels.len() * 2);

    for word in words.iter() {
        for i in 0..labels.len() {
            for variant in variants(word, &labels[i]) {
                let mut tmp = labels.to_vec();
                tmp[i] = variant;
                domains.push(join_host(&tmp, root));
            }
        }
    }

    domains
}

/// Swap a known word found in the labels for every other word.
///
/// Only words of at least [`MIN_REPLACE_LEN`] characters are looked for, and
/// only their first occurrence is replaced.
pub fn replace_word_with_word(
    labels: &[String],
    root: &str,
    words: &WordSet,
    _num_count: usize,
) -> Vec<String> {
    let joined = labels.join(".");
    if joined.is_empty() {
        return Vec::new();
    }

    let mut domains = Vec::new();

    for found in words.iter().filter(|w| w.len() >= MIN_REPLACE_LEN) {
        if !joined.contains(found) {
            continue;
        }
        for alt in words.iter().filter(|alt| *alt != found) {
            domains.push(format!("{}.{}", joined.replacen(found, alt, 1), root));
        }
    }

    domains
}
