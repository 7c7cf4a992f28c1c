//! Permutation generator: drives every active rule over every input domain

use crate::domain::{partition, DomainParts};
use crate::error::Result;
use crate::permutator::{active_rules, Rule};
use crate::types::{GenerationConfig, GenerationMode, Permutation, WordlistSource};
use crate::words::WordSet;
use std::collections::HashSet;

/// Reusable generator holding the configuration for its runs
#[derive(Debug, Clone, Default)]
pub struct PermutationGenerator {
    config: GenerationConfig,
}

impl PermutationGenerator {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn with_wordlist(mut self, wordlist: WordlistSource) -> Self {
        self.config.wordlist = wordlist;
        self
    }

    /// Minimum length of words mined from the input domains
    pub fn with_wordlen(mut self, wordlen: usize) -> Self {
        self.config.wordlen = wordlen;
        self
    }

    pub fn fast(mut self, fast: bool) -> Self {
        self.config.mode = GenerationMode::from(fast);
        self
    }

    /// Number of increment/decrement steps per number found
    pub fn with_num_count(mut self, num_count: usize) -> Self {
        self.config.num_count = num_count;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Start a run over `domains`.
    ///
    /// The word set is built here, so a missing wordlist fails before any
    /// candidate is produced. Candidates are then computed lazily.
    pub fn generate<S: AsRef<str>>(&self, domains: &[S]) -> Result<Permutations> {
        self.config.validate()?;

        let domains = unique_domains(domains);
        let words = WordSet::build(
            &self.config.wordlist,
            &domains,
            self.config.wordlen,
            self.config.mode.is_fast(),
        )?;
        let rules = active_rules(self.config.mode);

        tracing::info!(
            domains = domains.len(),
            words = words.len(),
            rules = rules.len(),
            mode = %self.config.mode,
            "Generation started"
        );

        Ok(Permutations::new(domains, words, rules, self.config.num_count))
    }
}

/// Generate permutations for `domains` with `config`
pub fn generate<S: AsRef<str>>(domains: &[S], config: &GenerationConfig) -> Result<Permutations> {
    PermutationGenerator::with_config(config.clone()).generate(domains)
}

/// Generate permutations from loose settings
pub fn generate_with<S: AsRef<str>>(
    domains: &[S],
    wordlist: WordlistSource,
    wordlen: usize,
    fast: bool,
) -> Result<Permutations> {
    PermutationGenerator::new()
        .with_wordlist(wordlist)
        .with_wordlen(wordlen)
        .fast(fast)
        .generate(domains)
}

/// Lazy stream of candidate hostnames.
///
/// Candidates are grouped by source domain, then by rule order.
pub struct Permutations {
    domains: std::vec::IntoIter<String>,
    words: WordSet,
    rules: Vec<&'static Rule>,
    num_count: usize,
    current: Option<(String, DomainParts)>,
    rule_index: usize,
    pending: std::vec::IntoIter<String>,
    pending_rule: Option<&'static str>,
    produced: usize,
    finished: bool,
}

impl Permutations {
    fn new(domains: Vec<String>, words: WordSet, rules: Vec<&'static Rule>, num_count: usize) -> Self {
        Self {
            domains: domains.into_iter(),
            words,
            rules,
            num_count,
            current: None,
            rule_index: 0,
            pending: Vec::new().into_iter(),
            pending_rule: None,
            produced: 0,
            finished: false,
        }
    }

    /// Word set used by this run
    pub fn words(&self) -> &WordSet {
        &self.words
    }

    /// Number of candidates yielded so far
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// Rule that produced the last yielded candidate
    pub fn current_rule(&self) -> Option<&'static str> {
        self.pending_rule
    }

    /// Input domain of the last yielded candidate
    pub fn current_source(&self) -> Option<&str> {
        self.current.as_ref().map(|(source, _)| source.as_str())
    }

    /// Attach rule name and source domain to every candidate
    pub fn tagged(self) -> TaggedPermutations {
        TaggedPermutations { inner: self }
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(candidate) = self.pending.next() {
                self.produced += 1;
                return Some(candidate);
            }

            if self.rule_index < self.rules.len() {
                if let Some((_, parts)) = &self.current {
                    let rule = self.rules[self.rule_index];
                    self.rule_index += 1;
                    self.pending = rule.run(parts, &self.words, self.num_count).into_iter();
                    self.pending_rule = Some(rule.name);
                    continue;
                }
            }

            let Some(source) = self.domains.next() else {
                if !self.finished {
                    self.finished = true;
                    tracing::info!(candidates = self.produced, "Generation finished");
                }
                return None;
            };

            let parts = partition(&source);
            if !parts.has_root() {
                tracing::debug!(domain = %source, "No registrable domain found, skipping");
                self.current = None;
                continue;
            }

            self.current = Some((source, parts));
            self.rule_index = 0;
        }
    }
}

/// Candidates tagged with the rule and source domain that produced them
pub struct TaggedPermutations {
    inner: Permutations,
}

impl Iterator for TaggedPermutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        let domain = self.inner.next()?;
        Some(Permutation {
            domain,
            rule: self.inner.current_rule().unwrap_or_default().to_string(),
            source: self.inner.current_source().unwrap_or_default().to_string(),
        })
    }
}

/// Trimmed, non-empty domains in order of first occurrence
fn unique_domains<S: AsRef<str>>(domains: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    domains
        .iter()
        .map(|domain| domain.as_ref().trim().to_lowercase())
        .filter(|domain| !domain.is_empty() && seen.insert(domain.clone()))
        .collect()
}
