//! Core types and structures for dnsgen

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default minimum length of words mined from the input domains
pub const DEFAULT_WORDLEN: usize = 5;

/// Default number of increment/decrement steps per number found
pub const DEFAULT_NUM_COUNT: usize = 3;

/// Upper bound for the increment/decrement step count
pub const MAX_NUM_COUNT: usize = 100;

/// Generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Every registered permutator
    #[default]
    Full,
    /// Cheap subset of permutators and a truncated static wordlist
    Fast,
}

impl GenerationMode {
    pub fn is_fast(&self) -> bool {
        matches!(self, GenerationMode::Fast)
    }
}

impl From<bool> for GenerationMode {
    fn from(fast: bool) -> Self {
        if fast {
            GenerationMode::Fast
        } else {
            GenerationMode::Full
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Full => write!(f, "full"),
            GenerationMode::Fast => write!(f, "fast"),
        }
    }
}

/// Where the static part of the word set comes from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordlistSource {
    /// Wordlist compiled into the binary
    #[default]
    Bundled,
    /// Wordlist file, one word per line
    File(PathBuf),
    /// Lines already held by the caller
    Lines(Vec<String>),
}

impl std::fmt::Display for WordlistSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordlistSource::Bundled => write!(f, "bundled"),
            WordlistSource::File(path) => write!(f, "{}", path.display()),
            WordlistSource::Lines(lines) => write!(f, "<{} lines>", lines.len()),
        }
    }
}

/// Configuration for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub wordlen: usize,
    pub mode: GenerationMode,
    pub num_count: usize,
    pub wordlist: WordlistSource,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            wordlen: DEFAULT_WORDLEN,
            mode: GenerationMode::Full,
            num_count: DEFAULT_NUM_COUNT,
            wordlist: WordlistSource::Bundled,
        }
    }
}

impl GenerationConfig {
    /// Reject settings that cannot produce a meaningful word set
    pub fn validate(&self) -> Result<()> {
        if self.wordlen == 0 {
            return Err(crate::config_error!("wordlen must be at least 1"));
        }
        if !(1..=MAX_NUM_COUNT).contains(&self.num_count) {
            return Err(crate::config_error!(
                "num_count must be between 1 and {}, got {}",
                MAX_NUM_COUNT,
                self.num_count
            ));
        }
        Ok(())
    }
}

/// A candidate hostname together with what produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permutation {
    pub domain: String,
    pub rule: String,
    pub source: String,
}
