//! Permutation rules and their registry
//!
//! Every rule is a plain function over a partitioned domain. The registry is
//! a static table; fast mode runs only the entries flagged `fast`.

mod numbers;
mod patterns;
mod words;

pub use numbers::{decrease_numbers, increase_numbers, modify_numbers};
pub use patterns::{
    cloud_provider_additions, common_ports, environment_prefix, internal_tooling,
    microservice_patterns, region_prefixes, CLOUD_PROVIDERS, CLOUD_SERVICES, ENVIRONMENTS,
    MICROSERVICES, MICROSERVICE_SUFFIXES, PORTS, REGIONS, TOOLS, TOOL_PREFIXES,
};
pub use words::{
    append_word_every_index, insert_word_every_index, prepend_word_every_index,
    replace_word_with_word, MIN_REPLACE_LEN,
};

use crate::domain::DomainParts;
use crate::types::GenerationMode;
use crate::words::WordSet;

/// Signature shared by every rule: `(labels, root, words, num_count)`
pub type RuleFn = fn(&[String], &str, &WordSet, usize) -> Vec<String>;

/// A registered permutation rule
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    /// Also part of the fast set
    pub fast: bool,
    pub apply: RuleFn,
}

impl Rule {
    /// Run the rule against a partitioned domain.
    ///
    /// Domains without a root produce nothing.
    pub fn run(&self, parts: &DomainParts, words: &WordSet, num_count: usize) -> Vec<String> {
        match parts.root() {
            Some(root) => (self.apply)(parts.labels(), root, words, num_count),
            None => Vec::new(),
        }
    }

    pub fn is_active(&self, mode: GenerationMode) -> bool {
        !mode.is_fast() || self.fast
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("fast", &self.fast)
            .finish()
    }
}

/// All rules, in emission order
pub static RULES: &[Rule] = &[
    Rule {
        name: "insert_word_every_index",
        fast: false,
        apply: insert_word_every_index,
    },
    Rule {
        name: "modify_numbers",
        fast: true,
        apply: modify_numbers,
    },
    Rule {
        name: "prepend_word_every_index",
        fast: false,
        apply: prepend_word_every_index,
    },
    Rule {
        name: "append_word_every_index",
        fast: false,
        apply: append_word_every_index,
    },
    Rule {
        name: "replace_word_with_word",
        fast: true,
        apply: replace_word_with_word,
    },
    Rule {
        name: "environment_prefix",
        fast: false,
        apply: environment_prefix,
    },
    Rule {
        name: "cloud_provider_additions",
        fast: false,
        apply: cloud_provider_additions,
    },
    Rule {
        name: "region_prefixes",
        fast: false,
        apply: region_prefixes,
    },
    Rule {
        name: "microservice_patterns",
        fast: false,
        apply: microservice_patterns,
    },
    Rule {
        name: "internal_tooling",
        fast: false,
        apply: internal_tooling,
    },
    Rule {
        name: "common_ports",
        fast: true,
        apply: common_ports,
    },
];

/// Rules active in the given mode
pub fn active_rules(mode: GenerationMode) -> Vec<&'static Rule> {
    RULES.iter().filter(|rule| rule.is_active(mode)).collect()
}

/// Look up a rule by name
pub fn find_rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.name == name)
}
