//! Numeric permutators

use crate::words::WordSet;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{1,3}").unwrap());

/// Increase and decrease every number found in the labels.
///
/// `test01.example.com` -> `test02`, `test03`, `test04`, then `test00`
pub fn modify_numbers(labels: &[String], root: &str, words: &WordSet, num_count: usize) -> Vec<String> {
    let mut domains = increase_numbers(labels, root, words, num_count);
    domains.extend(decrease_numbers(labels, root, words, num_count));
    domains
}

/// `test1.example.com` -> `test2.example.com`, `test3.example.com`, ...
pub fn increase_numbers(labels: &[String], root: &str, _words: &WordSet, num_count: usize) -> Vec<String> {
    let joined = labels.join(".");
    let mut domains = Vec::new();

    for (run, value) in digit_runs(&joined) {
        for step in 1..=num_count {
            domains.push(substitute(&joined, run, value + step, root));
        }
    }

    domains
}

/// `test4.example.com` -> `test3.example.com`, `test2.example.com`, ...
///
/// Stops once the value would drop below zero.
pub fn decrease_numbers(labels: &[String], root: &str, _words: &WordSet, num_count: usize) -> Vec<String> {
    let joined = labels.join(".");
    let mut domains = Vec::new();

    for (run, value) in digit_runs(&joined) {
        for step in 1..=num_count {
            let Some(lower) = value.checked_sub(step) else {
                break;
            };
            domains.push(substitute(&joined, run, lower, root));
        }
    }

    domains
}

/// Distinct runs of up to three digits with their values, in order of appearance
fn digit_runs(joined: &str) -> Vec<(&str, usize)> {
    let mut runs: Vec<(&str, usize)> = Vec::new();

    for m in DIGIT_RUN.find_iter(joined) {
        let run = m.as_str();
        if runs.iter().any(|(seen, _)| *seen == run) {
            continue;
        }
        if let Ok(value) = run.parse() {
            runs.push((run, value));
        }
    }

    runs
}

/// Replace the first occurrence of `run` with `value`, keeping its width
fn substitute(joined: &str, run: &str, value: usize, root: &str) -> String {
    let replacement = format!("{:0width$}", value, width = run.len());
    format!("{}.{}", joined.replacen(run, &replacement, 1), root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_increase() {
        let out = increase_numbers(&labels(&["test", "1", "foo"]), "example.com", &WordSet::default(), 2);
        assert_eq!(out, vec!["test.2.foo.example.com", "test.3.foo.example.com"]);
    }

    #[test]
    fn test_zero_padding_preserved() {
        let out = increase_numbers(&labels(&["test01"]), "example.com", &WordSet::default(), 3);
        assert_eq!(out, vec!["test02.example.com", "test03.example.com", "test04.example.com"]);

        let out = decrease_numbers(&labels(&["test01"]), "example.com", &WordSet::default(), 3);
        assert_eq!(out, vec!["test00.example.com"]);
    }

    #[test]
    fn test_decrease_stops_at_zero() {
        let out = decrease_numbers(&labels(&["api2"]), "example.com", &WordSet::default(), 3);
        assert_eq!(out, vec!["api1.example.com", "api0.example.com"]);

        let out = decrease_numbers(&labels(&["api2"]), "example.com", &WordSet::default(), 1);
        assert_eq!(out, vec!["api1.example.com"]);
    }

    #[test]
    fn test_modify_numbers() {
        let out = modify_numbers(&labels(&["api2"]), "example.com", &WordSet::default(), 1);
        assert_eq!(out, vec!["api3.example.com", "api1.example.com"]);
    }

    #[test]
    fn test_long_numbers_split_into_runs() {
        let runs = digit_runs("node1234");
        assert_eq!(runs, vec![("123", 123), ("4", 4)]);
    }

    #[test]
    fn test_repeated_run_targeted_once() {
        let out = increase_numbers(&labels(&["web1", "db1"]), "example.com", &WordSet::default(), 1);
        assert_eq!(out, vec!["web2.db1.example.com"]);
    }

    #[test]
    fn test_root_numbers_untouched() {
        let out = modify_numbers(&labels(&["www"]), "example123.com", &WordSet::default(), 3);
        assert!(out.is_empty());
    }

    #[test]
    fn test_width_can_grow() {
        let out = increase_numbers(&labels(&["v99"]), "example.com", &WordSet::default(), 1);
        assert_eq!(out, vec!["v100.example.com"]);
    }
}
