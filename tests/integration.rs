//! Integration tests for dnsgen

use dnsgen::{
    generate, generate_with, partition, DnsgenError, GenerationConfig, GenerationMode,
    PermutationGenerator, WordSet, WordlistSource,
};
use std::collections::HashSet;
use std::io::Write;

fn lines(items: &[&str]) -> WordlistSource {
    WordlistSource::Lines(items.iter().map(|s| s.to_string()).collect())
}

fn collect(domains: &[&str], wordlist: WordlistSource, wordlen: usize, fast: bool) -> Vec<String> {
    generate_with(domains, wordlist, wordlen, fast)
        .expect("generation should start")
        .collect()
}

#[test]
fn test_partition_known_suffixes() {
    let p = partition("test.1.foo.example.com");
    assert_eq!(p.labels(), ["test", "1", "foo"]);
    assert_eq!(p.root(), Some("example.com"));

    let p = partition("test.2.foo.example.com.cn");
    assert_eq!(p.labels(), ["test", "2", "foo"]);
    assert_eq!(p.root(), Some("example.com.cn"));

    let p = partition("test.example.co.uk");
    assert_eq!(p.labels(), ["test"]);
    assert_eq!(p.root(), Some("example.co.uk"));
}

#[test]
fn test_garbage_input_yields_nothing() {
    let p = partition(".....");
    assert!(p.labels().is_empty());
    assert!(p.root().is_none());

    let out = collect(&[".....", "?@#!"], lines(&["dev", "staging"]), 3, false);
    assert!(out.is_empty());
}

#[test]
fn test_invalid_label_never_borrows_another_root() {
    let out = collect(&["api.ex!ample.com", "mail.my site.example.com"], lines(&["dev"]), 3, false);
    assert!(out.is_empty(), "unexpected candidates: {:?}", out);
}

#[test]
fn test_mixed_case_duplicates_processed_once() {
    let once = collect(&["api.example.com"], lines(&["dev"]), 5, false);
    let mixed = collect(&["API.Example.com", "api.example.com"], lines(&["dev"]), 5, false);
    assert_eq!(once, mixed);
}

#[test]
fn test_zero_num_count_rejected() {
    let config = GenerationConfig {
        num_count: 0,
        ..Default::default()
    };
    assert!(matches!(
        generate(&["api.example.com"], &config),
        Err(DnsgenError::Config { .. })
    ));
}

#[test]
fn test_word_scenario() {
    let out: HashSet<String> = collect(&["api.example.com"], lines(&["dev"]), 3, false)
        .into_iter()
        .collect();

    for expected in [
        "dev.api.example.com",
        "api.dev.example.com",
        "devapi.example.com",
        "dev-api.example.com",
        "apidev.example.com",
        "api-dev.example.com",
    ] {
        assert!(out.contains(expected), "missing {}", expected);
    }
}

#[test]
fn test_number_scenario() {
    let domains = ["api2.example.com"];

    let config = GenerationConfig {
        num_count: 1,
        wordlist: lines(&[]),
        ..Default::default()
    };
    let out: HashSet<String> = generate(&domains, &config).unwrap().collect();
    assert!(out.contains("api1.example.com"));
    assert!(out.contains("api3.example.com"));
    assert!(!out.contains("api0.example.com"));

    let config = GenerationConfig { num_count: 2, ..config };
    let out: HashSet<String> = generate(&domains, &config).unwrap().collect();
    assert!(out.contains("api0.example.com"));
    assert!(out.contains("api4.example.com"));
}

#[test]
fn test_root_preserved() {
    let domains = ["www.shop01.example.co.uk", "mail-prod.corp.example.com", "example.org"];
    let out = collect(&domains, WordlistSource::Bundled, 4, false);
    assert!(!out.is_empty());

    let roots = ["example.co.uk", "example.com", "example.org"];
    for candidate in &out {
        assert!(
            roots.iter().any(|root| candidate.ends_with(&format!(".{}", root))),
            "{} lost its root",
            candidate
        );
    }
}

#[test]
fn test_fast_mode_is_subset() {
    let wordlist: Vec<&str> = vec![
        "dev", "staging", "prod", "api", "mail", "admin", "portal", "backup", "internal", "vpn",
        "legacy", "beta", "alpha", "preview",
    ];
    let domains = ["app01.staging-portal.example.com", "vpn.example.com"];

    let full = collect(&domains, lines(&wordlist), 5, false);
    let fast = collect(&domains, lines(&wordlist), 5, true);
    assert!(fast.len() <= full.len());

    let full_set: HashSet<&String> = full.iter().collect();
    for candidate in &fast {
        assert!(full_set.contains(candidate), "{} only produced in fast mode", candidate);
    }
}

#[test]
fn test_fast_words_subset_of_full() {
    let wordlist: Vec<String> = (0..30).map(|i| format!("word{}", i)).collect();
    let domains = ["backend-gateway.example.com"];

    let full = WordSet::build(&WordlistSource::Lines(wordlist.clone()), &domains, 5, false).unwrap();
    let fast = WordSet::build(&WordlistSource::Lines(wordlist), &domains, 5, true).unwrap();
    assert!(fast.is_subset(&full));
    assert!(fast.len() < full.len());
}

#[test]
fn test_deterministic_output() {
    let domains = ["api.dev1.example.com", "cdn.example.net", "api.dev1.example.com"];
    let first = collect(&domains, WordlistSource::Bundled, 5, false);
    let second = collect(&domains, WordlistSource::Bundled, 5, false);
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_domains_processed_once() {
    let once = collect(&["api.example.com"], lines(&["dev"]), 5, false);
    let twice = collect(&["api.example.com", "api.example.com"], lines(&["dev"]), 5, false);
    assert_eq!(once, twice);
}

#[test]
fn test_missing_wordlist_fails_before_generation() {
    let result = generate_with(
        &["api.example.com"],
        WordlistSource::File("/nonexistent/wordlist.txt".into()),
        5,
        false,
    );
    assert!(matches!(result, Err(DnsgenError::Resource { .. })));
}

#[test]
fn test_wordlist_file_comments_ignored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# Test wordlist\n\ndev\n  # another\nstaging").unwrap();

    let perms = PermutationGenerator::new()
        .with_wordlist(WordlistSource::File(file.path().to_path_buf()))
        .generate(&["api.example.com"])
        .unwrap();
    let words: Vec<&str> = perms.words().iter().collect();
    assert_eq!(words, vec!["dev", "staging"]);
}

#[test]
fn test_mined_words_used() {
    let out: HashSet<String> = collect(
        &["payments-gateway.example.com", "vpn.example.com"],
        lines(&[]),
        5,
        false,
    )
    .into_iter()
    .collect();

    assert!(out.contains("gateway.vpn.example.com"));
    assert!(out.contains("payments-vpn.example.com"));
}

#[test]
fn test_lazy_consumption() {
    let mut perms = PermutationGenerator::new()
        .generate(&["api.example.com"])
        .unwrap();
    let first_three: Vec<String> = perms.by_ref().take(3).collect();
    assert_eq!(first_three.len(), 3);
    assert_eq!(perms.produced(), 3);
}

#[test]
fn test_config_mode_roundtrip() {
    let config = GenerationConfig {
        mode: GenerationMode::Fast,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: GenerationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.mode, GenerationMode::Fast);
    assert_eq!(back.wordlist, WordlistSource::Bundled);
}

#[test]
fn test_library_initialization() {
    let result = dnsgen::init();
    assert!(result.is_ok());
}
