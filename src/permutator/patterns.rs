//! Template permutators built from fixed infrastructure naming vocabularies

use crate::domain::join_host;
use crate::words::WordSet;

/// Deployment environments
pub const ENVIRONMENTS: &[&str] = &["dev", "staging", "uat", "prod", "test"];

/// Services commonly exposed per cloud provider
pub const CLOUD_SERVICES: &[&str] = &["api", "cdn", "storage", "auth", "db"];

pub const CLOUD_PROVIDERS: &[&str] = &["aws", "azure", "gcp", "k8s", "cloud"];

/// Cloud region prefixes
pub const REGIONS: &[&str] = &[
    "us-east", "us-west", "eu-west", "eu-central", "ap-south", "ap-northeast", "sa-east", "af-south",
];

pub const MICROSERVICES: &[&str] = &["auth", "user", "payment", "notification", "order", "inventory"];

pub const MICROSERVICE_SUFFIXES: &[&str] = &["service", "svc", "api", "app"];

/// Internal tools that tend to get their own hostnames
pub const TOOLS: &[&str] = &[
    "jenkins", "gitlab", "jira", "confluence", "grafana", "kibana", "prometheus", "vault",
];

pub const TOOL_PREFIXES: &[&str] = &["internal", "tools", "admin"];

/// Ports that show up in hostnames of exposed services
pub const PORTS: &[u16] = &[80, 443, 3000, 5000, 8000, 8080, 8443, 9000];

/// `api.example.com` -> `dev.api.example.com`, `staging.api.example.com`, ...
pub fn environment_prefix(labels: &[String], root: &str, _words: &WordSet, _num_count: usize) -> Vec<String> {
    ENVIRONMENTS
        .iter()
        .map(|env| with_first_label(env, labels, root))
        .collect()
}

/// `api.example.com` -> `api-aws.api.example.com`, `cdn-gcp.api.example.com`, ...
pub fn cloud_provider_additions(
    labels: &[String],
    root: &str,
    _words: &WordSet,
    _num_count: usize,
) -> Vec<String> {
    cross_prefix(CLOUD_SERVICES, CLOUD_PROVIDERS, labels, root)
}

/// `api.example.com` -> `us-east.api.example.com`, ...
pub fn region_prefixes(labels: &[String], root: &str, _words: &WordSet, _num_count: usize) -> Vec<String> {
    REGIONS
        .iter()
        .map(|region| with_first_label(region, labels, root))
        .collect()
}

/// `api.example.com` -> `auth-service.api.example.com`, `user-svc.api.example.com`, ...
pub fn microservice_patterns(
    labels: &[String],
    root: &str,
    _words: &WordSet,
    _num_count: usize,
) -> Vec<String> {
    cross_prefix(MICROSERVICES, MICROSERVICE_SUFFIXES, labels, root)
}

/// `api.example.com` -> `api.internal.jenkins.example.com`, `api.jenkins.internal.example.com`, ...
pub fn internal_tooling(labels: &[String], root: &str, _words: &WordSet, _num_count: usize) -> Vec<String> {
    let mut domains = Vec::with_capacity(TOOLS.len() * TOOL_PREFIXES.len() * 2);

    for &tool in TOOLS {
        for &prefix in TOOL_PREFIXES {
            for (first, second) in [(prefix, tool), (tool, prefix)] {
                let mut tmp: Vec<&str> = labels.iter().map(String::as_str).collect();
                tmp.push(first);
                tmp.push(second);
                domains.push(join_host(&tmp, root));
            }
        }
    }

    domains
}

/// `api.example.com` -> `8080.api.example.com`, `port-8080.api.example.com`, ...
pub fn common_ports(labels: &[String], root: &str, _words: &WordSet, _num_count: usize) -> Vec<String> {
    let mut domains = Vec::with_capacity(PORTS.len() * 2);

    for port in PORTS {
        domains.push(with_first_label(&port.to_string(), labels, root));
        domains.push(with_first_label(&format!("port-{}", port), labels, root));
    }

    domains
}

fn with_first_label(label: &str, labels: &[String], root: &str) -> String {
    format!("{}.{}", label, join_host(labels, root))
}

fn cross_prefix(left: &[&str], right: &[&str], labels: &[String], root: &str) -> Vec<String> {
    let mut domains = Vec::with_capacity(left.len() * right.len());

    for l in left {
        for r in right {
            domains.push(with_first_label(&format!("{}-{}", l, r), labels, root));
        }
    }

    domains
}
