//! Splitting raw domain strings into subdomain labels and a registrable root

/// A domain split into its subdomain labels and its root.
///
/// The root is the registered domain together with its public suffix
/// (`example.com`, `example.co.uk`, `example.com.cn`) and is never split
/// further. It is `None` when the input contains no registrable domain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainParts {
    labels: Vec<String>,
    root: Option<String>,
}

impl DomainParts {
    pub fn new(labels: Vec<String>, root: Option<String>) -> Self {
        Self { labels, root }
    }

    /// Subdomain labels, left to right
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Registered domain plus public suffix
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Whether a registrable root was recognized
    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }
}

impl std::fmt::Display for DomainParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", join_host(&self.labels, root)),
            None => write!(f, "{}", self.labels.join(".")),
        }
    }
}

/// Join labels and a root into a hostname
pub fn join_host<S: AsRef<str>>(labels: &[S], root: &str) -> String {
    let mut host = String::with_capacity(root.len() + labels.len() * 8);
    for label in labels {
        host.push_str(label.as_ref());
        host.push('.');
    }
    host.push_str(root);
    host
}

/// Partition a domain into subdomain labels and its root.
///
/// `test.1.foo.example.com` becomes `[test, 1, foo]` + `example.com`, and
/// `test.example.co.uk` becomes `[test]` + `example.co.uk`. Input without a
/// known public suffix, or with any label that is not a hostname label,
/// yields empty labels and no root.
pub fn partition(domain: &str) -> DomainParts {
    let lowered = domain.trim().to_lowercase();
    let labels: Vec<&str> = extract_host(&lowered)
        .split('.')
        .filter(|label| !label.is_empty())
        .collect();

    if labels.is_empty() || !labels.iter().all(|label| is_hostname_label(label)) {
        return DomainParts::default();
    }

    let host = labels.join(".");
    let Some(root) = registrable_root(&host) else {
        return DomainParts::default();
    };

    let root_labels = root.split('.').count();
    let subdomain = labels[..labels.len() - root_labels]
        .iter()
        .map(|label| label.to_string())
        .collect();

    DomainParts::new(subdomain, Some(root))
}

/// Strip scheme, userinfo, port, path, query and fragment
fn extract_host(input: &str) -> &str {
    let rest = match input.find("://") {
        Some(idx) => &input[idx + 3..],
        None => input,
    };
    let rest = rest.split(&['/', '?', '#'][..]).next().unwrap_or("");
    let rest = rest.rsplit('@').next().unwrap_or("");
    rest.split(':').next().unwrap_or("")
}

/// Letters (including internationalized ones), digits, `-` and `_`
fn is_hostname_label(label: &str) -> bool {
    label
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Registrable domain of `host`, only when its suffix is on the list.
///
/// The list's implicit `*` rule would otherwise accept any last label as a TLD.
fn registrable_root(host: &str) -> Option<String> {
    let domain = psl::domain(host.as_bytes())?;
    if !domain.suffix().is_known() {
        return None;
    }
    std::str::from_utf8(domain.as_bytes())
        .ok()
        .map(|root| root.to_string())
}
