//! Domain parsing module

pub mod parts;

// Re-export main functionality
pub use parts::{join_host, partition, DomainParts};

/// Partition every domain and keep only those with a recognized root
pub fn partition_all<'a, I>(domains: I) -> Vec<DomainParts>
where
    I: IntoIterator<Item = &'a str>,
{
    domains
        .into_iter()
        .map(partition)
        .filter(DomainParts::has_root)
        .collect()
}
