//! dnsgen - DNS name permutation generator
//!
//! Splits seed domains into subdomain labels and a registrable root, then
//! applies a fixed set of permutation rules to produce candidate hostnames
//! for subdomain discovery.

pub mod domain;
pub mod error;
pub mod generator;
pub mod permutator;
pub mod types;
pub mod words;

// Re-export commonly used types
pub use error::{DnsgenError, Result};
pub use types::{GenerationConfig, GenerationMode, Permutation, WordlistSource};

// Re-export main functionality
pub use domain::{partition, DomainParts};
pub use generator::{generate, generate_with, PermutationGenerator, Permutations};
pub use permutator::{Rule, RULES};
pub use words::WordSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
