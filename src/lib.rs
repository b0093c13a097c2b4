//! Lanai Library
//!
//! Lanai provides a concurrent prefix tree over byte strings
//! ([`data_structures::MauiTrie`]) and a comparator-driven binary heap
//! ([`data_structures::OahuHeap`]), together with the configuration, error
//! and stress-testing machinery used by the `lanai` binary.
//!
//! # Architecture
//!
//! - The data structures are plain library types with total operations
//! - One coarse reader/writer lock per trie, no internal threads
//! - Configuration layered from defaults, files and environment variables
//! - Errors carried by typed enums and reported through `tracing`

pub mod config;
pub mod data_structures;
pub mod error;
pub mod workload;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and loads the default configuration.
pub fn init() -> error::LanaiResult<config::LanaiConfig> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    let config = config::load_default_config()?;

    Ok(config)
}
