//! Stress workload configuration module.
//!
//! Controls how many threads hammer the trie during `lanai stress` and how
//! many keys each writer produces.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound on keys per writer thread.
pub const MAX_KEYS_PER_WRITER: usize = 1_000_000;

/// Stress workload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of threads inserting keys
    pub writer_threads: usize,

    /// Number of threads searching while writers run (may be zero)
    pub reader_threads: usize,

    /// Number of keys each writer inserts
    pub keys_per_writer: usize,

    /// Prefix shared by every generated key
    pub key_prefix: String,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            writer_threads: num_cpus::get(),
            reader_threads: 2,
            keys_per_writer: 1000,
            key_prefix: "key".to_string(),
        }
    }
}

impl Validate for WorkloadConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.writer_threads == 0 {
            return Err(ConfigError::ValidationError(
                "writer_threads must be greater than 0".to_string(),
            ));
        }

        if self.keys_per_writer == 0 || self.keys_per_writer > MAX_KEYS_PER_WRITER {
            return Err(ConfigError::ValueOutOfRange {
                key: "workload.keys_per_writer".to_string(),
                message: format!("must be between 1 and {MAX_KEYS_PER_WRITER}"),
            });
        }

        if self.key_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "key_prefix cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
