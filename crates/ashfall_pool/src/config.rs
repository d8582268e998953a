//! # Pool Configuration
//!
//! Tuning values for a pool, loaded once at startup from TOML.
//!
//! None of these values are runtime-mutable after the pool is built.

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, PoolResult};

/// Default maximum total instance count.
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Default reserved capacity of the free stack.
pub const DEFAULT_INITIAL_CAPACITY: usize = 20;

/// Default number of instances created eagerly at startup.
pub const DEFAULT_PREWARM_COUNT: usize = 10;

/// Configuration for an [`ObjectPool`](crate::ObjectPool).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum total instance count. Acquire fails once this many
    /// instances exist and all of them are active.
    pub max_count: usize,

    /// Reserved capacity of the free stack. Should be the instance count
    /// expected in most scenes to avoid mid-game stack growth.
    pub initial_capacity: usize,

    /// Number of instances to create eagerly during startup. Should be
    /// at most `initial_capacity`.
    pub prewarm_count: usize,

    /// If true, releasing an instance that is already in the free list is
    /// reported as an error instead of silently ignored. Costs nothing
    /// either way; the flag only selects the failure mode.
    pub check_duplicates: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            prewarm_count: DEFAULT_PREWARM_COUNT,
            check_duplicates: false,
        }
    }
}

impl PoolConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the TOML is malformed.
    pub fn from_toml_str(source: &str) -> PoolResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| PoolError::InvalidConfig(format!("failed to parse pool config: {e}")))?;
        config.validate();
        Ok(config)
    }

    /// Checks the configuration for inefficient combinations.
    ///
    /// Misconfiguration here is a warning, not an error: the pool works
    /// either way, it just resizes its stack at runtime.
    pub fn validate(&self) {
        if self.prewarm_count > self.initial_capacity {
            tracing::warn!(
                prewarm_count = self.prewarm_count,
                initial_capacity = self.initial_capacity,
                "prewarm count exceeds initial stack capacity, forcing a stack resize at startup"
            );
        }
        if self.prewarm_count > self.max_count {
            tracing::warn!(
                prewarm_count = self.prewarm_count,
                max_count = self.max_count,
                "prewarm count exceeds max count and will be clamped"
            );
        }
    }
}
