//! # Pool Error Types
//!
//! All errors that can occur in the pooling system.

use thiserror::Error;

use crate::handle::PoolHandle;

/// Errors that can occur in the pooling system.
///
/// None of these are fatal: every error leaves the pool in a consistent
/// state and the failed operation has no side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Acquire was requested while every allowed instance is already active.
    #[error("pool capacity exceeded: all {max} instances are active")]
    CapacityExceeded {
        /// The configured maximum total instance count.
        max: usize,
    },

    /// An instance was released while it was already sitting in the free
    /// list. Only reported when duplicate checking is enabled.
    #[error("instance released twice: {handle:?}")]
    DuplicateRelease {
        /// The handle that was released a second time.
        handle: PoolHandle,
    },

    /// An instance was released that this pool never created, or that was
    /// destroyed by a previous `clear`.
    #[error("instance not owned by this pool: {handle:?}")]
    NotOwnedByPool {
        /// The foreign or stale handle.
        handle: PoolHandle,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;
