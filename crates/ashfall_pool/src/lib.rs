//! # ASHFALL Pool
//!
//! Bounded object pooling for gameplay entities (enemies, projectiles,
//! effects) designed for:
//! - O(1) acquire and release on the hot path
//! - Strictly LIFO reuse for cache locality
//! - A hard ceiling on total instance count
//!
//! ## Architecture Rules
//!
//! 1. **The pool owns every instance** - Callers hold handles, never the
//!    instances themselves
//! 2. **Single-threaded by design** - Every operation takes `&mut self`,
//!    no locks anywhere
//! 3. **Lifecycle hooks are capabilities** - Observable behavior lives in
//!    a [`Lifecycle`] implementation, not in externally callable events
//!
//! ## Example
//!
//! ```rust,ignore
//! use ashfall_pool::{Lifecycle, ObjectPool, PoolConfig};
//!
//! let mut pool = ObjectPool::new(&PoolConfig::default(), MyHooks);
//! pool.prewarm(10)?;
//! let handle = pool.acquire()?;
//! pool.release(handle)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod handle;
pub mod pool;

pub use config::PoolConfig;
pub use error::{PoolError, PoolResult};
pub use handle::PoolHandle;
pub use pool::{Lifecycle, ObjectPool};
