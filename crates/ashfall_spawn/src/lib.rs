//! # ASHFALL Spawn
//!
//! Pool-backed entity spawning, the policy layer over
//! [`ashfall_pool`]:
//! - Gameplay code sees the [`PoolSpawner`] capability trait only
//! - Creation strategy, placement, and activation rules are injected as a
//!   [`SpawnPolicy`] strategy object
//! - Startup is an explicit `initialize()` then `start()` sequence
//!
//! ## Example
//!
//! ```rust,ignore
//! use ashfall_spawn::{PoolSpawner, Spawner, SpawnerConfig, TemplatePolicy};
//!
//! let config = SpawnerConfig::load("data/spawner.toml")?;
//! let mut spawner = Spawner::initialize(&config, TemplatePolicy::new(enemy_template));
//! spawner.start()?;
//!
//! let handle = spawner.spawn()?;
//! spawner.return_to_pool(handle)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod placement;
pub mod policy;
pub mod spawner;

pub use config::SpawnerConfig;
pub use placement::{Placement, Transform, Vec3, ROOT_PARENT};
pub use policy::{SpawnPolicy, Spawnable, TemplatePolicy};
pub use spawner::{PoolSpawner, Spawner};

// Re-export the pool types gameplay code touches through this crate.
pub use ashfall_pool::{PoolConfig, PoolError, PoolHandle, PoolResult};
