//! Spawner configuration, loaded once at startup from TOML.
//!
//! Example file:
//!
//! ```toml
//! spawn_position = { x = 0.0, y = 12.0, z = 0.0 }
//! spawn_yaw = 180.0
//! parent = "enemies"
//!
//! [pool]
//! max_count = 100
//! initial_capacity = 20
//! prewarm_count = 10
//! check_duplicates = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use ashfall_pool::{PoolConfig, PoolError, PoolResult};

use crate::placement::{Placement, Transform, Vec3, ROOT_PARENT};

/// Configuration for a [`Spawner`](crate::Spawner).
///
/// Not runtime-mutable after the spawner is initialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// World position new instances are created at.
    pub spawn_position: Vec3,

    /// Facing direction new instances are created with (degrees).
    pub spawn_yaw: f32,

    /// Scene hierarchy node new instances are inserted under. Absent
    /// means the hierarchy root, with a warning.
    pub parent: Option<String>,

    /// Pool tuning values.
    pub pool: PoolConfig,
}

impl SpawnerConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the TOML is malformed.
    pub fn from_toml_str(source: &str) -> PoolResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| {
            PoolError::InvalidConfig(format!("failed to parse spawner config: {e}"))
        })?;
        config.pool.validate();
        Ok(config)
    }

    /// Loads a configuration file, falling back to defaults if the file
    /// is missing.
    ///
    /// A missing file is a recoverable misconfiguration: it is logged as
    /// a warning and the defaults are used. A file that exists but does
    /// not parse is an error.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the file exists but is
    /// malformed.
    pub fn load(path: impl AsRef<Path>) -> PoolResult<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_toml_str(&source),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "spawner config not readable, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Resolves the placement context for this spawner.
    ///
    /// A missing parent node is recovered locally: instances spawn at
    /// the hierarchy root and a warning is logged.
    #[must_use]
    pub fn resolve_placement(&self) -> Placement {
        let transform = Transform::new(self.spawn_position, self.spawn_yaw);
        match &self.parent {
            Some(parent) => Placement::new(transform, parent.clone()),
            None => {
                tracing::warn!(
                    "no spawn parent configured, inserting instances at the hierarchy root"
                );
                Placement::new(transform, ROOT_PARENT)
            }
        }
    }
}
