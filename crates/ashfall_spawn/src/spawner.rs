//! The spawner - a thin policy layer over the object pool.
//!
//! Gameplay code talks to the [`PoolSpawner`] capability trait and never
//! to the pool directly. The spawner supplies the pool's lifecycle hooks
//! from an injected [`SpawnPolicy`] plus the resolved placement context.
//!
//! Startup is two-phase, and callers must run both phases before first
//! use:
//!
//! 1. [`Spawner::initialize`] - resolve placement, build the pool. No
//!    instances exist yet.
//! 2. [`Spawner::start`] - pre-warm per configuration. After this the
//!    pool is guaranteed ready.

use ashfall_pool::{Lifecycle, ObjectPool, PoolHandle, PoolResult};

use crate::config::SpawnerConfig;
use crate::placement::Placement;
use crate::policy::SpawnPolicy;

/// The spawning surface exposed to gameplay code.
///
/// Everything gameplay code may do with a pool-backed spawner: spawn,
/// return, inspect counts, tear down. Lifecycle hooks are deliberately
/// absent - they are observable through a policy, not callable here.
pub trait PoolSpawner {
    /// The entity type produced by this spawner.
    type Entity;

    /// Gets an instance from the pool, creating one only if the free
    /// stack is exhausted and capacity remains.
    ///
    /// # Errors
    ///
    /// Returns [`ashfall_pool::PoolError::CapacityExceeded`] when the
    /// pool is at its configured maximum.
    fn spawn(&mut self) -> PoolResult<PoolHandle>;

    /// Deactivates an instance and recycles it.
    ///
    /// # Errors
    ///
    /// Returns [`ashfall_pool::PoolError::NotOwnedByPool`] for foreign or
    /// stale handles, and [`ashfall_pool::PoolError::DuplicateRelease`]
    /// for a double return when duplicate checking is enabled.
    fn return_to_pool(&mut self, handle: PoolHandle) -> PoolResult<()>;

    /// Count of actively spawned entities.
    fn active_count(&self) -> usize;

    /// Count of entities resting in the pool.
    fn inactive_count(&self) -> usize;

    /// Combined count of active and inactive entities.
    fn total_count(&self) -> usize;

    /// Destroys every tracked entity and resets all counts to zero.
    ///
    /// The spawner's own configuration survives; a subsequent spawn
    /// starts a fresh population from zero.
    fn destroy_all(&mut self);
}

/// Adapts a [`SpawnPolicy`] plus a resolved placement to the pool's
/// [`Lifecycle`] hooks.
struct PolicyHooks<P: SpawnPolicy> {
    policy: P,
    placement: Placement,
}

impl<P: SpawnPolicy> Lifecycle for PolicyHooks<P> {
    type Item = P::Entity;

    fn create(&mut self) -> P::Entity {
        self.policy.create(&self.placement)
    }

    fn activate(&mut self, item: &mut P::Entity) {
        self.policy.activate(item);
    }

    fn deactivate(&mut self, item: &mut P::Entity) {
        self.policy.deactivate(item);
    }

    fn destroy(&mut self, item: P::Entity) {
        self.policy.destroy(item);
    }
}

/// A pool-backed entity spawner driven by an injected policy.
pub struct Spawner<P: SpawnPolicy> {
    pool: ObjectPool<PolicyHooks<P>>,
    prewarm_count: usize,
    started: bool,
}

impl<P: SpawnPolicy> Spawner<P> {
    /// Phase one of startup: resolves the placement context and builds
    /// the pool. No instances are created here.
    #[must_use]
    pub fn initialize(config: &SpawnerConfig, policy: P) -> Self {
        let hooks = PolicyHooks {
            policy,
            placement: config.resolve_placement(),
        };
        Self {
            pool: ObjectPool::new(&config.pool, hooks),
            prewarm_count: config.pool.prewarm_count,
            started: false,
        }
    }

    /// Phase two of startup: pre-warms the pool per configuration.
    ///
    /// Idempotent; calling it again is a no-op. After the first
    /// successful call the pool is guaranteed ready.
    ///
    /// # Errors
    ///
    /// Propagates pool errors from pre-warming.
    pub fn start(&mut self) -> PoolResult<()> {
        if self.started {
            return Ok(());
        }
        if self.prewarm_count > 0 {
            self.pool.prewarm(self.prewarm_count)?;
        }
        self.started = true;
        Ok(())
    }

    /// Gets a reference to an actively spawned entity.
    #[inline]
    #[must_use]
    pub fn entity(&self, handle: PoolHandle) -> Option<&P::Entity> {
        self.pool.get(handle)
    }

    /// Gets a mutable reference to an actively spawned entity.
    #[inline]
    pub fn entity_mut(&mut self, handle: PoolHandle) -> Option<&mut P::Entity> {
        self.pool.get_mut(handle)
    }

    /// Returns the placement context new instances are created at.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.pool.lifecycle().placement
    }

    /// Returns the injected spawn policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.pool.lifecycle().policy
    }
}

impl<P: SpawnPolicy> PoolSpawner for Spawner<P> {
    type Entity = P::Entity;

    fn spawn(&mut self) -> PoolResult<PoolHandle> {
        if !self.started {
            tracing::warn!("spawn called before start(), the pool was never pre-warmed");
        }
        self.pool.acquire()
    }

    fn return_to_pool(&mut self, handle: PoolHandle) -> PoolResult<()> {
        self.pool.release(handle)
    }

    fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    fn inactive_count(&self) -> usize {
        self.pool.inactive_count()
    }

    fn total_count(&self) -> usize {
        self.pool.total_count()
    }

    fn destroy_all(&mut self) {
        self.pool.clear();
    }
}
