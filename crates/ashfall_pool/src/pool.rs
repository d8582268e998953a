//! # Object Pool
//!
//! Bounded pool for objects that are frequently spawned and despawned.
//!
//! The pool owns every instance it ever creates. Inactive instances sit
//! in a free stack; active instances are lent to the caller as a
//! [`PoolHandle`] until released. Reuse is strictly LIFO: the most
//! recently released instance is always the next one handed out, which
//! favors cache locality but gives no fairness guarantee.

use crate::config::PoolConfig;
use crate::error::{PoolError, PoolResult};
use crate::handle::PoolHandle;

/// Lifecycle hooks for pooled instances.
///
/// The four transitions of a pooled instance, as explicit overridable
/// methods. Only `create` is required; the other hooks default to no-ops.
///
/// Hook invocation order is fixed by the pool:
/// - fresh acquire: `create` then `activate`
/// - reuse acquire: `activate` only
/// - release: `deactivate`
/// - clear: `destroy`, once per instance, active or not
pub trait Lifecycle {
    /// The pooled instance type.
    type Item;

    /// Produces a brand new instance.
    ///
    /// Called only when the free stack is empty and the pool is below its
    /// maximum total count.
    fn create(&mut self) -> Self::Item;

    /// Prepares an instance for use, fresh or recycled.
    fn activate(&mut self, _item: &mut Self::Item) {}

    /// Cleans an instance up as it returns to the free stack.
    fn deactivate(&mut self, _item: &mut Self::Item) {}

    /// Tears an instance down for good.
    fn destroy(&mut self, item: Self::Item) {
        drop(item);
    }
}

/// One instance and whether it is currently lent out.
struct Slot<T> {
    value: T,
    active: bool,
}

/// A bounded object pool with a stack-based free list.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. All operations take `&mut self`; use one
/// pool per thread or wrap in a mutex.
///
/// # Example
///
/// ```rust,ignore
/// struct Projectiles;
///
/// impl Lifecycle for Projectiles {
///     type Item = Projectile;
///     fn create(&mut self) -> Projectile { Projectile::default() }
/// }
///
/// let mut pool = ObjectPool::new(&PoolConfig::default(), Projectiles);
///
/// let handle = pool.acquire()?;
/// // ... fly ...
/// pool.release(handle)?;
/// ```
pub struct ObjectPool<L: Lifecycle> {
    /// Every instance this pool has created, active or not.
    slots: Vec<Slot<L::Item>>,
    /// Free stack - indices of inactive slots, most recently released on top.
    free: Vec<u32>,
    /// The lifecycle hooks.
    lifecycle: L,
    /// Bumped on `clear` so stale handles stop resolving.
    epoch: u32,
    /// Number of instances currently lent out.
    active_count: usize,
    /// Maximum total instance count.
    max_count: usize,
    /// Whether a double release is an error or a logged no-op.
    check_duplicates: bool,
}

impl<L: Lifecycle> ObjectPool<L> {
    /// Creates an empty pool with the given configuration and hooks.
    ///
    /// No instances are created here; use [`prewarm`](Self::prewarm) to
    /// populate the free stack eagerly.
    #[must_use]
    pub fn new(config: &PoolConfig, lifecycle: L) -> Self {
        config.validate();
        let reserve = config.initial_capacity.min(config.max_count);
        Self {
            slots: Vec::with_capacity(reserve),
            free: Vec::with_capacity(reserve),
            lifecycle,
            epoch: 0,
            active_count: 0,
            max_count: config.max_count,
            check_duplicates: config.check_duplicates,
        }
    }

    /// Acquires an instance, reusing a free one when possible.
    ///
    /// Pops the most recently released instance off the free stack and
    /// runs `activate` on it. If the stack is empty and the pool is below
    /// its maximum, a new instance is produced via `create` first.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::CapacityExceeded`] when every allowed
    /// instance is already active. Exceeding the maximum is a hard error,
    /// never silent growth.
    pub fn acquire(&mut self) -> PoolResult<PoolHandle> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.active = true;
            self.lifecycle.activate(&mut slot.value);
            self.active_count += 1;
            return Ok(PoolHandle::new(index, self.epoch));
        }

        if self.slots.len() >= self.max_count {
            return Err(PoolError::CapacityExceeded {
                max: self.max_count,
            });
        }

        let index = u32::try_from(self.slots.len())
            .map_err(|_| PoolError::CapacityExceeded { max: self.max_count })?;
        let mut value = self.lifecycle.create();
        self.lifecycle.activate(&mut value);
        self.slots.push(Slot {
            value,
            active: true,
        });
        self.active_count += 1;
        Ok(PoolHandle::new(index, self.epoch))
    }

    /// Releases an instance back onto the free stack.
    ///
    /// Runs `deactivate`, then pushes the instance on top of the stack so
    /// it is the first to be reused.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::NotOwnedByPool`] if the handle was not issued
    /// by this pool or predates its last `clear`. Returns
    /// [`PoolError::DuplicateRelease`] if the instance is already free
    /// and duplicate checking is enabled; with checking disabled the
    /// double release is logged and ignored.
    pub fn release(&mut self, handle: PoolHandle) -> PoolResult<()> {
        let index = handle.index() as usize;
        if handle.epoch() != self.epoch || index >= self.slots.len() {
            return Err(PoolError::NotOwnedByPool { handle });
        }

        let slot = &mut self.slots[index];
        if !slot.active {
            if self.check_duplicates {
                return Err(PoolError::DuplicateRelease { handle });
            }
            tracing::debug!(?handle, "ignoring release of an already inactive instance");
            return Ok(());
        }

        self.lifecycle.deactivate(&mut slot.value);
        slot.active = false;
        self.free.push(handle.index());
        self.active_count -= 1;
        Ok(())
    }

    /// Destroys every instance the pool knows about, active or inactive.
    ///
    /// Runs `destroy` once per instance, empties the free stack, and
    /// resets all counts to zero. Handles issued before the call become
    /// stale and fail with [`PoolError::NotOwnedByPool`] from then on.
    pub fn clear(&mut self) {
        for slot in self.slots.drain(..) {
            self.lifecycle.destroy(slot.value);
        }
        self.free.clear();
        self.active_count = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Eagerly creates `count` instances and parks them in the free stack.
    ///
    /// Instances are acquired up front and then released in reverse
    /// acquisition order, so reading the stack top-down matches creation
    /// order. A count above the pool maximum is clamped with a warning.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolError::CapacityExceeded`] if instances already
    /// lent out leave less headroom than `count`.
    pub fn prewarm(&mut self, count: usize) -> PoolResult<()> {
        let target = count.min(self.max_count);
        if target < count {
            tracing::warn!(
                requested = count,
                max_count = self.max_count,
                "prewarm clamped to pool maximum"
            );
        }

        let mut handles = Vec::with_capacity(target);
        for _ in 0..target {
            handles.push(self.acquire()?);
        }
        for handle in handles.into_iter().rev() {
            self.release(handle)?;
        }
        Ok(())
    }

    /// Gets a reference to an active instance.
    ///
    /// Returns `None` for stale handles and for instances currently
    /// sitting in the free stack - an inactive instance belongs to the
    /// pool alone.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: PoolHandle) -> Option<&L::Item> {
        if handle.epoch() != self.epoch {
            return None;
        }
        self.slots
            .get(handle.index() as usize)
            .filter(|slot| slot.active)
            .map(|slot| &slot.value)
    }

    /// Gets a mutable reference to an active instance.
    #[inline]
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut L::Item> {
        if handle.epoch() != self.epoch {
            return None;
        }
        self.slots
            .get_mut(handle.index() as usize)
            .filter(|slot| slot.active)
            .map(|slot| &mut slot.value)
    }

    /// Returns the number of instances currently lent out.
    #[inline]
    #[must_use]
    pub const fn active_count(&self) -> usize {
        self.active_count
    }

    /// Returns the number of instances waiting in the free stack.
    #[inline]
    #[must_use]
    pub fn inactive_count(&self) -> usize {
        self.free.len()
    }

    /// Returns the total number of instances the pool has alive.
    #[inline]
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the configured maximum total instance count.
    #[inline]
    #[must_use]
    pub const fn max_count(&self) -> usize {
        self.max_count
    }

    /// Returns a reference to the lifecycle hooks.
    #[inline]
    #[must_use]
    pub const fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    /// Returns a mutable reference to the lifecycle hooks.
    #[inline]
    pub fn lifecycle_mut(&mut self) -> &mut L {
        &mut self.lifecycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts every hook invocation and stamps instances with creation order.
    #[derive(Default)]
    struct Counting {
        created: usize,
        activated: usize,
        deactivated: usize,
        destroyed: usize,
    }

    impl Lifecycle for Counting {
        type Item = usize;

        fn create(&mut self) -> usize {
            let id = self.created;
            self.created += 1;
            id
        }

        fn activate(&mut self, _item: &mut usize) {
            self.activated += 1;
        }

        fn deactivate(&mut self, _item: &mut usize) {
            self.deactivated += 1;
        }

        fn destroy(&mut self, _item: usize) {
            self.destroyed += 1;
        }
    }

    fn config(max: usize, capacity: usize, prewarm: usize) -> PoolConfig {
        PoolConfig {
            max_count: max,
            initial_capacity: capacity,
            prewarm_count: prewarm,
            check_duplicates: false,
        }
    }

    fn assert_counts<L: Lifecycle>(pool: &ObjectPool<L>, active: usize, inactive: usize) {
        assert_eq!(pool.active_count(), active);
        assert_eq!(pool.inactive_count(), inactive);
        assert_eq!(pool.total_count(), active + inactive);
    }

    #[test]
    fn test_counts_hold_after_every_operation() {
        let mut pool = ObjectPool::new(&config(10, 4, 0), Counting::default());
        assert_counts(&pool, 0, 0);

        let a = pool.acquire().unwrap();
        assert_counts(&pool, 1, 0);
        let b = pool.acquire().unwrap();
        assert_counts(&pool, 2, 0);

        pool.release(a).unwrap();
        assert_counts(&pool, 1, 1);
        pool.release(b).unwrap();
        assert_counts(&pool, 0, 2);

        let _ = pool.acquire().unwrap();
        assert_counts(&pool, 1, 1);
    }

    #[test]
    fn test_reuse_order_is_lifo() {
        let mut pool = ObjectPool::new(&config(10, 4, 0), Counting::default());
        let a = pool.acquire().unwrap();
        let b = pool.acquire().unwrap();

        pool.release(a).unwrap();
        pool.release(b).unwrap();

        // B was released last, so it comes back first.
        assert_eq!(pool.acquire().unwrap(), b);
        assert_eq!(pool.acquire().unwrap(), a);
    }

    #[test]
    fn test_reuse_before_create() {
        let mut pool = ObjectPool::new(&config(10, 4, 0), Counting::default());
        let a = pool.acquire().unwrap();
        pool.release(a).unwrap();
        let _ = pool.acquire().unwrap();

        assert_eq!(pool.lifecycle().created, 1);
        assert_eq!(pool.lifecycle().activated, 2);
    }

    #[test]
    fn test_capacity_is_a_hard_ceiling() {
        let mut pool = ObjectPool::new(&config(2, 2, 0), Counting::default());
        let _ = pool.acquire().unwrap();
        let _ = pool.acquire().unwrap();
        assert_eq!(pool.total_count(), 2);

        let err = pool.acquire().unwrap_err();
        assert_eq!(err, PoolError::CapacityExceeded { max: 2 });
        assert_eq!(pool.total_count(), 2);
    }

    #[test]
    fn test_prewarm_counts() {
        let mut pool = ObjectPool::new(&config(5, 5, 3), Counting::default());
        pool.prewarm(3).unwrap();

        assert_counts(&pool, 0, 3);
        assert_eq!(pool.lifecycle().created, 3);
        assert_eq!(pool.lifecycle().activated, 3);
        assert_eq!(pool.lifecycle().deactivated, 3);
    }

    #[test]
    fn test_prewarm_stack_matches_creation_order() {
        let mut pool = ObjectPool::new(&config(5, 5, 3), Counting::default());
        pool.prewarm(3).unwrap();

        // Reverse-order release leaves the first created instance on top.
        let handle = pool.acquire().unwrap();
        assert_eq!(*pool.get(handle).unwrap(), 0);
        let handle = pool.acquire().unwrap();
        assert_eq!(*pool.get(handle).unwrap(), 1);
    }

    #[test]
    fn test_prewarm_clamps_to_max() {
        let mut pool = ObjectPool::new(&config(2, 4, 0), Counting::default());
        pool.prewarm(10).unwrap();
        assert_counts(&pool, 0, 2);
    }

    #[test]
    fn test_clear_destroys_everything_and_resets() {
        let mut pool = ObjectPool::new(&config(10, 4, 0), Counting::default());
        let active = pool.acquire().unwrap();
        let released = pool.acquire().unwrap();
        pool.release(released).unwrap();

        pool.clear();
        assert_counts(&pool, 0, 0);
        assert_eq!(pool.lifecycle().destroyed, 2);

        // Stale handles no longer resolve or release.
        assert!(pool.get(active).is_none());
        assert_eq!(
            pool.release(active),
            Err(PoolError::NotOwnedByPool { handle: active })
        );

        // The pool starts over from zero.
        let fresh = pool.acquire().unwrap();
        assert_eq!(pool.total_count(), 1);
        assert!(pool.get(fresh).is_some());
    }

    #[test]
    fn test_duplicate_release_checked() {
        let mut config = config(4, 4, 0);
        config.check_duplicates = true;
        let mut pool = ObjectPool::new(&config, Counting::default());

        let handle = pool.acquire().unwrap();
        pool.release(handle).unwrap();
        let inactive_before = pool.inactive_count();

        let err = pool.release(handle).unwrap_err();
        assert_eq!(err, PoolError::DuplicateRelease { handle });
        assert_eq!(pool.inactive_count(), inactive_before);
        assert_eq!(pool.lifecycle().deactivated, 1);
    }

    #[test]
    fn test_duplicate_release_unchecked_is_noop() {
        let mut pool = ObjectPool::new(&config(4, 4, 0), Counting::default());
        let handle = pool.acquire().unwrap();
        pool.release(handle).unwrap();

        pool.release(handle).unwrap();
        assert_counts(&pool, 0, 1);
        assert_eq!(pool.lifecycle().deactivated, 1);
    }

    #[test]
    fn test_release_of_foreign_handle() {
        let mut pool = ObjectPool::new(&config(4, 4, 0), Counting::default());
        let foreign = PoolHandle::new(99, 0);

        assert_eq!(
            pool.release(foreign),
            Err(PoolError::NotOwnedByPool { handle: foreign })
        );
        assert_counts(&pool, 0, 0);
    }

    #[test]
    fn test_inactive_instances_are_not_accessible() {
        let mut pool = ObjectPool::new(&config(4, 4, 0), Counting::default());
        let handle = pool.acquire().unwrap();
        assert!(pool.get(handle).is_some());
        assert!(pool.get_mut(handle).is_some());

        pool.release(handle).unwrap();
        assert!(pool.get(handle).is_none());
        assert!(pool.get_mut(handle).is_none());
    }

    #[test]
    fn test_zero_max_pool_never_creates() {
        let mut pool = ObjectPool::new(&config(0, 0, 0), Counting::default());
        assert_eq!(
            pool.acquire(),
            Err(PoolError::CapacityExceeded { max: 0 })
        );
        assert_eq!(pool.lifecycle().created, 0);
    }
}
