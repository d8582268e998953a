//! # Pool Handles
//!
//! Handles are lightweight identifiers consisting of:
//! - An index into the pool's slot storage
//! - An epoch counter for detecting references into a destroyed pool

/// Opaque reference to an instance managed by a pool.
///
/// The handle is split into two parts:
/// - Lower 32 bits: Index into the pool's slot storage
/// - Upper 32 bits: Pool epoch at the time the handle was issued
///
/// The epoch is bumped whenever the pool destroys its instances, so
/// handles issued before a `clear` can never resolve to an instance
/// created after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PoolHandle(u64);

impl PoolHandle {
    /// Creates a new handle from slot index and pool epoch.
    #[inline]
    #[must_use]
    pub(crate) const fn new(index: u32, epoch: u32) -> Self {
        Self(((epoch as u64) << 32) | (index as u64))
    }

    /// Returns the slot index portion of the handle.
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> u32 {
        self.0 as u32
    }

    /// Returns the epoch portion of the handle.
    #[inline]
    #[must_use]
    pub(crate) const fn epoch(self) -> u32 {
        (self.0 >> 32) as u32
    }
}
