//! Spawn policies - how instances are created, woken up, and put to sleep.
//!
//! A policy is a strategy object injected into the spawner at
//! construction. Overriding a single step means implementing
//! [`SpawnPolicy`] and changing one method; there is no subclass tower
//! and no externally invokable event handles.

use crate::placement::{Placement, Transform};

/// What a pooled entity must support for the default policies to work.
pub trait Spawnable {
    /// Enables or disables the entity in the world.
    fn set_active(&mut self, active: bool);

    /// Whether the entity is currently enabled.
    fn is_active(&self) -> bool;

    /// Moves the entity to the given transform.
    fn apply_transform(&mut self, transform: &Transform);
}

/// The creation strategy and lifecycle policies of a spawner.
///
/// Defaults mirror the standard behavior for pooled gameplay entities:
/// activation enables the instance, deactivation disables it, and
/// destruction simply drops it. Only `create` has no sensible default.
pub trait SpawnPolicy {
    /// The entity type this policy produces.
    type Entity: Spawnable;

    /// Produces a brand new instance at the given placement.
    fn create(&mut self, placement: &Placement) -> Self::Entity;

    /// Prepares an instance as it leaves the pool. Default: enable it.
    fn activate(&mut self, entity: &mut Self::Entity) {
        entity.set_active(true);
    }

    /// Cleans an instance up as it returns to the pool. Default: disable it.
    fn deactivate(&mut self, entity: &mut Self::Entity) {
        entity.set_active(false);
    }

    /// Tears an instance down for good. Default: drop it.
    fn destroy(&mut self, entity: Self::Entity) {
        drop(entity);
    }
}

/// The default creation strategy: clone a template ("prefab") and stamp
/// the spawner's placement transform onto the clone.
#[derive(Clone, Debug)]
pub struct TemplatePolicy<T: Spawnable + Clone> {
    template: T,
}

impl<T: Spawnable + Clone> TemplatePolicy<T> {
    /// Creates a policy that clones `template` for every new instance.
    #[must_use]
    pub const fn new(template: T) -> Self {
        Self { template }
    }

    /// Returns the template new instances are cloned from.
    #[must_use]
    pub const fn template(&self) -> &T {
        &self.template
    }
}

impl<T: Spawnable + Clone> SpawnPolicy for TemplatePolicy<T> {
    type Entity = T;

    fn create(&mut self, placement: &Placement) -> T {
        let mut entity = self.template.clone();
        entity.apply_transform(&placement.transform);
        entity
    }
}
