//! Placement types for newly spawned entities.
//!
//! These describe where an instance lands in the world and under which
//! node of the scene hierarchy it is inserted.

use serde::{Deserialize, Serialize};

/// Name of the hierarchy node used when no parent is configured.
pub const ROOT_PARENT: &str = "root";

/// 3D Vector - position, direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

/// Position and facing direction of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World position.
    pub position: Vec3,
    /// Facing direction (degrees, 0 = +Z, 90 = +X).
    pub yaw: f32,
}

impl Transform {
    /// Creates a new transform.
    #[must_use]
    pub const fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }
}

/// Where newly created instances are placed.
///
/// A placement is resolved once, when the spawner is initialized, and is
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Transform stamped onto every freshly created instance.
    pub transform: Transform,
    /// Scene hierarchy node the instance is inserted under.
    pub parent: String,
}

impl Placement {
    /// Creates a placement under the given parent node.
    #[must_use]
    pub fn new(transform: Transform, parent: impl Into<String>) -> Self {
        Self {
            transform,
            parent: parent.into(),
        }
    }

    /// Creates a placement at the hierarchy root.
    #[must_use]
    pub fn at_root(transform: Transform) -> Self {
        Self::new(transform, ROOT_PARENT)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::at_root(Transform::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_array_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec3::from_array(v.to_array()), v);
    }

    #[test]
    fn test_default_placement_is_root() {
        let placement = Placement::default();
        assert_eq!(placement.parent, ROOT_PARENT);
        assert_eq!(placement.transform, Transform::default());
    }
}
