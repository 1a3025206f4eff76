//! Host-side transforms and the seam animation units write through.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tilehop_curve_core::vec3::{self, Vec3};

use crate::rotation::{self, Quat};

/// Stable string key naming one host object (e.g. "piece-3/foot").
pub type TargetHandle = String;

/// Position, rotation (x,y,z,w) and non-uniform local scale of one target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: vec3::ZERO,
            rotation: rotation::IDENTITY,
            scale: vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Local +y axis in world space.
    pub fn up(&self) -> Vec3 {
        rotation::rotate(self.rotation, vec3::UP)
    }

    /// Local +z axis in world space.
    pub fn forward(&self) -> Vec3 {
        rotation::rotate(self.rotation, [0.0, 0.0, 1.0])
    }
}

/// Mutable access to host transforms by handle.
///
/// Adapters implement this over their scene representation; units never hold
/// references to host objects between steps.
pub trait TransformHost {
    fn transform_mut(&mut self, target: &str) -> Option<&mut Transform>;
}

/// In-memory transform host.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransformStore {
    items: HashMap<TargetHandle, Transform>,
}

impl TransformStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, target: impl Into<TargetHandle>, transform: Transform) {
        self.items.insert(target.into(), transform);
    }

    pub fn get(&self, target: &str) -> Option<&Transform> {
        self.items.get(target)
    }

    pub fn remove(&mut self, target: &str) -> Option<Transform> {
        self.items.remove(target)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl TransformHost for TransformStore {
    fn transform_mut(&mut self, target: &str) -> Option<&mut Transform> {
        self.items.get_mut(target)
    }
}

/// Look up `target`, warning once per unit when the host does not know it.
pub(crate) fn resolve<'h>(
    host: &'h mut dyn TransformHost,
    target: &str,
    reported: &mut bool,
) -> Option<&'h mut Transform> {
    let found = host.transform_mut(target);
    if found.is_none() && !*reported {
        *reported = true;
        log::warn!("animation target '{target}' not found in host; skipping writes");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_round_trips_transforms() {
        let mut store = TransformStore::new();
        store.insert("a", Transform::from_position([1.0, 2.0, 3.0]));
        assert_eq!(store.len(), 1);
        store.transform_mut("a").unwrap().scale = [2.0, 2.0, 2.0];
        assert_eq!(store.get("a").unwrap().scale, [2.0, 2.0, 2.0]);
        assert!(store.transform_mut("missing").is_none());
    }

    #[test]
    fn default_axes() {
        let t = Transform::default();
        assert_eq!(t.up(), [0.0, 1.0, 0.0]);
        assert_eq!(t.forward(), [0.0, 0.0, 1.0]);
    }
}
