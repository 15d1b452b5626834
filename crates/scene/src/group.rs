use glam::{DAffine3, DVec3};
use modlayout_core::AssetKey;
use modlayout_geom::{Aabb, Transform};
use thiserror::Error;
use tracing::trace;

use crate::{Module, ModuleSlot, TransformSink};

/// Errors raised when the scene is not ready for a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// A slot has no transform handle yet (its asset is still loading).
    #[error("module {index} ({key}) has no transform handle yet")]
    MissingTransform {
        /// Slot index in placement order.
        index: usize,
        /// Key the slot is waiting on.
        key: AssetKey,
    },
}

/// Root transform owning an ordered sequence of modules.
///
/// World matrices are computed on demand from the current transforms, so
/// bounds read after a mutation are never stale.
#[derive(Debug, Clone)]
pub struct Group {
    /// Host-provided world transform of the group's parent.
    pub parent: DAffine3,
    /// Group transform relative to `parent`.
    pub transform: Transform,
    slots: Vec<ModuleSlot>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    /// Empty group at the world origin.
    pub fn new() -> Self {
        Self {
            parent: DAffine3::IDENTITY,
            transform: Transform::IDENTITY,
            slots: Vec::new(),
        }
    }

    /// Empty group under a parent transform.
    pub fn with_parent(parent: DAffine3) -> Self {
        Self {
            parent,
            ..Self::new()
        }
    }

    /// Append a slot to the end of the placement order, returning its index.
    pub fn push(&mut self, slot: impl Into<ModuleSlot>) -> usize {
        self.slots.push(slot.into());
        self.slots.len() - 1
    }

    /// Number of slots (pending ones included).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the group holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in placement order.
    pub fn slots(&self) -> &[ModuleSlot] {
        &self.slots
    }

    /// Mutable slot access, used to resolve pending slots.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut ModuleSlot> {
        self.slots.get_mut(index)
    }

    /// Ready module at `index`.
    pub fn module(&self, index: usize) -> Option<&Module> {
        self.slots.get(index).and_then(ModuleSlot::module)
    }

    /// Mutable ready module at `index`.
    pub fn module_mut(&mut self, index: usize) -> Option<&mut Module> {
        self.slots.get_mut(index).and_then(ModuleSlot::module_mut)
    }

    /// Iterate ready modules in placement order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.slots.iter().filter_map(ModuleSlot::module)
    }

    /// First slot still waiting on its asset.
    pub fn first_pending(&self) -> Option<(usize, &AssetKey)> {
        self.slots
            .iter()
            .enumerate()
            .find(|(_, slot)| slot.is_pending())
            .map(|(index, slot)| (index, slot.key()))
    }

    /// Every module, or an error naming the first slot without a transform.
    ///
    /// Layout passes take this up front so nothing is mutated when any
    /// module is missing.
    pub fn ready_modules_mut(&mut self) -> Result<Vec<&mut Module>, SceneError> {
        if let Some((index, key)) = self.first_pending() {
            return Err(SceneError::MissingTransform {
                index,
                key: key.clone(),
            });
        }
        Ok(self
            .slots
            .iter_mut()
            .filter_map(ModuleSlot::module_mut)
            .collect())
    }

    /// Group-to-world affine (`parent * transform`).
    pub fn world_affine(&self) -> DAffine3 {
        self.parent * self.transform.to_affine()
    }

    /// Convert a world-space point into the group's local space.
    pub fn world_to_local(&self, point: DVec3) -> DVec3 {
        self.world_affine().inverse().transform_point3(point)
    }

    /// Convert a group-local point into world space.
    pub fn local_to_world(&self, point: DVec3) -> DVec3 {
        self.world_affine().transform_point3(point)
    }

    /// Bounds of the module at `index` in the group's local frame.
    pub fn module_bounds_local(&self, index: usize) -> Option<Aabb> {
        self.module(index).map(Module::local_bounds)
    }

    /// Bounds of the module at `index` in world space.
    pub fn module_bounds_world(&self, index: usize) -> Option<Aabb> {
        let world = self.world_affine();
        self.module(index).map(|m| m.bounds_in(&world))
    }

    /// Union of every ready module's bounds in the group's local frame.
    pub fn union_bounds_local(&self) -> Option<Aabb> {
        self.union_bounds_in(&DAffine3::IDENTITY)
    }

    /// Union of every ready module's bounds in world space.
    pub fn union_bounds_world(&self) -> Option<Aabb> {
        self.union_bounds_in(&self.world_affine())
    }

    /// Union of every ready module's bounds under `frame * module`.
    pub fn union_bounds_in(&self, frame: &DAffine3) -> Option<Aabb> {
        self.modules()
            .map(|m| m.bounds_in(frame))
            .reduce(|acc, b| acc.union(&b))
    }

    /// Push the group transform and every ready module transform to `sink`.
    pub fn sync_to(&self, sink: &mut dyn TransformSink) {
        sink.sync_group(&self.transform);
        for (index, slot) in self.slots.iter().enumerate() {
            if let ModuleSlot::Ready(module) = slot {
                sink.sync_module(index, &module.key, &module.transform);
            }
        }
        sink.finish_frame();
        trace!(slots = self.slots.len(), "synced group transforms");
    }
}
