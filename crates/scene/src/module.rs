use std::sync::Arc;

use glam::{DAffine3, DVec3};
use modlayout_core::AssetKey;
use modlayout_geom::{Aabb, Transform};

use crate::AssetGeometry;

/// One placed instance of a source asset.
///
/// The transform is private to this instance; the geometry is shared with
/// every other instance of the same key and never mutated.
#[derive(Debug, Clone)]
pub struct Module {
    /// Key the module was instantiated from.
    pub key: AssetKey,
    geometry: Arc<AssetGeometry>,
    /// Local transform relative to the owning group.
    pub transform: Transform,
}

impl Module {
    /// Instantiate `geometry` with its own transform.
    pub fn new(geometry: Arc<AssetGeometry>, transform: Transform) -> Self {
        Self {
            key: geometry.key.clone(),
            geometry,
            transform,
        }
    }

    /// Shared source geometry.
    pub fn geometry(&self) -> &Arc<AssetGeometry> {
        &self.geometry
    }

    /// Bounds of the module in the space `frame` maps the group frame into.
    ///
    /// Pass `DAffine3::IDENTITY` for group-local bounds or the group's world
    /// affine for world bounds. A module without vertices collapses to a
    /// point at its pivot.
    pub fn bounds_in(&self, frame: &DAffine3) -> Aabb {
        let affine = *frame * self.transform.to_affine();
        self.geometry.bounds_in(&affine).unwrap_or_else(|| {
            let pivot = affine.transform_point3(DVec3::ZERO);
            Aabb::new(pivot, pivot)
        })
    }

    /// Bounds in the owning group's local frame.
    pub fn local_bounds(&self) -> Aabb {
        self.bounds_in(&DAffine3::IDENTITY)
    }

    /// Group-frame bounds as if the module sat at the group origin.
    ///
    /// Depends only on rotation, scale and geometry; adding the translation
    /// gives [`Module::local_bounds`].
    pub fn pivot_bounds(&self) -> Aabb {
        let at_origin = Transform {
            translation: DVec3::ZERO,
            ..self.transform
        };
        self.geometry
            .bounds_in(&at_origin.to_affine())
            .unwrap_or_else(|| Aabb::new(DVec3::ZERO, DVec3::ZERO))
    }
}

/// Slot in a group's ordered module sequence.
#[derive(Debug, Clone)]
pub enum ModuleSlot {
    /// The asset is still loading; no transform handle exists yet.
    Pending {
        /// Key that was requested.
        key: AssetKey,
    },
    /// A live module.
    Ready(Module),
}

impl ModuleSlot {
    /// Key of the module in this slot.
    pub fn key(&self) -> &AssetKey {
        match self {
            ModuleSlot::Pending { key } => key,
            ModuleSlot::Ready(module) => &module.key,
        }
    }

    /// The module, if its transform handle exists.
    pub fn module(&self) -> Option<&Module> {
        match self {
            ModuleSlot::Pending { .. } => None,
            ModuleSlot::Ready(module) => Some(module),
        }
    }

    /// Mutable access to the module, if ready.
    pub fn module_mut(&mut self) -> Option<&mut Module> {
        match self {
            ModuleSlot::Pending { .. } => None,
            ModuleSlot::Ready(module) => Some(module),
        }
    }

    /// True while the asset is still loading.
    pub fn is_pending(&self) -> bool {
        matches!(self, ModuleSlot::Pending { .. })
    }
}

impl From<Module> for ModuleSlot {
    fn from(module: Module) -> Self {
        ModuleSlot::Ready(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeshPart;

    #[test]
    fn instances_share_geometry_but_not_transforms() {
        let geometry = Arc::new(AssetGeometry::new(
            AssetKey::parse("models/box").unwrap(),
            vec![MeshPart::from_box(Aabb::new(DVec3::ZERO, DVec3::ONE))],
        ));
        let mut a = Module::new(Arc::clone(&geometry), Transform::IDENTITY);
        let b = Module::new(Arc::clone(&geometry), Transform::IDENTITY);
        a.transform.translation.x = 4.0;

        assert!(Arc::ptr_eq(a.geometry(), b.geometry()));
        assert_eq!(b.transform, Transform::IDENTITY);
        assert_eq!(a.local_bounds().min.x, 4.0);
        assert_eq!(b.local_bounds().min.x, 0.0);
        assert_eq!(a.pivot_bounds(), b.pivot_bounds());
    }

    #[test]
    fn vertexless_module_is_a_point_at_its_pivot() {
        let geometry = Arc::new(AssetGeometry::new(
            AssetKey::parse("models/empty").unwrap(),
            Vec::new(),
        ));
        let module = Module::new(
            geometry,
            Transform::from_translation(DVec3::new(1.0, 2.0, 3.0)),
        );
        let bounds = module.local_bounds();
        assert_eq!(bounds.min, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds.size(), DVec3::ZERO);
    }
}
