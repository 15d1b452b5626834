use glam::DVec3;
use modlayout_geom::{Aabb, Transform};
use modlayout_scene::Group;
use serde::Serialize;

/// Map `-0.0` to `0.0` so equal layouts serialize and hash identically.
fn canonical(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

fn canonical_vec(v: DVec3) -> [f64; 3] {
    [canonical(v.x), canonical(v.y), canonical(v.z)]
}

/// Serializable transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransformRecord {
    /// Translation relative to the parent.
    pub translation: [f64; 3],
    /// XYZ Euler rotation in radians.
    pub rotation: [f64; 3],
    /// Uniform scale.
    pub scale: f64,
}

impl From<&Transform> for TransformRecord {
    fn from(t: &Transform) -> Self {
        Self {
            translation: canonical_vec(t.translation),
            rotation: canonical_vec(t.rotation),
            scale: canonical(t.scale),
        }
    }
}

/// Serializable bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundsRecord {
    /// Minimum corner.
    pub min: [f64; 3],
    /// Maximum corner.
    pub max: [f64; 3],
}

impl From<&Aabb> for BoundsRecord {
    fn from(b: &Aabb) -> Self {
        Self {
            min: canonical_vec(b.min),
            max: canonical_vec(b.max),
        }
    }
}

/// Final placement of one module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModulePlacement {
    /// Slot index in placement order.
    pub index: usize,
    /// Asset key.
    pub key: String,
    /// Local transform relative to the group.
    pub transform: TransformRecord,
    /// World-space bounds.
    pub bounds: BoundsRecord,
}

/// Snapshot of a group after a layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    /// Placement mode label (`packed` or `append`).
    pub mode: String,
    /// Group transform relative to its parent.
    pub group: TransformRecord,
    /// Every ready module in placement order.
    pub modules: Vec<ModulePlacement>,
    /// World-space union of all module bounds.
    pub union: Option<BoundsRecord>,
}

impl LayoutReport {
    /// Capture the current state of `group`.
    pub fn capture(group: &Group, mode: &str) -> Self {
        let world = group.world_affine();
        let modules = group
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.module().map(|m| (index, m)))
            .map(|(index, module)| ModulePlacement {
                index,
                key: module.key.to_string(),
                transform: TransformRecord::from(&module.transform),
                bounds: BoundsRecord::from(&module.bounds_in(&world)),
            })
            .collect();

        Self {
            mode: mode.to_string(),
            group: TransformRecord::from(&group.transform),
            modules,
            union: group.union_bounds_world().as_ref().map(BoundsRecord::from),
        }
    }

    /// Blake3 hex digest over every transform and bound in the report.
    ///
    /// Two runs with identical inputs produce identical digests.
    pub fn digest(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.mode.as_bytes());
        hash_transform(&mut hasher, &self.group);
        for placement in &self.modules {
            hasher.update(&(placement.index as u64).to_le_bytes());
            hasher.update(placement.key.as_bytes());
            hash_transform(&mut hasher, &placement.transform);
            hash_bounds(&mut hasher, &placement.bounds);
        }
        if let Some(union) = &self.union {
            hash_bounds(&mut hasher, union);
        }
        hasher.finalize().to_hex().to_string()
    }
}

fn hash_transform(hasher: &mut blake3::Hasher, t: &TransformRecord) {
    hasher.update(bytemuck::cast_slice(&t.translation));
    hasher.update(bytemuck::cast_slice(&t.rotation));
    hasher.update(&t.scale.to_le_bytes());
}

fn hash_bounds(hasher: &mut blake3::Hasher, b: &BoundsRecord) {
    hasher.update(bytemuck::cast_slice(&b.min));
    hasher.update(bytemuck::cast_slice(&b.max));
}

#[cfg(test)]
mod tests {
    use super::*;
    use modlayout_testkit::box_module;

    #[test]
    fn negative_zero_is_canonicalized() {
        let mut group = Group::new();
        group.transform.translation = DVec3::new(-0.0, 0.0, -0.0);
        let report = LayoutReport::capture(&group, "packed");
        let json = serde_json::to_string(&report.group).unwrap();
        assert!(!json.contains("-0.0"), "{json}");
        assert!(report.union.is_none());
    }

    #[test]
    fn digest_tracks_transforms() {
        let mut group = Group::new();
        group.push(box_module("models/a", DVec3::ONE, DVec3::ZERO));
        let a = LayoutReport::capture(&group, "packed");
        let b = LayoutReport::capture(&group, "packed");
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);

        group.module_mut(0).unwrap().transform.translation.x = 0.5;
        let c = LayoutReport::capture(&group, "packed");
        assert_ne!(a.digest(), c.digest());
        assert_eq!(c.modules[0].bounds.min[0], 0.5);
    }
}
