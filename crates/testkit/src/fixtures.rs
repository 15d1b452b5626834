//! Box-shaped assets with corner pivots, the simplest "authored" geometry.

use std::sync::Arc;

use glam::DVec3;
use modlayout_core::AssetKey;
use modlayout_geom::{Aabb, Transform};
use modlayout_scene::{AssetGeometry, MeshPart, Module};

/// Geometry spanning `[0, size]`: the pivot sits on the min corner.
pub fn box_geometry(key: &str, size: DVec3) -> Arc<AssetGeometry> {
    let key = AssetKey::parse(key).expect("fixture key should parse");
    Arc::new(AssetGeometry::new(
        key,
        vec![MeshPart::from_box(Aabb::new(DVec3::ZERO, size))],
    ))
}

/// Module of [`box_geometry`] placed at `translation`.
pub fn box_module(key: &str, size: DVec3, translation: DVec3) -> Module {
    Module::new(box_geometry(key, size), Transform::from_translation(translation))
}

/// Geometry spanning `[-pivot, size - pivot]`, for pivots anywhere in or
/// around the box.
pub fn pivoted_box_geometry(key: &str, size: DVec3, pivot: DVec3) -> Arc<AssetGeometry> {
    let key = AssetKey::parse(key).expect("fixture key should parse");
    Arc::new(AssetGeometry::new(
        key,
        vec![MeshPart::from_box(Aabb::new(-pivot, size - pivot))],
    ))
}
