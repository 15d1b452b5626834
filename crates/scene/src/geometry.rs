use glam::{DAffine3, DVec3};
use modlayout_core::AssetKey;
use modlayout_geom::{Aabb, Transform};

/// One mesh node of a source asset: vertices in the node's own space plus
/// the node's transform relative to the asset root.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshPart {
    /// Placement of this part inside the asset.
    pub transform: Transform,
    /// Vertex positions in part space.
    pub vertices: Vec<DVec3>,
}

impl MeshPart {
    /// Part with the given vertices and an identity transform.
    pub fn new(vertices: Vec<DVec3>) -> Self {
        Self {
            transform: Transform::IDENTITY,
            vertices,
        }
    }

    /// Part holding the eight corners of `bounds`.
    pub fn from_box(bounds: Aabb) -> Self {
        Self::new(bounds.corners().to_vec())
    }
}

/// Immutable source geometry for one asset key.
///
/// Shared between every module instantiated from the same key; the bounding
/// box in asset space is arbitrary (not centered, not floor-seated).
#[derive(Debug, Clone, PartialEq)]
pub struct AssetGeometry {
    /// Key the asset was loaded under.
    pub key: AssetKey,
    /// Mesh nodes making up the asset.
    pub parts: Vec<MeshPart>,
}

impl AssetGeometry {
    /// Construct geometry from its parts.
    pub fn new(key: AssetKey, parts: Vec<MeshPart>) -> Self {
        Self { key, parts }
    }

    /// Bounds of every vertex under `frame * part.transform`.
    ///
    /// Returns `None` when the asset has no vertices at all.
    pub fn bounds_in(&self, frame: &DAffine3) -> Option<Aabb> {
        let mut bounds = Aabb::empty();
        for part in &self.parts {
            let affine = *frame * part.transform.to_affine();
            for v in &part.vertices {
                bounds.expand_to_include(affine.transform_point3(*v));
            }
        }
        (!bounds.is_empty()).then_some(bounds)
    }

    /// Bounds in asset space.
    pub fn local_bounds(&self) -> Option<Aabb> {
        self.bounds_in(&DAffine3::IDENTITY)
    }

    /// Total vertex count across parts.
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(|p| p.vertices.len()).sum()
    }
}
