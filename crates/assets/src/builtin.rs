//! Built-in tower assets used when no manifest is configured.

use glam::DVec3;
use modlayout_core::AssetKey;
use modlayout_geom::{Aabb, Transform};
use modlayout_scene::{AssetGeometry, MeshPart};

use crate::{AssetCatalog, AssetError};

/// Key of the narrower base tower.
pub const XL_TOWER: &str = "models/XL_Tower_A";
/// Key of the wider add-on tower.
pub const XXL_TOWER: &str = "models/XXL_Tower_A";

/// Authored scale both towers are exported with.
const TOWER_SCALE: f64 = 1.2;

fn boxed(min: [f64; 3], max: [f64; 3]) -> MeshPart {
    MeshPart::from_box(Aabb::new(DVec3::from_array(min), DVec3::from_array(max)))
}

/// Tower body plus a recessed plinth. Pivots are deliberately off-center,
/// the way the exported models come out of the authoring tool.
fn tower(
    key: &str,
    width: f64,
    height: f64,
    depth: f64,
    pivot: DVec3,
) -> Result<AssetGeometry, AssetError> {
    let inset = 0.02;
    let plinth = 0.1;
    let body = boxed(
        [-pivot.x, plinth - pivot.y, -pivot.z],
        [width - pivot.x, height - pivot.y, depth - pivot.z],
    );
    let base = boxed(
        [inset - pivot.x, -pivot.y, inset - pivot.z],
        [width - inset - pivot.x, plinth - pivot.y, depth - inset - pivot.z],
    );
    Ok(AssetGeometry::new(AssetKey::parse(key)?, vec![body, base]))
}

impl AssetCatalog {
    /// Catalog holding the XL and XXL towers.
    pub fn builtin() -> Result<Self, AssetError> {
        let initial = Transform::IDENTITY.with_scale(TOWER_SCALE);
        let mut catalog = Self::new();
        catalog.insert(tower(XL_TOWER, 0.9, 2.0, 0.6, DVec3::new(0.0, 0.0, 0.6))?, initial)?;
        catalog.insert(tower(XXL_TOWER, 1.4, 2.2, 0.7, DVec3::new(0.7, -0.05, 0.1))?, initial)?;
        Ok(catalog)
    }
}
