use std::collections::BTreeMap;
use std::sync::Arc;

use glam::DVec3;
use modlayout_core::AssetKey;
use modlayout_geom::{Aabb, Transform};
use modlayout_scene::{AssetGeometry, MeshPart, Module};

use crate::{AssetDefinition, AssetError, PartDefinition};

#[derive(Debug, Clone)]
struct CatalogEntry {
    geometry: Arc<AssetGeometry>,
    initial: Transform,
}

/// Resident source assets keyed by [`AssetKey`].
///
/// Geometry is held behind `Arc` and never handed out mutably; every call to
/// [`AssetCatalog::instantiate`] yields a module with its own transform.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    entries: BTreeMap<AssetKey, CatalogEntry>,
}

impl AssetCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from parsed manifest definitions, validating each one.
    pub fn from_definitions(defs: Vec<AssetDefinition>) -> Result<Self, AssetError> {
        let mut catalog = Self::new();
        for def in defs {
            let (geometry, initial) = geometry_from_definition(def)?;
            catalog.insert(geometry, initial)?;
        }
        Ok(catalog)
    }

    /// Register geometry under its key with the transform new instances start from.
    pub fn insert(
        &mut self,
        geometry: AssetGeometry,
        initial: Transform,
    ) -> Result<(), AssetError> {
        let key = geometry.key.clone();
        if self.entries.contains_key(&key) {
            return Err(AssetError::Invalid {
                key: key.to_string(),
                reason: "duplicate asset key".into(),
            });
        }
        self.entries.insert(
            key,
            CatalogEntry {
                geometry: Arc::new(geometry),
                initial,
            },
        );
        Ok(())
    }

    /// Shared geometry for `key`.
    pub fn get(&self, key: &AssetKey) -> Option<&Arc<AssetGeometry>> {
        self.entries.get(key).map(|entry| &entry.geometry)
    }

    /// Transform a fresh instance of `key` starts with.
    pub fn initial_transform(&self, key: &AssetKey) -> Option<Transform> {
        self.entries.get(key).map(|entry| entry.initial)
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &AssetKey> {
        self.entries.keys()
    }

    /// Number of registered assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no assets are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create an independent module instance of `key`.
    pub fn instantiate(&self, key: &AssetKey) -> Result<Module, AssetError> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| AssetError::UnknownAsset(key.to_string()))?;
        Ok(Module::new(Arc::clone(&entry.geometry), entry.initial))
    }
}

fn geometry_from_definition(
    def: AssetDefinition,
) -> Result<(AssetGeometry, Transform), AssetError> {
    let key = AssetKey::parse(&def.key)?;
    let invalid = |reason: String| AssetError::Invalid {
        key: key.to_string(),
        reason,
    };

    if def.parts.is_empty() {
        return Err(invalid("asset has no parts".into()));
    }

    let initial = transform_from(def.translation, def.rotation, def.scale).map_err(&invalid)?;
    let mut parts = Vec::with_capacity(def.parts.len());
    for (index, part) in def.parts.into_iter().enumerate() {
        let part = part_from_definition(part)
            .map_err(|reason| invalid(format!("part {index}: {reason}")))?;
        parts.push(part);
    }

    Ok((AssetGeometry::new(key.clone(), parts), initial))
}

fn part_from_definition(def: PartDefinition) -> Result<MeshPart, String> {
    let transform = transform_from(def.translation, def.rotation, def.scale)?;
    if def.bounds.is_none() && def.vertices.is_none() {
        return Err("part needs a box or vertices".into());
    }

    let mut vertices = Vec::new();
    if let Some(bounds) = def.bounds {
        let (min, max) = (vec3(bounds.min)?, vec3(bounds.max)?);
        if !min.cmple(max).all() {
            return Err(format!("box min {min} exceeds max {max}"));
        }
        vertices.extend(Aabb::new(min, max).corners());
    }
    if let Some(points) = def.vertices {
        for p in points {
            vertices.push(vec3(p)?);
        }
    }

    Ok(MeshPart {
        transform,
        vertices,
    })
}

fn transform_from(
    translation: Option<[f64; 3]>,
    rotation: Option<[f64; 3]>,
    scale: Option<f64>,
) -> Result<Transform, String> {
    let mut transform = Transform::IDENTITY;
    if let Some(t) = translation {
        transform.translation = vec3(t)?;
    }
    if let Some(r) = rotation {
        transform.rotation = vec3(r)?;
    }
    if let Some(s) = scale {
        if !(s.is_finite() && s > 0.0) {
            return Err(format!("scale must be positive and finite (got {s})"));
        }
        transform.scale = s;
    }
    Ok(transform)
}

fn vec3(v: [f64; 3]) -> Result<DVec3, String> {
    let v = DVec3::from_array(v);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("non-finite coordinate {v}"))
    }
}
