#![warn(missing_docs)]
//! Asset manifest schema, catalog and provider.

mod builtin;
mod catalog;
mod loader;
mod provider;

pub use builtin::{XL_TOWER, XXL_TOWER};
pub use catalog::AssetCatalog;
pub use loader::{catalog_from_file, catalog_from_str};
pub use provider::{AssetProvider, AssetState, DeferredProvider};

use modlayout_core::AssetKeyError;
use serde::Deserialize;
use thiserror::Error;

/// One asset as written in a JSON manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetDefinition {
    /// Stable identifier (e.g. "models/XL_Tower_A").
    pub key: String,
    /// Authored translation every new instance starts with.
    #[serde(default)]
    pub translation: Option<[f64; 3]>,
    /// Authored XYZ Euler rotation (radians) every new instance starts with.
    #[serde(default)]
    pub rotation: Option<[f64; 3]>,
    /// Authored uniform scale every new instance starts with.
    #[serde(default)]
    pub scale: Option<f64>,
    /// Mesh nodes of the asset.
    pub parts: Vec<PartDefinition>,
}

/// One mesh node inside an [`AssetDefinition`].
#[derive(Debug, Clone, Deserialize)]
pub struct PartDefinition {
    /// Translation relative to the asset root.
    #[serde(default)]
    pub translation: Option<[f64; 3]>,
    /// XYZ Euler rotation relative to the asset root.
    #[serde(default)]
    pub rotation: Option<[f64; 3]>,
    /// Uniform scale relative to the asset root.
    #[serde(default)]
    pub scale: Option<f64>,
    /// Box primitive, expanded to its eight corners.
    #[serde(default, rename = "box")]
    pub bounds: Option<BoxDefinition>,
    /// Explicit vertex positions.
    #[serde(default)]
    pub vertices: Option<Vec<[f64; 3]>>,
}

/// Min/max corners of a box part.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoxDefinition {
    /// Minimum corner.
    pub min: [f64; 3],
    /// Maximum corner.
    pub max: [f64; 3],
}

/// Errors emitted while loading manifests or instantiating assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Wrap IO errors when reading manifests.
    #[error("failed to read asset manifest: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
    /// Malformed asset key.
    #[error("invalid asset key: {0}")]
    Key(#[from] AssetKeyError),
    /// Manifest content that parses but cannot be used.
    #[error("invalid asset {key}: {reason}")]
    Invalid {
        /// Key of the offending asset.
        key: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The catalog has no asset under this key.
    #[error("unknown asset: {0}")]
    UnknownAsset(String),
}

/// Parse a JSON string into asset definitions.
pub fn load_definitions_from_str(input: &str) -> Result<Vec<AssetDefinition>, AssetError> {
    Ok(serde_json::from_str(input)?)
}
