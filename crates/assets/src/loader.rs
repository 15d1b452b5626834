use std::fs;
use std::path::Path;

use crate::{AssetCatalog, AssetError};

/// Load an asset catalog from the JSON manifest at `path`.
pub fn catalog_from_file(path: &Path) -> Result<AssetCatalog, AssetError> {
    let data = fs::read_to_string(path)?;
    catalog_from_str(&data)
}

/// Load an asset catalog from an in-memory JSON manifest.
pub fn catalog_from_str(input: &str) -> Result<AssetCatalog, AssetError> {
    let defs = crate::load_definitions_from_str(input)?;
    AssetCatalog::from_definitions(defs)
}
