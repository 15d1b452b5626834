use std::collections::BTreeSet;

use modlayout_core::AssetKey;
use modlayout_scene::Module;
use tracing::debug;

use crate::AssetCatalog;

/// Outcome of requesting an asset instance.
#[derive(Debug, Clone)]
pub enum AssetState {
    /// A fresh, privately owned instance.
    Ready(Module),
    /// The asset exists but is not resident yet; ask again later.
    Loading,
    /// No asset is registered under the key.
    Missing,
}

/// Source of module instances keyed by [`AssetKey`].
///
/// Repeated requests for one key must return independent instances whose
/// geometry has the same intrinsic bounds.
pub trait AssetProvider {
    /// Request a new instance of `key`.
    fn request(&self, key: &AssetKey) -> AssetState;
}

impl AssetProvider for AssetCatalog {
    fn request(&self, key: &AssetKey) -> AssetState {
        match self.instantiate(key) {
            Ok(module) => AssetState::Ready(module),
            Err(_) => AssetState::Missing,
        }
    }
}

/// Provider that reports selected keys as still loading until released.
///
/// Stands in for an asynchronous loader when driving the layout host.
#[derive(Debug, Clone)]
pub struct DeferredProvider {
    catalog: AssetCatalog,
    loading: BTreeSet<AssetKey>,
}

impl DeferredProvider {
    /// Wrap `catalog` with nothing held back.
    pub fn new(catalog: AssetCatalog) -> Self {
        Self {
            catalog,
            loading: BTreeSet::new(),
        }
    }

    /// Report `key` as loading until [`DeferredProvider::release`] is called.
    pub fn hold(&mut self, key: AssetKey) {
        self.loading.insert(key);
    }

    /// Mark `key` as resident.
    pub fn release(&mut self, key: &AssetKey) {
        if self.loading.remove(key) {
            debug!(%key, "asset released");
        }
    }

    /// Mark every held key as resident.
    pub fn release_all(&mut self) {
        self.loading.clear();
    }

    /// Underlying catalog.
    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }
}

impl AssetProvider for DeferredProvider {
    fn request(&self, key: &AssetKey) -> AssetState {
        if self.catalog.get(key).is_none() {
            return AssetState::Missing;
        }
        if self.loading.contains(key) {
            return AssetState::Loading;
        }
        self.catalog.request(key)
    }
}
