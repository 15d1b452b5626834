//! Event-driven front end over the layout engine.
//!
//! Hosts call [`LayoutSession::append`] when the user adds a module and
//! [`LayoutSession::set_mode`] / [`LayoutSession::set_params`] when a layout
//! parameter changes. Each trigger reruns the whole pipeline against the
//! current geometry, or skips it while an asset is still loading.

use anyhow::{bail, Result};
use modlayout_assets::{AssetProvider, AssetState};
use modlayout_core::{AssetKey, LayoutMode, LayoutParams};
use modlayout_layout::{layout, LayoutReport};
use modlayout_scene::{Group, ModuleSlot, TransformSink};
use tracing::{debug, info, warn};

pub struct LayoutSession<P: AssetProvider> {
    provider: P,
    group: Group,
    mode: LayoutMode,
    last_report: Option<LayoutReport>,
}

impl<P: AssetProvider> LayoutSession<P> {
    pub fn new(provider: P, mode: LayoutMode) -> Self {
        Self {
            provider,
            group: Group::new(),
            mode,
            last_report: None,
        }
    }

    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Group access for host-driven edits such as setting the parent frame.
    pub fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }

    pub fn mode(&self) -> &LayoutMode {
        &self.mode
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Report of the most recent completed pass.
    pub fn last_report(&self) -> Option<&LayoutReport> {
        self.last_report.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.group.first_pending().is_some()
    }

    /// Append an instance of `key` and lay the whole set out again.
    ///
    /// An asset that is still loading is recorded as a pending slot and the
    /// pass is skipped until [`LayoutSession::resolve_pending`] fills it.
    pub fn append(&mut self, key: &AssetKey) -> Result<Option<LayoutReport>> {
        match self.provider.request(key) {
            AssetState::Ready(module) => {
                let index = self.group.push(module);
                debug!(index, %key, "appended module");
            }
            AssetState::Loading => {
                let index = self.group.push(ModuleSlot::Pending { key: key.clone() });
                debug!(index, %key, "appended pending module");
            }
            AssetState::Missing => bail!("unknown asset {key}"),
        }
        self.relayout()
    }

    /// Switch layout mode and rerun the full pipeline.
    pub fn set_mode(&mut self, mode: LayoutMode) -> Result<Option<LayoutReport>> {
        mode.validate()?;
        if !self.mode.same_kind(&mode) {
            info!(from = self.mode.label(), to = mode.label(), "layout mode changed");
        }
        self.mode = mode;
        self.relayout()
    }

    /// Change packing parameters; implies packed mode.
    pub fn set_params(&mut self, params: LayoutParams) -> Result<Option<LayoutReport>> {
        self.set_mode(LayoutMode::Packed(params))
    }

    /// Request every pending asset again. Relayouts once nothing is pending.
    pub fn resolve_pending(&mut self) -> Result<Option<LayoutReport>> {
        for index in 0..self.group.len() {
            let Some(slot) = self.group.slot_mut(index) else {
                continue;
            };
            let key = match &*slot {
                ModuleSlot::Pending { key } => key.clone(),
                ModuleSlot::Ready(_) => continue,
            };
            match self.provider.request(&key) {
                AssetState::Ready(module) => {
                    *slot = ModuleSlot::Ready(module);
                    debug!(index, %key, "pending module resolved");
                }
                AssetState::Loading => {}
                AssetState::Missing => bail!("asset {key} disappeared while loading"),
            }
        }
        self.relayout()
    }

    /// Run the pipeline for the current mode.
    ///
    /// Returns `Ok(None)` without touching any transform while a module is
    /// still pending.
    pub fn relayout(&mut self) -> Result<Option<LayoutReport>> {
        if let Some((index, key)) = self.group.first_pending() {
            warn!(index, %key, "layout skipped: module transform not available yet");
            return Ok(None);
        }
        let report = layout(&mut self.group, &self.mode)?;
        self.last_report = Some(report.clone());
        Ok(Some(report))
    }

    /// Push the current transforms to a renderer adapter.
    pub fn sync(&self, sink: &mut dyn TransformSink) {
        self.group.sync_to(sink);
    }
}
