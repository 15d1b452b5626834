use modlayout_core::AssetKey;
use modlayout_geom::Transform;
use modlayout_scene::TransformSink;

/// One synced frame as seen by a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedFrame {
    /// Group transform.
    pub group: Option<Transform>,
    /// `(slot index, key, transform)` per ready module.
    pub modules: Vec<(usize, AssetKey, Transform)>,
}

/// In-memory [`TransformSink`] that keeps every finished frame.
#[derive(Debug, Default)]
pub struct RecordingSink {
    current: RecordedFrame,
    /// Frames completed so far.
    pub frames: Vec<RecordedFrame>,
}

impl RecordingSink {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent finished frame.
    pub fn last(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl TransformSink for RecordingSink {
    fn sync_group(&mut self, transform: &Transform) {
        self.current.group = Some(*transform);
    }

    fn sync_module(&mut self, index: usize, key: &AssetKey, transform: &Transform) {
        self.current.modules.push((index, key.clone(), *transform));
    }

    fn finish_frame(&mut self) {
        self.frames.push(std::mem::take(&mut self.current));
    }
}
