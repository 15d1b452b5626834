use modlayout_core::AssetKey;
use modlayout_geom::Transform;

/// Adapter port between the scene data and a renderer.
///
/// The layout engine only mutates plain transforms; an implementation of this
/// trait copies them into its own scene graph. There is no commit step beyond
/// [`TransformSink::finish_frame`].
pub trait TransformSink {
    /// Receive the group's local transform.
    fn sync_group(&mut self, transform: &Transform);

    /// Receive the local transform of the ready module at `index`.
    fn sync_module(&mut self, index: usize, key: &AssetKey, transform: &Transform);

    /// Called once after the group and every ready module were synced.
    fn finish_frame(&mut self) {}
}
