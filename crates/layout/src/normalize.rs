use glam::DVec3;
use modlayout_core::FLOOR_HEIGHT;
use modlayout_scene::{Group, Module};
use tracing::debug;

use crate::LayoutError;

/// What normalizing one module measured and changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedOffset {
    /// Bounding-box size before normalization (translation does not change it).
    pub size: DVec3,
    /// Translation added to the module's local position.
    pub applied: DVec3,
}

/// Center `module` on the group's horizontal origin and seat it on the floor.
///
/// Bounds are taken over the module's vertices in the group frame, i.e. the
/// world-space vertices pulled back through the group's inverse world
/// transform, so the offset composes with any group rotation or position.
/// The box center is subtracted horizontally and the module is lifted until
/// its lower face touches [`FLOOR_HEIGHT`].
///
/// The new translation is assigned from pivot-relative bounds, so the result
/// does not depend on where the module started and a second call is a no-op.
/// Degenerate (flat or point-like) modules normalize to size zero; nothing
/// divides by a dimension.
pub fn normalize(module: &mut Module) -> NormalizedOffset {
    let pivot = module.pivot_bounds();
    let center = pivot.center();
    let size = pivot.size();

    let before = module.transform.translation;
    let after = DVec3::new(-center.x, FLOOR_HEIGHT - pivot.min.y, -center.z);
    module.transform.translation = after;

    NormalizedOffset {
        size,
        applied: after - before,
    }
}

/// Normalize every module of `group` in placement order.
///
/// Fails without touching anything when a slot is still pending.
pub fn normalize_all(group: &mut Group) -> Result<Vec<NormalizedOffset>, LayoutError> {
    let modules = group.ready_modules_mut()?;
    let mut offsets = Vec::with_capacity(modules.len());
    for (index, module) in modules.into_iter().enumerate() {
        let offset = normalize(module);
        debug!(
            index,
            key = %module.key,
            size = ?offset.size,
            applied = ?offset.applied,
            "normalized module"
        );
        offsets.push(offset);
    }
    Ok(offsets)
}
