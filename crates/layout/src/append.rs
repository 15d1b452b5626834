use glam::DVec3;
use modlayout_core::{Axis, Direction, ParamError};
use modlayout_scene::Group;
use tracing::{debug, info};

use crate::{orient, LayoutError};

/// Place modules at a fixed nominal spacing along `axis`, without measuring.
///
/// Module `i` sits at `i * spacing` along the axis from the group origin
/// (negated for [`Direction::Decreasing`]); its other coordinates are zero.
/// The group's horizontal translation is reset to the parent origin. True
/// module sizes are ignored, so neighbors may gap or overlap. Positions depend
/// only on the index and parameters, so the result is the same whatever ran
/// before.
pub fn append_layout(
    group: &mut Group,
    axis: Axis,
    spacing: f64,
    direction: Direction,
    face_camera: bool,
) -> Result<usize, LayoutError> {
    if !spacing.is_finite() {
        return Err(ParamError {
            name: "spacing",
            value: spacing,
        }
        .into());
    }
    if group.is_empty() {
        debug!("append layout skipped: no modules");
        return Ok(0);
    }

    let a = axis.index();
    let mut modules = group.ready_modules_mut()?;
    for (index, module) in modules.iter_mut().enumerate() {
        let mut translation = DVec3::ZERO;
        translation[a] = spacing * index as f64 * direction.sign();
        module.transform.translation = translation;
        debug!(index, key = %module.key, offset = translation[a], "appended module");
    }
    let placed = modules.len();

    group.transform.translation.x = 0.0;
    group.transform.translation.z = 0.0;
    orient(group, face_camera);
    info!(modules = placed, %axis, spacing, "appended group");
    Ok(placed)
}
