use modlayout_core::{Direction, LayoutParams};
use modlayout_scene::Group;
use tracing::{debug, info};

use crate::{orient, recenter, LayoutError};

/// Placement of one module against its predecessor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the module that moved.
    pub index: usize,
    /// Packed-axis coordinate of the predecessor's far face.
    pub far_face: f64,
    /// Packed-axis coordinate of this module's near face after placement.
    pub near_face: f64,
    /// Translation applied along the packing axis.
    pub shift: f64,
}

/// Result of a packing pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackOutcome {
    /// One entry per module after the first.
    pub contacts: Vec<Contact>,
    /// Whether the group transform was updated (false for an empty group).
    pub group_updated: bool,
}

/// Pack the (already normalized) modules of `group` into a single row.
///
/// 1. The depth axis (orthogonal to `params.axis`) of every module position
///    is pinned to zero.
/// 2. Each module's near face is placed against its predecessor's far face,
///    separated by `params.gap`.
/// 3. The group is oriented and recentered over its parent origin; its
///    vertical translation is never touched.
///
/// Positions are derived from the current bounds on every call, so packing an
/// already packed group reproduces the same transforms. An empty group is
/// left unchanged.
pub fn pack(group: &mut Group, params: &LayoutParams) -> Result<PackOutcome, LayoutError> {
    params.validate()?;
    if group.is_empty() {
        debug!("pack skipped: no modules");
        return Ok(PackOutcome::default());
    }

    let axis = params.axis.index();
    let depth = params.axis.orthogonal().index();
    let mut modules = group.ready_modules_mut()?;

    for module in modules.iter_mut() {
        module.transform.translation[depth] = 0.0;
    }

    let mut contacts = Vec::with_capacity(modules.len().saturating_sub(1));
    for index in 1..modules.len() {
        let prev = modules[index - 1].local_bounds();
        let module = &mut modules[index];
        let pivot = module.pivot_bounds();
        // Near face lands on the far face plus gap; assigned, not accumulated.
        let (far_face, target) = match params.direction {
            Direction::Increasing => (
                prev.max[axis],
                prev.max[axis] + params.gap - pivot.min[axis],
            ),
            Direction::Decreasing => (
                prev.min[axis],
                prev.min[axis] - params.gap - pivot.max[axis],
            ),
        };
        let shift = target - module.transform.translation[axis];
        module.transform.translation[axis] = target;

        let placed = module.local_bounds();
        let near_face = match params.direction {
            Direction::Increasing => placed.min[axis],
            Direction::Decreasing => placed.max[axis],
        };
        debug!(index, key = %module.key, shift, far_face, near_face, "placed module");
        contacts.push(Contact {
            index,
            far_face,
            near_face,
            shift,
        });
    }
    let placed = modules.len();

    // Orientation first: recentering maps the union center through the final rotation.
    orient(group, params.face_camera);
    recenter(group);

    info!(
        modules = placed,
        axis = %params.axis,
        gap = params.gap,
        face_camera = params.face_camera,
        "packed group"
    );
    Ok(PackOutcome {
        contacts,
        group_updated: true,
    })
}
