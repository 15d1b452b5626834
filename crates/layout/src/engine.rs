use modlayout_core::LayoutMode;
use modlayout_scene::Group;
use tracing::info;

use crate::{append_layout, normalize_all, pack, LayoutError, LayoutReport};

/// Run the full pipeline for `mode` and report the resulting transforms.
///
/// `Packed` normalizes every module and packs the set; `Append` only places
/// modules at the nominal spacing. A run uses exactly one of the two. Inputs
/// are validated and pending slots detected before anything is written.
pub fn layout(group: &mut Group, mode: &LayoutMode) -> Result<LayoutReport, LayoutError> {
    mode.validate()?;
    if let Some((index, key)) = group.first_pending() {
        return Err(LayoutError::MissingTransformHandle {
            index,
            key: key.clone(),
        });
    }

    match mode {
        LayoutMode::Packed(params) => {
            normalize_all(group)?;
            pack(group, params)?;
        }
        LayoutMode::Append {
            axis,
            spacing,
            direction,
            face_camera,
        } => {
            append_layout(group, *axis, *spacing, *direction, *face_camera)?;
        }
    }

    let report = LayoutReport::capture(group, mode.label());
    info!(mode = mode.label(), modules = report.modules.len(), "layout complete");
    Ok(report)
}
