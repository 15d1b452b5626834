use modlayout_core::{AssetKey, ParamError};
use modlayout_scene::SceneError;
use thiserror::Error;

/// Reasons a layout pass did not run.
///
/// A failed pass never leaves partially applied offsets behind: every check
/// happens before the first transform is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A module's transform handle is not available yet; retry on the next trigger.
    #[error("module {index} ({key}) has no transform handle yet")]
    MissingTransformHandle {
        /// Slot index in placement order.
        index: usize,
        /// Asset the slot is waiting on.
        key: AssetKey,
    },
    /// A gap or spacing that is not a finite number.
    #[error(transparent)]
    InvalidParameter(#[from] ParamError),
}

impl From<SceneError> for LayoutError {
    fn from(err: SceneError) -> Self {
        match err {
            SceneError::MissingTransform { index, key } => {
                LayoutError::MissingTransformHandle { index, key }
            }
        }
    }
}
