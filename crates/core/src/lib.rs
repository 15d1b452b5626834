#![warn(missing_docs)]
//! Core vocabulary shared across the workspace.

pub mod key;
pub mod params;

pub use key::{AssetKey, AssetKeyError};
pub use params::{Axis, Direction, LayoutMode, LayoutParams, ParamError, DEFAULT_APPEND_SPACING};

/// Vertical coordinate every module rests on, relative to its group.
pub const FLOOR_HEIGHT: f64 = 0.0;
