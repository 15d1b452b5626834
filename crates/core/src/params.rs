//! Layout parameters and placement modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Nominal spacing used by the fixed-spacing append mode.
pub const DEFAULT_APPEND_SPACING: f64 = 3.0;

/// Horizontal axis modules are packed along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Side by side (left/right).
    X,
    /// Front/back.
    #[default]
    Z,
}

impl Axis {
    /// Component index into `[x, y, z]`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Z => 2,
        }
    }

    /// The other horizontal axis (the depth axis that gets pinned).
    pub fn orthogonal(self) -> Self {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Parse `x` or `z` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Axis::X),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Z => f.write_str("z"),
        }
    }
}

/// Order in which modules advance along the packing axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Each module sits on the positive side of its predecessor.
    #[default]
    Increasing,
    /// Each module sits on the negative side of its predecessor.
    Decreasing,
}

impl Direction {
    /// `+1.0` for increasing placement, `-1.0` for decreasing.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Increasing => 1.0,
            Direction::Decreasing => -1.0,
        }
    }

    /// Parse `increasing`/`decreasing` (also `+`/`-`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increasing" | "inc" | "+" => Some(Direction::Increasing),
            "decreasing" | "dec" | "-" => Some(Direction::Decreasing),
            _ => None,
        }
    }
}

/// Rejected layout parameter.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("parameter `{name}` must be finite (got {value})")]
pub struct ParamError {
    /// Field name.
    pub name: &'static str,
    /// Offending value.
    pub value: f64,
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError { name, value })
    }
}

/// Parameters for measured face-to-face packing.
///
/// Immutable per layout run; changing any field means rerunning the packer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Packing axis.
    pub axis: Axis,
    /// Signed clearance between touching faces. Zero is flush contact,
    /// a small negative value overlaps faces to hide the render seam.
    pub gap: f64,
    /// Turn the whole group 180° about the vertical axis.
    pub face_camera: bool,
    /// Placement direction along `axis`.
    pub direction: Direction,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            axis: Axis::Z,
            gap: 0.0,
            face_camera: true,
            direction: Direction::Increasing,
        }
    }
}

impl LayoutParams {
    /// Parameters for packing along `axis` with `gap`, not facing the camera.
    pub fn along(axis: Axis, gap: f64) -> Self {
        Self {
            axis,
            gap,
            face_camera: false,
            direction: Direction::Increasing,
        }
    }

    /// Reject non-finite gaps.
    pub fn validate(&self) -> Result<(), ParamError> {
        ensure_finite("gap", self.gap)
    }
}

/// Placement strategy for one layout run.
///
/// A run either measures and packs faces or appends at a fixed spacing;
/// the enum makes mixing the two impossible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum LayoutMode {
    /// Measured face-to-face packing.
    Packed(LayoutParams),
    /// Approximate placement at a nominal spacing, without measuring bounds.
    Append {
        /// Axis new modules are appended along.
        axis: Axis,
        /// Distance between consecutive module origins.
        spacing: f64,
        /// Placement direction along `axis`.
        direction: Direction,
        /// Turn the whole group 180° about the vertical axis.
        face_camera: bool,
    },
}

impl Default for LayoutMode {
    fn default() -> Self {
        LayoutMode::Packed(LayoutParams::default())
    }
}

impl LayoutMode {
    /// Fixed-spacing append along X at [`DEFAULT_APPEND_SPACING`].
    pub fn append_default() -> Self {
        LayoutMode::Append {
            axis: Axis::X,
            spacing: DEFAULT_APPEND_SPACING,
            direction: Direction::Increasing,
            face_camera: false,
        }
    }

    /// Short label used in logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            LayoutMode::Packed(_) => "packed",
            LayoutMode::Append { .. } => "append",
        }
    }

    /// Packing axis for either mode.
    pub fn axis(&self) -> Axis {
        match self {
            LayoutMode::Packed(params) => params.axis,
            LayoutMode::Append { axis, .. } => *axis,
        }
    }

    /// Whether the group is turned to face the canonical camera.
    pub fn face_camera(&self) -> bool {
        match self {
            LayoutMode::Packed(params) => params.face_camera,
            LayoutMode::Append { face_camera, .. } => *face_camera,
        }
    }

    /// True when both modes are the same variant (parameters may differ).
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Reject non-finite gap or spacing.
    pub fn validate(&self) -> Result<(), ParamError> {
        match self {
            LayoutMode::Packed(params) => params.validate(),
            LayoutMode::Append { spacing, .. } => ensure_finite("spacing", *spacing),
        }
    }
}
