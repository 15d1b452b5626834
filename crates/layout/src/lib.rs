#![warn(missing_docs)]
//! Modular layout engine.
//!
//! Given a group of modules whose source meshes have arbitrary pivots, the
//! engine
//! 1. normalizes each module (centered on the horizontal plane, resting on
//!    the floor),
//! 2. packs them edge-to-edge along one horizontal axis with a signed gap,
//! 3. orients the group (optional fixed 180° yaw) and recenters it so the
//!    assembly's union box sits over the origin without leaving the floor.
//!
//! Every pass recomputes bounds from the current transforms, so rerunning any
//! step with unchanged inputs reproduces the same transforms.

mod append;
mod engine;
mod error;
mod normalize;
mod orient;
mod pack;
mod report;

pub use append::append_layout;
pub use engine::layout;
pub use error::LayoutError;
pub use normalize::{normalize, normalize_all, NormalizedOffset};
pub use orient::{orient, recenter, FACE_CAMERA_YAW};
pub use pack::{pack, Contact, PackOutcome};
pub use report::{BoundsRecord, LayoutReport, ModulePlacement, TransformRecord};
