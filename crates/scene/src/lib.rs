#![warn(missing_docs)]
//! Plain-data scene graph the layout engine reads and writes.
//!
//! Modules and groups carry only transform data; a [`TransformSink`] adapter
//! pushes that data into whatever renderer the host uses.

mod geometry;
mod group;
mod module;
mod sink;

pub use geometry::{AssetGeometry, MeshPart};
pub use group::{Group, SceneError};
pub use module::{Module, ModuleSlot};
pub use sink::TransformSink;
