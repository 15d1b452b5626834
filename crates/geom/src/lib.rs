#![warn(missing_docs)]
//! Geometry primitives (AABB, rigid transforms) in double precision.

mod aabb;
mod transform;

pub use aabb::Aabb;
pub use transform::Transform;

pub use glam::{DAffine3, DQuat, DVec3};
