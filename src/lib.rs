//! modlayout - deterministic modular layout for rigid 3D assets
//!
//! Host-side pieces shared by the binary and its integration tests: layout
//! configuration, the event-driven [`LayoutSession`], and a JSONL frame sink.

pub mod config;
pub mod frames;
pub mod session;

pub use config::{LayoutConfig, ModeKind, DEFAULT_LAYOUT_PATH};
pub use frames::JsonlFrameSink;
pub use session::LayoutSession;
