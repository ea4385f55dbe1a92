//! Core types for the wire3d viewer
//!
//! This crate provides the domain model for wireframe visualization:
//!
//! - [`WireModel`] - A set of 3D points plus the edges connecting them
//! - [`Edge`] - A pair of indices into a model's point collection
//! - [`ViewState`] - Cumulative shift/scale/projection state over a
//!   pristine point snapshot, with exact reset
//! - [`ProjectionPlane`] - The three axis-aligned orthographic planes
//! - [`PlaneProjection`] - A model flattened onto one plane, ready for a
//!   2D renderer
//! - [`ModelValidator`] - Static checks over a model's edge table

mod model;
mod model_validator;
mod projection;
mod view_state;

pub use model::{Edge, WireModel};
pub use model_validator::{ModelValidator, ValidationError};
pub use projection::{edge_segments, all_views, PlaneProjection, ProjectionPlane, Segment2};
pub use view_state::ViewState;

// Re-export commonly used math types for convenience
pub use wire3d_math::{Mat4, Vec3};
