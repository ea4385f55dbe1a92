//! 3D Mathematics Library
//!
//! This crate provides the vector and homogeneous-matrix types for the
//! wire3d viewer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 homogeneous matrix for affine transformations

mod vec3;
pub mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;
