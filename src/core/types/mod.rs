//! Rigid-body value types.
//!
//! - [`Vec3`]: 3D vector, plus the [`Axis`] coordinate selector
//! - [`Quat`]: orientation quaternion in (x, y, z, w) order
//! - [`Mat3`] / [`Mat4`]: rotation and homogeneous rigid-transform matrices
//!
//! All types are plain `Copy` values; no operation here reports errors.
//! Degenerate input (zero-length vectors, non-rigid matrices) propagates as
//! NaN/Inf or a well-defined wrong value instead.

mod matrix;
mod quat;
mod vec3;

pub use matrix::{Mat3, Mat4, Vec4};
pub use quat::Quat;
pub use vec3::{Axis, Vec3};
