//! Core storage and math layer.
//!
//! This is the bottom layer of the toolkit with no internal dependencies.
//! Everything else builds on it.
//!
//! # Contents
//!
//! - [`sequence`]: Growable sequence container, the uniform storage primitive
//! - [`types`]: Rigid-body value types (vectors, quaternions, matrices)

pub mod sequence;
pub mod types;

pub use sequence::{Sequence, DEFAULT_CAPACITY};
pub use types::{Axis, Mat3, Mat4, Quat, Vec3, Vec4};
