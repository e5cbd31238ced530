//! Orientation quaternion type.

use serde::{Deserialize, Serialize};

/// An orientation quaternion in `(x, y, z, w)` component order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    /// X (i) component
    pub x: f32,
    /// Y (j) component
    pub y: f32,
    /// Z (k) component
    pub z: f32,
    /// W (scalar) component
    pub w: f32,
}

impl Quat {
    /// Identity rotation.
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create a new quaternion.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Euclidean norm over all four components.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit length.
    ///
    /// As with [`crate::core::types::Vec3::normalize`], the division is
    /// unguarded; a zero quaternion yields non-finite components.
    #[inline]
    pub fn normalize(&self) -> Quat {
        let mag = self.length();
        Quat::new(self.x / mag, self.y / mag, self.z / mag, self.w / mag)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}
