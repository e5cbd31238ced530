//! 3×3 rotation and 4×4 homogeneous rigid-transform matrices.
//!
//! Matrices are stored as basis columns: `Mat3` holds the rotated x/y/z
//! basis vectors, `Mat4` adds a translation column and carries the
//! homogeneous row in the `w` slots of each column. None of the operations
//! validate their input; feeding a non-rigid matrix to [`Mat4::inverse_rigid`]
//! produces a well-defined but wrong result, matching the rest of the
//! unguarded math layer.

use super::quat::Quat;
use super::vec3::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 4-component column of a [`Mat4`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// Homogeneous component
    pub w: f32,
}

impl Vec4 {
    /// Create a new column.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// The 3D part of the column.
    #[inline]
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// A 3×3 rotation matrix stored as three basis vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat3 {
    /// Rotated x basis vector
    pub x: Vec3,
    /// Rotated y basis vector
    pub y: Vec3,
    /// Rotated z basis vector
    pub z: Vec3,
}

impl Mat3 {
    /// Identity rotation.
    pub const IDENTITY: Mat3 = Mat3 {
        x: Vec3 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        },
        y: Vec3 {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        },
        z: Vec3 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        },
    };

    /// Rotation matrix for a quaternion.
    ///
    /// The quaternion is normalized first, then the standard cross-term
    /// expansion is applied:
    /// ```text
    /// x = (1-2(yy+zz),   2(xy+wz),   2(xz-wy))
    /// y = (  2(xy-wz), 1-2(xx+zz),   2(yz+wx))
    /// z = (  2(xz+wy),   2(yz-wx), 1-2(xx+yy))
    /// ```
    pub fn from_quat(q: Quat) -> Mat3 {
        let q = q.normalize();
        let xx = q.x * q.x;
        let yy = q.y * q.y;
        let zz = q.z * q.z;
        let xy = q.x * q.y;
        let xz = q.x * q.z;
        let yz = q.y * q.z;
        let wx = q.w * q.x;
        let wy = q.w * q.y;
        let wz = q.w * q.z;

        Mat3 {
            x: Vec3::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy)),
            y: Vec3::new(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx)),
            z: Vec3::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy)),
        }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A 4×4 homogeneous rigid transform: rotation basis plus translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    /// Rotated x basis column
    pub x: Vec4,
    /// Rotated y basis column
    pub y: Vec4,
    /// Rotated z basis column
    pub z: Vec4,
    /// Translation column
    pub t: Vec4,
}

impl Mat4 {
    /// Identity transform.
    pub const IDENTITY: Mat4 = Mat4 {
        x: Vec4 {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        },
        y: Vec4 {
            x: 0.0,
            y: 1.0,
            z: 0.0,
            w: 0.0,
        },
        z: Vec4 {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            w: 0.0,
        },
        t: Vec4 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        },
    };

    /// Build a rigid transform from a translation and an orientation.
    pub fn from_translation_quat(t: Vec3, q: Quat) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        m.t.x = t.x;
        m.t.y = t.y;
        m.t.z = t.z;
        m.with_rotation(Mat3::from_quat(q))
    }

    /// Translation column as a vector. Pure field extraction.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.t.xyz()
    }

    /// Rotation block as a [`Mat3`]. Pure field extraction.
    #[inline]
    pub fn rotation(&self) -> Mat3 {
        Mat3 {
            x: self.x.xyz(),
            y: self.y.xyz(),
            z: self.z.xyz(),
        }
    }

    /// Replace the rotation block, keeping translation and homogeneous row.
    pub fn with_rotation(mut self, rot: Mat3) -> Mat4 {
        self.x.x = rot.x.x;
        self.x.y = rot.x.y;
        self.x.z = rot.x.z;
        self.y.x = rot.y.x;
        self.y.y = rot.y.y;
        self.y.z = rot.y.z;
        self.z.x = rot.z.x;
        self.z.y = rot.z.y;
        self.z.z = rot.z.z;
        self
    }

    /// Apply this transform to a column vector.
    #[inline]
    fn transform_column(&self, c: Vec4) -> Vec4 {
        Vec4::new(
            self.x.x * c.x + self.y.x * c.y + self.z.x * c.z + self.t.x * c.w,
            self.x.y * c.x + self.y.y * c.y + self.z.y * c.z + self.t.y * c.w,
            self.x.z * c.x + self.y.z * c.y + self.z.z * c.z + self.t.z * c.w,
            self.x.w * c.x + self.y.w * c.y + self.z.w * c.z + self.t.w * c.w,
        )
    }

    /// Transform a point (homogeneous coordinate 1) into this frame.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform_column(Vec4::new(p.x, p.y, p.z, 1.0)).xyz()
    }

    /// Full 4×4 matrix product `self * other`, all sixteen entries
    /// including the homogeneous row.
    pub fn multiply(&self, other: &Mat4) -> Mat4 {
        Mat4 {
            x: self.transform_column(other.x),
            y: self.transform_column(other.y),
            z: self.transform_column(other.z),
            t: self.transform_column(other.t),
        }
    }

    /// Inverse of a rigid transform via transposed basis and negated dots.
    ///
    /// Each basis vector is normalized, the rotation block is transposed,
    /// and the new translation is the negated dot of each basis vector with
    /// the old translation. Cheaper and better conditioned than a general
    /// 4×4 inverse, but valid only when the input is actually rigid
    /// (orthonormal rotation, no scale or shear); anything else produces a
    /// well-defined wrong answer.
    pub fn inverse_rigid(&self) -> Mat4 {
        let x = self.x.xyz().normalize();
        let y = self.y.xyz().normalize();
        let z = self.z.xyz().normalize();
        let t = self.t.xyz();

        let mut dst = Mat4::IDENTITY;
        dst.x.x = x.x;
        dst.x.y = y.x;
        dst.x.z = z.x;

        dst.y.x = x.y;
        dst.y.y = y.y;
        dst.y.z = z.y;

        dst.z.x = x.z;
        dst.z.y = y.z;
        dst.z.z = z.z;

        dst.t.x = -x.dot(&t);
        dst.t.y = -y.dot(&t);
        dst.t.z = -z.dot(&t);
        dst
    }

    /// Re-derive an orthonormal basis from a drifted rotation.
    ///
    /// The z-axis is trusted as ground truth and the others are rebuilt
    /// from it, in this order:
    /// ```text
    /// x = normalize(y × z)
    /// y = normalize(z × x)
    /// z = normalize(z)
    /// ```
    /// Translation is preserved unchanged. The axis priority (z, then x,
    /// then y) is contractual; callers depend on the z direction surviving.
    pub fn orthonormalize(&self) -> Mat4 {
        let mut dst = Mat4::IDENTITY;
        // x-axis orthogonal to the yz-plane
        let x_axis = self.y.xyz().cross(&self.z.xyz()).normalize();
        dst.x.x = x_axis.x;
        dst.x.y = x_axis.y;
        dst.x.z = x_axis.z;
        // y-axis orthogonal to the xz-plane
        let y_axis = self.z.xyz().cross(&x_axis).normalize();
        dst.y.x = y_axis.x;
        dst.y.y = y_axis.y;
        dst.y.z = y_axis.z;
        // z-axis kept, renormalized
        let z_axis = self.z.xyz().normalize();
        dst.z.x = z_axis.x;
        dst.z.y = z_axis.y;
        dst.z.z = z_axis.z;

        dst.t.x = self.t.x;
        dst.t.y = self.t.y;
        dst.t.z = self.t.z;
        dst
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Mat4 {
    /// Four rows of `%9.3f` values, one row per output coordinate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        writeln!(
            f,
            "  {:9.3}, {:9.3}, {:9.3}, {:9.3}",
            self.x.x, self.y.x, self.z.x, self.t.x
        )?;
        writeln!(
            f,
            "  {:9.3}, {:9.3}, {:9.3}, {:9.3}",
            self.x.y, self.y.y, self.z.y, self.t.y
        )?;
        writeln!(
            f,
            "  {:9.3}, {:9.3}, {:9.3}, {:9.3}",
            self.x.z, self.y.z, self.z.z, self.t.z
        )?;
        writeln!(
            f,
            "  {:9.3}, {:9.3}, {:9.3}, {:9.3}",
            self.x.w, self.y.w, self.z.w, self.t.w
        )?;
        write!(f, "]")
    }
}
