//! Minimal unit quaternion for composing 3D rotations.
//!
//! Components are stored as `(x, y, z, s)` where `s` is the scalar part, i.e.
//! the quaternion `s + xi + yj + zk`. Values are never mutated in place; every
//! operation returns a new quaternion.

use std::ops::Mul;

use glam::{DMat4, DQuat, DVec3, DVec4};

/// Rotation quaternion `s + xi + yj + zk`.
///
/// Only unit-length values represent rotations. [`Quaternion::from_axis_angle`]
/// (given a unit axis) and [`Quaternion::from_euler_angles`] produce unit
/// values; [`Quaternion::new`] takes components verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// `i` component.
    pub x: f64,
    /// `j` component.
    pub y: f64,
    /// `k` component.
    pub z: f64,
    /// Scalar component.
    pub s: f64,
}

impl Quaternion {
    /// The identity rotation `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::identity();

    /// Creates a quaternion from raw components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, s: f64) -> Self {
        Self { x, y, z, s }
    }

    /// Returns the identity rotation.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Components as a `(x, y, z, s)` vector.
    #[inline]
    #[must_use]
    pub const fn to_vec4(self) -> DVec4 {
        DVec4::new(self.x, self.y, self.z, self.s)
    }

    /// Inverse rotation for unit quaternions.
    #[inline]
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.s)
    }

    /// Rotation of `angle_rad` around `axis`.
    ///
    /// `axis` must be unit length; it is not normalized here.
    #[must_use]
    pub fn from_axis_angle(axis: DVec3, angle_rad: f64) -> Self {
        let (sins, coss) = (0.5 * angle_rad).sin_cos();
        Self::new(sins * axis.x, sins * axis.y, sins * axis.z, coss)
    }

    /// Rotation equivalent to rotating about X, then Y, then Z.
    ///
    /// Uses the closed-form half-angle product rather than three separate
    /// quaternion multiplications.
    #[must_use]
    pub fn from_euler_angles(x: f64, y: f64, z: f64) -> Self {
        let (sz, cz) = (z * 0.5).sin_cos();
        let (sy, cy) = (y * 0.5).sin_cos();
        let (sx, cx) = (x * 0.5).sin_cos();

        Self::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Hamilton product `self · other`.
    ///
    /// Non-commutative. When the result rotates a vector, `other` is applied
    /// first and `self` second.
    #[must_use]
    pub const fn multiply(self, o: Self) -> Self {
        Self {
            s: self.s * o.s - self.x * o.x - self.y * o.y - self.z * o.z,
            x: self.s * o.x + self.x * o.s + self.y * o.z - self.z * o.y,
            y: self.s * o.y + self.y * o.s + self.z * o.x - self.x * o.z,
            z: self.s * o.z + self.z * o.s + self.x * o.y - self.y * o.x,
        }
    }

    /// Rotates `v` via the sandwich product `q · v · q*`.
    #[must_use]
    pub const fn transform(self, v: DVec3) -> DVec3 {
        let src = Self::new(v.x, v.y, v.z, 0.0);
        let res = self.multiply(src).multiply(self.conjugate());
        DVec3::new(res.x, res.y, res.z)
    }

    /// Rotation block of an otherwise-identity 4x4 matrix.
    ///
    /// Column 3 stays `(0, 0, 0, 1)` and row 3 stays `(0, 0, 0, 1)`.
    #[must_use]
    pub const fn to_rotation_matrix(self) -> DMat4 {
        let tx = 2.0 * self.x;
        let ty = 2.0 * self.y;
        let tz = 2.0 * self.z;
        let twx = tx * self.s;
        let twy = ty * self.s;
        let twz = tz * self.s;
        let txx = tx * self.x;
        let txy = ty * self.x;
        let txz = tz * self.x;
        let tyy = ty * self.y;
        let tyz = tz * self.y;
        let tzz = tz * self.z;

        DMat4::from_cols(
            DVec4::new(1.0 - (tyy + tzz), txy + twz, txz - twy, 0.0),
            DVec4::new(txy - twz, 1.0 - (txx + tzz), tyz + twx, 0.0),
            DVec4::new(txz + twy, tyz - twx, 1.0 - (txx + tyy), 0.0),
            DVec4::W,
        )
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([x, y, z, s]: [f64; 4]) -> Self {
        Self::new(x, y, z, s)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        [q.x, q.y, q.z, q.s]
    }
}

impl From<DQuat> for Quaternion {
    fn from(q: DQuat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for DQuat {
    fn from(q: Quaternion) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.s)
    }
}
