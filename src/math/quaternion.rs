//! Quaternions for 3D rotation.

use std::ops::{Deref, Mul};

use bevy::math::DQuat;

use super::{MathError, Vector3};

/// Quaternion `w + xi + yj + zk`, wrapping [`DQuat`].
///
/// Only unit quaternions represent rotations. `from_axis_angle` always
/// produces one; `rotate` normalizes anything built by hand first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion(pub DQuat);

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion(DQuat::IDENTITY);

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self(DQuat::from_xyzw(x, y, z, w))
    }

    /// Rotation of `angle` radians about `axis` (right-handed).
    pub fn from_axis_angle(angle: f64, axis: Vector3) -> Result<Self, MathError> {
        let axis = axis.normalize().map_err(|_| MathError::DegenerateAxis)?;
        Ok(Self(DQuat::from_axis_angle(axis.0, angle)))
    }

    /// Vector (imaginary) part.
    #[inline]
    pub fn vector(self) -> Vector3 {
        Vector3(self.0.xyz())
    }

    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.0.length_squared()
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.0.length()
    }

    pub fn normalize(self) -> Result<Self, MathError> {
        let n = self.norm();
        if n == 0.0 {
            return Err(MathError::ZeroNorm);
        }
        Ok(Self(self.0 / n))
    }

    pub fn conjugate(self) -> Self {
        Self(self.0.conjugate())
    }

    /// Multiplicative inverse `q* / |q|²`.
    ///
    /// Unlike [`DQuat::inverse`] this holds for non-unit quaternions too. A
    /// zero quaternion has no inverse and reports `ZeroNorm`.
    pub fn inverse(self) -> Result<Self, MathError> {
        let n2 = self.norm_squared();
        if n2 == 0.0 {
            return Err(MathError::ZeroNorm);
        }
        Ok(Self(self.0.conjugate() / n2))
    }

    /// Hamilton product `self ∘ other`.
    ///
    /// As a rotation this applies `other` first and `self` second.
    pub fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Reverse-order composition `next ∘ self`: apply `self`, then `next`.
    pub fn then(self, next: Self) -> Self {
        next.mul(self)
    }

    /// Rotate `v` as `q v q⁻¹`.
    ///
    /// Any non-zero multiple of a unit quaternion gives the same rotation,
    /// so `self` is normalized before it is applied.
    pub fn rotate(self, v: Vector3) -> Result<Vector3, MathError> {
        let unit = self.normalize()?;
        Ok(Vector3(unit.0 * v.0))
    }
}

impl Deref for Quaternion {
    type Target = DQuat;

    #[inline]
    fn deref(&self) -> &DQuat {
        &self.0
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    #[inline]
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::mul(self, rhs)
    }
}
