//! Three-component real vector.

use std::ops::{Add, AddAssign, Deref, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use bevy::math::DVec3;

use super::{MathError, Quaternion};

/// A 3D vector of `f64` components.
///
/// Units depend on use: meters for positions, m/s for velocities,
/// newtons for forces. Wraps [`DVec3`]; operations that have no answer for
/// a zero vector report [`MathError`] instead of producing NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3(pub DVec3);

impl Vector3 {
    pub const ZERO: Vector3 = Vector3(DVec3::ZERO);
    pub const X: Vector3 = Vector3(DVec3::X);
    pub const Y: Vector3 = Vector3(DVec3::Y);
    pub const Z: Vector3 = Vector3(DVec3::Z);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Scale every component by `s`.
    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self(self.0 * s)
    }

    /// Raise each component to the power `exp`.
    ///
    /// Kept for callers that treat vectors as plain triples; it has no
    /// geometric meaning.
    pub fn powf(self, exp: f64) -> Self {
        Self(self.0.powf(exp))
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self(self.0.cross(other.0))
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.0.length_squared()
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.0.length()
    }

    /// Distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.0.distance(other.0)
    }

    /// Unit vector in the same direction.
    ///
    /// Fails for zero-length (or non-finite) vectors, which have no
    /// direction.
    pub fn normalize(self) -> Result<Self, MathError> {
        self.0
            .try_normalize()
            .map(Self)
            .ok_or(MathError::DegenerateVector)
    }

    /// Projection of `self` onto `onto`: `(v·u / u·u) u`.
    pub fn project_onto(self, onto: Self) -> Result<Self, MathError> {
        if onto.length_squared() == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(Self(self.0.project_onto(onto.0)))
    }

    /// Rotate by `q` as `q v q⁻¹`.
    pub fn rotated_by(self, q: Quaternion) -> Result<Self, MathError> {
        q.rotate(self)
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    pub fn angle_between(self, other: Self) -> Result<f64, MathError> {
        if self.length_squared() == 0.0 || other.length_squared() == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self.0.angle_between(other.0))
    }

    /// True when no component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Deref for Vector3 {
    type Target = DVec3;

    #[inline]
    fn deref(&self) -> &DVec3 {
        &self.0
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        v.0
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3(self.0 + rhs.0)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: f64) -> Vector3 {
        self.scale(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    #[inline]
    fn div(self, rhs: f64) -> Vector3 {
        Vector3(self.0 / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    #[inline]
    fn neg(self) -> Vector3 {
        Vector3(-self.0)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl std::iter::Sum for Vector3 {
    fn sum<I: Iterator<Item = Vector3>>(iter: I) -> Vector3 {
        iter.fold(Vector3::ZERO, Add::add)
    }
}
