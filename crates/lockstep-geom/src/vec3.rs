// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, Neg, Sub};

use lockstep_core::{math, FixedDecimal, FixedError};

use crate::root_of_squares;

/// 3D vector of fixed-point components.
///
/// Interpreted as a point or a direction depending on the caller; the type
/// makes no distinction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// X component.
    pub x: FixedDecimal,
    /// Y component.
    pub y: FixedDecimal,
    /// Z component.
    pub z: FixedDecimal,
}

impl Vec3 {
    /// Creates a vector from components.
    pub fn new(
        x: impl Into<FixedDecimal>,
        y: impl Into<FixedDecimal>,
        z: impl Into<FixedDecimal>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// `(0, 0, 0)`.
    pub fn zero() -> Self {
        Self::default()
    }

    /// `(1, 0, 0)`.
    pub fn unit_x() -> Self {
        Self::new(1, 0, 0)
    }

    /// `(-1, 0, 0)`.
    pub fn neg_unit_x() -> Self {
        Self::new(-1, 0, 0)
    }

    /// `(0, 1, 0)`.
    pub fn unit_y() -> Self {
        Self::new(0, 1, 0)
    }

    /// `(0, -1, 0)`.
    pub fn neg_unit_y() -> Self {
        Self::new(0, -1, 0)
    }

    /// `(0, 0, 1)`.
    pub fn unit_z() -> Self {
        Self::new(0, 0, 1)
    }

    /// `(0, 0, -1)`.
    pub fn neg_unit_z() -> Self {
        Self::new(0, 0, -1)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> FixedDecimal {
        root_of_squares(&self.dot(self))
    }

    /// Unit vector in the same direction, or zero for degenerate input.
    pub fn normalize(&self) -> Self {
        let magnitude = self.magnitude();
        if !magnitude.is_positive() {
            return Self::zero();
        }
        self.checked_div_scalar(&magnitude).unwrap_or_default()
    }

    /// Distance to `other`.
    pub fn distance(&self, other: &Self) -> FixedDecimal {
        root_of_squares(&self.distance_squared(other))
    }

    /// Squared distance to `other`.
    pub fn distance_squared(&self, other: &Self) -> FixedDecimal {
        let delta = self - other;
        delta.dot(&delta)
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: &FixedDecimal) -> Self {
        Self {
            x: &self.x * scalar,
            y: &self.y * scalar,
            z: &self.z * scalar,
        }
    }

    /// Divides every component by `scalar`.
    pub fn checked_div_scalar(&self, scalar: &FixedDecimal) -> Result<Self, FixedError> {
        Ok(Self {
            x: self.x.checked_div(scalar)?,
            y: self.y.checked_div(scalar)?,
            z: self.z.checked_div(scalar)?,
        })
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> FixedDecimal {
        &self.x * &other.x + &self.y * &other.y + &self.z * &other.z
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: &self.y * &other.z - &self.z * &other.y,
            y: &self.z * &other.x - &self.x * &other.z,
            z: &self.x * &other.y - &self.y * &other.x,
        }
    }

    /// Difference of the XY-plane headings of `other` and `self`.
    pub fn angle_to(&self, other: &Self) -> FixedDecimal {
        math::atan2(&other.y, &other.x) - math::atan2(&self.y, &self.x)
    }

    /// Projection of `self` onto `onto`; zero when `onto` is degenerate.
    pub fn project(&self, onto: &Self) -> Self {
        let denominator = onto.dot(onto);
        if !denominator.is_positive() {
            return Self::zero();
        }
        self.dot(onto)
            .checked_div(&denominator)
            .map(|ratio| onto.scale(&ratio))
            .unwrap_or_default()
    }
}

impl Add for &Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Self) -> Vec3 {
        Vec3 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
            z: &self.z + &rhs.z,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for &Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Vec3 {
        Vec3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Neg for &Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3 {
            x: -&self.x,
            y: -&self.y,
            z: -&self.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_the_right_hand_rule() {
        assert_eq!(Vec3::unit_x().cross(&Vec3::unit_y()), Vec3::unit_z());
        assert_eq!(Vec3::unit_y().cross(&Vec3::unit_x()), Vec3::neg_unit_z());
        assert_eq!(Vec3::unit_z().cross(&Vec3::unit_x()), Vec3::unit_y());
    }

    #[test]
    fn length_and_distance() {
        let v = Vec3::new(2, 3, 6);
        assert_eq!(v.magnitude(), FixedDecimal::from_int(7));
        assert_eq!(Vec3::zero().distance(&v), FixedDecimal::from_int(7));
        assert_eq!(Vec3::zero().distance_squared(&v), FixedDecimal::from_int(49));
    }

    #[test]
    fn normalize_axis_and_zero() {
        assert_eq!(Vec3::new(0, 0, 9).normalize(), Vec3::unit_z());
        assert_eq!(Vec3::zero().normalize(), Vec3::zero());
    }

    #[test]
    fn projection_onto_axis() {
        assert_eq!(Vec3::new(1, 2, 3).project(&Vec3::unit_y()), Vec3::new(0, 2, 0));
        assert_eq!(Vec3::new(1, 2, 3).project(&Vec3::zero()), Vec3::zero());
    }

    #[test]
    fn operators() {
        let a = Vec3::new(1, 2, 3);
        let b = Vec3::new(-1, 5, 0);
        assert_eq!(&a + &b, Vec3::new(0, 7, 3));
        assert_eq!(a.clone() - b, Vec3::new(2, -3, 3));
        assert_eq!(-a, Vec3::new(-1, -2, -3));
        assert_eq!(-Vec3::unit_x(), Vec3::neg_unit_x());
        assert_eq!(-Vec3::unit_y(), Vec3::neg_unit_y());
    }

    #[test]
    fn scalar_ops() {
        let half = FixedDecimal::parse("0.5").unwrap_or_default();
        assert_eq!(Vec3::new(2, 4, 6).scale(&half), Vec3::new(1, 2, 3));
        assert_eq!(
            Vec3::new(2, 4, 6).checked_div_scalar(&FixedDecimal::from_int(2)),
            Ok(Vec3::new(1, 2, 3))
        );
    }
}
