// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, Neg, Sub};

use lockstep_core::{math, FixedDecimal, FixedError};

use crate::root_of_squares;

/// 2D vector of fixed-point components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// Horizontal component.
    pub x: FixedDecimal,
    /// Vertical component.
    pub y: FixedDecimal,
}

impl Vec2 {
    /// Creates a vector from components.
    pub fn new(x: impl Into<FixedDecimal>, y: impl Into<FixedDecimal>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// `(0, 0)`.
    pub fn zero() -> Self {
        Self::default()
    }

    /// `(1, 0)`.
    pub fn unit_x() -> Self {
        Self::new(1, 0)
    }

    /// `(-1, 0)`.
    pub fn neg_unit_x() -> Self {
        Self::new(-1, 0)
    }

    /// `(0, 1)`.
    pub fn unit_y() -> Self {
        Self::new(0, 1)
    }

    /// `(0, -1)`.
    pub fn neg_unit_y() -> Self {
        Self::new(0, -1)
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> FixedDecimal {
        root_of_squares(&self.dot(self))
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude truncates to zero.
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

    /// Multiplies both components by `scalar`.
    pub fn scale(&self, scalar: &FixedDecimal) -> Self {
        Self {
            x: &self.x * scalar,
            y: &self.y * scalar,
        }
    }

    /// Divides both components by `scalar`.
    pub fn checked_div_scalar(&self, scalar: &FixedDecimal) -> Result<Self, FixedError> {
        Ok(Self {
            x: self.x.checked_div(scalar)?,
            y: self.y.checked_div(scalar)?,
        })
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> FixedDecimal {
        &self.x * &other.x + &self.y * &other.y
    }

    /// Z component of the 3D cross product `(x, y, 0) × (ox, oy, 0)`.
    pub fn cross(&self, other: &Self) -> FixedDecimal {
        &self.x * &other.y - &self.y * &other.x
    }

    /// Signed angle from `self` to `other`, as the difference of their
    /// `atan2` headings. Not normalized into `(-PI, PI]`.
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

impl Add for &Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Vec2 {
        Vec2 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for &Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Vec2 {
        Vec2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Neg for &Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 {
            x: -&self.x,
            y: -&self.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}
