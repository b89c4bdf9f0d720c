// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, Mul, Sub};

use lockstep_core::{constants, FixedDecimal};

use crate::Vec2;

/// Row-major 2×2 matrix.
///
/// ```text
/// | m00 m01 |
/// | m10 m11 |
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat22 {
    /// Row 0, column 0.
    pub m00: FixedDecimal,
    /// Row 0, column 1.
    pub m01: FixedDecimal,
    /// Row 1, column 0.
    pub m10: FixedDecimal,
    /// Row 1, column 1.
    pub m11: FixedDecimal,
}

impl Mat22 {
    /// Builds a matrix from its rows.
    pub fn new(
        m00: impl Into<FixedDecimal>,
        m01: impl Into<FixedDecimal>,
        m10: impl Into<FixedDecimal>,
        m11: impl Into<FixedDecimal>,
    ) -> Self {
        Self {
            m00: m00.into(),
            m01: m01.into(),
            m10: m10.into(),
            m11: m11.into(),
        }
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        Self::new(1, 0, 0, 1)
    }

    /// All-zero matrix.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiplies every entry by `scalar`.
    pub fn scale(&self, scalar: &FixedDecimal) -> Self {
        Self {
            m00: &self.m00 * scalar,
            m01: &self.m01 * scalar,
            m10: &self.m10 * scalar,
            m11: &self.m11 * scalar,
        }
    }

    /// `self · v`.
    pub fn mul_vec(&self, v: &Vec2) -> Vec2 {
        Vec2 {
            x: &self.m00 * &v.x + &self.m01 * &v.y,
            y: &self.m10 * &v.x + &self.m11 * &v.y,
        }
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        Self {
            m00: self.m00.clone(),
            m01: self.m10.clone(),
            m10: self.m01.clone(),
            m11: self.m11.clone(),
        }
    }

    /// `m00·m11 - m01·m10`.
    pub fn determinant(&self) -> FixedDecimal {
        &self.m00 * &self.m11 - &self.m01 * &self.m10
    }

    /// Inverse via the adjugate scaled by `1/det`, or `None` when the
    /// determinant (or its truncated reciprocal) is zero.
    pub fn inverse(&self) -> Option<Self> {
        let inv = constants().one.checked_div(&self.determinant()).ok()?;
        if inv.is_zero() {
            return None;
        }
        let neg = -&inv;
        Some(Self {
            m00: &self.m11 * &inv,
            m01: &self.m01 * &neg,
            m10: &self.m10 * &neg,
            m11: &self.m00 * &inv,
        })
    }
}

impl Add for &Mat22 {
    type Output = Mat22;

    fn add(self, rhs: Self) -> Mat22 {
        Mat22 {
            m00: &self.m00 + &rhs.m00,
            m01: &self.m01 + &rhs.m01,
            m10: &self.m10 + &rhs.m10,
            m11: &self.m11 + &rhs.m11,
        }
    }
}

impl Sub for &Mat22 {
    type Output = Mat22;

    fn sub(self, rhs: Self) -> Mat22 {
        Mat22 {
            m00: &self.m00 - &rhs.m00,
            m01: &self.m01 - &rhs.m01,
            m10: &self.m10 - &rhs.m10,
            m11: &self.m11 - &rhs.m11,
        }
    }
}

impl Mul for &Mat22 {
    type Output = Mat22;

    fn mul(self, rhs: Self) -> Mat22 {
        Mat22 {
            m00: &self.m00 * &rhs.m00 + &self.m01 * &rhs.m10,
            m01: &self.m00 * &rhs.m01 + &self.m01 * &rhs.m11,
            m10: &self.m10 * &rhs.m00 + &self.m11 * &rhs.m10,
            m11: &self.m10 * &rhs.m01 + &self.m11 * &rhs.m11,
        }
    }
}

impl Add for Mat22 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for Mat22 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul for Mat22 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(text: &str) -> FixedDecimal {
        FixedDecimal::parse(text).unwrap_or_default()
    }

    #[test]
    fn product_uses_unmodified_operands() {
        let a = Mat22::new(1, 2, 3, 4);
        assert_eq!(&a * &a, Mat22::new(7, 10, 15, 22));
    }

    #[test]
    fn identity_is_neutral() {
        let a = Mat22::new(1, 2, 3, 4);
        assert_eq!(&a * &Mat22::identity(), a);
        assert_eq!(Mat22::identity() * a.clone(), a);
    }

    #[test]
    fn transpose_and_determinant() {
        let a = Mat22::new(1, 2, 3, 4);
        assert_eq!(a.transpose(), Mat22::new(1, 3, 2, 4));
        assert_eq!(a.determinant(), FixedDecimal::from_int(-2));
    }

    #[test]
    fn inverse_of_diagonal() {
        let a = Mat22::new(2, 0, 0, 4);
        assert_eq!(a.inverse(), Some(Mat22::new(fx("0.5"), 0, 0, fx("0.25"))));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert_eq!(Mat22::new(1, 2, 2, 4).inverse(), None);
        assert_eq!(Mat22::zero().inverse(), None);
    }

    #[test]
    fn vector_and_scalar_products() {
        let a = Mat22::new(1, 2, 3, 4);
        assert_eq!(a.mul_vec(&Vec2::new(1, 1)), Vec2::new(3, 7));
        assert_eq!(a.scale(&FixedDecimal::from_int(2)), Mat22::new(2, 4, 6, 8));
        assert_eq!(&a + &a, a.scale(&FixedDecimal::from_int(2)));
        assert_eq!(a.clone() - a, Mat22::zero());
    }
}
