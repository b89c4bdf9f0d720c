// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::{Add, Mul, Sub};

use lockstep_core::{constants, FixedDecimal};

use crate::Vec3;

/// Row-major 3×3 matrix; `mRC` is row `R`, column `C`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat33 {
    /// Row 0, column 0.
    pub m00: FixedDecimal,
    /// Row 0, column 1.
    pub m01: FixedDecimal,
    /// Row 0, column 2.
    pub m02: FixedDecimal,
    /// Row 1, column 0.
    pub m10: FixedDecimal,
    /// Row 1, column 1.
    pub m11: FixedDecimal,
    /// Row 1, column 2.
    pub m12: FixedDecimal,
    /// Row 2, column 0.
    pub m20: FixedDecimal,
    /// Row 2, column 1.
    pub m21: FixedDecimal,
    /// Row 2, column 2.
    pub m22: FixedDecimal,
}

impl Mat33 {
    /// Builds a matrix from three rows.
    pub fn from_rows(rows: [[FixedDecimal; 3]; 3]) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = rows;
        Self {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
            m20,
            m21,
            m22,
        }
    }

    /// Builds a matrix from whole-number rows.
    pub fn from_int_rows(rows: [[i64; 3]; 3]) -> Self {
        Self::from_rows(rows.map(|row| row.map(FixedDecimal::from_int)))
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        Self::from_int_rows([[1, 0, 0], [0, 1, 0], [0, 0, 1]])
    }

    /// All-zero matrix.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The entries as rows.
    pub fn to_rows(&self) -> [[FixedDecimal; 3]; 3] {
        [
            [self.m00.clone(), self.m01.clone(), self.m02.clone()],
            [self.m10.clone(), self.m11.clone(), self.m12.clone()],
            [self.m20.clone(), self.m21.clone(), self.m22.clone()],
        ]
    }

    fn map(&self, f: impl Fn(&FixedDecimal) -> FixedDecimal) -> Self {
        Self::from_rows(self.to_rows().map(|row| row.map(|v| f(&v))))
    }

    fn zip(&self, other: &Self, f: impl Fn(&FixedDecimal, &FixedDecimal) -> FixedDecimal) -> Self {
        let a = self.to_rows();
        let b = other.to_rows();
        Self::from_rows(core::array::from_fn(|r| {
            core::array::from_fn(|c| f(&a[r][c], &b[r][c]))
        }))
    }

    /// Multiplies every entry by `scalar`.
    pub fn scale(&self, scalar: &FixedDecimal) -> Self {
        self.map(|v| v * scalar)
    }

    /// `self · v`.
    pub fn mul_vec(&self, v: &Vec3) -> Vec3 {
        Vec3 {
            x: &self.m00 * &v.x + &self.m01 * &v.y + &self.m02 * &v.z,
            y: &self.m10 * &v.x + &self.m11 * &v.y + &self.m12 * &v.z,
            z: &self.m20 * &v.x + &self.m21 * &v.y + &self.m22 * &v.z,
        }
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let r = self.to_rows();
        Self::from_rows(core::array::from_fn(|i| {
            core::array::from_fn(|j| r[j][i].clone())
        }))
    }

    /// Determinant by the rule of Sarrus; each triple product truncates
    /// left to right.
    pub fn determinant(&self) -> FixedDecimal {
        let positive = &self.m00 * &self.m11 * &self.m22
            + &self.m01 * &self.m12 * &self.m20
            + &self.m02 * &self.m10 * &self.m21;
        let negative = &self.m20 * &self.m11 * &self.m02
            + &self.m21 * &self.m12 * &self.m00
            + &self.m22 * &self.m10 * &self.m01;
        positive - negative
    }

    /// Inverse via the adjugate scaled by `1/det`, or `None` when the
    /// determinant (or its truncated reciprocal) is zero.
    pub fn inverse(&self) -> Option<Self> {
        let inv = constants().one.checked_div(&self.determinant()).ok()?;
        if inv.is_zero() {
            return None;
        }
        let neg = -&inv;
        let minor = |a: &FixedDecimal, b: &FixedDecimal, c: &FixedDecimal, d: &FixedDecimal| {
            a * b - c * d
        };
        Some(Self {
            m00: minor(&self.m11, &self.m22, &self.m12, &self.m21) * &inv,
            m01: minor(&self.m01, &self.m22, &self.m21, &self.m02) * &neg,
            m02: minor(&self.m01, &self.m12, &self.m11, &self.m02) * &inv,
            m10: minor(&self.m10, &self.m22, &self.m20, &self.m12) * &neg,
            m11: minor(&self.m00, &self.m22, &self.m20, &self.m02) * &inv,
            m12: minor(&self.m00, &self.m12, &self.m10, &self.m02) * &neg,
            m20: minor(&self.m10, &self.m21, &self.m20, &self.m11) * &inv,
            m21: minor(&self.m00, &self.m21, &self.m20, &self.m01) * &neg,
            m22: minor(&self.m00, &self.m11, &self.m10, &self.m01) * &inv,
        })
    }
}

impl Add for &Mat33 {
    type Output = Mat33;

    fn add(self, rhs: Self) -> Mat33 {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for &Mat33 {
    type Output = Mat33;

    fn sub(self, rhs: Self) -> Mat33 {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul for &Mat33 {
    type Output = Mat33;

    fn mul(self, rhs: Self) -> Mat33 {
        let a = self.to_rows();
        let b = rhs.to_rows();
        Mat33::from_rows(core::array::from_fn(|r| {
            core::array::from_fn(|c| {
                &a[r][0] * &b[0][c] + &a[r][1] * &b[1][c] + &a[r][2] * &b[2][c]
            })
        }))
    }
}

impl Add for Mat33 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for Mat33 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul for Mat33 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}
