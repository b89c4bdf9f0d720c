// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Exact scaled-integer decimal value.
//!
//! A [`FixedDecimal`] stores `value * SCALE` as an arbitrary-precision
//! integer, so addition, subtraction and negation are exact and can never
//! overflow. Multiplication and division rescale and then truncate toward
//! zero; that truncation direction is the same on every platform.
//!
//! # Determinism contract
//!
//! - Identical scaled inputs produce identical scaled outputs for every
//!   operation.
//! - Construction from text or floats truncates (never rounds) digits beyond
//!   [`DECIMALS`](crate::DECIMALS).
//! - Non-finite floats are rejected, never coerced.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::constants::{scale, DECIMALS};
use crate::error::FixedError;
use crate::parse;

/// Decimal number with a fixed count of fractional digits.
///
/// Ordering and equality compare the scaled integers, which gives a total
/// order with no NaN-like state.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedDecimal {
    scaled: BigInt,
}

impl FixedDecimal {
    /// Wraps an integer that is already in scaled form (`value * SCALE`).
    pub fn from_scaled(scaled: impl Into<BigInt>) -> Self {
        Self {
            scaled: scaled.into(),
        }
    }

    /// Builds the whole number `n`.
    pub fn from_int(n: i64) -> Self {
        Self {
            scaled: BigInt::from(n) * scale(),
        }
    }

    /// Converts a float by formatting its shortest round-trip representation
    /// and truncating it to the crate precision.
    ///
    /// Fails with [`FixedError::Conversion`] for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<Self, FixedError> {
        if !value.is_finite() {
            return Err(FixedError::conversion(value.to_string(), "non-finite value"));
        }
        parse::parse_scaled(&value.to_string()).map(Self::from_scaled)
    }

    /// Parses decimal, scientific or radix-prefixed integer text.
    ///
    /// See [`FromStr`] for the accepted grammar.
    pub fn parse(text: &str) -> Result<Self, FixedError> {
        parse::parse_scaled(text).map(Self::from_scaled)
    }

    /// Returns the scaled integer (`value * SCALE`).
    pub fn scaled(&self) -> &BigInt {
        &self.scaled
    }

    /// Consumes the value, returning the scaled integer.
    pub fn into_scaled(self) -> BigInt {
        self.scaled
    }

    /// Returns `true` for the value zero.
    pub fn is_zero(&self) -> bool {
        self.scaled.is_zero()
    }

    /// Returns `true` for values strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.scaled.is_negative()
    }

    /// Returns `true` for values strictly above zero.
    pub fn is_positive(&self) -> bool {
        self.scaled.is_positive()
    }

    /// Returns `true` when the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        (&self.scaled % scale()).is_zero()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            scaled: self.scaled.abs(),
        }
    }

    /// Integer part, truncated toward zero.
    pub fn trunc(&self) -> Self {
        let whole = &self.scaled / scale();
        Self {
            scaled: whole * scale(),
        }
    }

    /// Integer part as an `i64`, or `None` if it does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        (&self.scaled / scale()).to_i64()
    }

    /// Multiplies by a whole number. Exact, and bit-identical to
    /// `self * FixedDecimal::from_int(n)`.
    pub fn mul_int(&self, n: i64) -> Self {
        Self {
            scaled: &self.scaled * n,
        }
    }

    /// Divides by `rhs`, truncating the quotient toward zero.
    ///
    /// Fails with [`FixedError::DivideByZero`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, FixedError> {
        if rhs.is_zero() {
            return Err(FixedError::DivideByZero);
        }
        Ok(self.div_nonzero(rhs))
    }

    /// Division for divisors the caller has already proven non-zero.
    pub(crate) fn div_nonzero(&self, rhs: &Self) -> Self {
        debug_assert!(!rhs.is_zero(), "divisor must be non-zero");
        Self {
            scaled: (&self.scaled * scale()) / &rhs.scaled,
        }
    }

    /// Lossy conversion to `f64`, for display and diagnostics only.
    pub fn to_f64(&self) -> f64 {
        // The canonical form always parses; huge magnitudes become infinite.
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.scaled.is_negative() { "-" } else { "" };
        let (whole, frac) = self.scaled.abs().div_rem(scale());
        let frac = frac.to_string();
        let width = DECIMALS as usize;
        write!(f, "{sign}{whole}.{frac:0>width$}")
    }
}

impl fmt::Debug for FixedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal({self})")
    }
}

/// Accepted grammar (surrounding whitespace ignored):
///
/// - decimal: `[+-]digits[.digits]`, `[+-].digits`, `[+-]digits.`
/// - scientific: any decimal followed by `e`/`E` and a signed exponent
/// - radix integers: `[+-]0x..`, `[+-]0o..`, `[+-]0b..` (prefix case-insensitive)
///
/// Fractional digits beyond the precision are truncated toward zero.
impl FromStr for FixedDecimal {
    type Err = FixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for FixedDecimal {
    type Error = FixedError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<f32> for FixedDecimal {
    type Error = FixedError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(FixedError::conversion(value.to_string(), "non-finite value"));
        }
        // f32 Display is the shortest f32 round-trip form, not the widened f64 one.
        Self::parse(&value.to_string())
    }
}

macro_rules! from_whole {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FixedDecimal {
                fn from(n: $t) -> Self {
                    Self {
                        scaled: BigInt::from(n) * scale(),
                    }
                }
            }
        )*
    };
}

from_whole!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $body:expr) => {
        impl $trait<&FixedDecimal> for &FixedDecimal {
            type Output = FixedDecimal;

            fn $method(self, rhs: &FixedDecimal) -> FixedDecimal {
                let f: fn(&BigInt, &BigInt) -> BigInt = $body;
                FixedDecimal {
                    scaled: f(&self.scaled, &rhs.scaled),
                }
            }
        }

        impl $trait<FixedDecimal> for FixedDecimal {
            type Output = FixedDecimal;

            fn $method(self, rhs: FixedDecimal) -> FixedDecimal {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&FixedDecimal> for FixedDecimal {
            type Output = FixedDecimal;

            fn $method(self, rhs: &FixedDecimal) -> FixedDecimal {
                (&self).$method(rhs)
            }
        }

        impl $trait<FixedDecimal> for &FixedDecimal {
            type Output = FixedDecimal;

            fn $method(self, rhs: FixedDecimal) -> FixedDecimal {
                self.$method(&rhs)
            }
        }

        impl $assign_trait<&FixedDecimal> for FixedDecimal {
            fn $assign_method(&mut self, rhs: &FixedDecimal) {
                *self = (&*self).$method(rhs);
            }
        }

        impl $assign_trait<FixedDecimal> for FixedDecimal {
            fn $assign_method(&mut self, rhs: FixedDecimal) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

binary_op!(Add, add, AddAssign, add_assign, |a, b| a + b);
binary_op!(Sub, sub, SubAssign, sub_assign, |a, b| a - b);
binary_op!(Mul, mul, MulAssign, mul_assign, |a, b| (a * b) / scale());

impl Neg for FixedDecimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            scaled: -self.scaled,
        }
    }
}

impl Neg for &FixedDecimal {
    type Output = FixedDecimal;

    fn neg(self) -> FixedDecimal {
        FixedDecimal {
            scaled: -&self.scaled,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FixedDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FixedDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
