// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Logarithms, exponential and power.

use num_integer::Integer;

use super::FixedMath;
use crate::constants::{constants, scale};
use crate::probe::Probe;
use crate::{FixedDecimal, FixedError};

impl<P: Probe> FixedMath<P> {
    /// Natural logarithm.
    ///
    /// Reduces `y = a·10^b` with `a` in `[1, 10)`, then sums
    /// `ln(a) = 2(u + u³/3 + u⁵/5 + ...)` with `u = (a-1)/(a+1)` and adds
    /// `b·ln(10)`. Fails with `Domain` when `y <= 0`.
    pub fn ln(&self, y: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
        let c = constants();
        if !y.is_positive() {
            return Err(FixedError::domain("ln", y));
        }

        let ten = FixedDecimal::from_int(10);
        let mut reduced = y.clone();
        let mut exponent = 0_i64;
        while reduced >= ten {
            reduced = reduced.div_nonzero(&ten);
            exponent += 1;
        }
        while reduced < c.one {
            reduced = reduced.mul_int(10);
            exponent -= 1;
        }

        // reduced >= 1, so the denominator is at least 2.
        let u = (&reduced - &c.one).div_nonzero(&(&reduced + &c.one));
        let step = &u * &u;
        let mut power = u;
        let mut denominator = c.one.clone();
        let mut term = power.clone();
        let mut sum = FixedDecimal::default();
        let mut iterations = 0_u32;
        while !term.is_zero() {
            sum += &term;
            iterations += 1;
            power *= &step;
            denominator += &c.two;
            term = power.div_nonzero(&denominator);
        }

        let result = sum.mul_int(2) + c.ln10.mul_int(exponent);
        self.report("ln", y, &result, iterations);
        Ok(result)
    }

    /// Base-2 logarithm, `ln(x) / ln(2)`.
    pub fn log2(&self, x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
        self.ln(x)?.checked_div(&constants().ln2)
    }

    /// Base-10 logarithm, `ln(x) / ln(10)`.
    pub fn log10(&self, x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
        self.ln(x)?.checked_div(&constants().ln10)
    }

    /// `e^x` from `1 + x + x²/2! + x³/3! + ...`.
    ///
    /// There is no range reduction: large `|x|` needs many terms, and for
    /// large negative `x` the alternating terms cancel badly, so precision
    /// degrades (`exp(-10)` comes out slightly negative). Termination is
    /// still guaranteed because `n!` eventually dominates every power.
    pub fn exp(&self, x: &FixedDecimal) -> FixedDecimal {
        let c = constants();
        let mut power = c.one.clone();
        let mut factorial = c.one.clone();
        let mut n = 0_i64;
        let mut term = power.clone();
        let mut sum = FixedDecimal::default();
        let mut iterations = 0_u32;
        while !term.is_zero() {
            sum += &term;
            iterations += 1;
            power *= x;
            n += 1;
            factorial = factorial.mul_int(n);
            term = power.div_nonzero(&factorial);
        }
        self.report("exp", x, &sum, iterations);
        sum
    }

    /// `x^y` as `exp(y·ln(x))`.
    ///
    /// - `x = 0` returns zero for every `y`.
    /// - `x < 0` requires an integer `y` (else `InvalidArgument`); the result
    ///   is `exp(y·ln|x|)`, negated when `y` is odd.
    pub fn pow(&self, x: &FixedDecimal, y: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
        if x.is_negative() && !y.is_integer() {
            return Err(FixedError::InvalidArgument {
                function: "pow",
                reason: "a negative base requires an integer exponent",
            });
        }
        if x.is_zero() {
            return Ok(FixedDecimal::default());
        }
        let magnitude = self.exp(&(y * self.ln(&x.abs())?));
        let odd = (y.scaled() / scale()).is_odd();
        Ok(if x.is_negative() && odd {
            -magnitude
        } else {
            magnitude
        })
    }
}
