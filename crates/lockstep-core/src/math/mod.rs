// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Transcendental functions on [`FixedDecimal`], built from integer operations
//! only.
//!
//! Strategy:
//! - `sin`/`cos`: fold into `[-PI/2, PI/2]`, then sum the Taylor series until
//!   the next term truncates to zero.
//! - `ln`: reduce into `[1, 10)` by powers of ten, then sum the
//!   `atanh`-style series `2(u + u³/3 + u⁵/5 + ...)`.
//! - `exp`: plain Taylor series, no range reduction.
//! - `sqrt`: Newton-Raphson on the scaled integer.
//! - `atan`: rational approximation (bounded accuracy, not a series).
//! - everything else is composed from the above.
//!
//! Series termination relies on the fixed precision: every term eventually
//! truncates to exactly zero, so no epsilon or iteration cap is involved.
//!
//! Free functions use a [`Silent`] probe. Construct a [`FixedMath`] with a
//! probe to observe iteration counts.

mod basic;
mod log;
mod reduce;
mod root;
mod trig;

use crate::probe::{Evaluation, Probe, Silent};
use crate::{FixedDecimal, FixedError};

/// Evaluator for the math functions, reporting to a [`Probe`].
///
/// Holds no state besides the probe; every method is a pure function of its
/// arguments.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedMath<P = Silent> {
    probe: P,
}

impl FixedMath<Silent> {
    /// Evaluator that reports nothing.
    pub const fn new() -> Self {
        Self { probe: Silent }
    }
}

impl<P: Probe> FixedMath<P> {
    /// Evaluator that reports every iterative evaluation to `probe`.
    pub const fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Returns the attached probe.
    pub const fn probe(&self) -> &P {
        &self.probe
    }

    fn report(
        &self,
        function: &'static str,
        input: &FixedDecimal,
        output: &FixedDecimal,
        iterations: u32,
    ) {
        self.probe.record(&Evaluation {
            function,
            input,
            output,
            iterations,
        });
    }
}

/// `-1` for negative values, `+1` otherwise (zero maps to `+1`).
pub fn sign(x: &FixedDecimal) -> i32 {
    FixedMath::new().sign(x)
}

/// Absolute value.
pub fn abs(x: &FixedDecimal) -> FixedDecimal {
    FixedMath::new().abs(x)
}

/// Sine of `x` radians.
pub fn sin(x: &FixedDecimal) -> FixedDecimal {
    FixedMath::new().sin(x)
}

/// Cosine of `x` radians.
pub fn cos(x: &FixedDecimal) -> FixedDecimal {
    FixedMath::new().cos(x)
}

/// Tangent of `x` radians.
pub fn tan(x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().tan(x)
}

/// Arc sine, in `[-PI/2, PI/2]`.
pub fn asin(x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().asin(x)
}

/// Arc cosine, in `[0, PI]`.
pub fn acos(x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().acos(x)
}

/// Arc tangent (rational approximation).
pub fn atan(x: &FixedDecimal) -> FixedDecimal {
    FixedMath::new().atan(x)
}

/// Four-quadrant arc tangent of `y / x`.
pub fn atan2(y: &FixedDecimal, x: &FixedDecimal) -> FixedDecimal {
    FixedMath::new().atan2(y, x)
}

/// Natural logarithm.
pub fn ln(x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().ln(x)
}

/// Base-2 logarithm.
pub fn log2(x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().log2(x)
}

/// Base-10 logarithm.
pub fn log10(x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().log10(x)
}

/// `e` raised to `x`.
pub fn exp(x: &FixedDecimal) -> FixedDecimal {
    FixedMath::new().exp(x)
}

/// `x` raised to `y`.
pub fn pow(x: &FixedDecimal, y: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().pow(x, y)
}

/// Square root.
pub fn sqrt(x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().sqrt(x)
}

/// Largest of `values`; the first occurrence wins ties.
pub fn max(values: &[FixedDecimal]) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().max(values)
}

/// Smallest of `values`; the first occurrence wins ties.
pub fn min(values: &[FixedDecimal]) -> Result<FixedDecimal, FixedError> {
    FixedMath::new().min(values)
}
