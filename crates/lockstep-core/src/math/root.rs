// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Square root by Newton iteration.

use super::FixedMath;
use crate::constants::constants;
use crate::probe::Probe;
use crate::{FixedDecimal, FixedError};

fn halve(value: &FixedDecimal) -> FixedDecimal {
    FixedDecimal::from_scaled(value.scaled() / 2)
}

impl<P: Probe> FixedMath<P> {
    /// Square root.
    ///
    /// Starts from `x/2 + 1`, which is never below the root, and steps
    /// `t = (t + x/t) / 2` until `t·t <= x`. The result therefore never
    /// overshoots; it can sit a few units in the last place above the
    /// exact truncated root for very small inputs.
    ///
    /// Fails with `Domain` when `x < 0`.
    pub fn sqrt(&self, x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
        if x.is_negative() {
            return Err(FixedError::domain("sqrt", x));
        }
        if x.is_zero() {
            return Ok(FixedDecimal::default());
        }

        let mut estimate = halve(x) + &constants().one;
        let mut iterations = 0_u32;
        while &(&estimate * &estimate) > x {
            // estimate > 0 throughout: it starts above 1 and each step
            // averages two positive values.
            let quotient = x.div_nonzero(&estimate);
            estimate = halve(&(estimate + quotient));
            iterations += 1;
        }
        self.report("sqrt", x, &estimate, iterations);
        Ok(estimate)
    }
}
