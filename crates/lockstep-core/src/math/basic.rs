// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sign, magnitude and extrema.

use super::FixedMath;
use crate::probe::Probe;
use crate::{FixedDecimal, FixedError};

impl<P: Probe> FixedMath<P> {
    /// `-1` for negative values, `+1` otherwise.
    ///
    /// Zero is not distinguished: `sign(0) == 1`. Callers that need a
    /// three-way result should compare against zero directly.
    pub fn sign(&self, x: &FixedDecimal) -> i32 {
        if x.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Absolute value.
    pub fn abs(&self, x: &FixedDecimal) -> FixedDecimal {
        x.abs()
    }

    /// Largest of `values`; fails with `InvalidArgument` when empty.
    pub fn max(&self, values: &[FixedDecimal]) -> Result<FixedDecimal, FixedError> {
        extremum("max", values, |candidate, best| candidate > best)
    }

    /// Smallest of `values`; fails with `InvalidArgument` when empty.
    pub fn min(&self, values: &[FixedDecimal]) -> Result<FixedDecimal, FixedError> {
        extremum("min", values, |candidate, best| candidate < best)
    }
}

fn extremum(
    function: &'static str,
    values: &[FixedDecimal],
    replaces: impl Fn(&FixedDecimal, &FixedDecimal) -> bool,
) -> Result<FixedDecimal, FixedError> {
    let (first, rest) = values.split_first().ok_or(FixedError::InvalidArgument {
        function,
        reason: "at least one value is required",
    })?;
    let best = rest.iter().fold(first, |best, candidate| {
        if replaces(candidate, best) {
            candidate
        } else {
            best
        }
    });
    Ok(best.clone())
}
