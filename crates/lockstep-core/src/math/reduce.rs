// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Range reduction on scaled integers.
//!
//! Both folds use the truncated remainder (`%` on `BigInt` keeps the sign of
//! the dividend), so negative angles fold toward zero symmetrically.

use num_bigint::BigInt;

use crate::constants::constants;
use crate::FixedDecimal;

/// Folds `x` into `[-PI/2, PI/2]` modulo `2*PI`.
///
/// Returns the reduced angle and whether an odd number of half turns was
/// removed. `sin(x) = ±sin(r)` and `cos(x) = ±cos(r)` with the same sign.
pub(crate) fn fold_half_turns(x: &FixedDecimal) -> (FixedDecimal, bool) {
    let c = constants();
    let half = c.frac_pi_2.scaled();
    let pi = c.pi.scaled();
    let neg_half: BigInt = -half;

    let mut r = x.scaled() % c.tau.scaled();
    let mut flipped = false;
    if &r > half {
        r -= pi;
        flipped = !flipped;
        if &r > half {
            r -= pi;
            flipped = !flipped;
        }
    } else if r < neg_half {
        r += pi;
        flipped = !flipped;
        if r < neg_half {
            r += pi;
            flipped = !flipped;
        }
    }
    (FixedDecimal::from_scaled(r), flipped)
}

/// Folds `x` into `[-PI/2, PI/2]` modulo `PI`; `tan` has period `PI`.
pub(crate) fn fold_turn(x: &FixedDecimal) -> FixedDecimal {
    let c = constants();
    let half = c.frac_pi_2.scaled();
    let pi = c.pi.scaled();

    let mut r = x.scaled() % pi;
    if &r > half {
        r -= pi;
    } else if r < -half {
        r += pi;
    }
    FixedDecimal::from_scaled(r)
}
