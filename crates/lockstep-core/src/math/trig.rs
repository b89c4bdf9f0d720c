// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Trigonometric functions and their inverses.

use super::{reduce, FixedMath};
use crate::constants::constants;
use crate::probe::Probe;
use crate::{FixedDecimal, FixedError};

impl<P: Probe> FixedMath<P> {
    /// Sine of `x` radians.
    ///
    /// `x - x³/3! + x⁵/5! - ...` over the folded angle.
    pub fn sin(&self, x: &FixedDecimal) -> FixedDecimal {
        let (reduced, flipped) = reduce::fold_half_turns(x);
        let (sum, iterations) = alternating_series(reduced.clone(), 1, &reduced);
        let result = if flipped { -sum } else { sum };
        self.report("sin", x, &result, iterations);
        result
    }

    /// Cosine of `x` radians.
    ///
    /// `1 - x²/2! + x⁴/4! - ...` over the folded angle.
    pub fn cos(&self, x: &FixedDecimal) -> FixedDecimal {
        let (reduced, flipped) = reduce::fold_half_turns(x);
        let (sum, iterations) = alternating_series(constants().one.clone(), 0, &reduced);
        let result = if flipped { -sum } else { sum };
        self.report("cos", x, &result, iterations);
        result
    }

    /// Tangent of `x` radians.
    ///
    /// Within `0.01` of `PI/2` the complementary angle is used
    /// (`cot(PI/2 - x)`), which keeps the divisor away from a tiny cosine.
    /// Fails with `DivideByZero` exactly at a singularity of the truncated
    /// `PI/2`.
    pub fn tan(&self, x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
        let c = constants();
        let reduced = reduce::fold_turn(x);
        let complement = &c.frac_pi_2 - &reduced;
        if complement.abs() <= c.tan_switch {
            let sine = self.sin(&complement);
            return self.cos(&complement).checked_div(&sine);
        }
        let cosine = self.cos(&reduced);
        self.sin(&reduced).checked_div(&cosine)
    }

    /// Arc sine, `atan(x / sqrt(1 - x²))`, in `[-PI/2, PI/2]`.
    ///
    /// Fails with `Domain` when `|x| > 1`.
    pub fn asin(&self, x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
        let cosine = self.unit_complement("asin", x)?;
        Ok(self.atan2(x, &cosine))
    }

    /// Arc cosine, `atan(sqrt(1 - x²) / x)`, in `[0, PI]`.
    ///
    /// Fails with `Domain` when `|x| > 1`.
    pub fn acos(&self, x: &FixedDecimal) -> Result<FixedDecimal, FixedError> {
        let sine = self.unit_complement("acos", x)?;
        Ok(self.atan2(&sine, x))
    }

    /// Arc tangent via `PI/4·x + 0.273·x·(1 - |x|)` on `[-1, 1]` and the
    /// reciprocal identity outside it.
    ///
    /// This is a closed-form approximation with a maximum error of roughly
    /// `0.004` rad, not a converging series.
    pub fn atan(&self, x: &FixedDecimal) -> FixedDecimal {
        let c = constants();
        let magnitude = x.abs();
        if magnitude > c.one {
            // |x| > 1, so the reciprocal is well defined.
            let inner = self.atan(&c.one.div_nonzero(x));
            return if x.is_negative() {
                -&c.frac_pi_2 - inner
            } else {
                &c.frac_pi_2 - inner
            };
        }
        let linear = &c.frac_pi_4 * x;
        let correction = ((&c.one - magnitude) * &c.atan_k) * x;
        linear + correction
    }

    /// Four-quadrant arc tangent of `y / x`, in `[-PI, PI]`.
    ///
    /// `atan2(0, 0)` is defined as zero.
    pub fn atan2(&self, y: &FixedDecimal, x: &FixedDecimal) -> FixedDecimal {
        let c = constants();
        if x.is_zero() {
            return if y.is_positive() {
                c.frac_pi_2.clone()
            } else if y.is_negative() {
                -&c.frac_pi_2
            } else {
                c.zero.clone()
            };
        }
        let base = self.atan(&y.div_nonzero(x));
        if x.is_positive() {
            base
        } else if y.is_negative() {
            base - &c.pi
        } else {
            base + &c.pi
        }
    }

    /// `sqrt(1 - x²)` after checking `|x| <= 1`.
    fn unit_complement(
        &self,
        function: &'static str,
        x: &FixedDecimal,
    ) -> Result<FixedDecimal, FixedError> {
        let c = constants();
        if x.abs() > c.one {
            return Err(FixedError::domain(function, x));
        }
        self.sqrt(&(&c.one - x * x))
    }
}

/// Sums `first - first·x²/((k+1)(k+2)) + ...` where `first = x^k / k!`
/// (with `k = order`), until a term truncates to zero.
///
/// Returns the sum and the number of terms added.
fn alternating_series(first: FixedDecimal, order: i64, x: &FixedDecimal) -> (FixedDecimal, u32) {
    let step = x * x;
    let mut power = first;
    let mut factorial = constants().one.clone();
    let mut n = order;
    let mut term = power.clone();
    let mut sum = FixedDecimal::default();
    let mut negative = false;
    let mut iterations = 0_u32;

    while !term.is_zero() {
        if negative {
            sum -= &term;
        } else {
            sum += &term;
        }
        iterations += 1;

        power *= &step;
        n += 1;
        factorial = factorial.mul_int(n);
        n += 1;
        factorial = factorial.mul_int(n);
        negative = !negative;
        // Factorials are >= 1 and never truncate to zero.
        term = power.div_nonzero(&factorial);
    }
    (sum, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedErrorKind;

    fn fx(text: &str) -> FixedDecimal {
        FixedDecimal::parse(text).unwrap_or_default()
    }

    fn show(v: Result<FixedDecimal, FixedError>) -> String {
        v.map_or_else(|e| e.to_string(), |v| v.to_string())
    }

    #[test]
    fn sine_and_cosine_golden_values() {
        let m = FixedMath::new();
        assert_eq!(m.sin(&fx("-1.2")).to_string(), "-0.9320");
        assert_eq!(m.cos(&fx("-1.2")).to_string(), "0.3624");
        assert_eq!(m.sin(&fx("0")).to_string(), "0.0000");
        assert_eq!(m.cos(&fx("0")).to_string(), "1.0000");
    }

    #[test]
    fn folded_angles_keep_the_half_turn_sign() {
        let m = FixedMath::new();
        assert_eq!(m.sin(&fx("4")).to_string(), "-0.7569");
        assert_eq!(m.cos(&fx("4")).to_string(), "-0.6536");
        assert_eq!(m.sin(&fx("-10")).to_string(), "0.5443");
        assert_eq!(m.cos(&fx("-10")).to_string(), "-0.8389");
        assert_eq!(m.cos(&fx("3.1416")).to_string(), "-1.0000");
    }

    #[test]
    fn sine_is_odd_cosine_is_even() {
        let m = FixedMath::new();
        for text in ["0.3", "1.5", "2.9", "7", "123.4567"] {
            let x = fx(text);
            assert_eq!(m.sin(&-&x), -m.sin(&x), "sin({text})");
            assert_eq!(m.cos(&-&x), m.cos(&x), "cos({text})");
        }
    }

    #[test]
    fn tangent_golden_values() {
        let m = FixedMath::new();
        assert_eq!(show(m.tan(&fx("1.2"))), "2.5717");
        assert_eq!(show(m.tan(&fx("-1.5"))), "-14.1089");
        assert_eq!(show(m.tan(&fx("4"))), "1.1580");
        assert_eq!(show(m.tan(&fx("1.56"))), "93.4485");
        // Within 0.01 of PI/2: complementary path.
        assert_eq!(show(m.tan(&fx("1.5607"))), "100.0000");
        assert_eq!(show(m.tan(&fx("1.565"))), "175.4385");
    }

    #[test]
    fn tangent_singularity_divides_by_zero() {
        let m = FixedMath::new();
        let at_pole = constants().frac_pi_2.clone();
        assert_eq!(m.tan(&at_pole), Err(FixedError::DivideByZero));
        // PI/2 + PI folds back onto the same pole.
        assert_eq!(m.tan(&fx("4.7122")), Err(FixedError::DivideByZero));
    }

    #[test]
    fn arctangent_golden_values() {
        let m = FixedMath::new();
        assert_eq!(m.atan(&fx("1.2")).to_string(), "0.8785");
        assert_eq!(m.atan(&fx("1")).to_string(), "0.7853");
        assert_eq!(m.atan(&fx("0.5")).to_string(), "0.4608");
        assert_eq!(m.atan(&fx("-0.5")).to_string(), "-0.4608");
    }

    #[test]
    fn arctangent_is_odd_beyond_unit_interval() {
        let m = FixedMath::new();
        assert_eq!(m.atan(&fx("2")).to_string(), "1.1099");
        assert_eq!(m.atan(&fx("-2")).to_string(), "-1.1099");
    }

    #[test]
    fn atan2_quadrants() {
        let m = FixedMath::new();
        let cases = [
            ("1.2", "1", "0.8785"),
            ("1", "1", "0.7853"),
            ("1", "-1", "2.3562"),
            ("-1", "-1", "-2.3562"),
            ("-1", "1", "-0.7853"),
            ("0", "-1", "3.1415"),
            ("1", "0", "1.5707"),
            ("-1", "0", "-1.5707"),
            ("0", "0", "0.0000"),
        ];
        for (y, x, expected) in cases {
            assert_eq!(m.atan2(&fx(y), &fx(x)).to_string(), expected, "atan2({y}, {x})");
        }
    }

    #[test]
    fn inverse_sine_and_cosine() {
        let m = FixedMath::new();
        assert_eq!(show(m.asin(&fx("0.5"))), "0.5198");
        assert_eq!(show(m.asin(&fx("-1"))), "-1.5707");
        assert_eq!(show(m.acos(&fx("0.5"))), "1.0509");
        assert_eq!(show(m.acos(&fx("-0.5"))), "2.0906");
        assert_eq!(show(m.acos(&fx("0"))), "1.5707");
        assert_eq!(show(m.acos(&fx("-1"))), "3.1415");
    }

    #[test]
    fn inverse_functions_reject_out_of_range() {
        let m = FixedMath::new();
        assert_eq!(m.asin(&fx("1.0001")).map_err(|e| e.kind()), Err(FixedErrorKind::Domain));
        assert_eq!(m.acos(&fx("-2")).map_err(|e| e.kind()), Err(FixedErrorKind::Domain));
    }
}
