// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Precision parameters and the named constant table.
//!
//! The precision is a build-time constant. Every constant in the table is
//! derived from an `f64` literal and truncated to [`DECIMALS`] fractional
//! digits, so the accuracy of every transcendental result is bounded by the
//! chosen precision. The half/quarter/double turn constants are derived from
//! the truncated `PI` by shifting its scaled integer.

use std::sync::OnceLock;

use num_bigint::BigInt;

use crate::FixedDecimal;

/// Number of fractional decimal digits carried by every [`FixedDecimal`].
pub const DECIMALS: u32 = 4;

/// Scale factor separating integer and fractional parts (`10^DECIMALS`).
pub const SCALE: i64 = 10_i64.pow(DECIMALS);

static SCALE_BIG: OnceLock<BigInt> = OnceLock::new();
static TABLE: OnceLock<Constants> = OnceLock::new();

/// `SCALE` as an arbitrary-precision integer.
pub(crate) fn scale() -> &'static BigInt {
    SCALE_BIG.get_or_init(|| BigInt::from(SCALE))
}

/// Named mathematical constants at the crate's fixed precision.
#[derive(Debug, Clone)]
pub struct Constants {
    /// `0`.
    pub zero: FixedDecimal,
    /// `1`.
    pub one: FixedDecimal,
    /// `2`.
    pub two: FixedDecimal,
    /// Euler's number, the base of natural logarithms.
    pub e: FixedDecimal,
    /// Natural logarithm of 2.
    pub ln2: FixedDecimal,
    /// Natural logarithm of 10.
    pub ln10: FixedDecimal,
    /// Base-2 logarithm of e.
    pub log2e: FixedDecimal,
    /// Base-10 logarithm of e.
    pub log10e: FixedDecimal,
    /// Ratio of a circle's circumference to its diameter.
    pub pi: FixedDecimal,
    /// `PI / 2`, derived from the truncated `PI`.
    pub frac_pi_2: FixedDecimal,
    /// `PI / 4`, derived from the truncated `PI`.
    pub frac_pi_4: FixedDecimal,
    /// `2 * PI`, derived from the truncated `PI`.
    pub tau: FixedDecimal,
    /// `sqrt(1/2)`.
    pub frac_1_sqrt_2: FixedDecimal,
    /// `sqrt(2)`.
    pub sqrt_2: FixedDecimal,
    /// Distance from `PI/2` below which `tan` switches to the complementary angle.
    pub(crate) tan_switch: FixedDecimal,
    /// Correction coefficient of the rational `atan` approximation.
    pub(crate) atan_k: FixedDecimal,
}

impl Constants {
    fn build() -> Self {
        let pi = truncated(core::f64::consts::PI);
        let frac_pi_2 = FixedDecimal::from_scaled(pi.scaled() >> 1_u32);
        let frac_pi_4 = FixedDecimal::from_scaled(pi.scaled() >> 2_u32);
        let tau = FixedDecimal::from_scaled(pi.scaled() << 1_u32);
        Self {
            zero: FixedDecimal::from_int(0),
            one: FixedDecimal::from_int(1),
            two: FixedDecimal::from_int(2),
            e: truncated(core::f64::consts::E),
            ln2: truncated(core::f64::consts::LN_2),
            ln10: truncated(core::f64::consts::LN_10),
            log2e: truncated(core::f64::consts::LOG2_E),
            log10e: truncated(core::f64::consts::LOG10_E),
            pi,
            frac_pi_2,
            frac_pi_4,
            tau,
            frac_1_sqrt_2: truncated(core::f64::consts::FRAC_1_SQRT_2),
            sqrt_2: truncated(core::f64::consts::SQRT_2),
            tan_switch: truncated(0.01),
            atan_k: truncated(0.273),
        }
    }

    /// Public constants as `(name, value)` pairs, in declaration order.
    pub fn table(&self) -> [(&'static str, &FixedDecimal); 14] {
        [
            ("ZERO", &self.zero),
            ("ONE", &self.one),
            ("TWO", &self.two),
            ("E", &self.e),
            ("LN2", &self.ln2),
            ("LN10", &self.ln10),
            ("LOG2E", &self.log2e),
            ("LOG10E", &self.log10e),
            ("PI", &self.pi),
            ("PI_2", &self.frac_pi_2),
            ("PI_4", &self.frac_pi_4),
            ("TAU", &self.tau),
            ("SQRT1_2", &self.frac_1_sqrt_2),
            ("SQRT2", &self.sqrt_2),
        ]
    }
}

// Every literal in the table is finite, so the conversion cannot fail.
fn truncated(value: f64) -> FixedDecimal {
    FixedDecimal::from_f64(value).unwrap_or_default()
}

/// Returns the process-wide constant table, building it on first use.
pub fn constants() -> &'static Constants {
    TABLE.get_or_init(Constants::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_matches_precision() {
        assert_eq!(SCALE, 10_000);
        assert_eq!(*scale(), BigInt::from(10_000));
    }

    #[test]
    fn constants_are_truncated_not_rounded() {
        let c = constants();
        assert_eq!(c.pi.to_string(), "3.1415");
        assert_eq!(c.e.to_string(), "2.7182");
        assert_eq!(c.ln2.to_string(), "0.6931");
        assert_eq!(c.ln10.to_string(), "2.3025");
        assert_eq!(c.log2e.to_string(), "1.4426");
        assert_eq!(c.log10e.to_string(), "0.4342");
        assert_eq!(c.frac_1_sqrt_2.to_string(), "0.7071");
        assert_eq!(c.sqrt_2.to_string(), "1.4142");
    }

    #[test]
    fn turn_fractions_derive_from_truncated_pi() {
        let c = constants();
        assert_eq!(c.frac_pi_2.to_string(), "1.5707");
        assert_eq!(c.frac_pi_4.to_string(), "0.7853");
        assert_eq!(c.tau.to_string(), "6.2830");
    }

    #[test]
    fn table_lists_every_public_constant_once() {
        let table = constants().table();
        let mut names: Vec<_> = table.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), table.len());
    }
}
