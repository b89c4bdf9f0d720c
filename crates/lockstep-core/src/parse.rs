// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text to scaled-integer conversion.
//!
//! Parsing never goes through a float: the digit string is shifted by the
//! exponent and the precision exactly, and any remaining fractional digits
//! are dropped (truncation toward zero).

use num_bigint::BigInt;
use num_traits::{Num, Zero};

use crate::constants::{scale, DECIMALS};
use crate::error::FixedError;

/// Largest accepted decimal exponent magnitude. Anything beyond this would
/// allocate absurd integers for no representable benefit.
const MAX_EXPONENT: i64 = 4096;

/// Parses `text` into a scaled integer.
pub(crate) fn parse_scaled(text: &str) -> Result<BigInt, FixedError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FixedError::conversion(text, "empty input"));
    }

    let (negative, body) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let lowered = body.to_ascii_lowercase();
    if matches!(lowered.as_str(), "nan" | "inf" | "infinity") {
        return Err(FixedError::conversion(text, "non-finite value"));
    }

    let magnitude = match radix_of(&lowered) {
        Some(radix) => parse_radix(text, &lowered[2..], radix)?,
        None => parse_decimal(text, body)?,
    };

    Ok(if negative { -magnitude } else { magnitude })
}

fn radix_of(body: &str) -> Option<u32> {
    match body.get(..2) {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    }
}

fn parse_radix(text: &str, digits: &str, radix: u32) -> Result<BigInt, FixedError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(FixedError::conversion(text, "malformed radix integer"));
    }
    BigInt::from_str_radix(digits, radix)
        .map(|n| n * scale())
        .map_err(|_| FixedError::conversion(text, "malformed radix integer"))
}

fn parse_decimal(text: &str, body: &str) -> Result<BigInt, FixedError> {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], parse_exponent(text, &body[at + 1..])?),
        None => (body, 0),
    };

    let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
        return Err(FixedError::conversion(text, "malformed decimal"));
    }

    let mut digits = String::with_capacity(whole.len() + frac.len());
    digits.push_str(whole);
    digits.push_str(frac);
    let coefficient = BigInt::from_str_radix(&digits, 10)
        .map_err(|_| FixedError::conversion(text, "malformed decimal"))?;

    // value = coefficient * 10^(exponent - frac.len()); scaled = value * 10^DECIMALS
    let frac_len = i64::try_from(frac.len())
        .map_err(|_| FixedError::conversion(text, "too many fractional digits"))?;
    let shift = exponent + i64::from(DECIMALS) - frac_len;
    if shift >= 0 {
        Ok(coefficient * pow10(shift.unsigned_abs()))
    } else if shift.unsigned_abs() > digits.len() as u64 {
        Ok(BigInt::zero())
    } else {
        Ok(coefficient / pow10(shift.unsigned_abs()))
    }
}

fn parse_exponent(text: &str, raw: &str) -> Result<i64, FixedError> {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FixedError::conversion(text, "malformed exponent"));
    }
    match raw.parse::<i64>() {
        Ok(exp) if exp.abs() <= MAX_EXPONENT => Ok(exp),
        _ => Err(FixedError::conversion(text, "exponent out of range")),
    }
}

fn pow10(exp: u64) -> BigInt {
    num_traits::pow(BigInt::from(10), usize::try_from(exp).unwrap_or(usize::MAX))
}
