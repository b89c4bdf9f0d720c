// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use lockstep_core::{math, FixedDecimal, FixedError, FixedErrorKind};

fn fx(text: &str) -> FixedDecimal {
    text.parse().expect("valid literal")
}

fn ok(result: Result<FixedDecimal, FixedError>) -> String {
    result.expect("evaluation succeeds").to_string()
}

fn kind<T: std::fmt::Debug>(result: Result<T, FixedError>) -> FixedErrorKind {
    result.expect_err("evaluation fails").kind()
}

#[test]
fn arithmetic_scenarios() {
    assert_eq!((fx("0.2") + fx("-0.2")).to_string(), "0.0000");
    assert!((fx("0.2") + fx("-0.2")).is_zero());
    assert_eq!(ok(fx("2.3333").checked_div(&fx("0.4"))), "5.8332");
    assert_eq!(ok(fx("2.3333").checked_div(&fx("-0.04"))), "-58.3325");
    assert_eq!(kind(fx("1").checked_div(&fx("0"))), FixedErrorKind::DivideByZero);
}

#[test]
fn trigonometric_scenarios() {
    assert_eq!(math::sin(&fx("-1.2")).to_string(), "-0.9320");
    assert_eq!(math::cos(&fx("-1.2")).to_string(), "0.3624");
    assert_eq!(ok(math::tan(&fx("1.2"))), "2.5717");
    assert_eq!(math::atan(&fx("1.2")).to_string(), "0.8785");
    assert_eq!(math::atan2(&fx("1.2"), &fx("1")).to_string(), "0.8785");
}

#[test]
fn logarithmic_and_root_scenarios() {
    assert_eq!(ok(math::ln(&fx("1.2"))), "0.1822");
    assert_eq!(math::exp(&fx("-1.2")).to_string(), "0.3012");
    assert_eq!(ok(math::sqrt(&fx("3.3"))), "1.8165");
}

#[test]
fn extremum_scenarios() {
    let values = [fx("-1.2"), fx("2"), fx("1")];
    assert_eq!(ok(math::max(&values)), "2.0000");
    assert_eq!(ok(math::min(&values)), "-1.2000");
    assert_eq!(kind(math::max(&[])), FixedErrorKind::InvalidArgument);
}

#[test]
fn domain_failures() {
    assert_eq!(kind(math::ln(&fx("0"))), FixedErrorKind::Domain);
    assert_eq!(kind(math::ln(&fx("-3"))), FixedErrorKind::Domain);
    assert_eq!(kind(math::sqrt(&fx("-0.0001"))), FixedErrorKind::Domain);
    assert_eq!(kind(math::asin(&fx("1.0001"))), FixedErrorKind::Domain);
}

#[test]
fn error_messages_name_the_function_and_input() {
    let err = math::sqrt(&fx("-2")).expect_err("negative sqrt");
    assert_eq!(err.to_string(), "sqrt is undefined for -2.0000");
}

#[test]
fn constructors_agree() {
    let from_text = fx("1.25");
    let from_float = FixedDecimal::try_from(1.25_f64).expect("finite");
    let from_scaled = FixedDecimal::from_scaled(12_500);
    assert_eq!(from_text, from_float);
    assert_eq!(from_text, from_scaled);
    assert_eq!(FixedDecimal::from(3_u8), FixedDecimal::from_int(3));
    assert_eq!(
        FixedDecimal::try_from(f64::NAN).map_err(|e| e.kind()),
        Err(FixedErrorKind::Conversion)
    );
}
