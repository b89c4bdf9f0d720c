// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lockstep-core: fixed-point decimal arithmetic that produces the same bits on
//! every platform.
//!
//! Values are [`FixedDecimal`]s: an arbitrary-precision integer scaled by
//! `10^DECIMALS`. Every operation, including the transcendental functions in
//! [`math`], is computed with integer arithmetic and truncation toward zero,
//! so results never depend on the host's floating-point unit.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod constants;
mod decimal;
mod error;
mod parse;
mod probe;

/// Deterministic transcendental functions (sin, ln, sqrt, ...).
pub mod math;

/// Precision parameters and the named constant table.
pub use constants::{constants, Constants, DECIMALS, SCALE};
/// The fixed-point value type.
pub use decimal::FixedDecimal;
/// Error types shared by parsing, conversion and math.
pub use error::{FixedError, FixedErrorKind};
/// Evaluator with an attachable probe.
pub use math::FixedMath;
/// Observability hooks for iterative evaluations.
pub use probe::{Evaluation, Probe, Silent, TracingProbe};
