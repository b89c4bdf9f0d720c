// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Fixed-point geometry for lockstep simulations.

This crate provides:
- Vectors (`Vec2`, `Vec3`) with length, projection and angle helpers.
- Row-major square matrices (`Mat22`, `Mat33`) with products, determinants
  and inverses.

Design notes:
- Every component is a `lockstep_core::FixedDecimal`; no float ever enters a
  computation, so results are identical on every target.
- Values are immutable. Operations return new values and read both operands
  in full before building the result.
"]

mod mat22;
mod mat33;
mod vec2;
mod vec3;

pub use mat22::Mat22;
pub use mat33::Mat33;
pub use vec2::Vec2;
pub use vec3::Vec3;

use lockstep_core::{math, FixedDecimal};

/// `sqrt` of a value known to be non-negative (a sum of squares).
pub(crate) fn root_of_squares(sum: &FixedDecimal) -> FixedDecimal {
    // Truncated products of a value with itself are never negative.
    math::sqrt(sum).unwrap_or_default()
}
