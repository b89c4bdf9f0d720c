// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Observability seam for the math layer.
//!
//! A [`Probe`] is handed to [`FixedMath`](crate::math::FixedMath) and sees one
//! [`Evaluation`] per iterative computation (series sums and Newton-Raphson
//! loops). Probes observe only; they cannot influence results.

use crate::FixedDecimal;

/// One completed iterative evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Evaluation<'a> {
    /// Function name (`"sin"`, `"ln"`, ...).
    pub function: &'static str,
    /// Argument as passed by the caller, before range reduction.
    pub input: &'a FixedDecimal,
    /// Returned value.
    pub output: &'a FixedDecimal,
    /// Number of series terms summed or Newton steps taken.
    pub iterations: u32,
}

/// Receiver of [`Evaluation`] records.
pub trait Probe {
    /// Called once per completed evaluation.
    fn record(&self, evaluation: &Evaluation<'_>);
}

/// Probe that discards every record.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Probe for Silent {
    #[inline]
    fn record(&self, _evaluation: &Evaluation<'_>) {}
}

/// Probe that forwards records to `tracing` at `DEBUG` on target
/// `lockstep::math`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProbe;

impl Probe for TracingProbe {
    fn record(&self, evaluation: &Evaluation<'_>) {
        tracing::debug!(
            target: "lockstep::math",
            function = evaluation.function,
            input = %evaluation.input,
            output = %evaluation.output,
            iterations = evaluation.iterations,
            "evaluated"
        );
    }
}

impl<F> Probe for F
where
    F: Fn(&Evaluation<'_>),
{
    fn record(&self, evaluation: &Evaluation<'_>) {
        self(evaluation);
    }
}
