// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Name-based dispatch onto [`FixedMath`] and the decimal operators.

use std::fmt;

use clap::ValueEnum;
use lockstep_core::{FixedDecimal, FixedError, FixedMath, Probe};
use serde::Serialize;
use thiserror::Error;

/// Every function the `eval` subcommand understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Function {
    /// `-1` or `+1`.
    Sign,
    /// Absolute value.
    Abs,
    /// Sine (radians).
    Sin,
    /// Cosine (radians).
    Cos,
    /// Tangent (radians).
    Tan,
    /// Arc sine.
    Asin,
    /// Arc cosine.
    Acos,
    /// Arc tangent.
    Atan,
    /// Four-quadrant arc tangent of `y x`.
    Atan2,
    /// Natural logarithm.
    Ln,
    /// Base-2 logarithm.
    #[value(name = "log2")]
    Log2,
    /// Base-10 logarithm.
    #[value(name = "log10")]
    Log10,
    /// `e^x`.
    Exp,
    /// `x^y`.
    Pow,
    /// Square root.
    Sqrt,
    /// Largest argument.
    Max,
    /// Smallest argument.
    Min,
    /// `a + b`.
    Add,
    /// `a - b`.
    Sub,
    /// `a * b` (truncated).
    Mul,
    /// `a / b` (truncated).
    Div,
}

impl Function {
    /// Name as typed on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sign => "sign",
            Self::Abs => "abs",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Atan2 => "atan2",
            Self::Ln => "ln",
            Self::Log2 => "log2",
            Self::Log10 => "log10",
            Self::Exp => "exp",
            Self::Pow => "pow",
            Self::Sqrt => "sqrt",
            Self::Max => "max",
            Self::Min => "min",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    /// Human-readable argument count, used in arity errors.
    pub const fn arity(self) -> &'static str {
        match self {
            Self::Max | Self::Min => "at least 1 argument",
            Self::Atan2 | Self::Pow | Self::Add | Self::Sub | Self::Mul | Self::Div => {
                "2 arguments"
            }
            _ => "1 argument",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of an evaluation: a decimal, or the integer returned by `sign`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Decimal result.
    Decimal(FixedDecimal),
    /// Result of `sign`.
    Sign(i32),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(value) => fmt::Display::fmt(value, f),
            Self::Sign(sign) => fmt::Display::fmt(sign, f),
        }
    }
}

/// Failure of [`evaluate`].
#[derive(Debug, Error)]
pub enum EvalError {
    /// Wrong number of arguments.
    #[error("{function} expects {expected}, got {got}")]
    Arity {
        /// Function that was called.
        function: Function,
        /// Expected count, spelled out.
        expected: &'static str,
        /// Number of arguments supplied.
        got: usize,
    },
    /// The math layer rejected the arguments.
    #[error(transparent)]
    Math(#[from] FixedError),
}

/// Applies `function` to `args` using `math` (and therefore its probe).
pub fn evaluate<P: Probe>(
    math: &FixedMath<P>,
    function: Function,
    args: &[FixedDecimal],
) -> Result<Value, EvalError> {
    let value = match (function, args) {
        (Function::Sign, [x]) => return Ok(Value::Sign(math.sign(x))),
        (Function::Abs, [x]) => math.abs(x),
        (Function::Sin, [x]) => math.sin(x),
        (Function::Cos, [x]) => math.cos(x),
        (Function::Tan, [x]) => math.tan(x)?,
        (Function::Asin, [x]) => math.asin(x)?,
        (Function::Acos, [x]) => math.acos(x)?,
        (Function::Atan, [x]) => math.atan(x),
        (Function::Atan2, [y, x]) => math.atan2(y, x),
        (Function::Ln, [x]) => math.ln(x)?,
        (Function::Log2, [x]) => math.log2(x)?,
        (Function::Log10, [x]) => math.log10(x)?,
        (Function::Exp, [x]) => math.exp(x),
        (Function::Pow, [x, y]) => math.pow(x, y)?,
        (Function::Sqrt, [x]) => math.sqrt(x)?,
        (Function::Max, values) if !values.is_empty() => math.max(values)?,
        (Function::Min, values) if !values.is_empty() => math.min(values)?,
        (Function::Add, [a, b]) => a + b,
        (Function::Sub, [a, b]) => a - b,
        (Function::Mul, [a, b]) => a * b,
        (Function::Div, [a, b]) => a.checked_div(b)?,
        _ => {
            return Err(EvalError::Arity {
                function,
                expected: function.arity(),
                got: args.len(),
            })
        }
    };
    Ok(Value::Decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockstep_core::FixedErrorKind;

    fn args(texts: &[&str]) -> Vec<FixedDecimal> {
        texts.iter().filter_map(|t| t.parse().ok()).collect()
    }

    fn eval(function: Function, texts: &[&str]) -> Result<Value, EvalError> {
        evaluate(&FixedMath::new(), function, &args(texts))
    }

    fn text(function: Function, texts: &[&str]) -> String {
        eval(function, texts).map_or_else(|e| e.to_string(), |v| v.to_string())
    }

    #[test]
    fn dispatches_to_math_and_operators() {
        assert_eq!(text(Function::Sin, &["-1.2"]), "-0.9320");
        assert_eq!(text(Function::Atan2, &["1.2", "1"]), "0.8785");
        assert_eq!(text(Function::Div, &["2.3333", "0.4"]), "5.8332");
        assert_eq!(text(Function::Add, &["0.2", "-0.2"]), "0.0000");
        assert_eq!(text(Function::Max, &["-1.2", "2", "1"]), "2.0000");
        assert_eq!(text(Function::Min, &["-1.2", "2", "1"]), "-1.2000");
    }

    #[test]
    fn sign_is_an_integer() {
        assert_eq!(eval(Function::Sign, &["0"]).ok(), Some(Value::Sign(1)));
        assert_eq!(text(Function::Sign, &["-3"]), "-1");
    }

    #[test]
    fn wrong_arity_is_reported() {
        assert_eq!(text(Function::Sin, &[]), "sin expects 1 argument, got 0");
        assert_eq!(text(Function::Pow, &["1"]), "pow expects 2 arguments, got 1");
        assert_eq!(text(Function::Max, &[]), "max expects at least 1 argument, got 0");
    }

    #[test]
    fn math_errors_pass_through() {
        let kind = |r: Result<Value, EvalError>| match r {
            Err(EvalError::Math(e)) => Some(e.kind()),
            _ => None,
        };
        assert_eq!(kind(eval(Function::Div, &["1", "0"])), Some(FixedErrorKind::DivideByZero));
        assert_eq!(kind(eval(Function::Ln, &["0"])), Some(FixedErrorKind::Domain));
        assert_eq!(kind(eval(Function::Pow, &["-2", "0.5"])), Some(FixedErrorKind::InvalidArgument));
    }

    #[test]
    fn names_round_trip_through_clap() {
        for function in Function::value_variants() {
            let parsed = Function::from_str(function.name(), false).ok();
            assert_eq!(parsed, Some(*function));
        }
    }
}
