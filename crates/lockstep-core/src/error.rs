// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy shared by construction, arithmetic and the math layer.

use thiserror::Error;

use crate::FixedDecimal;

/// Failure raised by a fixed-point operation.
///
/// Every failure is immediate: nothing is retried and no partial result is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedError {
    /// Input could not be represented (non-finite float, malformed text).
    #[error("cannot convert {input:?} to a fixed decimal: {reason}")]
    Conversion {
        /// The offending input, rendered as text.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },
    /// A divisor's scaled integer was zero.
    #[error("division by zero")]
    DivideByZero,
    /// Argument lies outside the function's mathematical domain.
    #[error("{function} is undefined for {input}")]
    Domain {
        /// Name of the rejecting function.
        function: &'static str,
        /// The rejected argument.
        input: FixedDecimal,
    },
    /// Argument combination the function does not accept.
    #[error("invalid argument to {function}: {reason}")]
    InvalidArgument {
        /// Name of the rejecting function.
        function: &'static str,
        /// Why the arguments were rejected.
        reason: &'static str,
    },
}

/// Discriminant of [`FixedError`] for branching without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedErrorKind {
    /// See [`FixedError::Conversion`].
    Conversion,
    /// See [`FixedError::DivideByZero`].
    DivideByZero,
    /// See [`FixedError::Domain`].
    Domain,
    /// See [`FixedError::InvalidArgument`].
    InvalidArgument,
}

impl FixedError {
    /// Returns the error's kind.
    pub fn kind(&self) -> FixedErrorKind {
        match self {
            Self::Conversion { .. } => FixedErrorKind::Conversion,
            Self::DivideByZero => FixedErrorKind::DivideByZero,
            Self::Domain { .. } => FixedErrorKind::Domain,
            Self::InvalidArgument { .. } => FixedErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn conversion(input: impl Into<String>, reason: &'static str) -> Self {
        Self::Conversion {
            input: input.into(),
            reason,
        }
    }

    pub(crate) fn domain(function: &'static str, input: &FixedDecimal) -> Self {
        Self::Domain {
            function,
            input: input.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_function_and_input() {
        let err = FixedError::domain("ln", &FixedDecimal::from_int(-2));
        assert_eq!(err.to_string(), "ln is undefined for -2.0000");
        assert_eq!(err.kind(), FixedErrorKind::Domain);
    }

    #[test]
    fn conversion_message_quotes_input() {
        let err = FixedError::conversion("NaN", "non-finite value");
        assert_eq!(
            err.to_string(),
            "cannot convert \"NaN\" to a fixed decimal: non-finite value"
        );
        assert_eq!(err.kind(), FixedErrorKind::Conversion);
    }
}
