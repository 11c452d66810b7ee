// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.


//! # Constraint Errors
//!
//! The single error type shared by every self-constraining value in the
//! workspace. Numeric payloads are widened to `i128` so the error stays
//! independent of the integer width a value was built with.

use num_traits::ToPrimitive;
use thiserror::Error;

/// The error type for constructing or combining constrained values.
///
/// Every variant describes a caller-correctable usage error. A failed
/// construction or operation never yields a partially valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConstraintError {
    /// The range `[min, max]` is empty or degenerate for the requested strategy.
    #[error("invalid range [{min}, {max}]")]
    InvalidRange {
        /// The requested lower bound.
        min: i128,
        /// The requested upper bound.
        max: i128,
    },
    /// The modulus of a modular value is not strictly positive.
    #[error("modulus must be a positive integer, got {modulus}")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: i128,
    },
    /// Two modular values with different moduli were combined.
    #[error("cannot combine values with different moduli ({lhs} vs {rhs})")]
    ModulusMismatch {
        /// The modulus of the left-hand operand.
        lhs: i128,
        /// The modulus of the right-hand operand.
        rhs: i128,
    },
    /// A multiplicative inverse was requested for a residue that shares a
    /// factor with its modulus.
    #[error("{residue} has no multiplicative inverse modulo {modulus}")]
    NotInvertible {
        /// The residue without an inverse.
        residue: i128,
        /// The modulus it was taken against.
        modulus: i128,
    },
    /// The step magnitude of a modular range is not strictly positive.
    #[error("step must be positive, got {step}")]
    InvalidStep {
        /// The rejected step.
        step: i128,
    },
    /// An explicit iteration cap of zero was requested.
    #[error("iteration cap must be positive")]
    InvalidAmount,
    /// Operations were combined in an unsupported way.
    #[error("unsupported usage: {0}")]
    UsageError(&'static str),
    /// A floating-point operand or result was not a number.
    #[error("operand is not a number")]
    InvalidOperand,
    /// A floor division or modulo was attempted with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// The raw arithmetic result left the representable range of the
    /// underlying integer before it could be bounded.
    #[error("arithmetic overflow before bounding")]
    Overflow,
}

/// Widens a primitive integer into the `i128` payload used by [`ConstraintError`].
///
/// Values that do not fit (only possible for `u128` above `i128::MAX`) saturate.
#[inline]
pub fn widen<T>(value: T) -> i128
where
    T: ToPrimitive,
{
    value.to_i128().unwrap_or(i128::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConstraintError::InvalidRange { min: 5, max: 5 }.to_string(),
            "invalid range [5, 5]"
        );
        assert_eq!(
            ConstraintError::ModulusMismatch { lhs: 10, rhs: 7 }.to_string(),
            "cannot combine values with different moduli (10 vs 7)"
        );
        assert_eq!(
            ConstraintError::NotInvertible {
                residue: 4,
                modulus: 8
            }
            .to_string(),
            "4 has no multiplicative inverse modulo 8"
        );
        assert_eq!(
            ConstraintError::UsageError("external modulus").to_string(),
            "unsupported usage: external modulus"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ConstraintError::InvalidAmount);
        assert_eq!(err.to_string(), "iteration cap must be positive");
    }

    #[test]
    fn test_widen() {
        assert_eq!(widen(-5i8), -5);
        assert_eq!(widen(i64::MIN), i64::MIN as i128);
        assert_eq!(widen(u128::MAX), i128::MAX);
    }
}
