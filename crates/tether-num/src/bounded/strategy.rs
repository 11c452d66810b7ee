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


//! # Bounding Strategies
//!
//! Zero-sized markers selecting which bounding function a [`Bounded`] value
//! re-applies after construction and after every arithmetic result, plus the
//! runtime tag [`BoundKind`] naming all four strategies.
//!
//! [`Bounded`]: crate::bounded::Bounded

use std::fmt::Debug;
use tether_core::{
    error::{ConstraintError, widen},
    math::{
        bound::{bounce, cyclic_wrap},
        range::ClosedRange,
    },
    num::SignedInteger,
};

/// Names a bounding strategy at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    /// Saturate at the nearest bound.
    Clamp,
    /// Wrap around as if `[min, max]` were a ring.
    CyclicWrap,
    /// Reflect off both bounds.
    Bounce,
    /// Residue arithmetic modulo `max - min + 1`, with `min == 0`.
    Modulo,
}

/// A bounding function applied to every raw result of a [`Bounded`] value.
///
/// [`Bounded`]: crate::bounded::Bounded
pub trait BoundingStrategy: Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static {
    /// The runtime tag of this strategy.
    const KIND: BoundKind;

    /// Checks that `[min, max]` is a range this strategy can bound into.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidRange`] if `min > max`.
    fn validate<T>(min: T, max: T) -> Result<ClosedRange<T>, ConstraintError>
    where
        T: SignedInteger,
    {
        ClosedRange::try_new(min, max).ok_or_else(|| invalid_range(min, max))
    }

    /// Folds a raw value into a previously validated range.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying bounding function. For a range
    /// accepted by [`validate`](Self::validate) there is none.
    fn apply<T>(value: T, range: ClosedRange<T>) -> Result<T, ConstraintError>
    where
        T: SignedInteger;
}

/// Saturating strategy: out-of-range values stick to the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Clamp;

impl BoundingStrategy for Clamp {
    const KIND: BoundKind = BoundKind::Clamp;

    #[inline]
    fn apply<T>(value: T, range: ClosedRange<T>) -> Result<T, ConstraintError>
    where
        T: SignedInteger,
    {
        Ok(range.clamp(value))
    }
}

/// Ring strategy: `max + 1` wraps to `min` and `min - 1` wraps to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CyclicWrap;

impl BoundingStrategy for CyclicWrap {
    const KIND: BoundKind = BoundKind::CyclicWrap;

    #[inline]
    fn apply<T>(value: T, range: ClosedRange<T>) -> Result<T, ConstraintError>
    where
        T: SignedInteger,
    {
        cyclic_wrap(value, range.min(), range.max())
    }
}

/// Reflecting strategy: `max + 1` bounces back to `max - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounce;

impl BoundingStrategy for Bounce {
    const KIND: BoundKind = BoundKind::Bounce;

    /// Bouncing needs two distinct walls.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidRange`] if `min >= max`.
    fn validate<T>(min: T, max: T) -> Result<ClosedRange<T>, ConstraintError>
    where
        T: SignedInteger,
    {
        match ClosedRange::try_new(min, max) {
            Some(range) if !range.is_point() => Ok(range),
            _ => Err(invalid_range(min, max)),
        }
    }

    #[inline]
    fn apply<T>(value: T, range: ClosedRange<T>) -> Result<T, ConstraintError>
    where
        T: SignedInteger,
    {
        bounce(value, range.min(), range.max())
    }
}

#[inline]
fn invalid_range<T>(min: T, max: T) -> ConstraintError
where
    T: SignedInteger,
{
    ConstraintError::InvalidRange {
        min: widen(min),
        max: widen(max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Clamp::KIND, BoundKind::Clamp);
        assert_eq!(CyclicWrap::KIND, BoundKind::CyclicWrap);
        assert_eq!(Bounce::KIND, BoundKind::Bounce);
    }

    #[test]
    fn test_validate_zero_width() {
        assert!(Clamp::validate(3, 3).is_ok());
        assert!(CyclicWrap::validate(3, 3).is_ok());
        assert_eq!(
            Bounce::validate(3, 3),
            Err(ConstraintError::InvalidRange { min: 3, max: 3 })
        );
    }

    #[test]
    fn test_validate_inverted() {
        let expected = Err(ConstraintError::InvalidRange { min: 10, max: 0 });
        assert_eq!(Clamp::validate(10, 0), expected);
        assert_eq!(CyclicWrap::validate(10, 0), expected);
        assert_eq!(Bounce::validate(10, 0), expected);
    }

    #[test]
    fn test_apply_scenario() {
        let range = ClosedRange::new(0, 10);
        assert_eq!(Clamp::apply(15, range), Ok(10));
        assert_eq!(CyclicWrap::apply(15, range), Ok(4));
        assert_eq!(Bounce::apply(15, range), Ok(5));
    }
}
