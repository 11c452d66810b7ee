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


//! # Runtime-Selected Bounding
//!
//! `BoundedValue<T>` carries its strategy as data instead of as a type
//! parameter, for callers that pick the strategy at runtime. The clamp,
//! cyclic and bounce variants wrap the matching [`Bounded`] type; the modulo
//! variant delegates entirely to [`ModularInt`], with modulus
//! `max - min + 1` and the implicit range `[0, modulus - 1]`.
//!
//! ```rust
//! use tether_num::bounded::{BoundKind, bounded_int};
//!
//! let angle = bounded_int(370, 0, 359, BoundKind::Modulo).unwrap();
//! assert_eq!(angle, 10);
//! assert_eq!(angle - 20, 350);
//! ```

use crate::{
    arith::unwrap_arith,
    bounded::{
        int::{BouncedInt, ClampedInt, CyclicInt},
        strategy::BoundKind,
    },
    modular::ModularInt,
};
use std::ops::{Add, Mul, Sub};
use tether_core::{
    error::{ConstraintError, widen},
    math::range::ClosedRange,
    num::SignedInteger,
};

/// A bounded integer whose strategy is chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundedValue<T = i64>
where
    T: SignedInteger,
{
    /// Saturates at its bounds.
    Clamped(ClampedInt<T>),
    /// Wraps around its bounds.
    Cyclic(CyclicInt<T>),
    /// Reflects off its bounds.
    Bounced(BouncedInt<T>),
    /// Residue modulo `max - min + 1`.
    Modulo(ModularInt<T>),
}

impl<T> BoundedValue<T>
where
    T: SignedInteger,
{
    /// Creates a bounded value with the strategy named by `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidRange`] if the strategy rejects
    /// `[min, max]`; for [`BoundKind::Modulo`] this includes any `min != 0`.
    /// Returns [`ConstraintError::Overflow`] for a modulo range ending at
    /// `T::MAX`, whose modulus `max + 1` does not fit in `T`.
    pub fn new(value: T, min: T, max: T, kind: BoundKind) -> Result<Self, ConstraintError> {
        match kind {
            BoundKind::Clamp => ClampedInt::new(value, min, max).map(Self::Clamped),
            BoundKind::CyclicWrap => CyclicInt::new(value, min, max).map(Self::Cyclic),
            BoundKind::Bounce => BouncedInt::new(value, min, max).map(Self::Bounced),
            BoundKind::Modulo => {
                if min != T::zero() || max < min {
                    return Err(ConstraintError::InvalidRange {
                        min: widen(min),
                        max: widen(max),
                    });
                }
                let modulus = max
                    .checked_add(&T::one())
                    .ok_or(ConstraintError::Overflow)?;
                ModularInt::new(value, modulus).map(Self::Modulo)
            }
        }
    }

    /// Returns the bounded value.
    #[inline]
    pub fn get(&self) -> T {
        match self {
            Self::Clamped(v) => v.get(),
            Self::Cyclic(v) => v.get(),
            Self::Bounced(v) => v.get(),
            Self::Modulo(v) => v.residue(),
        }
    }

    /// Returns the strategy tag.
    #[inline]
    pub fn kind(&self) -> BoundKind {
        match self {
            Self::Clamped(v) => v.kind(),
            Self::Cyclic(v) => v.kind(),
            Self::Bounced(v) => v.kind(),
            Self::Modulo(_) => BoundKind::Modulo,
        }
    }

    /// Returns the range the value is confined to; `[0, modulus - 1]` for
    /// the modulo strategy.
    #[inline]
    pub fn range(&self) -> ClosedRange<T> {
        match self {
            Self::Clamped(v) => v.range(),
            Self::Cyclic(v) => v.range(),
            Self::Bounced(v) => v.range(),
            Self::Modulo(v) => ClosedRange::new(T::zero(), v.modulus() - T::one()),
        }
    }

    /// Adds `rhs` and re-applies the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Overflow`] if a non-modulo raw sum does not
    /// fit in `T`.
    pub fn try_add(self, rhs: T) -> Result<Self, ConstraintError> {
        match self {
            Self::Clamped(v) => v.try_add(rhs).map(Self::Clamped),
            Self::Cyclic(v) => v.try_add(rhs).map(Self::Cyclic),
            Self::Bounced(v) => v.try_add(rhs).map(Self::Bounced),
            Self::Modulo(v) => v.try_add(rhs).map(Self::Modulo),
        }
    }

    /// Subtracts `rhs` and re-applies the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Overflow`] if a non-modulo raw difference
    /// does not fit in `T`.
    pub fn try_sub(self, rhs: T) -> Result<Self, ConstraintError> {
        match self {
            Self::Clamped(v) => v.try_sub(rhs).map(Self::Clamped),
            Self::Cyclic(v) => v.try_sub(rhs).map(Self::Cyclic),
            Self::Bounced(v) => v.try_sub(rhs).map(Self::Bounced),
            Self::Modulo(v) => v.try_sub(rhs).map(Self::Modulo),
        }
    }

    /// Multiplies by `rhs` and re-applies the strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Overflow`] if a non-modulo raw product does
    /// not fit in `T`.
    pub fn try_mul(self, rhs: T) -> Result<Self, ConstraintError> {
        match self {
            Self::Clamped(v) => v.try_mul(rhs).map(Self::Clamped),
            Self::Cyclic(v) => v.try_mul(rhs).map(Self::Cyclic),
            Self::Bounced(v) => v.try_mul(rhs).map(Self::Bounced),
            Self::Modulo(v) => v.try_mul(rhs).map(Self::Modulo),
        }
    }
}

/// Creates a [`BoundedValue`]; see [`BoundedValue::new`].
///
/// # Errors
///
/// See [`BoundedValue::new`].
///
/// # Examples
///
/// ```rust
/// # use tether_num::bounded::{BoundKind, bounded_int};
///
/// assert_eq!(bounded_int(15, 0, 10, BoundKind::Clamp).unwrap(), 10);
/// assert_eq!(bounded_int(15, 0, 10, BoundKind::CyclicWrap).unwrap(), 4);
/// assert_eq!(bounded_int(15, 0, 10, BoundKind::Bounce).unwrap(), 5);
/// assert_eq!(bounded_int(15, 0, 10, BoundKind::Modulo).unwrap(), 4);
/// ```
pub fn bounded_int<T>(value: T, min: T, max: T, kind: BoundKind) -> Result<BoundedValue<T>, ConstraintError>
where
    T: SignedInteger,
{
    BoundedValue::new(value, min, max, kind)
}

macro_rules! impl_bounded_value_op {
    ($trait_name:ident, $method:ident, $try_method:ident) => {
        impl<T> $trait_name<T> for BoundedValue<T>
        where
            T: SignedInteger,
        {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                unwrap_arith(self.$try_method(rhs), "BoundedValue")
            }
        }
    };
}

impl_bounded_value_op!(Add, add, try_add);
impl_bounded_value_op!(Sub, sub, try_sub);
impl_bounded_value_op!(Mul, mul, try_mul);

macro_rules! impl_bounded_value_radd_for {
    ($t:ty) => {
        impl Add<BoundedValue<$t>> for $t {
            type Output = BoundedValue<$t>;

            #[track_caller]
            #[inline]
            fn add(self, rhs: BoundedValue<$t>) -> Self::Output {
                rhs + self
            }
        }
    };
}

impl_bounded_value_radd_for!(i8);
impl_bounded_value_radd_for!(i16);
impl_bounded_value_radd_for!(i32);
impl_bounded_value_radd_for!(i64);
impl_bounded_value_radd_for!(i128);
impl_bounded_value_radd_for!(isize);

impl<T> PartialEq<T> for BoundedValue<T>
where
    T: SignedInteger,
{
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T> PartialOrd<T> for BoundedValue<T>
where
    T: SignedInteger,
{
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
        self.get().partial_cmp(other)
    }
}

impl<T> std::fmt::Display for BoundedValue<T>
where
    T: SignedInteger,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Modulo(v) => std::fmt::Display::fmt(v, f),
            other => std::fmt::Display::fmt(&other.get(), f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_round_trip() {
        for kind in [
            BoundKind::Clamp,
            BoundKind::CyclicWrap,
            BoundKind::Bounce,
            BoundKind::Modulo,
        ] {
            assert_eq!(bounded_int(3, 0, 10, kind).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_modulo_uses_implicit_range() {
        let v = bounded_int(-1, 0, 9, BoundKind::Modulo).unwrap();
        assert_eq!(v, 9);
        assert_eq!(v.range(), ClosedRange::new(0, 9));
        assert_eq!(v.to_string(), "9 mod 10");
        assert!(matches!(v, BoundedValue::Modulo(m) if m.modulus() == 10));
    }

    #[test]
    fn test_modulo_rejects_offset_range() {
        assert_eq!(
            bounded_int(5, 1, 9, BoundKind::Modulo),
            Err(ConstraintError::InvalidRange { min: 1, max: 9 })
        );
        assert_eq!(
            bounded_int(5, 0, -1, BoundKind::Modulo),
            Err(ConstraintError::InvalidRange { min: 0, max: -1 })
        );
    }

    #[test]
    fn test_right_add_matches_add_for_every_kind() {
        for kind in [
            BoundKind::Clamp,
            BoundKind::CyclicWrap,
            BoundKind::Bounce,
            BoundKind::Modulo,
        ] {
            let v = bounded_int(7i64, 0, 10, kind).unwrap();
            assert_eq!(5 + v, v + 5, "{kind:?}");
            assert_eq!((5 + v).kind(), kind);
        }
        assert_eq!(5 + bounded_int(7i32, 0, 10, BoundKind::Modulo).unwrap(), 1);
        assert_eq!(5 + bounded_int(7i8, 0, 10, BoundKind::Bounce).unwrap(), 8);
    }

    #[test]
    fn test_ordering_against_plain_integers() {
        let v = bounded_int(15, 0, 10, BoundKind::CyclicWrap).unwrap();
        assert!(v < 5);
        assert!(v > 3);
        assert!(v >= 4);
        let m = bounded_int(-1, 0, 9, BoundKind::Modulo).unwrap();
        assert!(m > 8);
        assert!(m <= 9);
    }

    #[test]
    fn test_wide_ranges_are_accepted() {
        assert_eq!(
            bounded_int(1i32, -2_000_000_000, 2_000_000_000, BoundKind::Bounce),
            Ok(BoundedValue::Bounced(
                BouncedInt::new(1, -2_000_000_000, 2_000_000_000).unwrap()
            ))
        );
        assert_eq!(bounded_int(5i64, i64::MIN, i64::MAX, BoundKind::CyclicWrap).unwrap(), 5);
        assert_eq!(bounded_int(5i64, 0, i64::MAX, BoundKind::Bounce).unwrap(), 5);
        assert_eq!(
            bounded_int(5i64, 0, i64::MAX, BoundKind::Modulo),
            Err(ConstraintError::Overflow)
        );
    }

    #[test]
    fn test_bounce_zero_width_rejected() {
        assert_eq!(
            bounded_int(5, 4, 4, BoundKind::Bounce),
            Err(ConstraintError::InvalidRange { min: 4, max: 4 })
        );
    }

    #[test]
    fn test_arithmetic_keeps_strategy_and_range() {
        let c = bounded_int(7, 0, 10, BoundKind::Clamp).unwrap();
        let w = bounded_int(7, 0, 10, BoundKind::CyclicWrap).unwrap();
        let b = bounded_int(7, 0, 10, BoundKind::Bounce).unwrap();
        let m = bounded_int(7, 0, 10, BoundKind::Modulo).unwrap();

        assert_eq!(c + 5, 10);
        assert_eq!(w + 5, 1);
        assert_eq!(b + 5, 8);
        assert_eq!(m + 5, 1);

        assert_eq!(c - 8, 0);
        assert_eq!(w - 8, 10);
        assert_eq!(b - 8, 1);
        assert_eq!(m - 8, 10);

        assert_eq!(c * 3, 10);
        assert_eq!(w * 3, 10);
        assert_eq!(b * 3, 1);
        assert_eq!(m * 3, 10);

        for v in [c + 5, w + 5, b + 5, m + 5] {
            assert_eq!(v.range(), ClosedRange::new(0, 10));
        }
        assert_eq!((b * 3).kind(), BoundKind::Bounce);
    }

    #[test]
    fn test_display() {
        assert_eq!(bounded_int(15, 0, 10, BoundKind::Clamp).unwrap().to_string(), "10");
    }
}
