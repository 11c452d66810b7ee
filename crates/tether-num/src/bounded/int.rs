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


//! # Bounded Integers
//!
//! `Bounded<T, S>` is an integer that never leaves its range. The strategy
//! `S` is applied to the raw value on construction and again to the raw
//! result of every `+`, `-` and `*`, so an intermediate that escapes the
//! range is never observable.
//!
//! ```rust
//! use tether_num::bounded::{BouncedInt, ClampedInt, CyclicInt};
//!
//! assert_eq!(ClampedInt::new(15, 0, 10).unwrap(), 10);
//! assert_eq!(CyclicInt::new(15, 0, 10).unwrap(), 4);
//! assert_eq!(BouncedInt::new(15, 0, 10).unwrap(), 5);
//!
//! let degrees = CyclicInt::new(350, 0, 359).unwrap();
//! assert_eq!(degrees + 20, 10);
//! ```

use crate::{
    arith::unwrap_arith,
    bounded::strategy::{BoundKind, Bounce, BoundingStrategy, Clamp, CyclicWrap},
};
use std::{
    marker::PhantomData,
    ops::{Add, Mul, Sub},
};
use tether_core::{error::ConstraintError, math::range::ClosedRange, num::SignedInteger};

/// An integer kept inside a fixed `[min, max]` range by the strategy `S`.
///
/// # Invariants
/// `range.min() <= value <= range.max()`. The range and strategy never change;
/// every operation yields a new value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounded<T = i64, S = Clamp>
where
    T: SignedInteger,
    S: BoundingStrategy,
{
    value: T,
    range: ClosedRange<T>,
    strategy: PhantomData<S>,
}

/// A bounded integer that saturates at its bounds.
pub type ClampedInt<T = i64> = Bounded<T, Clamp>;

/// A bounded integer that wraps around its bounds.
pub type CyclicInt<T = i64> = Bounded<T, CyclicWrap>;

/// A bounded integer that reflects off its bounds.
pub type BouncedInt<T = i64> = Bounded<T, Bounce>;

impl<T, S> Bounded<T, S>
where
    T: SignedInteger,
    S: BoundingStrategy,
{
    /// Creates a bounded value by applying `S` to `value` over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidRange`] if the strategy rejects the
    /// range (`min > max`, or `min >= max` for bouncing). Every other range
    /// is accepted, up to `[T::MIN, T::MAX]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::bounded::{BouncedInt, ClampedInt};
    ///
    /// let c = ClampedInt::new(-4, 0, 10).unwrap();
    /// assert_eq!(c.get(), 0);
    /// assert!(BouncedInt::new(1, 5, 5).is_err());
    /// ```
    pub fn new(value: T, min: T, max: T) -> Result<Self, ConstraintError> {
        let range = S::validate(min, max)?;
        Self::bound(value, range)
    }

    /// Creates a bounded value over an existing [`ClosedRange`].
    ///
    /// # Errors
    ///
    /// See [`Bounded::new`].
    pub fn with_range(value: T, range: ClosedRange<T>) -> Result<Self, ConstraintError> {
        Self::new(value, range.min(), range.max())
    }

    #[inline]
    fn bound(value: T, range: ClosedRange<T>) -> Result<Self, ConstraintError> {
        let value = S::apply(value, range)?;
        debug_assert!(range.contains_point(value));
        Ok(Self {
            value,
            range,
            strategy: PhantomData,
        })
    }

    /// Returns the bounded value.
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn min(&self) -> T {
        self.range.min()
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn max(&self) -> T {
        self.range.max()
    }

    /// Returns the range this value is confined to.
    #[inline]
    pub fn range(&self) -> ClosedRange<T> {
        self.range
    }

    /// Returns the runtime tag of the strategy.
    #[inline]
    pub fn kind(&self) -> BoundKind {
        S::KIND
    }

    /// Adds `rhs` to the raw value and bounds the sum.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Overflow`] if the raw sum does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::bounded::BouncedInt;
    ///
    /// let b = BouncedInt::new(8, 0, 10).unwrap();
    /// assert_eq!(b.try_add(5).unwrap(), 7);
    /// ```
    pub fn try_add(self, rhs: T) -> Result<Self, ConstraintError> {
        let raw = self.value.checked_add(&rhs).ok_or(ConstraintError::Overflow)?;
        Self::bound(raw, self.range)
    }

    /// Subtracts `rhs` from the raw value and bounds the difference.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Overflow`] if the raw difference does not
    /// fit in `T`.
    pub fn try_sub(self, rhs: T) -> Result<Self, ConstraintError> {
        let raw = self.value.checked_sub(&rhs).ok_or(ConstraintError::Overflow)?;
        Self::bound(raw, self.range)
    }

    /// Multiplies the raw value by `rhs` and bounds the product.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Overflow`] if the raw product does not fit
    /// in `T`.
    pub fn try_mul(self, rhs: T) -> Result<Self, ConstraintError> {
        let raw = self.value.checked_mul(&rhs).ok_or(ConstraintError::Overflow)?;
        Self::bound(raw, self.range)
    }
}

macro_rules! impl_bounded_op {
    ($trait_name:ident, $method:ident, $try_method:ident) => {
        impl<T, S> $trait_name<T> for Bounded<T, S>
        where
            T: SignedInteger,
            S: BoundingStrategy,
        {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                unwrap_arith(self.$try_method(rhs), "Bounded")
            }
        }

        impl<T, S, R> $trait_name<Bounded<T, R>> for Bounded<T, S>
        where
            T: SignedInteger,
            S: BoundingStrategy,
            R: BoundingStrategy,
        {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: Bounded<T, R>) -> Self::Output {
                unwrap_arith(self.$try_method(rhs.get()), "Bounded")
            }
        }
    };
}

impl_bounded_op!(Add, add, try_add);
impl_bounded_op!(Sub, sub, try_sub);
impl_bounded_op!(Mul, mul, try_mul);

macro_rules! impl_bounded_radd_for {
    ($t:ty) => {
        impl<S> Add<Bounded<$t, S>> for $t
        where
            S: BoundingStrategy,
        {
            type Output = Bounded<$t, S>;

            #[track_caller]
            #[inline]
            fn add(self, rhs: Bounded<$t, S>) -> Self::Output {
                rhs + self
            }
        }
    };
}

impl_bounded_radd_for!(i8);
impl_bounded_radd_for!(i16);
impl_bounded_radd_for!(i32);
impl_bounded_radd_for!(i64);
impl_bounded_radd_for!(i128);
impl_bounded_radd_for!(isize);

impl<T, S> PartialEq<T> for Bounded<T, S>
where
    T: SignedInteger,
    S: BoundingStrategy,
{
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T, S> PartialOrd<T> for Bounded<T, S>
where
    T: SignedInteger,
    S: BoundingStrategy,
{
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<T, S> std::fmt::Debug for Bounded<T, S>
where
    T: SignedInteger,
    S: BoundingStrategy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bounded<{:?}>({} in {})", S::KIND, self.value, self.range)
    }
}

impl<T, S> std::fmt::Display for Bounded<T, S>
where
    T: SignedInteger,
    S: BoundingStrategy,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}
