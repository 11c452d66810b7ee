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


//! # Unit-Interval Floats
//!
//! `UnitFloat<F>` is clamped into `[0, 1]` once, at construction. Arithmetic
//! on it is plain float arithmetic and returns `F`, so a derived result may
//! leave the interval; use [`EnforcedUnitFloat`] when every result must stay
//! inside it.
//!
//! ```rust
//! use tether_num::unit::UnitFloat;
//!
//! let level = UnitFloat::new(1.3).unwrap();
//! assert_eq!(level.get(), 1.0);
//!
//! let boosted: f64 = level + 0.5;
//! assert_eq!(boosted, 1.5);
//! ```
//!
//! [`EnforcedUnitFloat`]: crate::unit::EnforcedUnitFloat

use crate::unit::enforced::EnforcedUnitFloat;
use num_traits::Float;
use std::ops::{Add, Div, Mul, Sub};
use tether_core::{error::ConstraintError, math::bound::clamp01};

/// A float clamped into `[0, 1]` at construction.
///
/// # Invariants
/// `0 <= value <= 1` and `value` is not NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct UnitFloat<F = f64>(F)
where
    F: Float;

/// A float-like operand of unit-interval arithmetic.
pub trait UnitOperand<F>
where
    F: Float,
{
    /// Returns the raw float this operand contributes.
    fn to_float(self) -> F;
}

impl<F> UnitOperand<F> for F
where
    F: Float,
{
    #[inline]
    fn to_float(self) -> F {
        self
    }
}

impl<F> UnitOperand<F> for UnitFloat<F>
where
    F: Float,
{
    #[inline]
    fn to_float(self) -> F {
        self.0
    }
}

/// Clamps a raw float into `[0, 1]`, rejecting NaN.
#[inline]
pub(crate) fn clamp_unit<F>(value: F) -> Result<F, ConstraintError>
where
    F: Float,
{
    if value.is_nan() {
        return Err(ConstraintError::InvalidOperand);
    }
    Ok(clamp01(value))
}

impl<F> UnitFloat<F>
where
    F: Float,
{
    /// Creates a unit float, clamping `value` into `[0, 1]`.
    ///
    /// Infinities clamp to the nearest bound.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if `value` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::unit::UnitFloat;
    ///
    /// assert_eq!(UnitFloat::new(0.25).unwrap().get(), 0.25);
    /// assert_eq!(UnitFloat::new(-3.0).unwrap().get(), 0.0);
    /// assert!(UnitFloat::new(f64::NAN).is_err());
    /// ```
    #[inline]
    pub fn new(value: F) -> Result<Self, ConstraintError> {
        clamp_unit(value).map(Self)
    }

    /// Wraps a value already known to lie in `[0, 1]`.
    #[inline]
    pub(crate) fn from_unit(value: F) -> Self {
        debug_assert!(F::zero() <= value && value <= F::one());
        Self(value)
    }

    /// The lower bound, `0`.
    #[inline]
    pub fn zero() -> Self {
        Self(F::zero())
    }

    /// The upper bound, `1`.
    #[inline]
    pub fn one() -> Self {
        Self(F::one())
    }

    /// Returns the underlying float.
    #[inline]
    pub fn get(&self) -> F {
        self.0
    }

    /// Returns `1 - value`, which is always in range.
    #[inline]
    pub fn complement(&self) -> Self {
        Self(F::one() - self.0)
    }

    /// Returns an auto-clamping copy of this value.
    #[inline]
    pub fn enforced(&self) -> EnforcedUnitFloat<F> {
        EnforcedUnitFloat::from(*self)
    }
}

/// Creates a [`UnitFloat`]; see [`UnitFloat::new`].
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidOperand`] if `value` is NaN.
#[inline]
pub fn unit_float<F>(value: F) -> Result<UnitFloat<F>, ConstraintError>
where
    F: Float,
{
    UnitFloat::new(value)
}

macro_rules! impl_unit_op {
    ($trait_name:ident, $method:ident, $op:tt) => {
        impl<F> $trait_name<F> for UnitFloat<F>
        where
            F: Float,
        {
            type Output = F;

            #[inline]
            fn $method(self, rhs: F) -> F {
                self.0 $op rhs
            }
        }

        impl<F> $trait_name<UnitFloat<F>> for UnitFloat<F>
        where
            F: Float,
        {
            type Output = F;

            #[inline]
            fn $method(self, rhs: UnitFloat<F>) -> F {
                self.0 $op rhs.0
            }
        }
    };
}

impl_unit_op!(Add, add, +);
impl_unit_op!(Sub, sub, -);
impl_unit_op!(Mul, mul, *);
impl_unit_op!(Div, div, /);

impl<F> PartialEq<F> for UnitFloat<F>
where
    F: Float,
{
    #[inline]
    fn eq(&self, other: &F) -> bool {
        self.0 == *other
    }
}

impl<F> std::fmt::Display for UnitFloat<F>
where
    F: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! impl_unit_float_for {
    ($t:ty) => {
        impl From<UnitFloat<$t>> for $t {
            #[inline]
            fn from(value: UnitFloat<$t>) -> Self {
                value.0
            }
        }

        impl TryFrom<$t> for UnitFloat<$t> {
            type Error = ConstraintError;

            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

impl_unit_float_for!(f32);
impl_unit_float_for!(f64);
