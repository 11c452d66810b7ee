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


//! # Auto-Clamping Unit Floats
//!
//! `EnforcedUnitFloat<F>` keeps the `[0, 1]` invariant through arithmetic:
//! every `+`, `-`, `*`, `/` and [`Pow`] result is clamped back into the
//! interval before a new value is returned. Non-finite intermediates such as
//! `0.5 / 0.0` clamp like any other value; a NaN result is rejected with
//! [`ConstraintError::InvalidOperand`] by the `try_*` methods and panics in
//! the operators.
//!
//! ```rust
//! use tether_num::unit::EnforcedUnitFloat;
//!
//! let a = EnforcedUnitFloat::new(0.9).unwrap();
//! let b = EnforcedUnitFloat::new(0.5).unwrap();
//!
//! assert_eq!(a + b, 1.0);
//! assert_eq!(b - a, 0.0);
//! assert_eq!(2.0 * b, 1.0);
//! ```

use crate::{
    arith::unwrap_arith,
    unit::float::{UnitFloat, UnitOperand, clamp_unit},
};
use num_traits::{Float, Pow};
use std::ops::{Add, Div, Mul, Sub};
use tether_core::error::ConstraintError;

/// A float in `[0, 1]` whose arithmetic results are clamped back into range.
///
/// # Invariants
/// `0 <= value <= 1` and `value` is not NaN, after construction and after
/// every operation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct EnforcedUnitFloat<F = f64>(F)
where
    F: Float;

impl<F> UnitOperand<F> for EnforcedUnitFloat<F>
where
    F: Float,
{
    #[inline]
    fn to_float(self) -> F {
        self.0
    }
}

impl<F> EnforcedUnitFloat<F>
where
    F: Float,
{
    /// Creates an enforced unit float, clamping `value` into `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if `value` is NaN.
    #[inline]
    pub fn new(value: F) -> Result<Self, ConstraintError> {
        clamp_unit(value).map(Self)
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

    /// Returns `1 - value`.
    #[inline]
    pub fn complement(&self) -> Self {
        Self(F::one() - self.0)
    }

    /// Returns this value as a [`UnitFloat`], whose arithmetic is not clamped.
    #[inline]
    pub fn relaxed(&self) -> UnitFloat<F> {
        UnitFloat::from(*self)
    }

    /// Adds `rhs` and clamps the sum.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if the sum is NaN.
    pub fn try_add<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: UnitOperand<F>,
    {
        Self::new(self.0 + rhs.to_float())
    }

    /// Subtracts `rhs` and clamps the difference.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if the difference is NaN.
    pub fn try_sub<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: UnitOperand<F>,
    {
        Self::new(self.0 - rhs.to_float())
    }

    /// Computes `lhs - self` and clamps the difference.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if the difference is NaN.
    pub fn try_sub_from<L>(self, lhs: L) -> Result<Self, ConstraintError>
    where
        L: UnitOperand<F>,
    {
        Self::new(lhs.to_float() - self.0)
    }

    /// Multiplies by `rhs` and clamps the product.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if the product is NaN,
    /// as for `0 * inf`.
    pub fn try_mul<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: UnitOperand<F>,
    {
        Self::new(self.0 * rhs.to_float())
    }

    /// Divides by `rhs` and clamps the quotient.
    ///
    /// Dividing a positive value by zero yields `inf`, which clamps to `1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if the quotient is NaN,
    /// as for `0 / 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::unit::EnforcedUnitFloat;
    ///
    /// let half = EnforcedUnitFloat::new(0.5).unwrap();
    /// assert_eq!(half.try_div(0.0).unwrap(), 1.0);
    /// assert!(EnforcedUnitFloat::<f64>::zero().try_div(0.0).is_err());
    /// ```
    pub fn try_div<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: UnitOperand<F>,
    {
        Self::new(self.0 / rhs.to_float())
    }

    /// Computes `lhs / self` and clamps the quotient.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if the quotient is NaN.
    pub fn try_div_into<L>(self, lhs: L) -> Result<Self, ConstraintError>
    where
        L: UnitOperand<F>,
    {
        Self::new(lhs.to_float() / self.0)
    }

    /// Raises the value to `exponent` and clamps the power.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidOperand`] if the power is NaN.
    pub fn try_powf<R>(self, exponent: R) -> Result<Self, ConstraintError>
    where
        R: UnitOperand<F>,
    {
        Self::new(self.0.powf(exponent.to_float()))
    }

    /// Raises the value to `exponent` and clamps the power.
    ///
    /// # Panics
    ///
    /// Panics if the power is NaN.
    #[track_caller]
    pub fn powf<R>(self, exponent: R) -> Self
    where
        R: UnitOperand<F>,
    {
        unwrap_arith(self.try_powf(exponent), "EnforcedUnitFloat")
    }
}

impl<F> From<UnitFloat<F>> for EnforcedUnitFloat<F>
where
    F: Float,
{
    #[inline]
    fn from(value: UnitFloat<F>) -> Self {
        Self(value.get())
    }
}

impl<F> From<EnforcedUnitFloat<F>> for UnitFloat<F>
where
    F: Float,
{
    #[inline]
    fn from(value: EnforcedUnitFloat<F>) -> Self {
        UnitFloat::from_unit(value.0)
    }
}

macro_rules! impl_enforced_op {
    ($trait_name:ident, $method:ident, $try_method:ident, $rhs:ty) => {
        impl<F> $trait_name<$rhs> for EnforcedUnitFloat<F>
        where
            F: Float,
        {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: $rhs) -> Self::Output {
                unwrap_arith(self.$try_method(rhs), "EnforcedUnitFloat")
            }
        }
    };
    ($trait_name:ident, $method:ident, $try_method:ident) => {
        impl_enforced_op!($trait_name, $method, $try_method, F);
        impl_enforced_op!($trait_name, $method, $try_method, UnitFloat<F>);
        impl_enforced_op!($trait_name, $method, $try_method, EnforcedUnitFloat<F>);
    };
}

impl_enforced_op!(Add, add, try_add);
impl_enforced_op!(Sub, sub, try_sub);
impl_enforced_op!(Mul, mul, try_mul);
impl_enforced_op!(Div, div, try_div);
impl_enforced_op!(Pow, pow, try_powf);

macro_rules! impl_enforced_lhs {
    ($lhs:ty, $f:ty) => {
        impl Add<EnforcedUnitFloat<$f>> for $lhs {
            type Output = EnforcedUnitFloat<$f>;

            #[track_caller]
            #[inline]
            fn add(self, rhs: EnforcedUnitFloat<$f>) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<EnforcedUnitFloat<$f>> for $lhs {
            type Output = EnforcedUnitFloat<$f>;

            #[track_caller]
            #[inline]
            fn sub(self, rhs: EnforcedUnitFloat<$f>) -> Self::Output {
                unwrap_arith(rhs.try_sub_from(self), "EnforcedUnitFloat")
            }
        }

        impl Mul<EnforcedUnitFloat<$f>> for $lhs {
            type Output = EnforcedUnitFloat<$f>;

            #[track_caller]
            #[inline]
            fn mul(self, rhs: EnforcedUnitFloat<$f>) -> Self::Output {
                rhs * self
            }
        }

        impl Div<EnforcedUnitFloat<$f>> for $lhs {
            type Output = EnforcedUnitFloat<$f>;

            #[track_caller]
            #[inline]
            fn div(self, rhs: EnforcedUnitFloat<$f>) -> Self::Output {
                unwrap_arith(rhs.try_div_into(self), "EnforcedUnitFloat")
            }
        }
    };
}

impl_enforced_lhs!(f32, f32);
impl_enforced_lhs!(f64, f64);
impl_enforced_lhs!(UnitFloat<f32>, f32);
impl_enforced_lhs!(UnitFloat<f64>, f64);

impl<F> PartialEq<F> for EnforcedUnitFloat<F>
where
    F: Float,
{
    #[inline]
    fn eq(&self, other: &F) -> bool {
        self.0 == *other
    }
}

impl<F> std::fmt::Display for EnforcedUnitFloat<F>
where
    F: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! impl_enforced_float_for {
    ($t:ty) => {
        impl From<EnforcedUnitFloat<$t>> for $t {
            #[inline]
            fn from(value: EnforcedUnitFloat<$t>) -> Self {
                value.0
            }
        }

        impl TryFrom<$t> for EnforcedUnitFloat<$t> {
            type Error = ConstraintError;

            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

impl_enforced_float_for!(f32);
impl_enforced_float_for!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn e(value: f64) -> EnforcedUnitFloat {
        EnforcedUnitFloat::new(value).unwrap()
    }

    #[test]
    fn test_sum_is_clamped() {
        assert_eq!(e(0.9) + e(0.5), e(1.0));
        assert_eq!(e(0.25) + e(0.5), 0.75);
    }

    #[test]
    fn test_difference_is_clamped() {
        assert_eq!(e(0.25) - e(0.5), 0.0);
        assert_eq!(e(0.75) - 0.5, 0.25);
    }

    #[test]
    fn test_product_and_quotient_are_clamped() {
        assert_eq!(e(0.5) * 3.0, 1.0);
        assert_eq!(e(0.5) * -1.0, 0.0);
        assert_eq!(e(0.5) / 0.25, 1.0);
        assert_eq!(e(0.5) / 2.0, 0.25);
        assert_eq!(e(0.5) / -2.0, 0.0);
    }

    #[test]
    fn test_right_hand_forms() {
        assert_eq!(0.7 + e(0.5), 1.0);
        assert_eq!(1.0 - e(0.25), 0.75);
        assert_eq!(0.25 - e(0.5), 0.0);
        assert_eq!(4.0 * e(0.5), 1.0);
        assert_eq!(0.25 / e(0.5), 0.5);
        assert_eq!(2.0 / e(0.5), 1.0);
    }

    #[test]
    fn test_relaxed_left_operand_yields_enforced() {
        let u = UnitFloat::new(0.75).unwrap();
        let sum: EnforcedUnitFloat = u + e(0.5);
        assert_eq!(sum, 1.0);
        assert_eq!(e(0.5) + u, 1.0);
    }

    #[test]
    fn test_pow() {
        assert!((e(0.5).pow(2.0).get() - 0.25).abs() < 1e-12);
        assert_eq!(e(0.5).pow(-1.0), 1.0);
        assert_eq!(e(0.5).powf(e(1.0)), 0.5);
        assert_eq!(e(0.0).pow(0.0), 1.0);
    }

    #[test]
    fn test_division_by_zero_clamps() {
        assert_eq!(e(0.5) / 0.0, 1.0);
        assert_eq!(e(0.5) / -0.0, 0.0);
    }

    #[test]
    fn test_nan_results_are_rejected() {
        assert_eq!(
            EnforcedUnitFloat::<f64>::zero().try_div(0.0),
            Err(ConstraintError::InvalidOperand)
        );
        assert_eq!(
            EnforcedUnitFloat::<f64>::zero().try_mul(f64::INFINITY),
            Err(ConstraintError::InvalidOperand)
        );
        assert_eq!(e(0.5).try_add(f64::NAN), Err(ConstraintError::InvalidOperand));
    }

    #[test]
    #[should_panic(expected = "EnforcedUnitFloat arithmetic failed: operand is not a number")]
    fn test_nan_operator_panics() {
        let _ = e(0.0) / 0.0;
    }

    #[test]
    fn test_conversions() {
        let enforced = e(0.5);
        assert_eq!(enforced.relaxed(), UnitFloat::new(0.5).unwrap());
        let raw: f64 = enforced.into();
        assert_eq!(raw, 0.5);
        assert_eq!(EnforcedUnitFloat::<f32>::try_from(2.0f32), Ok(EnforcedUnitFloat::<f32>::one()));
        assert_eq!(e(0.25).complement(), 0.75);
    }
}
