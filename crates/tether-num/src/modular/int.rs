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


//! # Modular Integers
//!
//! `ModularInt<T>` pairs a residue with a positive modulus and keeps the
//! residue in `[0, modulus)` through every operation. Arithmetic is closed
//! over the residue class: combining with a plain integer reduces the integer
//! first, while combining two modular values requires their moduli to match.
//!
//! ## Operators
//!
//! `+`, `-`, `*`, `/` (floored division), `%` (floored modulo), unary `-`
//! and [`Pow`] are implemented for `ModularInt<T>` with either a `T` or a
//! `ModularInt<T>` on the right. Every operator has a `try_*` counterpart
//! returning `Result`; the operator itself panics where the `try_*` method
//! would return an error, just like primitive integer overflow.
//!
//! ```rust
//! use tether_num::modular::ModularInt;
//!
//! let a = ModularInt::new(7, 10).unwrap();
//! let b = ModularInt::new(5, 10).unwrap();
//!
//! assert_eq!(a + b, ModularInt::new(2, 10).unwrap());
//! assert_eq!(a * 3, 1);
//! assert_eq!(-a, 3);
//! assert_eq!(a.inverse().unwrap(), 3);
//! ```

use crate::arith::unwrap_arith;
use num_traits::Pow;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use tether_core::{
    error::{ConstraintError, widen},
    math::{
        euclid::{floor_div, floor_mod, gcd, mod_inverse},
        modular::{add_mod, mul_mod, neg_mod, normalize, pow_mod, sub_mod},
    },
    num::SignedInteger,
};

/// An integer residue modulo a positive modulus.
///
/// # Invariants
/// `0 <= residue < modulus` and `modulus > 0`.
///
/// # Examples
///
/// ```rust
/// # use tether_num::modular::ModularInt;
///
/// let x = ModularInt::new(-3, 10).unwrap();
/// assert_eq!(x.residue(), 7);
/// assert_eq!(x.modulus(), 10);
/// assert_eq!(x.to_string(), "7 mod 10");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModularInt<T = i64>
where
    T: SignedInteger,
{
    residue: T,
    modulus: T,
}

/// A right-hand operand accepted by [`ModularInt`] arithmetic.
///
/// Plain integers are taken as-is. A [`ModularInt`] contributes its residue,
/// provided its modulus equals the left-hand side's.
pub trait ModularOperand<T>
where
    T: SignedInteger,
{
    /// Returns the raw integer this operand contributes to an operation
    /// against `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ModulusMismatch`] if the operand carries a
    /// different modulus.
    fn operand_for(self, modulus: T) -> Result<T, ConstraintError>;
}

impl<T> ModularOperand<T> for T
where
    T: SignedInteger,
{
    #[inline]
    fn operand_for(self, _modulus: T) -> Result<T, ConstraintError> {
        Ok(self)
    }
}

impl<T> ModularOperand<T> for ModularInt<T>
where
    T: SignedInteger,
{
    #[inline]
    fn operand_for(self, modulus: T) -> Result<T, ConstraintError> {
        if self.modulus != modulus {
            return Err(ConstraintError::ModulusMismatch {
                lhs: widen(modulus),
                rhs: widen(self.modulus),
            });
        }
        Ok(self.residue)
    }
}

impl<T> ModularInt<T>
where
    T: SignedInteger,
{
    /// Creates `value mod modulus`, normalized into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidModulus`] if `modulus <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::modular::ModularInt;
    ///
    /// assert_eq!(ModularInt::new(23, 10).unwrap().residue(), 3);
    /// assert!(ModularInt::new(3, 0).is_err());
    /// ```
    #[inline]
    pub fn new(value: T, modulus: T) -> Result<Self, ConstraintError> {
        if modulus <= T::zero() {
            return Err(ConstraintError::InvalidModulus {
                modulus: widen(modulus),
            });
        }
        Ok(Self {
            residue: normalize(value, modulus),
            modulus,
        })
    }

    /// Wraps an already reduced residue.
    #[inline]
    pub(crate) fn from_reduced(residue: T, modulus: T) -> Self {
        debug_assert!(modulus > T::zero() && T::zero() <= residue && residue < modulus);
        Self { residue, modulus }
    }

    /// Returns the residue in `[0, modulus)`.
    #[inline]
    pub fn residue(&self) -> T {
        self.residue
    }

    /// Returns the modulus.
    #[inline]
    pub fn modulus(&self) -> T {
        self.modulus
    }

    /// Returns the additive inverse `(-residue) mod modulus`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::modular::ModularInt;
    ///
    /// assert_eq!(ModularInt::new(3, 10).unwrap().opposite(), 7);
    /// assert_eq!(ModularInt::new(0, 10).unwrap().opposite(), 0);
    /// ```
    #[inline]
    pub fn opposite(&self) -> Self {
        self.with_residue(neg_mod(self.residue, self.modulus))
    }

    /// Returns `true` if the residue is coprime with the modulus.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        gcd(self.residue, self.modulus) == Some(T::one())
    }

    /// Returns the multiplicative inverse, computed with the extended
    /// Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotInvertible`] if
    /// `gcd(residue, modulus) != 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::modular::ModularInt;
    ///
    /// assert_eq!(ModularInt::new(3, 10).unwrap().inverse().unwrap(), 7);
    /// assert!(ModularInt::new(4, 8).unwrap().inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<Self, ConstraintError> {
        mod_inverse(self.residue, self.modulus).map(|inv| self.with_residue(inv))
    }

    /// Adds `rhs`, wrapping around the modulus.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ModulusMismatch`] if `rhs` is a modular
    /// value with a different modulus.
    pub fn try_add<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: ModularOperand<T>,
    {
        let rhs = self.reduced_operand(rhs)?;
        Ok(self.with_residue(add_mod(self.residue, rhs, self.modulus)))
    }

    /// Subtracts `rhs`, wrapping around the modulus.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ModulusMismatch`] if `rhs` is a modular
    /// value with a different modulus.
    pub fn try_sub<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: ModularOperand<T>,
    {
        let rhs = self.reduced_operand(rhs)?;
        Ok(self.with_residue(sub_mod(self.residue, rhs, self.modulus)))
    }

    /// Computes `lhs - self` for a plain integer on the left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::modular::ModularInt;
    ///
    /// let x = ModularInt::new(7, 10).unwrap();
    /// assert_eq!(x.sub_from(3), 6);
    /// ```
    pub fn sub_from(self, lhs: T) -> Self {
        let lhs = normalize(lhs, self.modulus);
        self.with_residue(sub_mod(lhs, self.residue, self.modulus))
    }

    /// Multiplies by `rhs`, wrapping around the modulus.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ModulusMismatch`] if `rhs` is a modular
    /// value with a different modulus.
    pub fn try_mul<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: ModularOperand<T>,
    {
        let rhs = self.reduced_operand(rhs)?;
        Ok(self.with_residue(mul_mod(self.residue, rhs, self.modulus)))
    }

    /// Divides the residue by `rhs` rounding toward negative infinity, then
    /// reduces the quotient.
    ///
    /// This is integer division of the representative, not multiplication by
    /// a modular inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ModulusMismatch`] for mismatched moduli and
    /// [`ConstraintError::DivisionByZero`] if the divisor is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::modular::ModularInt;
    ///
    /// let x = ModularInt::new(7, 10).unwrap();
    /// assert_eq!(x.try_div_floor(2).unwrap(), 3);
    /// assert_eq!(x.try_div_floor(-2).unwrap(), 6); // -4 mod 10
    /// ```
    pub fn try_div_floor<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: ModularOperand<T>,
    {
        let rhs = rhs.operand_for(self.modulus)?;
        let quotient = floor_div(self.residue, rhs)?;
        Ok(self.with_residue(normalize(quotient, self.modulus)))
    }

    /// Takes the floored remainder of the residue by `rhs`, then reduces it.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ModulusMismatch`] for mismatched moduli and
    /// [`ConstraintError::DivisionByZero`] if the divisor is zero.
    pub fn try_rem<R>(self, rhs: R) -> Result<Self, ConstraintError>
    where
        R: ModularOperand<T>,
    {
        let rhs = rhs.operand_for(self.modulus)?;
        let remainder = floor_mod(self.residue, rhs)?;
        Ok(self.with_residue(normalize(remainder, self.modulus)))
    }

    /// Raises the value to `exponent` by modular exponentiation.
    ///
    /// A negative exponent raises the multiplicative inverse to `|exponent|`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ModulusMismatch`] for mismatched moduli,
    /// [`ConstraintError::NotInvertible`] for a negative exponent on a
    /// non-invertible value, and [`ConstraintError::Overflow`] if the
    /// exponent is `T::MIN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::modular::ModularInt;
    ///
    /// let x = ModularInt::new(3, 7).unwrap();
    /// assert_eq!(x.try_pow(4).unwrap(), 4);
    /// assert_eq!(x.try_pow(-1).unwrap(), 5);
    /// ```
    pub fn try_pow<R>(self, exponent: R) -> Result<Self, ConstraintError>
    where
        R: ModularOperand<T>,
    {
        let exponent = exponent.operand_for(self.modulus)?;
        if exponent < T::zero() {
            let magnitude = T::zero()
                .checked_sub(&exponent)
                .ok_or(ConstraintError::Overflow)?;
            let inverse = self.inverse()?;
            return Ok(inverse.with_residue(pow_mod(inverse.residue, magnitude, self.modulus)));
        }
        Ok(self.with_residue(pow_mod(self.residue, exponent, self.modulus)))
    }

    /// Three-argument exponentiation, which modular values do not support.
    ///
    /// A modular value already carries its modulus, so any supplied modulus,
    /// even one equal to its own, is rejected. Use [`try_pow`](Self::try_pow)
    /// or [`Pow`] instead.
    ///
    /// # Errors
    ///
    /// Always returns [`ConstraintError::UsageError`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::modular::ModularInt;
    ///
    /// let x = ModularInt::new(3, 7).unwrap();
    /// assert!(x.pow_mod(2, 7).is_err());
    /// assert_eq!(x.try_pow(2).unwrap(), 2);
    /// ```
    pub fn pow_mod<R>(self, _exponent: R, _modulus: T) -> Result<Self, ConstraintError>
    where
        R: ModularOperand<T>,
    {
        Err(ConstraintError::UsageError(
            "exponentiation with an external modulus; use pow on the value's own modulus",
        ))
    }

    #[inline]
    fn with_residue(&self, residue: T) -> Self {
        Self::from_reduced(residue, self.modulus)
    }

    #[inline]
    fn reduced_operand<R>(&self, rhs: R) -> Result<T, ConstraintError>
    where
        R: ModularOperand<T>,
    {
        rhs.operand_for(self.modulus)
            .map(|value| normalize(value, self.modulus))
    }
}

/// Creates a [`ModularInt`]; see [`ModularInt::new`].
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidModulus`] if `modulus <= 0`.
///
/// # Examples
///
/// ```rust
/// # use tether_num::modular::modular_int;
///
/// assert_eq!(modular_int(-3, 10).unwrap(), 7);
/// ```
#[inline]
pub fn modular_int<T>(value: T, modulus: T) -> Result<ModularInt<T>, ConstraintError>
where
    T: SignedInteger,
{
    ModularInt::new(value, modulus)
}

#[track_caller]
#[inline]
fn unwrap_op<T>(result: Result<ModularInt<T>, ConstraintError>) -> ModularInt<T>
where
    T: SignedInteger,
{
    unwrap_arith(result, "ModularInt")
}

macro_rules! impl_modular_op {
    ($trait_name:ident, $method:ident, $try_method:ident) => {
        impl<T> $trait_name<T> for ModularInt<T>
        where
            T: SignedInteger,
        {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                unwrap_op(self.$try_method(rhs))
            }
        }

        impl<T> $trait_name<ModularInt<T>> for ModularInt<T>
        where
            T: SignedInteger,
        {
            type Output = Self;

            /// # Panics
            ///
            /// Panics if the moduli differ.
            #[track_caller]
            #[inline]
            fn $method(self, rhs: ModularInt<T>) -> Self::Output {
                unwrap_op(self.$try_method(rhs))
            }
        }
    };
}

impl_modular_op!(Add, add, try_add);
impl_modular_op!(Sub, sub, try_sub);
impl_modular_op!(Mul, mul, try_mul);
impl_modular_op!(Div, div, try_div_floor);
impl_modular_op!(Rem, rem, try_rem);

impl<T> Pow<T> for ModularInt<T>
where
    T: SignedInteger,
{
    type Output = Self;

    #[track_caller]
    #[inline]
    fn pow(self, exponent: T) -> Self::Output {
        unwrap_op(self.try_pow(exponent))
    }
}

impl<T> Pow<ModularInt<T>> for ModularInt<T>
where
    T: SignedInteger,
{
    type Output = Self;

    #[track_caller]
    #[inline]
    fn pow(self, exponent: ModularInt<T>) -> Self::Output {
        unwrap_op(self.try_pow(exponent))
    }
}

impl<T> Neg for ModularInt<T>
where
    T: SignedInteger,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.opposite()
    }
}

macro_rules! impl_modular_rhs_for {
    ($t:ty) => {
        impl Add<ModularInt<$t>> for $t {
            type Output = ModularInt<$t>;

            #[inline]
            fn add(self, rhs: ModularInt<$t>) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<ModularInt<$t>> for $t {
            type Output = ModularInt<$t>;

            #[inline]
            fn sub(self, rhs: ModularInt<$t>) -> Self::Output {
                rhs.sub_from(self)
            }
        }

        impl Mul<ModularInt<$t>> for $t {
            type Output = ModularInt<$t>;

            #[inline]
            fn mul(self, rhs: ModularInt<$t>) -> Self::Output {
                rhs * self
            }
        }
    };
}

impl_modular_rhs_for!(i8);
impl_modular_rhs_for!(i16);
impl_modular_rhs_for!(i32);
impl_modular_rhs_for!(i64);
impl_modular_rhs_for!(i128);
impl_modular_rhs_for!(isize);

impl<T> PartialEq<T> for ModularInt<T>
where
    T: SignedInteger,
{
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.residue == *other
    }
}

impl<T> PartialOrd<T> for ModularInt<T>
where
    T: SignedInteger,
{
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<std::cmp::Ordering> {
        self.residue.partial_cmp(other)
    }
}

impl<T> std::fmt::Debug for ModularInt<T>
where
    T: SignedInteger,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModularInt({} mod {})", self.residue, self.modulus)
    }
}

impl<T> std::fmt::Display for ModularInt<T>
where
    T: SignedInteger,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mod {}", self.residue, self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(value: i64, modulus: i64) -> ModularInt {
        ModularInt::new(value, modulus).unwrap()
    }

    #[test]
    fn test_new_normalizes() {
        assert_eq!(m(13, 10).residue(), 3);
        assert_eq!(m(-1, 10).residue(), 9);
        assert_eq!(m(-20, 10).residue(), 0);
        assert_eq!(m(5, 1).residue(), 0);
    }

    #[test]
    fn test_modular_int_constructor() {
        assert_eq!(modular_int(23, 10), Ok(m(3, 10)));
        assert!(modular_int(1, -1).is_err());
    }

    #[test]
    fn test_new_rejects_non_positive_modulus() {
        assert_eq!(
            ModularInt::new(3, 0),
            Err(ConstraintError::InvalidModulus { modulus: 0 })
        );
        assert_eq!(
            ModularInt::new(3, -7),
            Err(ConstraintError::InvalidModulus { modulus: -7 })
        );
    }

    #[test]
    fn test_add_sub_mul_with_plain_integers() {
        let x = m(7, 10);
        assert_eq!(x + 5, 2);
        assert_eq!(x - 9, 8);
        assert_eq!(x * 4, 8);
        assert_eq!(x + -27, 0);
        assert_eq!((x + 5).modulus(), 10);
    }

    #[test]
    fn test_right_hand_forms() {
        let x = m(7, 10);
        assert_eq!(5 + x, 2);
        assert_eq!(3 - x, 6);
        assert_eq!(4 * x, 8);
    }

    #[test]
    fn test_ops_between_same_modulus() {
        let a = m(7, 10);
        let b = m(6, 10);
        assert_eq!(a + b, m(3, 10));
        assert_eq!(a - b, m(1, 10));
        assert_eq!(b - a, m(9, 10));
        assert_eq!(a * b, m(2, 10));
    }

    #[test]
    fn test_modulus_mismatch_is_an_error() {
        let a = m(3, 10);
        let b = m(3, 7);
        let expected = Err(ConstraintError::ModulusMismatch { lhs: 10, rhs: 7 });
        assert_eq!(a.try_add(b), expected);
        assert_eq!(a.try_sub(b), expected);
        assert_eq!(a.try_mul(b), expected);
        assert_eq!(a.try_div_floor(b), expected);
        assert_eq!(a.try_rem(b), expected);
        assert_eq!(a.try_pow(b), expected);
    }

    #[test]
    #[should_panic(expected = "different moduli")]
    fn test_modulus_mismatch_operator_panics() {
        let _ = m(3, 10) + m(3, 7);
    }

    #[test]
    fn test_floor_div_and_rem() {
        let x = m(7, 10);
        assert_eq!(x / 2, 3);
        assert_eq!(x / -2, 6);
        assert_eq!(x % 4, 3);
        assert_eq!(x % -4, 9); // 7 mod -4 == -1, reduced to 9
        assert_eq!(x / m(3, 10), 2);
    }

    #[test]
    fn test_division_by_zero() {
        let x = m(7, 10);
        assert_eq!(x.try_div_floor(0), Err(ConstraintError::DivisionByZero));
        assert_eq!(x.try_rem(m(0, 10)), Err(ConstraintError::DivisionByZero));
    }

    #[test]
    fn test_pow() {
        let x = m(3, 7);
        assert_eq!(x.pow(0), 1);
        assert_eq!(x.pow(6), 1);
        assert_eq!(x.pow(m(2, 7)), 2);
        assert_eq!(m(2, 1_000_000_007).pow(30), 73_741_817);
    }

    #[test]
    fn test_pow_negative_exponent() {
        let x = m(3, 7);
        assert_eq!(x.try_pow(-2), Ok(m(4, 7))); // 5^2 = 25 ≡ 4
        assert_eq!(
            m(2, 8).try_pow(-1),
            Err(ConstraintError::NotInvertible {
                residue: 2,
                modulus: 8
            })
        );
    }

    #[test]
    fn test_pow_mod_rejects_external_modulus() {
        let x = m(3, 7);
        assert!(matches!(
            x.pow_mod(2, 11),
            Err(ConstraintError::UsageError(_))
        ));
        assert!(matches!(
            x.pow_mod(2, 7),
            Err(ConstraintError::UsageError(_))
        ));
        assert!(matches!(
            x.pow_mod(m(2, 7), 7),
            Err(ConstraintError::UsageError(_))
        ));
        assert_eq!(x.pow(2), m(2, 7));
    }

    #[test]
    fn test_opposite_and_neg() {
        let x = m(3, 10);
        assert_eq!(x.opposite(), 7);
        assert_eq!(-x, 7);
        assert_eq!(x + x.opposite(), 0);
    }

    #[test]
    fn test_inverse() {
        for a in 1..11 {
            let x = m(a, 11);
            let inv = x.inverse().unwrap();
            assert_eq!(x * inv, 1);
        }
    }

    #[test]
    fn test_inverse_not_invertible() {
        let x = m(4, 8);
        assert!(!x.is_invertible());
        assert_eq!(
            x.inverse(),
            Err(ConstraintError::NotInvertible {
                residue: 4,
                modulus: 8
            })
        );
    }

    #[test]
    fn test_large_modulus_does_not_overflow() {
        let big = i64::MAX;
        let x = m(big - 1, big);
        assert_eq!(x + x, big - 2);
        assert_eq!(x * x, 1);
        assert_eq!(x.opposite(), 1);
    }

    #[test]
    fn test_equality_and_display() {
        assert_eq!(m(3, 10), m(13, 10));
        assert_ne!(m(3, 10), m(3, 7));
        assert_eq!(m(3, 10), 3);
        assert_eq!(m(3, 10).to_string(), "3 mod 10");
        assert_eq!(format!("{:?}", m(3, 10)), "ModularInt(3 mod 10)");
    }

    #[test]
    fn test_ordering_against_plain_integers() {
        let x = m(13, 10);
        assert!(x < 4);
        assert!(x > 2);
        assert!(x >= 3);
        assert!(m(-1, 10) > 8);
        assert!(m(0, 10) <= 0);
    }

    #[test]
    fn test_narrow_integer_types() {
        let x = ModularInt::new(100i8, 120).unwrap();
        assert_eq!(x + 100, 80);
        assert_eq!(x * x, 40); // 10000 mod 120
    }
}
