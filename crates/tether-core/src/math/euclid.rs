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


//! # Euclidean Helpers
//!
//! Greatest common divisor, floored division and the extended Euclidean
//! algorithm. Division here always rounds toward negative infinity so that
//! remainders take the sign of the divisor, which is the convention modular
//! values are normalized against.

use crate::{
    error::{ConstraintError, widen},
    num::SignedInteger,
};
use num_traits::Euclid;

/// Returns the non-negative greatest common divisor of `a` and `b`.
///
/// `gcd(0, 0)` is `0`. Defined for every input pair, including `T::MIN`.
///
/// Returns `None` only when the divisor is `|T::MIN|`, which does not fit in
/// `T`, as for `gcd(T::MIN, 0)`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::euclid::gcd;
/// assert_eq!(gcd(12, 18), Some(6));
/// assert_eq!(gcd(-4, 6), Some(2));
/// assert_eq!(gcd(7, 0), Some(7));
/// assert_eq!(gcd(i8::MIN, 6), Some(2));
/// assert_eq!(gcd(i8::MIN, 0), None);
/// ```
pub fn gcd<T>(a: T, b: T) -> Option<T>
where
    T: SignedInteger,
{
    // Negating a positive value never overflows, so run on non-positive values.
    let (mut a, mut b) = (non_positive(a), non_positive(b));
    while b != T::zero() {
        // T::MIN % -1 overflows although the remainder is zero.
        let r = if b == -T::one() { T::zero() } else { a % b };
        a = b;
        b = r;
    }
    T::zero().checked_sub(&a)
}

#[inline]
fn non_positive<T>(value: T) -> T
where
    T: SignedInteger,
{
    if value > T::zero() { -value } else { value }
}

/// Floored division: the quotient rounded toward negative infinity.
///
/// # Errors
///
/// Returns [`ConstraintError::DivisionByZero`] if `divisor` is zero and
/// [`ConstraintError::Overflow`] for `T::MIN / -1`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::euclid::floor_div;
/// assert_eq!(floor_div(7, 2), Ok(3));
/// assert_eq!(floor_div(-7, 2), Ok(-4));
/// assert_eq!(floor_div(7, -2), Ok(-4));
/// ```
pub fn floor_div<T>(dividend: T, divisor: T) -> Result<T, ConstraintError>
where
    T: SignedInteger,
{
    if divisor == T::zero() {
        return Err(ConstraintError::DivisionByZero);
    }
    let quotient = dividend
        .checked_div(&divisor)
        .ok_or(ConstraintError::Overflow)?;
    let remainder = dividend % divisor;
    if remainder != T::zero() && (remainder < T::zero()) != (divisor < T::zero()) {
        Ok(quotient - T::one())
    } else {
        Ok(quotient)
    }
}

/// Floored modulo: the remainder takes the sign of `divisor`.
///
/// # Errors
///
/// Returns [`ConstraintError::DivisionByZero`] if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::euclid::floor_mod;
/// assert_eq!(floor_mod(-7, 3), Ok(2));
/// assert_eq!(floor_mod(7, -3), Ok(-2));
/// ```
pub fn floor_mod<T>(dividend: T, divisor: T) -> Result<T, ConstraintError>
where
    T: SignedInteger,
{
    if divisor == T::zero() {
        return Err(ConstraintError::DivisionByZero);
    }
    // T::MIN % -1 overflows although the remainder is zero.
    let remainder = if divisor == -T::one() {
        T::zero()
    } else {
        dividend % divisor
    };
    if remainder != T::zero() && (remainder < T::zero()) != (divisor < T::zero()) {
        Ok(remainder + divisor)
    } else {
        Ok(remainder)
    }
}

/// Computes the multiplicative inverse of `value` modulo `modulus`.
///
/// Runs the extended Euclidean algorithm on `(modulus, value mod modulus)`,
/// tracking only the Bézout coefficient of `value`. The result lies in
/// `[0, modulus)`.
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidModulus`] if `modulus <= 0` and
/// [`ConstraintError::NotInvertible`] if `gcd(value, modulus) != 1`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::euclid::mod_inverse;
/// assert_eq!(mod_inverse(3, 10), Ok(7));
/// assert!(mod_inverse(4, 8).is_err());
/// ```
pub fn mod_inverse<T>(value: T, modulus: T) -> Result<T, ConstraintError>
where
    T: SignedInteger,
{
    if modulus <= T::zero() {
        return Err(ConstraintError::InvalidModulus {
            modulus: widen(modulus),
        });
    }

    let value = Euclid::rem_euclid(&value, &modulus);
    if gcd(value, modulus) != Some(T::one()) {
        return Err(ConstraintError::NotInvertible {
            residue: widen(value),
            modulus: widen(modulus),
        });
    }

    let (mut t, mut new_t) = (T::zero(), T::one());
    let (mut r, mut new_r) = (modulus, value);
    while new_r != T::zero() {
        let q = r / new_r;
        (t, new_t) = (new_t, t - q * new_t);
        (r, new_r) = (new_r, r - q * new_r);
    }

    Ok(Euclid::rem_euclid(&t, &modulus))
}
