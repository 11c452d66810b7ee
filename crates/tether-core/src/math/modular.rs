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


//! # Modular Primitives
//!
//! Arithmetic on residues in `[0, modulus)` that never overflows for any
//! positive modulus representable in `T`. Sums are formed against the
//! complement `modulus - b`, products by double-and-add when the direct
//! product would overflow, and powers by square-and-multiply on top of that.
//!
//! Except for [`normalize`], every function here expects its residue
//! arguments to already be reduced into `[0, modulus)` and `modulus > 0`.
//! This is checked with `debug_assert!` only.

use crate::num::SignedInteger;
use num_traits::Euclid;

/// Reduces `value` into `[0, modulus)` using a floored modulo.
///
/// # Panics
///
/// Panics if `modulus` is zero.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::modular::normalize;
/// assert_eq!(normalize(-3, 10), 7);
/// assert_eq!(normalize(23, 10), 3);
/// ```
#[inline]
pub fn normalize<T>(value: T, modulus: T) -> T
where
    T: SignedInteger,
{
    debug_assert!(modulus > T::zero(), "modulus must be positive");
    Euclid::rem_euclid(&value, &modulus)
}

#[inline(always)]
fn debug_check_residue<T>(value: T, modulus: T)
where
    T: SignedInteger,
{
    debug_assert!(
        T::zero() <= value && value < modulus,
        "residue {} is not reduced modulo {}",
        value,
        modulus
    );
}

/// Returns `(a + b) mod modulus` for reduced residues.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::modular::add_mod;
/// assert_eq!(add_mod(7, 5, 10), 2);
/// assert_eq!(add_mod(100i8, 100, 120), 80);
/// ```
#[inline]
pub fn add_mod<T>(a: T, b: T, modulus: T) -> T
where
    T: SignedInteger,
{
    debug_check_residue(a, modulus);
    debug_check_residue(b, modulus);

    let complement = modulus - b;
    if a >= complement {
        a - complement
    } else {
        a + b
    }
}

/// Returns `(a - b) mod modulus` for reduced residues.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::modular::sub_mod;
/// assert_eq!(sub_mod(3, 5, 10), 8);
/// ```
#[inline]
pub fn sub_mod<T>(a: T, b: T, modulus: T) -> T
where
    T: SignedInteger,
{
    debug_check_residue(a, modulus);
    debug_check_residue(b, modulus);

    if a >= b { a - b } else { a + (modulus - b) }
}

/// Returns the additive inverse `(-a) mod modulus` of a reduced residue.
#[inline]
pub fn neg_mod<T>(a: T, modulus: T) -> T
where
    T: SignedInteger,
{
    debug_check_residue(a, modulus);

    if a == T::zero() { a } else { modulus - a }
}

/// Returns `(a * b) mod modulus` for reduced residues.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::modular::mul_mod;
/// assert_eq!(mul_mod(7, 8, 10), 6);
/// assert_eq!(mul_mod(100i8, 100, 127), 94);
/// ```
pub fn mul_mod<T>(a: T, b: T, modulus: T) -> T
where
    T: SignedInteger,
{
    debug_check_residue(a, modulus);
    debug_check_residue(b, modulus);

    if let Some(product) = a.checked_mul(&b) {
        return product % modulus;
    }

    let mut result = T::zero();
    let mut base = a;
    let mut factor = b;
    while factor > T::zero() {
        if factor & T::one() == T::one() {
            result = add_mod(result, base, modulus);
        }
        base = add_mod(base, base, modulus);
        factor = factor >> 1;
    }
    result
}

/// Returns `base^exponent mod modulus` for a reduced `base` and a
/// non-negative `exponent`.
///
/// `pow_mod(x, 0, 1)` is `0`, since every value is congruent to zero modulo one.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::modular::pow_mod;
/// assert_eq!(pow_mod(3, 4, 7), 4);
/// assert_eq!(pow_mod(5, 0, 7), 1);
/// ```
pub fn pow_mod<T>(base: T, exponent: T, modulus: T) -> T
where
    T: SignedInteger,
{
    debug_check_residue(base, modulus);
    debug_assert!(exponent >= T::zero(), "exponent must be non-negative");

    let mut result = normalize(T::one(), modulus);
    let mut square = base;
    let mut remaining = exponent;
    while remaining > T::zero() {
        if remaining & T::one() == T::one() {
            result = mul_mod(result, square, modulus);
        }
        square = mul_mod(square, square, modulus);
        remaining = remaining >> 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_negative() {
        assert_eq!(normalize(-1, 10), 9);
        assert_eq!(normalize(-10, 10), 0);
        assert_eq!(normalize(-11, 10), 9);
        assert_eq!(normalize(0, 1), 0);
    }

    #[test]
    fn test_add_mod_exhaustive_small() {
        for m in 1..12 {
            for a in 0..m {
                for b in 0..m {
                    assert_eq!(add_mod(a, b, m), (a + b) % m);
                }
            }
        }
    }

    #[test]
    fn test_sub_and_neg_mod_exhaustive_small() {
        for m in 1..12 {
            for a in 0..m {
                assert_eq!(neg_mod(a, m), (m - a) % m);
                for b in 0..m {
                    assert_eq!(sub_mod(a, b, m), Euclid::rem_euclid(&(a - b), &m));
                }
            }
        }
    }

    #[test]
    fn test_add_mod_near_type_limit() {
        let m = i64::MAX;
        assert_eq!(add_mod(m - 1, m - 1, m), m - 2);
    }

    #[test]
    fn test_mul_mod_near_type_limit() {
        // (m - 1)^2 ≡ 1 (mod m)
        let m = i64::MAX;
        assert_eq!(mul_mod(m - 1, m - 1, m), 1);
        assert_eq!(mul_mod(i8::MAX - 1, 2, i8::MAX), 125);
    }

    #[test]
    fn test_mul_mod_matches_wide_product() {
        let m: i32 = 1_000_000_007;
        for (a, b) in [(123_456_789, 987_654_321), (m - 1, m - 2), (2, 3)] {
            let expected = ((a as i64 * b as i64) % m as i64) as i32;
            assert_eq!(mul_mod(a, b, m), expected);
        }
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(pow_mod(2, 10, 1000), 24);
        assert_eq!(pow_mod(0, 0, 5), 1);
        assert_eq!(pow_mod(0, 3, 5), 0);
        assert_eq!(pow_mod(0, 0, 1), 0);
        // Fermat: a^(p-1) ≡ 1 (mod p)
        assert_eq!(pow_mod(3i64, 1_000_000_006, 1_000_000_007), 1);
    }
}
