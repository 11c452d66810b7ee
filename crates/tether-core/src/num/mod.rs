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


//! # Numeric Foundations
//!
//! Trait aliases bundling the `num-traits` bounds every constrained integer in
//! the workspace relies on.
//!
//! Bounding strategies need a floored modulo, checked arithmetic to detect
//! raw overflow before a strategy is applied, and a sign so that negative raw
//! values can be folded back into range. `PrimInt + Signed + Euclid` covers
//! `i8` through `i128` and `isize`.

use num_traits::{Euclid, PrimInt, Signed};
use std::fmt::{Debug, Display};

/// A primitive signed integer usable as the payload of a constrained value.
///
/// Implemented automatically for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::num::SignedInteger;
/// fn wrap<T: SignedInteger>(value: T, size: T) -> T {
///     num_traits::Euclid::rem_euclid(&value, &size)
/// }
///
/// assert_eq!(wrap(-1i32, 10), 9);
/// ```
pub trait SignedInteger:
    PrimInt + Signed + Euclid + Debug + Display + Send + Sync + 'static
{
}

impl<T> SignedInteger for T where
    T: PrimInt + Signed + Euclid + Debug + Display + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_signed_integer<T: SignedInteger>() {}

    #[test]
    fn test_primitive_signed_types_qualify() {
        assert_signed_integer::<i8>();
        assert_signed_integer::<i16>();
        assert_signed_integer::<i32>();
        assert_signed_integer::<i64>();
        assert_signed_integer::<i128>();
        assert_signed_integer::<isize>();
    }
}
