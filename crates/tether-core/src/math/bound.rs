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


//! # Bounding Functions
//!
//! Pure functions that fold a raw value into a range under one of three
//! strategies:
//!
//! - `clamp`: saturate at the nearest bound.
//! - `cyclic_wrap`: treat `[min, max]` as a ring of `max - min + 1` slots.
//! - `bounce`: reflect off both bounds, producing a triangle wave with period
//!   `2 * (max - min)`.
//!
//! `clamp` accepts any `PartialOrd` type and never fails. The integer
//! strategies report degenerate ranges as [`ConstraintError`]s and accept
//! any range `T` can represent, up to `[T::MIN, T::MAX]`. Note the asymmetry for zero-width ranges: a
//! `[n, n]` ring has one slot and always wraps to `n`, while bouncing
//! between two coincident walls is rejected.

use crate::{
    error::{ConstraintError, widen},
    num::SignedInteger,
};
use num_traits::{Float, NumCast};

/// Clamps `value` into `[min, max]`.
///
/// Computed as `max(min(value, max), min)`. If `min > max` the result is
/// degenerate but deterministic: every input yields `min`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::bound::clamp;
/// assert_eq!(clamp(15, 0, 10), 10);
/// assert_eq!(clamp(-3, 0, 10), 0);
/// assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
/// ```
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T
where
    T: PartialOrd,
{
    let upper = if max < value { max } else { value };
    if min > upper { min } else { upper }
}

/// Clamps a float into the unit interval `[0, 1]`.
///
/// A NaN input is returned unchanged; callers that must reject it check
/// before clamping.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::bound::clamp01;
/// assert_eq!(clamp01(1.4), 1.0);
/// assert_eq!(clamp01(-0.2f32), 0.0);
/// ```
#[inline]
pub fn clamp01<F>(value: F) -> F
where
    F: Float,
{
    clamp(value, F::zero(), F::one())
}

/// Wraps `value` into `[min, max]` inclusive, as if the range were a ring.
///
/// The result is `(value - min) mod (max - min + 1) + min` using a floored
/// modulo, so negative offsets wrap from the top. Values already in range
/// are returned unchanged. The ring size and offset are measured as `u128`
/// distances, so every range representable in `T` is accepted, including
/// `[T::MIN, T::MAX]`.
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidRange`] if `max < min`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::bound::cyclic_wrap;
/// assert_eq!(cyclic_wrap(15, 0, 10), Ok(4));
/// assert_eq!(cyclic_wrap(-1, 0, 10), Ok(10));
/// assert_eq!(cyclic_wrap(7, 3, 3), Ok(3));
/// assert_eq!(cyclic_wrap(5, i64::MIN, i64::MAX), Ok(5));
/// ```
pub fn cyclic_wrap<T>(value: T, min: T, max: T) -> Result<T, ConstraintError>
where
    T: SignedInteger,
{
    if max < min {
        return Err(invalid_range(min, max));
    }
    if min <= value && value <= max {
        return Ok(value);
    }

    let (lo, hi, v) = (widen(min), widen(max), widen(value));
    // A ring spanning all of i128 holds every value, so `size` cannot overflow here.
    let size = distance(lo, hi) + 1;
    let slot = if v >= lo {
        distance(lo, v) % size
    } else {
        (size - distance(v, lo) % size) % size
    };
    step_from(min, slot)
}

/// Reflects `value` into `[min, max]` as if it bounced off both walls.
///
/// With `range = max - min`, the offset `(value - min) mod 2 * range` walks up
/// from `min` for the first `range` steps and back down from `max` for the
/// next `range` steps. Values already in range are returned unchanged. The
/// fold is symmetric around `min`, so it runs on the `u128` distance
/// `|value - min|` and accepts every range representable in `T`.
///
/// # Errors
///
/// Returns [`ConstraintError::InvalidRange`] if `max <= min`.
///
/// # Examples
///
/// ```rust
/// # use tether_core::math::bound::bounce;
/// assert_eq!(bounce(15, 0, 10), Ok(5));
/// assert_eq!(bounce(-3, 0, 10), Ok(3));
/// assert_eq!(bounce(5, 0, i64::MAX), Ok(5));
/// assert!(bounce(4, 2, 2).is_err());
/// ```
pub fn bounce<T>(value: T, min: T, max: T) -> Result<T, ConstraintError>
where
    T: SignedInteger,
{
    if max <= min {
        return Err(invalid_range(min, max));
    }
    if min <= value && value <= max {
        return Ok(value);
    }

    let (lo, hi, v) = (widen(min), widen(max), widen(value));
    let range = distance(lo, hi);
    let offset = if v >= lo { distance(lo, v) } else { distance(v, lo) };
    // A period beyond u128 is longer than any offset, which then folds to itself.
    let folded = match range.checked_mul(2) {
        Some(period) => offset % period,
        None => offset,
    };
    let walk = if folded > range {
        range - (folded - range)
    } else {
        folded
    };
    step_from(min, walk)
}

/// The distance `hi - lo` for `lo <= hi`, exact over the whole `i128` domain.
#[inline]
fn distance(lo: i128, hi: i128) -> u128 {
    hi.wrapping_sub(lo) as u128
}

/// Returns `min + steps`, where the caller guarantees the sum lies in range.
#[inline]
fn step_from<T>(min: T, steps: u128) -> Result<T, ConstraintError>
where
    T: SignedInteger,
{
    let raw = (widen(min) as u128).wrapping_add(steps) as i128;
    <T as NumCast>::from(raw).ok_or(ConstraintError::Overflow)
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
    fn test_clamp_in_range_is_identity() {
        for v in 0..=10 {
            assert_eq!(clamp(v, 0, 10), v);
        }
    }

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp(15, 0, 10), 10);
        assert_eq!(clamp(-15, 0, 10), 0);
        assert_eq!(clamp(i64::MAX, -1, 1), 1);
    }

    #[test]
    fn test_clamp_degenerate_range_yields_min() {
        assert_eq!(clamp(5, 10, 0), 10);
        assert_eq!(clamp(-5, 10, 0), 10);
        assert_eq!(clamp(50, 10, 0), 10);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(0.5), 0.5);
        assert_eq!(clamp01(1.4), 1.0);
        assert_eq!(clamp01(-0.1), 0.0);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
        assert_eq!(clamp01(f64::NEG_INFINITY), 0.0);
        assert!(clamp01(f64::NAN).is_nan());
    }

    #[test]
    fn test_cyclic_wrap_basic() {
        assert_eq!(cyclic_wrap(15, 0, 10), Ok(4));
        assert_eq!(cyclic_wrap(11, 0, 10), Ok(0));
        assert_eq!(cyclic_wrap(10, 0, 10), Ok(10));
        assert_eq!(cyclic_wrap(-1, 0, 10), Ok(10));
        assert_eq!(cyclic_wrap(-12, 0, 10), Ok(10));
    }

    #[test]
    fn test_cyclic_wrap_offset_range() {
        // Ring 5..=9 has five slots.
        assert_eq!(cyclic_wrap(10, 5, 9), Ok(5));
        assert_eq!(cyclic_wrap(4, 5, 9), Ok(9));
        assert_eq!(cyclic_wrap(-3, -2, 2), Ok(2));
    }

    #[test]
    fn test_cyclic_wrap_zero_width() {
        assert_eq!(cyclic_wrap(42, 3, 3), Ok(3));
        assert_eq!(cyclic_wrap(-42, 3, 3), Ok(3));
    }

    #[test]
    fn test_cyclic_wrap_inverted_range() {
        assert_eq!(
            cyclic_wrap(1, 10, 0),
            Err(ConstraintError::InvalidRange { min: 10, max: 0 })
        );
    }

    #[test]
    fn test_cyclic_wrap_full_width_rings() {
        assert_eq!(cyclic_wrap(0i8, i8::MIN, i8::MAX), Ok(0));
        assert_eq!(cyclic_wrap(5i64, i64::MIN, i64::MAX), Ok(5));
        assert_eq!(cyclic_wrap(i128::MIN, i128::MIN, i128::MAX), Ok(i128::MIN));
        // The ring -1..=i64::MAX has i64::MAX + 2 slots, so MIN lands on 1.
        assert_eq!(cyclic_wrap(i64::MIN, -1, i64::MAX), Ok(1));
        assert_eq!(cyclic_wrap(i8::MAX, i8::MIN, 100), Ok(-102));
        assert_eq!(cyclic_wrap(i8::MIN, -100, i8::MAX), Ok(100));
    }

    #[test]
    fn test_bounce_basic() {
        assert_eq!(bounce(15, 0, 10), Ok(5));
        assert_eq!(bounce(10, 0, 10), Ok(10));
        assert_eq!(bounce(20, 0, 10), Ok(0));
        assert_eq!(bounce(21, 0, 10), Ok(1));
        assert_eq!(bounce(-1, 0, 10), Ok(1));
        assert_eq!(bounce(-10, 0, 10), Ok(10));
    }

    #[test]
    fn test_bounce_offset_range() {
        assert_eq!(bounce(12, 5, 10), Ok(8));
        assert_eq!(bounce(3, 5, 10), Ok(7));
    }

    #[test]
    fn test_bounce_is_periodic() {
        for v in -50..50 {
            assert_eq!(bounce(v, 2, 7), bounce(v + 10, 2, 7));
        }
    }

    #[test]
    fn test_bounce_rejects_zero_width() {
        assert_eq!(
            bounce(4, 2, 2),
            Err(ConstraintError::InvalidRange { min: 2, max: 2 })
        );
        assert_eq!(
            bounce(4, 3, 2),
            Err(ConstraintError::InvalidRange { min: 3, max: 2 })
        );
    }

    #[test]
    fn test_bounce_wide_ranges() {
        assert_eq!(bounce(0i8, 0, 100), Ok(0));
        assert_eq!(bounce(120i8, 0, 100), Ok(80));
        assert_eq!(bounce(i8::MIN, 0, 100), Ok(72));
        assert_eq!(bounce(5i64, 0, i64::MAX), Ok(5));
        assert_eq!(bounce(-5i64, 0, i64::MAX), Ok(5));
        assert_eq!(bounce(i64::MAX, -10, i64::MAX - 5), Ok(i64::MAX - 10));
        assert_eq!(bounce(1i32, -2_000_000_000, 2_000_000_000), Ok(1));
        assert_eq!(bounce(i32::MIN, -2_000_000_000, 2_000_000_000), Ok(-1_852_516_352));
    }

    #[test]
    fn test_bounce_full_i128_range() {
        assert_eq!(bounce(7i128, i128::MIN, i128::MAX), Ok(7));
        assert_eq!(bounce(i128::MAX, i128::MIN + 1, i128::MAX - 1), Ok(i128::MAX - 2));
        assert_eq!(bounce(i128::MIN, i128::MIN + 1, i128::MAX - 1), Ok(i128::MIN + 2));
    }
}
