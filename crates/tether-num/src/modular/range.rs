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


//! # Modular Ranges
//!
//! A lazy walk around a residue ring: start at `start mod n`, advance by a
//! fixed step in a chosen direction, and stop as soon as `stop mod n` is
//! reached or an iteration cap runs out.
//!
//! The cap is one of:
//!
//! - `RangeLimit::Detect`: `n / gcd(n, step) + 1` steps, one more than the
//!   length of the cycle the step generates.
//! - `RangeLimit::Infinite`: no cap; the walk only ends on `stop`.
//! - `RangeLimit::Count(k)`: at most `k` items.
//!
//! A `ModularRange` is an explicit cursor. It is not restartable; clone it
//! to get an independent cursor at the same position.
//!
//! ```rust
//! use tether_num::modular::{Direction, RangeLimit, modular_range};
//!
//! let hours: Vec<i64> = modular_range(22, 3, 1, 24, Direction::Increasing, RangeLimit::Detect)
//!     .unwrap()
//!     .map(|h| h.residue())
//!     .collect();
//! assert_eq!(hours, vec![22, 23, 0, 1, 2]);
//! ```

use crate::modular::int::ModularInt;
use std::iter::FusedIterator;
use tether_core::{
    error::{ConstraintError, widen},
    math::{
        euclid::gcd,
        modular::{add_mod, neg_mod, normalize},
    },
    num::SignedInteger,
};

/// The sign applied to the step magnitude of a [`ModularRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Advance by `+step`.
    #[default]
    Increasing,
    /// Advance by `-step`.
    Decreasing,
}

/// How many items a [`ModularRange`] may yield before giving up on `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeLimit {
    /// Cap at the detected cycle length plus one.
    #[default]
    Detect,
    /// No cap.
    Infinite,
    /// Cap at an explicit, strictly positive count.
    Count(usize),
}

/// A lazy sequence of [`ModularInt`] values advancing by a fixed step.
///
/// # Invariants
/// `current`, `stop` and `step` are reduced modulo `modulus`; `step` already
/// carries the direction.
#[derive(Debug, Clone)]
pub struct ModularRange<T = i64>
where
    T: SignedInteger,
{
    current: T,
    stop: T,
    step: T,
    modulus: T,
    remaining: Option<usize>,
}

impl<T> ModularRange<T>
where
    T: SignedInteger,
{
    /// Creates a new modular range.
    ///
    /// `step` is a magnitude; `direction` decides its sign.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidStep`] if `step <= 0`,
    /// [`ConstraintError::InvalidModulus`] if `modulus <= 0` and
    /// [`ConstraintError::InvalidAmount`] for `RangeLimit::Count(0)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_num::modular::{Direction, ModularRange, RangeLimit};
    ///
    /// let r = ModularRange::new(0, 5, 3, 10, Direction::Decreasing, RangeLimit::Detect).unwrap();
    /// let v: Vec<i64> = r.map(|x| x.residue()).collect();
    /// assert_eq!(v, vec![0, 7, 4, 1, 8]);
    /// ```
    pub fn new(
        start: T,
        stop: T,
        step: T,
        modulus: T,
        direction: Direction,
        limit: RangeLimit,
    ) -> Result<Self, ConstraintError> {
        if step <= T::zero() {
            return Err(ConstraintError::InvalidStep { step: widen(step) });
        }

        let start = ModularInt::new(start, modulus)?;
        let stop = normalize(stop, modulus);

        let remaining = match limit {
            RangeLimit::Infinite => None,
            RangeLimit::Detect => detect_cap(step, modulus),
            RangeLimit::Count(0) => return Err(ConstraintError::InvalidAmount),
            RangeLimit::Count(count) => Some(count),
        };

        let step = normalize(step, modulus);
        let step = match direction {
            Direction::Increasing => step,
            Direction::Decreasing => neg_mod(step, modulus),
        };

        Ok(Self {
            current: start.residue(),
            stop,
            step,
            modulus,
            remaining,
        })
    }

    /// Returns the modulus every yielded value carries.
    #[inline]
    pub fn modulus(&self) -> T {
        self.modulus
    }

    /// Returns the number of items the cap still allows, or `None` if the
    /// range is uncapped.
    #[inline]
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.current == self.stop || self.remaining == Some(0)
    }
}

/// The detected cap, `modulus / gcd(modulus, step) + 1`.
///
/// A cap too large for `usize` could never be reached anyway, so it is
/// treated as no cap.
fn detect_cap<T>(step: T, modulus: T) -> Option<usize>
where
    T: SignedInteger,
{
    gcd(modulus, step)
        .and_then(|divisor| (modulus / divisor).checked_add(&T::one()))
        .and_then(|cap| cap.to_usize())
}

/// Creates a [`ModularRange`]; see [`ModularRange::new`].
///
/// # Errors
///
/// See [`ModularRange::new`].
///
/// # Examples
///
/// ```rust
/// # use tether_num::modular::{Direction, RangeLimit, modular_range};
///
/// // start == stop yields nothing.
/// let r = modular_range(4, 14, 3, 10, Direction::Increasing, RangeLimit::Detect).unwrap();
/// assert_eq!(r.count(), 0);
/// ```
pub fn modular_range<T>(
    start: T,
    stop: T,
    step: T,
    modulus: T,
    direction: Direction,
    limit: RangeLimit,
) -> Result<ModularRange<T>, ConstraintError>
where
    T: SignedInteger,
{
    ModularRange::new(start, stop, step, modulus, direction, limit)
}

impl<T> Iterator for ModularRange<T>
where
    T: SignedInteger,
{
    type Item = ModularInt<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }

        let item = ModularInt::from_reduced(self.current, self.modulus);
        self.current = add_mod(self.current, self.step, self.modulus);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            (0, Some(0))
        } else {
            (1, self.remaining)
        }
    }
}

impl<T> FusedIterator for ModularRange<T> where T: SignedInteger {}

#[cfg(test)]
mod tests {
    use super::*;

    fn residues<T: SignedInteger>(range: ModularRange<T>) -> Vec<T> {
        range.map(|x| x.residue()).collect()
    }

    #[test]
    fn test_increasing_until_stop() {
        let r = modular_range(8, 2, 1, 10, Direction::Increasing, RangeLimit::Detect).unwrap();
        assert_eq!(residues(r), vec![8, 9, 0, 1]);
    }

    #[test]
    fn test_decreasing_until_stop() {
        let r = modular_range(2, 8, 1, 10, Direction::Decreasing, RangeLimit::Detect).unwrap();
        assert_eq!(residues(r), vec![2, 1, 0, 9]);
    }

    #[test]
    fn test_start_equals_stop_is_empty() {
        let r = modular_range(0, 0, 3, 10, Direction::Increasing, RangeLimit::Detect).unwrap();
        assert_eq!(r.size_hint(), (0, Some(0)));
        assert_eq!(residues(r), Vec::<i64>::new());
    }

    #[test]
    fn test_detect_caps_unreachable_stop() {
        // Step 4 mod 10 only visits even residues; stop 3 is never reached.
        let r = modular_range(0, 3, 4, 10, Direction::Increasing, RangeLimit::Detect).unwrap();
        assert_eq!(r.remaining(), Some(6)); // 10 / gcd(10, 4) + 1
        assert_eq!(residues(r), vec![0, 4, 8, 2, 6, 0]);
    }

    #[test]
    fn test_explicit_count_caps() {
        let r = modular_range(0, 9, 1, 10, Direction::Increasing, RangeLimit::Count(3)).unwrap();
        assert_eq!(residues(r), vec![0, 1, 2]);
    }

    #[test]
    fn test_infinite_never_ends_on_unreachable_stop() {
        let r = modular_range(0, 1, 2, 4, Direction::Increasing, RangeLimit::Infinite).unwrap();
        assert_eq!(r.remaining(), None);
        assert_eq!(residues_take(r, 7), vec![0, 2, 0, 2, 0, 2, 0]);
    }

    fn residues_take(range: ModularRange, n: usize) -> Vec<i64> {
        range.take(n).map(|x| x.residue()).collect()
    }

    #[test]
    fn test_step_larger_than_modulus() {
        let r = modular_range(0, 5, 13, 10, Direction::Increasing, RangeLimit::Detect).unwrap();
        assert_eq!(residues(r), vec![0, 3, 6, 9, 2]);
    }

    #[test]
    fn test_negative_start_and_stop_are_reduced() {
        let r = modular_range(-1, -3, 1, 10, Direction::Decreasing, RangeLimit::Detect).unwrap();
        assert_eq!(residues(r), vec![9, 8]);
    }

    #[test]
    fn test_items_carry_modulus() {
        let r = modular_range(0, 2, 1, 7, Direction::Increasing, RangeLimit::Detect).unwrap();
        assert!(r.into_iter().all(|x| x.modulus() == 7));
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            modular_range(0, 5, 0, 10, Direction::Increasing, RangeLimit::Detect).unwrap_err(),
            ConstraintError::InvalidStep { step: 0 }
        );
        assert_eq!(
            modular_range(0, 5, -2, 10, Direction::Decreasing, RangeLimit::Detect).unwrap_err(),
            ConstraintError::InvalidStep { step: -2 }
        );
        assert_eq!(
            modular_range(0, 5, 1, 0, Direction::Increasing, RangeLimit::Detect).unwrap_err(),
            ConstraintError::InvalidModulus { modulus: 0 }
        );
        assert_eq!(
            modular_range(0, 5, 1, 10, Direction::Increasing, RangeLimit::Count(0)).unwrap_err(),
            ConstraintError::InvalidAmount
        );
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut r = modular_range(0, 2, 1, 10, Direction::Increasing, RangeLimit::Detect).unwrap();
        assert_eq!(r.next().map(|x| x.residue()), Some(0));
        assert_eq!(r.next().map(|x| x.residue()), Some(1));
        assert_eq!(r.next(), None);
        assert_eq!(r.next(), None);
    }

    #[test]
    fn test_clone_is_independent_cursor() {
        let mut a = modular_range(0, 9, 1, 10, Direction::Increasing, RangeLimit::Detect).unwrap();
        a.next();
        let b = a.clone();
        a.next();
        assert_eq!(residues(b), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(residues(a), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_narrow_type_large_step() {
        let r = modular_range(0i8, 1, 100, 127, Direction::Increasing, RangeLimit::Count(4)).unwrap();
        assert_eq!(residues(r), vec![0, 100, 73, 46]);
    }
}
