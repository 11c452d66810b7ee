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


use crate::{
    error::{ConstraintError, widen},
    math::bound::clamp,
    num::SignedInteger,
};
use std::ops::{Bound, RangeBounds, RangeInclusive};

/// A closed interval `[min, max]` with both bounds inclusive.
///
/// This is the fixed range a bounded value carries for its whole lifetime.
///
/// # Invariants
/// `min` must always be less than or equal to `max`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedRange<T>
where
    T: SignedInteger,
{
    min: T,
    max: T,
}

impl<T> ClosedRange<T>
where
    T: SignedInteger,
{
    /// Creates a new `ClosedRange`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::range::ClosedRange;
    ///
    /// let r = ClosedRange::new(0, 10);
    /// assert_eq!(r.width(), 10);
    /// ```
    #[inline]
    pub fn new(min: T, max: T) -> Self {
        assert!(
            min <= max,
            "Invalid range: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates a new `ClosedRange` if the inputs are valid.
    ///
    /// Returns `None` if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::range::ClosedRange;
    ///
    /// assert!(ClosedRange::try_new(0, 10).is_some());
    /// assert!(ClosedRange::try_new(3, 3).is_some());
    /// assert!(ClosedRange::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(min: T, max: T) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns `max - min`, the distance between the bounds.
    ///
    /// A single-point range has width zero.
    ///
    /// # Panics
    ///
    /// Panics on overflow if the distance does not fit in `T`.
    #[inline]
    pub fn width(&self) -> T {
        self.max - self.min
    }

    /// Returns `true` if the range contains exactly one value.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Checks whether `value` lies within `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tether_core::math::range::ClosedRange;
    ///
    /// let r = ClosedRange::new(0, 10);
    /// assert!(r.contains_point(0));
    /// assert!(r.contains_point(10));
    /// assert!(!r.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamps `value` into the range.
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        clamp(value, self.min, self.max)
    }
}

impl<T> std::fmt::Debug for ClosedRange<T>
where
    T: SignedInteger,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosedRange[{}, {}]", self.min, self.max)
    }
}

impl<T> std::fmt::Display for ClosedRange<T>
where
    T: SignedInteger,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl<T> RangeBounds<T> for ClosedRange<T>
where
    T: SignedInteger,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.min)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.max)
    }
}

impl<T> TryFrom<RangeInclusive<T>> for ClosedRange<T>
where
    T: SignedInteger,
{
    type Error = ConstraintError;

    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (min, max) = range.into_inner();
        Self::try_new(min, max).ok_or(ConstraintError::InvalidRange {
            min: widen(min),
            max: widen(max),
        })
    }
}

impl<T> From<ClosedRange<T>> for RangeInclusive<T>
where
    T: SignedInteger,
{
    fn from(range: ClosedRange<T>) -> Self {
        range.min..=range.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let r = ClosedRange::new(-5, 5);
        assert_eq!(r.min(), -5);
        assert_eq!(r.max(), 5);
        assert_eq!(r.width(), 10);
        assert!(!r.is_point());
    }

    #[test]
    #[should_panic(expected = "Invalid range")]
    fn test_new_panic() {
        ClosedRange::new(10, 5);
    }

    #[test]
    fn test_point_range() {
        let r = ClosedRange::new(3, 3);
        assert!(r.is_point());
        assert_eq!(r.width(), 0);
        assert!(r.contains_point(3));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let r = ClosedRange::new(0, 10);
        assert!(r.contains_point(0)); // Inclusive start
        assert!(r.contains_point(10)); // Inclusive end
        assert!(!r.contains_point(-1));
        assert!(!r.contains_point(11));
    }

    #[test]
    fn test_clamp() {
        let r = ClosedRange::new(0, 10);
        assert_eq!(r.clamp(15), 10);
        assert_eq!(r.clamp(-15), 0);
        assert_eq!(r.clamp(7), 7);
    }

    #[test]
    fn test_display_debug() {
        let r = ClosedRange::new(1, 4);
        assert_eq!(r.to_string(), "[1, 4]");
        assert_eq!(format!("{:?}", r), "ClosedRange[1, 4]");
    }

    #[test]
    fn test_range_inclusive_conversions() {
        let r = ClosedRange::try_from(2..=8).unwrap();
        assert_eq!((r.min(), r.max()), (2, 8));
        assert!(r.contains(&8));

        let back: RangeInclusive<i32> = r.into();
        assert_eq!(back, 2..=8);

        assert_eq!(
            ClosedRange::try_from(8..=2),
            Err(ConstraintError::InvalidRange { min: 8, max: 2 })
        );
    }
}
