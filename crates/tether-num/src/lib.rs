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


//! # Tether
//!
//! Self-constraining numeric values: integers and floats that re-establish
//! a range or modulus invariant on construction and after every arithmetic
//! result, so callers never have to re-validate.
//!
//! ## Modules
//!
//! - `bounded`: `Bounded<T, S>` integers confined to `[min, max]` by a
//!   clamp, cyclic-wrap or bounce strategy, and the runtime-selected
//!   `BoundedValue<T>` built by `bounded_int`.
//! - `modular`: `ModularInt<T>` residue arithmetic with multiplicative
//!   inverses, and the lazy `ModularRange<T>` iterator.
//! - `unit`: `UnitFloat<F>` (clamped at construction) and
//!   `EnforcedUnitFloat<F>` (clamped after every operation).
//!
//! All values are immutable `Copy` types; operations return new values and
//! are safe to share across threads. Errors are reported as
//! [`ConstraintError`], re-exported from `tether-core`.
//!
//! ```rust
//! use tether_num::{
//!     bounded::{BoundKind, bounded_int},
//!     modular::ModularInt,
//!     unit::EnforcedUnitFloat,
//! };
//!
//! assert_eq!(bounded_int(15, 0, 10, BoundKind::Bounce).unwrap(), 5);
//! assert_eq!(ModularInt::new(3, 10).unwrap().inverse().unwrap(), 7);
//!
//! let level = EnforcedUnitFloat::new(0.9).unwrap() + 0.5;
//! assert_eq!(level, 1.0);
//! ```

mod arith;
pub mod bounded;
pub mod modular;
pub mod unit;

pub use tether_core::{error::ConstraintError, math::range::ClosedRange, num::SignedInteger};
