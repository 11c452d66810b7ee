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


//! # Tether Core
//!
//! Foundational numerics for self-constraining values. This crate holds the
//! pure functions and small value types the `tether-num` crate builds its
//! bounded integers, modular integers and unit-interval floats on.
//!
//! ## Modules
//!
//! - `error`: `ConstraintError`, the single error type reported whenever a
//!   range, modulus, step or operand is rejected.
//! - `math`: Bounding strategies (clamp, cyclic wrap, bounce), the inclusive
//!   `ClosedRange<T>`, Euclidean helpers (gcd, floored division, modular
//!   inverse) and overflow-free modular arithmetic.
//! - `num`: The `SignedInteger` trait alias over the `num-traits` bounds all
//!   constrained integers share.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod math;
pub mod num;
