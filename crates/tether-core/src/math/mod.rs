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


//! # Math Primitives
//!
//! The building blocks constrained values are computed from.
//!
//! ## Submodules
//!
//! - `bound`: The three bounding strategies (`clamp`, `cyclic_wrap`, `bounce`)
//!   plus `clamp01` for unit-interval floats.
//! - `range`: `ClosedRange<T>`, a validated inclusive `[min, max]` pair with
//!   containment checks and conversions to/from `RangeInclusive`.
//! - `euclid`: `gcd`, floored division/modulo and the extended Euclidean
//!   algorithm for multiplicative inverses.
//! - `modular`: Overflow-free addition, subtraction, negation,
//!   multiplication and exponentiation of reduced residues.

pub mod bound;
pub mod euclid;
pub mod modular;
pub mod range;
