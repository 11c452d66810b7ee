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


//! # Bounded Integers
//!
//! Integers confined to a fixed range by a bounding strategy.
//!
//! ## Submodules
//!
//! - `strategy`: The `BoundingStrategy` trait, its `Clamp`, `CyclicWrap` and
//!   `Bounce` markers, and the runtime tag `BoundKind`.
//! - `int`: `Bounded<T, S>` and the `ClampedInt`, `CyclicInt` and
//!   `BouncedInt` aliases, with strategy-preserving `+`, `-` and `*`.
//! - `value`: `BoundedValue<T>` and `bounded_int`, selecting the strategy
//!   (including modulo) at runtime.

pub mod int;
pub mod strategy;
pub mod value;

pub use int::{BouncedInt, Bounded, ClampedInt, CyclicInt};
pub use strategy::{BoundKind, Bounce, BoundingStrategy, Clamp, CyclicWrap};
pub use value::{BoundedValue, bounded_int};
