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

//! # Nearest Key Trait
//!
//! Unified numeric bounds for the search entry points. `NearestKey`
//! specifies what a key type must provide: intrinsic integer behavior
//! (`PrimInt`, `Signed`) and a lossless widening into `i64`, through which
//! all distance arithmetic is performed.
//!
//! ## Motivation
//!
//! The search surface should stay generic over the caller's integer type
//! while distance computation stays exact. Collecting the bounds into a
//! single alias keeps the generic signatures short and guarantees that
//! every key can be widened without loss before subtraction.
//!
//! Note: `i128` and `isize` are excluded — neither widens losslessly into
//! `i64` via `Into`.

use num_traits::{PrimInt, Signed};

/// A trait alias for the signed integer types usable as search keys.
///
/// Satisfied by `i8`, `i16`, `i32` and `i64`. Distances are always
/// computed after widening through `Into<i64>`, so every admissible key
/// participates in exact arithmetic.
pub trait NearestKey:
    PrimInt + Signed + Into<i64> + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> NearestKey for T where
    T: PrimInt + Signed + Into<i64> + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
