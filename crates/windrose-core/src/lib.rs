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

//! # Windrose Core
//!
//! Foundational slice and numeric primitives for the windrose crates. This
//! crate consolidates the small, allocation-free building blocks shared by
//! the higher-level search crate: in-place buffer rearrangement and exact
//! integer distance computation.
//!
//! ## Modules
//!
//! - `arrange`: In-place rearrangement of mutable buffers — unbiased
//!   Fisher–Yates shuffling driven by a caller-supplied random source, and
//!   conditional reversal. Exposed as extension traits on `[T]`.
//! - `num`: Exact absolute-distance computation over the full signed 64-bit
//!   domain, free of the overflow hazards of naive subtraction.
//!
//! ## Purpose
//!
//! These primitives keep caller-owned data caller-owned: every operation
//! borrows its input for the duration of a single call, mutates in place
//! where asked to, and retains nothing. Randomness is always injected,
//! never ambient, so every caller can decide between reproducibility and
//! entropy.
//!
//! Refer to each module for detailed APIs and examples.

pub mod arrange;
pub mod num;
