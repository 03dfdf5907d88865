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

//! # Buffer Arrangement
//!
//! In-place rearrangement of mutable, randomly indexable buffers. Both
//! operations run in linear time, allocate nothing, and mutate the
//! caller-owned storage directly.
//!
//! ## Submodules
//!
//! - `shuffle`: Unbiased Fisher–Yates permutation (`ShuffleExt`) driven by
//!   a caller-supplied `Rng`, so output is seedable and reproducible.
//! - `reverse`: Conditional in-place reversal (`ReverseIfExt`) for callers
//!   that toggle element order on a flag.
//!
//! ## Motivation
//!
//! Ordering tweaks on small buffers show up all over sequence-handling
//! code. Keeping them as extension traits on `[T]` lets any `Vec`, array,
//! or slice pick them up without wrapper types, and keeping the random
//! source a parameter keeps tests deterministic.

pub mod reverse;
pub mod shuffle;
