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

//! # Windrose Search
//!
//! Nearest-value search over integer-keyed sequences. Given any sequence
//! whose elements carry a signed integer key, this crate locates the element
//! whose key is closest to a caller-supplied target, optionally constrained
//! to one side of the target (strictly above, strictly below, at least, or
//! at most).
//!
//! ## Modules
//!
//! - `num`: The `NearestKey` trait alias collecting the integer bounds a
//!   key type must satisfy.
//! - `bound`: The `Bound` directional constraint applied before distance
//!   comparison.
//! - `result`: The kernel output (`NearestMatch`) and the not-found error
//!   (`NoMatch`).
//! - `scan`: The single-pass search kernel all public entry points share.
//! - `ext`: The `NearestExt` extension trait exposing the full search
//!   surface on any `IntoIterator`.
//!
//! ## Semantics
//!
//! One kernel drives every entry point: walk the sequence once, keep the
//! first admitted element with the smallest `|key - target|`, and report
//! absence explicitly. Ties on distance resolve to the element encountered
//! first in iteration order. Absence is never encoded as a sentinel value:
//! the failing entry points return an error, the tolerant ones return
//! `None`.

pub mod bound;
pub mod ext;
pub mod num;
pub mod result;
pub mod scan;
