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

//! # Search Kernel
//!
//! The single pass every public entry point shares. The kernel walks the
//! sequence once, skips keys the directional constraint does not admit,
//! and keeps the running best candidate. The comparison is strict, so a
//! later element can only displace the incumbent by being genuinely
//! closer; ties on distance resolve to the element encountered first in
//! iteration order.
//!
//! ## Invariants
//!
//! - Exactly one forward pass; the sequence is never materialized.
//! - Distance arithmetic happens in widened `i64`/`u64` space and is exact
//!   for every admissible key.
//! - An empty admitted set is reported as `None`, never as a default key.

use crate::{bound::Bound, num::NearestKey, result::NearestMatch};
use windrose_core::num::distance::absolute_distance;

/// Scans `items` for the element whose key is nearest to `target` among
/// the keys admitted by `bound`.
///
/// `key` projects each element to its integer key and must be pure; it is
/// invoked exactly once per element. Returns `None` when no element is
/// admitted, including for an empty sequence.
///
/// Runs in O(n) time and O(1) space for a sequence of length n.
///
/// # Examples
///
/// ```rust
/// use windrose_search::{bound::Bound, scan::nearest_match};
///
/// let found = nearest_match([1, 4, 9, 15], 10, Bound::Any, |k| *k)
///     .expect("sequence is non-empty");
/// assert_eq!(found.key, 9);
/// assert_eq!(found.distance, 1);
///
/// assert!(nearest_match([1, 4], 10, Bound::Above, |k| *k).is_none());
/// ```
pub fn nearest_match<I, K, F>(
    items: I,
    target: K,
    bound: Bound,
    mut key: F,
) -> Option<NearestMatch<I::Item, K>>
where
    I: IntoIterator,
    K: NearestKey,
    F: FnMut(&I::Item) -> K,
{
    let target_wide: i64 = target.into();
    let mut best: Option<NearestMatch<I::Item, K>> = None;

    for element in items {
        let candidate = key(&element);
        let candidate_wide: i64 = candidate.into();
        if !bound.admits(candidate_wide, target_wide) {
            continue;
        }

        let distance = absolute_distance(candidate_wide, target_wide);
        let closer = match &best {
            Some(incumbent) => distance < incumbent.distance,
            None => true,
        };
        if closer {
            best = Some(NearestMatch::new(element, candidate, distance));
        }
    }

    best
}
