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

use crate::bound::Bound;

/// A winning candidate produced by the search kernel.
///
/// Carries the element itself, the key it was ranked by, and its exact
/// distance to the target. The public entry points unwrap this into
/// whichever piece the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearestMatch<T, K> {
    /// The element whose key won the distance comparison.
    pub element: T,
    /// The key of the winning element.
    pub key: K,
    /// The exact absolute distance between `key` and the target.
    pub distance: u64,
}

impl<T, K> NearestMatch<T, K> {
    /// Creates a new `NearestMatch`.
    #[inline]
    pub fn new(element: T, key: K, distance: u64) -> Self {
        Self {
            element,
            key,
            distance,
        }
    }
}

/// The error returned when no element of the sequence satisfies the
/// directional constraint.
///
/// Produced by the failing search forms; the `_or_none` forms map the same
/// condition to `None` instead. A search can only fail this one way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMatch {
    bound: Bound,
    target: i64,
}

impl NoMatch {
    /// Creates a new `NoMatch` for the given constraint and target.
    #[inline]
    pub fn new(bound: Bound, target: i64) -> Self {
        Self { bound, target }
    }

    /// The directional constraint that filtered out every key.
    #[inline]
    pub const fn bound(&self) -> Bound {
        self.bound
    }

    /// The target the search was aimed at, widened to `i64`.
    #[inline]
    pub const fn target(&self) -> i64 {
        self.target
    }
}

impl std::fmt::Display for NoMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bound {
            Bound::Any => write!(f, "the sequence yields no keys"),
            bound => write!(f, "no key {} {} in the sequence", bound, self.target),
        }
    }
}

impl std::error::Error for NoMatch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_match_exposes_all_parts() {
        let found = NearestMatch::new("berth", 12i32, 2u64);
        assert_eq!(found.element, "berth");
        assert_eq!(found.key, 12);
        assert_eq!(found.distance, 2);
    }

    #[test]
    fn test_no_match_reports_bound_and_target() {
        let err = NoMatch::new(Bound::AtLeast, 10);
        assert_eq!(err.bound(), Bound::AtLeast);
        assert_eq!(err.target(), 10);
    }

    #[test]
    fn test_no_match_display_names_the_constraint() {
        let err = NoMatch::new(Bound::Above, 5);
        assert_eq!(format!("{}", err), "no key above 5 in the sequence");

        let empty = NoMatch::new(Bound::Any, 5);
        assert_eq!(format!("{}", empty), "the sequence yields no keys");
    }

    #[test]
    fn test_no_match_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NoMatch::new(Bound::Below, -3));
        assert_eq!(err.to_string(), "no key below -3 in the sequence");
    }
}
