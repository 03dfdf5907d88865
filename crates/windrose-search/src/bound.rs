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

/// A directional constraint restricting which keys a search may consider.
///
/// The constraint is applied before any distance comparison: keys it does
/// not admit are invisible to the search, as if absent from the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Every key is admitted.
    Any,
    /// Admits keys strictly greater than the target.
    Above,
    /// Admits keys strictly less than the target.
    Below,
    /// Admits keys greater than or equal to the target.
    AtLeast,
    /// Admits keys less than or equal to the target.
    AtMost,
}

impl Bound {
    /// Returns `true` if `key` satisfies this constraint relative to `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windrose_search::bound::Bound;
    ///
    /// assert!(Bound::Above.admits(11, 10));
    /// assert!(!Bound::Above.admits(10, 10));
    /// assert!(Bound::AtLeast.admits(10, 10));
    /// ```
    #[inline(always)]
    pub const fn admits(self, key: i64, target: i64) -> bool {
        match self {
            Bound::Any => true,
            Bound::Above => key > target,
            Bound::Below => key < target,
            Bound::AtLeast => key >= target,
            Bound::AtMost => key <= target,
        }
    }

    /// Returns `true` if this constraint can reject keys.
    #[inline]
    pub const fn is_restrictive(self) -> bool {
        !matches!(self, Bound::Any)
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Any => write!(f, "any"),
            Bound::Above => write!(f, "above"),
            Bound::Below => write!(f, "below"),
            Bound::AtLeast => write!(f, "at least"),
            Bound::AtMost => write!(f, "at most"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_admits_everything() {
        assert!(Bound::Any.admits(i64::MIN, 0));
        assert!(Bound::Any.admits(0, 0));
        assert!(Bound::Any.admits(i64::MAX, 0));
    }

    #[test]
    fn test_above_admits_strictly_greater_keys() {
        assert!(Bound::Above.admits(11, 10));
        assert!(!Bound::Above.admits(10, 10));
        assert!(!Bound::Above.admits(9, 10));
    }

    #[test]
    fn test_below_admits_strictly_smaller_keys() {
        assert!(Bound::Below.admits(9, 10));
        assert!(!Bound::Below.admits(10, 10));
        assert!(!Bound::Below.admits(11, 10));
    }

    #[test]
    fn test_at_least_admits_target_itself() {
        assert!(Bound::AtLeast.admits(10, 10));
        assert!(Bound::AtLeast.admits(11, 10));
        assert!(!Bound::AtLeast.admits(9, 10));
    }

    #[test]
    fn test_at_most_admits_target_itself() {
        assert!(Bound::AtMost.admits(10, 10));
        assert!(Bound::AtMost.admits(9, 10));
        assert!(!Bound::AtMost.admits(11, 10));
    }

    #[test]
    fn test_only_any_is_unrestrictive() {
        assert!(!Bound::Any.is_restrictive());
        assert!(Bound::Above.is_restrictive());
        assert!(Bound::Below.is_restrictive());
        assert!(Bound::AtLeast.is_restrictive());
        assert!(Bound::AtMost.is_restrictive());
    }
}
