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

//! # Search Surface
//!
//! The `NearestExt` extension trait, blanket-implemented for every sized
//! `IntoIterator`. All entry points are thin wrappers over the kernel in
//! `scan`: three parameterized methods take an explicit [`Bound`], and the
//! named families fix the bound for the common cases. Each family offers a
//! failing form (`Result`) and a tolerant form (`Option`), over plain keys,
//! projected keys, and whole elements.
//!
//! Sequences of references work through the standard adaptors: borrow a
//! `Vec<i32>` as `v.iter().copied()` and every method is available.

use crate::bound::Bound;
use crate::num::NearestKey;
use crate::result::NoMatch;
use crate::scan::nearest_match;

macro_rules! bounded_search_methods {
    (
        $bound:expr,
        $phrase:literal,
        $nearest:ident,
        $nearest_or_none:ident,
        $nearest_by_key:ident,
        $nearest_by_key_or_none:ident,
        $find:ident,
        $find_or_none:ident
    ) => {
        #[doc = concat!("Returns the key nearest to `target`, considering only keys ", $phrase, ".")]
        ///
        /// # Errors
        ///
        /// Returns [`NoMatch`] when no admissible key exists.
        #[inline]
        fn $nearest(self, target: Self::Item) -> Result<Self::Item, NoMatch>
        where
            Self::Item: NearestKey,
        {
            self.nearest_bounded(target, $bound)
        }

        #[doc = concat!("Returns the key nearest to `target` among keys ", $phrase, ", or `None` if there is none.")]
        #[inline]
        fn $nearest_or_none(self, target: Self::Item) -> Option<Self::Item>
        where
            Self::Item: NearestKey,
        {
            self.nearest_bounded(target, $bound).ok()
        }

        #[doc = concat!("Returns the projected key nearest to `target`, considering only keys ", $phrase, ".")]
        ///
        /// # Errors
        ///
        /// Returns [`NoMatch`] when no admissible key exists.
        #[inline]
        fn $nearest_by_key<K, F>(self, target: K, key: F) -> Result<K, NoMatch>
        where
            K: NearestKey,
            F: FnMut(&Self::Item) -> K,
        {
            self.nearest_bounded_by_key(target, $bound, key)
        }

        #[doc = concat!("Returns the projected key nearest to `target` among keys ", $phrase, ", or `None` if there is none.")]
        #[inline]
        fn $nearest_by_key_or_none<K, F>(self, target: K, key: F) -> Option<K>
        where
            K: NearestKey,
            F: FnMut(&Self::Item) -> K,
        {
            self.nearest_bounded_by_key(target, $bound, key).ok()
        }

        #[doc = concat!("Returns the element whose key is nearest to `target`, considering only keys ", $phrase, ".")]
        ///
        /// # Errors
        ///
        /// Returns [`NoMatch`] when no admissible key exists.
        #[inline]
        fn $find<K, F>(self, target: K, key: F) -> Result<Self::Item, NoMatch>
        where
            K: NearestKey,
            F: FnMut(&Self::Item) -> K,
        {
            self.find_nearest_bounded(target, $bound, key)
        }

        #[doc = concat!("Returns the element whose key is nearest to `target` among keys ", $phrase, ", or `None` if there is none.")]
        #[inline]
        fn $find_or_none<K, F>(self, target: K, key: F) -> Option<Self::Item>
        where
            K: NearestKey,
            F: FnMut(&Self::Item) -> K,
        {
            self.find_nearest_bounded(target, $bound, key).ok()
        }
    };
}

/// Nearest-value search methods, available on every sized `IntoIterator`.
///
/// Ties on distance always resolve to the element encountered first in
/// iteration order; this holds for every method of the trait.
pub trait NearestExt: IntoIterator + Sized {
    /// Returns the key nearest to `target` among the keys admitted by
    /// `bound`.
    ///
    /// This is the parameterized core behind the named key-returning
    /// methods; prefer those when the constraint is fixed at the call
    /// site.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] when no key is admitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windrose_search::{bound::Bound, ext::NearestExt};
    ///
    /// let depths = [1, 4, 9, 15];
    /// assert_eq!(depths.nearest_bounded(10, Bound::Above), Ok(15));
    /// assert!(depths.nearest_bounded(20, Bound::Above).is_err());
    /// ```
    #[inline]
    fn nearest_bounded(self, target: Self::Item, bound: Bound) -> Result<Self::Item, NoMatch>
    where
        Self::Item: NearestKey,
    {
        match nearest_match(self, target, bound, |key| *key) {
            Some(found) => Ok(found.key),
            None => Err(NoMatch::new(bound, target.into())),
        }
    }

    /// Returns the projected key nearest to `target` among the keys
    /// admitted by `bound`, with `key` mapping each element to its key.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] when no key is admitted.
    #[inline]
    fn nearest_bounded_by_key<K, F>(self, target: K, bound: Bound, key: F) -> Result<K, NoMatch>
    where
        K: NearestKey,
        F: FnMut(&Self::Item) -> K,
    {
        match nearest_match(self, target, bound, key) {
            Some(found) => Ok(found.key),
            None => Err(NoMatch::new(bound, target.into())),
        }
    }

    /// Returns the element whose key is nearest to `target` among the keys
    /// admitted by `bound`, with `key` mapping each element to its key.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] when no key is admitted.
    #[inline]
    fn find_nearest_bounded<K, F>(self, target: K, bound: Bound, key: F) -> Result<Self::Item, NoMatch>
    where
        K: NearestKey,
        F: FnMut(&Self::Item) -> K,
    {
        match nearest_match(self, target, bound, key) {
            Some(found) => Ok(found.element),
            None => Err(NoMatch::new(bound, target.into())),
        }
    }

    /// Returns the key of the sequence nearest to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] if the sequence yields no keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windrose_search::ext::NearestExt;
    ///
    /// let depths = [1, 4, 9, 15];
    /// assert_eq!(depths.nearest(10), Ok(9));
    /// assert_eq!(depths.nearest(12), Ok(9)); // tie with 15 resolves to the earlier 9
    /// ```
    #[inline]
    fn nearest(self, target: Self::Item) -> Result<Self::Item, NoMatch>
    where
        Self::Item: NearestKey,
    {
        self.nearest_bounded(target, Bound::Any)
    }

    /// Returns the key of the sequence nearest to `target`, or `None` for
    /// an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windrose_search::ext::NearestExt;
    ///
    /// let empty: [i32; 0] = [];
    /// assert_eq!(empty.nearest_or_none(3), None);
    /// assert_eq!([2, 8].nearest_or_none(3), Some(2));
    /// ```
    #[inline]
    fn nearest_or_none(self, target: Self::Item) -> Option<Self::Item>
    where
        Self::Item: NearestKey,
    {
        self.nearest_bounded(target, Bound::Any).ok()
    }

    /// Returns the projected key nearest to `target`, with `key` mapping
    /// each element to its key.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] if the sequence yields no keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windrose_search::ext::NearestExt;
    ///
    /// let berths = [("alpha", 3), ("bravo", 12)];
    /// assert_eq!(berths.nearest_by_key(10, |b| b.1), Ok(12));
    /// ```
    #[inline]
    fn nearest_by_key<K, F>(self, target: K, key: F) -> Result<K, NoMatch>
    where
        K: NearestKey,
        F: FnMut(&Self::Item) -> K,
    {
        self.nearest_bounded_by_key(target, Bound::Any, key)
    }

    /// Returns the projected key nearest to `target`, or `None` for an
    /// empty sequence.
    #[inline]
    fn nearest_by_key_or_none<K, F>(self, target: K, key: F) -> Option<K>
    where
        K: NearestKey,
        F: FnMut(&Self::Item) -> K,
    {
        self.nearest_bounded_by_key(target, Bound::Any, key).ok()
    }

    /// Returns the element whose key is nearest to `target`, with `key`
    /// mapping each element to its key.
    ///
    /// # Errors
    ///
    /// Returns [`NoMatch`] if the sequence yields no keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windrose_search::ext::NearestExt;
    ///
    /// let berths = [("alpha", 3), ("bravo", 12)];
    /// let best = berths.find_nearest(10, |b| b.1).expect("non-empty");
    /// assert_eq!(best.0, "bravo");
    /// ```
    #[inline]
    fn find_nearest<K, F>(self, target: K, key: F) -> Result<Self::Item, NoMatch>
    where
        K: NearestKey,
        F: FnMut(&Self::Item) -> K,
    {
        self.find_nearest_bounded(target, Bound::Any, key)
    }

    /// Returns the element whose key is nearest to `target`, or `None`
    /// for an empty sequence.
    #[inline]
    fn find_nearest_or_none<K, F>(self, target: K, key: F) -> Option<Self::Item>
    where
        K: NearestKey,
        F: FnMut(&Self::Item) -> K,
    {
        self.find_nearest_bounded(target, Bound::Any, key).ok()
    }

    bounded_search_methods!(
        Bound::Above,
        "strictly above the target",
        nearest_above,
        nearest_above_or_none,
        nearest_above_by_key,
        nearest_above_by_key_or_none,
        find_nearest_above,
        find_nearest_above_or_none
    );

    bounded_search_methods!(
        Bound::Below,
        "strictly below the target",
        nearest_below,
        nearest_below_or_none,
        nearest_below_by_key,
        nearest_below_by_key_or_none,
        find_nearest_below,
        find_nearest_below_or_none
    );

    bounded_search_methods!(
        Bound::AtLeast,
        "at or above the target",
        nearest_at_least,
        nearest_at_least_or_none,
        nearest_at_least_by_key,
        nearest_at_least_by_key_or_none,
        find_nearest_at_least,
        find_nearest_at_least_or_none
    );

    bounded_search_methods!(
        Bound::AtMost,
        "at or below the target",
        nearest_at_most,
        nearest_at_most_or_none,
        nearest_at_most_by_key,
        nearest_at_most_by_key_or_none,
        find_nearest_at_most,
        find_nearest_at_most_or_none
    );
}

impl<I> NearestExt for I where I: IntoIterator + Sized {}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPTHS: [i32; 4] = [1, 4, 9, 15];

    #[test]
    fn test_nearest_minimizes_absolute_distance() {
        assert_eq!(DEPTHS.nearest(10), Ok(9));
        assert_eq!(DEPTHS.nearest(2), Ok(1));
        assert_eq!(DEPTHS.nearest(100), Ok(15));
    }

    #[test]
    fn test_named_bounds_match_their_constraints() {
        assert_eq!(DEPTHS.nearest_above(10), Ok(15));
        assert_eq!(DEPTHS.nearest_below(10), Ok(9));
        assert_eq!(DEPTHS.nearest_at_least(10), Ok(15));
        assert_eq!(DEPTHS.nearest_at_most(10), Ok(9));
    }

    #[test]
    fn test_inclusive_bounds_admit_the_target_itself() {
        assert_eq!(DEPTHS.nearest_at_least(9), Ok(9));
        assert_eq!(DEPTHS.nearest_at_most(9), Ok(9));
        assert_eq!(DEPTHS.nearest_above(9), Ok(15));
        assert_eq!(DEPTHS.nearest_below(9), Ok(4));
    }

    #[test]
    fn test_returned_keys_satisfy_their_bound() {
        for target in -5..25 {
            if let Ok(key) = DEPTHS.nearest_above(target) {
                assert!(key > target);
            }
            if let Ok(key) = DEPTHS.nearest_below(target) {
                assert!(key < target);
            }
            if let Ok(key) = DEPTHS.nearest_at_least(target) {
                assert!(key >= target);
            }
            if let Ok(key) = DEPTHS.nearest_at_most(target) {
                assert!(key <= target);
            }
        }
    }

    #[test]
    fn test_empty_sequence_fails_or_yields_none() {
        let empty: [i32; 0] = [];
        let err = empty.nearest(10).unwrap_err();
        assert_eq!(err.bound(), Bound::Any);
        assert_eq!(err.target(), 10);
        assert_eq!(empty.nearest_or_none(10), None);
    }

    #[test]
    fn test_fully_filtered_sequence_fails_or_yields_none() {
        let err = DEPTHS.nearest_above(20).unwrap_err();
        assert_eq!(err.bound(), Bound::Above);
        assert_eq!(err.target(), 20);
        assert_eq!(format!("{}", err), "no key above 20 in the sequence");

        assert_eq!(DEPTHS.nearest_above_or_none(20), None);
        assert_eq!(DEPTHS.nearest_below_or_none(0), None);
        assert_eq!(DEPTHS.nearest_at_least_or_none(16), None);
        assert_eq!(DEPTHS.nearest_at_most_or_none(0), None);
    }

    #[test]
    fn test_or_none_forms_agree_with_failing_forms_on_success() {
        assert_eq!(DEPTHS.nearest_or_none(10), Some(9));
        assert_eq!(DEPTHS.nearest_above_or_none(10), Some(15));
        assert_eq!(DEPTHS.nearest_at_most_or_none(10), Some(9));
    }

    #[test]
    fn test_tie_resolves_to_first_encountered_key() {
        assert_eq!([7, 13].nearest(10), Ok(7));
        assert_eq!([13, 7].nearest(10), Ok(13));
    }

    #[test]
    fn test_duplicate_keys_resolve_to_first_occurrence() {
        // Track identity through the index so the winning element is
        // observable even though the keys are equal.
        let values = [5, 5, 8];
        let (index, key) = values
            .iter()
            .enumerate()
            .find_nearest(5, |pair| *pair.1)
            .expect("non-empty");
        assert_eq!(index, 0);
        assert_eq!(*key, 5);
    }

    #[test]
    fn test_by_key_forms_project_elements() {
        let berths = [("alpha", 3), ("bravo", 12), ("charlie", 9)];

        assert_eq!(berths.nearest_by_key(10, |b| b.1), Ok(9));
        assert_eq!(berths.nearest_above_by_key(10, |b| b.1), Ok(12));
        assert_eq!(berths.nearest_below_by_key(10, |b| b.1), Ok(9));
        assert_eq!(berths.nearest_at_least_by_key(12, |b| b.1), Ok(12));
        assert!(berths.nearest_at_most_by_key(2, |b| b.1).is_err());
        assert_eq!(berths.nearest_at_most_by_key_or_none(2, |b| b.1), None);
    }

    #[test]
    fn test_find_forms_return_whole_elements() {
        let berths = [("alpha", 3), ("bravo", 12), ("charlie", 9)];

        let best = berths.find_nearest(10, |b| b.1).unwrap();
        assert_eq!(best.0, "charlie");

        let best = berths.find_nearest_above(10, |b| b.1).unwrap();
        assert_eq!(best.0, "bravo");

        let best = berths.find_nearest_at_most(3, |b| b.1).unwrap();
        assert_eq!(best.0, "alpha");

        assert!(berths.find_nearest_below(3, |b| b.1).is_err());
        assert_eq!(berths.find_nearest_below_or_none(3, |b| b.1), None);
    }

    #[test]
    fn test_surface_accepts_iterator_adaptors() {
        let depths: Vec<i32> = vec![1, 4, 9, 15];
        assert_eq!(depths.iter().copied().nearest(10), Ok(9));
        assert_eq!((1..=100).nearest(42), Ok(42));
    }

    #[test]
    fn test_negative_keys_and_targets() {
        let keys = [-20, -7, -1, 6];
        assert_eq!(keys.nearest(-5), Ok(-7));
        assert_eq!(keys.nearest_above(-5), Ok(-1));
        assert_eq!(keys.nearest_at_most(-20), Ok(-20));
        assert_eq!(keys.nearest_below(-20), Err(NoMatch::new(Bound::Below, -20)));
    }

    #[test]
    fn test_parameterized_core_matches_named_wrappers() {
        for target in [-3, 0, 9, 10, 22] {
            assert_eq!(
                DEPTHS.nearest_bounded(target, Bound::Above),
                DEPTHS.nearest_above(target)
            );
            assert_eq!(
                DEPTHS.nearest_bounded(target, Bound::AtMost),
                DEPTHS.nearest_at_most(target)
            );
        }
    }
}
