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

use rand::Rng;

/// An extension trait that adds unbiased in-place shuffling to `[T]`.
///
/// The random source is always passed in by the caller. Seed it for
/// reproducible permutations, or hand in a thread-local generator for
/// entropy; the buffer itself never touches global state.
pub trait ShuffleExt {
    /// Permutes the buffer in place using the Fisher–Yates algorithm.
    ///
    /// Walks the index `n` downward from `len() - 1` to `1`, draws a
    /// uniform index `k` in `[0, n]` from `rng`, and swaps positions `k`
    /// and `n`. Given a uniform `rng`, every permutation of the buffer is
    /// equally likely. Runs in linear time with no auxiliary storage.
    ///
    /// Returns the buffer again so calls can be chained. Empty and
    /// single-element buffers are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use windrose_core::arrange::shuffle::ShuffleExt;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut deck = [1, 2, 3, 4, 5];
    /// deck.shuffle(&mut rng);
    ///
    /// let mut sorted = deck;
    /// sorted.sort();
    /// assert_eq!(sorted, [1, 2, 3, 4, 5]); // still a permutation
    /// ```
    fn shuffle<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: Rng + ?Sized;
}

impl<T> ShuffleExt for [T] {
    fn shuffle<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: Rng + ?Sized,
    {
        for n in (1..self.len()).rev() {
            let k = rng.gen_range(0..=n);
            self.swap(k, n);
        }
        self
    }
}
