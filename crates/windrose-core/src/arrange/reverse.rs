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

/// An extension trait that adds conditional in-place reversal to `[T]`.
pub trait ReverseIfExt {
    /// Reverses the element order in place when `condition` holds.
    ///
    /// A `false` condition leaves the buffer untouched. Applying the
    /// reversal twice restores the original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use windrose_core::arrange::reverse::ReverseIfExt;
    ///
    /// let mut lanes = [1, 2, 3];
    /// lanes.reverse_if(true);
    /// assert_eq!(lanes, [3, 2, 1]);
    ///
    /// lanes.reverse_if(false);
    /// assert_eq!(lanes, [3, 2, 1]);
    /// ```
    fn reverse_if(&mut self, condition: bool);
}

impl<T> ReverseIfExt for [T] {
    #[inline]
    fn reverse_if(&mut self, condition: bool) {
        if condition {
            self.reverse();
        }
    }
}
