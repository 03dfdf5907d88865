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

/// Returns the exact absolute distance `|a - b|` as an unsigned value.
///
/// The widened `u64` result holds every possible distance between two
/// `i64` values, so the subtraction cannot overflow even for operands at
/// opposite ends of the domain.
///
/// # Examples
///
/// ```rust
/// use windrose_core::num::distance::absolute_distance;
///
/// assert_eq!(absolute_distance(9, 10), 1);
/// assert_eq!(absolute_distance(10, 9), 1);
/// assert_eq!(absolute_distance(i64::MAX, i64::MIN), u64::MAX);
/// ```
#[inline(always)]
pub const fn absolute_distance(a: i64, b: i64) -> u64 {
    a.abs_diff(b)
}
