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

//! # Interval Bounds
//!
//! One edge of an interval: a finite value that is part of the set
//! (`Inclusive`), a finite value that is excluded (`Exclusive`), or no
//! constraint at all (`Unbounded`). Unboundedness is a distinct tag rather
//! than a stored infinity, which keeps every comparison exhaustive over
//! three cases per side.
//!
//! Two bounds of the same side are totally ordered. The order differs by
//! side: for lower bounds, `Unbounded` is the least element and, at equal
//! values, an inclusive bound precedes an exclusive one (it admits its own
//! value, so it admits strictly more of the line). For upper bounds the
//! picture mirrors. `lower_cmp` and `upper_cmp` encode these orders and are
//! the single primitive every set operation in this crate reduces to.

use num_traits::Float;
use std::cmp::Ordering;

/// One edge of an interval.
///
/// Finite bound values are always ordinary numbers: the interval
/// constructors reject NaN and normalize infinite inputs to `Unbounded`
/// before a `Bound` is ever stored.
///
/// # Examples
///
/// ```rust
/// # use intervalset::{Bound, Interval};
///
/// let iv = Interval::closed_open(0.0, 10.0);
/// assert_eq!(iv.lower_bound(), Some(Bound::Inclusive(0.0)));
/// assert_eq!(iv.upper_bound(), Some(Bound::Exclusive(10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound<T> {
    /// No constraint on this side. Behaves as open at infinity.
    Unbounded,
    /// A finite bound whose value belongs to the set.
    Inclusive(T),
    /// A finite bound whose value is excluded from the set.
    Exclusive(T),
}

impl<T> Bound<T>
where
    T: Float,
{
    /// Returns the finite bound value, or `None` for `Unbounded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Bound;
    ///
    /// assert_eq!(Bound::Inclusive(3.0).value(), Some(3.0));
    /// assert_eq!(Bound::<f64>::Unbounded.value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<T> {
        match *self {
            Bound::Unbounded => None,
            Bound::Inclusive(v) | Bound::Exclusive(v) => Some(v),
        }
    }

    /// Returns `true` if this side carries no constraint.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    /// Returns `true` if the bound does not include its own value.
    ///
    /// `Unbounded` counts as open: there is no value at infinity to include.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Bound;
    ///
    /// assert!(!Bound::Inclusive(1.0).is_open());
    /// assert!(Bound::Exclusive(1.0).is_open());
    /// assert!(Bound::<f64>::Unbounded.is_open());
    /// ```
    #[inline]
    pub fn is_open(&self) -> bool {
        !matches!(self, Bound::Inclusive(_))
    }

    /// The bound at the same value with complementary openness.
    ///
    /// `Unbounded` has no complementary finite bound and is returned
    /// unchanged.
    #[inline]
    pub fn complementary(self) -> Self {
        match self {
            Bound::Unbounded => Bound::Unbounded,
            Bound::Inclusive(v) => Bound::Exclusive(v),
            Bound::Exclusive(v) => Bound::Inclusive(v),
        }
    }

    /// This bound with a finite value re-tagged as inclusive.
    #[inline]
    pub fn to_inclusive(self) -> Self {
        match self {
            Bound::Exclusive(v) => Bound::Inclusive(v),
            other => other,
        }
    }

    /// This bound with a finite value re-tagged as exclusive.
    #[inline]
    pub fn to_exclusive(self) -> Self {
        match self {
            Bound::Inclusive(v) => Bound::Exclusive(v),
            other => other,
        }
    }
}

/// Total order on finite, non-NaN scalars.
///
/// Construction guarantees that no stored bound value is NaN, so the
/// fall-through branch is the genuine equality case.
#[inline]
fn scalar_cmp<T: Float>(a: T, b: T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Orders two *lower* bounds by how much of the line they admit.
///
/// `Unbounded` admits everything below and is the least element. At equal
/// finite values an inclusive bound admits its value while an exclusive one
/// does not, so `Inclusive(v) < Exclusive(v)`.
#[inline]
pub(crate) fn lower_cmp<T: Float>(a: Bound<T>, b: Bound<T>) -> Ordering {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        (Bound::Unbounded, _) => Ordering::Less,
        (_, Bound::Unbounded) => Ordering::Greater,
        (Bound::Inclusive(x), Bound::Inclusive(y)) | (Bound::Exclusive(x), Bound::Exclusive(y)) => {
            scalar_cmp(x, y)
        }
        (Bound::Inclusive(x), Bound::Exclusive(y)) => scalar_cmp(x, y).then(Ordering::Less),
        (Bound::Exclusive(x), Bound::Inclusive(y)) => scalar_cmp(x, y).then(Ordering::Greater),
    }
}

/// Orders two *upper* bounds by how much of the line they admit.
///
/// `Unbounded` admits everything above and is the greatest element. At equal
/// finite values `Exclusive(v) < Inclusive(v)`.
#[inline]
pub(crate) fn upper_cmp<T: Float>(a: Bound<T>, b: Bound<T>) -> Ordering {
    match (a, b) {
        (Bound::Unbounded, Bound::Unbounded) => Ordering::Equal,
        (Bound::Unbounded, _) => Ordering::Greater,
        (_, Bound::Unbounded) => Ordering::Less,
        (Bound::Inclusive(x), Bound::Inclusive(y)) | (Bound::Exclusive(x), Bound::Exclusive(y)) => {
            scalar_cmp(x, y)
        }
        (Bound::Inclusive(x), Bound::Exclusive(y)) => scalar_cmp(x, y).then(Ordering::Greater),
        (Bound::Exclusive(x), Bound::Inclusive(y)) => scalar_cmp(x, y).then(Ordering::Less),
    }
}

/// Returns `true` if a lower/upper bound pair admits at least one point.
///
/// The scalar domain is treated as dense: an open range with `l < u` is
/// never empty, regardless of whether the host float type can represent a
/// value strictly between the two.
#[inline]
pub(crate) fn span_admits_points<T: Float>(lower: Bound<T>, upper: Bound<T>) -> bool {
    match (lower, upper) {
        (Bound::Unbounded, _) | (_, Bound::Unbounded) => true,
        (Bound::Inclusive(l), Bound::Inclusive(u)) => l <= u,
        (Bound::Inclusive(l), Bound::Exclusive(u))
        | (Bound::Exclusive(l), Bound::Inclusive(u))
        | (Bound::Exclusive(l), Bound::Exclusive(u)) => l < u,
    }
}

/// Returns `true` if an upper bound and a lower bound touch at one value
/// with complementary openness, leaving no gap and no overlap.
#[inline]
pub(crate) fn meets<T: Float>(upper: Bound<T>, lower: Bound<T>) -> bool {
    match (upper, lower) {
        (Bound::Inclusive(u), Bound::Exclusive(l)) | (Bound::Exclusive(u), Bound::Inclusive(l)) => {
            u == l
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_flags() {
        assert_eq!(Bound::Inclusive(2.0).value(), Some(2.0));
        assert_eq!(Bound::Exclusive(2.0).value(), Some(2.0));
        assert_eq!(Bound::<f64>::Unbounded.value(), None);

        assert!(Bound::<f64>::Unbounded.is_unbounded());
        assert!(!Bound::Inclusive(0.0).is_unbounded());

        assert!(Bound::Exclusive(0.0).is_open());
        assert!(Bound::<f64>::Unbounded.is_open());
        assert!(!Bound::Inclusive(0.0).is_open());
    }

    #[test]
    fn test_complementary() {
        assert_eq!(Bound::Inclusive(1.0).complementary(), Bound::Exclusive(1.0));
        assert_eq!(Bound::Exclusive(1.0).complementary(), Bound::Inclusive(1.0));
        assert_eq!(Bound::<f64>::Unbounded.complementary(), Bound::Unbounded);
    }

    #[test]
    fn test_retagging() {
        assert_eq!(Bound::Exclusive(1.0).to_inclusive(), Bound::Inclusive(1.0));
        assert_eq!(Bound::Inclusive(1.0).to_inclusive(), Bound::Inclusive(1.0));
        assert_eq!(Bound::<f64>::Unbounded.to_inclusive(), Bound::Unbounded);

        assert_eq!(Bound::Inclusive(1.0).to_exclusive(), Bound::Exclusive(1.0));
        assert_eq!(Bound::Exclusive(1.0).to_exclusive(), Bound::Exclusive(1.0));
        assert_eq!(Bound::<f64>::Unbounded.to_exclusive(), Bound::Unbounded);
    }

    #[test]
    fn test_lower_cmp() {
        // Unbounded admits the most and sorts first.
        assert_eq!(lower_cmp::<f64>(Bound::Unbounded, Bound::Unbounded), Ordering::Equal);
        assert_eq!(lower_cmp(Bound::Unbounded, Bound::Inclusive(-1e9)), Ordering::Less);
        assert_eq!(lower_cmp(Bound::Exclusive(5.0), Bound::Unbounded), Ordering::Greater);

        // Distinct values order by value.
        assert_eq!(lower_cmp(Bound::Inclusive(1.0), Bound::Exclusive(2.0)), Ordering::Less);
        assert_eq!(lower_cmp(Bound::Exclusive(3.0), Bound::Inclusive(2.0)), Ordering::Greater);

        // Ties order by inclusivity: inclusive admits its value.
        assert_eq!(lower_cmp(Bound::Inclusive(2.0), Bound::Exclusive(2.0)), Ordering::Less);
        assert_eq!(lower_cmp(Bound::Exclusive(2.0), Bound::Inclusive(2.0)), Ordering::Greater);
        assert_eq!(lower_cmp(Bound::Inclusive(2.0), Bound::Inclusive(2.0)), Ordering::Equal);
        assert_eq!(lower_cmp(Bound::Exclusive(2.0), Bound::Exclusive(2.0)), Ordering::Equal);
    }

    #[test]
    fn test_upper_cmp() {
        // Unbounded admits the most and sorts last.
        assert_eq!(upper_cmp::<f64>(Bound::Unbounded, Bound::Unbounded), Ordering::Equal);
        assert_eq!(upper_cmp(Bound::Unbounded, Bound::Inclusive(1e9)), Ordering::Greater);
        assert_eq!(upper_cmp(Bound::Exclusive(5.0), Bound::Unbounded), Ordering::Less);

        assert_eq!(upper_cmp(Bound::Inclusive(1.0), Bound::Exclusive(2.0)), Ordering::Less);
        assert_eq!(upper_cmp(Bound::Exclusive(3.0), Bound::Inclusive(2.0)), Ordering::Greater);

        // Ties mirror the lower-bound rule.
        assert_eq!(upper_cmp(Bound::Exclusive(2.0), Bound::Inclusive(2.0)), Ordering::Less);
        assert_eq!(upper_cmp(Bound::Inclusive(2.0), Bound::Exclusive(2.0)), Ordering::Greater);
        assert_eq!(upper_cmp(Bound::Inclusive(2.0), Bound::Inclusive(2.0)), Ordering::Equal);
    }

    #[test]
    fn test_span_admits_points() {
        assert!(span_admits_points::<f64>(Bound::Unbounded, Bound::Unbounded));
        assert!(span_admits_points(Bound::Unbounded, Bound::Exclusive(0.0)));
        assert!(span_admits_points(Bound::Exclusive(0.0), Bound::Unbounded));

        assert!(span_admits_points(Bound::Inclusive(0.0), Bound::Inclusive(0.0)));
        assert!(!span_admits_points(Bound::Inclusive(0.0), Bound::Exclusive(0.0)));
        assert!(!span_admits_points(Bound::Exclusive(0.0), Bound::Inclusive(0.0)));
        assert!(!span_admits_points(Bound::Exclusive(0.0), Bound::Exclusive(0.0)));

        assert!(span_admits_points(Bound::Exclusive(0.0), Bound::Exclusive(1.0)));
        assert!(!span_admits_points(Bound::Inclusive(1.0), Bound::Inclusive(0.0)));
    }

    #[test]
    fn test_meets() {
        assert!(meets(Bound::Inclusive(5.0), Bound::Exclusive(5.0)));
        assert!(meets(Bound::Exclusive(5.0), Bound::Inclusive(5.0)));

        // Same openness either overlaps or leaves a one-point gap.
        assert!(!meets(Bound::Inclusive(5.0), Bound::Inclusive(5.0)));
        assert!(!meets(Bound::Exclusive(5.0), Bound::Exclusive(5.0)));

        assert!(!meets(Bound::Inclusive(5.0), Bound::Exclusive(6.0)));
        assert!(!meets(Bound::<f64>::Unbounded, Bound::Exclusive(5.0)));
    }
}
