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

use crate::bound::{self, Bound};
use crate::error::{DisjointUnionError, Endpoint, InvalidRangeError, UndefinedBoundError};
use num_traits::Float;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::ops::{BitAnd, BitOr};

/// The canonical storage of an interval's value.
///
/// `Empty` is a dedicated variant rather than a contradictory bound pair,
/// so the empty set has exactly one representation and structural equality
/// of the whole type is value equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr<T> {
    Empty,
    Span { lower: Bound<T>, upper: Bound<T> },
}

/// A contiguous set of scalars on the real line.
///
/// Each side of the interval is independently inclusive, exclusive, or
/// unbounded; the empty set and the universal set are ordinary values of
/// this type. All values are canonical: any construction that admits no
/// point yields the one empty value, a degenerate range is stored with two
/// inclusive bounds, and infinite endpoint inputs are normalized away. Two
/// intervals are therefore equal exactly when they describe the same set of
/// scalars, regardless of how they were built.
///
/// Intervals are immutable; every operation returns a new value. For the
/// float scalars this crate targets, `Interval<T>` is `Copy` and safe to
/// share freely across threads.
///
/// # Invariants
/// A stored bound value is always a finite, ordinary number, and a stored
/// bound pair always admits at least one point.
///
/// # Examples
///
/// ```rust
/// # use intervalset::Interval;
///
/// let digits = Interval::closed_open(0.0, 10.0);
/// assert!(digits.contains(0.0));
/// assert!(digits.contains(9.5));
/// assert!(!digits.contains(10.0));
/// assert_eq!(format!("{}", digits), "[0, 10)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    repr: Repr<T>,
}

impl<T> Interval<T>
where
    T: Float,
{
    /// Creates an interval from optional endpoints and openness flags.
    ///
    /// `None` means the corresponding side is unbounded. An explicit
    /// infinite endpoint is also accepted: `-∞` as start (or `+∞` as end)
    /// is the unbounded side again, while `+∞` as start (or `-∞` as end)
    /// admits no real point and yields the empty set.
    ///
    /// A crossed range (`start > end`) and a degenerate range with any open
    /// side also canonicalize to the empty set. The only rejected input is
    /// an endpoint that cannot be ordered at all.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] if `start` or `end` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let iv = Interval::try_new(Some(0.0), Some(10.0), false, true).unwrap();
    /// assert_eq!(iv, Interval::closed_open(0.0, 10.0));
    ///
    /// // Crossed ranges are empty, not an error.
    /// let crossed = Interval::try_new(Some(5.0), Some(1.0), false, false).unwrap();
    /// assert!(crossed.is_empty());
    ///
    /// assert!(Interval::try_new(Some(f64::NAN), Some(1.0), false, false).is_err());
    /// ```
    pub fn try_new(
        start: Option<T>,
        end: Option<T>,
        start_open: bool,
        end_open: bool,
    ) -> Result<Self, InvalidRangeError> {
        if start.is_some_and(T::is_nan) {
            return Err(InvalidRangeError {
                endpoint: Endpoint::Start,
            });
        }
        if end.is_some_and(T::is_nan) {
            return Err(InvalidRangeError {
                endpoint: Endpoint::End,
            });
        }

        let lower = match start {
            None => Bound::Unbounded,
            Some(v) if v.is_infinite() => {
                if v.is_sign_negative() {
                    Bound::Unbounded
                } else {
                    // No real value lies above +∞.
                    return Ok(Self::empty());
                }
            }
            Some(v) if start_open => Bound::Exclusive(v),
            Some(v) => Bound::Inclusive(v),
        };
        let upper = match end {
            None => Bound::Unbounded,
            Some(v) if v.is_infinite() => {
                if v.is_sign_positive() {
                    Bound::Unbounded
                } else {
                    return Ok(Self::empty());
                }
            }
            Some(v) if end_open => Bound::Exclusive(v),
            Some(v) => Bound::Inclusive(v),
        };

        Ok(Self::from_bounds(lower, upper))
    }

    /// Creates an interval from optional endpoints and openness flags.
    ///
    /// Identical to [`Interval::try_new`], except that unorderable input is
    /// a programming error.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let iv = Interval::new(None, Some(10.0), false, true);
    /// assert_eq!(iv, Interval::lt(10.0));
    /// ```
    pub fn new(start: Option<T>, end: Option<T>, start_open: bool, end_open: bool) -> Self {
        match Self::try_new(start, end, start_open, end_open) {
            Ok(iv) => iv,
            Err(e) => panic!("Invalid interval: {}", e),
        }
    }

    /// Canonicalizing constructor from a normalized bound pair.
    ///
    /// Callers must have rejected NaN and mapped infinite endpoint values
    /// to `Unbounded` already.
    fn from_bounds(lower: Bound<T>, upper: Bound<T>) -> Self {
        debug_assert!(lower.value().is_none_or(|v| v.is_finite()));
        debug_assert!(upper.value().is_none_or(|v| v.is_finite()));

        if bound::span_admits_points(lower, upper) {
            Self {
                repr: Repr::Span { lower, upper },
            }
        } else {
            Self::empty()
        }
    }

    /// Returns the canonical empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let e = Interval::<f64>::empty();
    /// assert!(e.is_empty());
    /// assert!(!e.contains(0.0));
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self { repr: Repr::Empty }
    }

    /// Returns the universal set `(-∞, ∞)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let all = Interval::<f64>::all();
    /// assert!(all.contains(-1e300));
    /// assert!(all.contains(1e300));
    /// assert!(all.is_universal());
    /// ```
    #[inline]
    pub fn all() -> Self {
        Self {
            repr: Repr::Span {
                lower: Bound::Unbounded,
                upper: Bound::Unbounded,
            },
        }
    }

    /// Returns the closed degenerate interval `[value, value]`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let p = Interval::point(5.0);
    /// assert!(p.is_degenerate());
    /// assert!(p.contains(5.0));
    /// assert!(!p.contains(5.1));
    /// ```
    #[inline]
    pub fn point(value: T) -> Self {
        Self::new(Some(value), Some(value), false, false)
    }

    /// Returns the closed interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is NaN.
    #[inline]
    pub fn closed(start: T, end: T) -> Self {
        Self::new(Some(start), Some(end), false, false)
    }

    /// Returns the open interval `(start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is NaN.
    #[inline]
    pub fn open(start: T, end: T) -> Self {
        Self::new(Some(start), Some(end), true, true)
    }

    /// Returns the closed-open interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let iv = Interval::closed_open(0.0, 10.0);
    /// assert!(iv.contains(0.0));
    /// assert!(!iv.contains(10.0));
    /// ```
    #[inline]
    pub fn closed_open(start: T, end: T) -> Self {
        Self::new(Some(start), Some(end), false, true)
    }

    /// Returns the open-closed interval `(start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` is NaN.
    #[inline]
    pub fn open_closed(start: T, end: T) -> Self {
        Self::new(Some(start), Some(end), true, false)
    }

    /// Returns `(value, ∞)`: everything strictly greater than `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let iv = Interval::gt(10.0);
    /// assert!(!iv.contains(10.0));
    /// assert!(iv.contains(10.0001));
    /// ```
    #[inline]
    pub fn gt(value: T) -> Self {
        Self::new(Some(value), None, true, true)
    }

    /// Returns `[value, ∞)`: everything greater than or equal to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN.
    #[inline]
    pub fn gte(value: T) -> Self {
        Self::new(Some(value), None, false, true)
    }

    /// Returns `(-∞, value)`: everything strictly less than `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN.
    #[inline]
    pub fn lt(value: T) -> Self {
        Self::new(None, Some(value), true, true)
    }

    /// Returns `(-∞, value]`: everything less than or equal to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN.
    #[inline]
    pub fn lte(value: T) -> Self {
        Self::new(None, Some(value), true, false)
    }

    /// Returns both bounds, or `None` for the empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::{Bound, Interval};
    ///
    /// let iv = Interval::open_closed(0.0, 10.0);
    /// let (lower, upper) = iv.bounds().unwrap();
    /// assert_eq!(lower, Bound::Exclusive(0.0));
    /// assert_eq!(upper, Bound::Inclusive(10.0));
    ///
    /// assert_eq!(Interval::<f64>::empty().bounds(), None);
    /// ```
    #[inline]
    pub fn bounds(&self) -> Option<(Bound<T>, Bound<T>)> {
        match self.repr {
            Repr::Empty => None,
            Repr::Span { lower, upper } => Some((lower, upper)),
        }
    }

    /// Returns the lower bound, or `None` for the empty set.
    #[inline]
    pub fn lower_bound(&self) -> Option<Bound<T>> {
        self.bounds().map(|(lower, _)| lower)
    }

    /// Returns the upper bound, or `None` for the empty set.
    #[inline]
    pub fn upper_bound(&self) -> Option<Bound<T>> {
        self.bounds().map(|(_, upper)| upper)
    }

    /// Returns `true` if the interval contains no point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// assert!(Interval::<f64>::empty().is_empty());
    /// assert!(Interval::open(3.0, 3.0).is_empty());
    /// assert!(!Interval::point(3.0).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    /// Returns `true` if the interval contains exactly one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// assert!(Interval::point(5.0).is_degenerate());
    /// assert!(Interval::closed(5.0, 5.0).is_degenerate());
    /// assert!(!Interval::closed(5.0, 6.0).is_degenerate());
    /// assert!(!Interval::<f64>::empty().is_degenerate());
    /// ```
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self.repr,
            Repr::Span {
                lower: Bound::Inclusive(a),
                upper: Bound::Inclusive(b),
            } if a == b
        )
    }

    /// Returns `true` if neither side is unbounded.
    ///
    /// The empty set is vacuously bounded.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        match self.repr {
            Repr::Empty => true,
            Repr::Span { lower, upper } => !lower.is_unbounded() && !upper.is_unbounded(),
        }
    }

    /// Returns `true` if the interval extends to `-∞`.
    #[inline]
    pub fn is_unbounded_below(&self) -> bool {
        matches!(
            self.repr,
            Repr::Span {
                lower: Bound::Unbounded,
                ..
            }
        )
    }

    /// Returns `true` if the interval extends to `+∞`.
    #[inline]
    pub fn is_unbounded_above(&self) -> bool {
        matches!(
            self.repr,
            Repr::Span {
                upper: Bound::Unbounded,
                ..
            }
        )
    }

    /// Returns `true` if the interval is the universal set `(-∞, ∞)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// assert!(Interval::<f64>::all().is_universal());
    /// assert!(!Interval::gte(0.0).is_universal());
    /// ```
    #[inline]
    pub fn is_universal(&self) -> bool {
        matches!(
            self.repr,
            Repr::Span {
                lower: Bound::Unbounded,
                upper: Bound::Unbounded,
            }
        )
    }

    /// Returns `true` if the lower side does not include its own value.
    ///
    /// Unbounded sides are open, and the empty set reports both sides open.
    #[inline]
    pub fn is_lower_open(&self) -> bool {
        match self.repr {
            Repr::Empty => true,
            Repr::Span { lower, .. } => lower.is_open(),
        }
    }

    /// Returns `true` if the upper side does not include its own value.
    ///
    /// Unbounded sides are open, and the empty set reports both sides open.
    #[inline]
    pub fn is_upper_open(&self) -> bool {
        match self.repr {
            Repr::Empty => true,
            Repr::Span { upper, .. } => upper.is_open(),
        }
    }

    /// Returns `true` if `value` satisfies both bound constraints.
    ///
    /// NaN is contained in nothing. Infinite query values are admitted only
    /// by an unbounded side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let iv = Interval::closed_open(0.0, 10.0);
    /// assert!(iv.contains(0.0));
    /// assert!(!iv.contains(10.0));
    /// assert!(!iv.contains(-0.0001));
    /// assert!(!iv.contains(f64::NAN));
    /// ```
    pub fn contains(&self, value: T) -> bool {
        if value.is_nan() {
            return false;
        }
        match self.repr {
            Repr::Empty => false,
            Repr::Span { lower, upper } => {
                let above = match lower {
                    Bound::Unbounded => true,
                    Bound::Inclusive(l) => value >= l,
                    Bound::Exclusive(l) => value > l,
                };
                let below = match upper {
                    Bound::Unbounded => true,
                    Bound::Inclusive(u) => value <= u,
                    Bound::Exclusive(u) => value < u,
                };
                above && below
            }
        }
    }

    /// Returns `true` if every point of `self` lies in `other`.
    ///
    /// The empty set is a subset of everything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let a = Interval::open(0.0, 5.0);
    /// let b = Interval::closed(0.0, 5.0);
    /// assert!(a.is_subset_of(b));
    /// assert!(!b.is_subset_of(a));
    /// assert!(a.is_subset_of(a));
    /// ```
    pub fn is_subset_of(&self, other: Self) -> bool {
        match (self.repr, other.repr) {
            (Repr::Empty, _) => true,
            (_, Repr::Empty) => false,
            (
                Repr::Span {
                    lower: sl,
                    upper: su,
                },
                Repr::Span {
                    lower: ol,
                    upper: ou,
                },
            ) => {
                bound::lower_cmp(sl, ol) != Ordering::Less
                    && bound::upper_cmp(su, ou) != Ordering::Greater
            }
        }
    }

    /// Returns `true` if every point of `other` lies in `self`.
    #[inline]
    pub fn is_superset_of(&self, other: Self) -> bool {
        other.is_subset_of(*self)
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let a = Interval::closed(0.0, 10.0);
    /// assert!(a.intersects(Interval::closed(5.0, 15.0)));
    /// assert!(a.intersects(Interval::closed(10.0, 15.0))); // share 10
    /// assert!(!a.intersects(Interval::open_closed(10.0, 15.0)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Returns `true` if the intervals do not overlap but their bounds meet
    /// at one value with complementary openness, so that their union is a
    /// single contiguous interval with no gap.
    ///
    /// The empty set is adjacent to nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let a = Interval::closed_open(0.0, 10.0);
    /// assert!(a.adjacent(Interval::closed(10.0, 20.0)));
    ///
    /// // Two closed bounds share the meeting point: overlap, not adjacency.
    /// assert!(!Interval::closed(0.0, 10.0).adjacent(Interval::closed(10.0, 20.0)));
    ///
    /// // Two open bounds leave the meeting point uncovered.
    /// assert!(!Interval::open(0.0, 10.0).adjacent(Interval::open(10.0, 20.0)));
    /// ```
    pub fn adjacent(&self, other: Self) -> bool {
        match (self.repr, other.repr) {
            (
                Repr::Span {
                    lower: sl,
                    upper: su,
                },
                Repr::Span {
                    lower: ol,
                    upper: ou,
                },
            ) => !self.intersects(other) && (bound::meets(su, ol) || bound::meets(ou, sl)),
            _ => false,
        }
    }

    /// Returns `true` if the intervals either intersect or are adjacent.
    ///
    /// This is the condition under which [`Interval::union`] succeeds.
    #[inline]
    pub fn intersects_or_adjacent(&self, other: Self) -> bool {
        self.intersects(other) || self.adjacent(other)
    }

    /// Returns `true` if the intervals neither intersect nor touch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let a = Interval::closed(0.0, 5.0);
    /// assert!(a.disjoint(Interval::closed(10.0, 15.0)));
    /// assert!(!a.disjoint(Interval::closed(5.0, 15.0)));
    /// ```
    #[inline]
    pub fn disjoint(&self, other: Self) -> bool {
        !self.intersects_or_adjacent(other)
    }

    /// Calculates the intersection of two intervals.
    ///
    /// The result takes the greater lower bound and the smaller upper
    /// bound; where two bounds tie in value, the exclusive one wins, since
    /// intersection can only shrink the set. The result is the empty set
    /// whenever the operands do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let a = Interval::closed(0.0, 10.0);
    /// let b = Interval::open(5.0, 15.0);
    /// assert_eq!(a.intersection(b), Interval::open_closed(5.0, 10.0));
    ///
    /// assert_eq!(a.intersection(Interval::all()), a);
    /// assert!(a.intersection(Interval::empty()).is_empty());
    /// ```
    pub fn intersection(&self, other: Self) -> Self {
        match (self.repr, other.repr) {
            (Repr::Empty, _) | (_, Repr::Empty) => Self::empty(),
            (
                Repr::Span {
                    lower: sl,
                    upper: su,
                },
                Repr::Span {
                    lower: ol,
                    upper: ou,
                },
            ) => {
                let lower = if bound::lower_cmp(sl, ol) == Ordering::Less { ol } else { sl };
                let upper = if bound::upper_cmp(su, ou) == Ordering::Greater { ou } else { su };
                Self::from_bounds(lower, upper)
            }
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Defined only when the operands intersect or are adjacent, so that
    /// the result is a single contiguous interval. The empty set is the
    /// union identity.
    ///
    /// # Errors
    ///
    /// Returns [`DisjointUnionError`] if the operands are disjoint and not
    /// adjacent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let below = Interval::lt(5.0);
    /// assert_eq!(below.union(Interval::gte(5.0)).unwrap(), Interval::all());
    ///
    /// assert!(below.union(Interval::gt(10.0)).is_err());
    /// ```
    pub fn union(&self, other: Self) -> Result<Self, DisjointUnionError> {
        if self.is_empty() {
            return Ok(other);
        }
        if other.is_empty() {
            return Ok(*self);
        }
        if self.intersects_or_adjacent(other) {
            Ok(self.hull(other))
        } else {
            Err(DisjointUnionError)
        }
    }

    /// Calculates the smallest interval containing both operands.
    ///
    /// Unlike [`Interval::union`] this ignores any gap between them. The
    /// result takes the smaller lower bound and the greater upper bound;
    /// where two bounds tie in value, the inclusive one wins. The empty set
    /// is the hull identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let a = Interval::closed(0.0, 2.0);
    /// let b = Interval::open(8.0, 9.0);
    /// assert_eq!(a.hull(b), Interval::closed_open(0.0, 9.0));
    /// assert_eq!(Interval::empty().hull(b), b);
    /// ```
    pub fn hull(&self, other: Self) -> Self {
        match (self.repr, other.repr) {
            (Repr::Empty, _) => other,
            (_, Repr::Empty) => *self,
            (
                Repr::Span {
                    lower: sl,
                    upper: su,
                },
                Repr::Span {
                    lower: ol,
                    upper: ou,
                },
            ) => {
                let lower = if bound::lower_cmp(sl, ol) == Ordering::Greater { ol } else { sl };
                let upper = if bound::upper_cmp(su, ou) == Ordering::Less { ou } else { su };
                Self::from_bounds(lower, upper)
            }
        }
    }

    /// Calculates the set of points outside this interval.
    ///
    /// # Returns
    ///
    /// An ascending sequence of:
    /// * 0 intervals: the complement of the universal set.
    /// * 1 interval: the complement of the empty set (the universal set) or
    ///   of a one-sided unbounded interval.
    /// * 2 intervals: the two rays around a bounded interval.
    ///
    /// Openness flips at each finite bound: the points next to a closed
    /// bound are excluded from the complement, and vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let pieces = Interval::closed(0.0, 10.0).complement();
    /// assert_eq!(pieces.len(), 2);
    /// assert_eq!(pieces[0], Interval::lt(0.0));
    /// assert_eq!(pieces[1], Interval::gt(10.0));
    ///
    /// let pieces = Interval::<f64>::empty().complement();
    /// assert_eq!(pieces.len(), 1);
    /// assert_eq!(pieces[0], Interval::all());
    ///
    /// assert!(Interval::<f64>::all().complement().is_empty());
    /// ```
    pub fn complement(&self) -> SmallVec<Self, 2> {
        match self.repr {
            Repr::Empty => smallvec::smallvec![Self::all()],
            Repr::Span { lower, upper } => {
                let mut pieces = SmallVec::new();
                if !lower.is_unbounded() {
                    pieces.push(Self::from_bounds(Bound::Unbounded, lower.complementary()));
                }
                if !upper.is_unbounded() {
                    pieces.push(Self::from_bounds(upper.complementary(), Bound::Unbounded));
                }
                pieces
            }
        }
    }

    /// Calculates the set difference `self − other`.
    ///
    /// Equivalent to intersecting `self` with each piece of `other`'s
    /// complement.
    ///
    /// # Returns
    ///
    /// An ascending sequence of:
    /// * 0 intervals: `other` fully covers `self`.
    /// * 1 interval: `other` clips one side of `self` or misses it.
    /// * 2 intervals: `other` punches a hole through `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let base = Interval::closed(0.0, 10.0);
    ///
    /// let diff = base.difference(Interval::open(4.0, 6.0));
    /// assert_eq!(diff.len(), 2);
    /// assert_eq!(diff[0], Interval::closed(0.0, 4.0));
    /// assert_eq!(diff[1], Interval::closed(6.0, 10.0));
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<Self, 2> {
        let mut result = SmallVec::new();
        for piece in other.complement() {
            let part = self.intersection(piece);
            if !part.is_empty() {
                result.push(part);
            }
        }
        result
    }

    /// Returns the region strictly between two disjoint intervals.
    ///
    /// The gap's openness complements the facing bounds, so it contains
    /// exactly the points that belong to neither operand. Two exclusive
    /// bounds facing each other at the same value leave a degenerate
    /// one-point gap.
    ///
    /// Returns `None` if the intervals intersect, are adjacent, or either
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let a = Interval::closed(0.0, 5.0);
    /// let b = Interval::closed(10.0, 15.0);
    /// assert_eq!(a.gap(b), Some(Interval::open(5.0, 10.0)));
    /// assert_eq!(b.gap(a), Some(Interval::open(5.0, 10.0)));
    ///
    /// assert_eq!(Interval::lt(0.0).gap(Interval::gt(0.0)), Some(Interval::point(0.0)));
    /// assert_eq!(a.gap(Interval::closed(5.0, 6.0)), None);
    /// ```
    pub fn gap(&self, other: Self) -> Option<Self> {
        match (self.repr, other.repr) {
            (
                Repr::Span {
                    lower: sl,
                    upper: su,
                },
                Repr::Span {
                    lower: ol,
                    upper: ou,
                },
            ) => {
                if self.intersects_or_adjacent(other) {
                    return None;
                }
                let self_below = match (su.value(), ol.value()) {
                    (Some(u), Some(l)) => u <= l,
                    _ => false,
                };
                if self_below {
                    return Some(Self::from_bounds(su.complementary(), ol.complementary()));
                }
                let other_below = match (ou.value(), sl.value()) {
                    (Some(u), Some(l)) => u <= l,
                    _ => false,
                };
                if other_below {
                    return Some(Self::from_bounds(ou.complementary(), sl.complementary()));
                }
                None
            }
            _ => None,
        }
    }

    /// Splits the interval into two pieces at the given value.
    ///
    /// The left piece ends exclusively and the right piece starts
    /// inclusively at `value`, keeping the outer bounds unchanged.
    ///
    /// Returns `Some((left, right))` only when both pieces are non-empty,
    /// i.e. when `value` lies strictly inside the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let iv = Interval::closed_open(0.0, 10.0);
    /// let (left, right) = iv.split_at(5.0).unwrap();
    /// assert_eq!(left, Interval::closed_open(0.0, 5.0));
    /// assert_eq!(right, Interval::closed_open(5.0, 10.0));
    ///
    /// assert!(iv.split_at(0.0).is_none());
    /// assert!(iv.split_at(10.0).is_none());
    /// ```
    pub fn split_at(&self, value: T) -> Option<(Self, Self)> {
        if !value.is_finite() {
            return None;
        }
        match self.repr {
            Repr::Empty => None,
            Repr::Span { lower, upper } => {
                let left = Self::from_bounds(lower, Bound::Exclusive(value));
                let right = Self::from_bounds(Bound::Inclusive(value), upper);
                if left.is_empty() || right.is_empty() {
                    None
                } else {
                    Some((left, right))
                }
            }
        }
    }

    /// This interval with both finite bounds re-tagged as inclusive.
    ///
    /// Unbounded sides and the empty set are unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// assert_eq!(Interval::open(0.0, 10.0).as_closed(), Interval::closed(0.0, 10.0));
    /// ```
    #[inline]
    pub fn as_closed(&self) -> Self {
        self.retagged(Bound::to_inclusive, Bound::to_inclusive)
    }

    /// This interval with both finite bounds re-tagged as exclusive.
    ///
    /// A degenerate interval becomes empty. Unbounded sides and the empty
    /// set are unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// assert_eq!(Interval::closed(0.0, 10.0).as_open(), Interval::open(0.0, 10.0));
    /// assert!(Interval::point(5.0).as_open().is_empty());
    /// ```
    #[inline]
    pub fn as_open(&self) -> Self {
        self.retagged(Bound::to_exclusive, Bound::to_exclusive)
    }

    /// This interval re-tagged as closed below and open above.
    #[inline]
    pub fn as_closed_open(&self) -> Self {
        self.retagged(Bound::to_inclusive, Bound::to_exclusive)
    }

    /// This interval re-tagged as open below and closed above.
    #[inline]
    pub fn as_open_closed(&self) -> Self {
        self.retagged(Bound::to_exclusive, Bound::to_inclusive)
    }

    fn retagged(&self, lower_f: fn(Bound<T>) -> Bound<T>, upper_f: fn(Bound<T>) -> Bound<T>) -> Self {
        match self.repr {
            Repr::Empty => *self,
            Repr::Span { lower, upper } => Self::from_bounds(lower_f(lower), upper_f(upper)),
        }
    }

    /// Returns the interval strictly above this interval's upper bound
    /// value, i.e. [`Interval::gt`] at that value.
    ///
    /// Pivots off the **upper** bound. If the interval is unbounded above,
    /// nothing lies beyond the pivot and the result is the empty set.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedBoundError`] if the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let digits = Interval::closed_open(0.0, 10.0);
    /// assert_eq!(digits.get_gt().unwrap(), Interval::gt(10.0));
    ///
    /// assert_eq!(Interval::gte(0.0).get_gt().unwrap(), Interval::empty());
    /// assert!(Interval::<f64>::empty().get_gt().is_err());
    /// ```
    pub fn get_gt(&self) -> Result<Self, UndefinedBoundError> {
        match self.repr {
            Repr::Empty => Err(UndefinedBoundError),
            Repr::Span { upper, .. } => Ok(match upper.value() {
                None => Self::empty(),
                Some(u) => Self::gt(u),
            }),
        }
    }

    /// Returns the interval from this interval's lower bound value to
    /// `+∞`, i.e. [`Interval::gte`] at that value.
    ///
    /// Pivots off the **lower** bound. If the interval is unbounded below,
    /// every point lies at or above the pivot and the result is the
    /// universal set.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedBoundError`] if the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let digits = Interval::closed_open(0.0, 10.0);
    /// assert_eq!(digits.get_gte().unwrap(), Interval::gte(0.0));
    ///
    /// assert_eq!(Interval::lt(0.0).get_gte().unwrap(), Interval::all());
    /// ```
    pub fn get_gte(&self) -> Result<Self, UndefinedBoundError> {
        match self.repr {
            Repr::Empty => Err(UndefinedBoundError),
            Repr::Span { lower, .. } => Ok(match lower.value() {
                None => Self::all(),
                Some(l) => Self::gte(l),
            }),
        }
    }

    /// Returns the interval strictly below this interval's lower bound
    /// value, i.e. [`Interval::lt`] at that value.
    ///
    /// Pivots off the **lower** bound. If the interval is unbounded below,
    /// nothing lies beyond the pivot and the result is the empty set.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedBoundError`] if the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let digits = Interval::closed_open(0.0, 10.0);
    /// assert_eq!(digits.get_lt().unwrap(), Interval::lt(0.0));
    /// ```
    pub fn get_lt(&self) -> Result<Self, UndefinedBoundError> {
        match self.repr {
            Repr::Empty => Err(UndefinedBoundError),
            Repr::Span { lower, .. } => Ok(match lower.value() {
                None => Self::empty(),
                Some(l) => Self::lt(l),
            }),
        }
    }

    /// Returns the interval from `-∞` to this interval's upper bound
    /// value, i.e. [`Interval::lte`] at that value.
    ///
    /// Pivots off the **upper** bound. If the interval is unbounded above,
    /// every point lies at or below the pivot and the result is the
    /// universal set.
    ///
    /// # Errors
    ///
    /// Returns [`UndefinedBoundError`] if the interval is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intervalset::Interval;
    ///
    /// let digits = Interval::closed_open(0.0, 10.0);
    /// assert_eq!(digits.get_lte().unwrap(), Interval::lte(10.0));
    /// ```
    pub fn get_lte(&self) -> Result<Self, UndefinedBoundError> {
        match self.repr {
            Repr::Empty => Err(UndefinedBoundError),
            Repr::Span { upper, .. } => Ok(match upper.value() {
                None => Self::all(),
                Some(u) => Self::lte(u),
            }),
        }
    }
}

impl<T> BitAnd for Interval<T>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for Interval<T>
where
    T: Float,
{
    type Output = Result<Self, DisjointUnionError>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> Default for Interval<T>
where
    T: Float,
{
    /// The empty set.
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// The set-inclusion partial order.
///
/// `a <= b` holds exactly when `a` is a subset of `b`, and `a < b` when the
/// inclusion is proper. Intervals that each contain points outside the
/// other are incomparable and `partial_cmp` returns `None`; this is a
/// partial order, never a total one.
///
/// # Examples
///
/// ```rust
/// # use intervalset::Interval;
///
/// assert!(Interval::closed(2.0, 3.0) < Interval::closed(0.0, 10.0));
/// assert!(Interval::gte(5.0) >= Interval::gt(5.0));
///
/// let a = Interval::closed(0.0, 5.0);
/// let b = Interval::closed(3.0, 8.0);
/// assert_eq!(a.partial_cmp(&b), None);
/// ```
impl<T> PartialOrd for Interval<T>
where
    T: Float,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subset_of(*other), other.is_subset_of(*self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: Float + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.repr {
            Repr::Empty => write!(f, "Interval(∅)"),
            Repr::Span { lower, upper } => {
                write!(f, "Interval(")?;
                match lower {
                    Bound::Unbounded => write!(f, "(-∞")?,
                    Bound::Inclusive(l) => write!(f, "[{:?}", l)?,
                    Bound::Exclusive(l) => write!(f, "({:?}", l)?,
                }
                match upper {
                    Bound::Unbounded => write!(f, ", ∞)")?,
                    Bound::Inclusive(u) => write!(f, ", {:?}]", u)?,
                    Bound::Exclusive(u) => write!(f, ", {:?})", u)?,
                }
                write!(f, ")")
            }
        }
    }
}

/// Bracket notation with the empty and unbounded special cases spelled out:
/// `[0, 10)`, `∅`, `(-∞, ∞)`.
impl<T> std::fmt::Display for Interval<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.repr {
            Repr::Empty => write!(f, "∅"),
            Repr::Span { lower, upper } => {
                match lower {
                    Bound::Unbounded => write!(f, "(-∞")?,
                    Bound::Inclusive(l) => write!(f, "[{}", l)?,
                    Bound::Exclusive(l) => write!(f, "({}", l)?,
                }
                match upper {
                    Bound::Unbounded => write!(f, ", ∞)"),
                    Bound::Inclusive(u) => write!(f, ", {}]", u),
                    Bound::Exclusive(u) => write!(f, ", {})", u),
                }
            }
        }
    }
}

impl<T> From<std::ops::Range<T>> for Interval<T>
where
    T: Float,
{
    /// `start..end` as the closed-open interval `[start, end)`.
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Interval<T>
where
    T: Float,
{
    /// `start..=end` as the closed interval `[start, end]`.
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        Self::closed(*range.start(), *range.end())
    }
}

impl<T> From<std::ops::RangeFrom<T>> for Interval<T>
where
    T: Float,
{
    /// `start..` as `[start, ∞)`.
    #[inline]
    fn from(range: std::ops::RangeFrom<T>) -> Self {
        Self::gte(range.start)
    }
}

impl<T> From<std::ops::RangeTo<T>> for Interval<T>
where
    T: Float,
{
    /// `..end` as `(-∞, end)`.
    #[inline]
    fn from(range: std::ops::RangeTo<T>) -> Self {
        Self::lt(range.end)
    }
}

impl<T> From<std::ops::RangeToInclusive<T>> for Interval<T>
where
    T: Float,
{
    /// `..=end` as `(-∞, end]`.
    #[inline]
    fn from(range: std::ops::RangeToInclusive<T>) -> Self {
        Self::lte(range.end)
    }
}

impl<T> From<std::ops::RangeFull> for Interval<T>
where
    T: Float,
{
    /// `..` as the universal set.
    #[inline]
    fn from(_: std::ops::RangeFull) -> Self {
        Self::all()
    }
}
