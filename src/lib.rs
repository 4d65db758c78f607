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

//! # Intervalset
//!
//! Interval sets over an ordered scalar domain: contiguous ranges of the
//! real line whose sides are independently open, closed, or unbounded,
//! including the empty set and the universal set as ordinary values. The
//! crate provides value-semantic construction, comparison, and boolean set
//! algebra over this single representation.
//!
//! ## Modules
//!
//! - `interval`: The canonical `Interval<T>` value type with its factories,
//!   containment and subset queries, pivot queries, and the set operations
//!   (intersection/union/hull/complement/difference/gap/split).
//! - `bound`: The three-way `Bound<T>` edge model (inclusive, exclusive,
//!   unbounded) and the side-specific bound orderings the algebra is built
//!   on.
//! - `error`: Typed, atomic failures (`InvalidRangeError`,
//!   `UndefinedBoundError`, `DisjointUnionError`).
//!
//! ## Purpose
//!
//! Constraint handling and window logic routinely reason about "everything
//! above x", "between a and b but not b itself", or "no restriction at
//! all". Storing each side as an explicit open/closed/unbounded bound and
//! canonicalizing at construction keeps every combination branch-complete
//! and makes equality, hashing, and the set operations agree on one
//! representation per set of scalars.
//!
//! All values are immutable; every operation allocates nothing beyond its
//! (`Copy`) result and is safe to share across threads.
//!
//! ## Usage
//!
//! ```rust
//! use intervalset::Interval;
//!
//! let digits = Interval::closed_open(0.0, 10.0);
//! assert!(digits.contains(0.0));
//! assert!(!digits.contains(10.0));
//!
//! let ten_and_up = digits.get_gt().unwrap();
//! let positive = digits.get_gte().unwrap();
//! assert_eq!(ten_and_up, Interval::gt(10.0));
//! assert!(ten_and_up.is_subset_of(positive));
//! assert_eq!(positive.intersection(Interval::lt(10.0)), digits);
//! ```

pub mod bound;
pub mod error;
pub mod interval;

pub use bound::Bound;
pub use error::{DisjointUnionError, Endpoint, InvalidRangeError, UndefinedBoundError};
pub use interval::Interval;
