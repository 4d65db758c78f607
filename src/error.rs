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

//! Typed failures of interval construction and combination.
//!
//! Every operation in this crate either returns a valid canonical value or
//! fails atomically with one of the errors below; nothing is retried or
//! recovered internally.

/// The constructor argument an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The start (lower) endpoint.
    Start,
    /// The end (upper) endpoint.
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// A constructor was given an endpoint that cannot be ordered.
///
/// Raised only for NaN inputs. Crossed ranges are not an error: they
/// canonicalize to the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError {
    /// The endpoint that failed to compare.
    pub endpoint: Endpoint,
}

impl std::fmt::Display for InvalidRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The {} endpoint of the range cannot be ordered (NaN)", self.endpoint)
    }
}

impl std::error::Error for InvalidRangeError {}

/// A pivot query was invoked on the empty set.
///
/// The empty set has no bounds, so there is no value to pivot from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndefinedBoundError;

impl std::fmt::Display for UndefinedBoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The empty interval has no bound to pivot from")
    }
}

impl std::error::Error for UndefinedBoundError {}

/// `union` was invoked on two intervals that neither intersect nor touch.
///
/// The union of such operands is not a single contiguous interval and
/// cannot be represented by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisjointUnionError;

impl std::fmt::Display for DisjointUnionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The union of disjoint, non-adjacent intervals is not a contiguous interval")
    }
}

impl std::error::Error for DisjointUnionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = InvalidRangeError {
            endpoint: Endpoint::Start,
        };
        assert_eq!(format!("{}", err), "The start endpoint of the range cannot be ordered (NaN)");

        let err = InvalidRangeError {
            endpoint: Endpoint::End,
        };
        assert_eq!(format!("{}", err), "The end endpoint of the range cannot be ordered (NaN)");

        assert_eq!(
            format!("{}", UndefinedBoundError),
            "The empty interval has no bound to pivot from"
        );
        assert_eq!(
            format!("{}", DisjointUnionError),
            "The union of disjoint, non-adjacent intervals is not a contiguous interval"
        );
    }

    #[test]
    fn test_error_trait_objects() {
        fn assert_error<E: std::error::Error>(_e: &E) {}

        assert_error(&InvalidRangeError {
            endpoint: Endpoint::Start,
        });
        assert_error(&UndefinedBoundError);
        assert_error(&DisjointUnionError);
    }
}
