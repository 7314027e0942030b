//! Basic value types for polygon triangulations.

use std::fmt;

/// An edge of the polygon, identified by its two vertex indices.
///
/// Stored normalized (`a < b`), so equality, ordering, and hashing are
/// order-independent; both a diagonal and a boundary edge are `Edge`s.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// Build an edge from two distinct vertex indices, in either order.
    #[inline]
    pub fn new(u: usize, v: usize) -> Self {
        debug_assert!(u != v, "degenerate edge {u}-{v}");
        if u < v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// Smaller endpoint.
    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    /// Larger endpoint.
    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }

    /// Both endpoints, ascending.
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// Does `v` coincide with one of the endpoints?
    #[inline]
    pub fn touches(&self, v: usize) -> bool {
        self.a == v || self.b == v
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.a, self.b)
    }
}
