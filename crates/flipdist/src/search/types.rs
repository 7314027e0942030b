//! Data types for the flip-distance search.

use crate::triangulation::{Edge, TriangulatedGraph};

/// Candidate source pairs. Each pair holds the two remaining edges of one
/// triangle bordering a previously flipped-in diagonal; a committed source
/// set may take at most one edge per pair.
pub type EdgePairs = Vec<(Edge, Edge)>;

/// Unit of work during free-flip propagation: a (current, target) pair plus
/// the source-pair candidates still open for it. Produced when a problem
/// splits into independent sub-polygons; consumed by the search.
#[derive(Clone, Debug)]
pub struct FdProblem {
    pub current: TriangulatedGraph,
    pub target: TriangulatedGraph,
    pub sources: EdgePairs,
}

/// Diagnostics for one solver value, merged upward from sub-solvers.
/// No effect on control flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Branch-and-bound search invocations.
    pub branches: u64,
}
