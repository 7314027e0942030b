//! Flip-distance search core: free-flip propagation and budgeted
//! branch-and-bound over committed source sets.
//!
//! Purpose
//! - Decide whether one triangulation reaches another within a flip budget,
//!   and compute the exact minimum by iterating budgets.
//!
//! Why this design
//! - Deterministic ("free") flips — flips whose result already lies in the
//!   target — are applied eagerly and split the problem into independent
//!   sub-polygons; only the stuck remainder is branched on.
//! - Branching commits an independent set of first moves ("sources"); the
//!   neighbor pairs opened by those flips are the only candidates for later
//!   moves, which keeps the branching fixed-parameter bounded.
//!
//! Code cross-refs: `triangulation::{TriangulatedGraph, Edge, vertex_filter}`.

mod propagate;
mod source;
mod strategy;
mod types;

pub use propagate::perform_free_flips;
pub use source::FlipDistanceSource;
pub use strategy::{by_name, FlipDistance};
pub use types::{EdgePairs, FdProblem, SearchStats};
