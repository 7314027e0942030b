//! Exact flip distance between triangulations of a convex polygon.
//!
//! The flip-distance problem asks for the minimum number of diagonal flips
//! turning one triangulation of a convex n-gon into another; it is NP-hard in
//! general. This crate implements the fixed-parameter branch-and-bound
//! decision procedure: deterministic ("free") flip propagation, independent
//! source-set branching, and divide-and-conquer splitting along shared
//! diagonals.
//!
//! Layout
//! - `triangulation`: the combinatorial data structure (edges, flips,
//!   sub-polygons, encodings, random instances).
//! - `search`: the decision/search core (`FlipDistanceSource`) behind the
//!   `FlipDistance` strategy trait.

pub mod api;
pub mod search;
pub mod triangulation;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::search::{by_name, FlipDistance, FlipDistanceSource, SearchStats};
    pub use crate::triangulation::codec::{encode, parse};
    pub use crate::triangulation::rand::{draw_triangulation, PolygonSize, ReplayToken, SampleCfg};
    pub use crate::triangulation::{Edge, TriangulatedGraph};
}
