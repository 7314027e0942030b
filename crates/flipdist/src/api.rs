//! Curated re-export surface.
//!
//! Prefer these re-exports for clarity and consistency across callers; the
//! module paths underneath stay free to shift.

// Triangulation data structure and helpers
pub use crate::triangulation::{vertex_filter, Edge, TriangulatedGraph};
// Encodings
pub use crate::triangulation::codec::{encode, parse};
// Random instances
pub use crate::triangulation::rand::{draw_triangulation, PolygonSize, ReplayToken, SampleCfg};
// Search core
pub use crate::search::{
    by_name, perform_free_flips, EdgePairs, FdProblem, FlipDistance, FlipDistanceSource,
    SearchStats,
};
