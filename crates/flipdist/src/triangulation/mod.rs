//! Triangulations of a convex polygon.
//!
//! Purpose
//! - Provide the combinatorial container the search core consumes: edge
//!   enumeration, flips and flip-neighborhoods, triangle-sharing tests,
//!   sub-polygon splitting, and independent-set source enumeration.
//! - Keep the API minimal and value-oriented: triangulations are owned,
//!   cheaply clonable, and mutated only through `flip`.
//!
//! Code cross-refs: `search::{FlipDistanceSource, perform_free_flips}`.

pub mod codec;
mod graph;
pub mod rand;
mod types;

pub use graph::{vertex_filter, TriangulatedGraph};
pub use types::Edge;

#[cfg(test)]
mod tests;
