//! Strategy seam for the flip-distance algorithm family.
//!
//! The original family (bfs, dfs, middle, simple, fast, source) shares one
//! decide/solve contract; that maps to a trait with by-name construction at
//! the boundary. Only the `source` strategy is implemented here.

use crate::triangulation::TriangulatedGraph;

use super::source::FlipDistanceSource;
use super::types::SearchStats;

pub trait FlipDistance {
    /// Can the start triangulation reach the target within `k` flips?
    fn flip_distance_decision(&mut self, k: u32) -> bool;
    /// Exact minimum number of flips.
    fn flip_distance(&mut self) -> u32;
    /// Diagnostics accumulated since construction.
    fn stats(&self) -> SearchStats;
}

impl FlipDistance for FlipDistanceSource {
    fn flip_distance_decision(&mut self, k: u32) -> bool {
        FlipDistanceSource::flip_distance_decision(self, k)
    }

    fn flip_distance(&mut self) -> u32 {
        FlipDistanceSource::flip_distance(self)
    }

    fn stats(&self) -> SearchStats {
        FlipDistanceSource::stats(self)
    }
}

/// Construct a strategy by name. `None` for unknown names.
pub fn by_name(
    name: &str,
    start: TriangulatedGraph,
    end: TriangulatedGraph,
) -> Option<Box<dyn FlipDistance>> {
    match name {
        "source" => Some(Box::new(FlipDistanceSource::new(start, end))),
        _ => None,
    }
}
