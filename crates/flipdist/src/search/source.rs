//! The "source" strategy: budgeted branch-and-bound over committed
//! independent source sets.
//!
//! Entry points: `flip_distance_decision` (the decision driver) and
//! `flip_distance` (minimum over increasing budgets). The recursive layers
//! underneath are `split_and_search` (divide-and-conquer along a diagonal
//! common to both triangulations), `search_pairs` (backtracking enumeration
//! of independent source subsets from candidate pairs), and
//! `search_committed` (the branch-and-bound step proper).
//!
//! Probes operate on owned clones of the triangulation; no caller-visible
//! graph is ever mutated. Invariant violations are programming bugs and
//! assert, negative search results are ordinary `false` returns.

use std::collections::HashMap;

use crate::triangulation::{Edge, TriangulatedGraph};

use super::propagate::{add_neighbor_pairs, perform_free_flips};
use super::types::{EdgePairs, FdProblem, SearchStats};

fn no_common_edge(a: &TriangulatedGraph, b: &TriangulatedGraph) -> bool {
    a.edges().iter().all(|&e| !b.has_edge(e))
}

fn is_independent_set(sources: &[Edge], g: &TriangulatedGraph) -> bool {
    sources
        .iter()
        .all(|&e1| sources.iter().all(|&e2| e1 == e2 || !g.share_triangle(e1, e2)))
}

fn forbid_insert(forbid: &mut HashMap<Edge, u32>, g: &TriangulatedGraph, e: Edge) {
    *forbid.entry(e).or_insert(0) += 1;
    for nb in g.neighbors(e) {
        *forbid.entry(nb).or_insert(0) += 1;
    }
}

fn forbid_remove(forbid: &mut HashMap<Edge, u32>, g: &TriangulatedGraph, e: Edge) {
    remove_one(forbid, e);
    for nb in g.neighbors(e) {
        remove_one(forbid, nb);
    }
}

fn remove_one(forbid: &mut HashMap<Edge, u32>, e: Edge) {
    if let Some(count) = forbid.get_mut(&e) {
        *count -= 1;
        if *count == 0 {
            forbid.remove(&e);
        }
    }
}

/// Exact flip-distance solver for one (start, end) pair.
pub struct FlipDistanceSource {
    start: TriangulatedGraph,
    end: TriangulatedGraph,
    stats: SearchStats,
}

impl FlipDistanceSource {
    pub fn new(start: TriangulatedGraph, end: TriangulatedGraph) -> Self {
        assert_eq!(
            start.size(),
            end.size(),
            "triangulations of different polygons"
        );
        Self {
            start,
            end,
            stats: SearchStats::default(),
        }
    }

    /// Diagnostics accumulated by this solver, sub-solvers included.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Decision driver: can `start` reach `end` within `k` flips?
    pub fn flip_distance_decision(&mut self, k: u32) -> bool {
        if self.start == self.end {
            return true;
        }
        let g = self.start.clone();
        for e in g.edges() {
            // A diagonal shared with the target partitions the polygon for
            // good; solve the halves independently.
            if self.end.has_edge(e) {
                return self.split_and_search(&g, e, k as i32);
            }
            let mut probe = g.clone();
            let result = probe.flip(e);
            if self.end.has_edge(result) {
                return self.split_and_search(&probe, result, k as i32 - 1);
            }
        }
        // No deterministic reduction: branch over structural first-move sets.
        for source in self.start.sources() {
            if self.search_committed(&source, &g, k as i32) {
                return true;
            }
        }
        false
    }

    /// Exact minimum flip distance, by iterating decision budgets upward.
    pub fn flip_distance(&mut self) -> u32 {
        let bound = 2 * (self.start.size() as u32) - 6;
        (0..=bound)
            .find(|&k| self.flip_distance_decision(k))
            .unwrap_or(bound)
    }

    /// Branch-and-bound step: `true` iff `g` reaches the target within `k`
    /// flips, with the committed independent set `sources` as first moves.
    fn search_committed(&mut self, sources: &[Edge], g: &TriangulatedGraph, k: i32) -> bool {
        self.stats.branches += 1;
        debug_assert!(no_common_edge(g, &self.end), "shared diagonal past a split");
        debug_assert!(is_independent_set(sources, g), "interfering source set");
        if *g == self.end && k >= 0 {
            return true;
        }
        // Every remaining diagonal differs from the target, and the source
        // flips themselves fix none of them.
        if g.size() as i32 - 3 > k - sources.len() as i32 {
            return false;
        }
        if sources.is_empty() {
            return false;
        }
        // A flip that lands in the target is forced; it is legal only if the
        // flipped edge was itself committed.
        for e in g.edges() {
            let mut probe = g.clone();
            let result = probe.flip(e);
            if self.end.has_edge(result) {
                return sources.contains(&e) && self.split_and_search(&probe, result, k - 1);
            }
        }
        // Commit: flip all sources simultaneously and open the neighborhoods
        // of the resulting diagonals as the next candidate pairs.
        let mut flipped = g.clone();
        let mut next = EdgePairs::new();
        for &e in sources {
            assert!(flipped.flippable(e), "committed source {e:?} not flippable");
            let result = flipped.flip(e);
            add_neighbor_pairs(&mut next, &flipped, result);
        }
        let mut k = k - sources.len() as i32;
        let stuck = perform_free_flips(
            FdProblem {
                current: flipped,
                target: self.end.clone(),
                sources: next,
            },
            &mut k,
        );
        if k < 0 {
            return false;
        }
        for prob in stuck {
            // Minimum extra budget for this sub-problem, tried from 0 upward.
            let mut sub = FlipDistanceSource::new(prob.current.clone(), prob.target);
            let mut need = None;
            for i in 0..=k {
                if sub.search_pairs(&prob.sources, &prob.current, i) {
                    need = Some(i);
                    break;
                }
            }
            self.stats.branches += sub.stats.branches;
            match need {
                Some(i) => k -= i,
                None => return false,
            }
        }
        k >= 0
    }

    /// Backtracking enumeration of independent source subsets: at most one
    /// edge per candidate pair, no two sharing a triangle. Invokes
    /// `search_committed` on each subset, short-circuiting on success.
    fn search_pairs(&mut self, pairs: &EdgePairs, g: &TriangulatedGraph, k: i32) -> bool {
        debug_assert!(no_common_edge(g, &self.end), "shared diagonal past a split");
        let mut chosen = Vec::new();
        let mut forbid = HashMap::new();
        self.enumerate_sources(pairs, 0, g, k, &mut chosen, &mut forbid)
    }

    fn enumerate_sources(
        &mut self,
        pairs: &EdgePairs,
        index: usize,
        g: &TriangulatedGraph,
        k: i32,
        chosen: &mut Vec<Edge>,
        forbid: &mut HashMap<Edge, u32>,
    ) -> bool {
        if index == pairs.len() {
            return self.search_committed(chosen, g, k);
        }
        // Omitting the pair first is a tie-break policy, not a correctness
        // requirement.
        if self.enumerate_sources(pairs, index + 1, g, k, chosen, forbid) {
            return true;
        }
        let (a, b) = pairs[index];
        for e in [a, b] {
            if !g.flippable(e) || forbid.contains_key(&e) {
                continue;
            }
            forbid_insert(forbid, g, e);
            chosen.push(e);
            let ret = self.enumerate_sources(pairs, index + 1, g, k, chosen, forbid);
            chosen.pop();
            forbid_remove(forbid, g, e);
            if ret {
                return true;
            }
        }
        false
    }

    /// Split along a diagonal common to `g` and the target and solve the
    /// halves independently: scan first-half budgets from the smallest
    /// possible upward; on the first feasible one the remainder must serve
    /// for the second half (feasibility is monotone in the budget).
    ///
    /// Source commitments deliberately do not cross a split; see DESIGN.md.
    fn split_and_search(&mut self, g: &TriangulatedGraph, divider: Edge, k: i32) -> bool {
        if k <= 0 {
            return *g == self.end && k == 0;
        }
        let (v1, v2) = divider.endpoints();
        let mut first = FlipDistanceSource::new(g.sub_graph(v1, v2), self.end.sub_graph(v1, v2));
        let mut second = FlipDistanceSource::new(g.sub_graph(v2, v1), self.end.sub_graph(v2, v1));
        // Each first-half diagonal missing from its target costs at least one
        // flip; an already-equal half must not be charged anything.
        let lo = first
            .start
            .edges()
            .iter()
            .filter(|&&e| !first.end.has_edge(e))
            .count() as i32;
        let mut ret = false;
        for i in lo..=k {
            if first.flip_distance_decision(i as u32) {
                ret = second.flip_distance_decision((k - i) as u32);
                break;
            }
        }
        self.stats.branches += first.stats.branches + second.stats.branches;
        ret
    }
}
