//! Free-flip propagation.
//!
//! A flip whose resulting diagonal already exists in the target is forced:
//! it costs one budget unit and the matched diagonal splits the problem into
//! two independent sub-polygons. Propagation applies such flips until none
//! remain, over an explicit LIFO stack of pending sub-problems, and returns
//! the stuck frontier for the caller to branch on. Each step strictly
//! shrinks the total remaining polygon size, so propagation terminates.

use crate::triangulation::{vertex_filter, Edge, TriangulatedGraph};

use super::types::{EdgePairs, FdProblem};

/// Open the two triangles bordering the flipped-in diagonal `e` as new
/// source-pair candidates.
pub(crate) fn add_neighbor_pairs(next: &mut EdgePairs, g: &TriangulatedGraph, e: Edge) {
    let nb = g.neighbors(e);
    next.push((nb[0], nb[1]));
    next.push((nb[2], nb[3]));
}

/// Keep only the pairs with all four endpoints inside a sub-polygon and
/// re-index them to its local vertex numbering.
pub(crate) fn filter_and_map_edge_pairs(
    pairs: &EdgePairs,
    filter: impl Fn(usize) -> bool,
    mapper: impl Fn(usize) -> usize,
) -> EdgePairs {
    let inside = |e: Edge| filter(e.a()) && filter(e.b());
    let remap = |e: Edge| Edge::new(mapper(e.a()), mapper(e.b()));
    pairs
        .iter()
        .filter(|&&(e1, e2)| inside(e1) && inside(e2))
        .map(|&(e1, e2)| (remap(e1), remap(e2)))
        .collect()
}

/// Apply every available deterministic flip, decrementing `k` once per flip,
/// and return the sub-problems with no deterministic flip left.
pub fn perform_free_flips(initial: FdProblem, k: &mut i32) -> Vec<FdProblem> {
    let mut pending = vec![initial];
    let mut stuck = Vec::new();
    'problems: while let Some(fd) = pending.pop() {
        let FdProblem {
            current,
            target,
            sources,
        } = fd;
        for e in current.edges() {
            let mut flipped = current.clone();
            let result = flipped.flip(e);
            if target.has_edge(result) {
                *k -= 1;
                // The flipped edge is gone; drop every pair that mentions it.
                let mut next: EdgePairs = sources
                    .iter()
                    .copied()
                    .filter(|&(p, q)| p != e && q != e)
                    .collect();
                add_neighbor_pairs(&mut next, &flipped, result);
                let (v1, v2) = result.endpoints();
                for (a, b) in [(v1, v2), (v2, v1)] {
                    pending.push(FdProblem {
                        current: flipped.sub_graph(a, b),
                        target: target.sub_graph(a, b),
                        sources: filter_and_map_edge_pairs(
                            &next,
                            vertex_filter(a, b),
                            flipped.vertex_mapper(a),
                        ),
                    });
                }
                continue 'problems;
            }
        }
        stuck.push(FdProblem {
            current,
            target,
            sources,
        });
    }
    stuck
}
