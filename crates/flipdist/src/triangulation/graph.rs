//! Triangulations of a convex polygon, stored as canonical adjacency sets.
//!
//! Purpose
//! - Provide the single mutable container the search core operates on:
//!   diagonal enumeration, flips, flip-neighborhoods, triangle-sharing tests,
//!   and sub-polygon extraction along a diagonal.
//!
//! Why this design
//! - Vertices of a convex polygon are in convex position, so a vertex triple
//!   is a face iff its three edges are present; every face-level query
//!   reduces to adjacency lookups.
//! - Per-vertex `BTreeSet` neighbor sets are canonical: derived equality is
//!   exactly triangulation equality, and iteration order is deterministic.

use std::collections::BTreeSet;

use super::types::Edge;

/// Membership test for the cyclic vertex interval from `v1` forward to `v2`.
///
/// Independent of the polygon size, hence a free function; pairs with
/// [`TriangulatedGraph::vertex_mapper`] when re-indexing into a sub-polygon.
pub fn vertex_filter(v1: usize, v2: usize) -> impl Fn(usize) -> bool {
    move |x| {
        if v1 <= v2 {
            v1 <= x && x <= v2
        } else {
            x >= v1 || x <= v2
        }
    }
}

/// A triangulation of a convex polygon with vertices `0..n` in cyclic order.
///
/// Invariants
/// - The `n` boundary edges `(i, i+1 mod n)` are always present.
/// - Exactly `n - 3` non-crossing diagonals; every diagonal borders two
///   triangles, every boundary edge one.
/// - Mutation happens only through [`flip`](Self::flip).
#[derive(Clone, PartialEq, Eq)]
pub struct TriangulatedGraph {
    n: usize,
    adj: Vec<BTreeSet<usize>>,
}

impl TriangulatedGraph {
    /// Polygon with boundary edges only; not a triangulation until `n - 3`
    /// diagonals are inserted. Internal building block for constructors.
    fn hull(n: usize) -> Self {
        debug_assert!(n >= 3);
        let mut adj = vec![BTreeSet::new(); n];
        for i in 0..n {
            let j = (i + 1) % n;
            adj[i].insert(j);
            adj[j].insert(i);
        }
        Self { n, adj }
    }

    /// The fan triangulation: all diagonals incident to vertex 0.
    pub fn fan(n: usize) -> Self {
        let mut g = Self::hull(n);
        for v in 2..n - 1 {
            g.insert(Edge::new(0, v));
        }
        debug_assert!(g.is_valid());
        g
    }

    /// Build from an explicit diagonal set. `None` if the result is not a
    /// valid triangulation of the n-gon.
    pub fn from_diagonals(n: usize, diagonals: &[Edge]) -> Option<Self> {
        if n < 3 {
            return None;
        }
        let mut g = Self::hull(n);
        for &e in diagonals {
            if e.b() >= n || g.has_edge(e) {
                return None;
            }
            g.insert(e);
        }
        if g.is_valid() {
            Some(g)
        } else {
            None
        }
    }

    fn insert(&mut self, e: Edge) {
        self.adj[e.a()].insert(e.b());
        self.adj[e.b()].insert(e.a());
    }

    fn remove(&mut self, e: Edge) {
        self.adj[e.a()].remove(&e.b());
        self.adj[e.b()].remove(&e.a());
    }

    /// Number of polygon vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Is `e` an edge of the polygon boundary (as opposed to a diagonal)?
    #[inline]
    pub fn is_boundary(&self, e: Edge) -> bool {
        e.b() - e.a() == 1 || (e.a() == 0 && e.b() == self.n - 1)
    }

    /// Membership test, boundary edges included.
    #[inline]
    pub fn has_edge(&self, e: Edge) -> bool {
        e.b() < self.n && self.adj[e.a()].contains(&e.b())
    }

    /// The current diagonals, ascending by endpoint pair.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::with_capacity(self.n.saturating_sub(3));
        for a in 0..self.n {
            for &b in self.adj[a].range(a + 1..) {
                let e = Edge::new(a, b);
                if !self.is_boundary(e) {
                    out.push(e);
                }
            }
        }
        out
    }

    /// Vertices adjacent to both endpoints of `e`. In a triangulation these
    /// are exactly the apexes of the faces bordering `e`: two for a diagonal,
    /// one for a boundary edge.
    fn apexes(&self, e: Edge) -> Vec<usize> {
        self.adj[e.a()]
            .intersection(&self.adj[e.b()])
            .copied()
            .collect()
    }

    /// A present diagonal can always be flipped; a boundary edge never.
    #[inline]
    pub fn flippable(&self, e: Edge) -> bool {
        self.has_edge(e) && !self.is_boundary(e)
    }

    /// Replace diagonal `e` by the opposite diagonal of its surrounding
    /// quadrilateral and return it. Self-inverse. Fatal if `e` is not
    /// flippable: that is an algorithm bug, not an input condition.
    pub fn flip(&mut self, e: Edge) -> Edge {
        assert!(self.flippable(e), "flip on non-flippable edge {e:?}");
        let ap = self.apexes(e);
        assert!(ap.len() == 2, "diagonal {e:?} without two faces");
        let alt = Edge::new(ap[0], ap[1]);
        self.remove(e);
        self.insert(alt);
        alt
    }

    /// The four edges surrounding diagonal `e`, grouped per bordering
    /// triangle: `[(a,p), (b,p), (a,q), (b,q)]` for apexes `p`, `q`.
    pub fn neighbors(&self, e: Edge) -> [Edge; 4] {
        let ap = self.apexes(e);
        assert!(ap.len() == 2, "neighbors of non-diagonal {e:?}");
        let (a, b) = e.endpoints();
        [
            Edge::new(a, ap[0]),
            Edge::new(b, ap[0]),
            Edge::new(a, ap[1]),
            Edge::new(b, ap[1]),
        ]
    }

    /// Do two distinct edges border a common triangle? Basis of the
    /// independent-set constraint on source sets.
    pub fn share_triangle(&self, e1: Edge, e2: Edge) -> bool {
        debug_assert!(self.has_edge(e1) && self.has_edge(e2));
        if e1 == e2 {
            return false;
        }
        let (a1, b1) = e1.endpoints();
        let shared = if e2.touches(a1) {
            a1
        } else if e2.touches(b1) {
            b1
        } else {
            return false;
        };
        let x = a1 + b1 - shared;
        let y = e2.a() + e2.b() - shared;
        // The closing edge completes a triangle iff present (convex position).
        x != y && self.has_edge(Edge::new(x, y))
    }

    /// Re-index vertices of the side from `v1` forward to `v2` onto `0..m`.
    pub fn vertex_mapper(&self, v1: usize) -> impl Fn(usize) -> usize {
        let n = self.n;
        move |x| (x + n - v1) % n
    }

    /// The sub-polygon on the side from `v1` cyclically forward to `v2`,
    /// with vertices re-indexed from 0. `(v1, v2)` becomes a boundary edge
    /// of the result; the opposite side is `sub_graph(v2, v1)`.
    pub fn sub_graph(&self, v1: usize, v2: usize) -> TriangulatedGraph {
        let m = (v2 + self.n - v1) % self.n + 1;
        debug_assert!(m >= 3, "degenerate split {v1}..{v2}");
        let in_side = vertex_filter(v1, v2);
        let map = self.vertex_mapper(v1);
        let mut g = Self::hull(m);
        for e in self.edges() {
            let (a, b) = e.endpoints();
            if in_side(a) && in_side(b) {
                let mapped = Edge::new(map(a), map(b));
                if !g.is_boundary(mapped) {
                    g.insert(mapped);
                }
            }
        }
        debug_assert!(g.is_valid());
        g
    }

    /// Every non-empty independent set of diagonals, by backtracking.
    ///
    /// These are the candidate first-move sets of the decision driver: the
    /// first layer of any flip sequence (the flips with no predecessor) is an
    /// independent set, so branching over all of them is complete.
    pub fn sources(&self) -> Vec<Vec<Edge>> {
        let diagonals = self.edges();
        let mut out = Vec::new();
        let mut cur = Vec::new();
        self.collect_sources(&diagonals, 0, &mut cur, &mut out);
        out
    }

    fn collect_sources(
        &self,
        diagonals: &[Edge],
        index: usize,
        cur: &mut Vec<Edge>,
        out: &mut Vec<Vec<Edge>>,
    ) {
        if index == diagonals.len() {
            if !cur.is_empty() {
                out.push(cur.clone());
            }
            return;
        }
        self.collect_sources(diagonals, index + 1, cur, out);
        let e = diagonals[index];
        if cur.iter().all(|&c| !self.share_triangle(c, e)) {
            cur.push(e);
            self.collect_sources(diagonals, index + 1, cur, out);
            cur.pop();
        }
    }

    /// Structural validity: `n - 3` diagonals, two faces per diagonal, one
    /// per boundary edge. Crossing diagonals fail the face counts.
    pub fn is_valid(&self) -> bool {
        if self.n < 3 {
            return false;
        }
        let diagonals = self.edges();
        if diagonals.len() != self.n - 3 {
            return false;
        }
        if diagonals.iter().any(|&e| self.apexes(e).len() != 2) {
            return false;
        }
        (0..self.n).all(|i| {
            let e = Edge::new(i, (i + 1) % self.n);
            self.apexes(e).len() == 1
        })
    }
}

impl std::fmt::Debug for TriangulatedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}{:?}", self.n, self.edges())
    }
}
