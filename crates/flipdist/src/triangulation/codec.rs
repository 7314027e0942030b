//! Balanced-parentheses encoding of triangulations.
//!
//! A triangulation of a convex n-gon corresponds to a full binary tree with
//! `n - 1` leaves: the leaves are the boundary edges `(0,1) … (n-2,n-1)`,
//! the root spans the remaining boundary edge `(0, n-1)`, and each internal
//! node spanning `(lo, hi)` picks the apex `mid` of the triangle resting on
//! that edge. The tree is written with `n - 2` parenthesis pairs via
//! `node := '(' node ')' node | ε`, so `"()"` is the triangle and the fully
//! nested `"(((())))"` is the hexagon fan around vertex 0.

use super::graph::TriangulatedGraph;
use super::types::Edge;

enum Node {
    Leaf,
    Internal(Box<Node>, Box<Node>),
}

impl Node {
    fn leaves(&self) -> usize {
        match self {
            Node::Leaf => 1,
            Node::Internal(l, r) => l.leaves() + r.leaves(),
        }
    }
}

fn parse_node(s: &[u8], pos: usize) -> Option<(Node, usize)> {
    if pos < s.len() && s[pos] == b'(' {
        let (left, after_left) = parse_node(s, pos + 1)?;
        if after_left >= s.len() || s[after_left] != b')' {
            return None;
        }
        let (right, after_right) = parse_node(s, after_left + 1)?;
        Some((Node::Internal(Box::new(left), Box::new(right)), after_right))
    } else {
        Some((Node::Leaf, pos))
    }
}

fn emit(node: &Node, lo: usize, hi: usize, diagonals: &mut Vec<Edge>) {
    match node {
        Node::Leaf => debug_assert!(hi == lo + 1),
        Node::Internal(left, right) => {
            let mid = lo + left.leaves();
            if mid - lo > 1 {
                diagonals.push(Edge::new(lo, mid));
            }
            if hi - mid > 1 {
                diagonals.push(Edge::new(mid, hi));
            }
            emit(left, lo, mid, diagonals);
            emit(right, mid, hi, diagonals);
        }
    }
}

/// Parse a parenthesis string into a triangulation. Whitespace is ignored;
/// anything unbalanced, non-parenthesis, or below triangle size is `None`.
pub fn parse(input: &str) -> Option<TriangulatedGraph> {
    let s: Vec<u8> = input.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if s.iter().any(|&b| b != b'(' && b != b')') {
        return None;
    }
    let (tree, consumed) = parse_node(&s, 0)?;
    if consumed != s.len() {
        return None;
    }
    let n = tree.leaves() + 1;
    if n < 3 {
        return None;
    }
    let mut diagonals = Vec::with_capacity(n - 3);
    emit(&tree, 0, n - 1, &mut diagonals);
    TriangulatedGraph::from_diagonals(n, &diagonals)
}

fn write_span(g: &TriangulatedGraph, lo: usize, hi: usize, out: &mut String) {
    if hi - lo == 1 {
        return;
    }
    // Unique inner apex of the edge (lo, hi): pairwise adjacency is a face.
    let mid = (lo + 1..hi)
        .find(|&v| g.has_edge(Edge::new(lo, v)) && g.has_edge(Edge::new(v, hi)))
        .expect("span without a supporting triangle");
    out.push('(');
    write_span(g, lo, mid, out);
    out.push(')');
    write_span(g, mid, hi, out);
}

/// Inverse of [`parse`]: the canonical parenthesis string of a triangulation.
pub fn encode(g: &TriangulatedGraph) -> String {
    let mut out = String::with_capacity(2 * (g.size() - 2));
    write_span(g, 0, g.size() - 1, &mut out);
    out
}
