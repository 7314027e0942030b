use super::codec::{encode, parse};
use super::rand::{draw_triangulation, PolygonSize, ReplayToken, SampleCfg};
use super::*;

use proptest::prelude::*;

fn hexagon_fan0() -> TriangulatedGraph {
    TriangulatedGraph::fan(6)
}

#[test]
fn fan_is_valid_with_expected_diagonals() {
    let g = hexagon_fan0();
    assert_eq!(g.size(), 6);
    assert!(g.is_valid());
    assert_eq!(
        g.edges(),
        vec![Edge::new(0, 2), Edge::new(0, 3), Edge::new(0, 4)]
    );
    assert!(g.has_edge(Edge::new(0, 1))); // boundary is adjacency too
    assert!(!g.flippable(Edge::new(0, 1)));
    assert!(g.flippable(Edge::new(0, 3)));
}

#[test]
fn flip_replaces_by_opposite_diagonal() {
    let mut g = hexagon_fan0();
    let alt = g.flip(Edge::new(0, 3));
    // quadrilateral 0-2-3-4 around the removed diagonal
    assert_eq!(alt, Edge::new(2, 4));
    assert!(g.has_edge(alt));
    assert!(!g.has_edge(Edge::new(0, 3)));
    assert!(g.is_valid());
}

#[test]
fn flip_is_self_inverse() {
    let original = hexagon_fan0();
    for e in original.edges() {
        let mut g = original.clone();
        let alt = g.flip(e);
        g.flip(alt);
        assert_eq!(g, original);
    }
}

#[test]
#[should_panic(expected = "non-flippable")]
fn flip_on_boundary_edge_is_fatal() {
    let mut g = hexagon_fan0();
    g.flip(Edge::new(0, 1));
}

#[test]
fn neighbors_grouped_per_triangle() {
    let g = hexagon_fan0();
    // 0-3 borders triangles 0-2-3 and 0-3-4 (apexes 2 and 4, ascending).
    assert_eq!(
        g.neighbors(Edge::new(0, 3)),
        [
            Edge::new(0, 2),
            Edge::new(2, 3),
            Edge::new(0, 4),
            Edge::new(3, 4),
        ]
    );
}

#[test]
fn share_triangle_needs_closing_edge() {
    let g = hexagon_fan0();
    assert!(g.share_triangle(Edge::new(0, 2), Edge::new(0, 3))); // triangle 0-2-3
    assert!(!g.share_triangle(Edge::new(0, 2), Edge::new(0, 4))); // 2-4 absent
    assert!(!g.share_triangle(Edge::new(0, 2), Edge::new(0, 2)));
}

#[test]
fn sub_graph_reindexes_both_sides() {
    let g = hexagon_fan0();
    let left = g.sub_graph(0, 3); // vertices 0,1,2,3
    assert_eq!(left.size(), 4);
    assert_eq!(left.edges(), vec![Edge::new(0, 2)]);
    let right = g.sub_graph(3, 0); // vertices 3,4,5,0 -> 0,1,2,3
    assert_eq!(right.size(), 4);
    assert_eq!(right.edges(), vec![Edge::new(1, 3)]); // 0-4 re-indexed
}

#[test]
fn vertex_filter_handles_wraparound() {
    let inside = vertex_filter(4, 1);
    assert!(inside(4) && inside(5) && inside(0) && inside(1));
    assert!(!inside(2) && !inside(3));
    let plain = vertex_filter(1, 4);
    assert!(plain(1) && plain(4) && plain(2));
    assert!(!plain(0) && !plain(5));
}

#[test]
fn sources_are_exactly_the_nonempty_independent_sets() {
    let g = hexagon_fan0();
    let sources = g.sources();
    // diagonals 0-2, 0-3, 0-4; only 0-2 and 0-4 are compatible
    assert_eq!(sources.len(), 4);
    assert!(sources.contains(&vec![Edge::new(0, 2), Edge::new(0, 4)]));
    for set in &sources {
        assert!(!set.is_empty());
        for &a in set {
            for &b in set {
                assert!(a == b || !g.share_triangle(a, b));
            }
        }
    }
}

#[test]
fn from_diagonals_rejects_crossings_and_bad_counts() {
    // 1-3 crosses 0-2
    assert!(TriangulatedGraph::from_diagonals(5, &[Edge::new(0, 2), Edge::new(1, 3)]).is_none());
    // too few diagonals
    assert!(TriangulatedGraph::from_diagonals(6, &[Edge::new(0, 2)]).is_none());
    // duplicate
    assert!(TriangulatedGraph::from_diagonals(5, &[Edge::new(0, 2), Edge::new(0, 2)]).is_none());
    assert!(TriangulatedGraph::from_diagonals(5, &[Edge::new(0, 2), Edge::new(0, 3)]).is_some());
}

#[test]
fn codec_round_trips_the_hexagon_fan() {
    let g = hexagon_fan0();
    let s = encode(&g);
    assert_eq!(s, "(((())))");
    assert_eq!(parse(&s).expect("canonical string parses"), g);
}

#[test]
fn codec_parses_the_triangle_and_rejects_garbage() {
    assert_eq!(parse("()").expect("triangle").size(), 3);
    assert!(parse("").is_none()); // below triangle size
    assert!(parse("(()").is_none());
    assert!(parse(")(").is_none());
    assert!(parse("(x)").is_none());
}

#[test]
fn sampler_is_deterministic_per_token() {
    let cfg = SampleCfg {
        size: PolygonSize::Fixed(9),
        warmup_flips: 8,
    };
    let tok = ReplayToken { seed: 42, index: 3 };
    let a = draw_triangulation(cfg, tok);
    let b = draw_triangulation(cfg, tok);
    assert_eq!(a, b);
    assert!(a.is_valid());
    let c = draw_triangulation(cfg, ReplayToken { seed: 42, index: 4 });
    assert_eq!(c.size(), 9);
}

proptest! {
    #[test]
    fn prop_flip_involution(n in 4usize..=12, seed in any::<u64>()) {
        let cfg = SampleCfg { size: PolygonSize::Fixed(n), warmup_flips: 2 * n };
        let original = draw_triangulation(cfg, ReplayToken { seed, index: 0 });
        for e in original.edges() {
            let mut g = original.clone();
            let alt = g.flip(e);
            prop_assert!(g.is_valid());
            g.flip(alt);
            prop_assert_eq!(&g, &original);
        }
    }

    #[test]
    fn prop_codec_round_trip(n in 3usize..=14, seed in any::<u64>()) {
        let cfg = SampleCfg { size: PolygonSize::Fixed(n), warmup_flips: n };
        let g = draw_triangulation(cfg, ReplayToken { seed, index: 1 });
        let back = parse(&encode(&g));
        prop_assert_eq!(back.as_ref(), Some(&g));
    }

    #[test]
    fn prop_sub_graph_sizes_sum(seed in any::<u64>()) {
        let cfg = SampleCfg { size: PolygonSize::Fixed(10), warmup_flips: 10 };
        let g = draw_triangulation(cfg, ReplayToken { seed, index: 2 });
        for e in g.edges() {
            let (v1, v2) = e.endpoints();
            let left = g.sub_graph(v1, v2);
            let right = g.sub_graph(v2, v1);
            prop_assert!(left.is_valid() && right.is_valid());
            // split vertices are shared by both sides
            prop_assert_eq!(left.size() + right.size(), g.size() + 2);
        }
    }
}
