//! Print flip distances for a few random instance pairs.
//!
//! Usage:
//!   cargo run -p flipdist --example random_distances -- [polygon-size]
//!
//! Prints each pair's parenthesis encodings, the exact distance, and the
//! number of search branches taken.

use flipdist::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let cfg = SampleCfg {
        size: PolygonSize::Fixed(n),
        warmup_flips: 3 * n,
    };
    for i in 0..5 {
        let a = draw_triangulation(cfg, ReplayToken { seed: 2025, index: 2 * i });
        let b = draw_triangulation(
            cfg,
            ReplayToken {
                seed: 2025,
                index: 2 * i + 1,
            },
        );
        let mut algo = FlipDistanceSource::new(a.clone(), b.clone());
        let d = algo.flip_distance();
        println!(
            "sample {i}: {} -> {} distance={d} branches={}",
            encode(&a),
            encode(&b),
            algo.stats().branches
        );
    }
}
