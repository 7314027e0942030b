//! Random triangulations (recursive ear splits + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for test and bench instances.
//!   Draws are reproducible from a `(seed, index)` replay token mixed into a
//!   single RNG.
//!
//! Model
//! - Recursively pick a random apex for each polygon span (a random full
//!   binary tree), then optionally decorrelate with random warm-up flips.
//!   The distribution is not uniform over triangulations; it is adequate for
//!   smoke tests and benches, and every draw is a valid triangulation by
//!   construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::graph::TriangulatedGraph;
use super::types::Edge;

/// Polygon size distribution.
#[derive(Clone, Copy, Debug)]
pub enum PolygonSize {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PolygonSize {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PolygonSize::Fixed(n) => n.max(3),
            PolygonSize::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub size: PolygonSize,
    /// Random flips applied after the initial split, to decorrelate from the
    /// ear-split distribution.
    pub warmup_flips: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            size: PolygonSize::Fixed(12),
            warmup_flips: 16,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn split_span<R: Rng>(rng: &mut R, lo: usize, hi: usize, diagonals: &mut Vec<Edge>) {
    if hi - lo < 2 {
        return;
    }
    let mid = rng.gen_range(lo + 1..hi);
    if mid - lo > 1 {
        diagonals.push(Edge::new(lo, mid));
    }
    if hi - mid > 1 {
        diagonals.push(Edge::new(mid, hi));
    }
    split_span(rng, lo, mid, diagonals);
    split_span(rng, mid, hi, diagonals);
}

/// Draw a random triangulation for the given token.
pub fn draw_triangulation(cfg: SampleCfg, tok: ReplayToken) -> TriangulatedGraph {
    let mut rng = tok.to_std_rng();
    let n = cfg.size.sample(&mut rng);
    let mut diagonals = Vec::with_capacity(n - 3);
    split_span(&mut rng, 0, n - 1, &mut diagonals);
    let mut g = TriangulatedGraph::from_diagonals(n, &diagonals)
        .expect("ear split yields a triangulation");
    if n > 3 {
        for _ in 0..cfg.warmup_flips {
            let diagonals = g.edges();
            let e = diagonals[rng.gen_range(0..diagonals.len())];
            g.flip(e);
        }
    }
    g
}
