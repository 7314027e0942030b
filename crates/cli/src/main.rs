use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use flipdist::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Exact flip distance between triangulations of a convex polygon")]
struct Cmd {
    /// First triangulation, as a balanced-parentheses string
    first: String,

    /// Second triangulation of the same polygon
    second: String,

    /// Algorithm name
    #[arg(long, default_value = "source")]
    algo: String,

    /// Decide every budget 1..=2n-6 instead of computing the minimum
    #[arg(long)]
    decision: bool,

    /// Print a JSON stats line at the end
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    // Usage errors exit 1, like every other failure here.
    let cmd = Cmd::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(1);
    });
    let g = parse(&cmd.first).context("first triangulation does not parse")?;
    let h = parse(&cmd.second).context("second triangulation does not parse")?;
    if g.size() != h.size() {
        bail!(
            "triangulations of different polygons ({} vs {} vertices)",
            g.size(),
            h.size()
        );
    }
    let n = g.size();
    let mut algo = by_name(&cmd.algo, g, h)
        .with_context(|| format!("no algorithm named {} found", cmd.algo))?;
    tracing::info!(n, algo = %cmd.algo, decision = cmd.decision, "run");

    let started = Instant::now();
    if cmd.decision {
        for k in 1..=(2 * n as u32).saturating_sub(6) {
            let t0 = Instant::now();
            let feasible = algo.flip_distance_decision(k);
            println!("{} {:.2}", u8::from(feasible), t0.elapsed().as_secs_f64());
        }
    } else {
        let d = algo.flip_distance();
        println!("{d}");
        println!("{:.2}", started.elapsed().as_secs_f64());
    }
    if cmd.stats {
        let stats = serde_json::json!({
            "algo": cmd.algo,
            "size": n,
            "branches": algo.stats().branches,
            "elapsed_s": started.elapsed().as_secs_f64(),
        });
        println!("{stats}");
    }
    Ok(())
}
