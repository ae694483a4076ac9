// File: crates/bench-figures/src/bin/m1.rs
// Summary: Renders the MacBook Air M1 table as an annotated scatter to M1.png.

use anyhow::{Context, Result};
use bench_figures::telemetry::{get_subscriber, init_subscriber};
use tracing::info;

fn main() -> Result<()> {
    init_subscriber(get_subscriber("info"))?;

    let records = bench_figures::m1_records();
    let options = bench_figures::m1_options();
    info!(records = records.len(), "rendering M1 figure");

    scatter_core::render(&records, &options)
        .with_context(|| format!("failed to render {}", options.output_path.display()))?;
    Ok(())
}
