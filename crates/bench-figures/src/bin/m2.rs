// File: crates/bench-figures/src/bin/m2.rs
// Summary: Renders the per-format time/size table as a label-colored scatter with legend to M2.png.

use anyhow::{Context, Result};
use bench_figures::telemetry::{get_subscriber, init_subscriber};
use scatter_core::ScatterChart;
use tracing::info;

fn main() -> Result<()> {
    init_subscriber(get_subscriber("info"))?;

    let chart = ScatterChart::new(bench_figures::m2_records(), bench_figures::m2_options());
    info!(records = chart.records.len(), "rendering M2 figure");

    chart
        .render()
        .with_context(|| format!("failed to render {}", chart.options.output_path.display()))?;
    Ok(())
}
