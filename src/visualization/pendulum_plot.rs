//! Static chart of the batch comparison
//!
//! Draws the x/y path of every recorded run as a named line series and
//! writes the chart as SVG.

use std::path::Path;

use anyhow::{bail, Result};
use plotters::prelude::*;
use tracing::info;

use crate::simulation::scenario::LabeledRun;

const CHART_SIZE: (u32, u32) = (1200, 900);
const TITLE: &str = "Elastic pendulum";

/// Render `runs` into an SVG at `path`
pub fn plot_runs(path: &Path, runs: &[LabeledRun]) -> Result<()> {
    if runs.iter().all(|r| r.trajectory.is_empty()) {
        bail!("Plot error: no samples to draw.");
    }

    // Bounds over every run
    let mut xmin = f64::INFINITY;
    let mut xmax = f64::NEG_INFINITY;
    let mut ymin = f64::INFINITY;
    let mut ymax = f64::NEG_INFINITY;
    for (x, y) in runs.iter().flat_map(|r| r.trajectory.positions()) {
        xmin = xmin.min(x);
        xmax = xmax.max(x);
        ymin = ymin.min(y);
        ymax = ymax.max(y);
    }
    if !(xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite()) {
        bail!("Plot error: trajectory is not finite.");
    }

    let xpad = 0.05 * (xmax - xmin).abs().max(1e-9);
    let ypad = 0.05 * (ymax - ymin).abs().max(1e-9);

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(TITLE, ("sans-serif", 40))
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d((xmin - xpad)..(xmax + xpad), (ymin - ypad)..(ymax + ypad))?;

    chart
        .configure_mesh()
        .x_desc("mass pos X")
        .y_desc("mass pos Y")
        .x_label_formatter(&|v| format!("{:.1}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()?;

    for (i, run) in runs.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(LineSeries::new(run.trajectory.positions(), color.stroke_width(2)))?
            .label(run.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    info!(path = %path.display(), series = runs.len(), "chart written");
    Ok(())
}
