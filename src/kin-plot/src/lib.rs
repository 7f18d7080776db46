//! Diagnostic IBS0 vs. kinship scatter plot, with the classification thresholds overlaid.

use std::path::Path;

use anyhow::Result;
use log::{debug, info};
use plotters::{coord::Shift, prelude::*};

use located_error::LocatedError;
use pedigree::PairwiseRecord;
use trio_inference::Thresholds;

mod error;
pub use error::PlotError;

/// Minimal upper bound of the IBS0 axis.
const MIN_IBS0_AXIS: f64 = 0.006;
/// Upper bound of the kinship axis.
const MAX_KINSHIP_AXIS: f64 = 1.0;
const PLOT_SIZE: (u32, u32) = (800, 600);
/// Number of dashes drawn along each threshold line.
const DASHES: usize = 40;

/// Render a scatter plot of every record (x: IBS0, y: kinship) as an SVG file.
///
/// Threshold lines are drawn as dashed red lines: horizontal at the duplicate and minimum kinship thresholds,
/// vertical at the maximum parent-offspring IBS0. Records falling outside of the axes, or carrying a missing
/// value, are not drawn.
///
/// # Errors
/// - `PlotError::Draw` if any element fails to render.
/// - `PlotError::Present` if the output file cannot be written.
pub fn scatter_plot(records: &[PairwiseRecord], thresholds: &Thresholds, path: &Path) -> Result<()> {
    let x_max = ibs0_axis_limit(thresholds);
    let points: Vec<(f64, f64)> = records.iter()
        .map(|record| (record.ibs0, record.kinship))
        .filter(|&(x, y)| (0.0..=x_max).contains(&x) && (0.0..=MAX_KINSHIP_AXIS).contains(&y))
        .collect();
    debug!("Plotting {} out of {} records", points.len(), records.len());

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    draw(&root, &points, thresholds, x_max)
        .map_err(|e| PlotError::Draw(e.to_string()))
        .loc("While drawing the kinship scatter plot")?;
    root.present()
        .map_err(|_| PlotError::Present(path.display().to_string()))
        .loc("While writing the kinship scatter plot")?;

    info!("Kinship scatter plot written to {}", path.display());
    Ok(())
}

/// Upper bound of the IBS0 axis. Always leaves room for the parent-offspring threshold line.
fn ibs0_axis_limit(thresholds: &Thresholds) -> f64 {
    MIN_IBS0_AXIS.max(1.25 * thresholds.max_parent_ibs0)
}

/// Split the `from -> to` line into `n` dashes, separated by gaps of equal length.
fn dashes(from: (f64, f64), to: (f64, f64), n: usize) -> Vec<[(f64, f64); 2]> {
    let step = |k: f64| {
        let t = k / (2 * n - 1) as f64;
        (from.0 + t * (to.0 - from.0), from.1 + t * (to.1 - from.1))
    };
    (0..n).map(|i| [step((2 * i) as f64), step((2 * i + 1) as f64)]).collect()
}

fn draw<DB: DrawingBackend>(
    root      : &DrawingArea<DB, Shift>,
    points    : &[(f64, f64)],
    thresholds: &Thresholds,
    x_max     : f64,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..MAX_KINSHIP_AXIS)?;

    chart.configure_mesh()
        .x_desc("IBS0")
        .y_desc("Kinship")
        .disable_mesh()
        .draw()?;

    chart.draw_series(points.iter().map(|&point| Circle::new(point, 2, BLUE.mix(0.6).filled())))?;

    let lines = [
        ((0.0, thresholds.min_duplicate_kinship), (x_max, thresholds.min_duplicate_kinship)),
        ((0.0, thresholds.min_kinship), (x_max, thresholds.min_kinship)),
        ((thresholds.max_parent_ibs0, 0.0), (thresholds.max_parent_ibs0, MAX_KINSHIP_AXIS)),
    ];
    for (from, to) in lines {
        chart.draw_series(dashes(from, to, DASHES).into_iter().map(|dash| PathElement::new(dash, RED.stroke_width(2))))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_limit() {
        assert_eq!(ibs0_axis_limit(&Thresholds::default()), MIN_IBS0_AXIS);
        let wide = Thresholds::new(0.09, 0.02, 0.35);
        assert!((ibs0_axis_limit(&wide) - 0.025).abs() < 1e-12);
    }

    #[test]
    fn dashes_span_the_whole_line() {
        let got = dashes((0.0, 0.35), (0.006, 0.35), 3);
        assert_eq!(got.len(), 3);
        assert_eq!(got[0][0], (0.0, 0.35));
        assert!((got[2][1].0 - 0.006).abs() < 1e-12);
        assert!(got.iter().all(|[a, b]| a.1 == 0.35 && b.1 == 0.35 && a.0 < b.0));
    }

    #[test]
    fn write_svg() -> Result<()> {
        let tmpdir = tempfile::tempdir()?;
        let path = tmpdir.path().join("kinship.svg");
        let records = [
            PairwiseRecord::new("A", "B", 0.25, 0.001),
            PairwiseRecord::new("A", "C", 0.49, 0.000),
            PairwiseRecord::new("B", "C", f64::NAN, 0.02),
        ];
        scatter_plot(&records, &Thresholds::default(), &path)?;
        let svg = std::fs::read_to_string(&path)?;
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
        Ok(())
    }
}
