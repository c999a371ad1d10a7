//! SVG figures with an explicit rendering context.
//!
//! A `Figure` owns its curves and output path. The drawing backend is only
//! opened inside `finish`, which draws, flushes and releases it, so separate
//! figures never share drawing state. Plots use a square canvas and equal
//! axis spans (1:1 aspect).

use anyhow::{bail, Context, Result};
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tangent_curve::api::Sweep;

const PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];
const AXIS: RGBColor = RGBColor(200, 200, 200);
/// Fraction of the data span added around the curves.
const PAD: f64 = 0.05;

struct Curve {
    label: String,
    points: Vec<(f64, f64)>,
}

/// Rendering context for one output file.
pub struct Figure {
    out: PathBuf,
    size: u32,
    curves: Vec<Curve>,
}

impl Figure {
    pub fn new(out: impl Into<PathBuf>, size: u32) -> Self {
        Self {
            out: out.into(),
            size: size.max(16),
            curves: Vec::new(),
        }
    }

    pub fn add_curve(&mut self, label: impl Into<String>, sweep: &Sweep) -> &mut Self {
        self.curves.push(Curve {
            label: label.into(),
            points: sweep.x.iter().copied().zip(sweep.y.iter().copied()).collect(),
        });
        self
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Equal-span x/y ranges covering every curve.
    fn square_extent(&self) -> Option<(Range<f64>, Range<f64>)> {
        let mut pts = self.curves.iter().flat_map(|c| c.points.iter().copied());
        let (x0, y0) = pts.next()?;
        let (mut lo_x, mut hi_x, mut lo_y, mut hi_y) = (x0, x0, y0, y0);
        for (x, y) in pts {
            lo_x = lo_x.min(x);
            hi_x = hi_x.max(x);
            lo_y = lo_y.min(y);
            hi_y = hi_y.max(y);
        }
        let mut span = (hi_x - lo_x).max(hi_y - lo_y);
        if !(span.is_finite()) || span <= 0.0 {
            span = 1.0;
        }
        let half = 0.5 * span * (1.0 + 2.0 * PAD);
        let (cx, cy) = (0.5 * (lo_x + hi_x), 0.5 * (lo_y + hi_y));
        Some(((cx - half)..(cx + half), (cy - half)..(cy + half)))
    }

    /// Draw all curves, flush the SVG to disk and return its path.
    pub fn finish(self) -> Result<PathBuf> {
        let Some((xr, yr)) = self.square_extent() else {
            bail!("figure {} has no curves", self.out.display());
        };
        if let Some(parent) = self.out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating figure dir {}", parent.display()))?;
            }
        }
        render(&self.out, self.size, xr, yr, &self.curves)
            .with_context(|| format!("rendering {}", self.out.display()))?;
        for (i, c) in self.curves.iter().enumerate() {
            tracing::debug!(curve = %c.label, color = i % PALETTE.len(), points = c.points.len(), "figure_curve");
        }
        tracing::info!(out = %self.out.display(), curves = self.curves.len(), size = self.size, "figure_written");
        Ok(self.out)
    }
}

fn render(
    out: &Path,
    size: u32,
    xr: Range<f64>,
    yr: Range<f64>,
    curves: &[Curve],
) -> Result<()> {
    let root = SVGBackend::new(out, (size, size)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(xr.clone(), yr.clone())?;

    // Axes through the origin when it is in view.
    if xr.contains(&0.0) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, yr.start), (0.0, yr.end)],
            AXIS,
        )))?;
    }
    if yr.contains(&0.0) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(xr.start, 0.0), (xr.end, 0.0)],
            AXIS,
        )))?;
    }

    for (i, c) in curves.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        chart.draw_series(LineSeries::new(c.points.iter().copied(), color.stroke_width(2)))?;
    }
    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangent_curve::api::{sweep, Coefficients, SweepCfg};
    use tempfile::tempdir;

    fn circle() -> Sweep {
        sweep(&Coefficients::fundamental_only(1.0), &SweepCfg::default()).unwrap()
    }

    #[test]
    fn extent_is_square_and_covers_points() {
        let mut fig = Figure::new("unused.svg", 200);
        fig.add_curve("circle", &circle());
        let (xr, yr) = fig.square_extent().unwrap();
        let (wx, wy) = (xr.end - xr.start, yr.end - yr.start);
        assert!((wx - wy).abs() < 1e-12);
        assert!(xr.start < -1.0 && xr.end > 1.0);
        assert!(yr.start < 0.0 && yr.end > 2.0);
    }

    #[test]
    fn empty_figure_fails() {
        let dir = tempdir().unwrap();
        let fig = Figure::new(dir.path().join("empty.svg"), 100);
        assert_eq!(fig.len(), 0);
        assert!(fig.finish().is_err());
    }

    #[test]
    fn figures_are_independent() {
        let dir = tempdir().unwrap();
        let wide = Coefficients::fundamental_only(3.0);
        let wide = sweep(&wide, &SweepCfg::default()).unwrap();

        let mut a = Figure::new(dir.path().join("a.svg"), 120);
        a.add_curve("circle", &circle());
        let mut b = Figure::new(dir.path().join("sub/b.svg"), 120);
        b.add_curve("circle", &circle()).add_curve("wide", &wide);
        assert_eq!((a.len(), b.len()), (1, 2));

        let pa = a.finish().unwrap();
        let pb = b.finish().unwrap();
        let sa = fs::read_to_string(pa).unwrap();
        let sb = fs::read_to_string(pb).unwrap();
        assert!(sa.contains("<svg"));
        assert!(sb.contains("<svg"));
        assert!(sb.matches("<polyline").count() > sa.matches("<polyline").count());
    }
}
