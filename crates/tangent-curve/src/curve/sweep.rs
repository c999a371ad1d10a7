//! Uniform angle grids and the sampled point table.

use std::f64::consts::{PI, TAU};
use std::fmt;

use nalgebra::Vector2;

use super::eval::evaluate;
use crate::series::Coefficients;

/// Slack when counting how many steps fit into the range.
const COUNT_EPS: f64 = 1e-9;
/// Upper bound on samples per sweep.
const MAX_SAMPLES: usize = 1 << 24;

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepCfg {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    /// Emit a sample at `end` when it lies on the grid. The default sweep
    /// closes the loop with a final point at `2π`.
    pub include_end: bool,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: TAU,
            step: PI / 100.0,
            include_end: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SweepError {
    InvalidStep { step: f64 },
    InvalidRange { start: f64, end: f64 },
    TooManySamples { count: f64 },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::InvalidStep { step } => {
                write!(f, "sweep step must be finite and positive, got {step}")
            }
            SweepError::InvalidRange { start, end } => {
                write!(f, "sweep range [{start}, {end}] is not a finite, ordered range")
            }
            SweepError::TooManySamples { count } => write!(
                f,
                "sweep would produce {count} samples (limit {MAX_SAMPLES})"
            ),
        }
    }
}

impl std::error::Error for SweepError {}

impl SweepCfg {
    /// Full period with a custom step.
    pub fn with_step(step: f64) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    /// Number of samples the sweep yields.
    pub fn sample_count(&self) -> Result<usize, SweepError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SweepError::InvalidStep { step: self.step });
        }
        if !self.start.is_finite() || !self.end.is_finite() || self.end < self.start {
            return Err(SweepError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        let ratio = (self.end - self.start) / self.step;
        let count = if self.include_end {
            (ratio + COUNT_EPS).floor() + 1.0
        } else {
            (ratio - COUNT_EPS).ceil().max(0.0)
        };
        if count > MAX_SAMPLES as f64 {
            return Err(SweepError::TooManySamples { count });
        }
        Ok(count as usize)
    }

    /// Fresh iterator over the grid; call again to restart.
    pub fn angles(&self) -> Result<AngleSweep, SweepError> {
        let len = self.sample_count()?;
        Ok(AngleSweep {
            start: self.start,
            step: self.step,
            next: 0,
            len,
        })
    }
}

/// Lazy angle grid `θ_i = start + i·step`, `i < len`.
#[derive(Clone, Debug)]
pub struct AngleSweep {
    start: f64,
    step: f64,
    next: usize,
    len: usize,
}

impl Iterator for AngleSweep {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.next >= self.len {
            return None;
        }
        let theta = self.start + self.next as f64 * self.step;
        self.next += 1;
        Some(theta)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for AngleSweep {}

/// Sampled curve as parallel sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sweep {
    pub theta: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Sweep {
    #[inline]
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Vector2::new(x, y))
    }

    /// Axis-aligned bounding box `(min, max)`; `None` for an empty sweep.
    pub fn bounds(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        let mut pts = self.points();
        let first = pts.next()?;
        Some(pts.fold((first, first), |(lo, hi), p| (lo.inf(&p), hi.sup(&p))))
    }

    /// Distance between the first and last sample.
    pub fn closure_gap(&self) -> Option<f64> {
        let first = self.points().next()?;
        let last = self.points().last()?;
        Some((last - first).norm())
    }
}

/// Evaluate the curve at caller-supplied angles, in order.
pub fn points_at<I>(coeffs: &Coefficients, thetas: I) -> Sweep
where
    I: IntoIterator<Item = f64>,
{
    let thetas = thetas.into_iter();
    let cap = thetas.size_hint().0;
    let mut out = Sweep {
        theta: Vec::with_capacity(cap),
        x: Vec::with_capacity(cap),
        y: Vec::with_capacity(cap),
    };
    for theta in thetas {
        let p = evaluate(theta, coeffs);
        out.theta.push(theta);
        out.x.push(p.x);
        out.y.push(p.y);
    }
    out
}

/// Sample the curve on the grid described by `cfg`.
pub fn sweep(coeffs: &Coefficients, cfg: &SweepCfg) -> Result<Sweep, SweepError> {
    Ok(points_at(coeffs, cfg.angles()?))
}
