//! Typed coefficient pairs and the non-empty `Coefficients` container.

use std::fmt;

use crate::curve::EvalError;

/// Amplitude pair for one harmonic index.
///
/// `a` weights `sin(kt)` and `b` weights `cos(kt)` in the radius of curvature.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CoeffPair {
    pub a: f64,
    pub b: f64,
}

impl CoeffPair {
    pub const ZERO: CoeffPair = CoeffPair { a: 0.0, b: 0.0 };

    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn scaled(self, c: f64) -> Self {
        Self {
            a: self.a * c,
            b: self.b * c,
        }
    }
}

impl From<(f64, f64)> for CoeffPair {
    #[inline]
    fn from((a, b): (f64, f64)) -> Self {
        Self { a, b }
    }
}

/// Ordered coefficient series, indexed from 0. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients {
    pub(super) pairs: Vec<CoeffPair>,
}

#[allow(clippy::len_without_is_empty)]
impl Coefficients {
    /// Wrap an ordered list of pairs; an empty list is rejected.
    pub fn new(pairs: Vec<CoeffPair>) -> Result<Self, EvalError> {
        if pairs.is_empty() {
            return Err(EvalError::EmptyCoefficients);
        }
        Ok(Self { pairs })
    }

    pub fn from_tuples(pairs: &[(f64, f64)]) -> Result<Self, EvalError> {
        Self::new(pairs.iter().copied().map(CoeffPair::from).collect())
    }

    /// Series with only the fundamental `b_0` set.
    pub fn fundamental_only(b0: f64) -> Self {
        Self {
            pairs: vec![CoeffPair::new(0.0, b0)],
        }
    }

    #[inline]
    pub fn pairs(&self) -> &[CoeffPair] {
        &self.pairs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `b_0`, the coefficient of the fundamental term.
    #[inline]
    pub fn fundamental(&self) -> f64 {
        self.pairs[0].b
    }

    /// Contributing harmonics `(k, pair)` for `k ≥ 2`, in increasing order.
    pub fn harmonics(&self) -> impl Iterator<Item = (usize, CoeffPair)> + '_ {
        self.pairs.iter().copied().enumerate().skip(2)
    }

    /// Multiply every `a_k` and `b_k` by `c`.
    pub fn scaled(&self, c: f64) -> Self {
        Self {
            pairs: self.pairs.iter().map(|p| p.scaled(c)).collect(),
        }
    }
}

/// Writes the `a,b~a,b` text form; parses back to the same pairs.
impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("~")?;
            }
            write!(f, "{},{}", p.a, p.b)?;
        }
        Ok(())
    }
}
