//! Random coefficient series with replay tokens.
//!
//! Purpose
//! - Deterministic demo inputs for the CLI and benchmark fixtures.
//!
//! Model
//! - `b_0 = cfg.fundamental`, position 1 is `(0, 0)`, and each harmonic
//!   `k ∈ 2..=cfg.harmonics` draws `a_k, b_k` uniformly from
//!   `[-s_k, s_k]` with `s_k = amplitude / k^decay`.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{CoeffPair, Coefficients};

/// Random-series configuration.
#[derive(Clone, Copy, Debug)]
pub struct SeriesCfg {
    /// Highest harmonic index drawn. Values below 2 give a fundamental-only series.
    pub harmonics: usize,
    /// `b_0`.
    pub fundamental: f64,
    /// Amplitude bound before decay.
    pub amplitude: f64,
    /// Decay exponent; larger values give smoother curves.
    pub decay: f64,
}

impl Default for SeriesCfg {
    fn default() -> Self {
        Self {
            harmonics: 8,
            fundamental: 1.0,
            amplitude: 0.3,
            decay: 1.5,
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
        // SplitMix64 finalizer.
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

#[derive(Debug)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid series params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Draw a random coefficient series.
pub fn draw_series(cfg: SeriesCfg, tok: ReplayToken) -> Result<Coefficients, GeneratorError> {
    if !cfg.fundamental.is_finite() {
        return Err(GeneratorError::invalid("fundamental must be finite"));
    }
    if !cfg.amplitude.is_finite() || cfg.amplitude < 0.0 {
        return Err(GeneratorError::invalid(
            "amplitude must be finite and non-negative",
        ));
    }
    if !cfg.decay.is_finite() || cfg.decay < 0.0 {
        return Err(GeneratorError::invalid("decay must be finite and non-negative"));
    }
    let mut rng = tok.to_std_rng();
    let mut pairs = Vec::with_capacity(cfg.harmonics.max(1) + 1);
    pairs.push(CoeffPair::new(0.0, cfg.fundamental));
    if cfg.harmonics >= 2 {
        pairs.push(CoeffPair::ZERO);
        for k in 2..=cfg.harmonics {
            let s = cfg.amplitude / (k as f64).powf(cfg.decay);
            let a = rng.gen_range(-1.0f64..=1.0) * s;
            let b = rng.gen_range(-1.0f64..=1.0) * s;
            pairs.push(CoeffPair::new(a, b));
        }
    }
    Ok(Coefficients { pairs })
}
