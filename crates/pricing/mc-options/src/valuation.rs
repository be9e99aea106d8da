//! Monte Carlo valuation results

use serde::Serialize;

/// Outcome of one valuation pass over `num_trials` discounted payoffs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valuation {
    /// Arithmetic mean of the discounted payoffs, the price estimate
    pub mean: f64,
    /// Population standard deviation (divides by `num_trials`)
    pub stdev: f64,
    /// Number of trials the sample was built from
    pub num_trials: usize,
}

impl Valuation {
    /// Reduce a sample of discounted payoffs. Returns `None` for an empty sample.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            mean,
            stdev: variance.sqrt(),
            num_trials: samples.len(),
        })
    }

    /// Standard error of the mean, `stdev / sqrt(num_trials)`
    #[must_use]
    pub fn stderr(&self) -> f64 {
        if self.num_trials == 0 {
            return 0.0;
        }
        self.stdev / (self.num_trials as f64).sqrt()
    }

    /// Symmetric interval `mean ± z * stderr`
    #[must_use]
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.stderr();
        (self.mean - half_width, self.mean + half_width)
    }
}

/// Standard error of an optional valuation.
///
/// Returns `0.0` when nothing has been valued yet. This is a convention kept
/// for callers that query the error before pricing, not a statistical estimate.
#[must_use]
pub fn standard_error(valuation: Option<&Valuation>) -> f64 {
    valuation.map_or(0.0, Valuation::stderr)
}
