//! Geometric Brownian Motion path simulation
//!
//! Prices evolve multiplicatively over `n = round(nper_per_year * t)` periods of
//! length `dt = 1 / nper_per_year`. Each period draws an independent log-return
//!
//! ```text
//! r_i = (mu - sigma^2 / 2) * dt + sigma * sqrt(dt) * Z_i,   Z_i ~ N(0, 1)
//! ```
//!
//! and the path is `S_0 = s`, `S_i = S_{i-1} * exp(r_i)`. This is the exact
//! discretization of GBM, so no time-step bias is introduced.
//!
//! Randomness is always supplied by the caller. Nothing is cached between
//! calls; two calls with the same generator state produce identical paths.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::Serialize;

use crate::error::{PricingError, Result, ensure_finite, ensure_non_negative, ensure_positive};

/// Upper bound on the number of simulated periods in one path (about 80 MB of
/// `f64` per path)
pub const MAX_PERIODS: usize = 10_000_000;

/// Immutable description of a GBM price process
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessParams {
    s: f64,
    t: f64,
    mu: f64,
    sigma: f64,
    nper_per_year: u32,
    num_periods: usize,
}

impl ProcessParams {
    /// Validate and build a process descriptor.
    ///
    /// The period count is `nper_per_year * t` rounded half-up to the nearest
    /// integer. Zero periods is accepted and yields the single-point path `[s]`.
    pub fn new(s: f64, t: f64, mu: f64, sigma: f64, nper_per_year: u32) -> Result<Self> {
        ensure_positive("s", s)?;
        ensure_positive("t", t)?;
        ensure_finite("mu", mu)?;
        ensure_non_negative("sigma", sigma)?;
        if nper_per_year == 0 {
            return Err(PricingError::invalid(
                "nper_per_year",
                0.0,
                "must be a positive integer",
            ));
        }

        let periods = (f64::from(nper_per_year) * t).round();
        if !periods.is_finite() || periods > MAX_PERIODS as f64 {
            return Err(PricingError::invalid(
                "nper_per_year * t",
                periods,
                "period count out of range",
            ));
        }

        Ok(Self {
            s,
            t,
            mu,
            sigma,
            nper_per_year,
            num_periods: periods as usize,
        })
    }

    /// Initial price
    #[must_use]
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Horizon in years
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Drift, also used as the discount rate
    #[must_use]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Annualized volatility
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[must_use]
    pub fn nper_per_year(&self) -> u32 {
        self.nper_per_year
    }

    /// Number of simulated periods, `n`
    #[must_use]
    pub fn num_periods(&self) -> usize {
        self.num_periods
    }

    /// Length of one period in years
    #[must_use]
    pub fn dt(&self) -> f64 {
        1.0 / f64::from(self.nper_per_year)
    }

    /// Year fractions `0, dt, ..., n * dt`, aligned index-for-index with a path
    #[must_use]
    pub fn time_grid(&self) -> Vec<f64> {
        let dt = self.dt();
        (0..=self.num_periods).map(|i| i as f64 * dt).collect()
    }

    /// Compound a sequence of log-returns into a price path starting at `s`
    #[must_use]
    pub fn path_from_returns(&self, returns: &[f64]) -> Vec<f64> {
        let mut path = Vec::with_capacity(returns.len() + 1);
        let mut current = self.s;
        path.push(current);

        for r in returns {
            current *= r.exp();
            path.push(current);
        }

        path
    }
}

/// Draw `n` independent per-period log-returns
pub fn generate_returns<R: Rng + ?Sized>(params: &ProcessParams, rng: &mut R) -> Vec<f64> {
    let dt = params.dt();
    let drift = (params.mu - 0.5 * params.sigma * params.sigma) * dt;
    let diffusion = params.sigma * dt.sqrt();

    (0..params.num_periods)
        .map(|_| {
            let z: f64 = StandardNormal.sample(&mut *rng);
            drift + diffusion * z
        })
        .collect()
}

/// Simulate one price path of length `n + 1`, starting at `s`
pub fn generate_path<R: Rng + ?Sized>(params: &ProcessParams, rng: &mut R) -> Vec<f64> {
    let returns = generate_returns(params, rng);
    params.path_from_returns(&returns)
}

/// Simulate `num_paths` independent paths from a single generator
pub fn simulate_paths<R: Rng + ?Sized>(
    params: &ProcessParams,
    num_paths: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    (0..num_paths)
        .map(|_| generate_path(params, &mut *rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_period_rounding() {
        // 252 * 0.5 = 126 exactly
        let p = ProcessParams::new(100.0, 0.5, 0.05, 0.2, 252).unwrap();
        assert_eq!(p.num_periods(), 126);

        // 12 * 0.125 = 1.5 rounds up to 2
        let p = ProcessParams::new(100.0, 0.125, 0.05, 0.2, 12).unwrap();
        assert_eq!(p.num_periods(), 2);

        // 12 * 0.1 = 1.2 rounds down to 1
        let p = ProcessParams::new(100.0, 0.1, 0.05, 0.2, 12).unwrap();
        assert_eq!(p.num_periods(), 1);

        // 4 * 0.1 = 0.4 rounds to zero periods
        let p = ProcessParams::new(100.0, 0.1, 0.05, 0.2, 4).unwrap();
        assert_eq!(p.num_periods(), 0);
    }

    #[test]
    fn test_period_cap() {
        let p = ProcessParams::new(100.0, 10.0, 0.05, 0.2, 1_000_000).unwrap();
        assert_eq!(p.num_periods(), MAX_PERIODS);

        // 4e9 periods would need tens of gigabytes per path
        let err = ProcessParams::new(100.0, 1000.0, 0.05, 0.2, 4_000_000).unwrap_err();
        assert!(err.is_invalid_parameters());

        let err = ProcessParams::new(100.0, 10.5, 0.05, 0.2, 1_000_000).unwrap_err();
        assert!(err.is_invalid_parameters());
    }

    #[test]
    fn test_path_from_returns() {
        let p = ProcessParams::new(100.0, 1.0, 0.0, 0.0, 2).unwrap();
        let path = p.path_from_returns(&[0.0, 2.0_f64.ln()]);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], 100.0);
        assert_relative_eq!(path[1], 100.0);
        assert_relative_eq!(path[2], 200.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let p = ProcessParams::new(50.0, 2.0, 0.03, 0.0, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let path = generate_path(&p, &mut rng);
        assert_eq!(path.len(), 9);
        assert_relative_eq!(
            path[8],
            50.0 * (0.03_f64 * 2.0).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_time_grid() {
        let p = ProcessParams::new(100.0, 1.0, 0.05, 0.2, 4).unwrap();
        let grid = p.time_grid();
        assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
