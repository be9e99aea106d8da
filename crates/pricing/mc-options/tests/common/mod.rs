//! Shared configuration, fixtures and reference formulas for mc-options tests

#![allow(dead_code)]

use mc_options::{OptionContract, OptionStyle, ProcessParams};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("mc_options=debug")
            .with_test_writer()
            .try_init()
            .ok(); // Ignore error if already initialized
    });
}

/// Test configuration constants
pub mod config {
    pub const SPOT: f64 = 100.0;
    pub const STRIKE: f64 = 100.0;
    pub const RATE: f64 = 0.05;
    pub const VOLATILITY: f64 = 0.2;
    pub const ONE_YEAR: f64 = 1.0;

    pub const TRADING_DAYS: u32 = 252;
    pub const MONTHLY: u32 = 12;

    pub const FAST_TRIALS: usize = 1_000;
    pub const STANDARD_TRIALS: usize = 10_000;
    pub const PRECISION_TRIALS: usize = 100_000;

    pub const SEED: u64 = 42;
}

/// Reference closed forms used as regression anchors
pub mod reference {
    use std::f64::consts::SQRT_2;

    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / SQRT_2))
    }

    fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
        (d1, d1 - sigma * t.sqrt())
    }

    /// Black-Scholes European call
    pub fn black_scholes_call(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
        let (d1, d2) = d1_d2(s, k, r, sigma, t);
        s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
    }

    /// Black-Scholes European put
    pub fn black_scholes_put(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
        let (d1, d2) = d1_d2(s, k, r, sigma, t);
        k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
    }
}

/// Standard at-the-money process with the given discretization
pub fn standard_process(nper_per_year: u32) -> ProcessParams {
    ProcessParams::new(
        config::SPOT,
        config::ONE_YEAR,
        config::RATE,
        config::VOLATILITY,
        nper_per_year,
    )
    .expect("valid process")
}

/// At-the-money contract on the standard process
pub fn standard_contract(
    style: OptionStyle,
    nper_per_year: u32,
    num_trials: usize,
) -> OptionContract {
    OptionContract::new(
        standard_process(nper_per_year),
        config::STRIKE,
        num_trials,
        style,
    )
    .expect("valid contract")
}
