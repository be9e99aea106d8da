//! Monte Carlo Option Valuation
//!
//! Prices European, Asian and lookback calls and puts by simulating a
//! geometric Brownian motion and averaging discounted payoffs.
//!
//! Features:
//! - Exact lognormal path simulation with caller-supplied randomness
//! - One payoff rule per option style behind the [`Payoff`] capability
//! - Mean, population standard deviation and standard error per valuation
//! - Seeded engine with independent per-trial streams and optional rayon parallelism
//! - File and environment configuration
//!
//! ```rust
//! use mc_options::{MonteCarloEngine, OptionContract, OptionPricer, OptionStyle, ProcessParams};
//!
//! let process = ProcessParams::new(100.0, 1.0, 0.05, 0.2, 52)?;
//! let contract = OptionContract::new(process, 100.0, 2_000, OptionStyle::AsianCall)?;
//!
//! let mut pricer = OptionPricer::new(contract);
//! assert_eq!(pricer.stderr(), 0.0);
//!
//! let price = pricer.value_on(&MonteCarloEngine::new(42))?;
//! assert!(price > 0.0);
//! assert!(pricer.stderr() > 0.0);
//! # Ok::<(), mc_options::PricingError>(())
//! ```

pub mod config;
pub mod contract;
pub mod engine;
pub mod error;
pub mod payoff;
pub mod process;
pub mod valuation;

pub use crate::config::PricingConfig;
pub use contract::{OptionContract, OptionPricer};
pub use engine::MonteCarloEngine;
pub use error::{PricingError, Result};
pub use payoff::{
    AsianCall, AsianPut, EuroCall, EuroPut, LookbackCall, LookbackPut, OptionStyle, Payoff,
    discount_factor,
};
pub use process::{ProcessParams, generate_path, generate_returns, simulate_paths};
pub use valuation::{Valuation, standard_error};
