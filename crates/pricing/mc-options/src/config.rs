//! Pricing configuration

use serde::{Deserialize, Serialize};

use crate::engine::MonteCarloEngine;
use crate::error::Result;
use crate::process::ProcessParams;

/// Environment variable prefix, e.g. `MC_OPTIONS_RANDOM_SEED=42`
pub const ENV_PREFIX: &str = "MC_OPTIONS";

/// Default periods per year (trading days)
pub const DEFAULT_NPER_PER_YEAR: u32 = 252;

/// Engine and discretization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Fixed base seed; drawn from OS entropy when absent
    pub random_seed: Option<u64>,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
    /// Periods per year used by [`PricingConfig::process`]
    pub nper_per_year: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            parallel: false,
            nper_per_year: DEFAULT_NPER_PER_YEAR,
        }
    }
}

impl PricingConfig {
    /// Load configuration from file, overridden by `MC_OPTIONS_*` variables
    pub fn from_file(path: &str) -> Result<Self> {
        Self::load(Some(path), None)
    }

    /// Load configuration from `MC_OPTIONS_*` variables only
    pub fn from_env() -> Result<Self> {
        Self::load(None, None)
    }

    /// Layer an optional file under the environment. `vars` replaces the
    /// process environment when given.
    fn load(path: Option<&str>, vars: Option<config::Map<String, String>>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Engine described by this configuration
    #[must_use]
    pub fn engine(&self) -> MonteCarloEngine {
        let engine = match self.random_seed {
            Some(seed) => MonteCarloEngine::new(seed),
            None => MonteCarloEngine::from_entropy(),
        };
        engine.with_parallel(self.parallel)
    }

    /// Process descriptor using the configured discretization
    pub fn process(&self, s: f64, t: f64, mu: f64, sigma: f64) -> Result<ProcessParams> {
        ProcessParams::new(s, t, mu, sigma, self.nper_per_year)
    }
}
