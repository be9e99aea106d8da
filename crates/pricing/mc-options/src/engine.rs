//! Seeded Monte Carlo engine
//!
//! Trial `i` always draws from its own generator seeded by `(random_seed, i)`,
//! so trials are statistically independent and the result does not depend on
//! whether they run sequentially or on the rayon pool. The reduction to mean
//! and standard deviation runs only after every trial has finished.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::instrument;

use crate::contract::OptionContract;
use crate::error::Result;
use crate::payoff::Payoff;
use crate::process::{ProcessParams, generate_path};
use crate::valuation::Valuation;

/// SplitMix64 finalizer
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Monte Carlo simulation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarloEngine {
    /// Base seed every per-trial stream is derived from
    pub random_seed: u64,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
}

impl MonteCarloEngine {
    /// Sequential engine with a fixed seed
    #[must_use]
    pub fn new(random_seed: u64) -> Self {
        Self {
            random_seed,
            parallel: false,
        }
    }

    /// Engine seeded once from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Independent generator for one trial. The base seed is mixed before the
    /// trial index is folded in, so nearby base seeds do not share streams.
    #[must_use]
    pub fn trial_rng(&self, trial: usize) -> StdRng {
        StdRng::seed_from_u64(splitmix64(splitmix64(self.random_seed) ^ trial as u64))
    }

    /// The path trial `trial` would simulate
    #[must_use]
    pub fn path(&self, params: &ProcessParams, trial: usize) -> Vec<f64> {
        generate_path(params, &mut self.trial_rng(trial))
    }

    /// Value a contract with its own payoff rule
    pub fn value(&self, contract: &OptionContract) -> Result<Valuation> {
        let rule = contract.payoff_rule()?;
        self.value_with(contract, rule)
    }

    /// Value a contract under an arbitrary payoff rule
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            style = ?contract.style(),
            trials = contract.num_trials(),
            seed = self.random_seed,
            parallel = self.parallel
        )
    )]
    pub fn value_with<P>(&self, contract: &OptionContract, payoff: &P) -> Result<Valuation>
    where
        P: Payoff + ?Sized,
    {
        let samples = self.discounted_payoffs(contract, payoff);
        contract.reduce(&samples)
    }

    /// Discounted payoff of every trial, in trial order
    pub fn discounted_payoffs<P>(&self, contract: &OptionContract, payoff: &P) -> Vec<f64>
    where
        P: Payoff + ?Sized,
    {
        let run_trial = |i: usize| contract.trial(payoff, &mut self.trial_rng(i));

        if self.parallel {
            (0..contract.num_trials())
                .into_par_iter()
                .map(run_trial)
                .collect()
        } else {
            (0..contract.num_trials()).map(run_trial).collect()
        }
    }
}
