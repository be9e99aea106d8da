//! Option contracts and the valuation protocol
//!
//! A valuation pass simulates `num_trials` independent paths, evaluates the
//! discounted payoff of each, and reduces the sample to a [`Valuation`].
//! Contracts hold no derived state: [`OptionPricer`] is the caller-side holder
//! of the last result.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::engine::MonteCarloEngine;
use crate::error::{PricingError, Result, ensure_positive};
use crate::payoff::{OptionStyle, Payoff, discount_factor};
use crate::process::{ProcessParams, generate_path};
use crate::valuation::{Valuation, standard_error};

/// Option contract specification
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionContract {
    process: ProcessParams,
    strike: f64,
    num_trials: usize,
    style: OptionStyle,
}

impl OptionContract {
    /// Validate and build a contract. An [`OptionStyle::Unbound`] contract can be
    /// constructed but not valued.
    pub fn new(
        process: ProcessParams,
        strike: f64,
        num_trials: usize,
        style: OptionStyle,
    ) -> Result<Self> {
        ensure_positive("x", strike)?;
        if num_trials == 0 {
            return Err(PricingError::invalid(
                "num_trials",
                0.0,
                "must be a positive integer",
            ));
        }

        Ok(Self {
            process,
            strike,
            num_trials,
            style,
        })
    }

    #[must_use]
    pub fn process(&self) -> &ProcessParams {
        &self.process
    }

    /// Strike price `x`
    #[must_use]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    #[must_use]
    pub fn num_trials(&self) -> usize {
        self.num_trials
    }

    #[must_use]
    pub fn style(&self) -> OptionStyle {
        self.style
    }

    /// `exp(-mu * t)`, shared by every payoff rule
    #[must_use]
    pub fn discount_factor(&self) -> f64 {
        discount_factor(self.process.mu(), self.process.t())
    }

    /// Payoff rule bound to the contract's style
    pub fn payoff_rule(&self) -> Result<&'static dyn Payoff> {
        self.style.payoff_rule().ok_or_else(|| {
            warn!(style = ?self.style, "valuation requested for contract without payoff rule");
            PricingError::Unimplemented(self.style)
        })
    }

    /// Run one trial: simulate a path and return its discounted payoff
    pub fn trial<P, R>(&self, payoff: &P, rng: &mut R) -> f64
    where
        P: Payoff + ?Sized,
        R: Rng + ?Sized,
    {
        let path = generate_path(&self.process, rng);
        payoff.discounted(&path, self.strike, self.discount_factor())
    }

    /// Value the contract with its own payoff rule, drawing every trial from `rng`
    pub fn value<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Valuation> {
        let rule = self.payoff_rule()?;
        self.value_with(rule, rng)
    }

    /// Value the contract under an arbitrary payoff rule
    pub fn value_with<P, R>(&self, payoff: &P, rng: &mut R) -> Result<Valuation>
    where
        P: Payoff + ?Sized,
        R: Rng + ?Sized,
    {
        debug!(
            style = ?self.style,
            trials = self.num_trials,
            periods = self.process.num_periods(),
            "starting valuation"
        );

        let samples: Vec<f64> = (0..self.num_trials)
            .map(|_| self.trial(payoff, &mut *rng))
            .collect();

        self.reduce(&samples)
    }

    pub(crate) fn reduce(&self, samples: &[f64]) -> Result<Valuation> {
        let valuation = Valuation::from_samples(samples)
            .ok_or_else(|| PricingError::invalid("num_trials", 0.0, "must be a positive integer"))?;

        info!(
            style = ?self.style,
            mean = valuation.mean,
            stdev = valuation.stdev,
            stderr = valuation.stderr(),
            "valuation complete"
        );

        Ok(valuation)
    }
}

/// A contract together with the result of its most recent valuation
#[derive(Debug, Clone)]
pub struct OptionPricer {
    contract: OptionContract,
    valuation: Option<Valuation>,
}

impl OptionPricer {
    #[must_use]
    pub fn new(contract: OptionContract) -> Self {
        Self {
            contract,
            valuation: None,
        }
    }

    #[must_use]
    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    /// Re-run the valuation from `rng`, replacing any previous result
    pub fn value<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<f64> {
        let valuation = self.contract.value(rng)?;
        Ok(self.record(valuation))
    }

    /// Re-run the valuation on `engine`, replacing any previous result
    pub fn value_on(&mut self, engine: &MonteCarloEngine) -> Result<f64> {
        let valuation = engine.value(&self.contract)?;
        Ok(self.record(valuation))
    }

    fn record(&mut self, valuation: Valuation) -> f64 {
        self.valuation = Some(valuation);
        valuation.mean
    }

    /// Last result, `None` until a valuation has completed
    #[must_use]
    pub fn valuation(&self) -> Option<&Valuation> {
        self.valuation.as_ref()
    }

    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        self.valuation.map(|v| v.mean)
    }

    #[must_use]
    pub fn stdev(&self) -> Option<f64> {
        self.valuation.map(|v| v.stdev)
    }

    /// Standard error of the last valuation, `0.0` before the first one
    #[must_use]
    pub fn stderr(&self) -> f64 {
        standard_error(self.valuation.as_ref())
    }
}
