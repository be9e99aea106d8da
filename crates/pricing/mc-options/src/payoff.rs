//! Payoff rules for the supported option styles
//!
//! Every rule maps a simulated path and a strike to a non-discounted payoff
//! floored at zero. Discounting is applied uniformly by the valuation protocol,
//! so new payoff structures only need to implement [`Payoff`].

use serde::{Deserialize, Serialize};

/// Capability shared by all payoff rules
pub trait Payoff: Send + Sync {
    /// Non-discounted payoff of one path. Paths are never empty in practice;
    /// an empty slice pays nothing.
    fn payoff(&self, path: &[f64], strike: f64) -> f64;

    /// Payoff scaled by a discount factor
    fn discounted(&self, path: &[f64], strike: f64, discount: f64) -> f64 {
        self.payoff(path, strike) * discount
    }
}

impl<F> Payoff for F
where
    F: Fn(&[f64], f64) -> f64 + Send + Sync,
{
    fn payoff(&self, path: &[f64], strike: f64) -> f64 {
        self(path, strike)
    }
}

/// Present value factor `exp(-mu * t)`
#[inline]
#[must_use]
pub fn discount_factor(mu: f64, t: f64) -> f64 {
    (-mu * t).exp()
}

fn average(path: &[f64]) -> f64 {
    path.iter().sum::<f64>() / path.len() as f64
}

fn maximum(path: &[f64]) -> f64 {
    path.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn minimum(path: &[f64]) -> f64 {
    path.iter().copied().fold(f64::INFINITY, f64::min)
}

/// European call: `max(S_T - x, 0)`
#[derive(Debug, Clone, Copy, Default)]
pub struct EuroCall;

/// European put: `max(x - S_T, 0)`
#[derive(Debug, Clone, Copy, Default)]
pub struct EuroPut;

/// Arithmetic-average Asian call: `max(mean(S) - x, 0)`
#[derive(Debug, Clone, Copy, Default)]
pub struct AsianCall;

/// Arithmetic-average Asian put: `max(x - mean(S), 0)`
#[derive(Debug, Clone, Copy, Default)]
pub struct AsianPut;

/// Fixed-strike lookback call: `max(max(S) - x, 0)`
#[derive(Debug, Clone, Copy, Default)]
pub struct LookbackCall;

/// Fixed-strike lookback put: `max(x - min(S), 0)`
#[derive(Debug, Clone, Copy, Default)]
pub struct LookbackPut;

impl Payoff for EuroCall {
    fn payoff(&self, path: &[f64], strike: f64) -> f64 {
        match path.last() {
            Some(final_price) => (final_price - strike).max(0.0),
            None => 0.0,
        }
    }
}

impl Payoff for EuroPut {
    fn payoff(&self, path: &[f64], strike: f64) -> f64 {
        match path.last() {
            Some(final_price) => (strike - final_price).max(0.0),
            None => 0.0,
        }
    }
}

impl Payoff for AsianCall {
    fn payoff(&self, path: &[f64], strike: f64) -> f64 {
        if path.is_empty() {
            return 0.0;
        }
        (average(path) - strike).max(0.0)
    }
}

impl Payoff for AsianPut {
    fn payoff(&self, path: &[f64], strike: f64) -> f64 {
        if path.is_empty() {
            return 0.0;
        }
        (strike - average(path)).max(0.0)
    }
}

impl Payoff for LookbackCall {
    fn payoff(&self, path: &[f64], strike: f64) -> f64 {
        if path.is_empty() {
            return 0.0;
        }
        (maximum(path) - strike).max(0.0)
    }
}

impl Payoff for LookbackPut {
    fn payoff(&self, path: &[f64], strike: f64) -> f64 {
        if path.is_empty() {
            return 0.0;
        }
        (strike - minimum(path)).max(0.0)
    }
}

/// Variant tag selecting the payoff rule of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionStyle {
    /// European call on the final price
    EuroCall,
    /// European put on the final price
    EuroPut,
    /// Call on the arithmetic path average
    AsianCall,
    /// Put on the arithmetic path average
    AsianPut,
    /// Call on the path maximum
    LookbackCall,
    /// Put on the path minimum
    LookbackPut,
    /// No payoff rule bound yet; valuing it is an error
    Unbound,
}

impl OptionStyle {
    /// Every style with a concrete payoff rule
    pub const PRICED: [OptionStyle; 6] = [
        OptionStyle::EuroCall,
        OptionStyle::EuroPut,
        OptionStyle::AsianCall,
        OptionStyle::AsianPut,
        OptionStyle::LookbackCall,
        OptionStyle::LookbackPut,
    ];

    /// Payoff rule bound to this style, `None` for [`OptionStyle::Unbound`]
    #[must_use]
    pub fn payoff_rule(self) -> Option<&'static dyn Payoff> {
        match self {
            OptionStyle::EuroCall => Some(&EuroCall),
            OptionStyle::EuroPut => Some(&EuroPut),
            OptionStyle::AsianCall => Some(&AsianCall),
            OptionStyle::AsianPut => Some(&AsianPut),
            OptionStyle::LookbackCall => Some(&LookbackCall),
            OptionStyle::LookbackPut => Some(&LookbackPut),
            OptionStyle::Unbound => None,
        }
    }

    #[must_use]
    pub fn is_call(self) -> bool {
        matches!(
            self,
            OptionStyle::EuroCall | OptionStyle::AsianCall | OptionStyle::LookbackCall
        )
    }
}
