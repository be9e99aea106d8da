//! Error types for option valuation

use thiserror::Error;

use crate::payoff::OptionStyle;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, PricingError>;

/// Pricing error types
#[derive(Debug, Error)]
pub enum PricingError {
    /// A process or contract parameter is outside its valid domain
    #[error("Invalid parameter {parameter} = {value}: {constraint}")]
    InvalidParameters {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value that was supplied
        value: f64,
        /// Human readable constraint that was violated
        constraint: &'static str,
    },

    /// Valuation requested for a contract with no payoff rule bound
    #[error("No payoff rule bound for option style {0:?}")]
    Unimplemented(OptionStyle),

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl PricingError {
    pub(crate) fn invalid(parameter: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::InvalidParameters {
            parameter,
            value,
            constraint,
        }
    }

    /// True for construction-time validation failures
    #[must_use]
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, Self::InvalidParameters { .. })
    }
}

/// Require a finite, strictly positive value
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(parameter, value, "must be finite and > 0"))
    }
}

/// Require a finite, non-negative value
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(parameter, value, "must be finite and >= 0"))
    }
}

/// Require a finite value
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid(parameter, value, "must be finite"))
    }
}
