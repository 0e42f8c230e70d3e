//! Validation error taxonomy shared by the pricing layers.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Input validation errors.
///
/// Validation failures are local and fatal to the single pricing call that
/// produced them; they are never silently corrected. Numerical
/// non-convergence and data insufficiency are deliberately *not* represented
/// here — those degrade gracefully through flags on result types.
///
/// # Examples
/// ```
/// use quote_core::types::ValidationError;
///
/// let err = ValidationError::InvalidStrike { strike: -5.0 };
/// assert!(format!("{}", err).contains("strike"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Non-positive spot price.
    #[error("invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The offending spot price.
        spot: f64,
    },

    /// Non-positive strike price.
    #[error("invalid strike: K = {strike}")]
    InvalidStrike {
        /// The offending strike.
        strike: f64,
    },

    /// Negative or zero volatility (the T = 0 expiry case is handled
    /// separately and does not reach this error).
    #[error("invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The offending volatility.
        volatility: f64,
    },

    /// Negative time to expiration.
    #[error("invalid time to expiration: T = {expiry}")]
    InvalidExpiry {
        /// The offending time to expiration in years.
        expiry: f64,
    },

    /// Contract expiration lies in the past at construction time.
    #[error("expiration {expiration} is in the past at valuation time {valuation}")]
    ExpirationInPast {
        /// The contract's expiration timestamp.
        expiration: DateTime<Utc>,
        /// The valuation timestamp it was compared against.
        valuation: DateTime<Utc>,
    },

    /// Non-positive contract multiplier.
    #[error("invalid contract multiplier: {multiplier}")]
    InvalidMultiplier {
        /// The offending multiplier.
        multiplier: f64,
    },

    /// Lattice step count below the minimum of 1.
    #[error("invalid lattice step count: {steps}")]
    InvalidSteps {
        /// The offending step count.
        steps: usize,
    },
}
