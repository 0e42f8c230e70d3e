//! Strategy construction errors.

use quote_core::types::ValidationError;
use quote_pricing::PricerError;
use thiserror::Error;

/// Errors raised while building a strategy.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StrategyError {
    /// A leg failed to price.
    #[error(transparent)]
    Pricing(#[from] PricerError),

    /// A leg contract failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Iron condor strikes must be strictly increasing.
    #[error("condor strikes must be strictly increasing, got {strikes:?}")]
    StrikesOutOfOrder {
        /// The four strikes as supplied.
        strikes: [f64; 4],
    },

    /// Non-positive strategy quantity.
    #[error("invalid strategy quantity: {quantity}")]
    InvalidQuantity {
        /// The offending quantity.
        quantity: f64,
    },
}
