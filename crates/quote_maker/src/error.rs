//! Market-maker errors.

use quote_pricing::PricerError;
use thiserror::Error;

/// Errors raised by the market-making layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MakerError {
    /// A grid cell failed to price.
    #[error("grid pricing failed: {0}")]
    GridPricing(#[from] PricerError),

    /// Strike grid parameters out of range.
    #[error("invalid strike grid: {reason}")]
    InvalidGrid {
        /// What was wrong.
        reason: String,
    },

    /// A state transition the cycle does not allow.
    #[error("invalid maker transition from {from} to {to}")]
    InvalidTransition {
        /// State before the attempted transition.
        from: &'static str,
        /// Requested target state.
        to: &'static str,
    },
}
