//! Risk engine errors.

use quote_pricing::PricerError;
use thiserror::Error;

/// Errors raised by the risk engine.
///
/// Limit violations do not appear here; they are returned as data from
/// [`crate::check_limits`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RiskError {
    /// A scenario re-pricing failed; the whole VaR batch is discarded.
    #[error("scenario re-pricing failed: {0}")]
    ScenarioPricing(#[from] PricerError),

    /// VaR configuration out of range.
    #[error("invalid VaR configuration: {reason}")]
    InvalidVarConfig {
        /// What was wrong.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = RiskError::InvalidVarConfig {
            reason: "scenario count must be positive".to_string(),
        };
        assert!(format!("{}", err).contains("scenario count"));
    }
}
