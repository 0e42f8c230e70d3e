//! Volatility engine errors.

use thiserror::Error;

/// Errors raised by the volatility estimators.
///
/// Note that surface construction never errors: a chain too sparse to
/// calibrate degrades to the default volatility with a low-confidence flag
/// instead (see [`crate::VolSurface`]).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VolError {
    /// Not enough observations to estimate.
    #[error("insufficient data: got {got} observations, need at least {need}")]
    InsufficientData {
        /// Observations supplied.
        got: usize,
        /// Minimum observations required.
        need: usize,
    },

    /// A price observation was non-positive, so log returns are undefined.
    #[error("non-positive price observation: {price}")]
    NonPositivePrice {
        /// The offending price.
        price: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let err = VolError::InsufficientData { got: 1, need: 3 };
        assert_eq!(
            format!("{}", err),
            "insufficient data: got 1 observations, need at least 3"
        );
    }

    #[test]
    fn test_error_trait() {
        let err = VolError::NonPositivePrice { price: -1.0 };
        let _: &dyn std::error::Error = &err;
    }
}
