//! Pricer errors.

use quote_core::types::ValidationError;
use thiserror::Error;

/// Errors raised while pricing a contract.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricerError {
    /// A pricing input failed kernel validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
