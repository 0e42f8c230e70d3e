//! Shared vocabulary types for the quote engine.

mod error;
mod greeks;

pub use error::ValidationError;
pub use greeks::Greeks;

use serde::{Deserialize, Serialize};

/// Option kind: call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// Returns the intrinsic value of this kind at the given spot and strike.
    ///
    /// # Examples
    /// ```
    /// use quote_core::types::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
    /// assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

/// Exercise style of an option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseStyle {
    /// Exercisable only at expiration; priced with the closed-form kernel.
    European,
    /// Exercisable at any time up to expiration; priced on the CRR lattice.
    American,
}

impl ExerciseStyle {
    /// Returns `true` for American-style contracts.
    #[inline]
    pub fn is_american(self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}
