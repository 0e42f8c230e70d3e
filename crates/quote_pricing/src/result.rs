//! Pricing data contracts.

use quote_core::types::Greeks;
use serde::{Deserialize, Serialize};

/// Which kernel produced a [`PricingResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingModel {
    /// Closed-form Black–Scholes (European exercise).
    ClosedForm,
    /// CRR binomial lattice (American exercise).
    Lattice,
    /// Contract expired at or before the valuation instant; the price is
    /// intrinsic value and the Greeks are zero.
    Expired,
}

/// Immutable outcome of pricing one contract against one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Theoretical value per unit of underlying (not multiplier-scaled).
    pub price: f64,
    /// Per-unit Greeks in the engine's standard units: theta per calendar
    /// day, vega and rho per volatility/rate point.
    pub greeks: Greeks,
    /// The kernel that produced the value.
    pub model: PricingModel,
}
