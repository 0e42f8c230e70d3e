//! Market-data snapshot captured once per pricing cycle.

use crate::types::{OptionKind, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seconds in a calendar year, matching the 365-day time-to-expiry
/// convention used by the pricing kernels.
const SECONDS_PER_YEAR: f64 = 365.0 * 86_400.0;

/// One quoted entry of an option chain.
///
/// Chain entries are observations supplied by the market-data collaborator;
/// the engine reads them but never writes them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainQuote {
    /// Strike price.
    pub strike: f64,
    /// Expiration timestamp.
    pub expiration: DateTime<Utc>,
    /// Call or put.
    pub kind: OptionKind,
    /// Last traded price.
    pub last: f64,
    /// Best bid.
    pub bid: f64,
    /// Best ask.
    pub ask: f64,
    /// Quoted implied volatility; zero or negative means "not available".
    pub implied_vol: f64,
}

/// Immutable view of the market at a single valuation instant.
///
/// A snapshot is captured once at the start of a pricing cycle and shared
/// read-only by every pricing task in that cycle, which is what makes the
/// grid-quoting and VaR loops safe to run in parallel without locks.
///
/// # Examples
/// ```
/// use quote_core::market_data::MarketSnapshot;
/// use chrono::Utc;
///
/// let snapshot = MarketSnapshot::new(100.0, 0.02, Utc::now(), vec![]).unwrap();
/// assert_eq!(snapshot.spot(), 100.0);
///
/// // Non-positive spot is rejected.
/// assert!(MarketSnapshot::new(0.0, 0.02, Utc::now(), vec![]).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    spot: f64,
    risk_free_rate: f64,
    valuation_time: DateTime<Utc>,
    chain: Vec<ChainQuote>,
}

impl MarketSnapshot {
    /// Creates a snapshot from collaborator-supplied data.
    ///
    /// # Errors
    /// `ValidationError::InvalidSpot` if `spot <= 0`.
    pub fn new(
        spot: f64,
        risk_free_rate: f64,
        valuation_time: DateTime<Utc>,
        chain: Vec<ChainQuote>,
    ) -> Result<Self, ValidationError> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(ValidationError::InvalidSpot { spot });
        }
        Ok(Self {
            spot,
            risk_free_rate,
            valuation_time,
            chain,
        })
    }

    /// Spot price of the underlying at capture time.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free rate (annualised, continuously compounded).
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Valuation timestamp all time-to-expiry calculations use.
    #[inline]
    pub fn valuation_time(&self) -> DateTime<Utc> {
        self.valuation_time
    }

    /// The option chain observed at capture time.
    #[inline]
    pub fn chain(&self) -> &[ChainQuote] {
        &self.chain
    }

    /// Time from the snapshot's valuation instant to `expiration`, in years.
    ///
    /// Expired timestamps yield negative values; callers decide whether that
    /// means "expired, return intrinsic" (the pricer) or "reject" (contract
    /// construction).
    #[inline]
    pub fn years_to(&self, expiration: DateTime<Utc>) -> f64 {
        let seconds = (expiration - self.valuation_time).num_seconds() as f64;
        seconds / SECONDS_PER_YEAR
    }
}
