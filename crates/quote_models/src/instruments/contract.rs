//! Option contract definition.

use chrono::{DateTime, Utc};
use quote_core::types::{ExerciseStyle, OptionKind, ValidationError};
use serde::{Deserialize, Serialize};

/// Default contract multiplier (shares per contract).
pub const DEFAULT_MULTIPLIER: f64 = 100.0;

/// A single listed option contract.
///
/// Contracts are immutable once constructed: re-pricing produces a new
/// result, never a mutation of the contract itself. Observed market fields
/// (last/bid/ask/implied vol) describe the chain snapshot the contract was
/// built from.
///
/// # Examples
/// ```
/// use quote_models::instruments::OptionContract;
/// use quote_core::types::{ExerciseStyle, OptionKind};
/// use chrono::{Duration, Utc};
///
/// let valuation = Utc::now();
/// let contract = OptionContract::new(
///     "AAPL_C_180",
///     "AAPL",
///     OptionKind::Call,
///     ExerciseStyle::American,
///     180.0,
///     valuation + Duration::days(30),
///     valuation,
/// ).unwrap();
///
/// assert_eq!(contract.strike(), 180.0);
/// assert_eq!(contract.multiplier(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    symbol: String,
    underlying: String,
    kind: OptionKind,
    style: ExerciseStyle,
    strike: f64,
    expiration: DateTime<Utc>,
    multiplier: f64,
    last_price: f64,
    bid: f64,
    ask: f64,
    implied_vol: f64,
}

impl OptionContract {
    /// Creates a new contract, validating strike and expiration.
    ///
    /// # Arguments
    /// * `symbol` - Contract identifier
    /// * `underlying` - Underlying asset identifier
    /// * `kind` - Call or put
    /// * `style` - European or American exercise
    /// * `strike` - Strike price (must be positive)
    /// * `expiration` - Expiration timestamp (must not be before `valuation`)
    /// * `valuation` - The snapshot instant the contract is created against
    ///
    /// # Errors
    /// - `ValidationError::InvalidStrike` if `strike <= 0`
    /// - `ValidationError::ExpirationInPast` if `expiration < valuation`
    pub fn new(
        symbol: impl Into<String>,
        underlying: impl Into<String>,
        kind: OptionKind,
        style: ExerciseStyle,
        strike: f64,
        expiration: DateTime<Utc>,
        valuation: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if strike <= 0.0 || !strike.is_finite() {
            return Err(ValidationError::InvalidStrike { strike });
        }
        if expiration < valuation {
            return Err(ValidationError::ExpirationInPast {
                expiration,
                valuation,
            });
        }
        Ok(Self {
            symbol: symbol.into(),
            underlying: underlying.into(),
            kind,
            style,
            strike,
            expiration,
            multiplier: DEFAULT_MULTIPLIER,
            last_price: 0.0,
            bid: 0.0,
            ask: 0.0,
            implied_vol: 0.0,
        })
    }

    /// Overrides the contract multiplier.
    ///
    /// # Errors
    /// `ValidationError::InvalidMultiplier` if `multiplier <= 0`.
    pub fn with_multiplier(mut self, multiplier: f64) -> Result<Self, ValidationError> {
        if multiplier <= 0.0 || !multiplier.is_finite() {
            return Err(ValidationError::InvalidMultiplier { multiplier });
        }
        self.multiplier = multiplier;
        Ok(self)
    }

    /// Attaches observed market data from the chain snapshot.
    pub fn with_market_quote(mut self, last: f64, bid: f64, ask: f64, implied_vol: f64) -> Self {
        self.last_price = last;
        self.bid = bid;
        self.ask = ask;
        self.implied_vol = implied_vol;
        self
    }

    /// Contract identifier.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Underlying asset identifier.
    #[inline]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Call or put.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Exercise style.
    #[inline]
    pub fn style(&self) -> ExerciseStyle {
        self.style
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Expiration timestamp.
    #[inline]
    pub fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    /// Shares per contract.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Last observed traded price.
    #[inline]
    pub fn last_price(&self) -> f64 {
        self.last_price
    }

    /// Observed best bid.
    #[inline]
    pub fn bid(&self) -> f64 {
        self.bid
    }

    /// Observed best ask.
    #[inline]
    pub fn ask(&self) -> f64 {
        self.ask
    }

    /// Quoted implied volatility (zero when unavailable).
    #[inline]
    pub fn implied_vol(&self) -> f64 {
        self.implied_vol
    }

    /// Intrinsic value at the given spot.
    #[inline]
    pub fn intrinsic(&self, spot: f64) -> f64 {
        self.kind.intrinsic(spot, self.strike)
    }
}
