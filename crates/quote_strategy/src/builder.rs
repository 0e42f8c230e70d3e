//! Strategy constructors.

use crate::{StrategyDescriptor, StrategyError};
use chrono::{DateTime, Utc};
use quote_core::market_data::MarketSnapshot;
use quote_core::types::{ExerciseStyle, Greeks, OptionKind};
use quote_models::instruments::{Leg, OptionContract, OptionPosition};
use quote_pricing::OptionsPricer;

/// Builds priced strategy descriptors against one market snapshot.
///
/// The builder owns no market state: the pricer and snapshot arrive from
/// the caller, so concurrent cycles can each carry their own. Option legs
/// are American-style, matching listed equity options.
///
/// # Examples
/// ```
/// use quote_core::market_data::MarketSnapshot;
/// use quote_pricing::OptionsPricer;
/// use quote_strategy::StrategyBuilder;
/// use chrono::{Duration, Utc};
///
/// let valuation = Utc::now();
/// let snapshot = MarketSnapshot::new(100.0, 0.02, valuation, vec![]).unwrap();
/// let pricer = OptionsPricer::default();
/// let builder = StrategyBuilder::new(&pricer, &snapshot);
///
/// let straddle = builder
///     .straddle("STOCK", 100.0, valuation + Duration::days(90), 1.0, 0.25)
///     .unwrap();
/// assert_eq!(straddle.max_profit, f64::INFINITY);
/// assert_eq!(straddle.breakevens.len(), 2);
/// ```
pub struct StrategyBuilder<'a> {
    pricer: &'a OptionsPricer,
    snapshot: &'a MarketSnapshot,
}

impl<'a> StrategyBuilder<'a> {
    /// Creates a builder for one pricing cycle.
    pub fn new(pricer: &'a OptionsPricer, snapshot: &'a MarketSnapshot) -> Self {
        Self { pricer, snapshot }
    }

    /// Long stock plus an equal-coverage short call.
    ///
    /// `shares` is the share count of the stock leg; the short call covers
    /// exactly those shares (`shares / multiplier` contracts). Figures per
    /// share of stock: max profit `(K − S₀ + premium)`, max loss
    /// `(S₀ − premium)`, breakeven `S₀ − premium`. No margin beyond the
    /// stock itself.
    ///
    /// # Errors
    /// [`StrategyError::InvalidQuantity`] for non-positive `shares`, plus
    /// any contract-validation or pricing failure.
    pub fn covered_call(
        &self,
        underlying: &str,
        strike: f64,
        expiration: DateTime<Utc>,
        shares: f64,
        sigma: f64,
    ) -> Result<StrategyDescriptor, StrategyError> {
        if shares <= 0.0 || !shares.is_finite() {
            return Err(StrategyError::InvalidQuantity { quantity: shares });
        }

        let spot = self.snapshot.spot();
        let valuation = self.snapshot.valuation_time();
        let call = self.contract(underlying, OptionKind::Call, strike, expiration)?;
        let priced = self.pricer.price(&call, self.snapshot, sigma)?;

        let contracts = shares / call.multiplier();
        let premium = priced.price;

        let stock_leg = OptionPosition::open(Leg::Stock, shares, spot, valuation);
        let call_leg = OptionPosition::open(Leg::Option(call), -contracts, premium, valuation);

        // Stock contributes one delta per share; the short call leg scales
        // its Greeks by -shares (contracts times multiplier).
        let mut aggregate_greeks = priced.greeks.scaled(-shares);
        aggregate_greeks.delta += shares;

        Ok(StrategyDescriptor {
            name: "Covered Call".to_string(),
            positions: vec![stock_leg, call_leg],
            max_profit: (strike - spot + premium) * shares,
            max_loss: (spot - premium) * shares,
            breakevens: vec![spot - premium],
            aggregate_greeks,
            margin_requirement: 0.0,
        })
    }

    /// Short put spread plus short call spread around the spot.
    ///
    /// Buys the outer put and call wings, sells the inner strikes, all at
    /// `contracts` contracts per leg. The net credit is measured per share;
    /// dollar figures scale by the contract multiplier. Max loss and margin
    /// use the call-wing width.
    ///
    /// # Errors
    /// [`StrategyError::StrikesOutOfOrder`] unless
    /// `put_wing < put_inner < call_inner < call_wing`;
    /// [`StrategyError::InvalidQuantity`] for non-positive `contracts`.
    #[allow(clippy::too_many_arguments)]
    pub fn iron_condor(
        &self,
        underlying: &str,
        put_wing: f64,
        put_inner: f64,
        call_inner: f64,
        call_wing: f64,
        expiration: DateTime<Utc>,
        contracts: f64,
        sigma: f64,
    ) -> Result<StrategyDescriptor, StrategyError> {
        if contracts <= 0.0 || !contracts.is_finite() {
            return Err(StrategyError::InvalidQuantity {
                quantity: contracts,
            });
        }
        let strikes = [put_wing, put_inner, call_inner, call_wing];
        if !strikes.windows(2).all(|w| w[0] < w[1]) {
            return Err(StrategyError::StrikesOutOfOrder { strikes });
        }

        let valuation = self.snapshot.valuation_time();
        let legs = [
            (put_wing, OptionKind::Put, contracts),
            (put_inner, OptionKind::Put, -contracts),
            (call_inner, OptionKind::Call, -contracts),
            (call_wing, OptionKind::Call, contracts),
        ];

        let mut positions = Vec::with_capacity(legs.len());
        let mut net_credit = 0.0;
        let mut aggregate_greeks = Greeks::zero();
        let mut multiplier = 0.0;

        for (strike, kind, quantity) in legs {
            let contract = self.contract(underlying, kind, strike, expiration)?;
            let priced = self.pricer.price(&contract, self.snapshot, sigma)?;
            multiplier = contract.multiplier();

            // Sold legs (negative quantity) contribute positive credit.
            net_credit -= quantity.signum() * priced.price;
            aggregate_greeks += priced.greeks.scaled(quantity * multiplier);
            positions.push(OptionPosition::open(
                Leg::Option(contract),
                quantity,
                priced.price,
                valuation,
            ));
        }

        let wing_width = call_wing - call_inner;
        Ok(StrategyDescriptor {
            name: "Iron Condor".to_string(),
            positions,
            max_profit: net_credit * multiplier * contracts,
            max_loss: (wing_width - net_credit) * multiplier * contracts,
            breakevens: vec![put_wing - net_credit, call_wing + net_credit],
            aggregate_greeks,
            margin_requirement: wing_width * multiplier * contracts,
        })
    }

    /// Long call and long put at the same strike.
    ///
    /// Loss is bounded by the total premium paid; profit is unbounded on
    /// the upside. Breakevens sit at the strike shifted by the total
    /// per-share premium on each side.
    ///
    /// # Errors
    /// [`StrategyError::InvalidQuantity`] for non-positive `contracts`,
    /// plus any contract-validation or pricing failure.
    pub fn straddle(
        &self,
        underlying: &str,
        strike: f64,
        expiration: DateTime<Utc>,
        contracts: f64,
        sigma: f64,
    ) -> Result<StrategyDescriptor, StrategyError> {
        if contracts <= 0.0 || !contracts.is_finite() {
            return Err(StrategyError::InvalidQuantity {
                quantity: contracts,
            });
        }

        let valuation = self.snapshot.valuation_time();
        let mut positions = Vec::with_capacity(2);
        let mut total_premium = 0.0;
        let mut aggregate_greeks = Greeks::zero();
        let mut multiplier = 0.0;

        for kind in [OptionKind::Call, OptionKind::Put] {
            let contract = self.contract(underlying, kind, strike, expiration)?;
            let priced = self.pricer.price(&contract, self.snapshot, sigma)?;
            multiplier = contract.multiplier();

            total_premium += priced.price;
            aggregate_greeks += priced.greeks.scaled(contracts * multiplier);
            positions.push(OptionPosition::open(
                Leg::Option(contract),
                contracts,
                priced.price,
                valuation,
            ));
        }

        let debit = total_premium * multiplier * contracts;
        Ok(StrategyDescriptor {
            name: "Straddle".to_string(),
            positions,
            max_profit: f64::INFINITY,
            max_loss: debit,
            breakevens: vec![strike - total_premium, strike + total_premium],
            aggregate_greeks,
            margin_requirement: debit,
        })
    }

    fn contract(
        &self,
        underlying: &str,
        kind: OptionKind,
        strike: f64,
        expiration: DateTime<Utc>,
    ) -> Result<OptionContract, StrategyError> {
        let letter = if kind.is_call() { 'C' } else { 'P' };
        let symbol = format!(
            "{}_{}_{}_{}",
            underlying,
            letter,
            strike,
            expiration.format("%Y%m%d")
        );
        Ok(OptionContract::new(
            symbol,
            underlying,
            kind,
            ExerciseStyle::American,
            strike,
            expiration,
            self.snapshot.valuation_time(),
        )?)
    }
}
