//! Two-sided quote generation across a strike/expiration grid.

use crate::{MakerConfig, MakerError};
use chrono::{DateTime, Utc};
use quote_core::market_data::MarketSnapshot;
use quote_core::types::{ExerciseStyle, Greeks, OptionKind};
use quote_models::instruments::OptionContract;
use quote_pricing::OptionsPricer;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Fraction of the total delta budget one quote may consume.
pub const DELTA_BUDGET_FRACTION: f64 = 0.1;

/// A proposed two-sided quote for one contract.
///
/// Proposals are data; submitting, refreshing or cancelling orders is the
/// execution collaborator's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteProposal {
    /// The contract being quoted.
    pub contract: OptionContract,
    /// Proposed bid price.
    pub bid: f64,
    /// Proposed ask price.
    pub ask: f64,
    /// Contracts offered on the bid.
    pub bid_size: u32,
    /// Contracts offered on the ask.
    pub ask_size: u32,
    /// Theoretical value the spread was struck around.
    pub theoretical: f64,
    /// Per-share Greeks at the theoretical value.
    pub greeks: Greeks,
}

/// Prices a full quote grid: both kinds at every (expiration, strike).
///
/// Bid and ask are struck symmetrically around theoretical value
/// (`theo · (1 ∓ spread/2)`) and sized from delta exposure: a quote may
/// consume at most [`DELTA_BUDGET_FRACTION`] of the configured delta
/// limit, bounded further by the position-size limit and the hard cap.
/// Grid cells price independently and in parallel; one failing cell
/// fails the whole grid.
///
/// # Errors
/// [`MakerError::InvalidGrid`] for a non-positive spacing, an inverted
/// strike range or an empty expiration list; [`MakerError::GridPricing`]
/// when a cell fails to price.
#[instrument(skip_all, fields(underlying, expirations = expirations.len()))]
pub fn quote_grid(
    pricer: &OptionsPricer,
    snapshot: &MarketSnapshot,
    underlying: &str,
    expirations: &[DateTime<Utc>],
    strike_range: (f64, f64),
    spacing: f64,
    config: &MakerConfig,
) -> Result<Vec<QuoteProposal>, MakerError> {
    let (low, high) = strike_range;
    if spacing <= 0.0 || !spacing.is_finite() {
        return Err(MakerError::InvalidGrid {
            reason: format!("spacing {} must be positive", spacing),
        });
    }
    if low <= 0.0 || high < low {
        return Err(MakerError::InvalidGrid {
            reason: format!("strike range ({low}, {high}) must be positive and ascending"),
        });
    }
    if expirations.is_empty() {
        return Err(MakerError::InvalidGrid {
            reason: "no expirations supplied".to_string(),
        });
    }

    let mut strikes = Vec::new();
    let mut strike = low;
    while strike <= high + spacing * 1e-9 {
        strikes.push(strike);
        strike += spacing;
    }

    let mut cells = Vec::with_capacity(expirations.len() * strikes.len() * 2);
    for &expiration in expirations {
        for &strike in &strikes {
            for kind in [OptionKind::Call, OptionKind::Put] {
                cells.push((expiration, strike, kind));
            }
        }
    }
    debug!(cells = cells.len(), "pricing quote grid");

    let proposals: Vec<QuoteProposal> = cells
        .par_iter()
        .map(|&(expiration, strike, kind)| {
            let letter = if kind.is_call() { 'C' } else { 'P' };
            let symbol = format!(
                "{}_{}_{}_{}",
                underlying,
                letter,
                strike,
                expiration.format("%Y%m%d")
            );
            let contract = OptionContract::new(
                symbol,
                underlying,
                kind,
                ExerciseStyle::American,
                strike,
                expiration,
                snapshot.valuation_time(),
            )
            .map_err(quote_pricing::PricerError::from)?;

            let priced = pricer.price(&contract, snapshot, config.quote_vol)?;
            let size = quote_size(priced.greeks.delta, config);

            Ok(QuoteProposal {
                bid: priced.price * (1.0 - config.spread / 2.0),
                ask: priced.price * (1.0 + config.spread / 2.0),
                bid_size: size,
                ask_size: size,
                theoretical: priced.price,
                greeks: priced.greeks,
                contract,
            })
        })
        .collect::<Result<_, MakerError>>()?;

    info!(quotes = proposals.len(), "quote grid priced");
    Ok(proposals)
}

/// Contracts per side for a quote with the given per-share delta.
fn quote_size(delta: f64, config: &MakerConfig) -> u32 {
    let budget = config.delta_limit * DELTA_BUDGET_FRACTION;
    let by_delta = if delta.abs() > f64::EPSILON {
        (budget / delta.abs()).floor()
    } else {
        f64::MAX
    };
    by_delta
        .min(config.max_position_size)
        .min(config.quote_size_cap as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};

    fn valuation() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot::new(100.0, 0.02, valuation(), vec![]).unwrap()
    }

    #[test]
    fn test_grid_covers_both_kinds_per_cell() {
        let pricer = OptionsPricer::default();
        let expirations = [valuation() + Duration::days(30)];
        let proposals = quote_grid(
            &pricer,
            &snapshot(),
            "STOCK",
            &expirations,
            (95.0, 105.0),
            5.0,
            &MakerConfig::default(),
        )
        .unwrap();

        // Three strikes, one expiration, call + put each.
        assert_eq!(proposals.len(), 6);
        let calls = proposals
            .iter()
            .filter(|p| p.contract.kind().is_call())
            .count();
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_spread_struck_around_theoretical() {
        let pricer = OptionsPricer::default();
        let expirations = [valuation() + Duration::days(30)];
        let proposals = quote_grid(
            &pricer,
            &snapshot(),
            "STOCK",
            &expirations,
            (100.0, 100.0),
            5.0,
            &MakerConfig::default(),
        )
        .unwrap();

        for p in &proposals {
            assert_relative_eq!(p.bid, p.theoretical * 0.975, epsilon = 1e-12);
            assert_relative_eq!(p.ask, p.theoretical * 1.025, epsilon = 1e-12);
            assert!(p.bid < p.ask);
        }
    }

    #[test]
    fn test_sizing_respects_delta_budget() {
        let config = MakerConfig::default();
        // Delta 0.5: 10% of 1000 delta / 0.5 = 200, capped at 50.
        assert_eq!(quote_size(0.5, &config), 50);
        // Delta 4.0 would allow only 25 contracts.
        assert_eq!(quote_size(4.0, &config), 25);
        // Huge delta exposure shrinks the quote to nothing.
        assert_eq!(quote_size(500.0, &config), 0);
        // Near-zero delta hits the hard cap.
        assert_eq!(quote_size(0.0, &config), 50);
    }

    #[test]
    fn test_sizing_respects_position_limit() {
        let config = MakerConfig {
            max_position_size: 10.0,
            ..MakerConfig::default()
        };
        assert_eq!(quote_size(0.5, &config), 10);
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let pricer = OptionsPricer::default();
        let expirations = [valuation() + Duration::days(30)];
        assert!(quote_grid(
            &pricer,
            &snapshot(),
            "STOCK",
            &expirations,
            (105.0, 95.0),
            5.0,
            &MakerConfig::default(),
        )
        .is_err());
        assert!(quote_grid(
            &pricer,
            &snapshot(),
            "STOCK",
            &expirations,
            (95.0, 105.0),
            0.0,
            &MakerConfig::default(),
        )
        .is_err());
        assert!(quote_grid(
            &pricer,
            &snapshot(),
            "STOCK",
            &[],
            (95.0, 105.0),
            5.0,
            &MakerConfig::default(),
        )
        .is_err());
    }
}
