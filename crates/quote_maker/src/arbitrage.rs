//! Volatility-arbitrage scanning against the implied-vol surface.

use quote_core::market_data::{ChainQuote, MarketSnapshot};
use quote_models::instruments::DEFAULT_MULTIPLIER;
use quote_vol::VolSurface;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Deviation from the surface, as a fraction of the surface vol, that
/// flags an opportunity.
pub const DEVIATION_THRESHOLD: f64 = 0.10;

/// Ceiling on the reported confidence score.
pub const CONFIDENCE_CAP: f64 = 0.9;

/// Trade direction implied by the mispricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArbDirection {
    /// Market vol below the surface: the option looks cheap.
    Buy,
    /// Market vol above the surface: the option looks rich.
    Sell,
}

/// One flagged mispricing in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolArbOpportunity {
    /// The mispriced chain entry.
    pub quote: ChainQuote,
    /// Buy cheap vol, sell rich vol.
    pub direction: ArbDirection,
    /// The quoted implied vol.
    pub market_vol: f64,
    /// The surface's vol at that (strike, expiration).
    pub surface_vol: f64,
    /// `|market − surface|`.
    pub vol_difference: f64,
    /// Expected-profit proxy: vol difference times contract notional.
    pub expected_profit: f64,
    /// Relative deviation, capped at [`CONFIDENCE_CAP`].
    pub confidence: f64,
}

/// Scans the chain for quotes whose implied vol strays from the surface.
///
/// The surface is rebuilt from the chain itself, so each quote is compared
/// against the consensus of its neighbours. A quote is flagged when its
/// implied vol deviates by more than [`DEVIATION_THRESHOLD`] of the surface
/// value; results come back ranked by expected profit, best first. Quotes
/// without an implied vol are skipped, and a low-confidence surface still
/// scans (the degraded grid is reflected in the scores).
pub fn scan_vol_arbitrage(snapshot: &MarketSnapshot) -> Vec<VolArbOpportunity> {
    let surface = VolSurface::from_chain(snapshot);
    if surface.low_confidence() {
        warn!("vol surface degraded to default; arbitrage scan is low confidence");
    }

    let mut opportunities: Vec<VolArbOpportunity> = snapshot
        .chain()
        .iter()
        .filter(|quote| quote.implied_vol > 0.0)
        .filter_map(|quote| {
            let surface_vol =
                surface.volatility_at(quote.strike, snapshot.years_to(quote.expiration));
            if surface_vol <= 0.0 {
                return None;
            }

            let vol_difference = (quote.implied_vol - surface_vol).abs();
            if vol_difference <= surface_vol * DEVIATION_THRESHOLD {
                return None;
            }

            let direction = if quote.implied_vol > surface_vol {
                ArbDirection::Sell
            } else {
                ArbDirection::Buy
            };
            Some(VolArbOpportunity {
                quote: quote.clone(),
                direction,
                market_vol: quote.implied_vol,
                surface_vol,
                vol_difference,
                expected_profit: vol_difference * DEFAULT_MULTIPLIER,
                confidence: (vol_difference / surface_vol).min(CONFIDENCE_CAP),
            })
        })
        .collect();

    opportunities.sort_by(|a, b| b.expected_profit.total_cmp(&a.expected_profit));
    debug!(
        scanned = snapshot.chain().len(),
        flagged = opportunities.len(),
        "volatility arbitrage scan complete"
    );
    opportunities
}
