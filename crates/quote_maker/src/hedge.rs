//! Delta hedging proposals.

use crate::MakerConfig;
use quote_core::types::Greeks;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Direction of a proposed hedge trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HedgeAction {
    /// Buy the underlying.
    Buy,
    /// Sell the underlying.
    Sell,
}

/// A proposed trade in the underlying to flatten portfolio delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeInstruction {
    /// Buy or sell.
    pub action: HedgeAction,
    /// Underlying to trade.
    pub underlying: String,
    /// Shares to trade, always positive.
    pub quantity: f64,
}

/// Proposes a hedge when net delta drifts past the threshold.
///
/// Returns `None` while `|delta|` stays within `config.hedge_threshold`.
/// The hedge quantity is the full offset (`−delta` shares); execution is
/// the collaborator's decision.
///
/// # Examples
/// ```
/// use quote_core::types::Greeks;
/// use quote_maker::{delta_hedge, HedgeAction, MakerConfig};
///
/// let long = Greeks { delta: 250.0, ..Greeks::zero() };
/// let hedge = delta_hedge(&long, "STOCK", &MakerConfig::default()).unwrap();
/// assert_eq!(hedge.action, HedgeAction::Sell);
/// assert_eq!(hedge.quantity, 250.0);
/// ```
pub fn delta_hedge(
    portfolio_greeks: &Greeks,
    underlying: &str,
    config: &MakerConfig,
) -> Option<HedgeInstruction> {
    let delta = portfolio_greeks.delta;
    if delta.abs() <= config.hedge_threshold {
        debug!(delta, threshold = config.hedge_threshold, "delta within threshold");
        return None;
    }

    let offset = -delta;
    let action = if offset > 0.0 {
        HedgeAction::Buy
    } else {
        HedgeAction::Sell
    };
    info!(delta, ?action, quantity = offset.abs(), "proposing delta hedge");
    Some(HedgeInstruction {
        action,
        underlying: underlying.to_string(),
        quantity: offset.abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_delta(delta: f64) -> Greeks {
        Greeks {
            delta,
            ..Greeks::zero()
        }
    }

    #[test]
    fn test_within_threshold_no_hedge() {
        let config = MakerConfig::default();
        assert!(delta_hedge(&with_delta(0.0), "STOCK", &config).is_none());
        assert!(delta_hedge(&with_delta(99.0), "STOCK", &config).is_none());
        // The boundary itself does not trigger.
        assert!(delta_hedge(&with_delta(100.0), "STOCK", &config).is_none());
        assert!(delta_hedge(&with_delta(-100.0), "STOCK", &config).is_none());
    }

    #[test]
    fn test_long_delta_sells_underlying() {
        let hedge = delta_hedge(&with_delta(300.0), "STOCK", &MakerConfig::default()).unwrap();
        assert_eq!(hedge.action, HedgeAction::Sell);
        assert_eq!(hedge.quantity, 300.0);
        assert_eq!(hedge.underlying, "STOCK");
    }

    #[test]
    fn test_short_delta_buys_underlying() {
        let hedge = delta_hedge(&with_delta(-150.0), "STOCK", &MakerConfig::default()).unwrap();
        assert_eq!(hedge.action, HedgeAction::Buy);
        assert_eq!(hedge.quantity, 150.0);
    }

    #[test]
    fn test_custom_threshold() {
        let config = MakerConfig {
            hedge_threshold: 500.0,
            ..MakerConfig::default()
        };
        assert!(delta_hedge(&with_delta(300.0), "STOCK", &config).is_none());
        assert!(delta_hedge(&with_delta(501.0), "STOCK", &config).is_some());
    }
}
