//! Strategy descriptor and pure payoff evaluation.

use quote_core::types::Greeks;
use quote_models::instruments::{Leg, OptionPosition};
use serde::{Deserialize, Serialize};

/// Fully-analysed, immutable multi-leg strategy.
///
/// Built atomically by [`crate::StrategyBuilder`]; read-only afterward.
/// Monetary figures are in dollar terms: per-share values scaled by each
/// leg's quantity and unit size. Breakevens are terminal underlying prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyDescriptor {
    /// Human-readable strategy name.
    pub name: String,
    /// Ordered legs, as opened at construction.
    pub positions: Vec<OptionPosition>,
    /// Best-case P&L at expiration; `f64::INFINITY` when unbounded.
    pub max_profit: f64,
    /// Worst-case loss at expiration, as a positive magnitude.
    pub max_loss: f64,
    /// Terminal prices where expiration P&L crosses zero, ascending.
    pub breakevens: Vec<f64>,
    /// Greeks summed across legs (option legs scaled by quantity and
    /// multiplier; the stock leg contributes its share count to delta).
    pub aggregate_greeks: Greeks,
    /// Margin the strategy ties up, in dollars.
    pub margin_requirement: f64,
}

/// Expiration P&L of a strategy at a terminal underlying price.
///
/// Pure function of the descriptor: each leg is settled at its terminal
/// value (the underlying price for stock, intrinsic value for options)
/// against its entry price, scaled by signed quantity and unit size.
///
/// # Examples
/// ```
/// use quote_models::instruments::{Leg, OptionPosition};
/// use quote_strategy::{payoff_at, StrategyDescriptor};
/// use quote_core::types::Greeks;
/// use chrono::Utc;
///
/// // 100 shares bought at 95: linear P&L in the terminal price.
/// let stock = OptionPosition::open(Leg::Stock, 100.0, 95.0, Utc::now());
/// let descriptor = StrategyDescriptor {
///     name: "Long Stock".into(),
///     positions: vec![stock],
///     max_profit: f64::INFINITY,
///     max_loss: 9500.0,
///     breakevens: vec![95.0],
///     aggregate_greeks: Greeks { delta: 100.0, ..Greeks::zero() },
///     margin_requirement: 9500.0,
/// };
/// assert_eq!(payoff_at(&descriptor, 100.0), 500.0);
/// ```
pub fn payoff_at(strategy: &StrategyDescriptor, terminal_price: f64) -> f64 {
    strategy
        .positions
        .iter()
        .map(|position| {
            let terminal_value = match &position.leg {
                Leg::Stock => terminal_price,
                Leg::Option(contract) => contract.intrinsic(terminal_price),
            };
            (terminal_value - position.entry_price) * position.quantity * position.leg.unit_size()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use quote_core::types::{ExerciseStyle, OptionKind};
    use quote_models::instruments::OptionContract;

    fn valuation() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    fn option_leg(kind: OptionKind, strike: f64) -> Leg {
        Leg::Option(
            OptionContract::new(
                "TEST",
                "STOCK",
                kind,
                ExerciseStyle::American,
                strike,
                valuation() + Duration::days(30),
                valuation(),
            )
            .unwrap(),
        )
    }

    fn descriptor(positions: Vec<OptionPosition>) -> StrategyDescriptor {
        StrategyDescriptor {
            name: "Test".into(),
            positions,
            max_profit: 0.0,
            max_loss: 0.0,
            breakevens: vec![],
            aggregate_greeks: Greeks::zero(),
            margin_requirement: 0.0,
        }
    }

    #[test]
    fn test_long_call_payoff() {
        let pos = OptionPosition::open(option_leg(OptionKind::Call, 100.0), 1.0, 5.0, valuation());
        let strat = descriptor(vec![pos]);
        // Below strike: lose the premium on one contract.
        assert_relative_eq!(payoff_at(&strat, 90.0), -500.0, epsilon = 1e-9);
        // At 110: intrinsic 10 minus premium 5 on 100 shares.
        assert_relative_eq!(payoff_at(&strat, 110.0), 500.0, epsilon = 1e-9);
        // Breakeven at strike + premium.
        assert_relative_eq!(payoff_at(&strat, 105.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_short_put_payoff() {
        let pos = OptionPosition::open(option_leg(OptionKind::Put, 100.0), -2.0, 4.0, valuation());
        let strat = descriptor(vec![pos]);
        // Above strike the puts expire worthless; keep the premium.
        assert_relative_eq!(payoff_at(&strat, 120.0), 800.0, epsilon = 1e-9);
        // Deep below strike the short puts hurt.
        assert_relative_eq!(payoff_at(&strat, 80.0), (4.0 - 20.0) * 2.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_straddle_breakevens_from_reference_premiums() {
        // Strike 100, call premium 6.00, put premium 5.50, one contract of
        // each: the P&L must cross zero exactly at 88.50 and 111.50.
        let call = OptionPosition::open(option_leg(OptionKind::Call, 100.0), 1.0, 6.0, valuation());
        let put = OptionPosition::open(option_leg(OptionKind::Put, 100.0), 1.0, 5.5, valuation());
        let strat = descriptor(vec![call, put]);

        assert_relative_eq!(payoff_at(&strat, 88.50), 0.0, epsilon = 1e-9);
        assert_relative_eq!(payoff_at(&strat, 111.50), 0.0, epsilon = 1e-9);
        assert!(payoff_at(&strat, 100.0) < 0.0);
        assert!(payoff_at(&strat, 120.0) > 0.0);
    }

    #[test]
    fn test_mixed_stock_and_option_legs() {
        let stock = OptionPosition::open(Leg::Stock, 100.0, 100.0, valuation());
        let call =
            OptionPosition::open(option_leg(OptionKind::Call, 105.0), -1.0, 2.0, valuation());
        let strat = descriptor(vec![stock, call]);
        // Above the short strike the stock gain is capped by the call.
        assert_relative_eq!(
            payoff_at(&strat, 120.0),
            (120.0 - 100.0) * 100.0 + (2.0 - 15.0) * 100.0,
            epsilon = 1e-9
        );
    }
}
