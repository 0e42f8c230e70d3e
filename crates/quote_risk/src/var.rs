//! Monte Carlo Value-at-Risk by full re-pricing.

use crate::RiskError;
use quote_core::market_data::MarketSnapshot;
use quote_models::instruments::Leg;
use quote_pricing::OptionsPricer;
use quote_strategy::StrategyDescriptor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rayon::prelude::*;

/// Monte Carlo VaR parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct VarConfig {
    /// Number of simulated one-day scenarios.
    pub scenarios: usize,
    /// Percentile of the P&L distribution to report, in (0, 1).
    pub confidence: f64,
    /// One-day return volatility of the underlying.
    pub daily_vol: f64,
    /// Volatility used to re-price option legs in each scenario.
    pub reprice_vol: f64,
    /// Base seed; each scenario derives its own stream from it.
    pub seed: u64,
}

impl Default for VarConfig {
    fn default() -> Self {
        Self {
            scenarios: 10_000,
            confidence: 0.05,
            daily_vol: 0.02,
            reprice_vol: 0.25,
            seed: 42,
        }
    }
}

/// One-day Monte Carlo VaR of a strategy portfolio.
///
/// Draws `scenarios` independent returns from `Normal(0, daily_vol)`,
/// shocks the spot to `S₀·(1 + r)`, re-prices every option leg at the
/// shocked spot (stock legs settle linearly), sums P&L against current
/// marks per scenario, and returns the `confidence` percentile of the
/// simulated P&L distribution. A loss shows up as a negative number.
///
/// Scenarios run in parallel; each derives its own RNG stream from the
/// base seed and its index, so the estimate is identical regardless of
/// how rayon schedules the batch. The batch is all-or-nothing: one
/// failed re-pricing discards the whole estimate.
///
/// # Errors
/// [`RiskError::InvalidVarConfig`] for a zero scenario count, a
/// confidence outside (0, 1) or a non-positive daily vol;
/// [`RiskError::ScenarioPricing`] when any scenario fails to price.
pub fn calculate_var(
    strategies: &[StrategyDescriptor],
    snapshot: &MarketSnapshot,
    pricer: &OptionsPricer,
    config: &VarConfig,
) -> Result<f64, RiskError> {
    if config.scenarios == 0 {
        return Err(RiskError::InvalidVarConfig {
            reason: "scenario count must be positive".to_string(),
        });
    }
    if !(config.confidence > 0.0 && config.confidence < 1.0) {
        return Err(RiskError::InvalidVarConfig {
            reason: format!("confidence {} outside (0, 1)", config.confidence),
        });
    }
    if config.daily_vol <= 0.0 || !config.daily_vol.is_finite() {
        return Err(RiskError::InvalidVarConfig {
            reason: format!("daily vol {} must be positive", config.daily_vol),
        });
    }

    let spot = snapshot.spot();

    let mut pnls: Vec<f64> = (0..config.scenarios)
        .into_par_iter()
        .map(|index| {
            // A dedicated stream per scenario keeps the draw independent of
            // scheduling order.
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
            let z: f64 = rng.sample(StandardNormal);
            let shocked_spot = spot * (1.0 + z * config.daily_vol);
            scenario_pnl(strategies, snapshot, pricer, config, shocked_spot)
        })
        .collect::<Result<_, _>>()?;

    pnls.sort_by(f64::total_cmp);
    Ok(percentile_sorted(&pnls, config.confidence))
}

fn scenario_pnl(
    strategies: &[StrategyDescriptor],
    snapshot: &MarketSnapshot,
    pricer: &OptionsPricer,
    config: &VarConfig,
    shocked_spot: f64,
) -> Result<f64, RiskError> {
    let shocked = MarketSnapshot::new(
        shocked_spot,
        snapshot.risk_free_rate(),
        snapshot.valuation_time(),
        vec![],
    )
    .map_err(quote_pricing::PricerError::from)?;

    let mut pnl = 0.0;
    for strategy in strategies {
        for position in &strategy.positions {
            let unit_pnl = match &position.leg {
                Leg::Stock => shocked_spot - position.current_price,
                Leg::Option(contract) => {
                    let repriced = pricer.price(contract, &shocked, config.reprice_vol)?;
                    repriced.price - position.current_price
                }
            };
            pnl += unit_pnl * position.quantity * position.leg.unit_size();
        }
    }
    Ok(pnl)
}

/// Linear-interpolation percentile of an ascending-sorted sample.
fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let rank = q * (sorted.len() - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let frac = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * frac
        }
    }
}
