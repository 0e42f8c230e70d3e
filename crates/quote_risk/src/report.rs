//! Combined risk report.

use crate::{aggregate_greeks, calculate_var, check_limits};
use crate::{LimitViolation, RiskError, RiskLimits, VarConfig};
use quote_core::market_data::MarketSnapshot;
use quote_core::types::Greeks;
use quote_pricing::OptionsPricer;
use quote_strategy::StrategyDescriptor;
use serde::{Deserialize, Serialize};

/// One pricing cycle's view of portfolio risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Net Greeks across all strategies.
    pub aggregate_greeks: Greeks,
    /// Breached limits; empty means inside every limit.
    pub violations: Vec<LimitViolation>,
    /// Monte Carlo VaR estimate (negative = loss).
    pub var_estimate: f64,
}

impl RiskReport {
    /// True when no limit is breached.
    pub fn within_limits(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Assembles Greeks, limit checks and VaR into one report.
///
/// # Errors
/// Propagates [`RiskError`] from the VaR batch; limit checks themselves
/// never fail.
pub fn risk_report(
    strategies: &[StrategyDescriptor],
    snapshot: &MarketSnapshot,
    pricer: &OptionsPricer,
    limits: &RiskLimits,
    var_config: &VarConfig,
) -> Result<RiskReport, RiskError> {
    Ok(RiskReport {
        aggregate_greeks: aggregate_greeks(strategies),
        violations: check_limits(strategies, limits),
        var_estimate: calculate_var(strategies, snapshot, pricer, var_config)?,
    })
}
