//! Greek aggregation and limit checking.

use quote_core::types::Greeks;
use quote_models::instruments::Leg;
use quote_strategy::StrategyDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which aggregate Greek a limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GreekKind {
    /// Net delta.
    Delta,
    /// Net gamma.
    Gamma,
    /// Net theta.
    Theta,
    /// Net vega.
    Vega,
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Theta => "theta",
            GreekKind::Vega => "vega",
        };
        f.write_str(name)
    }
}

/// Portfolio-level risk limits.
///
/// Greek limits are magnitudes: a limit of 1000 delta is breached at
/// +1500 and at −1500 alike. Theta follows the same convention even
/// though portfolio theta is usually negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskLimits {
    /// Maximum |net delta| in share-equivalents.
    pub max_delta: f64,
    /// Maximum |net gamma|.
    pub max_gamma: f64,
    /// Maximum |net theta| per day.
    pub max_theta: f64,
    /// Maximum |net vega| per vol point.
    pub max_vega: f64,
    /// Maximum contracts per single quote.
    pub max_position_size: f64,
    /// Maximum share of total legs concentrated in one underlying.
    pub max_concentration: f64,
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            max_delta: 1_000.0,
            max_gamma: 500.0,
            max_theta: 5_000.0,
            max_vega: 10_000.0,
            max_position_size: 100.0,
            max_concentration: 0.2,
        }
    }
}

/// One breached limit, reported as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LimitViolation {
    /// An aggregate Greek exceeded its magnitude limit.
    Greek {
        /// The Greek that breached.
        greek: GreekKind,
        /// Aggregate value, signed.
        current: f64,
        /// Configured magnitude limit.
        limit: f64,
        /// `|current| − limit`.
        excess: f64,
    },
    /// Too large a share of legs sits in one underlying.
    Concentration {
        /// The crowded underlying.
        underlying: String,
        /// Observed share of total legs.
        current: f64,
        /// Configured maximum share.
        limit: f64,
        /// `current − limit`.
        excess: f64,
    },
}

/// Sums the already-aggregated Greeks of each strategy.
pub fn aggregate_greeks(strategies: &[StrategyDescriptor]) -> Greeks {
    strategies
        .iter()
        .fold(Greeks::zero(), |acc, s| acc + s.aggregate_greeks)
}

/// Checks portfolio Greeks and per-underlying concentration against limits.
///
/// Never fails: breaches come back as [`LimitViolation`] records and an
/// empty vector means the portfolio is inside every limit. Greek checks
/// compare magnitudes; concentration compares the option-leg count per
/// underlying against the total leg count.
///
/// # Examples
/// ```
/// use quote_risk::{check_limits, RiskLimits};
///
/// let violations = check_limits(&[], &RiskLimits::default());
/// assert!(violations.is_empty());
/// ```
pub fn check_limits(
    strategies: &[StrategyDescriptor],
    limits: &RiskLimits,
) -> Vec<LimitViolation> {
    let mut violations = Vec::new();
    let portfolio = aggregate_greeks(strategies);

    let checks = [
        (GreekKind::Delta, portfolio.delta, limits.max_delta),
        (GreekKind::Gamma, portfolio.gamma, limits.max_gamma),
        (GreekKind::Theta, portfolio.theta, limits.max_theta),
        (GreekKind::Vega, portfolio.vega, limits.max_vega),
    ];
    for (greek, current, limit) in checks {
        if current.abs() > limit {
            violations.push(LimitViolation::Greek {
                greek,
                current,
                limit,
                excess: current.abs() - limit,
            });
        }
    }

    // Concentration: option legs per underlying over total legs. A BTreeMap
    // keeps the violation order stable for reporting.
    let total_legs: usize = strategies.iter().map(|s| s.positions.len()).sum();
    if total_legs > 0 {
        let mut per_underlying: BTreeMap<&str, usize> = BTreeMap::new();
        for strategy in strategies {
            for position in &strategy.positions {
                if let Leg::Option(contract) = &position.leg {
                    *per_underlying.entry(contract.underlying()).or_insert(0) += 1;
                }
            }
        }
        for (underlying, count) in per_underlying {
            let ratio = count as f64 / total_legs as f64;
            if ratio > limits.max_concentration {
                violations.push(LimitViolation::Concentration {
                    underlying: underlying.to_string(),
                    current: ratio,
                    limit: limits.max_concentration,
                    excess: ratio - limits.max_concentration,
                });
            }
        }
    }

    violations
}
