//! # Quote Risk
//!
//! Portfolio risk management: Greek aggregation across strategies,
//! configurable limit checks, and Monte Carlo Value-at-Risk by full
//! re-pricing under simulated spot scenarios.
//!
//! Limit violations are data, never errors: the risk manager reports,
//! the caller reacts. VaR batches are all-or-nothing — a scenario that
//! fails to price discards the whole estimate, because a partial risk
//! number is worse than none.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod limits;
mod report;
mod var;

pub use error::RiskError;
pub use limits::{aggregate_greeks, check_limits, GreekKind, LimitViolation, RiskLimits};
pub use report::{risk_report, RiskReport};
pub use var::{calculate_var, VarConfig};
