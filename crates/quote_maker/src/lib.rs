//! # Quote Maker
//!
//! The market-making layer: prices a strike/expiration grid into
//! two-sided quote proposals, sizes them from delta exposure, proposes
//! delta hedges, and scans option chains for volatility-arbitrage
//! opportunities against the implied-vol surface.
//!
//! Everything here proposes and nothing executes: quotes, hedges and
//! arbitrage signals are data handed to an external execution layer.
//! The quoting cycle is driven by an external scheduler through the
//! [`MakerState`] machine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod arbitrage;
mod config;
mod error;
mod hedge;
mod quoting;
mod state;

pub use arbitrage::{
    scan_vol_arbitrage, ArbDirection, VolArbOpportunity, CONFIDENCE_CAP, DEVIATION_THRESHOLD,
};
pub use config::MakerConfig;
pub use error::MakerError;
pub use hedge::{delta_hedge, HedgeAction, HedgeInstruction};
pub use quoting::{quote_grid, QuoteProposal, DELTA_BUDGET_FRACTION};
pub use state::MakerState;
