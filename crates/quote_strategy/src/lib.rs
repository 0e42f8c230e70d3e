//! # Quote Strategy
//!
//! Composes option and stock legs into named strategies (covered call,
//! iron condor, straddle) and derives their payoff analysis: max profit,
//! max loss, breakevens, aggregate Greeks and margin.
//!
//! Option payoffs are piecewise linear, so every figure here is closed
//! form; no root finding is involved. Payoff evaluation is a pure function
//! of an immutable descriptor and a terminal price — no captured state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod builder;
mod descriptor;
mod error;

pub use builder::StrategyBuilder;
pub use descriptor::{payoff_at, StrategyDescriptor};
pub use error::StrategyError;
