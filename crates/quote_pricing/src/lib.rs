//! # Quote Pricing
//!
//! The options pricer: dispatches each contract to the closed-form or
//! lattice kernel by exercise style, derives lattice Greeks numerically,
//! and packages the result as a [`PricingResult`] data contract.
//!
//! Time to expiry always comes from the snapshot's valuation instant, never
//! from the wall clock, so a pricing cycle is reproducible after the fact.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod numerical;
mod pricer;
mod result;

pub use error::PricerError;
pub use pricer::OptionsPricer;
pub use result::{PricingModel, PricingResult};
