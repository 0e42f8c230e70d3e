//! # Quote Vol
//!
//! Volatility engine: realised volatility estimation, EWMA variance
//! forecasting, and implied-volatility surfaces built from option-chain
//! snapshots.
//!
//! The surface feeds two consumers: the options pricer (per-contract vol
//! lookup) and the market maker (vol-arbitrage comparison). Surfaces are
//! rebuilt wholesale from a fresh chain snapshot each cycle and never
//! patched incrementally.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod forecast;
mod historical;
mod surface;

pub use error::VolError;
pub use forecast::{ewma_forecast, EWMA_LAMBDA, EWMA_SEED_WINDOW};
pub use historical::{historical_volatility, DEFAULT_TRADING_PERIODS, DEFAULT_WINDOW};
pub use surface::{VolSurface, DEFAULT_VOL};
