//! Immutable market-data snapshots.

mod snapshot;

pub use snapshot::{ChainQuote, MarketSnapshot};
