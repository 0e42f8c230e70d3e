//! Market-maker configuration.

use serde::{Deserialize, Serialize};

/// Tunables for one quoting cycle.
///
/// Passed explicitly into every maker entry point; there is no process-wide
/// configuration singleton, so concurrent cycles can run with different
/// settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakerConfig {
    /// Full bid/ask spread as a fraction of theoretical value.
    pub spread: f64,
    /// Total-delta budget the sizing rule allocates from.
    pub delta_limit: f64,
    /// Absolute per-quote contract ceiling from risk policy.
    pub max_position_size: f64,
    /// Hard per-quote contract cap applied after every other rule.
    pub quote_size_cap: u32,
    /// Net-delta magnitude above which a hedge is proposed.
    pub hedge_threshold: f64,
    /// Volatility used to price the quote grid.
    pub quote_vol: f64,
}

impl Default for MakerConfig {
    fn default() -> Self {
        Self {
            spread: 0.05,
            delta_limit: 1_000.0,
            max_position_size: 100.0,
            quote_size_cap: 50,
            hedge_threshold: 100.0,
            quote_vol: 0.25,
        }
    }
}
