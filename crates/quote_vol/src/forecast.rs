//! EWMA conditional-variance forecasting.
//!
//! This is an exponentially weighted moving-average iteration used as a
//! GARCH(1,1) approximation, not a fitted GARCH model: the decay factor is
//! fixed at the RiskMetrics value rather than estimated, and the long-run
//! variance target is the plain mean of the squared return history.

use crate::VolError;

/// RiskMetrics decay factor for daily returns.
pub const EWMA_LAMBDA: f64 = 0.94;

/// Observations used to seed the starting conditional variance.
pub const EWMA_SEED_WINDOW: usize = 22;

/// Forecasts per-period volatility over `horizon` future periods.
///
/// The conditional variance is seeded with the mean squared return over the
/// last [`EWMA_SEED_WINDOW`] observations (or all of them, if fewer) and then
/// iterated as `v ← λ·v + (1 − λ)·v̄` where `v̄` is the mean squared return of
/// the full history. Each forecast entry is the square root of the variance
/// at that step, in the same per-period units as the input returns; callers
/// annualise if they need to.
///
/// # Errors
/// [`VolError::InsufficientData`] when `returns` is empty.
pub fn ewma_forecast(returns: &[f64], horizon: usize, lambda: f64) -> Result<Vec<f64>, VolError> {
    if returns.is_empty() {
        return Err(VolError::InsufficientData { got: 0, need: 1 });
    }

    let long_run = returns.iter().map(|r| r * r).sum::<f64>() / returns.len() as f64;

    let seed_start = returns.len().saturating_sub(EWMA_SEED_WINDOW);
    let seed = &returns[seed_start..];
    let mut variance = seed.iter().map(|r| r * r).sum::<f64>() / seed.len() as f64;

    let mut forecasts = Vec::with_capacity(horizon);
    for _ in 0..horizon {
        forecasts.push(variance.sqrt());
        variance = lambda * variance + (1.0 - lambda) * long_run;
    }

    Ok(forecasts)
}
