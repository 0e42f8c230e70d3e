//! Realised volatility from a price history.

use crate::VolError;

/// Default trailing window, in observations, for realised volatility.
pub const DEFAULT_WINDOW: usize = 252;

/// Trading periods per year used to annualise daily observations.
pub const DEFAULT_TRADING_PERIODS: f64 = 252.0;

/// Annualised realised volatility over a trailing window of log returns.
///
/// Computes log returns from consecutive prices, keeps the most recent
/// `window` of them, and annualises their sample standard deviation by
/// `sqrt(periods_per_year)`. Shorter histories than the window use every
/// available return.
///
/// # Arguments
/// * `prices` - Price observations in chronological order, oldest first
/// * `window` - Trailing return count; [`DEFAULT_WINDOW`] for daily closes
/// * `periods_per_year` - Annualisation base; [`DEFAULT_TRADING_PERIODS`]
///   for daily closes
///
/// # Errors
/// [`VolError::InsufficientData`] when fewer than three prices are supplied
/// (two returns are the minimum for a sample standard deviation), and
/// [`VolError::NonPositivePrice`] when any price within the window makes a
/// log return undefined.
///
/// # Examples
/// ```
/// use quote_vol::{historical_volatility, DEFAULT_TRADING_PERIODS, DEFAULT_WINDOW};
///
/// let prices: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.7).sin()).collect();
/// let vol = historical_volatility(&prices, DEFAULT_WINDOW, DEFAULT_TRADING_PERIODS).unwrap();
/// assert!(vol > 0.0);
/// ```
pub fn historical_volatility(
    prices: &[f64],
    window: usize,
    periods_per_year: f64,
) -> Result<f64, VolError> {
    if prices.len() < 3 || window < 2 {
        return Err(VolError::InsufficientData {
            got: prices.len(),
            need: 3,
        });
    }

    // Only the prices that feed the trailing window matter for validation.
    let start = prices.len().saturating_sub(window + 1);
    let tail = &prices[start..];
    if let Some(&bad) = tail.iter().find(|p| !(p.is_finite() && **p > 0.0)) {
        return Err(VolError::NonPositivePrice { price: bad });
    }

    let returns: Vec<f64> = tail.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Ok(variance.sqrt() * periods_per_year.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_prices_have_zero_volatility() {
        let prices = vec![100.0; 50];
        let vol = historical_volatility(&prices, DEFAULT_WINDOW, DEFAULT_TRADING_PERIODS).unwrap();
        assert_relative_eq!(vol, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_alternating_returns_match_hand_computation() {
        // Returns alternate between +ln(1.01) and −ln(1.01).
        let mut prices = vec![100.0];
        for i in 0..20 {
            let last = *prices.last().unwrap();
            prices.push(if i % 2 == 0 { last * 1.01 } else { last / 1.01 });
        }
        let r = 1.01f64.ln();
        let returns: Vec<f64> = (0..20).map(|i| if i % 2 == 0 { r } else { -r }).collect();
        let mean = returns.iter().sum::<f64>() / 20.0;
        let var = returns.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 19.0;
        let expected = var.sqrt() * DEFAULT_TRADING_PERIODS.sqrt();

        let vol = historical_volatility(&prices, DEFAULT_WINDOW, DEFAULT_TRADING_PERIODS).unwrap();
        assert_relative_eq!(vol, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_window_limits_lookback() {
        // A violent move outside the window must not affect the estimate.
        let mut prices = vec![100.0, 500.0];
        for _ in 0..10 {
            prices.push(*prices.last().unwrap() * 1.001);
        }
        let windowed = historical_volatility(&prices, 10, DEFAULT_TRADING_PERIODS).unwrap();
        let full = historical_volatility(&prices, 252, DEFAULT_TRADING_PERIODS).unwrap();
        assert!(windowed < full);
        assert_relative_eq!(windowed, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_insufficient_history_rejected() {
        assert_eq!(
            historical_volatility(&[100.0, 101.0], 252, DEFAULT_TRADING_PERIODS),
            Err(VolError::InsufficientData { got: 2, need: 3 })
        );
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let prices = vec![100.0, 0.0, 101.0, 102.0];
        assert!(matches!(
            historical_volatility(&prices, 252, DEFAULT_TRADING_PERIODS),
            Err(VolError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn test_bad_price_outside_window_is_ignored() {
        let mut prices = vec![-5.0];
        for i in 0..12 {
            prices.push(100.0 + i as f64);
        }
        assert!(historical_volatility(&prices, 10, DEFAULT_TRADING_PERIODS).is_ok());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn historical_volatility_is_finite_and_non_negative(
                prices in proptest::collection::vec(1.0f64..1_000.0, 3..200),
            ) {
                let vol = historical_volatility(
                    &prices,
                    DEFAULT_WINDOW,
                    DEFAULT_TRADING_PERIODS,
                )
                .unwrap();
                prop_assert!(vol.is_finite());
                prop_assert!(vol >= 0.0);
            }
        }
    }
}
