//! Binomial lattice pricing with early exercise.
//!
//! The Cox–Ross–Rubinstein parameterisation:
//!
//! - Δt = T / steps
//! - u = e^(σ√Δt), d = 1/u
//! - risk-neutral probability p = (e^(rΔt) − d) / (u − d)
//!
//! Terminal payoffs are set across `steps + 1` nodes and rolled backward
//! through discounted expectations. American style additionally compares
//! each interior node against immediate-exercise intrinsic value.
//!
//! The lattice has no analytic Greeks; callers obtain them by central
//! finite differences, re-running this function per bumped input.

use quote_core::types::{ExerciseStyle, OptionKind, ValidationError};

/// Default number of lattice steps.
pub const DEFAULT_STEPS: usize = 100;

/// Prices an option on a CRR binomial lattice.
///
/// # Arguments
/// * `spot` - Underlying price (S > 0)
/// * `strike` - Strike price (K > 0)
/// * `expiry` - Time to expiration in years (T ≥ 0)
/// * `rate` - Risk-free rate
/// * `sigma` - Volatility (σ > 0 unless T = 0)
/// * `kind` - Call or put
/// * `style` - European or American; only American nodes check early exercise
/// * `steps` - Lattice steps (≥ 1); [`DEFAULT_STEPS`] is the usual choice
///
/// # Errors
/// `ValidationError` for non-positive spot/strike, negative expiry,
/// non-positive volatility when T > 0, or `steps == 0`.
///
/// # Examples
/// ```
/// use quote_models::lattice::{price, DEFAULT_STEPS};
/// use quote_core::types::{ExerciseStyle, OptionKind};
///
/// let american_put = price(
///     100.0, 100.0, 1.0, 0.05, 0.2,
///     OptionKind::Put, ExerciseStyle::American, DEFAULT_STEPS,
/// ).unwrap();
///
/// // Early exercise makes the American put worth at least the European one.
/// let european_put = price(
///     100.0, 100.0, 1.0, 0.05, 0.2,
///     OptionKind::Put, ExerciseStyle::European, DEFAULT_STEPS,
/// ).unwrap();
/// assert!(american_put >= european_put);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    sigma: f64,
    kind: OptionKind,
    style: ExerciseStyle,
    steps: usize,
) -> Result<f64, ValidationError> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(ValidationError::InvalidSpot { spot });
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(ValidationError::InvalidStrike { strike });
    }
    if expiry < 0.0 || !expiry.is_finite() {
        return Err(ValidationError::InvalidExpiry { expiry });
    }
    if steps == 0 {
        return Err(ValidationError::InvalidSteps { steps });
    }
    if expiry == 0.0 {
        return Ok(kind.intrinsic(spot, strike));
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(ValidationError::InvalidVolatility { volatility: sigma });
    }

    let dt = expiry / steps as f64;
    let up = (sigma * dt.sqrt()).exp();
    let down = 1.0 / up;
    let growth = (rate * dt).exp();
    let p_up = (growth - down) / (up - down);
    let p_down = 1.0 - p_up;
    let discount = 1.0 / growth;

    // Terminal payoffs: node i has i down-moves, spot = S·u^(steps − 2i).
    let mut values: Vec<f64> = (0..=steps)
        .map(|i| {
            let terminal_spot = spot * up.powi(steps as i32 - 2 * i as i32);
            kind.intrinsic(terminal_spot, strike)
        })
        .collect();

    // Backward induction toward the root.
    for step in (0..steps).rev() {
        for i in 0..=step {
            let continuation = discount * (p_up * values[i] + p_down * values[i + 1]);
            values[i] = if style.is_american() {
                let node_spot = spot * up.powi(step as i32 - 2 * i as i32);
                continuation.max(kind.intrinsic(node_spot, strike))
            } else {
                continuation
            };
        }
    }

    Ok(values[0])
}
