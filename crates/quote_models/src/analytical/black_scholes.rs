//! Closed-form lognormal pricing, analytic Greeks and implied volatility.
//!
//! The kernel is a set of stateless functions over `(S, K, T, r, σ, kind)`:
//!
//! - call = S·N(d₁) − K·e^(−rT)·N(d₂)
//! - put  = K·e^(−rT)·N(−d₂) − S·N(−d₁)
//!
//! with d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T) and d₂ = d₁ − σ√T.
//!
//! At T = 0 price collapses to intrinsic value with zero Greeks; the
//! expiration instant is a valid input, not an error.

use quote_core::math::distributions::{norm_cdf, norm_pdf};
use quote_core::types::{Greeks, OptionKind, ValidationError};

/// Days used to convert annualised theta to per-calendar-day units.
const DAYS_PER_YEAR: f64 = 365.0;

/// Initial volatility guess for the implied-volatility solver.
pub const IV_INITIAL_GUESS: f64 = 0.20;
/// Absolute price tolerance for implied-volatility convergence.
pub const IV_TOLERANCE: f64 = 1e-6;
/// Iteration budget for the implied-volatility solver.
pub const IV_MAX_ITERATIONS: u32 = 100;
/// Lower bound applied to σ after every Newton step.
pub const IV_VOL_FLOOR: f64 = 0.01;

/// Outcome of the implied-volatility solve.
///
/// Non-convergence is not an error: the solver always returns its best
/// estimate and tells the caller whether the tolerance was met, so the
/// caller decides how much accuracy it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolResult {
    /// Best volatility estimate.
    pub sigma: f64,
    /// Whether the price tolerance was met within the iteration budget.
    pub converged: bool,
    /// Newton iterations performed.
    pub iterations: u32,
}

fn validate(spot: f64, strike: f64, expiry: f64) -> Result<(), ValidationError> {
    if spot <= 0.0 || !spot.is_finite() {
        return Err(ValidationError::InvalidSpot { spot });
    }
    if strike <= 0.0 || !strike.is_finite() {
        return Err(ValidationError::InvalidStrike { strike });
    }
    if expiry < 0.0 || !expiry.is_finite() {
        return Err(ValidationError::InvalidExpiry { expiry });
    }
    Ok(())
}

#[inline]
fn d1_d2(spot: f64, strike: f64, expiry: f64, rate: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * sigma * sigma) * expiry) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Prices a European option.
///
/// # Arguments
/// * `spot` - Underlying price (S > 0)
/// * `strike` - Strike price (K > 0)
/// * `expiry` - Time to expiration in years (T ≥ 0)
/// * `rate` - Risk-free rate (annualised, continuously compounded)
/// * `sigma` - Volatility (σ > 0 unless T = 0)
/// * `kind` - Call or put
///
/// # Errors
/// `ValidationError` for non-positive spot/strike, negative expiry, or
/// non-positive volatility when T > 0.
///
/// # Examples
/// ```
/// use quote_models::analytical::price;
/// use quote_core::types::OptionKind;
///
/// let call = price(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// assert!((call - 10.4506).abs() < 0.001);
///
/// // At expiry the price is intrinsic.
/// let expired = price(110.0, 100.0, 0.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// assert_eq!(expired, 10.0);
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    sigma: f64,
    kind: OptionKind,
) -> Result<f64, ValidationError> {
    validate(spot, strike, expiry)?;
    if expiry == 0.0 {
        return Ok(kind.intrinsic(spot, strike));
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(ValidationError::InvalidVolatility { volatility: sigma });
    }

    let (d1, d2) = d1_d2(spot, strike, expiry, rate, sigma);
    let discount = (-rate * expiry).exp();

    let value = match kind {
        OptionKind::Call => spot * norm_cdf(d1) - strike * discount * norm_cdf(d2),
        OptionKind::Put => strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };
    Ok(value)
}

/// Computes analytic Greeks in market-convention units.
///
/// Theta is per calendar day (annualised value divided by 365); vega and
/// rho are per 1 percentage-point change in σ and r respectively (divided
/// by 100). At T = 0 all Greeks are zero.
///
/// # Errors
/// Same validation rules as [`price`].
pub fn greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    sigma: f64,
    kind: OptionKind,
) -> Result<Greeks, ValidationError> {
    validate(spot, strike, expiry)?;
    if expiry == 0.0 {
        return Ok(Greeks::zero());
    }
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(ValidationError::InvalidVolatility { volatility: sigma });
    }

    let (d1, d2) = d1_d2(spot, strike, expiry, rate, sigma);
    let sqrt_t = expiry.sqrt();
    let discount = (-rate * expiry).exp();
    let pdf_d1 = norm_pdf(d1);

    let delta = match kind {
        OptionKind::Call => norm_cdf(d1),
        OptionKind::Put => norm_cdf(d1) - 1.0,
    };

    let gamma = pdf_d1 / (spot * sigma * sqrt_t);

    let decay = -(spot * pdf_d1 * sigma) / (2.0 * sqrt_t);
    let theta_annual = match kind {
        OptionKind::Call => decay - rate * strike * discount * norm_cdf(d2),
        OptionKind::Put => decay + rate * strike * discount * norm_cdf(-d2),
    };

    let vega = spot * pdf_d1 * sqrt_t / 100.0;

    let rho = match kind {
        OptionKind::Call => strike * expiry * discount * norm_cdf(d2) / 100.0,
        OptionKind::Put => -strike * expiry * discount * norm_cdf(-d2) / 100.0,
    };

    Ok(Greeks {
        delta,
        gamma,
        theta: theta_annual / DAYS_PER_YEAR,
        vega,
        rho,
    })
}

/// Solves for the volatility implied by an observed market price.
///
/// Newton–Raphson on σ: each step updates
/// σ ← σ − (price(σ) − market_price) / vega(σ), with the raw (unscaled)
/// vega ∂V/∂σ, flooring σ at [`IV_VOL_FLOOR`] after every update.
///
/// If vega becomes numerically zero before the tolerance is met (deep
/// in/out of the money), the solver stops and reports the last estimate
/// with `converged = false` instead of erroring.
///
/// # Errors
/// `ValidationError` for non-positive spot/strike or non-positive expiry;
/// the implied volatility of an expired contract is undefined.
///
/// # Examples
/// ```
/// use quote_models::analytical::{implied_volatility, price};
/// use quote_core::types::OptionKind;
///
/// let target = price(100.0, 100.0, 0.5, 0.02, 0.25, OptionKind::Call).unwrap();
/// let result = implied_volatility(target, 100.0, 100.0, 0.5, 0.02, OptionKind::Call).unwrap();
/// assert!(result.converged);
/// assert!((result.sigma - 0.25).abs() < 1e-4);
/// ```
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    kind: OptionKind,
) -> Result<ImpliedVolResult, ValidationError> {
    validate(spot, strike, expiry)?;
    if expiry == 0.0 {
        return Err(ValidationError::InvalidExpiry { expiry });
    }

    let mut sigma = IV_INITIAL_GUESS;
    let mut iterations = 0;

    while iterations < IV_MAX_ITERATIONS {
        iterations += 1;

        let model_price = price(spot, strike, expiry, rate, sigma, kind)?;
        let diff = model_price - market_price;
        if diff.abs() < IV_TOLERANCE {
            return Ok(ImpliedVolResult {
                sigma,
                converged: true,
                iterations,
            });
        }

        // Raw vega ∂V/∂σ, not the per-point convention used in `greeks`.
        let (d1, _) = d1_d2(spot, strike, expiry, rate, sigma);
        let vega = spot * norm_pdf(d1) * expiry.sqrt();
        if vega.abs() < f64::EPSILON {
            return Ok(ImpliedVolResult {
                sigma,
                converged: false,
                iterations,
            });
        }

        sigma = (sigma - diff / vega).max(IV_VOL_FLOOR);
    }

    Ok(ImpliedVolResult {
        sigma,
        converged: false,
        iterations,
    })
}
