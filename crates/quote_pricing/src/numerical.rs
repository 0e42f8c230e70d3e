//! Finite-difference Greeks for lattice-priced contracts.
//!
//! The lattice kernel has no analytic sensitivities, so each Greek comes
//! from re-pricing under bumped inputs. All eight lattice runs are
//! independent and are evaluated in parallel.
//!
//! Output units match the closed-form kernel: theta per calendar day, vega
//! and rho per point.

use quote_core::types::{ExerciseStyle, Greeks, OptionKind, ValidationError};
use quote_models::lattice;
use rayon::prelude::*;

/// Relative bump size for the finite differences.
const BUMP: f64 = 0.01;

const DAYS_PER_YEAR: f64 = 365.0;

/// Pricing inputs for one bumped lattice run.
#[derive(Clone, Copy)]
struct Scenario {
    spot: f64,
    expiry: f64,
    rate: f64,
    sigma: f64,
}

/// Central-difference Greeks on the CRR lattice.
///
/// Spot, volatility and rate are bumped by ±1% relatively; theta uses a
/// one-sided step of 1% of a day (and is zero when the remaining life is
/// shorter than that step). A rate too close to zero for a relative bump
/// falls back to an absolute 1% bump.
#[allow(clippy::too_many_arguments)]
pub(crate) fn lattice_greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    sigma: f64,
    kind: OptionKind,
    style: ExerciseStyle,
    steps: usize,
) -> Result<Greeks, ValidationError> {
    let base = Scenario {
        spot,
        expiry,
        rate,
        sigma,
    };

    let theta_step = BUMP / DAYS_PER_YEAR;
    let rate_bump = if rate.abs() > f64::EPSILON {
        BUMP * rate.abs()
    } else {
        BUMP
    };

    let scenarios = [
        base,
        Scenario {
            spot: spot * (1.0 + BUMP),
            ..base
        },
        Scenario {
            spot: spot * (1.0 - BUMP),
            ..base
        },
        Scenario {
            expiry: (expiry - theta_step).max(0.0),
            ..base
        },
        Scenario {
            sigma: sigma * (1.0 + BUMP),
            ..base
        },
        Scenario {
            sigma: sigma * (1.0 - BUMP),
            ..base
        },
        Scenario {
            rate: rate + rate_bump,
            ..base
        },
        Scenario {
            rate: rate - rate_bump,
            ..base
        },
    ];

    let prices: Vec<f64> = scenarios
        .par_iter()
        .map(|s| lattice::price(s.spot, strike, s.expiry, s.rate, s.sigma, kind, style, steps))
        .collect::<Result<_, _>>()?;

    let [center, s_up, s_down, t_minus, sig_up, sig_down, r_up, r_down] = prices[..] else {
        unreachable!("eight scenarios in, eight prices out");
    };

    let delta = (s_up - s_down) / (2.0 * BUMP * spot);
    let gamma = (s_up - 2.0 * center + s_down) / (BUMP * spot).powi(2);
    let theta = if expiry > theta_step {
        (t_minus - center) / BUMP
    } else {
        0.0
    };
    let vega = (sig_up - sig_down) / (2.0 * BUMP * sigma) / 100.0;
    let rho = (r_up - r_down) / (2.0 * rate_bump) / 100.0;

    Ok(Greeks {
        delta,
        gamma,
        theta,
        vega,
        rho,
    })
}
