//! Option sensitivity (Greeks) value type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// First-order option sensitivities.
///
/// Units follow market convention rather than raw partial derivatives:
/// - `delta`, `gamma`: per unit of underlying price
/// - `theta`: per calendar day (annualised value divided by 365)
/// - `vega`: per 1 percentage-point change in volatility
/// - `rho`: per 1 percentage-point change in the risk-free rate
///
/// Greeks aggregate across legs and strategies by summation, so the type
/// implements [`Add`] and [`AddAssign`] and provides quantity scaling.
///
/// # Examples
/// ```
/// use quote_core::types::Greeks;
///
/// let leg = Greeks { delta: 0.5, gamma: 0.02, theta: -0.01, vega: 0.15, rho: 0.25 };
/// let short_two = leg.scaled(-2.0);
/// assert_eq!(short_two.delta, -1.0);
///
/// let net = leg + short_two;
/// assert!((net.delta - (-0.5)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Sensitivity to the underlying price.
    pub delta: f64,
    /// Rate of change of delta.
    pub gamma: f64,
    /// Time decay per calendar day.
    pub theta: f64,
    /// Sensitivity per volatility point.
    pub vega: f64,
    /// Sensitivity per rate point.
    pub rho: f64,
}

impl Greeks {
    /// All-zero Greeks, used for expired contracts and as the aggregation
    /// identity.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns these Greeks scaled by a signed quantity.
    ///
    /// Short positions pass a negative quantity; the sign flows through
    /// every component.
    #[inline]
    pub fn scaled(&self, quantity: f64) -> Self {
        Self {
            delta: self.delta * quantity,
            gamma: self.gamma * quantity,
            theta: self.theta * quantity,
            vega: self.vega * quantity,
            rho: self.rho * quantity,
        }
    }
}

impl Add for Greeks {
    type Output = Greeks;

    #[inline]
    fn add(self, rhs: Greeks) -> Greeks {
        Greeks {
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            theta: self.theta + rhs.theta,
            vega: self.vega + rhs.vega,
            rho: self.rho + rhs.rho,
        }
    }
}

impl AddAssign for Greeks {
    #[inline]
    fn add_assign(&mut self, rhs: Greeks) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Greeks {
    fn sum<I: Iterator<Item = Greeks>>(iter: I) -> Greeks {
        iter.fold(Greeks::zero(), Add::add)
    }
}
