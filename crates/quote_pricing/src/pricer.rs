//! Model dispatch for option contracts.

use crate::numerical::lattice_greeks;
use crate::{PricerError, PricingModel, PricingResult};
use quote_core::market_data::MarketSnapshot;
use quote_core::types::{Greeks, ValidationError};
use quote_models::instruments::OptionContract;
use quote_models::{analytical, lattice};

/// Prices contracts against market snapshots.
///
/// Dispatch is by exercise style: European contracts go to the closed-form
/// Black–Scholes kernel with analytic Greeks, American contracts to the CRR
/// lattice with finite-difference Greeks. Contracts at or past expiration
/// short-circuit to intrinsic value with zero Greeks.
///
/// The pricer holds no market state; every input comes from the snapshot
/// and the caller-supplied volatility, which keeps concurrent pricing tasks
/// free of shared mutable state.
///
/// # Examples
/// ```
/// use quote_core::market_data::MarketSnapshot;
/// use quote_core::types::{ExerciseStyle, OptionKind};
/// use quote_models::instruments::OptionContract;
/// use quote_pricing::{OptionsPricer, PricingModel};
/// use chrono::{Duration, Utc};
///
/// let valuation = Utc::now();
/// let snapshot = MarketSnapshot::new(100.0, 0.02, valuation, vec![]).unwrap();
/// let contract = OptionContract::new(
///     "STOCK_C_100", "STOCK", OptionKind::Call, ExerciseStyle::European,
///     100.0, valuation + Duration::days(182), valuation,
/// ).unwrap();
///
/// let result = OptionsPricer::default()
///     .price(&contract, &snapshot, 0.25)
///     .unwrap();
/// assert_eq!(result.model, PricingModel::ClosedForm);
/// assert!(result.price > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct OptionsPricer {
    lattice_steps: usize,
}

impl Default for OptionsPricer {
    fn default() -> Self {
        Self {
            lattice_steps: lattice::DEFAULT_STEPS,
        }
    }
}

impl OptionsPricer {
    /// Creates a pricer with a custom lattice resolution.
    ///
    /// # Errors
    /// `ValidationError::InvalidSteps` if `lattice_steps == 0`.
    pub fn new(lattice_steps: usize) -> Result<Self, PricerError> {
        if lattice_steps == 0 {
            return Err(ValidationError::InvalidSteps {
                steps: lattice_steps,
            }
            .into());
        }
        Ok(Self { lattice_steps })
    }

    /// Lattice steps used for American contracts.
    pub fn lattice_steps(&self) -> usize {
        self.lattice_steps
    }

    /// Prices one contract with the supplied volatility.
    ///
    /// Time to expiry is measured from the snapshot's valuation instant.
    /// A non-positive remaining life yields intrinsic value, zero Greeks
    /// and [`PricingModel::Expired`] rather than an error, because expired
    /// contracts legitimately appear in portfolios between fills and
    /// settlement.
    ///
    /// # Errors
    /// `PricerError::Validation` when the kernel rejects an input, e.g. a
    /// non-positive volatility for a live contract.
    pub fn price(
        &self,
        contract: &OptionContract,
        snapshot: &MarketSnapshot,
        sigma: f64,
    ) -> Result<PricingResult, PricerError> {
        let expiry = snapshot.years_to(contract.expiration());
        if expiry <= 0.0 {
            return Ok(PricingResult {
                price: contract.intrinsic(snapshot.spot()),
                greeks: Greeks::zero(),
                model: PricingModel::Expired,
            });
        }

        let spot = snapshot.spot();
        let strike = contract.strike();
        let rate = snapshot.risk_free_rate();

        if contract.style().is_american() {
            let price = lattice::price(
                spot,
                strike,
                expiry,
                rate,
                sigma,
                contract.kind(),
                contract.style(),
                self.lattice_steps,
            )?;
            let greeks = lattice_greeks(
                spot,
                strike,
                expiry,
                rate,
                sigma,
                contract.kind(),
                contract.style(),
                self.lattice_steps,
            )?;
            Ok(PricingResult {
                price,
                greeks,
                model: PricingModel::Lattice,
            })
        } else {
            let price = analytical::price(spot, strike, expiry, rate, sigma, contract.kind())?;
            let greeks = analytical::greeks(spot, strike, expiry, rate, sigma, contract.kind())?;
            Ok(PricingResult {
                price,
                greeks,
                model: PricingModel::ClosedForm,
            })
        }
    }
}
