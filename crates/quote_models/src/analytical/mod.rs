//! Closed-form pricing kernel for European options.

mod black_scholes;

pub use black_scholes::{
    greeks, implied_volatility, price, ImpliedVolResult, IV_INITIAL_GUESS, IV_MAX_ITERATIONS,
    IV_TOLERANCE, IV_VOL_FLOOR,
};
