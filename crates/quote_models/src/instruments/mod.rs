//! Option instruments and portfolio positions.

mod contract;
mod position;

pub use contract::{OptionContract, DEFAULT_MULTIPLIER};
pub use position::{Fill, Leg, OptionPosition};
