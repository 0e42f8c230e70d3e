//! Cox–Ross–Rubinstein binomial lattice kernel.

mod crr;

pub use crr::{price, DEFAULT_STEPS};
