//! Numerical primitives for the pricing kernels.

pub mod distributions;
