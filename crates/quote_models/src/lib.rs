//! # Quote Models
//!
//! Instrument definitions and pure pricing kernels.
//!
//! This crate provides:
//! - Option contract and position types (stock and option legs as an
//!   explicit tagged union, no nullable references)
//! - The closed-form lognormal kernel for European options, with analytic
//!   Greeks and a Newton–Raphson implied-volatility solver
//! - The Cox–Ross–Rubinstein binomial lattice for American options
//!
//! Both kernels are stateless functions over immutable inputs; they carry
//! no caches and are safe to call from any number of threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod lattice;
