//! # Quote Core
//!
//! Foundation crate for the options market-making engine.
//!
//! This crate provides:
//! - Shared vocabulary types (option kind, exercise style, Greeks)
//! - Validation error taxonomy used by every pricing layer
//! - Standard normal distribution functions for the closed-form kernel
//! - Immutable market-data snapshots captured once per pricing cycle
//!
//! ## Design Principles
//!
//! - **Immutable snapshots**: market data (spot, chain, risk-free rate) is
//!   captured at the start of a cycle and treated as read-only for the
//!   cycle's duration, so parallel pricing tasks always see a consistent view.
//! - **Validation is fatal, degradation is data**: invalid inputs are rejected
//!   with structured errors; numerical and data-sufficiency issues are
//!   reported through flags on results instead of errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
