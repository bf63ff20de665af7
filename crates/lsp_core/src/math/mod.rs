//! Integer arithmetic helpers for fixed-point settlement.
//!
//! This module provides:
//! - `muldiv`: Overflow-safe multiply-then-divide over a 256-bit intermediate
//!
//! # Re-exports
//!
//! - [`mul_div_floor`] from `muldiv`

pub mod muldiv;

pub use muldiv::mul_div_floor;
