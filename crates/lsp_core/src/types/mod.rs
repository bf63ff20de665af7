//! Core numeric and error types.
//!
//! This module provides:
//! - `fixed`: The `Fixed` value type, an unsigned fixed-point number at 1e18 scale
//! - `error`: Structured error types for fixed-point conversion and wide arithmetic
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Fixed`] from `fixed`
//! - [`FixedPointError`], [`MathError`] from `error`

pub mod error;
pub mod fixed;

// Re-export commonly used types at module level
pub use error::{FixedPointError, MathError};
pub use fixed::Fixed;
