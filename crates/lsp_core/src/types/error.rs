//! Error types for structured error handling.
//!
//! This module provides:
//! - `FixedPointError`: Errors from fixed-point value construction
//! - `MathError`: Errors from wide integer arithmetic

use thiserror::Error;

/// Fixed-point conversion errors.
///
/// Provides structured error handling for constructing fixed-point
/// values from floating-point inputs. Malformed input is rejected,
/// never clamped or defaulted.
///
/// # Variants
/// - `NonFinite`: Input is NaN or infinite
/// - `Negative`: Input is below zero
/// - `OutOfRange`: Input does not fit in the raw representation
///
/// # Examples
/// ```
/// use lsp_core::types::FixedPointError;
///
/// let err = FixedPointError::Negative { value: -1.5 };
/// assert_eq!(format!("{}", err), "Negative value: -1.5");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FixedPointError {
    /// Input is NaN or infinite.
    #[error("Non-finite value: {value}")]
    NonFinite {
        /// The offending input
        value: f64,
    },

    /// Input is below zero.
    #[error("Negative value: {value}")]
    Negative {
        /// The offending input
        value: f64,
    },

    /// Scaled input exceeds the raw `u128` representation.
    #[error("Value {value} out of fixed-point range")]
    OutOfRange {
        /// The offending input
        value: f64,
    },
}

/// Wide integer arithmetic errors.
///
/// Provides structured error handling for the multiply-then-divide
/// primitive in [`crate::math::muldiv`].
///
/// # Variants
/// - `DivisionByZero`: Divisor was zero
/// - `Overflow`: Quotient exceeds `u128`
///
/// # Examples
/// ```
/// use lsp_core::types::MathError;
///
/// let err = MathError::DivisionByZero;
/// assert_eq!(format!("{}", err), "Division by zero");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MathError {
    /// Divisor was zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Quotient does not fit in 128 bits.
    #[error("Quotient overflows 128 bits")]
    Overflow,
}
