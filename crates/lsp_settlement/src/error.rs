//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParameterError`: Errors from parameter construction
//! - `SettlementError`: Errors from payout computation
//!
//! Every error is returned to the immediate caller; the engine never
//! logs, retries, or recovers. Callers must treat any error as
//! settlement-blocking.

use lsp_core::types::{Fixed, FixedPointError, MathError};
use thiserror::Error;

use crate::payout::ExpiryPrice;

/// Parameter construction errors.
///
/// Provides structured error handling for the boundary configuration
/// of one derivative instance.
///
/// # Variants
/// - `InvalidRange`: `cap_price` does not strictly exceed `floor_price`
/// - `InvalidValue`: a supplied bound is negative or non-finite
///
/// # Examples
/// ```
/// use lsp_core::types::Fixed;
/// use lsp_settlement::ParameterError;
///
/// let err = ParameterError::InvalidRange {
///     floor: Fixed::from_integer(200),
///     cap: Fixed::from_integer(100),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid range: cap price 100 must exceed floor price 200"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterError {
    /// The ordering constraint `floor_price < cap_price` is violated.
    ///
    /// A zero-width range makes the payout undefined at the single
    /// allowed price point and is rejected rather than silently
    /// resolved.
    #[error("Invalid range: cap price {cap} must exceed floor price {floor}")]
    InvalidRange {
        /// The supplied floor price
        floor: Fixed,
        /// The supplied cap price
        cap: Fixed,
    },

    /// A supplied bound is negative, non-finite, or out of range.
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] FixedPointError),
}

/// Payout computation errors.
///
/// # Variants
/// - `InvalidValue`: the expiry price is negative
/// - `Arithmetic`: wide arithmetic failed (unreachable for validated
///   parameters, still propagated rather than unwrapped)
///
/// # Examples
/// ```
/// use lsp_settlement::{ExpiryPrice, SettlementError};
///
/// let err = SettlementError::InvalidValue {
///     price: ExpiryPrice::from_raw(-1),
/// };
/// assert!(format!("{}", err).contains("negative expiry price"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettlementError {
    /// The expiry price is negative.
    ///
    /// A negative settlement price indicates an upstream data error
    /// and must not be silently absorbed by clamping to the floor.
    #[error("Invalid value: negative expiry price {price}")]
    InvalidValue {
        /// The rejected expiry price
        price: ExpiryPrice,
    },

    /// Wide arithmetic failed during interpolation.
    #[error("Arithmetic failure: {0}")]
    Arithmetic(#[from] MathError),
}
