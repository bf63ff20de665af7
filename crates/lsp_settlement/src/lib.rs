//! # lsp_settlement: Long Short Pair Parameterization and Payout
//!
//! ## Domain Layer Role
//!
//! lsp_settlement sits on top of `lsp_core` and provides:
//! - Immutable per-instance boundary configuration (`params`)
//! - The deterministic payout calculator (`payout`)
//! - Error types: `ParameterError`, `SettlementError` (`error`)
//!
//! A Long Short Pair splits one pool of collateral between "long" and
//! "short" claim holders based on a single expiry price observation.
//! The long side's share varies linearly between a floor price (share
//! zero) and a cap price (share one); the short side always receives
//! the exact complement.
//!
//! The calculator is a pure function over immutable inputs: no state,
//! no I/O, no retries. Any malformed input is returned as an error to
//! the caller, never clamped or defaulted, because a wrong ratio here
//! is unrecoverable financial loss.
//!
//! ## Usage Example
//!
//! ```rust
//! use lsp_core::types::Fixed;
//! use lsp_settlement::{compute_payout, ExpiryPrice, LongShortPairParameters};
//!
//! let params = LongShortPairParameters::new(
//!     Fixed::from_integer(100),
//!     Fixed::from_integer(200),
//! )?;
//!
//! let ratio = compute_payout(ExpiryPrice::from_integer(150), &params)?;
//! assert_eq!(ratio.long().raw(), Fixed::SCALE / 2);
//! assert_eq!(
//!     ratio.long().raw() + ratio.short().raw(),
//!     Fixed::SCALE,
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameters, prices, and ratios

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod params;
pub mod payout;

pub use error::{ParameterError, SettlementError};
pub use params::LongShortPairParameters;
pub use payout::{compute_payout, ExpiryPrice, PayoutRatio};
