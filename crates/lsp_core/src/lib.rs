//! # lsp_core: Numeric Foundation for LSP Settlement
//!
//! ## Foundation Layer Role
//!
//! lsp_core is the bottom layer of the two-layer settlement engine,
//! providing:
//! - Fixed-point value type at 1e18 scale (`types::fixed`)
//! - Overflow-safe multiply-then-divide (`math::muldiv`)
//! - Error types: `FixedPointError`, `MathError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependency on the settlement crate, with
//! minimal external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! All arithmetic is integer-exact: values are `u128` raw units scaled
//! by `10^18`, and intermediate products are carried in 256 bits so a
//! quotient is never silently truncated by overflow.
//!
//! ## Usage Examples
//!
//! ```rust
//! use lsp_core::math::muldiv::mul_div_floor;
//! use lsp_core::types::Fixed;
//!
//! // Fixed-point values
//! let half = Fixed::from_raw(Fixed::SCALE / 2);
//! assert_eq!(half.to_f64(), 0.5);
//!
//! // Wide multiply-then-divide: 3 * 10^18 / 2, exact
//! let q = mul_div_floor(3, Fixed::SCALE, 2).unwrap();
//! assert_eq!(q, 1_500_000_000_000_000_000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Fixed` and the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
