//! Deterministic payout calculation for a Long Short Pair.

use std::fmt;

use lsp_core::math::mul_div_floor;
use lsp_core::types::{Fixed, FixedPointError};

use crate::error::SettlementError;
use crate::params::LongShortPairParameters;

/// A single externally-supplied price observation at expiry.
///
/// Stored as a signed raw `i128` at the same `10^18` scale as
/// [`Fixed`]. The sign is deliberate: upstream price feeds can emit
/// negative observations, and the calculator must reject them
/// explicitly rather than have the type system clamp them away before
/// the error can be reported.
///
/// The engine never caches or mutates an expiry price; it is consumed
/// by the single [`compute_payout`] call that produces the ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ExpiryPrice(i128);

impl ExpiryPrice {
    /// Construct from raw scaled units (`10^18` per whole unit).
    #[inline]
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// Construct from a whole number of units.
    #[inline]
    pub const fn from_integer(units: i64) -> Self {
        Self(units as i128 * Fixed::SCALE as i128)
    }

    /// Construct from a floating-point observation, truncating toward zero.
    ///
    /// Negative observations are representable here and rejected later
    /// by [`compute_payout`]; only non-finite or unrepresentable input
    /// fails at construction.
    ///
    /// # Errors
    ///
    /// * [`FixedPointError::NonFinite`] - `value` is NaN or infinite
    /// * [`FixedPointError::OutOfRange`] - scaled value exceeds `i128`
    pub fn try_from_f64(value: f64) -> Result<Self, FixedPointError> {
        if !value.is_finite() {
            return Err(FixedPointError::NonFinite { value });
        }
        let scaled = value * Fixed::SCALE as f64;
        if scaled >= i128::MAX as f64 || scaled <= i128::MIN as f64 {
            return Err(FixedPointError::OutOfRange { value });
        }
        Ok(Self(scaled as i128))
    }

    /// Returns the raw scaled representation.
    #[inline]
    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Returns true if the observation is below zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for ExpiryPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}", Fixed::from_raw(self.0.unsigned_abs()))
    }
}

/// The long side's share of pooled collateral at settlement.
///
/// Holds a [`Fixed`] in `[0, ONE]`; the short side's share is the
/// exact complement `ONE - long`, obtained by subtraction rather than
/// a second division so the two shares always sum to exactly one unit.
/// No collateral can be created or destroyed by rounding.
///
/// Ratios are derived fresh by [`compute_payout`] and never persisted
/// by the engine. Serialisation is one-way: a ratio can be written out
/// for the settlement orchestration, but only the calculator can mint
/// one, so the `[0, ONE]` bound cannot be bypassed over the wire.
///
/// # Example
///
/// ```
/// use lsp_core::types::Fixed;
/// use lsp_settlement::PayoutRatio;
///
/// let all_long = PayoutRatio::ALL_LONG;
/// assert_eq!(all_long.long(), Fixed::ONE);
/// assert_eq!(all_long.short(), Fixed::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct PayoutRatio(Fixed);

impl PayoutRatio {
    /// Expiry at or below the floor: the short side takes everything.
    pub const ALL_SHORT: Self = Self(Fixed::ZERO);

    /// Expiry at or above the cap: the long side takes everything.
    pub const ALL_LONG: Self = Self(Fixed::ONE);

    /// Wrap an interpolated long share.
    ///
    /// Callers guarantee `long <= Fixed::ONE`; the truncating division
    /// in [`compute_payout`] cannot produce more than the full scale.
    #[inline]
    pub(crate) fn from_long(long: Fixed) -> Self {
        debug_assert!(long <= Fixed::ONE);
        Self(long)
    }

    /// Returns the long side's share in `[0, ONE]`.
    #[inline]
    pub const fn long(self) -> Fixed {
        self.0
    }

    /// Returns the short side's share, the exact complement of
    /// [`long`](Self::long).
    #[inline]
    pub const fn short(self) -> Fixed {
        Fixed::from_raw(Fixed::SCALE - self.0.raw())
    }
}

impl fmt::Display for PayoutRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "long {} / short {}", self.long(), self.short())
    }
}

/// Compute the long side's payout ratio for a given expiry price.
///
/// Linear interpolation between the two boundaries is the governing
/// rule:
///
/// ```text
/// expiry <= floor            => 0
/// expiry >= cap              => ONE
/// otherwise                  => (expiry - floor) * SCALE / (cap - floor)
/// ```
///
/// The interpolation runs in integer fixed-point with truncating
/// division through a 256-bit intermediate, so the result never
/// exceeds the scale and never loses value to overflow. Boundary
/// prices resolve through the clamp branches, never the interpolation
/// branch, to avoid division artifacts at the edges.
///
/// The computation is pure and idempotent: calling it twice with the
/// same inputs yields the same output, so independent observers can
/// re-verify a settlement without side effects.
///
/// # Arguments
///
/// * `expiry_price` - The settlement observation, supplied once per instance
/// * `parameters` - The instance's immutable boundary configuration
///
/// # Errors
///
/// * [`SettlementError::InvalidValue`] - `expiry_price` is negative
/// * [`SettlementError::Arithmetic`] - wide arithmetic failed
///   (unreachable for validated parameters)
///
/// # Example
///
/// ```
/// use lsp_core::types::Fixed;
/// use lsp_settlement::{compute_payout, ExpiryPrice, LongShortPairParameters};
///
/// let params = LongShortPairParameters::new(
///     Fixed::from_integer(100),
///     Fixed::from_integer(200),
/// )?;
///
/// // Below the floor the long claim is worthless
/// let ratio = compute_payout(ExpiryPrice::from_integer(50), &params)?;
/// assert_eq!(ratio.long(), Fixed::ZERO);
///
/// // Midway through the range the pool splits evenly
/// let ratio = compute_payout(ExpiryPrice::from_integer(150), &params)?;
/// assert_eq!(ratio.long().raw(), Fixed::SCALE / 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_payout(
    expiry_price: ExpiryPrice,
    parameters: &LongShortPairParameters,
) -> Result<PayoutRatio, SettlementError> {
    if expiry_price.is_negative() {
        return Err(SettlementError::InvalidValue {
            price: expiry_price,
        });
    }
    let price = Fixed::from_raw(expiry_price.raw() as u128);

    if price <= parameters.floor_price() {
        return Ok(PayoutRatio::ALL_SHORT);
    }
    if price >= parameters.cap_price() {
        return Ok(PayoutRatio::ALL_LONG);
    }

    // Strictly inside the range: 0 < above_floor < range
    let above_floor = price.raw() - parameters.floor_price().raw();
    let long = mul_div_floor(above_floor, Fixed::SCALE, parameters.range().raw())?;

    Ok(PayoutRatio::from_long(Fixed::from_raw(long)))
}
