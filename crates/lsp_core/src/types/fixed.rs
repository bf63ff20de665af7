//! Unsigned fixed-point value type at 1e18 scale.

use std::fmt;

use crate::types::FixedPointError;

/// Unsigned fixed-point value, stored as raw `u128` units scaled by `10^18`.
///
/// One whole unit is `10^18` raw units (the "wad" convention), so the
/// type represents values in `[0, u128::MAX / 10^18]` with 18 decimal
/// places of resolution. Values are non-negative by construction and
/// immutable; all arithmetic is explicit and checked.
///
/// # Example
///
/// ```
/// use lsp_core::types::Fixed;
///
/// let price = Fixed::from_integer(150);
/// assert_eq!(price.raw(), 150 * Fixed::SCALE);
/// assert_eq!(format!("{}", price), "150");
///
/// let half = Fixed::from_raw(Fixed::SCALE / 2);
/// assert_eq!(format!("{}", half), "0.5");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Fixed(u128);

impl Fixed {
    /// Raw units per whole unit: `10^18`.
    pub const SCALE: u128 = 1_000_000_000_000_000_000;

    /// The value zero.
    pub const ZERO: Self = Self(0);

    /// The value one (equal to [`Self::SCALE`] raw units).
    pub const ONE: Self = Self(Self::SCALE);

    /// Construct from raw scaled units.
    ///
    /// The argument is interpreted as already carrying the `10^18`
    /// scale: `from_raw(Fixed::SCALE)` is the value one.
    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Construct from a whole number of units.
    ///
    /// Infallible: `u64::MAX * 10^18` fits comfortably in `u128`.
    ///
    /// # Example
    ///
    /// ```
    /// use lsp_core::types::Fixed;
    ///
    /// assert_eq!(Fixed::from_integer(1), Fixed::ONE);
    /// ```
    #[inline]
    pub const fn from_integer(units: u64) -> Self {
        Self(units as u128 * Self::SCALE)
    }

    /// Construct from a floating-point value, truncating toward zero.
    ///
    /// Rejects rather than clamps: a NaN, infinite, or negative input
    /// indicates an upstream data error that must not be silently
    /// absorbed.
    ///
    /// # Errors
    ///
    /// * [`FixedPointError::NonFinite`] - `value` is NaN or infinite
    /// * [`FixedPointError::Negative`] - `value` is below zero
    /// * [`FixedPointError::OutOfRange`] - scaled value exceeds `u128`
    ///
    /// # Example
    ///
    /// ```
    /// use lsp_core::types::Fixed;
    ///
    /// let v = Fixed::try_from_f64(2.5).unwrap();
    /// assert_eq!(v.raw(), 5 * Fixed::SCALE / 2);
    ///
    /// assert!(Fixed::try_from_f64(f64::NAN).is_err());
    /// assert!(Fixed::try_from_f64(-1.0).is_err());
    /// ```
    pub fn try_from_f64(value: f64) -> Result<Self, FixedPointError> {
        if !value.is_finite() {
            return Err(FixedPointError::NonFinite { value });
        }
        if value < 0.0 {
            return Err(FixedPointError::Negative { value });
        }
        let scaled = value * Self::SCALE as f64;
        if scaled >= u128::MAX as f64 {
            return Err(FixedPointError::OutOfRange { value });
        }
        Ok(Self(scaled as u128))
    }

    /// Returns the raw scaled representation.
    #[inline]
    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Convert to `f64`, losing precision beyond the f64 mantissa.
    ///
    /// Intended for display and diagnostics only; settlement arithmetic
    /// stays in the integer domain.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` if `rhs > self`.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Returns true if the value is exactly zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Fixed {
    /// Formats as a decimal with trailing zeros trimmed, e.g. `"1.5"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / Self::SCALE;
        let frac = self.0 % Self::SCALE;
        if frac == 0 {
            write!(f, "{}", units)
        } else {
            let digits = format!("{:018}", frac);
            write!(f, "{}.{}", units, digits.trim_end_matches('0'))
        }
    }
}
