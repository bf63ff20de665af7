//! Immutable boundary configuration for one Long Short Pair instance.

use lsp_core::types::Fixed;

use crate::error::ParameterError;

/// Boundary configuration of a Long Short Pair, created once per
/// derivative instance and immutable thereafter.
///
/// Holds the floor and cap prices bounding the range over which the
/// long side's payout varies linearly. The constructor enforces
/// `floor_price < cap_price` strictly, so a constructed value always
/// has a nonzero [`range`](Self::range).
///
/// Parameters are plain immutable data: concurrent reads from any
/// number of settlement callers are safe without coordination.
///
/// # Example
///
/// ```
/// use lsp_core::types::Fixed;
/// use lsp_settlement::LongShortPairParameters;
///
/// let params = LongShortPairParameters::new(
///     Fixed::from_integer(100),
///     Fixed::from_integer(200),
/// )?;
/// assert_eq!(params.floor_price(), Fixed::from_integer(100));
/// assert_eq!(params.cap_price(), Fixed::from_integer(200));
/// assert_eq!(params.range(), Fixed::from_integer(100));
/// # Ok::<(), lsp_settlement::ParameterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedParameters")
)]
pub struct LongShortPairParameters {
    /// Lower bound of the price range; long share is zero at or below it.
    floor_price: Fixed,
    /// Upper bound of the price range; long share is one at or above it.
    cap_price: Fixed,
}

/// Unvalidated mirror used on the deserialize path, so the ordering
/// invariant is enforced through [`LongShortPairParameters::new`] even
/// for parameters arriving over the wire.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedParameters {
    floor_price: Fixed,
    cap_price: Fixed,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedParameters> for LongShortPairParameters {
    type Error = ParameterError;

    fn try_from(unchecked: UncheckedParameters) -> Result<Self, Self::Error> {
        Self::new(unchecked.floor_price, unchecked.cap_price)
    }
}

impl LongShortPairParameters {
    /// Validate and construct the parameters for one instance.
    ///
    /// # Arguments
    ///
    /// * `floor_price` - Lower bound of the price range
    /// * `cap_price` - Upper bound, must strictly exceed `floor_price`
    ///
    /// # Errors
    ///
    /// * [`ParameterError::InvalidRange`] - `cap_price <= floor_price`
    ///
    /// # Example
    ///
    /// ```
    /// use lsp_core::types::Fixed;
    /// use lsp_settlement::LongShortPairParameters;
    ///
    /// // Inverted range is rejected
    /// let result = LongShortPairParameters::new(
    ///     Fixed::from_integer(200),
    ///     Fixed::from_integer(100),
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(floor_price: Fixed, cap_price: Fixed) -> Result<Self, ParameterError> {
        if cap_price <= floor_price {
            return Err(ParameterError::InvalidRange {
                floor: floor_price,
                cap: cap_price,
            });
        }
        Ok(Self {
            floor_price,
            cap_price,
        })
    }

    /// Construct from floating-point bounds.
    ///
    /// Convenience for callers holding `f64` quotes; both values are
    /// converted with [`Fixed::try_from_f64`] before the range check.
    ///
    /// # Errors
    ///
    /// * [`ParameterError::InvalidValue`] - a bound is negative or non-finite
    /// * [`ParameterError::InvalidRange`] - `cap <= floor` after conversion
    pub fn try_from_f64(floor: f64, cap: f64) -> Result<Self, ParameterError> {
        let floor_price = Fixed::try_from_f64(floor)?;
        let cap_price = Fixed::try_from_f64(cap)?;
        Self::new(floor_price, cap_price)
    }

    /// Returns the floor price.
    #[inline]
    pub const fn floor_price(&self) -> Fixed {
        self.floor_price
    }

    /// Returns the cap price.
    #[inline]
    pub const fn cap_price(&self) -> Fixed {
        self.cap_price
    }

    /// Returns the width of the price range, `cap_price - floor_price`.
    ///
    /// Nonzero for every constructed value by the ordering invariant.
    #[inline]
    pub const fn range(&self) -> Fixed {
        Fixed::from_raw(self.cap_price.raw() - self.floor_price.raw())
    }
}
