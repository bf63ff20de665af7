//! Property tests for the payout calculator.
//!
//! These pin down the settlement invariants: boundary anchoring, exact
//! sum-to-one under integer arithmetic, monotonicity in the expiry
//! price, idempotence, and constructor rejection of malformed ranges.

use lsp_core::types::Fixed;
use lsp_settlement::{
    compute_payout, ExpiryPrice, LongShortPairParameters, ParameterError,
};
use proptest::prelude::*;

/// Largest raw bound used in generation: u64::MAX whole units.
const MAX_RAW: u128 = u64::MAX as u128 * Fixed::SCALE;

/// Generate valid parameters with two distinct bounds in order.
fn params_strategy() -> impl Strategy<Value = LongShortPairParameters> {
    (0..MAX_RAW, 0..MAX_RAW).prop_filter_map("bounds must differ", |(a, b)| {
        if a == b {
            return None;
        }
        let (floor, cap) = if a < b { (a, b) } else { (b, a) };
        Some(
            LongShortPairParameters::new(Fixed::from_raw(floor), Fixed::from_raw(cap))
                .expect("ordered distinct bounds are valid"),
        )
    })
}

/// Generate a non-negative expiry price covering the full bound range.
fn price_strategy() -> impl Strategy<Value = ExpiryPrice> {
    (0..=MAX_RAW as i128).prop_map(ExpiryPrice::from_raw)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_floor_anchors_to_zero(params in params_strategy()) {
        let at_floor = ExpiryPrice::from_raw(params.floor_price().raw() as i128);
        let ratio = compute_payout(at_floor, &params).unwrap();
        prop_assert_eq!(ratio.long(), Fixed::ZERO);
        prop_assert_eq!(ratio.short(), Fixed::ONE);
    }

    #[test]
    fn prop_cap_anchors_to_one(params in params_strategy()) {
        let at_cap = ExpiryPrice::from_raw(params.cap_price().raw() as i128);
        let ratio = compute_payout(at_cap, &params).unwrap();
        prop_assert_eq!(ratio.long(), Fixed::ONE);
        prop_assert_eq!(ratio.short(), Fixed::ZERO);
    }

    #[test]
    fn prop_shares_sum_to_scale_exactly(
        params in params_strategy(),
        price in price_strategy(),
    ) {
        let ratio = compute_payout(price, &params).unwrap();
        prop_assert_eq!(ratio.long().raw() + ratio.short().raw(), Fixed::SCALE);
    }

    #[test]
    fn prop_long_share_bounded(
        params in params_strategy(),
        price in price_strategy(),
    ) {
        let ratio = compute_payout(price, &params).unwrap();
        prop_assert!(ratio.long() <= Fixed::ONE);
    }

    #[test]
    fn prop_monotonic_in_expiry_price(
        params in params_strategy(),
        p1 in price_strategy(),
        p2 in price_strategy(),
    ) {
        let (lower, higher) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let low_ratio = compute_payout(lower, &params).unwrap();
        let high_ratio = compute_payout(higher, &params).unwrap();
        prop_assert!(low_ratio.long() <= high_ratio.long());
    }

    #[test]
    fn prop_idempotent(
        params in params_strategy(),
        price in price_strategy(),
    ) {
        let first = compute_payout(price, &params).unwrap();
        let second = compute_payout(price, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_negative_price_always_rejected(
        params in params_strategy(),
        raw in i128::MIN..0i128,
    ) {
        let result = compute_payout(ExpiryPrice::from_raw(raw), &params);
        prop_assert!(result.is_err());
    }

    #[test]
    fn prop_construction_rejects_unordered_bounds(
        a in 0..MAX_RAW,
        b in 0..MAX_RAW,
    ) {
        let result =
            LongShortPairParameters::new(Fixed::from_raw(a), Fixed::from_raw(b));
        if b > a {
            prop_assert!(result.is_ok());
        } else {
            // prop_assert! stringifies its condition, so the struct
            // pattern has to live outside the macro invocation.
            let is_invalid_range =
                matches!(result, Err(ParameterError::InvalidRange { .. }));
            prop_assert!(is_invalid_range);
        }
    }
}
