//! Fee/bonus curve arithmetic.
//!
//! All fee and multiplier parameters are fixed-point with scale 10^18.
//! Chained 10^18-scale products are carried in `U256` before dividing back
//! down, and every narrowing conversion is overflow-checked with a stable
//! panic message.

use soroban_sdk::{Env, U256};

use crate::errors::*;
use crate::types::CurveConfig;

/// Fixed-point scale shared by all curve parameters.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Scale of a product of two fixed-point factors.
pub const SCALE_SQUARED: i128 = SCALE * SCALE;

/// Widen a non-negative `i128` into a `U256`.
///
/// Callers validate non-negative values before widening.
fn wide(e: &Env, value: i128) -> U256 {
    U256::from_u128(e, value as u128)
}

/// Narrow a `U256` back to `i128`, panicking with `msg` if it does not fit.
fn narrow(value: &U256, msg: &'static str) -> i128 {
    value
        .to_u128()
        .and_then(|v| i128::try_from(v).ok())
        .unwrap_or_else(|| panic!("{msg}"))
}

fn scale_by_multiplier(e: &Env, amount: i128, multiplier: i128) -> i128 {
    let scaled = wide(e, amount).mul(&wide(e, multiplier)).div(&wide(e, SCALE));
    narrow(&scaled, ERR_SHARES_OVERFLOW)
}

/// Check the construction-time curve invariants.
///
/// Panics unless `min_lock_duration < max_lock_duration`, the duration bounds
/// fit in 32 bits, every fee/bonus parameter is non-negative, and the
/// worst-case fee fraction `min_early_withdrawal_fee +
/// base_early_withdrawal_fee * max_dividends_bonus_multiplier` stays within
/// 10^36 (100% after dividing the scale back out twice).
pub fn validate(curve: &CurveConfig) {
    if curve.min_lock_duration >= curve.max_lock_duration {
        panic!("{}", ERR_DURATION_BOUNDS_ORDER);
    }
    if curve.max_lock_duration > u32::MAX as u64 {
        panic!("{}", ERR_DURATION_BOUNDS_RANGE);
    }
    if curve.min_early_withdrawal_fee < 0
        || curve.base_early_withdrawal_fee < 0
        || curve.max_dividends_bonus_multiplier < 0
    {
        panic!("{}", ERR_CURVE_NEGATIVE_PARAM);
    }
    let worst_case = curve
        .base_early_withdrawal_fee
        .checked_mul(curve.max_dividends_bonus_multiplier)
        .and_then(|dynamic| dynamic.checked_add(curve.min_early_withdrawal_fee));
    match worst_case {
        Some(fraction) if fraction <= SCALE_SQUARED => {}
        _ => panic!("{}", ERR_FEE_ABOVE_ONE),
    }
}

/// Dividends multiplier for a requested duration, scale 10^18.
///
/// Interpolates linearly from 1.0x at `min_lock_duration` to
/// `1.0 + max_dividends_bonus_multiplier` at `max_lock_duration`. Integer
/// division truncates, so the bonus is never over-granted by rounding.
/// Panics if `duration` falls outside the curve bounds.
pub fn dividends_multiplier(e: &Env, curve: &CurveConfig, duration: u64) -> i128 {
    if duration < curve.min_lock_duration || duration > curve.max_lock_duration {
        panic!("{}", ERR_DURATION_OUT_OF_BOUNDS);
    }
    let span = curve.max_lock_duration - curve.min_lock_duration;
    let offset = duration - curve.min_lock_duration;
    let bonus = wide(e, curve.max_dividends_bonus_multiplier)
        .mul(&U256::from_u128(e, offset as u128))
        .div(&U256::from_u128(e, span as u128));
    narrow(&bonus, ERR_MULTIPLIER_OVERFLOW)
        .checked_add(SCALE)
        .unwrap_or_else(|| panic!("{}", ERR_MULTIPLIER_OVERFLOW))
}

/// Dividend shares owed for locking `amount` over `duration`:
/// `amount * multiplier / 10^18`, floored.
pub fn dividend_shares(e: &Env, curve: &CurveConfig, amount: i128, duration: u64) -> i128 {
    if amount < 0 {
        panic!("{}", ERR_NEGATIVE_AMOUNT);
    }
    let multiplier = dividends_multiplier(e, curve, duration);
    scale_by_multiplier(e, amount, multiplier)
}

/// Dividend shares and early-withdrawal fee for withdrawing `amount` from a
/// lock with the given creation parameters at time `now`.
///
/// The fee is zero at or past the unlock timestamp and whenever the emergency
/// latch is set. Before that it is the sum of a time-independent minimum and
/// a term decaying linearly with the time remaining:
///
/// ```text
/// minimum = amount * min_early_withdrawal_fee / 1e18
/// dynamic = amount * base_early_withdrawal_fee * remaining * multiplier
///           / (1e36 * lock_duration)
/// ```
pub fn withdrawal_parameters(
    e: &Env,
    curve: &CurveConfig,
    amount: i128,
    locked_at: u64,
    lock_duration: u64,
    now: u64,
    emergency_unlocked: bool,
) -> (i128, i128) {
    if amount < 0 {
        panic!("{}", ERR_NEGATIVE_AMOUNT);
    }
    let multiplier = dividends_multiplier(e, curve, lock_duration);
    let shares = scale_by_multiplier(e, amount, multiplier);

    let unlocks_at = locked_at
        .checked_add(lock_duration)
        .unwrap_or_else(|| panic!("{}", ERR_UNLOCK_OVERFLOW));
    if emergency_unlocked || now >= unlocks_at {
        return (shares, 0);
    }
    let remaining = unlocks_at - now;

    let minimum_fee = wide(e, amount)
        .mul(&wide(e, curve.min_early_withdrawal_fee))
        .div(&wide(e, SCALE));
    let dynamic_fee = wide(e, amount)
        .mul(&wide(e, curve.base_early_withdrawal_fee))
        .mul(&U256::from_u128(e, remaining as u128))
        .mul(&wide(e, multiplier))
        .div(&wide(e, SCALE_SQUARED).mul(&U256::from_u128(e, lock_duration as u128)));
    let fee = narrow(&minimum_fee.add(&dynamic_fee), ERR_FEE_OVERFLOW);
    (shares, fee)
}
