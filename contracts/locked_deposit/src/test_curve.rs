//! Direct tests of the fee/bonus curve arithmetic.

#![cfg(test)]

use crate::curve::{dividend_shares, dividends_multiplier, validate, withdrawal_parameters, SCALE};
use crate::test_helpers::{default_curve, ONE_DAY, ONE_YEAR, THIRTY_DAYS};
use crate::types::CurveConfig;
use soroban_sdk::Env;

// ═══════════════════════════════════════════════════════════════════
// 1. Dividends multiplier
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_multiplier_is_one_at_min_duration() {
    let e = Env::default();
    let cfg = default_curve();
    assert_eq!(dividends_multiplier(&e, &cfg, cfg.min_lock_duration), SCALE);
}

#[test]
fn test_multiplier_is_max_at_max_duration() {
    let e = Env::default();
    let cfg = default_curve();
    assert_eq!(
        dividends_multiplier(&e, &cfg, cfg.max_lock_duration),
        SCALE + cfg.max_dividends_bonus_multiplier
    );
}

#[test]
fn test_multiplier_midpoint() {
    let e = Env::default();
    let cfg = default_curve();
    let span = cfg.max_lock_duration - cfg.min_lock_duration;
    // Half the span earns half the bonus: 1.25x for the default curve.
    let m = dividends_multiplier(&e, &cfg, cfg.min_lock_duration + span / 2);
    assert_eq!(m, SCALE + cfg.max_dividends_bonus_multiplier / 2);
}

#[test]
fn test_multiplier_floors_toward_zero() {
    let e = Env::default();
    let cfg = default_curve();
    let span = (cfg.max_lock_duration - cfg.min_lock_duration) as i128;
    let m = dividends_multiplier(&e, &cfg, cfg.min_lock_duration + 1);
    assert_eq!(m, SCALE + cfg.max_dividends_bonus_multiplier / span);
}

#[test]
fn test_multiplier_monotonic_in_duration() {
    let e = Env::default();
    let cfg = default_curve();
    let mut last = 0_i128;
    let mut d = cfg.min_lock_duration;
    while d <= cfg.max_lock_duration {
        let m = dividends_multiplier(&e, &cfg, d);
        assert!(m >= last);
        last = m;
        d += 10 * ONE_DAY;
    }
}

#[test]
#[should_panic(expected = "lock duration out of bounds")]
fn test_multiplier_below_min_panics() {
    let e = Env::default();
    let cfg = default_curve();
    dividends_multiplier(&e, &cfg, cfg.min_lock_duration - 1);
}

#[test]
#[should_panic(expected = "lock duration out of bounds")]
fn test_multiplier_above_max_panics() {
    let e = Env::default();
    let cfg = default_curve();
    dividends_multiplier(&e, &cfg, cfg.max_lock_duration + 1);
}

#[test]
#[should_panic(expected = "dividends multiplier overflow")]
fn test_multiplier_overflow_panics() {
    let e = Env::default();
    // A zero base fee leaves the bonus parameter unconstrained; the
    // multiplier itself must still fit in i128.
    let cfg = CurveConfig {
        min_lock_duration: 0,
        max_lock_duration: 100,
        min_early_withdrawal_fee: 0,
        base_early_withdrawal_fee: 0,
        max_dividends_bonus_multiplier: i128::MAX,
    };
    dividends_multiplier(&e, &cfg, 100);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Dividend shares
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_shares_scale_with_multiplier() {
    let e = Env::default();
    let cfg = default_curve();
    // 1.5x at the full year.
    assert_eq!(dividend_shares(&e, &cfg, 1_000, ONE_YEAR), 1_500);
    // 1.0x at the minimum duration.
    assert_eq!(dividend_shares(&e, &cfg, 1_000, THIRTY_DAYS), 1_000);
}

#[test]
fn test_shares_floor_toward_zero() {
    let e = Env::default();
    let cfg = default_curve();
    // 3 * 1.5 = 4.5, floored to 4.
    assert_eq!(dividend_shares(&e, &cfg, 3, ONE_YEAR), 4);
}

#[test]
#[should_panic(expected = "amount must be non-negative")]
fn test_shares_negative_amount_panics() {
    let e = Env::default();
    let cfg = default_curve();
    dividend_shares(&e, &cfg, -1, ONE_YEAR);
}

#[test]
#[should_panic(expected = "dividend shares overflow")]
fn test_shares_overflow_panics() {
    let e = Env::default();
    let cfg = default_curve();
    dividend_shares(&e, &cfg, i128::MAX, ONE_YEAR);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Withdrawal parameters
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_fee_zero_at_unlock_boundary() {
    let e = Env::default();
    let cfg = default_curve();
    let locked_at = 1_000;
    let (shares, fee) =
        withdrawal_parameters(&e, &cfg, 1_000, locked_at, ONE_YEAR, locked_at + ONE_YEAR, false);
    assert_eq!(shares, 1_500);
    assert_eq!(fee, 0);
}

#[test]
fn test_fee_zero_past_unlock() {
    let e = Env::default();
    let cfg = default_curve();
    let locked_at = 1_000;
    let now = locked_at + ONE_YEAR + 12_345;
    let (_, fee) = withdrawal_parameters(&e, &cfg, 1_000, locked_at, ONE_YEAR, now, false);
    assert_eq!(fee, 0);
}

#[test]
fn test_fee_zero_under_emergency_unlock() {
    let e = Env::default();
    let cfg = default_curve();
    let locked_at = 1_000;
    // Still deep inside the lock period.
    let (shares, fee) = withdrawal_parameters(&e, &cfg, 1_000, locked_at, ONE_YEAR, locked_at, true);
    assert_eq!(shares, 1_500);
    assert_eq!(fee, 0);
}

#[test]
fn test_fee_full_dynamic_term_at_creation() {
    let e = Env::default();
    let cfg = default_curve();
    let locked_at = 1_000;
    // 1000 * 0.1 * 1.5 with the full duration remaining.
    let (shares, fee) = withdrawal_parameters(&e, &cfg, 1_000, locked_at, ONE_YEAR, locked_at, false);
    assert_eq!(shares, 1_500);
    assert_eq!(fee, 150);
}

#[test]
fn test_fee_strictly_decays_toward_unlock() {
    let e = Env::default();
    let cfg = default_curve();
    let locked_at = 1_000;
    let amount = 1_000_000_000_000_i128;
    let offsets = [0_u64, 1, ONE_DAY, 100 * ONE_DAY, 200 * ONE_DAY, 364 * ONE_DAY, ONE_YEAR - 1];
    let mut last = i128::MAX;
    for offset in offsets {
        let (_, fee) =
            withdrawal_parameters(&e, &cfg, amount, locked_at, ONE_YEAR, locked_at + offset, false);
        assert!(fee < last);
        last = fee;
    }
}

#[test]
fn test_minimum_fee_is_time_independent() {
    let e = Env::default();
    // 1% minimum fee, no dynamic term.
    let cfg = CurveConfig {
        min_early_withdrawal_fee: SCALE / 100,
        base_early_withdrawal_fee: 0,
        ..default_curve()
    };
    let locked_at = 1_000;
    let (_, day_one) =
        withdrawal_parameters(&e, &cfg, 10_000, locked_at, ONE_YEAR, locked_at, false);
    let (_, later) = withdrawal_parameters(
        &e,
        &cfg,
        10_000,
        locked_at,
        ONE_YEAR,
        locked_at + 300 * ONE_DAY,
        false,
    );
    assert_eq!(day_one, 100);
    assert_eq!(later, 100);

    let (_, matured) = withdrawal_parameters(
        &e,
        &cfg,
        10_000,
        locked_at,
        ONE_YEAR,
        locked_at + ONE_YEAR,
        false,
    );
    assert_eq!(matured, 0);
}

#[test]
fn test_fee_combines_minimum_and_dynamic_terms() {
    let e = Env::default();
    let cfg = CurveConfig {
        min_early_withdrawal_fee: SCALE / 100,
        ..default_curve()
    };
    let locked_at = 1_000;
    // 1% minimum plus the full 0.1 * 1.5x dynamic term.
    let (_, fee) = withdrawal_parameters(&e, &cfg, 1_000, locked_at, ONE_YEAR, locked_at, false);
    assert_eq!(fee, 10 + 150);
}

#[test]
#[should_panic(expected = "unlock timestamp would overflow")]
fn test_unlock_timestamp_overflow_panics() {
    let e = Env::default();
    let cfg = default_curve();
    withdrawal_parameters(&e, &cfg, 1_000, u64::MAX, THIRTY_DAYS, 0, false);
}

// ═══════════════════════════════════════════════════════════════════
// 4. Curve validation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_validate_accepts_default_curve() {
    validate(&default_curve());
}

#[test]
fn test_validate_accepts_worst_case_exactly_at_bound() {
    // base * bonus = 1e36 exactly.
    validate(&CurveConfig {
        min_lock_duration: THIRTY_DAYS,
        max_lock_duration: ONE_YEAR,
        min_early_withdrawal_fee: 0,
        base_early_withdrawal_fee: SCALE,
        max_dividends_bonus_multiplier: SCALE,
    });
}

#[test]
#[should_panic(expected = "min lock duration must be below max lock duration")]
fn test_validate_rejects_inverted_bounds() {
    validate(&CurveConfig {
        min_lock_duration: ONE_YEAR,
        max_lock_duration: THIRTY_DAYS,
        ..default_curve()
    });
}

#[test]
#[should_panic(expected = "min lock duration must be below max lock duration")]
fn test_validate_rejects_equal_bounds() {
    validate(&CurveConfig {
        min_lock_duration: ONE_YEAR,
        max_lock_duration: ONE_YEAR,
        ..default_curve()
    });
}

#[test]
#[should_panic(expected = "lock duration bounds exceed 32-bit range")]
fn test_validate_rejects_wide_duration_bounds() {
    validate(&CurveConfig {
        max_lock_duration: u32::MAX as u64 + 1,
        ..default_curve()
    });
}

#[test]
#[should_panic(expected = "fee curve parameters must be non-negative")]
fn test_validate_rejects_negative_parameter() {
    validate(&CurveConfig {
        min_early_withdrawal_fee: -1,
        ..default_curve()
    });
}

#[test]
#[should_panic(expected = "worst-case early withdrawal fee exceeds 100%")]
fn test_validate_rejects_fee_above_one() {
    validate(&CurveConfig {
        min_lock_duration: THIRTY_DAYS,
        max_lock_duration: ONE_YEAR,
        min_early_withdrawal_fee: 0,
        base_early_withdrawal_fee: 2 * SCALE,
        max_dividends_bonus_multiplier: SCALE,
    });
}

#[test]
#[should_panic(expected = "worst-case early withdrawal fee exceeds 100%")]
fn test_validate_rejects_overflowing_worst_case() {
    validate(&CurveConfig {
        min_lock_duration: THIRTY_DAYS,
        max_lock_duration: ONE_YEAR,
        min_early_withdrawal_fee: 0,
        base_early_withdrawal_fee: i128::MAX,
        max_dividends_bonus_multiplier: i128::MAX,
    });
}
