//! Time-Locked Deposit Ledger
//!
//! Locks a base asset for a committed duration in exchange for dividend
//! shares minted up front, scaled by how long the deposit is committed.
//! Withdrawing before the duration elapses costs a fee that decays linearly
//! as the unlock time approaches. Principal custody and dividend accounting
//! live in external collaborator contracts.
//!
//! ## Key design decisions
//!
//! - **Index-addressed locks**: identifiers are append-only positions;
//!   destroyed locks leave permanent gaps and ids are never reused.
//! - **Checks-Effects-Interactions**: lock state and fee accounting are
//!   written *before* burn/transfer calls.
//! - **Overflow-checked curve math**: chained 10^18-scale products run
//!   through `U256` before dividing back down.
//! - **Bounded-width packing**: 32-bit timestamps/durations and 96-bit
//!   amount/fee counters, enforced as explicit validation.
//! - **One-way emergency unlock**: zeroes all fees and blocks new deposits
//!   permanently.

#![no_std]

mod curve;
mod errors;
mod events;
pub mod interfaces;
mod types;

use errors::*;
use interfaces::{DepositModuleClient, DividendTokenClient};
use types::{
    CurveConfig, DataKey, Lock, WithdrawalParameters, WithdrawalReceipt, MAX_LOCKED_AMOUNT,
    MAX_TIMESTAMP,
};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};


#[cfg(test)]
mod test_curve;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) {
    caller.require_auth();
    let stored: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED));
    if stored != *caller {
        panic!("{}", ERR_UNAUTHORIZED);
    }
}

fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn get_deposit_module(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::DepositModule)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn get_dividend_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::DividendToken)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn get_curve_config(e: &Env) -> CurveConfig {
    e.storage()
        .instance()
        .get(&DataKey::Curve)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn emergency_unlocked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::EmergencyUnlock)
        .unwrap_or(false)
}

/// Look up a live lock. Identifiers past the issued range fail with
/// `ERR_NO_SUCH_LOCK`; destroyed (tombstoned) locks have a zero balance
/// forever and fail with `ERR_INSUFFICIENT_LOCKED`.
fn read_lock(e: &Env, lock_id: u64) -> Lock {
    let count: u64 = e
        .storage()
        .instance()
        .get(&DataKey::LockCount)
        .unwrap_or(0);
    if lock_id >= count {
        panic!("{}", ERR_NO_SUCH_LOCK);
    }
    e.storage()
        .persistent()
        .get(&DataKey::Lock(lock_id))
        .unwrap_or_else(|| panic!("{}", ERR_INSUFFICIENT_LOCKED))
}

fn unlock_timestamp(lock: &Lock) -> u64 {
    lock.locked_at
        .checked_add(lock.lock_duration)
        .unwrap_or_else(|| panic!("{}", ERR_UNLOCK_OVERFLOW))
}

/// Shared body of `withdraw` and `destroy_lock`. Caller auth is already
/// checked; `amount` is the exact principal leaving the lock.
fn execute_withdrawal(e: &Env, caller: &Address, lock_id: u64, amount: i128) -> WithdrawalReceipt {
    if amount <= 0 {
        panic!("{}", ERR_INVALID_AMOUNT);
    }

    let mut lock = read_lock(e, lock_id);
    if lock.owner != *caller {
        panic!("{}", ERR_NOT_LOCK_OWNER);
    }
    if amount > lock.amount {
        panic!("{}", ERR_INSUFFICIENT_LOCKED);
    }

    let cfg = get_curve_config(e);
    let now = e.ledger().timestamp();
    let (dividend_shares, fee) = curve::withdrawal_parameters(
        e,
        &cfg,
        amount,
        lock.locked_at,
        lock.lock_duration,
        now,
        emergency_unlocked(e),
    );
    let owed = amount - fee;
    if owed < 0 {
        panic!("{}", ERR_FEE_EXCEEDS_AMOUNT);
    }

    // CEI: reduce the lock and settle fee accounting before any external call.
    let remaining = lock.amount - amount;
    if remaining == 0 {
        e.storage().persistent().remove(&DataKey::Lock(lock_id));
    } else {
        lock.amount = remaining;
        e.storage().persistent().set(&DataKey::Lock(lock_id), &lock);
    }

    let total: i128 = e
        .storage()
        .instance()
        .get(&DataKey::TotalLocked)
        .unwrap_or(0);
    e.storage()
        .instance()
        .set(&DataKey::TotalLocked, &(total - amount));

    let mut pending = 0_i128;
    if fee > 0 {
        let prior: i128 = e
            .storage()
            .instance()
            .get(&DataKey::PendingFees)
            .unwrap_or(0);
        // Both terms are 96-bit bounded, so the sum cannot overflow i128.
        pending = prior + fee;
        if pending > MAX_LOCKED_AMOUNT {
            panic!("{}", ERR_PENDING_FEES_OVERFLOW);
        }
        e.storage().instance().set(&DataKey::PendingFees, &pending);
    }

    DividendTokenClient::new(e, &get_dividend_token(e)).burn(caller, &dividend_shares);

    let module = DepositModuleClient::new(e, &get_deposit_module(e));
    if fee > 0 {
        // Route the principal through the contract so the fee stays behind.
        let contract = e.current_contract_address();
        module.withdraw_from(caller, &contract, &amount);
        if owed > 0 {
            TokenClient::new(e, &get_token(e)).transfer(&contract, caller, &owed);
        }
    } else {
        module.withdraw_from(caller, caller, &amount);
    }

    if fee > 0 {
        events::emit_fees_received(e, lock_id, fee, pending);
    }
    if remaining == 0 {
        events::emit_lock_destroyed(e, caller, lock_id, amount, fee, dividend_shares);
    } else {
        events::emit_partial_withdrawal(e, caller, lock_id, amount, fee, dividend_shares, remaining);
    }

    WithdrawalReceipt {
        owed,
        dividend_shares,
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct LockedDeposit;

#[contractimpl]
impl LockedDeposit {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. Stores the admin, the base asset token, the
    /// two collaborator addresses, and the immutable fee/bonus curve.
    /// Panics if called again, or if the curve violates its invariants.
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        deposit_module: Address,
        dividend_token: Address,
        curve: CurveConfig,
    ) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        curve::validate(&curve);
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage()
            .instance()
            .set(&DataKey::DepositModule, &deposit_module);
        e.storage()
            .instance()
            .set(&DataKey::DividendToken, &dividend_token);
        e.storage().instance().set(&DataKey::Curve, &curve);
    }

    // ── Lock lifecycle ─────────────────────────────────────────────────────

    /// Lock `amount` of the base asset for `duration` seconds.
    ///
    /// Requirements:
    /// - `amount` > 0, at least the minimum deposit, within 96 bits
    /// - `duration` within the curve bounds
    /// - Emergency unlock not triggered
    /// - Caller has approved the deposit module to spend `amount`
    ///
    /// Mints `amount * multiplier / 1e18` dividend shares to the caller and
    /// returns the new lock identifier.
    pub fn deposit(e: Env, from: Address, amount: i128, duration: u64) -> u64 {
        from.require_auth();

        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        if emergency_unlocked(&e) {
            panic!("{}", ERR_DEPOSITS_DISABLED);
        }
        let minimum: i128 = e
            .storage()
            .instance()
            .get(&DataKey::MinimumDeposit)
            .unwrap_or(0);
        if amount < minimum {
            panic!("{}", ERR_BELOW_MINIMUM_DEPOSIT);
        }
        if amount > MAX_LOCKED_AMOUNT {
            panic!("{}", ERR_AMOUNT_TOO_LARGE);
        }

        let locked_at = e.ledger().timestamp();
        if locked_at > MAX_TIMESTAMP {
            panic!("{}", ERR_TIMESTAMP_TOO_LARGE);
        }

        let cfg = get_curve_config(&e);
        let dividend_shares = curve::dividend_shares(&e, &cfg, amount, duration);

        // Pull the principal into custody first, then mint the bonus.
        DepositModuleClient::new(&e, &get_deposit_module(&e)).deposit_into(&from, &amount);
        DividendTokenClient::new(&e, &get_dividend_token(&e)).mint(&from, &dividend_shares);

        let lock_id: u64 = e
            .storage()
            .instance()
            .get(&DataKey::LockCount)
            .unwrap_or(0);
        let lock = Lock {
            owner: from.clone(),
            amount,
            locked_at,
            lock_duration: duration,
        };
        e.storage().persistent().set(&DataKey::Lock(lock_id), &lock);
        e.storage()
            .instance()
            .set(&DataKey::LockCount, &(lock_id + 1));

        let total: i128 = e
            .storage()
            .instance()
            .get(&DataKey::TotalLocked)
            .unwrap_or(0);
        let total = total
            .checked_add(amount)
            .unwrap_or_else(|| panic!("{}", ERR_TOTAL_LOCKED_OVERFLOW));
        e.storage().instance().set(&DataKey::TotalLocked, &total);

        events::emit_lock_created(&e, &from, lock_id, amount, dividend_shares, duration);

        lock_id
    }

    /// Withdraw `amount` from lock `lock_id`.
    ///
    /// Burns the proportional dividend shares and, before the unlock time,
    /// charges the decaying early-withdrawal fee computed against the lock's
    /// original commitment. The fee accrues to the pending balance; the
    /// remainder goes to the owner. Withdrawing the full balance tombstones
    /// the lock permanently.
    pub fn withdraw(e: Env, from: Address, lock_id: u64, amount: i128) -> WithdrawalReceipt {
        from.require_auth();
        execute_withdrawal(&e, &from, lock_id, amount)
    }

    /// Withdraw lock `lock_id`'s entire remaining balance.
    pub fn destroy_lock(e: Env, from: Address, lock_id: u64) -> WithdrawalReceipt {
        from.require_auth();
        let lock = read_lock(&e, lock_id);
        execute_withdrawal(&e, &from, lock_id, lock.amount)
    }

    // ── Fee distribution ───────────────────────────────────────────────────

    /// Flush the full pending-fee balance to the configured recipient.
    /// Callable by anyone; panics if no recipient is set or nothing is
    /// pending. Returns the amount transferred.
    pub fn distribute_fees(e: Env) -> i128 {
        let recipient: Address = e
            .storage()
            .instance()
            .get(&DataKey::FeeRecipient)
            .unwrap_or_else(|| panic!("{}", ERR_FEE_RECIPIENT_NOT_SET));
        let pending: i128 = e
            .storage()
            .instance()
            .get(&DataKey::PendingFees)
            .unwrap_or(0);
        if pending == 0 {
            panic!("{}", ERR_NO_FEES);
        }
        // CEI: clear state before transfer.
        e.storage().instance().set(&DataKey::PendingFees, &0_i128);

        let contract = e.current_contract_address();
        TokenClient::new(&e, &get_token(&e)).transfer(&contract, &recipient, &pending);

        events::emit_fees_transferred(&e, &recipient, pending);
        pending
    }

    // ── Admin controls ─────────────────────────────────────────────────────

    /// One-way wind-down switch. After this call every fee computes to zero
    /// and new deposits are rejected forever.
    pub fn trigger_emergency_unlock(e: Env, admin: Address) {
        require_admin(&e, &admin);
        if emergency_unlocked(&e) {
            panic!("{}", ERR_EMERGENCY_ALREADY_TRIGGERED);
        }
        e.storage().instance().set(&DataKey::EmergencyUnlock, &true);
        events::emit_emergency_unlock(&e, &admin);
    }

    /// Set the floor on deposit amounts. Pass 0 to disable the floor.
    pub fn set_minimum_deposit(e: Env, admin: Address, value: i128) {
        require_admin(&e, &admin);
        if value < 0 {
            panic!("{}", ERR_NEGATIVE_MINIMUM_DEPOSIT);
        }
        e.storage().instance().set(&DataKey::MinimumDeposit, &value);
        events::emit_minimum_deposit_set(&e, value);
    }

    /// Set the destination for distributed fees.
    pub fn set_fee_recipient(e: Env, admin: Address, recipient: Address) {
        require_admin(&e, &admin);
        e.storage()
            .instance()
            .set(&DataKey::FeeRecipient, &recipient);
        events::emit_fee_recipient_set(&e, &recipient);
    }

    /// Delegate the caller's voting power to `delegatee` via the deposit
    /// module. Fails if the module does not support delegation.
    pub fn delegate(e: Env, from: Address, delegatee: Address) {
        from.require_auth();
        DepositModuleClient::new(&e, &get_deposit_module(&e))
            .delegate_voting_power(&from, &delegatee);
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Number of lock identifiers issued so far, including destroyed locks.
    pub fn lock_count(e: Env) -> u64 {
        e.storage()
            .instance()
            .get(&DataKey::LockCount)
            .unwrap_or(0)
    }

    /// Raw fields of lock `lock_id`, or `None` if it was destroyed or never
    /// issued.
    pub fn get_lock(e: Env, lock_id: u64) -> Option<Lock> {
        e.storage().persistent().get(&DataKey::Lock(lock_id))
    }

    /// Dividends multiplier for an arbitrary duration, scale 10^18.
    pub fn get_dividends_multiplier(e: Env, duration: u64) -> i128 {
        let cfg = get_curve_config(&e);
        curve::dividends_multiplier(&e, &cfg, duration)
    }

    /// Dividend shares and fee that withdrawing `amount` from a lock with
    /// the given parameters would produce at the current ledger time.
    pub fn get_withdrawal_parameters(
        e: Env,
        amount: i128,
        locked_at: u64,
        lock_duration: u64,
    ) -> WithdrawalParameters {
        let cfg = get_curve_config(&e);
        let (dividend_shares, early_withdrawal_fee) = curve::withdrawal_parameters(
            &e,
            &cfg,
            amount,
            locked_at,
            lock_duration,
            e.ledger().timestamp(),
            emergency_unlocked(&e),
        );
        WithdrawalParameters {
            dividend_shares,
            early_withdrawal_fee,
        }
    }

    /// Fees accumulated since the last distribution.
    pub fn pending_fees(e: Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::PendingFees)
            .unwrap_or(0)
    }

    /// Current floor on deposit amounts.
    pub fn minimum_deposit(e: Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::MinimumDeposit)
            .unwrap_or(0)
    }

    /// Configured fee recipient, if any.
    pub fn fee_recipient(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::FeeRecipient)
    }

    /// Whether the one-way emergency unlock has been triggered.
    pub fn emergency_unlock_triggered(e: Env) -> bool {
        emergency_unlocked(&e)
    }

    /// The immutable fee/bonus curve.
    pub fn get_curve(e: Env) -> CurveConfig {
        get_curve_config(&e)
    }

    pub fn get_admin(e: Env) -> Address {
        e.storage()
            .instance()
            .get(&DataKey::Admin)
            .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
    }

    /// Returns `true` once lock `lock_id`'s committed duration has elapsed.
    /// Panics if the lock was destroyed or never issued.
    pub fn is_unlocked(e: Env, lock_id: u64) -> bool {
        let lock: Lock = e
            .storage()
            .persistent()
            .get(&DataKey::Lock(lock_id))
            .unwrap_or_else(|| panic!("{}", ERR_NO_SUCH_LOCK));
        e.ledger().timestamp() >= unlock_timestamp(&lock)
    }

    /// Seconds until lock `lock_id` unlocks, 0 once it has.
    /// Panics if the lock was destroyed or never issued.
    pub fn time_remaining(e: Env, lock_id: u64) -> u64 {
        let lock: Lock = e
            .storage()
            .persistent()
            .get(&DataKey::Lock(lock_id))
            .unwrap_or_else(|| panic!("{}", ERR_NO_SUCH_LOCK));
        let unlocks_at = unlock_timestamp(&lock);
        let now = e.ledger().timestamp();
        if now >= unlocks_at {
            0_u64
        } else {
            unlocks_at - now
        }
    }

    /// Aggregate principal currently locked across all live locks.
    pub fn total_locked(e: Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::TotalLocked)
            .unwrap_or(0)
    }
}
