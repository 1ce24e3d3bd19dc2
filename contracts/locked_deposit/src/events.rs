use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a deposit creates a new lock.
///
/// # Topics
/// * `Symbol` - "lock_created"
/// * `Address` - The lock owner
///
/// # Data
/// * `u64` - The new lock identifier
/// * `i128` - The locked amount
/// * `i128` - Dividend shares minted to the owner
/// * `u64` - The committed lock duration in seconds
pub fn emit_lock_created(
    e: &Env,
    owner: &Address,
    lock_id: u64,
    amount: i128,
    dividend_shares: i128,
    duration: u64,
) {
    let topics = (Symbol::new(e, "lock_created"), owner.clone());
    let data = (lock_id, amount, dividend_shares, duration);
    e.events().publish(topics, data);
}

/// Emitted when a withdrawal reduces a lock without destroying it.
///
/// # Topics
/// * `Symbol` - "partial_withdrawal"
/// * `Address` - The lock owner
///
/// # Data
/// * `u64` - The lock identifier
/// * `i128` - The amount withdrawn
/// * `i128` - The fee charged
/// * `i128` - Dividend shares burned
/// * `i128` - Principal remaining in the lock
pub fn emit_partial_withdrawal(
    e: &Env,
    owner: &Address,
    lock_id: u64,
    amount: i128,
    fee: i128,
    dividend_shares: i128,
    remaining: i128,
) {
    let topics = (Symbol::new(e, "partial_withdrawal"), owner.clone());
    let data = (lock_id, amount, fee, dividend_shares, remaining);
    e.events().publish(topics, data);
}

/// Emitted when a withdrawal empties a lock and tombstones it.
///
/// # Topics
/// * `Symbol` - "lock_destroyed"
/// * `Address` - The lock owner
///
/// # Data
/// * `u64` - The lock identifier
/// * `i128` - The amount withdrawn
/// * `i128` - The fee charged
/// * `i128` - Dividend shares burned
pub fn emit_lock_destroyed(
    e: &Env,
    owner: &Address,
    lock_id: u64,
    amount: i128,
    fee: i128,
    dividend_shares: i128,
) {
    let topics = (Symbol::new(e, "lock_destroyed"), owner.clone());
    let data = (lock_id, amount, fee, dividend_shares);
    e.events().publish(topics, data);
}

/// Emitted when an early-withdrawal fee is added to the pending balance.
///
/// # Topics
/// * `Symbol` - "fees_received"
///
/// # Data
/// * `u64` - The lock identifier the fee was charged on
/// * `i128` - The fee received
/// * `i128` - The new pending-fee balance
pub fn emit_fees_received(e: &Env, lock_id: u64, fee: i128, pending: i128) {
    let topics = (Symbol::new(e, "fees_received"),);
    let data = (lock_id, fee, pending);
    e.events().publish(topics, data);
}

/// Emitted when the pending fee balance is flushed to the recipient.
///
/// # Topics
/// * `Symbol` - "fees_transferred"
///
/// # Data
/// * `Address` - The recipient
/// * `i128` - The amount transferred
pub fn emit_fees_transferred(e: &Env, recipient: &Address, amount: i128) {
    let topics = (Symbol::new(e, "fees_transferred"),);
    let data = (recipient.clone(), amount);
    e.events().publish(topics, data);
}

/// Emitted when the admin triggers the one-way emergency unlock.
///
/// # Topics
/// * `Symbol` - "emergency_unlock"
///
/// # Data
/// * `Address` - The admin that triggered it
pub fn emit_emergency_unlock(e: &Env, admin: &Address) {
    let topics = (Symbol::new(e, "emergency_unlock"),);
    e.events().publish(topics, admin.clone());
}

/// Emitted when the admin changes the minimum deposit.
///
/// # Topics
/// * `Symbol` - "minimum_deposit_set"
///
/// # Data
/// * `i128` - The new minimum deposit
pub fn emit_minimum_deposit_set(e: &Env, value: i128) {
    let topics = (Symbol::new(e, "minimum_deposit_set"),);
    e.events().publish(topics, value);
}

/// Emitted when the admin changes the fee recipient.
///
/// # Topics
/// * `Symbol` - "fee_recipient_set"
///
/// # Data
/// * `Address` - The new recipient
pub fn emit_fee_recipient_set(e: &Env, recipient: &Address) {
    let topics = (Symbol::new(e, "fee_recipient_set"),);
    e.events().publish(topics, recipient.clone());
}
