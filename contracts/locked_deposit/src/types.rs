use soroban_sdk::{contracttype, Address};

/// Largest amount representable in a 96-bit unsigned counter. Deposit amounts
/// and the pending-fee balance must stay within this bound.
pub const MAX_LOCKED_AMOUNT: i128 = (1 << 96) - 1;

/// Largest creation timestamp accepted, in seconds. Timestamps and durations
/// are constrained to 32 bits.
pub const MAX_TIMESTAMP: u64 = u32::MAX as u64;

// ─── Lock state ────────────────────────────────────────────────────────────

/// One deposit commitment. Destroyed locks are removed from storage; their
/// identifiers are never reused.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Lock {
    /// The address entitled to withdraw.
    pub owner: Address,
    /// Remaining locked principal. Never increases after creation.
    pub amount: i128,
    /// Ledger timestamp at the moment the lock was created.
    pub locked_at: u64,
    /// Committed lock period in seconds.
    pub lock_duration: u64,
}

// ─── Fee/bonus curve ───────────────────────────────────────────────────────

/// Immutable fee/bonus curve parameters, fixed at initialization.
///
/// Fee and multiplier parameters are fixed-point with scale 10^18.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveConfig {
    /// Shortest accepted lock duration in seconds.
    pub min_lock_duration: u64,
    /// Longest accepted lock duration in seconds. Must exceed
    /// `min_lock_duration` and fit in 32 bits.
    pub max_lock_duration: u64,
    /// Time-independent fee fraction charged on any early withdrawal.
    pub min_early_withdrawal_fee: i128,
    /// Base of the decaying fee term; the effective rate also scales with the
    /// lock's dividends multiplier.
    pub base_early_withdrawal_fee: i128,
    /// Bonus added to the 1.0x multiplier at `max_lock_duration`.
    pub max_dividends_bonus_multiplier: i128,
}

// ─── Computed results ──────────────────────────────────────────────────────

/// Result of a withdrawal-parameter query for an (amount, locked_at,
/// lock_duration) triple at the current ledger time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalParameters {
    /// Dividend shares corresponding to the amount, at the lock's multiplier.
    pub dividend_shares: i128,
    /// Fee charged if the amount were withdrawn now.
    pub early_withdrawal_fee: i128,
}

/// Outcome of an executed withdrawal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalReceipt {
    /// Amount paid out to the owner after the fee.
    pub owed: i128,
    /// Dividend shares burned from the owner.
    pub dividend_shares: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Base asset token address.
    Token,
    /// External custody/delegation module address.
    DepositModule,
    /// External dividend token address.
    DividendToken,
    /// Immutable fee/bonus curve (CurveConfig).
    Curve,
    /// Mutable floor on deposit amounts (0 = no floor).
    MinimumDeposit,
    /// Destination for distributed fees.
    FeeRecipient,
    /// Accumulated fees awaiting distribution, bounded to 96 bits.
    PendingFees,
    /// One-way emergency unlock latch.
    EmergencyUnlock,
    /// Number of lock identifiers issued so far.
    LockCount,
    /// Aggregate principal currently locked.
    TotalLocked,
    /// Lock record by identifier. Absent once the lock is destroyed.
    Lock(u64),
}
