/// All panic messages used by the locked_deposit contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
pub const ERR_NOT_LOCK_OWNER: &str = "not lock owner";
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_NEGATIVE_AMOUNT: &str = "amount must be non-negative";
pub const ERR_AMOUNT_TOO_LARGE: &str = "amount exceeds 96-bit range";
pub const ERR_BELOW_MINIMUM_DEPOSIT: &str = "amount below minimum deposit";
pub const ERR_DEPOSITS_DISABLED: &str = "deposits disabled after emergency unlock";
pub const ERR_DURATION_OUT_OF_BOUNDS: &str = "lock duration out of bounds";
pub const ERR_NO_SUCH_LOCK: &str = "no such lock";
pub const ERR_INSUFFICIENT_LOCKED: &str = "insufficient locked balance";
pub const ERR_FEE_EXCEEDS_AMOUNT: &str = "fee exceeds withdrawal amount";
pub const ERR_PENDING_FEES_OVERFLOW: &str = "pending fees exceed 96-bit range";
pub const ERR_TOTAL_LOCKED_OVERFLOW: &str = "total locked balance overflow";
pub const ERR_FEE_RECIPIENT_NOT_SET: &str = "fee recipient not set";
pub const ERR_NO_FEES: &str = "no fees to distribute";
pub const ERR_EMERGENCY_ALREADY_TRIGGERED: &str = "emergency unlock already triggered";
pub const ERR_NEGATIVE_MINIMUM_DEPOSIT: &str = "minimum deposit must be non-negative";
pub const ERR_TIMESTAMP_TOO_LARGE: &str = "timestamp exceeds 32-bit range";
pub const ERR_UNLOCK_OVERFLOW: &str = "unlock timestamp would overflow";
pub const ERR_DURATION_BOUNDS_ORDER: &str = "min lock duration must be below max lock duration";
pub const ERR_DURATION_BOUNDS_RANGE: &str = "lock duration bounds exceed 32-bit range";
pub const ERR_CURVE_NEGATIVE_PARAM: &str = "fee curve parameters must be non-negative";
pub const ERR_FEE_ABOVE_ONE: &str = "worst-case early withdrawal fee exceeds 100%";
pub const ERR_MULTIPLIER_OVERFLOW: &str = "dividends multiplier overflow";
pub const ERR_SHARES_OVERFLOW: &str = "dividend shares overflow";
pub const ERR_FEE_OVERFLOW: &str = "early withdrawal fee overflow";
