// ============================================================
// Claim eligibility
// ============================================================

pub const ERR_BAD_COHORT: &str = "Cohort did not exist when the cycle opened";
pub const ERR_CYCLE_NOT_CLOSED: &str = "Cycle is not closed";
pub const ERR_NOT_OWNER: &str = "Caller does not own the token";
pub const ERR_NOT_DELEGATED: &str = "Token was not delegated before the cycle opened";
pub const ERR_ALREADY_CLAIMED: &str = "Reward already claimed";
pub const ERR_UNKNOWN_CYCLE: &str = "Cycle does not exist";
pub const ERR_NOTHING_TO_CLAIM: &str = "Nothing to claim";

// ============================================================
// Deposits and configuration
// ============================================================

pub const ERR_ZERO_DEPOSIT: &str = "Deposit amount must be positive";
pub const ERR_FEE_TOO_HIGH: &str = "Fee percent exceeds 100%";
pub const ERR_ZERO_DURATION: &str = "Cycle duration must be positive";
pub const ERR_NO_ADAPTER: &str = "Conversion adapter not configured";
pub const ERR_ZERO_ADDRESS: &str = "Address must not be zero";
