multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Cycle Status: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum CycleStatus {
    /// No entitled tokens seen yet. The start timestamp keeps
    /// moving forward with every call until someone is entitled.
    Unopened,
    /// Start timestamp fixed, accumulating deposits.
    Open,
    /// Pool and entitlement snapshot frozen. Terminal state.
    Closed,
}

// ============================================================
// Cycle: one epoch of reward accrual
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Cycle<M: ManagedTypeApi> {
    pub index: u64,
    /// Net deposits (after fee skim) attributed to this cycle
    pub pool: BigUint<M>,
    /// 0 until the first advancement touches this cycle
    pub start_timestamp: u64,
    pub status: CycleStatus,
    /// Sum of the per-cohort snapshot (0 until Closed)
    pub total_entitled: u64,
    /// Block timestamp of the call that closed the cycle (0 until Closed)
    pub closed_at: u64,
    /// Closed with nobody entitled; `pool` was carried into the next
    /// cycle and is not owed by this one.
    pub rolled_over: bool,
}

impl<M: ManagedTypeApi> Cycle<M> {
    pub fn new(index: u64) -> Self {
        Cycle {
            index,
            pool: BigUint::zero(),
            start_timestamp: 0,
            status: CycleStatus::Unopened,
            total_entitled: 0,
            closed_at: 0,
            rolled_over: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status == CycleStatus::Closed
    }

    /// Amount owed to a single entitled token.
    /// Every token in the snapshot weighs 1, so a cohort's total
    /// is `pool * snapshot[cohort] / total_entitled`.
    pub fn share_per_token(&self) -> BigUint<M> {
        if self.total_entitled == 0 {
            return BigUint::zero();
        }
        &self.pool / self.total_entitled
    }
}

// ============================================================
// Cycle Share: validated cycle inside a claim batch
// ============================================================

#[derive(ManagedVecItem, Clone)]
pub struct CycleShare<M: ManagedTypeApi> {
    pub cycle_index: u64,
    pub start_timestamp: u64,
    pub share: BigUint<M>,
}
