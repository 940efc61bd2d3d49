multiversx_sc::imports!();

use crate::errors::ERR_UNKNOWN_CYCLE;
use crate::types::{Cycle, CycleStatus};

/// Caller-triggered cycle state machine.
///
/// There is no timer: `advance_cycles` runs at the start of every
/// deposit and claim, so a cycle that is due stays Open until the
/// next such call. Payout math depends only on `start_timestamp`,
/// never on when the close actually happens.
#[multiversx_sc::module]
pub trait CycleModule:
    crate::config::ConfigModule + crate::events::EventsModule + crate::entitlement::EntitlementModule
{
    // ========================================================
    // ENDPOINT: advanceCycles
    // Permissionless crank, same transition any deposit runs.
    // ========================================================

    #[endpoint(advanceCycles)]
    fn advance_cycles_endpoint(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        self.advance_cycles(now);
        self.current_cycle_index().get()
    }

    // ========================================================
    // INTERNAL: state transitions
    // ========================================================

    fn advance_cycles(&self, now: u64) {
        let mut index = self.current_cycle_index().get();
        let mut cycle = self.cycles(index).get();

        match cycle.status {
            CycleStatus::Unopened => {}
            CycleStatus::Open => {
                if !self.is_due(&cycle, now) {
                    return;
                }
                self.close_cycle(&mut cycle, now);

                index += 1;
                let mut next: Cycle<Self::Api> = Cycle::new(index);
                if cycle.rolled_over {
                    next.pool = cycle.pool.clone();
                    self.pool_rolled_over_event(cycle.index, index, &cycle.pool);
                }
                self.cycles(index).set(&next);
                self.current_cycle_index().set(index);
            }
            // The current cycle is never left Closed
            CycleStatus::Closed => return,
        }

        self.try_open_cycle(index, now);
    }

    /// Duration elapsed and minimum pool reached. A pool below the minimum
    /// keeps the cycle pinned to its original start, re-checked every call.
    fn is_due(&self, cycle: &Cycle<Self::Api>, now: u64) -> bool {
        let deadline = cycle
            .start_timestamp
            .saturating_add(self.cycle_duration().get());
        now >= deadline && cycle.pool >= self.min_cycle_pool().get()
    }

    fn try_open_cycle(&self, index: u64, now: u64) {
        let mut cycle = self.cycles(index).get();
        if cycle.status != CycleStatus::Unopened {
            return;
        }

        let start = core::cmp::max(cycle.start_timestamp, now);
        cycle.start_timestamp = start;

        if self.has_entitled_tokens_at(now) {
            cycle.status = CycleStatus::Open;
            self.cycles(index).set(&cycle);
            self.cycle_opened_event(index, start);
        } else {
            self.cycles(index).set(&cycle);
            self.cycle_clock_reset_event(index, start);
        }
    }

    /// Freezes pool and entitlement snapshot in one step.
    fn close_cycle(&self, cycle: &mut Cycle<Self::Api>, now: u64) {
        let start = cycle.start_timestamp;
        let cohort_count = self.registry_cohort_count();

        let mut total_entitled = 0u64;
        for cohort_id in 0..cohort_count {
            if !self.registry_cohort_exists_at(cohort_id, start) {
                continue;
            }
            let entitled = self.registry_entitled_count_at(cohort_id, start);
            self.cycle_entitlement(cycle.index, cohort_id).set(entitled);
            self.snapshot_cohorts(cycle.index).insert(cohort_id);
            total_entitled += entitled;
        }

        cycle.total_entitled = total_entitled;
        cycle.closed_at = now;
        cycle.status = CycleStatus::Closed;
        // Nobody can ever claim against an empty snapshot
        cycle.rolled_over = total_entitled == 0;
        self.cycles(cycle.index).set(&*cycle);

        self.cycle_closed_event(cycle.index, now, total_entitled, &cycle.pool);
    }

    fn add_to_current_pool(&self, amount: &BigUint) -> u64 {
        let index = self.current_cycle_index().get();
        self.cycles(index).update(|cycle| cycle.pool += amount);
        index
    }

    fn require_cycle_exists(&self, index: u64) -> Cycle<Self::Api> {
        require!(
            index <= self.current_cycle_index().get(),
            ERR_UNKNOWN_CYCLE
        );
        self.cycles(index).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCycle)]
    fn get_cycle(&self, index: u64) -> Cycle<Self::Api> {
        self.require_cycle_exists(index)
    }

    #[view(getCycleInfo)]
    fn get_cycle_info(&self, index: u64) -> MultiValue3<BigUint, u64, bool> {
        let cycle = self.require_cycle_exists(index);
        let closed = cycle.is_closed();
        (cycle.pool, cycle.start_timestamp, closed).into()
    }

    #[view(getCycleEntitlement)]
    fn get_cycle_entitlement(&self, index: u64, cohort_id: u32) -> u64 {
        self.cycle_entitlement(index, cohort_id).get()
    }

    #[view(getSnapshotCohorts)]
    fn get_snapshot_cohorts(&self, index: u64) -> MultiValueEncoded<u32> {
        let mut result = MultiValueEncoded::new();
        for cohort_id in self.snapshot_cohorts(index).iter() {
            result.push(cohort_id);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getCurrentCycleIndex)]
    #[storage_mapper("currentCycleIndex")]
    fn current_cycle_index(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("cycles")]
    fn cycles(&self, index: u64) -> SingleValueMapper<Cycle<Self::Api>>;

    #[storage_mapper("cycleEntitlement")]
    fn cycle_entitlement(&self, index: u64, cohort_id: u32) -> SingleValueMapper<u64>;

    #[storage_mapper("snapshotCohorts")]
    fn snapshot_cohorts(&self, index: u64) -> UnorderedSetMapper<u32>;
}
