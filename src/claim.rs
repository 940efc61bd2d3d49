multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_CLAIMED, ERR_BAD_COHORT, ERR_CYCLE_NOT_CLOSED, ERR_NOTHING_TO_CLAIM,
    ERR_NOT_DELEGATED, ERR_NOT_OWNER,
};
use crate::types::{Cycle, CycleShare};

#[multiversx_sc::module]
pub trait ClaimModule:
    crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::entitlement::EntitlementModule
    + crate::cycle::CycleModule
{
    // ========================================================
    // INTERNAL: settlement
    // Checks every (token, cycle) pair of the batch, marks each
    // one claimed and returns the total owed. Any failed check
    // reverts the whole batch; zero shares do not.
    // ========================================================

    fn settle_claims(
        &self,
        claimant: &ManagedAddress,
        cohort_id: u32,
        token_ids: &ManagedVec<u64>,
        cycle_indices: &ManagedVec<u64>,
    ) -> BigUint {
        require!(
            !token_ids.is_empty() && !cycle_indices.is_empty(),
            ERR_NOTHING_TO_CLAIM
        );

        let mut shares: ManagedVec<CycleShare<Self::Api>> = ManagedVec::new();
        for cycle_index in cycle_indices.iter() {
            let cycle = self.require_cycle_exists(cycle_index);
            self.require_cohort_qualifies(cohort_id, &cycle);
            require!(cycle.is_closed(), ERR_CYCLE_NOT_CLOSED);

            shares.push(CycleShare {
                cycle_index,
                start_timestamp: cycle.start_timestamp,
                share: cycle.share_per_token(),
            });
        }

        let mut total = BigUint::zero();
        for token_id in token_ids.iter() {
            let owner = self.registry_owner_of(cohort_id, token_id);
            require!(&owner == claimant, ERR_NOT_OWNER);
            let delegated_at = self.registry_representative_set_at(cohort_id, token_id);

            for cycle_share in shares.iter() {
                require!(
                    delegated_at < cycle_share.start_timestamp,
                    ERR_NOT_DELEGATED
                );

                let record = self.claimed(cohort_id, token_id, cycle_share.cycle_index);
                require!(!record.get(), ERR_ALREADY_CLAIMED);
                record.set(true);

                self.claimed_event(
                    cohort_id,
                    token_id,
                    cycle_share.cycle_index,
                    claimant,
                    &cycle_share.share,
                );
                total += &cycle_share.share;
            }
        }

        self.total_claimed().update(|claimed| *claimed += &total);
        total
    }

    /// Cohort registration is immutable, so asking the registry is
    /// equivalent to reading the snapshot set of a closed cycle.
    fn require_cohort_qualifies(&self, cohort_id: u32, cycle: &Cycle<Self::Api>) {
        require!(
            self.registry_cohort_exists_at(cohort_id, cycle.start_timestamp),
            ERR_BAD_COHORT
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Share `claimant` would receive for one (cohort, token, cycle)
    /// right now, without advancing cycles. Fails with the same
    /// message `claim` would.
    #[view(getClaimableAmount)]
    fn get_claimable_amount(
        &self,
        cohort_id: u32,
        token_id: u64,
        cycle_index: u64,
        claimant: ManagedAddress,
    ) -> BigUint {
        let cycle = self.require_cycle_exists(cycle_index);
        self.require_cohort_qualifies(cohort_id, &cycle);
        require!(cycle.is_closed(), ERR_CYCLE_NOT_CLOSED);
        require!(
            self.registry_owner_of(cohort_id, token_id) == claimant,
            ERR_NOT_OWNER
        );
        require!(
            self.registry_representative_set_at(cohort_id, token_id) < cycle.start_timestamp,
            ERR_NOT_DELEGATED
        );
        require!(
            !self.claimed(cohort_id, token_id, cycle_index).get(),
            ERR_ALREADY_CLAIMED
        );
        cycle.share_per_token()
    }

    #[view(isClaimed)]
    fn is_claimed(&self, cohort_id: u32, token_id: u64, cycle_index: u64) -> bool {
        self.claimed(cohort_id, token_id, cycle_index).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("claimed")]
    fn claimed(&self, cohort_id: u32, token_id: u64, cycle_index: u64) -> SingleValueMapper<bool>;

    #[storage_mapper("totalClaimed")]
    fn total_claimed(&self) -> SingleValueMapper<BigUint>;
}
