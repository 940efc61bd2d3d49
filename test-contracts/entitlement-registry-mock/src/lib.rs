#![no_std]

multiversx_sc::imports!();

pub mod entitlement_registry_mock_proxy;

/// Minimal cohort / delegation registry for scenario tests.
///
/// Cohorts are registered in order and stamped with the block
/// timestamp. Setting a token's representative (re)stamps it, which
/// is how a transfer or re-delegation resets eligibility.
#[multiversx_sc::contract]
pub trait EntitlementRegistryMock {
    #[init]
    fn init(&self) {
        self.cohort_count().set(0u32);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(registerCohort)]
    fn register_cohort(&self) -> u32 {
        let cohort_id = self.cohort_count().get();
        let now = self.blockchain().get_block_timestamp();
        self.cohort_registered_at(cohort_id).set(now);
        self.cohort_count().set(cohort_id + 1);
        cohort_id
    }

    #[endpoint(setRepresentative)]
    fn set_representative(&self, cohort_id: u32, token_id: u64, representative: ManagedAddress) {
        require!(cohort_id < self.cohort_count().get(), "Unknown cohort");
        let now = self.blockchain().get_block_timestamp();
        self.representative(cohort_id, token_id).set(&representative);
        self.representative_timestamp(cohort_id, token_id).set(now);
        self.tokens(cohort_id).insert(token_id);
    }

    #[view(getCohortCount)]
    #[storage_mapper("cohortCount")]
    fn cohort_count(&self) -> SingleValueMapper<u32>;

    #[view(cohortExistsAt)]
    fn cohort_exists_at(&self, cohort_id: u32, timestamp: u64) -> bool {
        cohort_id < self.cohort_count().get()
            && self.cohort_registered_at(cohort_id).get() <= timestamp
    }

    #[view(entitledCountAt)]
    fn entitled_count_at(&self, cohort_id: u32, timestamp: u64) -> u64 {
        if !self.cohort_exists_at(cohort_id, timestamp) {
            return 0;
        }
        let mut count = 0u64;
        for token_id in self.tokens(cohort_id).iter() {
            if self.representative_timestamp(cohort_id, token_id).get() < timestamp {
                count += 1;
            }
        }
        count
    }

    #[view(ownerOf)]
    fn owner_of(&self, cohort_id: u32, token_id: u64) -> ManagedAddress {
        let representative = self.representative(cohort_id, token_id);
        if representative.is_empty() {
            return ManagedAddress::zero();
        }
        representative.get()
    }

    #[view(representativeSetAt)]
    fn representative_set_at(&self, cohort_id: u32, token_id: u64) -> u64 {
        self.representative_timestamp(cohort_id, token_id).get()
    }

    #[storage_mapper("cohortRegisteredAt")]
    fn cohort_registered_at(&self, cohort_id: u32) -> SingleValueMapper<u64>;

    #[storage_mapper("tokens")]
    fn tokens(&self, cohort_id: u32) -> UnorderedSetMapper<u64>;

    #[storage_mapper("representative")]
    fn representative(&self, cohort_id: u32, token_id: u64) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("representativeTimestamp")]
    fn representative_timestamp(&self, cohort_id: u32, token_id: u64) -> SingleValueMapper<u64>;
}
