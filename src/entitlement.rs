multiversx_sc::imports!();

use crate::entitlement_registry_proxy::EntitlementRegistryProxy;

/// View of the external cohort / delegation registry.
///
/// Every call below targets a registry getter, so a plain `sync_call`
/// never changes registry state.
///
/// Eligibility is never copied into this contract: it is always
/// recomputed from the registry's representative timestamps, which
/// is what keeps a delegation made in the same instant as a cycle
/// start from counting towards that cycle.
#[multiversx_sc::module]
pub trait EntitlementModule: crate::config::ConfigModule + crate::events::EventsModule {
    fn registry_cohort_count(&self) -> u32 {
        let registry = self.entitlement_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntitlementRegistryProxy)
            .get_cohort_count()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn registry_cohort_exists_at(&self, cohort_id: u32, timestamp: u64) -> bool {
        let registry = self.entitlement_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntitlementRegistryProxy)
            .cohort_exists_at(cohort_id, timestamp)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn registry_entitled_count_at(&self, cohort_id: u32, timestamp: u64) -> u64 {
        let registry = self.entitlement_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntitlementRegistryProxy)
            .entitled_count_at(cohort_id, timestamp)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn registry_owner_of(&self, cohort_id: u32, token_id: u64) -> ManagedAddress {
        let registry = self.entitlement_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntitlementRegistryProxy)
            .owner_of(cohort_id, token_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn registry_representative_set_at(&self, cohort_id: u32, token_id: u64) -> u64 {
        let registry = self.entitlement_registry_address().get();
        self.tx()
            .to(&registry)
            .typed(EntitlementRegistryProxy)
            .representative_set_at(cohort_id, token_id)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// True as soon as one cohort alive at `timestamp` has a token
    /// delegated strictly before it.
    fn has_entitled_tokens_at(&self, timestamp: u64) -> bool {
        let cohort_count = self.registry_cohort_count();
        for cohort_id in 0..cohort_count {
            if !self.registry_cohort_exists_at(cohort_id, timestamp) {
                continue;
            }
            if self.registry_entitled_count_at(cohort_id, timestamp) > 0 {
                return true;
            }
        }
        false
    }
}
