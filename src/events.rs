multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Deposit intake ──

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] cycle_index: u64,
        net_amount: &BigUint,
    );

    #[event("feeSkimmed")]
    fn fee_skimmed_event(&self, #[indexed] sink: &ManagedAddress, fee: &BigUint);

    // ── Cycle state machine ──

    #[event("cycleClockReset")]
    fn cycle_clock_reset_event(
        &self,
        #[indexed] cycle_index: u64,
        #[indexed] start_timestamp: u64,
    );

    #[event("cycleOpened")]
    fn cycle_opened_event(
        &self,
        #[indexed] cycle_index: u64,
        #[indexed] start_timestamp: u64,
    );

    #[event("cycleClosed")]
    fn cycle_closed_event(
        &self,
        #[indexed] cycle_index: u64,
        #[indexed] closed_at: u64,
        #[indexed] total_entitled: u64,
        pool: &BigUint,
    );

    #[event("poolRolledOver")]
    fn pool_rolled_over_event(
        &self,
        #[indexed] from_cycle: u64,
        #[indexed] to_cycle: u64,
        amount: &BigUint,
    );

    // ── Claims ──

    #[event("claimed")]
    fn claimed_event(
        &self,
        #[indexed] cohort_id: u32,
        #[indexed] token_id: u64,
        #[indexed] cycle_index: u64,
        #[indexed] claimant: &ManagedAddress,
        share: &BigUint,
    );

    #[event("claimConverted")]
    fn claim_converted_event(
        &self,
        #[indexed] claimant: &ManagedAddress,
        #[indexed] subscriber: &ManagedAddress,
        #[indexed] amount: &BigUint,
        credited: &BigUint,
    );

    // ── Configuration ──

    #[event("feePercentChanged")]
    fn fee_percent_changed_event(&self, #[indexed] fee_percent: u64);

    #[event("sinkAddressChanged")]
    fn sink_address_changed_event(&self, #[indexed] sink: &ManagedAddress);

    #[event("cycleDurationChanged")]
    fn cycle_duration_changed_event(&self, #[indexed] cycle_duration: u64);

    #[event("minCyclePoolChanged")]
    fn min_cycle_pool_changed_event(&self, #[indexed] min_cycle_pool: &BigUint);

    #[event("entitlementRegistryChanged")]
    fn entitlement_registry_changed_event(&self, #[indexed] registry: &ManagedAddress);

    #[event("conversionAdapterChanged")]
    fn conversion_adapter_changed_event(&self, #[indexed] adapter: &ManagedAddress);
}
