multiversx_sc::imports!();

use crate::errors::{ERR_FEE_TOO_HIGH, ERR_ZERO_ADDRESS, ERR_ZERO_DURATION};

/// Basis points denominator for the deposit fee
pub const BPS_DENOMINATOR: u64 = 10_000;

#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    // ========================================================
    // Owner-only setters
    // ========================================================

    #[only_owner]
    #[endpoint(setFeePercent)]
    fn set_fee_percent(&self, fee_percent: u64) {
        self.store_fee_percent(fee_percent);
        self.fee_percent_changed_event(fee_percent);
    }

    #[only_owner]
    #[endpoint(setSinkAddress)]
    fn set_sink_address(&self, sink: ManagedAddress) {
        self.store_sink_address(&sink);
        self.sink_address_changed_event(&sink);
    }

    /// Takes effect on the cycle currently open: its deadline is
    /// always `start_timestamp + cycle_duration` as read at close time.
    #[only_owner]
    #[endpoint(setCycleDuration)]
    fn set_cycle_duration(&self, cycle_duration: u64) {
        self.store_cycle_duration(cycle_duration);
        self.cycle_duration_changed_event(cycle_duration);
    }

    #[only_owner]
    #[endpoint(setMinCyclePool)]
    fn set_min_cycle_pool(&self, min_cycle_pool: BigUint) {
        self.min_cycle_pool().set(&min_cycle_pool);
        self.min_cycle_pool_changed_event(&min_cycle_pool);
    }

    #[only_owner]
    #[endpoint(setEntitlementRegistry)]
    fn set_entitlement_registry(&self, registry: ManagedAddress) {
        require!(!registry.is_zero(), ERR_ZERO_ADDRESS);
        self.entitlement_registry_address().set(&registry);
        self.entitlement_registry_changed_event(&registry);
    }

    /// The zero address disables the subscription payout path.
    #[only_owner]
    #[endpoint(setConversionAdapter)]
    fn set_conversion_adapter(&self, adapter: ManagedAddress) {
        self.conversion_adapter_address().set(&adapter);
        self.conversion_adapter_changed_event(&adapter);
    }

    // ========================================================
    // Validation
    // ========================================================

    fn store_fee_percent(&self, fee_percent: u64) {
        require!(fee_percent <= BPS_DENOMINATOR, ERR_FEE_TOO_HIGH);
        self.fee_percent().set(fee_percent);
    }

    fn store_sink_address(&self, sink: &ManagedAddress) {
        require!(!sink.is_zero(), ERR_ZERO_ADDRESS);
        self.sink_address().set(sink);
    }

    // Positive, or every call would close and reopen a cycle
    fn store_cycle_duration(&self, cycle_duration: u64) {
        require!(cycle_duration > 0, ERR_ZERO_DURATION);
        self.cycle_duration().set(cycle_duration);
    }

    fn fee_for(&self, amount: &BigUint) -> BigUint {
        (amount * self.fee_percent().get()) / BPS_DENOMINATOR
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getConfig)]
    fn get_config(
        &self,
    ) -> MultiValue6<u64, ManagedAddress, u64, BigUint, ManagedAddress, ManagedAddress> {
        (
            self.fee_percent().get(),
            self.sink_address().get(),
            self.cycle_duration().get(),
            self.min_cycle_pool().get(),
            self.entitlement_registry_address().get(),
            self.conversion_adapter_address().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getFeePercent)]
    #[storage_mapper("feePercent")]
    fn fee_percent(&self) -> SingleValueMapper<u64>;

    #[view(getSinkAddress)]
    #[storage_mapper("sinkAddress")]
    fn sink_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCycleDuration)]
    #[storage_mapper("cycleDuration")]
    fn cycle_duration(&self) -> SingleValueMapper<u64>;

    #[view(getMinCyclePool)]
    #[storage_mapper("minCyclePool")]
    fn min_cycle_pool(&self) -> SingleValueMapper<BigUint>;

    #[view(getEntitlementRegistry)]
    #[storage_mapper("entitlementRegistryAddress")]
    fn entitlement_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getConversionAdapter)]
    #[storage_mapper("conversionAdapterAddress")]
    fn conversion_adapter_address(&self) -> SingleValueMapper<ManagedAddress>;
}
