#![no_std]

multiversx_sc::imports!();

pub mod claim;
pub mod config;
pub mod conversion_adapter_proxy;
pub mod cycle;
pub mod cycle_rewards_proxy;
pub mod entitlement;
pub mod entitlement_registry_proxy;
pub mod errors;
pub mod events;
pub mod fee_sink_proxy;
pub mod types;

use errors::{ERR_NO_ADAPTER, ERR_ZERO_ADDRESS, ERR_ZERO_DEPOSIT};
use types::Cycle;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CycleRewards:
    config::ConfigModule
    + events::EventsModule
    + entitlement::EntitlementModule
    + cycle::CycleModule
    + claim::ClaimModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        fee_percent: u64,
        sink_address: ManagedAddress,
        cycle_duration: u64,
        min_cycle_pool: BigUint,
        entitlement_registry: ManagedAddress,
        conversion_adapter: OptionalValue<ManagedAddress>,
    ) {
        self.store_fee_percent(fee_percent);
        self.store_sink_address(&sink_address);
        self.store_cycle_duration(cycle_duration);
        self.min_cycle_pool().set(&min_cycle_pool);
        require!(!entitlement_registry.is_zero(), ERR_ZERO_ADDRESS);
        self.entitlement_registry_address().set(&entitlement_registry);

        let adapter = conversion_adapter
            .into_option()
            .unwrap_or_else(ManagedAddress::zero);
        self.conversion_adapter_address().set(&adapter);

        self.current_cycle_index().set(0u64);
        self.cycles(0).set(Cycle::<Self::Api>::new(0));
        self.total_deposited().set(BigUint::zero());
        self.total_fees().set(BigUint::zero());
        self.total_claimed().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Fee skim first, then advance, then credit whatever cycle
    // is current after advancement. A deposit landing exactly
    // on a boundary therefore funds the new cycle.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let depositor = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_DEPOSIT);

        // ── Skim ──
        let fee = self.fee_for(&amount);
        if fee > 0u64 {
            let sink = self.sink_address().get();
            self.transfer_fee(&sink, &fee);
            self.total_fees().update(|total| *total += &fee);
            self.fee_skimmed_event(&sink, &fee);
        }

        // ── Advance, then credit ──
        let now = self.blockchain().get_block_timestamp();
        self.advance_cycles(now);

        let net_amount = &amount - &fee;
        let cycle_index = self.add_to_current_pool(&net_amount);
        self.total_deposited().update(|total| *total += &amount);

        self.deposit_event(&depositor, cycle_index, &net_amount);
    }

    // ========================================================
    // ENDPOINT: claim
    // Pays the caller one share per (token, cycle) pair of the
    // cross product of both lists.
    // ========================================================

    #[endpoint(claim)]
    fn claim(
        &self,
        cohort_id: u32,
        token_ids: ManagedVec<u64>,
        cycle_indices: ManagedVec<u64>,
    ) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        self.advance_cycles(now);

        let caller = self.blockchain().get_caller();
        let amount = self.settle_claims(&caller, cohort_id, &token_ids, &cycle_indices);
        if amount > 0u64 {
            self.send().direct_egld(&caller, &amount);
        }
        amount
    }

    // ========================================================
    // ENDPOINT: claimToSubscription
    // Same settlement as claim, but the amount is routed through
    // the conversion adapter to fund `subscriber`'s subscription.
    // The adapter call is synchronous: if it fails the whole
    // transaction reverts and nothing is marked claimed.
    // ========================================================

    #[endpoint(claimToSubscription)]
    fn claim_to_subscription(
        &self,
        cohort_id: u32,
        token_ids: ManagedVec<u64>,
        cycle_indices: ManagedVec<u64>,
        subscriber: ManagedAddress,
    ) -> BigUint {
        let adapter = self.conversion_adapter_address().get();
        require!(!adapter.is_zero(), ERR_NO_ADAPTER);

        let now = self.blockchain().get_block_timestamp();
        self.advance_cycles(now);

        let caller = self.blockchain().get_caller();
        let amount = self.settle_claims(&caller, cohort_id, &token_ids, &cycle_indices);
        if amount == 0u64 {
            return amount;
        }

        let credited: BigUint = self
            .tx()
            .to(&adapter)
            .typed(conversion_adapter_proxy::ConversionAdapterProxy)
            .pay_subscription(subscriber.clone())
            .egld(&amount)
            .returns(ReturnsResult)
            .sync_call();

        self.claim_converted_event(&caller, &subscriber, &amount, &credited);
        amount
    }

    /// Contract sinks are paid through their payable `acceptFee`
    /// endpoint, so a sink that refuses the fee fails the deposit.
    fn transfer_fee(&self, sink: &ManagedAddress, fee: &BigUint) {
        if self.blockchain().is_smart_contract(sink) {
            self.tx()
                .to(sink)
                .typed(fee_sink_proxy::FeeSinkProxy)
                .accept_fee()
                .egld(fee)
                .sync_call();
        } else {
            self.send().direct_egld(sink, fee);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getLedgerStats)]
    fn get_ledger_stats(&self) -> MultiValue5<BigUint, BigUint, BigUint, u64, BigUint> {
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        (
            self.total_deposited().get(),
            self.total_fees().get(),
            self.total_claimed().get(),
            self.current_cycle_index().get(),
            balance,
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("totalDeposited")]
    fn total_deposited(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalFees")]
    fn total_fees(&self) -> SingleValueMapper<BigUint>;
}
