#![no_std]

multiversx_sc::imports!();

pub mod conversion_adapter_mock_proxy;

/// Stand-in for the swap facility: credits incoming EGLD 1:1 to a
/// subscriber, or fails every call while `failing` is set.
#[multiversx_sc::contract]
pub trait ConversionAdapterMock {
    #[init]
    fn init(&self) {
        self.failing().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("EGLD")]
    #[endpoint(paySubscription)]
    fn pay_subscription(&self, subscriber: ManagedAddress) -> BigUint {
        require!(!self.failing().get(), "Swap unavailable");
        let amount = self.call_value().egld_value().clone_value();
        self.subscription_credit(&subscriber)
            .update(|credit| *credit += &amount);
        amount
    }

    #[endpoint(setFailing)]
    fn set_failing(&self, failing: bool) {
        self.failing().set(failing);
    }

    #[storage_mapper("failing")]
    fn failing(&self) -> SingleValueMapper<bool>;

    #[view(getSubscriptionCredit)]
    #[storage_mapper("subscriptionCredit")]
    fn subscription_credit(&self, subscriber: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
