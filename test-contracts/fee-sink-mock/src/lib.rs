#![no_std]

multiversx_sc::imports!();

pub mod fee_sink_mock_proxy;

/// Fee sink contract for scenario tests. Accepts every fee until
/// `setRejecting(true)`, then refuses them.
#[multiversx_sc::contract]
pub trait FeeSinkMock {
    #[init]
    fn init(&self) {
        self.rejecting().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("EGLD")]
    #[endpoint(acceptFee)]
    fn accept_fee(&self) {
        require!(!self.rejecting().get(), "Fee sink closed");
        let fee = self.call_value().egld_value().clone_value();
        self.collected().update(|collected| *collected += &fee);
    }

    #[endpoint(setRejecting)]
    fn set_rejecting(&self, rejecting: bool) {
        self.rejecting().set(rejecting);
    }

    #[storage_mapper("rejecting")]
    fn rejecting(&self) -> SingleValueMapper<bool>;

    #[view(getCollected)]
    #[storage_mapper("collected")]
    fn collected(&self) -> SingleValueMapper<BigUint>;
}
