use multiversx_sc::proxy_imports::*;

pub struct ConversionAdapterProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ConversionAdapterProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ConversionAdapterProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ConversionAdapterProxyMethods { wrapped_tx: tx }
    }
}

pub struct ConversionAdapterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ConversionAdapterProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable in EGLD. Swaps the payment and credits it to the
    /// subscriber's subscription, returning the credited amount.
    pub fn pay_subscription<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        subscriber: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .raw_call("paySubscription")
            .argument(&subscriber)
            .original_result()
    }
}
