use multiversx_sc::proxy_imports::*;

pub struct FeeSinkProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FeeSinkProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FeeSinkProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FeeSinkProxyMethods { wrapped_tx: tx }
    }
}

pub struct FeeSinkProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> FeeSinkProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable in EGLD. A sink contract may refuse the fee, which
    /// fails the deposit that produced it.
    pub fn accept_fee(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("acceptFee").original_result()
    }
}
