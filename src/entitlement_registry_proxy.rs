use multiversx_sc::proxy_imports::*;

pub struct EntitlementRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for EntitlementRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = EntitlementRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        EntitlementRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct EntitlementRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> EntitlementRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Cohorts are append-only, ids run from 0 to count - 1.
    pub fn get_cohort_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCohortCount")
            .original_result()
    }

    pub fn cohort_exists_at<Arg0: ProxyArg<u32>, Arg1: ProxyArg<u64>>(
        self,
        cohort_id: Arg0,
        timestamp: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cohortExistsAt")
            .argument(&cohort_id)
            .argument(&timestamp)
            .original_result()
    }

    /// Tokens of the cohort whose representative was set strictly before `timestamp`.
    pub fn entitled_count_at<Arg0: ProxyArg<u32>, Arg1: ProxyArg<u64>>(
        self,
        cohort_id: Arg0,
        timestamp: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("entitledCountAt")
            .argument(&cohort_id)
            .argument(&timestamp)
            .original_result()
    }

    pub fn owner_of<Arg0: ProxyArg<u32>, Arg1: ProxyArg<u64>>(
        self,
        cohort_id: Arg0,
        token_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("ownerOf")
            .argument(&cohort_id)
            .argument(&token_id)
            .original_result()
    }

    pub fn representative_set_at<Arg0: ProxyArg<u32>, Arg1: ProxyArg<u64>>(
        self,
        cohort_id: Arg0,
        token_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("representativeSetAt")
            .argument(&cohort_id)
            .argument(&token_id)
            .original_result()
    }
}
