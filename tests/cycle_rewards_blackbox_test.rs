// Blackbox tests for the cycle rewards ledger.
//
// The ledger reads cohorts and delegations from an external registry
// and pays subscriptions through an external adapter, both via
// cross-contract calls. Both collaborators are replaced here by the
// mock contracts under test-contracts/, deployed next to the ledger
// in the same ScenarioWorld.

use multiversx_sc_scenario::imports::*;

use conversion_adapter_mock::conversion_adapter_mock_proxy::ConversionAdapterMockProxy;
use cycle_rewards::cycle_rewards_proxy::{self, CycleRewardsProxy, CycleStatus};
use cycle_rewards::errors::*;
use entitlement_registry_mock::entitlement_registry_mock_proxy::EntitlementRegistryMockProxy;
use fee_sink_mock::fee_sink_mock_proxy::FeeSinkMockProxy;

const OWNER: TestAddress = TestAddress::new("owner");
const DEPOSITOR: TestAddress = TestAddress::new("depositor");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const CAROL: TestAddress = TestAddress::new("carol");
const SINK: TestAddress = TestAddress::new("sink");

const LEDGER: TestSCAddress = TestSCAddress::new("cycle-rewards");
const REGISTRY: TestSCAddress = TestSCAddress::new("registry");
const ADAPTER: TestSCAddress = TestSCAddress::new("adapter");
const FEE_SINK: TestSCAddress = TestSCAddress::new("fee-sink");

const LEDGER_CODE_PATH: MxscPath = MxscPath::new("output/cycle-rewards.mxsc.json");
const REGISTRY_CODE_PATH: MxscPath = MxscPath::new(
    "test-contracts/entitlement-registry-mock/output/entitlement-registry-mock.mxsc.json",
);
const ADAPTER_CODE_PATH: MxscPath = MxscPath::new(
    "test-contracts/conversion-adapter-mock/output/conversion-adapter-mock.mxsc.json",
);
const FEE_SINK_CODE_PATH: MxscPath =
    MxscPath::new("test-contracts/fee-sink-mock/output/fee-sink-mock.mxsc.json");

/// 10%
const FEE_PERCENT: u64 = 1_000;
const CYCLE_DURATION: u64 = 1_000;
const MIN_CYCLE_POOL: u64 = 1_000;
const DEPOSITOR_BALANCE: u64 = 1_000_000;

const COHORT_A: u32 = 0;
const COHORT_B: u32 = 1;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(LEDGER_CODE_PATH, cycle_rewards::ContractBuilder);
    blockchain.register_contract(
        REGISTRY_CODE_PATH,
        entitlement_registry_mock::ContractBuilder,
    );
    blockchain.register_contract(ADAPTER_CODE_PATH, conversion_adapter_mock::ContractBuilder);
    blockchain.register_contract(FEE_SINK_CODE_PATH, fee_sink_mock::ContractBuilder);
    blockchain
}

fn managed(address: Address) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address)
}

fn ids(items: &[u64]) -> ManagedVec<StaticApi, u64> {
    let mut result = ManagedVec::new();
    for item in items {
        result.push(*item);
    }
    result
}

struct LedgerTestState {
    world: ScenarioWorld,
}

impl LedgerTestState {
    fn new() -> Self {
        let mut world = world();

        world.account(OWNER).nonce(1);
        world
            .account(DEPOSITOR)
            .nonce(1)
            .balance(DEPOSITOR_BALANCE);
        world.account(ALICE).nonce(1);
        world.account(BOB).nonce(1);
        world.account(CAROL).nonce(1);
        world.account(SINK).nonce(1);
        world.current_block().block_timestamp(1);

        world
            .tx()
            .from(OWNER)
            .typed(EntitlementRegistryMockProxy)
            .init()
            .code(REGISTRY_CODE_PATH)
            .new_address(REGISTRY)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(ConversionAdapterMockProxy)
            .init()
            .code(ADAPTER_CODE_PATH)
            .new_address(ADAPTER)
            .run();

        world
            .tx()
            .from(OWNER)
            .typed(CycleRewardsProxy)
            .init(
                FEE_PERCENT,
                managed(SINK.to_address()),
                CYCLE_DURATION,
                BigUint::<StaticApi>::from(MIN_CYCLE_POOL),
                managed(REGISTRY.to_address()),
                OptionalValue::Some(managed(ADAPTER.to_address())),
            )
            .code(LEDGER_CODE_PATH)
            .new_address(LEDGER)
            .run();

        Self { world }
    }

    fn set_time(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // ── Registry ──

    fn register_cohort(&mut self) -> u32 {
        self.world
            .tx()
            .from(OWNER)
            .to(REGISTRY)
            .typed(EntitlementRegistryMockProxy)
            .register_cohort()
            .returns(ReturnsResult)
            .run()
    }

    fn delegate(&mut self, cohort_id: u32, token_id: u64, representative: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(REGISTRY)
            .typed(EntitlementRegistryMockProxy)
            .set_representative(cohort_id, token_id, managed(representative.to_address()))
            .run();
    }

    // ── Ledger ──

    fn deposit(&mut self, amount: u64) {
        self.world
            .tx()
            .from(DEPOSITOR)
            .to(LEDGER)
            .typed(CycleRewardsProxy)
            .deposit()
            .egld(amount)
            .run();
    }

    fn advance(&mut self) -> u64 {
        self.world
            .tx()
            .from(BOB)
            .to(LEDGER)
            .typed(CycleRewardsProxy)
            .advance_cycles_endpoint()
            .returns(ReturnsResult)
            .run()
    }

    fn claim(
        &mut self,
        claimant: TestAddress,
        cohort_id: u32,
        token_ids: &[u64],
        cycle_indices: &[u64],
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(claimant)
            .to(LEDGER)
            .typed(CycleRewardsProxy)
            .claim(cohort_id, ids(token_ids), ids(cycle_indices))
            .returns(ReturnsResult)
            .run()
    }

    fn claim_expect_error(
        &mut self,
        claimant: TestAddress,
        cohort_id: u32,
        token_ids: &[u64],
        cycle_indices: &[u64],
        message: &str,
    ) {
        self.world
            .tx()
            .from(claimant)
            .to(LEDGER)
            .typed(CycleRewardsProxy)
            .claim(cohort_id, ids(token_ids), ids(cycle_indices))
            .returns(ExpectError(4, message))
            .run();
    }

    fn cycle(&mut self, index: u64) -> cycle_rewards_proxy::Cycle<StaticApi> {
        self.world
            .query()
            .to(LEDGER)
            .typed(CycleRewardsProxy)
            .get_cycle(index)
            .returns(ReturnsResult)
            .run()
    }

    fn current_cycle_index(&mut self) -> u64 {
        self.world
            .query()
            .to(LEDGER)
            .typed(CycleRewardsProxy)
            .current_cycle_index()
            .returns(ReturnsResult)
            .run()
    }

    fn entitlement(&mut self, index: u64, cohort_id: u32) -> u64 {
        self.world
            .query()
            .to(LEDGER)
            .typed(CycleRewardsProxy)
            .get_cycle_entitlement(index, cohort_id)
            .returns(ReturnsResult)
            .run()
    }

    fn is_claimed(&mut self, cohort_id: u32, token_id: u64, cycle_index: u64) -> bool {
        self.world
            .query()
            .to(LEDGER)
            .typed(CycleRewardsProxy)
            .is_claimed(cohort_id, token_id, cycle_index)
            .returns(ReturnsResult)
            .run()
    }

    /// One cohort, ALICE's token 1 delegated at t=1, cycle 0 opened
    /// at t=5 by a 2_000 deposit (pool 1_800).
    fn with_single_open_cycle() -> Self {
        let mut state = Self::new();
        state.register_cohort();
        state.delegate(COHORT_A, 1, ALICE);
        state.set_time(5);
        state.deposit(2_000);
        state
    }
}

#[test]
fn deposit_skims_fee_to_sink() {
    let mut state = LedgerTestState::new();

    state.deposit(2_000);

    state.world.check_account(SINK).balance(200u64);
    state.world.check_account(LEDGER).balance(1_800u64);
    state
        .world
        .check_account(DEPOSITOR)
        .balance(DEPOSITOR_BALANCE - 2_000);

    let cycle = state.cycle(0);
    assert_eq!(cycle.pool, BigUint::<StaticApi>::from(1_800u64));
    assert_eq!(cycle.status, CycleStatus::Unopened);

    let (pool, start, closed) = state
        .world
        .query()
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .get_cycle_info(0u64)
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(pool, BigUint::<StaticApi>::from(1_800u64));
    assert_eq!(start, 1);
    assert!(!closed);
}

#[test]
fn zero_deposit_is_rejected() {
    let mut state = LedgerTestState::new();

    state
        .world
        .tx()
        .from(DEPOSITOR)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .deposit()
        .egld(0u64)
        .returns(ExpectError(4, ERR_ZERO_DEPOSIT))
        .run();
}

#[test]
fn unopened_cycle_resets_clock_until_someone_is_entitled() {
    let mut state = LedgerTestState::new();
    state.register_cohort();

    state.set_time(10);
    state.deposit(2_000);
    let cycle = state.cycle(0);
    assert_eq!(cycle.status, CycleStatus::Unopened);
    assert_eq!(cycle.start_timestamp, 10);

    state.set_time(20);
    state.advance();
    let cycle = state.cycle(0);
    assert_eq!(cycle.status, CycleStatus::Unopened);
    assert_eq!(cycle.start_timestamp, 20);

    // Delegating and triggering in the same instant does not count
    state.set_time(30);
    state.delegate(COHORT_A, 1, ALICE);
    state.advance();
    let cycle = state.cycle(0);
    assert_eq!(cycle.status, CycleStatus::Unopened);
    assert_eq!(cycle.start_timestamp, 30);

    state.set_time(31);
    state.advance();
    let cycle = state.cycle(0);
    assert_eq!(cycle.status, CycleStatus::Open);
    assert_eq!(cycle.start_timestamp, 31);
    assert_eq!(cycle.pool, BigUint::<StaticApi>::from(1_800u64));
}

#[test]
fn single_delegated_token_takes_whole_pool() {
    let mut state = LedgerTestState::with_single_open_cycle();
    let cycle = state.cycle(0);
    assert_eq!(cycle.status, CycleStatus::Open);
    assert_eq!(cycle.start_timestamp, 5);

    // One second short of the deadline
    state.set_time(5 + CYCLE_DURATION - 1);
    state.advance();
    assert_eq!(state.cycle(0).status, CycleStatus::Open);
    state.claim_expect_error(ALICE, COHORT_A, &[1], &[0], ERR_CYCLE_NOT_CLOSED);

    state.set_time(5 + CYCLE_DURATION);
    assert_eq!(state.advance(), 1);

    let closed = state.cycle(0);
    assert_eq!(closed.status, CycleStatus::Closed);
    assert_eq!(closed.total_entitled, 1);
    assert_eq!(closed.closed_at, 5 + CYCLE_DURATION);
    assert!(!closed.rolled_over);
    assert_eq!(state.entitlement(0, COHORT_A), 1);

    let next = state.cycle(1);
    assert_eq!(next.status, CycleStatus::Open);
    assert_eq!(next.start_timestamp, 5 + CYCLE_DURATION);
    assert_eq!(next.pool, BigUint::<StaticApi>::zero());

    state
        .world
        .query()
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .get_claimable_amount(COHORT_A, 1u64, 0u64, managed(ALICE.to_address()))
        .returns(ExpectValue(BigUint::<StaticApi>::from(1_800u64)))
        .run();

    let paid = state.claim(ALICE, COHORT_A, &[1], &[0]);
    assert_eq!(paid, BigUint::<StaticApi>::from(1_800u64));
    state.world.check_account(ALICE).balance(1_800u64);
    assert!(state.is_claimed(COHORT_A, 1, 0));

    state.claim_expect_error(ALICE, COHORT_A, &[1], &[0], ERR_ALREADY_CLAIMED);
    state.world.check_account(ALICE).balance(1_800u64);
}

#[test]
fn large_pool_cannot_close_early() {
    let mut state = LedgerTestState::with_single_open_cycle();

    state.set_time(500);
    state.deposit(500_000);
    state.set_time(5 + CYCLE_DURATION - 1);
    state.advance();

    assert_eq!(state.current_cycle_index(), 0);
    assert_eq!(state.cycle(0).status, CycleStatus::Open);
}

#[test]
fn cycle_waits_for_minimum_pool() {
    let mut state = LedgerTestState::new();
    state.register_cohort();
    state.delegate(COHORT_A, 1, ALICE);

    state.set_time(5);
    state.deposit(500);
    assert_eq!(state.cycle(0).pool, BigUint::<StaticApi>::from(450u64));

    // Long past the deadline, still below the minimum
    state.set_time(5_000);
    state.advance();
    assert_eq!(state.current_cycle_index(), 0);

    // Advancement runs before the credit, so this deposit alone does not close
    state.deposit(1_000);
    let cycle = state.cycle(0);
    assert_eq!(cycle.status, CycleStatus::Open);
    assert_eq!(cycle.start_timestamp, 5);
    assert_eq!(cycle.pool, BigUint::<StaticApi>::from(1_350u64));

    state.set_time(5_001);
    state.advance();
    let cycle = state.cycle(0);
    assert_eq!(cycle.status, CycleStatus::Closed);
    assert_eq!(cycle.pool, BigUint::<StaticApi>::from(1_350u64));
    assert_eq!(state.cycle(1).start_timestamp, 5_001);
}

#[test]
fn boundary_deposit_funds_the_next_cycle() {
    let mut state = LedgerTestState::with_single_open_cycle();

    state.set_time(5 + CYCLE_DURATION);
    state.deposit(1_000);

    assert_eq!(state.cycle(0).pool, BigUint::<StaticApi>::from(1_800u64));
    assert_eq!(state.cycle(0).status, CycleStatus::Closed);
    assert_eq!(state.cycle(1).pool, BigUint::<StaticApi>::from(900u64));
    assert_eq!(state.cycle(1).status, CycleStatus::Open);
}

#[test]
fn flash_delegation_does_not_qualify() {
    let mut state = LedgerTestState::with_single_open_cycle();

    // Same instant as the opening deposit
    state.delegate(COHORT_A, 2, BOB);

    state.set_time(5 + CYCLE_DURATION);
    state.advance();
    assert_eq!(state.entitlement(0, COHORT_A), 1);

    state.claim_expect_error(BOB, COHORT_A, &[2], &[0], ERR_NOT_DELEGATED);
    let paid = state.claim(ALICE, COHORT_A, &[1], &[0]);
    assert_eq!(paid, BigUint::<StaticApi>::from(1_800u64));

    // Both tokens qualify for the cycle that opened afterwards
    state.set_time(1_500);
    state.deposit(2_000);
    state.set_time(5 + 2 * CYCLE_DURATION);
    state.advance();
    assert_eq!(state.entitlement(1, COHORT_A), 2);

    assert_eq!(
        state.claim(BOB, COHORT_A, &[2], &[1]),
        BigUint::<StaticApi>::from(900u64)
    );
    assert_eq!(
        state.claim(ALICE, COHORT_A, &[1], &[1]),
        BigUint::<StaticApi>::from(900u64)
    );
    state.world.check_account(ALICE).balance(2_700u64);
    state.world.check_account(BOB).balance(900u64);
}

#[test]
fn late_cohort_is_excluded_until_next_cycle() {
    let mut state = LedgerTestState::new();
    state.register_cohort();
    state.delegate(COHORT_A, 1, ALICE);
    state.delegate(COHORT_A, 2, BOB);

    state.set_time(5);
    state.deposit(3_000);

    state.set_time(100);
    assert_eq!(state.register_cohort(), COHORT_B);
    state.delegate(COHORT_B, 1, CAROL);

    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    let snapshot_cohorts: Vec<u32> = state
        .world
        .query()
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .get_snapshot_cohorts(0u64)
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .collect();
    assert_eq!(snapshot_cohorts, vec![COHORT_A]);

    state.claim_expect_error(CAROL, COHORT_B, &[1], &[0], ERR_BAD_COHORT);

    // Pool 2_700 split over two tokens of cohort A
    assert_eq!(
        state.claim(ALICE, COHORT_A, &[1], &[0]),
        BigUint::<StaticApi>::from(1_350u64)
    );
    assert_eq!(
        state.claim(BOB, COHORT_A, &[2], &[0]),
        BigUint::<StaticApi>::from(1_350u64)
    );

    // Cycle 1 opened after cohort B was registered
    state.set_time(1_100);
    state.deposit(3_000);
    state.set_time(5 + 2 * CYCLE_DURATION);
    state.advance();
    assert_eq!(state.entitlement(1, COHORT_A), 2);
    assert_eq!(state.entitlement(1, COHORT_B), 1);
    assert_eq!(state.cycle(1).total_entitled, 3);

    assert_eq!(
        state.claim(CAROL, COHORT_B, &[1], &[1]),
        BigUint::<StaticApi>::from(900u64)
    );
    assert_eq!(
        state.claim(ALICE, COHORT_A, &[1], &[1]),
        BigUint::<StaticApi>::from(900u64)
    );
    state.claim_expect_error(CAROL, COHORT_B, &[1], &[0], ERR_BAD_COHORT);
}

#[test]
fn batch_claim_covers_every_token_and_cycle() {
    let mut state = LedgerTestState::new();
    state.register_cohort();
    state.delegate(COHORT_A, 1, ALICE);
    state.delegate(COHORT_A, 2, ALICE);
    state.delegate(COHORT_A, 3, BOB);

    state.set_time(5);
    state.deposit(3_000);
    state.set_time(500);
    state.deposit(1);
    state.set_time(5 + CYCLE_DURATION);
    state.deposit(3_000);
    state.set_time(5 + 2 * CYCLE_DURATION);
    state.advance();

    // Cycle 0: 2_700 + 1 over three tokens, rounding down
    assert_eq!(state.cycle(0).pool, BigUint::<StaticApi>::from(2_701u64));
    let paid = state.claim(ALICE, COHORT_A, &[1, 2], &[0, 1]);
    assert_eq!(paid, BigUint::<StaticApi>::from(900u64 * 2 + 900u64 * 2));
    for (token_id, cycle_index) in [(1u64, 0u64), (1, 1), (2, 0), (2, 1)] {
        assert!(state.is_claimed(COHORT_A, token_id, cycle_index));
    }

    let bob_paid = state.claim(BOB, COHORT_A, &[3], &[0, 1]);
    assert_eq!(bob_paid, BigUint::<StaticApi>::from(1_800u64));

    // Rounding dust stays in the ledger, never overpaid
    state.world.check_account(LEDGER).balance(1u64);
}

#[test]
fn claim_input_errors() {
    let mut state = LedgerTestState::with_single_open_cycle();
    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    state.claim_expect_error(ALICE, COHORT_A, &[], &[0], ERR_NOTHING_TO_CLAIM);
    state.claim_expect_error(ALICE, COHORT_A, &[1], &[], ERR_NOTHING_TO_CLAIM);
    state.claim_expect_error(ALICE, COHORT_A, &[1], &[7], ERR_UNKNOWN_CYCLE);
    state.claim_expect_error(BOB, COHORT_A, &[1], &[0], ERR_NOT_OWNER);
    state.claim_expect_error(ALICE, COHORT_A, &[1], &[1], ERR_CYCLE_NOT_CLOSED);
    // Duplicates inside one batch hit the record written a moment earlier
    state.claim_expect_error(ALICE, COHORT_A, &[1, 1], &[0], ERR_ALREADY_CLAIMED);

    // Failed batches leave nothing behind
    assert!(!state.is_claimed(COHORT_A, 1, 0));
}

#[test]
fn closed_cycle_is_immutable() {
    let mut state = LedgerTestState::with_single_open_cycle();
    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    let before = state.cycle(0);

    // More tokens, a re-delegation and more deposits after the close
    state.set_time(1_100);
    state.delegate(COHORT_A, 2, BOB);
    state.delegate(COHORT_A, 1, BOB);
    state.deposit(5_000);
    state.set_time(5 + 3 * CYCLE_DURATION);
    state.advance();

    let after = state.cycle(0);
    assert_eq!(after.pool, before.pool);
    assert_eq!(after.total_entitled, before.total_entitled);
    assert_eq!(after.closed_at, before.closed_at);
    assert_eq!(state.entitlement(0, COHORT_A), 1);

    // The token changed hands after cycle 0 opened
    state.claim_expect_error(ALICE, COHORT_A, &[1], &[0], ERR_NOT_OWNER);
    state.claim_expect_error(BOB, COHORT_A, &[1], &[0], ERR_NOT_DELEGATED);
}

#[test]
fn zero_entitlement_pool_rolls_over() {
    let mut state = LedgerTestState::with_single_open_cycle();

    // Re-delegation moves the token's timestamp past the cycle start
    state.set_time(10);
    state.delegate(COHORT_A, 1, ALICE);

    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    let closed = state.cycle(0);
    assert_eq!(closed.status, CycleStatus::Closed);
    assert_eq!(closed.total_entitled, 0);
    assert_eq!(closed.pool, BigUint::<StaticApi>::from(1_800u64));
    assert!(closed.rolled_over);
    let next = state.cycle(1);
    assert_eq!(next.pool, BigUint::<StaticApi>::from(1_800u64));
    assert!(!next.rolled_over);

    state.claim_expect_error(ALICE, COHORT_A, &[1], &[0], ERR_NOT_DELEGATED);

    state.set_time(5 + 2 * CYCLE_DURATION);
    state.advance();
    assert_eq!(
        state.claim(ALICE, COHORT_A, &[1], &[1]),
        BigUint::<StaticApi>::from(1_800u64)
    );
    state.world.check_account(LEDGER).balance(0u64);
}

#[test]
fn claim_to_subscription_routes_through_adapter() {
    let mut state = LedgerTestState::with_single_open_cycle();
    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    let routed: BigUint<StaticApi> = state
        .world
        .tx()
        .from(ALICE)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .claim_to_subscription(COHORT_A, ids(&[1]), ids(&[0]), managed(CAROL.to_address()))
        .returns(ReturnsResult)
        .run();
    assert_eq!(routed, BigUint::<StaticApi>::from(1_800u64));

    state
        .world
        .query()
        .to(ADAPTER)
        .typed(ConversionAdapterMockProxy)
        .subscription_credit(managed(CAROL.to_address()))
        .returns(ExpectValue(BigUint::<StaticApi>::from(1_800u64)))
        .run();
    state.world.check_account(ADAPTER).balance(1_800u64);
    state.world.check_account(ALICE).balance(0u64);
    assert!(state.is_claimed(COHORT_A, 1, 0));
}

#[test]
fn failed_conversion_leaves_claim_unpaid() {
    let mut state = LedgerTestState::with_single_open_cycle();
    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    state
        .world
        .tx()
        .from(OWNER)
        .to(ADAPTER)
        .typed(ConversionAdapterMockProxy)
        .set_failing(true)
        .run();

    state
        .world
        .tx()
        .from(ALICE)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .claim_to_subscription(COHORT_A, ids(&[1]), ids(&[0]), managed(ALICE.to_address()))
        .returns(ExpectMessage("Swap unavailable"))
        .run();

    assert!(!state.is_claimed(COHORT_A, 1, 0));
    state.world.check_account(LEDGER).balance(1_800u64);

    // Direct payout still works afterwards
    assert_eq!(
        state.claim(ALICE, COHORT_A, &[1], &[0]),
        BigUint::<StaticApi>::from(1_800u64)
    );
}

#[test]
fn configuration_is_owner_only_and_validated() {
    let mut state = LedgerTestState::new();

    state
        .world
        .tx()
        .from(ALICE)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .set_fee_percent(0u64)
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .set_fee_percent(10_001u64)
        .returns(ExpectError(4, ERR_FEE_TOO_HIGH))
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .set_cycle_duration(0u64)
        .returns(ExpectError(4, ERR_ZERO_DURATION))
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .set_fee_percent(500u64)
        .run();

    state
        .world
        .query()
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .fee_percent()
        .returns(ExpectValue(500u64))
        .run();

    state.deposit(2_000);
    state.world.check_account(SINK).balance(100u64);
    assert_eq!(state.cycle(0).pool, BigUint::<StaticApi>::from(1_900u64));
}

#[test]
fn subscription_path_requires_adapter() {
    let mut state = LedgerTestState::with_single_open_cycle();
    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    state
        .world
        .tx()
        .from(OWNER)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .set_conversion_adapter(ManagedAddress::<StaticApi>::zero())
        .run();

    state
        .world
        .tx()
        .from(ALICE)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .claim_to_subscription(COHORT_A, ids(&[1]), ids(&[0]), managed(ALICE.to_address()))
        .returns(ExpectError(4, ERR_NO_ADAPTER))
        .run();
}

#[test]
fn ledger_stats_track_totals() {
    let mut state = LedgerTestState::with_single_open_cycle();
    state.set_time(5 + CYCLE_DURATION);
    state.advance();
    state.claim(ALICE, COHORT_A, &[1], &[0]);

    let (deposited, fees, claimed, current, balance) = state
        .world
        .query()
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .get_ledger_stats()
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(deposited, BigUint::<StaticApi>::from(2_000u64));
    assert_eq!(fees, BigUint::<StaticApi>::from(200u64));
    assert_eq!(claimed, BigUint::<StaticApi>::from(1_800u64));
    assert_eq!(current, 1);
    assert_eq!(balance, BigUint::<StaticApi>::zero());
}

/// Replaces the plain sink account with the fee sink contract.
fn with_contract_sink(state: &mut LedgerTestState) {
    state
        .world
        .tx()
        .from(OWNER)
        .typed(FeeSinkMockProxy)
        .init()
        .code(FEE_SINK_CODE_PATH)
        .new_address(FEE_SINK)
        .run();

    state
        .world
        .tx()
        .from(OWNER)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .set_sink_address(managed(FEE_SINK.to_address()))
        .run();
}

#[test]
fn contract_sink_collects_fee() {
    let mut state = LedgerTestState::new();
    with_contract_sink(&mut state);

    state.deposit(2_000);

    state.world.check_account(FEE_SINK).balance(200u64);
    state
        .world
        .query()
        .to(FEE_SINK)
        .typed(FeeSinkMockProxy)
        .collected()
        .returns(ExpectValue(BigUint::<StaticApi>::from(200u64)))
        .run();
    assert_eq!(state.cycle(0).pool, BigUint::<StaticApi>::from(1_800u64));
}

#[test]
fn refused_fee_reverts_deposit() {
    let mut state = LedgerTestState::with_single_open_cycle();
    with_contract_sink(&mut state);

    state
        .world
        .tx()
        .from(OWNER)
        .to(FEE_SINK)
        .typed(FeeSinkMockProxy)
        .set_rejecting(true)
        .run();

    state.set_time(500);
    state
        .world
        .tx()
        .from(DEPOSITOR)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .deposit()
        .egld(1_000u64)
        .returns(ExpectError(4, "Fee sink closed"))
        .run();

    assert_eq!(state.cycle(0).pool, BigUint::<StaticApi>::from(1_800u64));
    state.world.check_account(FEE_SINK).balance(0u64);
    state.world.check_account(LEDGER).balance(1_800u64);
    state
        .world
        .check_account(DEPOSITOR)
        .balance(DEPOSITOR_BALANCE - 2_000);

    let (deposited, fees, _, _, _) = state
        .world
        .query()
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .get_ledger_stats()
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(deposited, BigUint::<StaticApi>::from(2_000u64));
    assert_eq!(fees, BigUint::<StaticApi>::from(200u64));
}

#[test]
fn uneven_pool_across_cohorts_is_never_overpaid() {
    let mut state = LedgerTestState::new();
    state.register_cohort();
    state.register_cohort();
    state.delegate(COHORT_A, 1, ALICE);
    state.delegate(COHORT_A, 2, ALICE);
    state.delegate(COHORT_A, 3, BOB);
    state.delegate(COHORT_B, 1, CAROL);

    // Fee 222, pool 2_002 over four tokens
    state.set_time(5);
    state.deposit(2_224);
    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    let closed = state.cycle(0);
    assert_eq!(closed.pool, BigUint::<StaticApi>::from(2_002u64));
    assert_eq!(closed.total_entitled, 4);
    assert_eq!(state.entitlement(0, COHORT_A), 3);
    assert_eq!(state.entitlement(0, COHORT_B), 1);

    let mut paid = state.claim(ALICE, COHORT_A, &[1, 2], &[0]);
    paid += state.claim(BOB, COHORT_A, &[3], &[0]);
    let cohort_a_paid = paid.clone();
    paid += state.claim(CAROL, COHORT_B, &[1], &[0]);

    // Each cohort stays within pool * weight / total_entitled
    assert!(&cohort_a_paid * 4u64 <= BigUint::<StaticApi>::from(2_002u64 * 3));
    assert!(paid <= closed.pool);
    let dust = &closed.pool - &paid;
    assert!(dust < BigUint::<StaticApi>::from(closed.total_entitled));
    assert_eq!(paid, BigUint::<StaticApi>::from(2_000u64));
    state.world.check_account(LEDGER).balance(2u64);
}

#[test]
fn zero_share_items_settle_inside_paying_batch() {
    let mut state = LedgerTestState::with_single_open_cycle();
    state.set_time(5 + CYCLE_DURATION);
    state.advance();

    state
        .world
        .tx()
        .from(OWNER)
        .to(LEDGER)
        .typed(CycleRewardsProxy)
        .set_min_cycle_pool(BigUint::<StaticApi>::zero())
        .run();

    // Cycle 1 closes without a single deposit
    state.set_time(5 + 2 * CYCLE_DURATION);
    state.advance();
    assert_eq!(state.cycle(1).pool, BigUint::<StaticApi>::zero());
    assert_eq!(state.cycle(1).total_entitled, 1);

    let paid = state.claim(ALICE, COHORT_A, &[1], &[0, 1]);
    assert_eq!(paid, BigUint::<StaticApi>::from(1_800u64));
    assert!(state.is_claimed(COHORT_A, 1, 0));
    assert!(state.is_claimed(COHORT_A, 1, 1));

    // An ineligible item still fails the whole batch
    state.set_time(5 + 3 * CYCLE_DURATION);
    state.advance();
    state.claim_expect_error(ALICE, COHORT_A, &[1], &[1, 2], ERR_ALREADY_CLAIMED);
    assert!(!state.is_claimed(COHORT_A, 1, 2));
    assert_eq!(
        state.claim(ALICE, COHORT_A, &[1], &[2]),
        BigUint::<StaticApi>::zero()
    );
}
