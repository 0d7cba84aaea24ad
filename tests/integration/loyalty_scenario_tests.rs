// End-to-end loyalty scenarios across the engine and the token ledger

use loyalty_engine::{LoyaltyEngineContract, LoyaltyEngineContractClient, LoyaltyError};
use loyalty_token::{LoyaltyTokenContract, LoyaltyTokenContractClient};
use shared_utils::Validation;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

struct LoyaltyProgramFixture {
    env: Env,
    admin: Address,
    merchant: Address,
    engine_id: Address,
    engine: LoyaltyEngineContractClient<'static>,
    token: LoyaltyTokenContractClient<'static>,
}

impl LoyaltyProgramFixture {
    fn setup(reward_rate: i128) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let merchant = Address::generate(&env);

        // Deploy token ledger
        let token_id = env.register_contract(None, LoyaltyTokenContract);
        let token = LoyaltyTokenContractClient::new(&env, &token_id);
        token.initialize(&admin);

        // Deploy engine and grant it minting authority
        let engine_id = env.register_contract(None, LoyaltyEngineContract);
        let engine = LoyaltyEngineContractClient::new(&env, &engine_id);
        engine.initialize(&admin, &token_id, &reward_rate);
        token.set_minter(&admin, &engine_id, &true);

        engine.set_merchant(&admin, &merchant, &true);

        LoyaltyProgramFixture {
            env,
            admin,
            merchant,
            engine_id,
            engine,
            token,
        }
    }

    fn approve_engine(&self, customer: &Address, amount: &i128) {
        self.token.approve(customer, &self.engine_id, amount);
    }
}

// ============================================
// Catalogue + issuance + redemption walkthrough
// ============================================

#[test]
fn test_ten_percent_off_walkthrough() {
    let fixture = LoyaltyProgramFixture::setup(10);
    let customer = Address::generate(&fixture.env);
    let name = String::from_str(&fixture.env, "10% Off");

    fixture.engine.add_reward(&fixture.admin, &1, &name, &100, &2);
    let details = fixture.engine.get_reward_details(&1);
    assert_eq!(details.id, 1);
    assert_eq!(details.name, name);
    assert_eq!(details.cost, 100);
    assert_eq!(details.stock, 2);
    assert!(details.available);

    fixture.engine.issue_rewards(&fixture.merchant, &customer, &50);
    assert_eq!(fixture.engine.get_user_balance(&customer), 500);

    fixture.approve_engine(&customer, &500);
    fixture.engine.redeem_reward(&customer, &1);
    fixture.engine.redeem_reward(&customer, &1);

    assert_eq!(fixture.engine.get_reward_details(&1).stock, 0);
    assert_eq!(fixture.engine.get_user_balance(&customer), 300);

    let third = fixture.engine.try_redeem_reward(&customer, &1);
    assert_eq!(third, Err(Ok(LoyaltyError::OutOfStock)));
    assert_eq!(fixture.engine.get_user_balance(&customer), 300);
}

#[test]
fn test_non_admin_cannot_change_merchants() {
    let fixture = LoyaltyProgramFixture::setup(10);
    let intruder = Address::generate(&fixture.env);
    let accomplice = Address::generate(&fixture.env);

    let result = fixture.engine.try_set_merchant(&intruder, &accomplice, &true);
    assert_eq!(result, Err(Ok(LoyaltyError::Unauthorized)));
    assert!(!fixture.engine.is_merchant(&accomplice));
    assert!(fixture.engine.is_merchant(&fixture.merchant));
}

#[test]
fn test_zero_cost_reward_is_rejected() {
    let fixture = LoyaltyProgramFixture::setup(10);

    let result = fixture.engine.try_add_reward(
        &fixture.admin,
        &5,
        &String::from_str(&fixture.env, "Nothing"),
        &0,
        &1,
    );
    assert_eq!(result, Err(Ok(LoyaltyError::InvalidArgument)));
    assert_eq!(fixture.engine.get_reward_details(&5).cost, 0);
}

// ============================================
// Conservation across the two contracts
// ============================================

#[test]
fn test_points_are_conserved_between_customer_and_engine() {
    let fixture = LoyaltyProgramFixture::setup(3);
    let alice = Address::generate(&fixture.env);
    let bob = Address::generate(&fixture.env);

    fixture
        .engine
        .add_reward(&fixture.admin, &1, &String::from_str(&fixture.env, "Tote"), &30, &0);

    fixture.engine.issue_rewards(&fixture.merchant, &alice, &40);
    fixture.engine.issue_rewards(&fixture.merchant, &bob, &20);
    fixture.approve_engine(&alice, &120);
    fixture.approve_engine(&bob, &60);

    fixture.engine.redeem_reward(&alice, &1);
    fixture.engine.redeem_reward(&alice, &1);
    fixture.engine.redeem_reward(&bob, &1);

    let alice_balance = fixture.engine.get_user_balance(&alice);
    let bob_balance = fixture.engine.get_user_balance(&bob);
    let collected = fixture.engine.collected_balance();

    assert_eq!(alice_balance, 60);
    assert_eq!(bob_balance, 30);
    assert_eq!(collected, 90);
    assert_eq!(
        alice_balance + bob_balance + collected,
        fixture.token.total_supply()
    );

    fixture.engine.burn_collected(&fixture.admin, &90);
    assert_eq!(fixture.engine.collected_balance(), 0);
    assert_eq!(fixture.token.total_supply(), 90);
}

#[test]
fn test_pause_blocks_then_resumes_program() {
    let fixture = LoyaltyProgramFixture::setup(10);
    let customer = Address::generate(&fixture.env);
    fixture
        .engine
        .add_reward(&fixture.admin, &1, &String::from_str(&fixture.env, "Cup"), &100, &1);
    fixture.engine.issue_rewards(&fixture.merchant, &customer, &10);
    fixture.approve_engine(&customer, &100);

    fixture.engine.set_paused(&fixture.admin, &true);
    assert_eq!(
        fixture.engine.try_issue_rewards(&fixture.merchant, &customer, &10),
        Err(Ok(LoyaltyError::SystemPaused))
    );
    assert_eq!(
        fixture.engine.try_redeem_reward(&customer, &1),
        Err(Ok(LoyaltyError::SystemPaused))
    );
    assert_eq!(fixture.engine.get_reward_details(&1).stock, 1);
    assert_eq!(fixture.engine.get_user_balance(&customer), 100);

    fixture.engine.set_paused(&fixture.admin, &false);
    fixture.engine.redeem_reward(&customer, &1);
    assert_eq!(fixture.engine.get_reward_details(&1).stock, 0);
    assert_eq!(fixture.engine.get_user_balance(&customer), 0);
}

#[test]
fn test_engine_without_mint_authority_issues_nothing() {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);
    let merchant = Address::generate(&env);
    let customer = Address::generate(&env);

    let token_id = env.register_contract(None, LoyaltyTokenContract);
    let token = LoyaltyTokenContractClient::new(&env, &token_id);
    token.initialize(&admin);

    // Deployment step that grants minting authority is skipped.
    let engine_id = env.register_contract(None, LoyaltyEngineContract);
    let engine = LoyaltyEngineContractClient::new(&env, &engine_id);
    engine.initialize(&admin, &token_id, &10);
    engine.set_merchant(&admin, &merchant, &true);

    let result = engine.try_issue_rewards(&merchant, &customer, &50);
    assert_eq!(result, Err(Ok(LoyaltyError::MintFailed)));
    assert_eq!(token.total_supply(), 0);

    token.set_minter(&admin, &engine_id, &true);
    engine.issue_rewards(&merchant, &customer, &50);
    assert_eq!(token.balance(&customer), 500);
}

#[test]
fn test_null_customer_receives_nothing() {
    let fixture = LoyaltyProgramFixture::setup(10);
    let null_customer = Validation::zero_address(&fixture.env);

    let result = fixture
        .engine
        .try_issue_rewards(&fixture.merchant, &null_customer, &50);
    assert_eq!(result, Err(Ok(LoyaltyError::InvalidArgument)));
    assert_eq!(fixture.engine.get_user_balance(&null_customer), 0);
    assert_eq!(fixture.token.total_supply(), 0);
}
