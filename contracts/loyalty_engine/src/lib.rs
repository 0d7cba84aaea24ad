#![no_std]

use shared_utils::{AccessControl, Pausable, SafeMath, Validation};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, symbol_short, Address, Env, String,
    Symbol,
};

mod catalogue;
mod events;
mod ledger;

pub use catalogue::RewardItem;
pub use ledger::{TokenLedger, TokenLedgerClient};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LoyaltyError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Caller lacks the admin or merchant role the operation requires
    Unauthorized = 3,
    /// Negative amount or rate, zero cost, or null principal
    InvalidArgument = 4,
    /// No catalogue entry at the requested id
    NotFound = 5,
    /// Issuance and redemption are paused
    SystemPaused = 6,
    /// Catalogue entry exists but is marked unavailable
    RewardUnavailable = 7,
    /// Limited reward has no stock left
    OutOfStock = 8,
    /// `purchase_amount * reward_rate` does not fit in an i128
    ArithmeticOverflow = 9,
    /// Token ledger rejected the mint
    MintFailed = 10,
    /// Token ledger rejected the payment transfer
    TransferFailed = 11,
    /// Token ledger rejected the burn
    BurnFailed = 12,
}

impl LoyaltyError {
    /// Human-readable message for debugging.
    pub fn message(&self) -> &'static str {
        match self {
            LoyaltyError::NotInitialized => "Contract not initialized",
            LoyaltyError::AlreadyInitialized => "Contract already initialized",
            LoyaltyError::Unauthorized => "Unauthorized: caller not allowed",
            LoyaltyError::InvalidArgument => "Invalid argument",
            LoyaltyError::NotFound => "Reward not found",
            LoyaltyError::SystemPaused => "System is paused",
            LoyaltyError::RewardUnavailable => "Reward is not available",
            LoyaltyError::OutOfStock => "Reward is out of stock",
            LoyaltyError::ArithmeticOverflow => "Reward amount overflows",
            LoyaltyError::MintFailed => "Token ledger refused to mint",
            LoyaltyError::TransferFailed => "Token transfer failed",
            LoyaltyError::BurnFailed => "Token ledger refused to burn",
        }
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,       // token ledger address, fixed at initialization
    RewardRate,  // points minted per purchase unit
    Reward(u64), // reward id -> RewardItem
}

const MERCHANT_ROLE: Symbol = symbol_short!("merchant");

/// Require that the caller is the admin stored in this contract.
fn require_admin(e: &Env, caller: &Address) -> Result<(), LoyaltyError> {
    caller.require_auth();
    let admin = AccessControl::admin(e).ok_or(LoyaltyError::NotInitialized)?;
    if *caller != admin {
        return Err(LoyaltyError::Unauthorized);
    }
    Ok(())
}

fn require_not_paused(e: &Env, context: &str) -> Result<(), LoyaltyError> {
    if Pausable::is_paused(e) {
        log!(e, "rejected while paused: {}", Symbol::new(e, context));
        return Err(LoyaltyError::SystemPaused);
    }
    Ok(())
}

fn read_rate(e: &Env) -> Result<i128, LoyaltyError> {
    e.storage()
        .instance()
        .get::<_, i128>(&DataKey::RewardRate)
        .ok_or(LoyaltyError::NotInitialized)
}

#[contract]
pub struct LoyaltyEngineContract;

#[contractimpl]
impl LoyaltyEngineContract {
    /// Initialize the engine with its administrator, the token ledger it
    /// mints through, and the starting reward rate.
    ///
    /// The engine contract must be granted minting authority on the token
    /// ledger as part of deployment; until then every issuance fails with
    /// `MintFailed`.
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        reward_rate: i128,
    ) -> Result<(), LoyaltyError> {
        if AccessControl::has_admin(&e) {
            return Err(LoyaltyError::AlreadyInitialized);
        }
        if !Validation::is_non_negative(reward_rate) || Validation::is_zero_address(&e, &admin) {
            return Err(LoyaltyError::InvalidArgument);
        }

        AccessControl::set_admin(&e, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::RewardRate, &reward_rate);
        Pausable::unpause(&e);
        Ok(())
    }

    // ========================================================================
    // Access Control
    // ========================================================================

    pub fn get_admin(e: Env) -> Result<Address, LoyaltyError> {
        AccessControl::admin(&e).ok_or(LoyaltyError::NotInitialized)
    }

    pub fn is_admin(e: Env, principal: Address) -> bool {
        AccessControl::is_admin(&e, &principal)
    }

    /// Hand administration to `new_admin`. There is always exactly one admin.
    pub fn transfer_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), LoyaltyError> {
        require_admin(&e, &caller)?;
        if Validation::is_zero_address(&e, &new_admin) {
            return Err(LoyaltyError::InvalidArgument);
        }
        AccessControl::set_admin(&e, &new_admin);
        events::admin_changed(&e, caller, new_admin);
        Ok(())
    }

    /// Add or remove `merchant` from the set allowed to issue rewards.
    pub fn set_merchant(
        e: Env,
        caller: Address,
        merchant: Address,
        authorized: bool,
    ) -> Result<(), LoyaltyError> {
        require_admin(&e, &caller)?;
        AccessControl::set_role(&e, &MERCHANT_ROLE, &merchant, authorized);
        events::merchant_status_changed(&e, merchant, authorized);
        Ok(())
    }

    pub fn is_merchant(e: Env, principal: Address) -> bool {
        AccessControl::has_role(&e, &MERCHANT_ROLE, &principal)
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    pub fn set_reward_rate(e: Env, caller: Address, reward_rate: i128) -> Result<(), LoyaltyError> {
        require_admin(&e, &caller)?;
        if !Validation::is_non_negative(reward_rate) {
            return Err(LoyaltyError::InvalidArgument);
        }
        let old_rate = read_rate(&e)?;
        e.storage().instance().set(&DataKey::RewardRate, &reward_rate);
        events::rate_changed(&e, old_rate, reward_rate);
        Ok(())
    }

    pub fn get_reward_rate(e: Env) -> Result<i128, LoyaltyError> {
        read_rate(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, LoyaltyError> {
        e.storage()
            .instance()
            .get::<_, Address>(&DataKey::Token)
            .ok_or(LoyaltyError::NotInitialized)
    }

    /// Pause or resume issuance and redemption. Caller must be admin.
    pub fn set_paused(e: Env, caller: Address, paused: bool) -> Result<(), LoyaltyError> {
        require_admin(&e, &caller)?;
        Pausable::set_paused(&e, paused);
        events::pause_changed(&e, paused);
        Ok(())
    }

    /// Returns `true` if the contract is currently paused.
    pub fn is_paused(e: Env) -> bool {
        Pausable::is_paused(&e)
    }

    // ========================================================================
    // Reward Catalogue
    // ========================================================================

    /// Create or overwrite the reward at `id`. `stock == 0` means unlimited.
    pub fn add_reward(
        e: Env,
        caller: Address,
        id: u64,
        name: String,
        cost: i128,
        stock: u32,
    ) -> Result<(), LoyaltyError> {
        require_admin(&e, &caller)?;
        if !Validation::is_positive(cost) {
            return Err(LoyaltyError::InvalidArgument);
        }

        let item = RewardItem::new(id, name.clone(), cost, stock);
        catalogue::write_reward(&e, &item);
        events::reward_added(&e, id, name, cost, stock);
        Ok(())
    }

    pub fn set_availability(
        e: Env,
        caller: Address,
        id: u64,
        available: bool,
    ) -> Result<(), LoyaltyError> {
        require_admin(&e, &caller)?;
        let mut item = catalogue::require_reward(&e, id)?;
        item.available = available;
        catalogue::write_reward(&e, &item);
        events::availability_changed(&e, id, available);
        Ok(())
    }

    /// Reward details, or the zero-value item (`cost == 0`) if absent.
    pub fn get_reward_details(e: Env, id: u64) -> RewardItem {
        catalogue::read_reward(&e, id).unwrap_or_else(|| RewardItem::empty(&e))
    }

    // ========================================================================
    // Issuance & Redemption
    // ========================================================================

    /// Credit `purchase_amount * reward_rate` points to `customer`.
    /// Caller must be an authorized merchant.
    pub fn issue_rewards(
        e: Env,
        caller: Address,
        customer: Address,
        purchase_amount: i128,
    ) -> Result<(), LoyaltyError> {
        require_not_paused(&e, "issue_rewards")?;

        caller.require_auth();
        if !AccessControl::has_role(&e, &MERCHANT_ROLE, &caller) {
            log!(&e, "issue rejected: {} is not a merchant", caller);
            return Err(LoyaltyError::Unauthorized);
        }
        if Validation::is_zero_address(&e, &customer)
            || !Validation::is_non_negative(purchase_amount)
        {
            return Err(LoyaltyError::InvalidArgument);
        }

        let reward_amount =
            SafeMath::mul(purchase_amount, read_rate(&e)?).ok_or(LoyaltyError::ArithmeticOverflow)?;

        let ledger = TokenLedger::load(&e)?;
        if let Err(err) = ledger.mint(&customer, reward_amount) {
            log!(&e, "issue rejected: mint of {} failed", reward_amount);
            return Err(err);
        }

        log!(&e, "issued {} points to {}", reward_amount, customer);
        events::reward_issued(&e, customer, reward_amount, caller);
        Ok(())
    }

    /// Spend the caller's points on the reward at `reward_id`.
    ///
    /// The caller must have approved the engine for at least the reward cost
    /// on the token ledger. Stock is consumed only after payment succeeds.
    pub fn redeem_reward(e: Env, caller: Address, reward_id: u64) -> Result<(), LoyaltyError> {
        require_not_paused(&e, "redeem_reward")?;
        caller.require_auth();

        let mut item =
            catalogue::read_reward(&e, reward_id).unwrap_or_else(|| RewardItem::empty(&e));
        if let Err(err) = item.check_redeemable() {
            log!(&e, "redeem of {} rejected: {}", reward_id, err as u32);
            return Err(err);
        }

        let ledger = TokenLedger::load(&e)?;
        if let Err(err) = ledger.collect(&caller, item.cost) {
            log!(
                &e,
                "redeem of {} rejected: payment of {} failed",
                reward_id,
                item.cost
            );
            return Err(err);
        }

        item.take_one()?;
        catalogue::write_reward(&e, &item);

        log!(&e, "redeemed {} for {}, stock now {}", reward_id, caller, item.stock);
        events::reward_redeemed(&e, caller, reward_id, item.cost);
        Ok(())
    }

    // ========================================================================
    // Balances
    // ========================================================================

    pub fn get_user_balance(e: Env, principal: Address) -> Result<i128, LoyaltyError> {
        Ok(TokenLedger::load(&e)?.balance(&principal))
    }

    /// Points collected from redemptions and still held by the engine.
    pub fn collected_balance(e: Env) -> Result<i128, LoyaltyError> {
        Ok(TokenLedger::load(&e)?.collected())
    }

    /// Burn `amount` of the collected points. Caller must be admin.
    pub fn burn_collected(e: Env, caller: Address, amount: i128) -> Result<(), LoyaltyError> {
        require_admin(&e, &caller)?;
        if !Validation::is_positive(amount) {
            return Err(LoyaltyError::InvalidArgument);
        }
        TokenLedger::load(&e)?.burn_collected(amount)?;
        events::collected_burned(&e, amount);
        Ok(())
    }
}
