#![no_std]
use shared_utils::{AccessControl, SafeMath, Validation};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, Symbol,
};


// ============================================================================
// Error Types
// ============================================================================

/// Contract errors for structured error handling
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Caller is not authorized to perform this action
    Unauthorized = 3,
    /// Amount must be non-negative
    InvalidAmount = 4,
    /// Source balance is lower than the requested amount
    InsufficientBalance = 5,
    /// Spender allowance is lower than the requested amount
    InsufficientAllowance = 6,
    /// Balance or supply arithmetic would overflow
    Overflow = 7,
}

// ============================================================================
// Data Types
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

/// Storage keys for the contract
#[contracttype]
pub enum DataKey {
    /// Sum of all balances
    TotalSupply,
    /// Balance per holder
    Balance(Address),
    /// Remaining amount `spender` may move out of `from`
    Allowance(AllowanceKey),
}

const MINTER_ROLE: Symbol = symbol_short!("minter");

// ============================================================================
// Storage helpers
// ============================================================================

fn read_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

fn read_allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        }))
        .unwrap_or(0)
}

fn write_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if amount == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &amount);
    }
}

fn read_supply(e: &Env) -> Result<i128, TokenError> {
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .ok_or(TokenError::NotInitialized)
}

/// Move `amount` between two holders. Never creates or destroys value.
fn move_balance(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    let from_balance = SafeMath::sub_non_negative(read_balance(e, from), amount)
        .ok_or(TokenError::InsufficientBalance)?;
    write_balance(e, from, from_balance);
    let to_balance = SafeMath::add(read_balance(e, to), amount).ok_or(TokenError::Overflow)?;
    write_balance(e, to, to_balance);
    Ok(())
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();
    let admin = AccessControl::admin(e).ok_or(TokenError::NotInitialized)?;
    if *caller != admin {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}

fn require_amount(amount: i128) -> Result<(), TokenError> {
    if !Validation::is_non_negative(amount) {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

// ============================================================================
// Contract Implementation
// ============================================================================

/// Fungible point ledger. Supply changes only through `mint` and `burn`.
#[contract]
pub struct LoyaltyTokenContract;

#[contractimpl]
impl LoyaltyTokenContract {
    /// Initialize the ledger with an admin that manages the minter set
    pub fn initialize(e: Env, admin: Address) -> Result<(), TokenError> {
        if AccessControl::has_admin(&e) {
            return Err(TokenError::AlreadyInitialized);
        }
        AccessControl::set_admin(&e, &admin);
        e.storage().instance().set(&DataKey::TotalSupply, &0i128);
        Ok(())
    }

    pub fn get_admin(e: Env) -> Result<Address, TokenError> {
        AccessControl::admin(&e).ok_or(TokenError::NotInitialized)
    }

    // ========================================================================
    // Minting authority
    // ========================================================================

    /// Grant or revoke minting authority. Only the admin can call this function.
    pub fn set_minter(
        e: Env,
        caller: Address,
        minter: Address,
        authorized: bool,
    ) -> Result<(), TokenError> {
        require_admin(&e, &caller)?;
        AccessControl::set_role(&e, &MINTER_ROLE, &minter, authorized);
        e.events().publish((symbol_short!("minter"), minter), authorized);
        Ok(())
    }

    pub fn is_minter(e: Env, minter: Address) -> bool {
        AccessControl::has_role(&e, &MINTER_ROLE, &minter)
    }

    /// Credit `amount` new points to `to`.
    ///
    /// # Errors
    /// * `Unauthorized` - If `minter` does not hold minting authority
    /// * `InvalidAmount` - If `amount` is negative
    /// * `Overflow` - If the balance or total supply would overflow
    pub fn mint(e: Env, minter: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        minter.require_auth();
        if !AccessControl::has_role(&e, &MINTER_ROLE, &minter) {
            return Err(TokenError::Unauthorized);
        }
        require_amount(amount)?;

        let supply = SafeMath::add(read_supply(&e)?, amount).ok_or(TokenError::Overflow)?;
        let balance = SafeMath::add(read_balance(&e, &to), amount).ok_or(TokenError::Overflow)?;
        write_balance(&e, &to, balance);
        e.storage().instance().set(&DataKey::TotalSupply, &supply);

        e.events().publish((symbol_short!("mint"), minter, to), amount);
        Ok(())
    }

    // ========================================================================
    // Transfers
    // ========================================================================

    /// Allow `spender` to move up to `amount` out of `from`. Replaces any
    /// previous allowance.
    pub fn approve(
        e: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        from.require_auth();
        require_amount(amount)?;
        write_allowance(&e, &from, &spender, amount);
        e.events().publish((symbol_short!("approve"), from, spender), amount);
        Ok(())
    }

    pub fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&e, &from, &spender)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        require_amount(amount)?;
        move_balance(&e, &from, &to, amount)?;
        e.events().publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance.
    ///
    /// # Errors
    /// * `InsufficientAllowance` - If `from` has not approved enough for `spender`
    /// * `InsufficientBalance` - If `from` holds less than `amount`
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        require_amount(amount)?;

        let remaining = SafeMath::sub_non_negative(read_allowance(&e, &from, &spender), amount)
            .ok_or(TokenError::InsufficientAllowance)?;
        move_balance(&e, &from, &to, amount)?;
        write_allowance(&e, &from, &spender, remaining);

        e.events().publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    /// Destroy `amount` of `from`'s points.
    pub fn burn(e: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        require_amount(amount)?;

        let balance = SafeMath::sub_non_negative(read_balance(&e, &from), amount)
            .ok_or(TokenError::InsufficientBalance)?;
        let supply =
            SafeMath::sub_non_negative(read_supply(&e)?, amount).ok_or(TokenError::Overflow)?;
        write_balance(&e, &from, balance);
        e.storage().instance().set(&DataKey::TotalSupply, &supply);

        e.events().publish((symbol_short!("burn"), from), amount);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn total_supply(e: Env) -> Result<i128, TokenError> {
        read_supply(&e)
    }
}
