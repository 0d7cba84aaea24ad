//! Typed handle to the external token ledger.
//!
//! The engine never re-derives minting authority per call: the ledger address
//! is recorded once at initialization and every economic operation goes
//! through [`TokenLedger`], which acts as the engine's own account
//! (`current_contract_address`) for minting, collecting and burning.

use soroban_sdk::{contractclient, Address, Env};

use crate::{DataKey, LoyaltyError};

/// Subset of the token ledger interface the engine depends on.
#[allow(dead_code)]
#[contractclient(name = "TokenLedgerClient")]
pub trait TokenLedgerInterface {
    fn mint(env: Env, minter: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
    fn balance(env: Env, id: Address) -> i128;
}

pub struct TokenLedger<'a> {
    client: TokenLedgerClient<'a>,
    engine: Address,
}

impl<'a> TokenLedger<'a> {
    pub fn load(e: &'a Env) -> Result<Self, LoyaltyError> {
        let token = e
            .storage()
            .instance()
            .get::<_, Address>(&DataKey::Token)
            .ok_or(LoyaltyError::NotInitialized)?;
        Ok(Self {
            client: TokenLedgerClient::new(e, &token),
            engine: e.current_contract_address(),
        })
    }

    /// Credit `amount` to `to`, minting as the engine.
    pub fn mint(&self, to: &Address, amount: i128) -> Result<(), LoyaltyError> {
        match self.client.try_mint(&self.engine, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(LoyaltyError::MintFailed),
        }
    }

    /// Pull `amount` from `from` into the engine's account. Requires a prior
    /// approval from `from` to the engine.
    pub fn collect(&self, from: &Address, amount: i128) -> Result<(), LoyaltyError> {
        match self.client.try_transfer_from(&self.engine, from, &self.engine, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(LoyaltyError::TransferFailed),
        }
    }

    /// Destroy `amount` of the tokens held by the engine.
    pub fn burn_collected(&self, amount: i128) -> Result<(), LoyaltyError> {
        match self.client.try_burn(&self.engine, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(LoyaltyError::BurnFailed),
        }
    }

    pub fn balance(&self, id: &Address) -> i128 {
        self.client.balance(id)
    }

    pub fn collected(&self) -> i128 {
        self.client.balance(&self.engine)
    }
}
