//! Two-state pause switch kept in instance storage.

use soroban_sdk::{symbol_short, Env, Symbol};

pub struct Pausable;

impl Pausable {
    pub const PAUSED_KEY: Symbol = symbol_short!("paused");

    /// Returns `true` if the contract is currently paused. Unset reads as running.
    pub fn is_paused(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&Self::PAUSED_KEY)
            .unwrap_or(false)
    }

    pub fn set_paused(e: &Env, paused: bool) {
        e.storage().instance().set(&Self::PAUSED_KEY, &paused);
    }

    pub fn pause(e: &Env) {
        Self::set_paused(e, true);
    }

    pub fn unpause(e: &Env) {
        Self::set_paused(e, false);
    }
}
