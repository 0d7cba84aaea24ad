//! Administrator and role membership stored in contract storage.
//!
//! The administrator lives in instance storage under [`AccessControl::ADMIN_KEY`].
//! Role membership is one persistent entry per member, keyed by
//! `(role, member)`; a missing entry means "not a member".

use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub struct AccessControl;

impl AccessControl {
    pub const ADMIN_KEY: Symbol = symbol_short!("admin");

    /// Returns the stored administrator, if the contract has been initialized.
    pub fn admin(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&Self::ADMIN_KEY)
    }

    pub fn has_admin(e: &Env) -> bool {
        e.storage().instance().has(&Self::ADMIN_KEY)
    }

    /// Replace the administrator. Callers are responsible for authorization.
    pub fn set_admin(e: &Env, admin: &Address) {
        e.storage().instance().set(&Self::ADMIN_KEY, admin);
    }

    pub fn is_admin(e: &Env, principal: &Address) -> bool {
        match Self::admin(e) {
            Some(admin) => admin == *principal,
            None => false,
        }
    }

    pub fn has_role(e: &Env, role: &Symbol, member: &Address) -> bool {
        e.storage()
            .persistent()
            .get::<_, bool>(&(role.clone(), member.clone()))
            .unwrap_or(false)
    }

    /// Grant or revoke `role` for `member`. Revoking removes the entry.
    pub fn set_role(e: &Env, role: &Symbol, member: &Address, granted: bool) {
        let key = (role.clone(), member.clone());
        if granted {
            e.storage().persistent().set(&key, &true);
        } else {
            e.storage().persistent().remove(&key);
        }
    }
}
