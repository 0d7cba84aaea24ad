//! Notifications published by the engine. One per successful mutating call;
//! events from a failed invocation are discarded by the host.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

pub const MERCHANT: Symbol = symbol_short!("merchant");
pub const REWARD_ADDED: Symbol = symbol_short!("rwd_add");
pub const AVAILABILITY: Symbol = symbol_short!("avail");
pub const ISSUED: Symbol = symbol_short!("issued");
pub const REDEEMED: Symbol = symbol_short!("redeemed");
pub const PAUSED: Symbol = symbol_short!("paused");
pub const RATE: Symbol = symbol_short!("rate");
pub const ADMIN: Symbol = symbol_short!("admin");
pub const BURNED: Symbol = symbol_short!("burned");

pub fn merchant_status_changed(e: &Env, merchant: Address, authorized: bool) {
    e.events().publish((MERCHANT, merchant), authorized);
}

pub fn reward_added(e: &Env, id: u64, name: String, cost: i128, stock: u32) {
    e.events().publish((REWARD_ADDED, id), (name, cost, stock));
}

pub fn availability_changed(e: &Env, id: u64, available: bool) {
    e.events().publish((AVAILABILITY, id), available);
}

pub fn reward_issued(e: &Env, customer: Address, amount: i128, merchant: Address) {
    e.events().publish((ISSUED, customer), (amount, merchant));
}

pub fn reward_redeemed(e: &Env, customer: Address, reward_id: u64, cost: i128) {
    e.events().publish((REDEEMED, customer), (reward_id, cost));
}

pub fn pause_changed(e: &Env, paused: bool) {
    e.events().publish((PAUSED,), paused);
}

pub fn rate_changed(e: &Env, old_rate: i128, new_rate: i128) {
    e.events().publish((RATE,), (old_rate, new_rate));
}

pub fn admin_changed(e: &Env, previous: Address, admin: Address) {
    e.events().publish((ADMIN,), (previous, admin));
}

pub fn collected_burned(e: &Env, amount: i128) {
    e.events().publish((BURNED,), amount);
}
