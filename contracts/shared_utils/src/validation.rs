use soroban_sdk::{Address, Env, String};

/// The all-zero Stellar account, used as the null principal.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub struct Validation;

impl Validation {
    pub fn zero_address(e: &Env) -> Address {
        Address::from_string(&String::from_str(e, ZERO_ACCOUNT))
    }

    pub fn is_zero_address(e: &Env, address: &Address) -> bool {
        *address == Self::zero_address(e)
    }

    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    pub fn is_non_negative(amount: i128) -> bool {
        amount >= 0
    }
}
