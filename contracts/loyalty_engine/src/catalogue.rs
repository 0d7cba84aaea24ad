use soroban_sdk::{contracttype, Env, String};

use crate::{DataKey, LoyaltyError};

/// A redeemable catalogue entry.
///
/// `cost == 0` marks an absent entry. `stock == 0` means unlimited only when
/// the reward was created without a stock cap (`limited == false`); a limited
/// reward at `stock == 0` is sold out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardItem {
    pub id: u64,
    pub name: String,
    pub cost: i128,
    pub stock: u32,
    pub limited: bool,
    pub available: bool,
}

impl RewardItem {
    pub fn new(id: u64, name: String, cost: i128, stock: u32) -> Self {
        RewardItem {
            id,
            name,
            cost,
            stock,
            limited: stock != 0,
            available: true,
        }
    }

    /// The all-default record returned for ids with no entry.
    pub fn empty(e: &Env) -> Self {
        RewardItem {
            id: 0,
            name: String::from_str(e, ""),
            cost: 0,
            stock: 0,
            limited: false,
            available: false,
        }
    }

    pub fn exists(&self) -> bool {
        self.cost > 0
    }

    /// Checks that one unit can be handed out. Does not mutate.
    pub fn check_redeemable(&self) -> Result<(), LoyaltyError> {
        if !self.exists() {
            return Err(LoyaltyError::NotFound);
        }
        if !self.available {
            return Err(LoyaltyError::RewardUnavailable);
        }
        if self.limited && self.stock == 0 {
            return Err(LoyaltyError::OutOfStock);
        }
        Ok(())
    }

    /// Consume one unit of stock. Unlimited rewards are left untouched.
    pub fn take_one(&mut self) -> Result<(), LoyaltyError> {
        if !self.limited {
            return Ok(());
        }
        self.stock = self.stock.checked_sub(1).ok_or(LoyaltyError::OutOfStock)?;
        Ok(())
    }
}

// ─── Storage helpers ──────────────────────────────────────────────────────────

pub fn read_reward(e: &Env, id: u64) -> Option<RewardItem> {
    e.storage()
        .persistent()
        .get::<_, RewardItem>(&DataKey::Reward(id))
}

/// Present entry at `id`, or `NotFound`.
pub fn require_reward(e: &Env, id: u64) -> Result<RewardItem, LoyaltyError> {
    match read_reward(e, id) {
        Some(item) if item.exists() => Ok(item),
        _ => Err(LoyaltyError::NotFound),
    }
}

pub fn write_reward(e: &Env, item: &RewardItem) {
    e.storage()
        .persistent()
        .set(&DataKey::Reward(item.id), item);
}
