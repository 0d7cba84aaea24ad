//! Checked arithmetic on token amounts.
//!
//! Every helper returns `None` instead of wrapping or panicking so callers can
//! surface a typed overflow error.

pub struct SafeMath;

impl SafeMath {
    pub fn mul(a: i128, b: i128) -> Option<i128> {
        a.checked_mul(b)
    }

    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Subtraction that also refuses to go below zero.
    pub fn sub_non_negative(a: i128, b: i128) -> Option<i128> {
        match a.checked_sub(b) {
            Some(v) if v >= 0 => Some(v),
            _ => None,
        }
    }
}
