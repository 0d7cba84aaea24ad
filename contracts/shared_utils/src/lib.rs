#![no_std]

//! Shared utility library for the loyalty ledger contracts
//!
//! This library provides the helpers both the engine and the token ledger
//! build on:
//! - Access control (single administrator, role membership)
//! - Pause switch
//! - Checked math
//! - Argument validation

pub mod access_control;
pub mod math;
pub mod pausable;
pub mod validation;


pub use access_control::AccessControl;
pub use math::SafeMath;
pub use pausable::Pausable;
pub use validation::Validation;
