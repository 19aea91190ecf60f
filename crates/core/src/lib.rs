//! NUBAN Core - Domain types and check-digit engine
//!
//! This crate contains the fundamental pieces used across the workspace:
//! - `Bank`: An issuing institution record (name + CBN-assigned code)
//! - `checksum`: The NUBAN check-digit algorithm

pub mod bank;
pub mod checksum;

pub use bank::Bank;
pub use checksum::{check_digit, expand_bank_code, is_valid_for_bank, normalize};
