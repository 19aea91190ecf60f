//! Phone-number-shaped account detection
//!
//! Several Nigerian fintechs issue the holder's mobile number (leading zero
//! dropped) as the account number. Those accounts carry no NUBAN check
//! digit, so they must be recognized before any checksum work happens.

use nuban_core::checksum::normalize;

use crate::policy::PrioritizationPolicy;

/// Whether `account_number` looks like a phone-derived account.
///
/// Total function: anything that is not a 10-digit number after stripping
/// spaces and hyphens is simply not phone-shaped.
pub fn is_phone_number_format(account_number: &str, policy: &PrioritizationPolicy) -> bool {
    let account = normalize(account_number);
    if account.len() != 10 || !account.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    policy.valid_phone_prefixes.contains(&account[..3])
}
