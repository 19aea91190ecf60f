//! CLI commands

use nuban_core::checksum;
use nuban_registry::{search_by_name, RegistryProvider};
use nuban_suggest::{suggest_possible_banks, PrioritizationPolicy};
use serde_json::json;

/// Suggest issuing banks for an account number
pub fn suggest(
    provider: &dyn RegistryProvider,
    account: &str,
    policy: &PrioritizationPolicy,
) -> Result<(), anyhow::Error> {
    let registry = provider.load()?;
    let banks = suggest_possible_banks(account, &registry, policy)?;
    println!("{}", serde_json::to_string_pretty(&banks)?);
    Ok(())
}

/// Check one (account, bank code) pair against the check-digit algorithm
pub fn validate(account: &str, bank_code: &str) -> Result<(), anyhow::Error> {
    let valid = checksum::is_valid_for_bank(account, bank_code);
    let output = json!({
        "account": checksum::normalize(account),
        "bank_code": checksum::normalize(bank_code),
        "valid": valid,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Case-insensitive name search over the registry
pub fn search(provider: &dyn RegistryProvider, name: &str) -> Result<(), anyhow::Error> {
    let registry = provider.load()?;
    let hits = search_by_name(&registry, name);
    if hits.is_empty() {
        anyhow::bail!("No bank matching {name:?}");
    }
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

/// Print the whole registry
pub fn list(provider: &dyn RegistryProvider) -> Result<(), anyhow::Error> {
    let registry = provider.load()?;
    println!("{}", serde_json::to_string_pretty(&registry)?);
    Ok(())
}
