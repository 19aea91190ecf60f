//! Suggestion entry point
//!
//! Orchestrates one pass: validate the input shape, route phone-shaped
//! accounts to the fintech carve-out, otherwise scan the registry with the
//! check-digit engine and rank the matches.

use nuban_core::{checksum, Bank};
use nuban_registry::RegistryProvider;

use crate::error::{SuggestError, SuggestResult};
use crate::filter::apply_priority_filter;
use crate::phone::is_phone_number_format;
use crate::policy::PrioritizationPolicy;

/// Suggest which banks could have issued `raw`.
///
/// Phone-number-shaped accounts return the registry's fintech records
/// directly, bypassing checksum validation and tier ranking: phone-derived
/// account numbers are not NUBAN-checksum-consistent by construction, so
/// the checksum scan would wrongly eliminate the right banks. When the
/// phone-prefix table and the phone-bank-code table disagree (a caller can
/// override one without the other) and the carve-out matches nothing, the
/// call falls through to the checksum scan rather than returning empty.
///
/// All other accounts get a full linear scan with no early exit; several
/// banks can share a valid checksum and every match is meaningful.
pub fn suggest_possible_banks(
    raw: &str,
    registry: &[Bank],
    policy: &PrioritizationPolicy,
) -> SuggestResult<Vec<Bank>> {
    if raw.trim().is_empty() {
        return Err(SuggestError::InvalidAccountNumber(
            "account number is empty".to_string(),
        ));
    }

    let account = checksum::normalize(raw);
    if account.len() != 10 || !account.chars().all(|c| c.is_ascii_digit()) {
        return Err(SuggestError::InvalidAccountNumber(format!(
            "expected 10 digits, got {:?}",
            account
        )));
    }

    if registry.is_empty() {
        return Err(SuggestError::RegistryUnavailable(
            "registry is empty".to_string(),
        ));
    }

    if is_phone_number_format(&account, policy) {
        let fintech: Vec<Bank> = registry
            .iter()
            .filter(|bank| policy.phone_number_bank_codes.contains(&bank.code))
            .cloned()
            .collect();
        if !fintech.is_empty() {
            tracing::debug!(
                account = %account,
                matches = fintech.len(),
                "Phone-shaped account, returning fintech carve-out"
            );
            return Ok(fintech);
        }
        tracing::warn!(
            account = %account,
            "Phone-shaped account but no registry record in phone_number_bank_codes; \
             falling back to checksum scan"
        );
    }

    let candidates: Vec<Bank> = registry
        .iter()
        .filter(|bank| checksum::is_valid_for_bank(&account, &bank.code))
        .cloned()
        .collect();
    tracing::debug!(account = %account, matches = candidates.len(), "Checksum scan complete");

    Ok(apply_priority_filter(&candidates, policy))
}

/// Convenience wrapper owning a registry provider and a policy.
///
/// Provider failures are re-wrapped at this boundary so callers see the one
/// suggestion failure family. Nothing is retried here; pair the provider
/// with [`nuban_registry::CachedRegistry`] to load once per process.
pub struct Suggester<P> {
    provider: P,
    policy: PrioritizationPolicy,
}

impl<P: RegistryProvider> Suggester<P> {
    /// Create a suggester with the default Nigerian policy.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            policy: PrioritizationPolicy::default(),
        }
    }

    /// Replace the policy.
    pub fn with_policy(mut self, policy: PrioritizationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &PrioritizationPolicy {
        &self.policy
    }

    /// Suggest issuing banks for `raw`.
    pub fn suggest(&self, raw: &str) -> SuggestResult<Vec<Bank>> {
        let registry = self
            .provider
            .load()
            .map_err(|e| SuggestError::RegistryUnavailable(e.to_string()))?;
        suggest_possible_banks(raw, &registry, &self.policy)
    }
}
