//! Tiered ranking of candidate banks
//!
//! Candidates are partitioned into tier 1, tier 2, and everything else,
//! preserving registry order inside each partition. The result is the
//! capped tier-1 block, then the capped tier-2 block, then just enough
//! unranked records to reach the minimum, truncated to the overall maximum.

use nuban_core::Bank;

use crate::policy::PrioritizationPolicy;

/// Rank and truncate `candidates` according to `policy`.
///
/// Pure and total. Partitioning is by membership test, not removal: a code
/// listed in both tier sets is claimed by tier 1. Filtering an
/// already-filtered, already-ordered set is a no-op.
pub fn apply_priority_filter(candidates: &[Bank], policy: &PrioritizationPolicy) -> Vec<Bank> {
    let mut tier1 = Vec::new();
    let mut tier2 = Vec::new();
    let mut other = Vec::new();

    for bank in candidates {
        if policy.tier1_codes.contains(&bank.code) {
            tier1.push(bank.clone());
        } else if policy.tier2_codes.contains(&bank.code) {
            tier2.push(bank.clone());
        } else {
            other.push(bank.clone());
        }
    }

    tier1.truncate(policy.max_tier1_results);
    tier2.truncate(policy.max_tier2_results);

    let mut result = tier1;
    result.append(&mut tier2);

    if result.len() < policy.minimum_suggestions {
        let shortfall = policy.minimum_suggestions - result.len();
        result.extend(other.into_iter().take(shortfall));
    }

    result.truncate(policy.maximum_suggestions);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(code: &str) -> Bank {
        Bank::new(format!("Bank {code}"), code)
    }

    // 5 tier-1, 5 tier-2, 5 other under the default policy
    fn full_house() -> Vec<Bank> {
        [
            "044", "058", "057", "033", "011", // tier 1
            "070", "214", "221", "232", "035", // tier 2
            "023", "101", "082", "215", "076", // other
        ]
        .iter()
        .map(|c| bank(c))
        .collect()
    }

    fn codes_of(banks: &[Bank]) -> Vec<&str> {
        banks.iter().map(|b| b.code.as_str()).collect()
    }

    #[test]
    fn test_tier_ordering_and_caps() {
        let policy = PrioritizationPolicy::default();
        let result = apply_priority_filter(&full_house(), &policy);

        // 4 tier-1 then 2 tier-2, no unranked records: the total already
        // meets the minimum before backfill is considered.
        assert_eq!(
            codes_of(&result),
            vec!["044", "058", "057", "033", "070", "214"]
        );
    }

    #[test]
    fn test_minimum_backfill_from_other() {
        let policy = PrioritizationPolicy::default();
        let candidates = vec![bank("058"), bank("023"), bank("101"), bank("082"), bank("215")];

        let result = apply_priority_filter(&candidates, &policy);

        // 1 tier-1 match, no tier-2: backfill 2 unranked in registry order.
        assert_eq!(codes_of(&result), vec!["058", "023", "101"]);
    }

    #[test]
    fn test_no_backfill_past_available() {
        let policy = PrioritizationPolicy::default();
        let candidates = vec![bank("058")];

        let result = apply_priority_filter(&candidates, &policy);
        assert_eq!(codes_of(&result), vec!["058"]);
    }

    #[test]
    fn test_maximum_truncates_whole_result() {
        let mut policy = PrioritizationPolicy::default();
        policy.maximum_suggestions = 2;

        let result = apply_priority_filter(&full_house(), &policy);
        assert_eq!(codes_of(&result), vec!["044", "058"]);
    }

    #[test]
    fn test_tier1_claims_overlapping_code() {
        let mut policy = PrioritizationPolicy::default();
        policy.tier2_codes.insert("058".to_string());

        let result = apply_priority_filter(&[bank("058")], &policy);
        assert_eq!(codes_of(&result), vec!["058"]);

        // Still only counted once even with room in both tiers.
        let result = apply_priority_filter(&full_house(), &policy);
        assert_eq!(result.iter().filter(|b| b.code == "058").count(), 1);
    }

    #[test]
    fn test_idempotent_on_filtered_input() {
        let policy = PrioritizationPolicy::default();
        let once = apply_priority_filter(&full_house(), &policy);
        let twice = apply_priority_filter(&once, &policy);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_candidates() {
        let policy = PrioritizationPolicy::default();
        assert!(apply_priority_filter(&[], &policy).is_empty());
    }
}
