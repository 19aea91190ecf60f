//! Prioritization policy with configurable tier tables
//!
//! Earlier generations of this service kept the tier lists and phone-prefix
//! tables as process-wide statics. They are now an explicit value object
//! passed into every entry point, with a documented Nigerian default, so a
//! caller can override the policy per call and tests never fight globals.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ranking and carve-out configuration for bank suggestions.
///
/// All fields can be overridden via a JSON policy file; missing fields fall
/// back to the documented defaults.
///
/// `max_tier1_results + max_tier2_results >= minimum_suggestions` is the
/// recommended shape but is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizationPolicy {
    /// Most likely issuers, ranked first (default: the big-five DMBs)
    #[serde(default = "default_tier1_codes")]
    pub tier1_codes: HashSet<String>,

    /// Secondary issuers, ranked after tier 1
    #[serde(default = "default_tier2_codes")]
    pub tier2_codes: HashSet<String>,

    /// Fintech institutions that issue phone-number-shaped accounts
    #[serde(default = "default_phone_number_bank_codes")]
    pub phone_number_bank_codes: HashSet<String>,

    /// Nigerian mobile prefixes (leading zero dropped) marking an account
    /// number as phone-derived
    #[serde(default = "default_valid_phone_prefixes")]
    pub valid_phone_prefixes: HashSet<String>,

    /// Cap on tier-1 records in a result
    #[serde(default = "default_max_tier1_results")]
    pub max_tier1_results: usize,

    /// Cap on tier-2 records in a result
    #[serde(default = "default_max_tier2_results")]
    pub max_tier2_results: usize,

    /// Backfill from unranked matches up to this floor
    #[serde(default = "default_minimum_suggestions")]
    pub minimum_suggestions: usize,

    /// Hard cap on the whole result
    #[serde(default = "default_maximum_suggestions")]
    pub maximum_suggestions: usize,
}

fn codes(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn default_tier1_codes() -> HashSet<String> {
    // Access, GTBank, Zenith, UBA, First Bank
    codes(&["044", "058", "057", "033", "011"])
}

fn default_tier2_codes() -> HashSet<String> {
    // Fidelity, FCMB, Stanbic IBTC, Sterling, Wema, Union, Ecobank
    codes(&["070", "214", "221", "232", "035", "032", "050"])
}

fn default_phone_number_bank_codes() -> HashSet<String> {
    // OPay, PalmPay, Paga, Moniepoint, Kuda
    codes(&["100004", "100033", "100002", "50515", "50211"])
}

fn default_valid_phone_prefixes() -> HashSet<String> {
    codes(&[
        "701", "702", "703", "704", "705", "706", "707", "708", "709", "802", "803", "804",
        "805", "806", "807", "808", "809", "810", "811", "812", "813", "814", "815", "816",
        "817", "818", "901", "902", "903", "904", "905", "906", "907", "908", "909", "911",
        "912", "913", "915", "916", "917", "918",
    ])
}

fn default_max_tier1_results() -> usize {
    4
}

fn default_max_tier2_results() -> usize {
    2
}

fn default_minimum_suggestions() -> usize {
    3
}

fn default_maximum_suggestions() -> usize {
    6
}

impl Default for PrioritizationPolicy {
    fn default() -> Self {
        Self {
            tier1_codes: default_tier1_codes(),
            tier2_codes: default_tier2_codes(),
            phone_number_bank_codes: default_phone_number_bank_codes(),
            valid_phone_prefixes: default_valid_phone_prefixes(),
            max_tier1_results: default_max_tier1_results(),
            max_tier2_results: default_max_tier2_results(),
            minimum_suggestions: default_minimum_suggestions(),
            maximum_suggestions: default_maximum_suggestions(),
        }
    }
}

impl PrioritizationPolicy {
    /// Load a policy from a JSON file; absent fields keep their defaults.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_policy() {
        let policy = PrioritizationPolicy::default();

        assert!(policy.tier1_codes.contains("058"));
        assert!(policy.tier2_codes.contains("070"));
        assert!(policy.phone_number_bank_codes.contains("50211"));
        assert!(policy.phone_number_bank_codes.contains("100002"));
        assert!(policy.valid_phone_prefixes.contains("803"));
        assert_eq!(policy.max_tier1_results, 4);
        assert_eq!(policy.max_tier2_results, 2);
        assert_eq!(policy.minimum_suggestions, 3);
        assert_eq!(policy.maximum_suggestions, 6);
    }

    #[test]
    fn test_tiers_are_disjoint_by_default() {
        let policy = PrioritizationPolicy::default();
        assert!(policy.tier1_codes.is_disjoint(&policy.tier2_codes));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "maximum_suggestions": 10 }"#;
        let policy: PrioritizationPolicy = serde_json::from_str(json).unwrap();

        assert_eq!(policy.maximum_suggestions, 10);
        assert_eq!(policy.max_tier1_results, 4);
        assert!(policy.tier1_codes.contains("044"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let policy = PrioritizationPolicy::default();
        let json = serde_json::to_string_pretty(&policy).unwrap();
        let parsed: PrioritizationPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, parsed);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "minimum_suggestions": 1 }}"#).unwrap();

        let policy = PrioritizationPolicy::from_file(file.path()).unwrap();
        assert_eq!(policy.minimum_suggestions, 1);
    }
}
