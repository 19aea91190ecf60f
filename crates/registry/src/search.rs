//! Registry lookups

use nuban_core::Bank;

/// Case-insensitive substring search over bank names.
///
/// Registry order is preserved; an empty needle matches everything.
pub fn search_by_name<'a>(registry: &'a [Bank], needle: &str) -> Vec<&'a Bank> {
    let needle = needle.to_lowercase();
    registry
        .iter()
        .filter(|bank| bank.name.to_lowercase().contains(&needle))
        .collect()
}

/// Look up a bank by its code, case-insensitively.
pub fn find_by_code<'a>(registry: &'a [Bank], code: &str) -> Option<&'a Bank> {
    registry.iter().find(|bank| bank.same_code(code))
}
