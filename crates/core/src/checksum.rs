//! NUBAN check-digit engine
//!
//! A NUBAN account number is 10 digits: a 9-digit serial followed by a check
//! digit derived from the serial and the issuing bank's code. The algorithm
//! weights the 6-digit bank code plus the serial (15 digits total) with a
//! fixed multiplier sequence and folds the sum mod 10.
//!
//! Everything here is a pure function with no state and no I/O; callers may
//! invoke these from any number of threads without synchronization.
//! Malformed input is modeled as `false`/`None`, never as an error:
//! "not valid for this bank" is an expected outcome, not a failure.

/// Positional multipliers for the 15-digit (bank code + serial) field
const WEIGHTS: [u32; 15] = [3, 7, 3, 3, 7, 3, 3, 7, 3, 3, 7, 3, 3, 7, 3];

/// Strip spaces and hyphens from a raw account number or bank code.
///
/// Only formatting characters are removed; anything else is kept so that
/// downstream digit checks still reject genuinely malformed input.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Expand a bank code into its uniform 6-digit form.
///
/// A 3-digit deposit-money-bank code is left-padded with `000`; a 5-digit
/// other-financial-institution code is prefixed with `9`. The two prefixes
/// keep the numbering spaces disjoint inside one 6-digit field. Any other
/// shape yields `None`.
pub fn expand_bank_code(code: &str) -> Option<String> {
    let code = normalize(code);
    if !is_ascii_digits(&code) {
        return None;
    }
    match code.len() {
        3 => Some(format!("000{code}")),
        5 => Some(format!("9{code}")),
        _ => None,
    }
}

/// Compute the check digit for a bank code and a 9-digit serial.
///
/// Returns `None` when the bank code is not a valid 3- or 5-digit code or
/// the serial is not exactly 9 digits.
///
/// # Example
/// ```
/// use nuban_core::checksum::check_digit;
///
/// // GTBank (058) expands to 000058
/// assert_eq!(check_digit("058", "123456789"), Some(6));
/// ```
pub fn check_digit(bank_code: &str, serial: &str) -> Option<u8> {
    let expanded = expand_bank_code(bank_code)?;
    let serial = normalize(serial);
    if serial.len() != 9 || !is_ascii_digits(&serial) {
        return None;
    }

    let sum: u32 = expanded
        .chars()
        .chain(serial.chars())
        .zip(WEIGHTS)
        .map(|(c, w)| c.to_digit(10).unwrap_or(0) * w)
        .sum();

    // The outer mod folds the sum%10 == 0 case (which would yield 10) to 0.
    Some(((10 - sum % 10) % 10) as u8)
}

/// Decide whether `account_number` is arithmetically valid for `bank_code`.
///
/// Preconditions are checked internally: both inputs are normalized, the
/// account must be exactly 10 digits and the bank code 3 or 5 digits.
/// Malformed input yields `false`, never a panic or an error.
pub fn is_valid_for_bank(account_number: &str, bank_code: &str) -> bool {
    let account = normalize(account_number);
    if account.len() != 10 || !is_ascii_digits(&account) {
        return false;
    }

    let expected = match check_digit(bank_code, &account[..9]) {
        Some(d) => d,
        None => return false,
    };

    // Index 9 is ASCII-digit by the shape check above.
    account.as_bytes()[9] - b'0' == expected
}
