//! Bank - An issuing institution record
//!
//! Banks are identified by their CBN-assigned code: 3 digits for deposit
//! money banks (DMB), 5 digits for other financial institutions (OFI).
//! Records are immutable once loaded; the registry crate owns them and the
//! suggestion engine only ever borrows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bank-registry record.
///
/// Two records refer to the same bank iff their `code` values compare equal
/// case-insensitively (codes are numeric, so the fold is about honoring the
/// identity contract, not about real-world data).
///
/// # Example
/// ```
/// use nuban_core::Bank;
///
/// let gtb = Bank::new("Guaranty Trust Bank", "058");
/// assert!(gtb.same_code("058"));
/// assert_eq!(gtb.to_string(), "Guaranty Trust Bank (058)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    /// Human-readable institution name
    #[serde(alias = "Name", alias = "NAME")]
    pub name: String,

    /// 3-digit DMB or 5-digit OFI code
    #[serde(alias = "Code", alias = "CODE")]
    pub code: String,

    /// CBN long code, where the source data carries one. Unused by the
    /// suggestion logic but must round-trip.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "longCode",
        alias = "LongCode",
        alias = "Long_Code",
        alias = "LONG_CODE"
    )]
    pub long_code: Option<String>,
}

impl Bank {
    /// Create a record without a long code
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            long_code: None,
        }
    }

    /// Create a record with a long code
    pub fn with_long_code(
        name: impl Into<String>,
        code: impl Into<String>,
        long_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            long_code: Some(long_code.into()),
        }
    }

    /// Case-insensitive code identity check
    #[inline]
    pub fn same_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }

    /// Whether this is a deposit money bank (3-digit code)
    pub fn is_dmb(&self) -> bool {
        self.code.len() == 3
    }

    /// Whether this is an other-financial-institution entry (5-digit code)
    pub fn is_ofi(&self) -> bool {
        self.code.len() == 5
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
