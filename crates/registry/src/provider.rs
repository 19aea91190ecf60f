//! Registry providers - where the bank list comes from
//!
//! A provider yields an ordered list of [`Bank`] records. The suggestion
//! engine is parameterized over this trait, so file-on-disk, bundled, and
//! test registries all flow through one code path instead of one service
//! variant per source.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use nuban_core::Bank;

use crate::error::{RegistryError, RegistryResult};

/// Bank registry bundled into the binary.
///
/// Covers the Nigerian deposit money banks plus the fintech institutions
/// that issue phone-number-shaped accounts. Fintech entries may carry NIP
/// institution codes longer than the 3/5-digit NUBAN code spaces; those
/// accounts are only ever reached through the phone-number carve-out, never
/// through checksum validation.
const BUNDLED_BANKS: &str = include_str!("../data/banks.json");

/// A source of bank-registry records.
///
/// Implementations must yield a non-empty, ordered list or a
/// [`RegistryError`] that distinguishes "source missing" from "source
/// malformed". Providers never deduplicate; data quality is owned upstream.
pub trait RegistryProvider: Send + Sync {
    /// Load the full bank list.
    fn load(&self) -> RegistryResult<Vec<Bank>>;
}

fn parse_banks(source: &str) -> RegistryResult<Vec<Bank>> {
    let banks: Vec<Bank> =
        serde_json::from_str(source).map_err(|e| RegistryError::Malformed(e.to_string()))?;
    if banks.is_empty() {
        return Err(RegistryError::Empty);
    }
    tracing::debug!(count = banks.len(), "Parsed bank registry");
    Ok(banks)
}

/// Loads the bank list from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RegistryProvider for FileProvider {
    fn load(&self) -> RegistryResult<Vec<Bank>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                RegistryError::NotFound(self.path.display().to_string())
            } else {
                RegistryError::Io(e.to_string())
            }
        })?;
        parse_banks(&content)
    }
}

/// Serves the bank list bundled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedProvider;

impl EmbeddedProvider {
    pub fn new() -> Self {
        Self
    }
}

impl RegistryProvider for EmbeddedProvider {
    fn load(&self) -> RegistryResult<Vec<Bank>> {
        parse_banks(BUNDLED_BANKS)
    }
}

/// A fixed in-memory list, mainly for tests and callers that source the
/// registry elsewhere.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    banks: Vec<Bank>,
}

impl StaticProvider {
    pub fn new(banks: Vec<Bank>) -> Self {
        Self { banks }
    }
}

impl RegistryProvider for StaticProvider {
    fn load(&self) -> RegistryResult<Vec<Bank>> {
        if self.banks.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(self.banks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_registry_parses() {
        let banks = EmbeddedProvider::new().load().unwrap();
        assert!(!banks.is_empty());
        assert!(banks.iter().any(|b| b.same_code("058")));
    }

    #[test]
    fn test_embedded_registry_has_unique_codes() {
        let banks = EmbeddedProvider::new().load().unwrap();
        for (i, bank) in banks.iter().enumerate() {
            assert!(
                !banks[i + 1..].iter().any(|other| other.same_code(&bank.code)),
                "duplicate code {}",
                bank.code
            );
        }
    }

    #[test]
    fn test_file_provider_roundtrip() {
        let banks = vec![
            Bank::new("GTBank", "058"),
            Bank::with_long_code("Access Bank", "044", "044150149"),
        ];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&banks).unwrap()).unwrap();

        let loaded = FileProvider::new(file.path()).load().unwrap();
        assert_eq!(loaded, banks);
    }

    #[test]
    fn test_file_provider_missing_file() {
        let err = FileProvider::new("/definitely/not/here.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_file_provider_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = FileProvider::new(file.path()).load().unwrap_err();
        assert!(matches!(err, RegistryError::Malformed(_)));
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = FileProvider::new(file.path()).load().unwrap_err();
        assert_eq!(err, RegistryError::Empty);
    }
}
