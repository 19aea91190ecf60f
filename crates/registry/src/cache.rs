//! Single-flight registry cache
//!
//! The bank list rarely changes within a process lifetime, so providers are
//! wrapped in a compute-once cell: concurrent first-callers trigger the
//! underlying load at most once and every caller observes the same snapshot.
//! A failed load is cached too; retry policy belongs to whoever owns the
//! cache, not to the readers.

use std::sync::OnceLock;

use nuban_core::Bank;

use crate::error::RegistryResult;
use crate::provider::RegistryProvider;

/// Lazily-loaded, shareable view of a provider's bank list.
///
/// # Example
/// ```
/// use nuban_registry::{CachedRegistry, EmbeddedProvider};
///
/// let registry = CachedRegistry::new(EmbeddedProvider::new());
/// let first = registry.get().unwrap().as_ptr();
/// let second = registry.get().unwrap().as_ptr();
/// assert_eq!(first, second); // same snapshot, loaded once
/// ```
pub struct CachedRegistry<P> {
    provider: P,
    cell: OnceLock<RegistryResult<Vec<Bank>>>,
}

impl<P: RegistryProvider> CachedRegistry<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cell: OnceLock::new(),
        }
    }

    /// Borrow the cached bank list, loading it on first access.
    pub fn get(&self) -> RegistryResult<&[Bank]> {
        match self.cell.get_or_init(|| self.provider.load()) {
            Ok(banks) => Ok(banks.as_slice()),
            Err(e) => Err(e.clone()),
        }
    }

    /// Whether the underlying load has already happened.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<P: RegistryProvider> RegistryProvider for CachedRegistry<P>
where
    P: Send + Sync,
{
    fn load(&self) -> RegistryResult<Vec<Bank>> {
        self.get().map(|banks| banks.to_vec())
    }
}
