//! NUBAN Registry - bank-list providers and lookup helpers
//!
//! This crate owns everything about *obtaining* the bank list: parsing the
//! JSON shape, loading from a file or from the bundled dataset, caching the
//! parsed list so concurrent first-callers trigger at most one load, and
//! name/code lookups. The suggestion engine only ever borrows the result.

pub mod cache;
pub mod error;
pub mod provider;
pub mod search;

pub use cache::CachedRegistry;
pub use error::RegistryError;
pub use provider::{EmbeddedProvider, FileProvider, RegistryProvider, StaticProvider};
pub use search::{find_by_code, search_by_name};
