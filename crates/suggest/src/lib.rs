//! NUBAN Suggest - predict which banks could have issued an account number
//!
//! Given a 10-digit NUBAN account number, the engine runs the check-digit
//! algorithm against every bank in a registry, then ranks the arithmetic
//! matches with a tiered prioritization policy. Phone-number-shaped account
//! numbers (fintech wallets that reuse the holder's phone number) are routed
//! around the checksum entirely, since they are not NUBAN-derived.
//!
//! The engine is pure: no I/O, no shared state, safe to call concurrently.
//! The registry comes in through the `nuban-registry` provider seam.

pub mod error;
pub mod filter;
pub mod phone;
pub mod policy;
pub mod selector;

pub use error::SuggestError;
pub use filter::apply_priority_filter;
pub use phone::is_phone_number_format;
pub use policy::PrioritizationPolicy;
pub use selector::{suggest_possible_banks, Suggester};
