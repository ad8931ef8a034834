//! Ledger repositories keyed by user identity.

pub mod json_backend;
pub mod memory;

use crate::{errors::Result, ledger::Ledger};

/// Abstraction over persistence backends capable of storing one ledger per user.
pub trait LedgerRepository: Send + Sync {
    /// Loads the user's ledger, or an empty one when nothing is stored yet.
    fn load(&self, user: &str) -> Result<Ledger>;

    /// Replaces the stored ledger for `user` wholesale.
    fn save(&self, user: &str, ledger: &Ledger) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use memory::InMemoryStorage;
