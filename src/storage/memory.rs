use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use crate::{
    errors::{FinanceError, Result},
    ledger::Ledger,
};

use super::LedgerRepository;

/// Process-local repository, handy for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    ledgers: Mutex<HashMap<String, Ledger>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored ledger.
    pub fn user_count(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Ledger>>> {
        self.ledgers
            .lock()
            .map_err(|_| FinanceError::Storage("in-memory store lock poisoned".into()))
    }
}

impl LedgerRepository for InMemoryStorage {
    fn load(&self, user: &str) -> Result<Ledger> {
        Ok(self.lock()?.get(user).cloned().unwrap_or_default())
    }

    fn save(&self, user: &str, ledger: &Ledger) -> Result<()> {
        self.lock()?.insert(user.to_string(), ledger.clone());
        Ok(())
    }
}
