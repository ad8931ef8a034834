use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    core::utils::{write_atomic, PathResolver},
    errors::{FinanceError, Result},
    ledger::Ledger,
};

use super::LedgerRepository;

/// On-disk layout: user id mapped to that user's ledger.
pub type UserLedgers = BTreeMap<String, Ledger>;

/// Single JSON document holding every user's ledger.
pub struct JsonStorage {
    path: PathBuf,
    // Serializes the read-replace-write cycle in `save`.
    write_lock: Mutex<()>,
}

impl JsonStorage {
    /// Uses `path` when given, otherwise the default store under the application directory.
    pub fn new(path: Option<PathBuf>) -> Self {
        let path = path.unwrap_or_else(|| PathResolver::store_file_in(&PathResolver::base_dir()));
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full user map; a missing file is an empty store.
    pub fn load_all(&self) -> Result<UserLedgers> {
        read_store(&self.path)
    }

    pub fn users(&self) -> Result<Vec<String>> {
        Ok(self.load_all()?.into_keys().collect())
    }
}

impl LedgerRepository for JsonStorage {
    fn load(&self, user: &str) -> Result<Ledger> {
        let mut users = self.load_all()?;
        let ledger = users.remove(user).unwrap_or_default();
        tracing::trace!(user, path = %self.path.display(), "ledger loaded");
        Ok(ledger)
    }

    fn save(&self, user: &str, ledger: &Ledger) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| FinanceError::Storage("store write lock poisoned".into()))?;
        let mut users = self.load_all()?;
        users.insert(user.to_string(), ledger.clone());
        write_atomic(&self.path, &serde_json::to_string_pretty(&users)?)?;
        tracing::debug!(user, path = %self.path.display(), "ledger saved");
        Ok(())
    }
}

fn read_store(path: &Path) -> Result<UserLedgers> {
    if !path.exists() {
        return Ok(UserLedgers::new());
    }
    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        return Ok(UserLedgers::new());
    }
    serde_json::from_str(&data).map_err(|err| {
        FinanceError::Storage(format!("corrupt store `{}`: {}", path.display(), err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Goal;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty_store() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(Some(dir.path().join("users.json")));
        assert!(storage.load_all().unwrap().is_empty());
        assert!(storage.load("alice").unwrap().is_empty());
    }

    #[test]
    fn save_preserves_other_users() {
        let dir = tempdir().unwrap();
        let storage = JsonStorage::new(Some(dir.path().join("users.json")));
        let mut alice = Ledger::new();
        alice.add_goal(Goal::new("Car", 5000.0));
        storage.save("alice", &alice).unwrap();
        storage.save("bob", &Ledger::new()).unwrap();

        assert_eq!(storage.users().unwrap(), vec!["alice", "bob"]);
        assert_eq!(storage.load("alice").unwrap(), alice);
    }

    #[test]
    fn corrupt_store_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{ not json").unwrap();
        let storage = JsonStorage::new(Some(path));
        let err = storage.load("alice").expect_err("corrupt file must fail");
        assert!(matches!(err, FinanceError::Storage(_)));
    }
}
