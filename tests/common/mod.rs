#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::{DateTime, TimeZone, Utc};
use finance_core::{
    config::ConfigManager,
    core::{services::LedgerService, time::FixedClock},
    storage::JsonStorage,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
}

/// Fresh directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Service over a JSON store in an isolated directory, with a frozen clock.
pub fn setup_test_env() -> (LedgerService, ConfigManager, PathBuf) {
    let base = temp_base();
    let config_manager =
        ConfigManager::with_base_dir(base.clone()).expect("create config manager for temp dir");
    let config = config_manager.load().expect("default config");
    let store = config_manager.store_path(&config);
    let service = LedgerService::with_clock(
        Box::new(JsonStorage::new(Some(store.clone()))),
        Box::new(FixedClock(fixed_now())),
    );
    (service, config_manager, store)
}
