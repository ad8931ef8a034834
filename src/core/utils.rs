use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".finance_core";
const HOME_ENV: &str = "FINANCE_CORE_HOME";
const STORE_FILE: &str = "users.json";
const CONFIG_FILE: &str = "config.json";

/// Resolves where the application keeps its store and configuration.
pub struct PathResolver;

impl PathResolver {
    /// Application data directory: `FINANCE_CORE_HOME`, else `~/.finance_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    /// Default JSON store mapping user ids to ledgers.
    pub fn store_file_in(base: &Path) -> PathBuf {
        base.join(STORE_FILE)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Sibling path used to stage writes before an atomic rename.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a temporary sibling and renames it over `path`.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_keeps_original_extension() {
        let tmp = tmp_path(Path::new("/data/users.json"));
        assert_eq!(tmp, PathBuf::from("/data/users.json.tmp"));
    }

    #[test]
    fn write_atomic_creates_parent_and_leaves_no_tmp() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nested").join("users.json");
        write_atomic(&target, "{}").expect("write succeeds");
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
        assert!(!tmp_path(&target).exists());
    }
}
