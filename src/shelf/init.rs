use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "SHELF_CONFIG_DIR";

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
    pub store_path: PathBuf,
}

/// Where `config.json` lives.
///
/// `SHELF_CONFIG_DIR` wins, then the platform config directory, then a
/// `.shelf` directory under `cwd` when the platform gives us nothing.
pub fn config_dir(cwd: &Path) -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(".shelf"))
}

/// Builds the production API: loads config, opens the catalog file and
/// reads it into memory.
///
/// `store_override` replaces the configured catalog path. Relative paths
/// resolve against `cwd`.
pub fn initialize(cwd: &Path, store_override: Option<PathBuf>) -> Result<ShelfContext> {
    let config = ShelfConfig::load(config_dir(cwd))?;

    let store_path = match store_override {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => config.resolve_store_path(cwd),
    };

    let store = FileStore::open(&store_path)?;
    let api = ShelfApi::open(store)?;

    Ok(ShelfContext {
        api,
        config,
        store_path,
    })
}
