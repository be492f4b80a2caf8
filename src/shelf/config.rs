use crate::error::{Result, ShelfError};
use crate::model::SearchField;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_PATH: &str = "data/books.json";

/// Keys understood by [`ShelfConfig::get`] and [`ShelfConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["store-path", "search-field"];

/// User settings kept in `config.json`. Fields absent from the file take
/// their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Catalog file location. Relative paths resolve against the working directory.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Field used by `search` when none is given on the command line
    #[serde(default)]
    pub search_field: SearchField,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            search_field: SearchField::default(),
        }
    }
}

impl ShelfConfig {
    /// A missing `config.json` yields the defaults. A present but unparsable
    /// one is an error, unlike the catalog file.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let content = match fs::read_to_string(config_dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ShelfError::Io(e)),
        };
        serde_json::from_str(&content).map_err(ShelfError::Serialization)
    }

    /// Writes `config.json`, creating `config_dir` first.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;

        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(ShelfError::Io)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "store-path" => Some(self.store_path.display().to_string()),
            "search-field" => Some(self.search_field.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "store-path" => {
                if value.trim().is_empty() {
                    return Err(ShelfError::Config("store-path cannot be empty".into()));
                }
                self.store_path = PathBuf::from(value);
            }
            "search-field" => {
                self.search_field = value
                    .parse()
                    .map_err(|e: ShelfError| ShelfError::Config(e.to_string()))?;
            }
            other => {
                return Err(ShelfError::Config(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }

    /// Resolves the catalog file against `cwd` when it is relative.
    pub fn resolve_store_path(&self, cwd: &Path) -> PathBuf {
        if self.store_path.is_absolute() {
            self.store_path.clone()
        } else {
            cwd.join(&self.store_path)
        }
    }
}
