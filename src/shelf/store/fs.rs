use super::BookStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const EMPTY_CATALOG: &str = "[]";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories and an empty
    /// catalog file if they are missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        if let Some(parent) = store.path.parent() {
            store.ensure_dir(parent)?;
        }
        store.ensure_file()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn ensure_file(&self) -> Result<()> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "creating empty catalog file");
            fs::write(&self.path, EMPTY_CATALOG).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = format!(".books-{}.tmp", Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        self.ensure_file()?;
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;

        match serde_json::from_str::<Vec<Book>>(&content) {
            Ok(books) => Ok(books),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "catalog file is malformed, starting with an empty catalog"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let content = serde_json::to_string_pretty(books).map_err(ShelfError::Serialization)?;

        // Write to a sibling then rename, so a crash never leaves a torn file
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                tracing::warn!(
                    path = %tmp_path.display(),
                    error = %cleanup,
                    "could not remove temporary catalog file"
                );
            }
            return Err(ShelfError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = books.len(), "catalog saved");
        Ok(())
    }
}
