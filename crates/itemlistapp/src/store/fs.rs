use super::ItemStore;
use crate::error::{ItemsError, Result};
use crate::model::Item;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Production store: one JSON array in one file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // `data.json` has an empty parent; temp files then go in the cwd.
    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ItemsError::Io)?;
        }
        Ok(())
    }
}

impl ItemStore for FileStore {
    fn read_items(&self) -> Result<Vec<Item>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ItemsError::Io(e)),
        };

        match serde_json::from_str::<Vec<Item>>(&content) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Item store is not a valid item list, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_items(&mut self, items: &[Item]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(items).map_err(ItemsError::Serialization)?;

        // Atomic write: a crash leaves either the old file or the new one
        let tmp_file = dir.join(format!(".items-{}.tmp", Uuid::new_v4()));
        let replaced =
            fs::write(&tmp_file, content).and_then(|()| fs::rename(&tmp_file, &self.path));
        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_file);
            return Err(ItemsError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), count = items.len(), "Wrote item store");
        Ok(())
    }
}
