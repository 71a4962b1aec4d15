use super::StoreAdapter;
use crate::error::{Result, TroveError};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_STORE_FILE: &str = "records.json";

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_STORE_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.file_name = name.to_string();
        }
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TroveError::Io)?;
        }
        Ok(())
    }
}

impl StoreAdapter for FileStore {
    fn load(&self) -> Result<Option<String>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TroveError::Io)?;
        Ok(Some(content))
    }

    fn save(&mut self, payload: &str) -> Result<()> {
        self.ensure_dir(&self.root)?;

        // Atomic write: the snapshot is either the old one or the new one,
        // never a torn file.
        let tmp = self.root.join(format!(".{}.tmp", self.file_name));
        fs::write(&tmp, payload).map_err(TroveError::Io)?;
        fs::rename(&tmp, self.data_path()).map_err(TroveError::Io)?;

        Ok(())
    }
}
