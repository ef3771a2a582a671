use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::StorageBackend;
use crate::error::{Result, TrakzError};
use crate::model::HobbyItem;

const DATA_FILE: &str = "items.json";

pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(TrakzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_collection(&self) -> Result<Vec<HobbyItem>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(TrakzError::Io)?;
        let items: Vec<HobbyItem> =
            serde_json::from_str(&content).map_err(TrakzError::Serialization)?;
        Ok(items)
    }

    fn save_collection(&self, items: &[HobbyItem]) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;

        let content = serde_json::to_string_pretty(items).map_err(TrakzError::Serialization)?;

        // Atomic write: a crash mid-save must not truncate the collection.
        let tmp_file = self.data_dir.join(format!(".items-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(TrakzError::Io)?;
        fs::rename(&tmp_file, self.data_file()).map_err(TrakzError::Io)?;

        Ok(())
    }
}
