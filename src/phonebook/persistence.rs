use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use log::warn;

use crate::{
    Error,
    error::Result,
};

use super::favorites::KvStore;

/// File-backed key-value store under the configured data directory, the
/// device-local analogue of a browser's local storage: one JSON record file,
/// surviving restarts, never shared across devices.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn open(dir: &Path) -> Result<Self> {
        let metadata = match fs::metadata(dir) {
            Ok(metadata) => metadata,
            Err(_) => {
                fs::create_dir_all(dir).map_err(|e| {
                    Error::Argument(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
                fs::metadata(dir).map_err(|e| {
                    Error::Argument(format!("Failed to get metadata for path {}: {e}", dir.display()))
                })?
            }
        };

        if !metadata.is_dir() {
            Err(Error::Argument(format!("Path {} is not a directory", dir.display())))?;
        }

        Ok(Self {
            path: dir.join("appdata.json")
        })
    }

    fn read_records(&self) -> Result<BTreeMap<String, String>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Ok(BTreeMap::new()),
        };

        serde_json::from_str(&data).map_err(|e| {
            Error::Store(format!("Corrupt record file {}: {e}", self.path.display()))
        })
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_records()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut records = self.read_records().unwrap_or_else(|e| {
            warn!("{}, starting over with an empty record file", e);
            BTreeMap::new()
        });
        records.insert(key.to_string(), value.to_string());

        let data = serde_json::to_string(&records)?;
        fs::write(&self.path, data).map_err(|e| {
            Error::Store(format!("Failed to write record file {}: {e}", self.path.display()))
        })
    }
}
