// crates/quicksearch-core/src/store/json_file.rs
use super::SettingsStore;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_STORE_FILENAME: &str = "settings.json";

/// `<data dir>/quicksearch/settings.json`, or `./settings.json` on platforms
/// without a data directory.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("quicksearch"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_STORE_FILENAME)
}

type Slots = BTreeMap<String, Vec<String>>;

/// Settings kept in one JSON object on disk: `{ "<key>": ["...", ...] }`.
///
/// Every `save` rewrites the whole file, keeping other keys intact. A missing
/// file reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_store_path`].
    pub fn open_default() -> Self {
        Self::new(default_store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<Slots> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Slots::new()),
            Err(e) => return Err(e.into()),
        };
        let slots = serde_json::from_reader(BufReader::new(file))?;
        Ok(slots)
    }

    fn write_slots(&self, slots: &Slots) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(slots)?;
        // write-then-rename so a crash never leaves a half-written file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Vec<String>> {
        let mut slots = self.read_slots()?;
        let values = slots.remove(key).unwrap_or_default();
        debug!(path = %self.path.display(), key, len = values.len(), "loaded settings");
        Ok(values)
    }

    fn save(&mut self, key: &str, values: &[String]) -> Result<()> {
        let mut slots = self.read_slots()?;
        slots.insert(key.to_string(), values.to_vec());
        self.write_slots(&slots)?;
        debug!(path = %self.path.display(), key, len = values.len(), "saved settings");
        Ok(())
    }
}
