use crate::baseline::{BaselineTable, TableData, TableKey};
use crate::config::TableConfig;
use crate::error::{LzcError, Result};
use ahash::AHashMap as HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Where baseline tables come from.
///
/// A missing table is an expected condition and must be reported as
/// [`LzcError::DataUnavailable`], not as an I/O failure.
pub trait BaselineSource: Send + Sync {
    fn load(&self, key: TableKey) -> Result<BaselineTable>;
}

/// Reads `<dir>/<file_stem>.json` files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(&config.data_dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: TableKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.file_stem()))
    }
}

impl BaselineSource for DirectorySource {
    fn load(&self, key: TableKey) -> Result<BaselineTable> {
        let path = self.path_for(key);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(key.unavailable()),
            Err(e) => return Err(e.into()),
        };

        let data: TableData = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            log::warn!("Unreadable baseline table {}: {}", path.display(), e);
            LzcError::MalformedTable(format!("{}: {}", path.display(), e))
        })?;
        BaselineTable::from_data(key, data)
    }
}

/// Tables held in memory, for tests and for callers that ship their own
/// statistics.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<TableKey, BaselineTable>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: BaselineTable) {
        self.tables.insert(table.key(), table);
    }

    pub fn with(mut self, table: BaselineTable) -> Self {
        self.insert(table);
        self
    }
}

impl BaselineSource for MemorySource {
    fn load(&self, key: TableKey) -> Result<BaselineTable> {
        self.tables
            .get(&key)
            .cloned()
            .ok_or_else(|| key.unavailable())
    }
}
