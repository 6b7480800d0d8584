use std::env;
use std::path::PathBuf;

/// Environment variable naming the baseline data directory.
pub const DATA_DIR_ENV: &str = "LZC_DATA_DIR";

/// Location of the baseline tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub data_dir: PathBuf,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl TableConfig {
    /// Reads [`DATA_DIR_ENV`], falling back to the default directory.
    pub fn from_env() -> Self {
        match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self {
                data_dir: PathBuf::from(dir),
            },
            _ => Self::default(),
        }
    }
}
