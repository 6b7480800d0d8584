use crate::baseline::{BaselineTable, TableKey};
use crate::config::TableConfig;
use crate::error::{LzcError, Result};
use crate::method::Method;
use crate::normalizer;
use crate::sequence::Sequence;
use crate::source::{BaselineSource, DirectorySource};
use ahash::AHashMap as HashMap;
use parking_lot::Mutex;
use std::sync::{Arc, OnceLock};

/// Per-key cache slot. Its lock is held for the whole load so concurrent
/// first requests for one key trigger a single load.
type Slot = Arc<Mutex<Option<Arc<BaselineTable>>>>;

/// Lazily populated cache of baseline tables over a [`BaselineSource`].
///
/// Tables are loaded at most once per key and then shared; a failed load is
/// not remembered, so a later call retries. Nothing is ever evicted.
pub struct NormalizationTables<S> {
    source: S,
    slots: Mutex<HashMap<TableKey, Slot>>,
}

impl<S: BaselineSource> NormalizationTables<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the table for `(method, alphabet_size)`, loading it on first
    /// use.
    pub fn load(&self, method: Method, alphabet_size: usize) -> Result<Arc<BaselineTable>> {
        self.load_key(TableKey::new(method, alphabet_size)?)
    }

    pub fn load_key(&self, key: TableKey) -> Result<Arc<BaselineTable>> {
        let slot = Arc::clone(self.slots.lock().entry(key).or_default());

        let mut cached = slot.lock();
        if let Some(table) = cached.as_ref() {
            log::trace!("Baseline table {} served from cache", key);
            return Ok(Arc::clone(table));
        }

        let table = self.source.load(key)?;
        if table.key() != key {
            return Err(LzcError::MalformedTable(format!(
                "requested {} but source returned {}",
                key,
                table.key()
            )));
        }
        log::debug!("Loaded baseline table {} (nmax {})", key, table.nmax());

        let table = Arc::new(table);
        *cached = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Whether the table is already cached. Never triggers a load.
    pub fn is_cached(&self, method: Method, alphabet_size: usize) -> bool {
        let Ok(key) = TableKey::new(method, alphabet_size) else {
            return false;
        };
        let slot = self.slots.lock().get(&key).cloned();
        slot.is_some_and(|slot| slot.lock().is_some())
    }

    /// Mean random-sequence complexity at each requested length.
    ///
    /// Every argument is validated before any table is loaded.
    pub fn norm_factors(
        &self,
        lengths: &[usize],
        alphabet_size: usize,
        method: Method,
    ) -> Result<Vec<Option<f64>>> {
        let key = TableKey::new(method, alphabet_size)?;
        if lengths.iter().any(|&n| n == 0) {
            return Err(LzcError::InvalidArgument(
                "sequence lengths must be positive integers".into(),
            ));
        }

        let table = self.load_key(key)?;
        lengths.iter().map(|&n| table.lookup(n)).collect()
    }

    /// Normalizes a running complexity vector against the matching table.
    pub fn normalize(
        &self,
        running: &[usize],
        method: Method,
        alphabet_size: usize,
    ) -> Result<Vec<Option<f64>>> {
        let table = self.load(method, alphabet_size)?;
        Ok(normalizer::normalize(running, &table))
    }

    /// Running complexity of `seq`, normalized.
    ///
    /// The table is resolved first, so no parsing happens when it is
    /// unavailable.
    pub fn normalized_running(
        &self,
        seq: &Sequence,
        method: Method,
        alphabet_size: usize,
    ) -> Result<Vec<Option<f64>>> {
        let table = self.load(method, alphabet_size)?;
        Ok(method.running_complexity(seq).normalize(&table))
    }
}

/// Process-wide tables read from [`TableConfig::from_env`]'s directory.
pub fn global() -> &'static NormalizationTables<DirectorySource> {
    static GLOBAL: OnceLock<NormalizationTables<DirectorySource>> = OnceLock::new();
    GLOBAL.get_or_init(|| {
        let config = TableConfig::from_env();
        log::debug!("Baseline tables read from {}", config.data_dir.display());
        NormalizationTables::new(DirectorySource::from_config(&config))
    })
}
