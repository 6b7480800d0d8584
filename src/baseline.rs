use crate::error::{LzcError, Result};
use crate::method::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cache key for a baseline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableKey {
    method: Method,
    alphabet_size: usize,
}

impl TableKey {
    /// Fails with `InvalidArgument` unless `alphabet_size > 1`.
    pub fn new(method: Method, alphabet_size: usize) -> Result<Self> {
        if alphabet_size < 2 {
            return Err(LzcError::InvalidArgument(format!(
                "alphabet size must be an integer > 1, got {}",
                alphabet_size
            )));
        }
        Ok(Self {
            method,
            alphabet_size,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Base file name of the table, e.g. `LZ76c_rand_a02`.
    pub fn file_stem(&self) -> String {
        format!("LZ{}c_rand_a{:02}", self.method.code(), self.alphabet_size)
    }

    pub(crate) fn unavailable(&self) -> LzcError {
        LzcError::DataUnavailable {
            method: self.method,
            alphabet_size: self.alphabet_size,
        }
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/a{}", self.method, self.alphabet_size)
    }
}

/// Statistics as stored on disk. Field names follow the published data
/// sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub nmax: usize,
    pub cmean: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvar: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmax: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsamples: Option<u64>,
}

/// Empirical complexity of random sequences for one method and alphabet
/// size, indexed by sequence length `1..=nmax`.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineTable {
    key: TableKey,
    mean: Vec<f64>,
    variance: Option<Vec<f64>>,
    max: Option<Vec<f64>>,
    samples: Option<u64>,
}

impl BaselineTable {
    /// Builds a table from decoded data, checking that every array covers
    /// exactly `1..=nmax`.
    pub fn from_data(key: TableKey, data: TableData) -> Result<Self> {
        if data.cmean.len() != data.nmax {
            return Err(LzcError::MalformedTable(format!(
                "{}: nmax is {} but cmean has {} entries",
                key,
                data.nmax,
                data.cmean.len()
            )));
        }
        for (name, column) in [("cvar", &data.cvar), ("cmax", &data.cmax)] {
            if let Some(column) = column {
                if column.len() != data.nmax {
                    return Err(LzcError::MalformedTable(format!(
                        "{}: nmax is {} but {} has {} entries",
                        key,
                        data.nmax,
                        name,
                        column.len()
                    )));
                }
            }
        }

        Ok(Self {
            key,
            mean: data.cmean,
            variance: data.cvar,
            max: data.cmax,
            samples: data.nsamples,
        })
    }

    /// Table holding means only.
    pub fn from_means(key: TableKey, mean: Vec<f64>) -> Self {
        Self {
            key,
            mean,
            variance: None,
            max: None,
            samples: None,
        }
    }

    pub fn key(&self) -> TableKey {
        self.key
    }

    /// Longest covered sequence length.
    pub fn nmax(&self) -> usize {
        self.mean.len()
    }

    /// Mean complexity at `length`, or `None` past `nmax`.
    ///
    /// Fails with `InvalidArgument` for length 0.
    pub fn lookup(&self, length: usize) -> Result<Option<f64>> {
        let index = index_of(length)?;
        Ok(self.mean.get(index).copied())
    }

    /// Complexity variance at `length`, when the table carries variances.
    pub fn variance_at(&self, length: usize) -> Result<Option<f64>> {
        let index = index_of(length)?;
        Ok(self.variance.as_ref().and_then(|v| v.get(index)).copied())
    }

    /// Maximum observed complexity at `length`, when the table carries
    /// maxima.
    pub fn max_at(&self, length: usize) -> Result<Option<f64>> {
        let index = index_of(length)?;
        Ok(self.max.as_ref().and_then(|v| v.get(index)).copied())
    }

    /// Random sequences sampled per length, if recorded.
    pub fn samples(&self) -> Option<u64> {
        self.samples
    }

    pub fn means(&self) -> &[f64] {
        &self.mean
    }
}

fn index_of(length: usize) -> Result<usize> {
    length.checked_sub(1).ok_or_else(|| {
        LzcError::InvalidArgument("sequence length must be a positive integer".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> TableKey {
        TableKey::new(Method::Lz76, 2).unwrap()
    }

    #[test]
    fn test_key_validation() {
        assert!(matches!(
            TableKey::new(Method::Lz78, 1),
            Err(LzcError::InvalidArgument(_))
        ));
        assert!(TableKey::new(Method::Lz78, 0).is_err());
        assert_eq!(TableKey::new(Method::Lz78, 4).unwrap().alphabet_size(), 4);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(key().file_stem(), "LZ76c_rand_a02");
        assert_eq!(
            TableKey::new(Method::Lz78, 12).unwrap().file_stem(),
            "LZ78c_rand_a12"
        );
    }

    #[test]
    fn test_lookup_coverage() {
        let table = BaselineTable::from_means(key(), vec![1.0, 2.0, 2.5]);
        assert_eq!(table.nmax(), 3);
        assert_eq!(table.lookup(1).unwrap(), Some(1.0));
        assert_eq!(table.lookup(3).unwrap(), Some(2.5));
        assert_eq!(table.lookup(4).unwrap(), None);
        assert_eq!(table.lookup(1000).unwrap(), None);
        assert!(matches!(
            table.lookup(0),
            Err(LzcError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_optional_columns() {
        let data = TableData {
            nmax: 2,
            cmean: vec![1.0, 2.0],
            cvar: Some(vec![0.0, 0.25]),
            cmax: None,
            nsamples: Some(10_000),
        };
        let table = BaselineTable::from_data(key(), data).unwrap();
        assert_eq!(table.variance_at(2).unwrap(), Some(0.25));
        assert_eq!(table.variance_at(3).unwrap(), None);
        assert_eq!(table.max_at(1).unwrap(), None);
        assert_eq!(table.samples(), Some(10_000));
    }

    #[test]
    fn test_rejects_inconsistent_columns() {
        let data = TableData {
            nmax: 3,
            cmean: vec![1.0, 2.0],
            cvar: None,
            cmax: None,
            nsamples: None,
        };
        assert!(matches!(
            BaselineTable::from_data(key(), data),
            Err(LzcError::MalformedTable(_))
        ));

        let data = TableData {
            nmax: 2,
            cmean: vec![1.0, 2.0],
            cvar: None,
            cmax: Some(vec![1.0]),
            nsamples: None,
        };
        assert!(BaselineTable::from_data(key(), data).is_err());
    }

    #[test]
    fn test_data_json_defaults() {
        let data: TableData = serde_json::from_str(r#"{"nmax": 1, "cmean": [1.0]}"#).unwrap();
        assert_eq!(data.cvar, None);
        assert_eq!(data.nsamples, None);
    }
}
