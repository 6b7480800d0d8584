use crate::dictionary::SEPARATOR;
use crate::error::{LzcError, Result};
use std::fmt;
use std::str::FromStr;

/// An immutable, non-empty string of printable ASCII symbols.
///
/// Symbols are single bytes. The trace separator `.` is reserved and can
/// never be a symbol, so every phrase trace produced from a `Sequence`
/// splits back unambiguously.
///
/// Positions handed to [`Sequence::symbol`] are 1-based; slices returned by
/// [`Sequence::as_bytes`] are ordinary 0-based Rust slices.
///
/// # Example
///
/// ```
/// use lzc_rs::Sequence;
///
/// let seq: Sequence = "0110".parse().unwrap();
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.alphabet_size(), 2);
/// assert_eq!(seq.symbol(1), Some(b'0'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    symbols: Box<[u8]>,
}

/// Threshold rule used by [`Sequence::binarise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threshold {
    #[default]
    Median,
    Mean,
}

impl Sequence {
    /// Validates and wraps a symbol string.
    ///
    /// Fails with `InvalidArgument` when the input is empty, or holds a
    /// byte that is not printable ASCII, or holds the separator.
    pub fn new(symbols: impl AsRef<[u8]>) -> Result<Self> {
        let symbols = symbols.as_ref();
        if symbols.is_empty() {
            return Err(LzcError::InvalidArgument(
                "sequence must hold at least one symbol".into(),
            ));
        }
        if let Some(pos) = symbols
            .iter()
            .position(|&b| !b.is_ascii_graphic() || b == SEPARATOR)
        {
            return Err(LzcError::InvalidArgument(format!(
                "symbol {:?} at position {} is not a valid symbol",
                symbols[pos] as char,
                pos + 1
            )));
        }
        Ok(Self {
            symbols: symbols.into(),
        })
    }

    /// Thresholds a numeric series into a `0`/`1` sequence.
    ///
    /// Values strictly above the threshold become `1`, all others `0`.
    pub fn binarise(values: &[f64], threshold: Threshold) -> Result<Self> {
        if values.is_empty() {
            return Err(LzcError::InvalidArgument(
                "cannot binarise an empty series".into(),
            ));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(LzcError::InvalidArgument(format!(
                "value at position {} is not finite",
                pos + 1
            )));
        }

        let cut = match threshold {
            Threshold::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Threshold::Median => median(values),
        };

        let symbols: Vec<u8> = values
            .iter()
            .map(|&v| if v > cut { b'1' } else { b'0' })
            .collect();
        Ok(Self {
            symbols: symbols.into(),
        })
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: a `Sequence` holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at a 1-based position.
    pub fn symbol(&self, position: usize) -> Option<u8> {
        position
            .checked_sub(1)
            .and_then(|i| self.symbols.get(i))
            .copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    /// Count of distinct symbols actually present.
    pub fn alphabet_size(&self) -> usize {
        let mut seen = [false; 256];
        let mut count = 0;
        for &b in self.symbols.iter() {
            if !seen[b as usize] {
                seen[b as usize] = true;
                count += 1;
            }
        }
        count
    }
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

impl FromStr for Sequence {
    type Err = LzcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&[u8]> for Sequence {
    type Error = LzcError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every symbol is printable ASCII.
        for &b in self.symbols.iter() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
