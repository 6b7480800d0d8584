//! # lzc-rs - Lempel-Ziv Complexity
//!
//! LZ76 (Kaspar-Schuster) and LZ78 complexity of finite symbol sequences, as
//! a measure of structure versus randomness in symbolic and binarised
//! time-series data.
//!
//! Both parsers are incremental: pushing one symbol updates the complexity
//! without rescanning, so the complexity of every prefix (the running
//! complexity) costs the same as the complexity of the whole input.
//! Complexities can be normalized against the mean complexity of random
//! sequences of the same length and alphabet size.
//!
//! ## Example
//!
//! ```
//! use lzc_rs::{lz76, lz78, Sequence};
//!
//! let seq: Sequence = "000101000101111010001010100010101000000010000010".parse().unwrap();
//!
//! assert_eq!(lz76::complexity(&seq), 9);
//!
//! let (c, dict) = lz78::complexity_with_dictionary(&seq);
//! assert_eq!(c, 16);
//! assert_eq!(dict.to_strings()[..4], ["0", "00", "1", "01"]);
//!
//! let running = lz78::running_complexity(&seq);
//! assert_eq!(running.total(), 16);
//! ```
//!
//! ## Performance
//!
//! - LZ76: amortized O(alphabet) per symbol via an online suffix automaton
//! - LZ78: O(1) expected per symbol via a hashed prefix trie
//! - Baseline tables are loaded once per (method, alphabet size) and shared

mod automaton;
pub mod batch;
mod baseline;
mod config;
pub mod dictionary;
mod error;
pub mod lz76;
pub mod lz78;
mod method;
pub mod normalizer;
mod running;
mod sequence;
mod source;
pub mod tables;

#[cfg(test)]
mod tests;

pub use baseline::{BaselineTable, TableData, TableKey};
pub use config::{TableConfig, DATA_DIR_ENV};
pub use dictionary::{Dictionary, Phrase, SEPARATOR};
pub use error::{LzcError, Result};
pub use lz76::Lz76;
pub use lz78::Lz78;
pub use method::Method;
pub use running::RunningComplexity;
pub use sequence::{Sequence, Threshold};
pub use source::{BaselineSource, DirectorySource, MemorySource};
pub use tables::NormalizationTables;
