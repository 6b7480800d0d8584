//! Lempel-Ziv 1978 complexity.
//!
//! Each new phrase is the longest phrase already in the dictionary extended
//! by one symbol. Complexity is the number of phrases. Phrases form a prefix
//! trie, so tracking the current match is a single edge lookup per symbol.
//!
//! Input that ends in the middle of a known phrase leaves an uncounted
//! tail: no new phrase can be formed from it.

use crate::dictionary::{Dictionary, Phrase};
use crate::running::RunningComplexity;
use crate::sequence::Sequence;
use ahash::AHashMap as HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Trie node id. The root is 0; node `i > 0` is phrase `i - 1`.
type NodeId = usize;

const ROOT: NodeId = 0;

/// Incremental LZ78 parser.
///
/// # Example
///
/// ```
/// use lzc_rs::Lz78;
///
/// let mut lz = Lz78::new();
/// lz.extend("0100011".bytes());
///
/// // 0.1.00.01 with "1" left over
/// assert_eq!(lz.complexity(), 4);
/// assert_eq!(lz.dictionary().tail(), Some(&b"1"[..]));
/// ```
#[derive(Debug, Clone)]
pub struct Lz78<T> {
    /// Trie edges keyed by parent node and symbol.
    children: HashMap<(NodeId, T), NodeId>,
    symbols: Vec<T>,
    phrases: Vec<Phrase>,
    phrase_start: usize,
    /// Node of the phrase matched so far.
    cursor: NodeId,
}

impl<T: Copy + Eq + Hash> Lz78<T> {
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            symbols: Vec::new(),
            phrases: Vec::new(),
            phrase_start: 0,
            cursor: ROOT,
        }
    }

    /// Appends one symbol and returns the number of phrases so far.
    pub fn push(&mut self, value: T) -> usize {
        self.symbols.push(value);

        match self.children.entry((self.cursor, value)) {
            Entry::Occupied(e) => {
                self.cursor = *e.get();
            }
            Entry::Vacant(e) => {
                let end = self.symbols.len();
                self.phrases
                    .push(Phrase::new(self.phrase_start, end - self.phrase_start));
                e.insert(self.phrases.len());
                self.phrase_start = end;
                self.cursor = ROOT;
            }
        }

        self.complexity()
    }

    /// Pushes every value, discarding intermediate complexities.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }

    /// Number of phrases inserted so far. A trailing partial match is not
    /// counted.
    pub fn complexity(&self) -> usize {
        self.phrases.len()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Phrases in insertion order, with any trailing partial match as the
    /// dictionary tail.
    pub fn dictionary(&self) -> Dictionary<T> {
        let tail = (self.phrase_start < self.symbols.len()).then(|| {
            Phrase::new(self.phrase_start, self.symbols.len() - self.phrase_start)
        });
        debug_assert_eq!(tail.is_some(), self.cursor != ROOT);
        Dictionary::new(self.symbols.clone(), self.phrases.clone(), tail)
    }
}

impl<T: Copy + Eq + Hash> Default for Lz78<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// LZ78 complexity of the whole sequence.
pub fn complexity(seq: &Sequence) -> usize {
    let mut lz = Lz78::new();
    lz.extend(seq.as_bytes().iter().copied());
    lz.complexity()
}

/// LZ78 complexity and the phrase dictionary.
pub fn complexity_with_dictionary(seq: &Sequence) -> (usize, Dictionary<u8>) {
    let mut lz = Lz78::new();
    lz.extend(seq.as_bytes().iter().copied());
    (lz.complexity(), lz.dictionary())
}

/// LZ78 complexity of every prefix.
pub fn running_complexity(seq: &Sequence) -> RunningComplexity {
    running_complexity_with_dictionary(seq).0
}

/// LZ78 complexity of every prefix and the phrase dictionary of the whole
/// sequence.
pub fn running_complexity_with_dictionary(seq: &Sequence) -> (RunningComplexity, Dictionary<u8>) {
    let mut lz = Lz78::new();
    let mut running = RunningComplexity::with_capacity(seq.len());
    for &b in seq.as_bytes() {
        running.push(lz.push(b));
    }
    (running, lz.dictionary())
}
