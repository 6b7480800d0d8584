//! Lempel-Ziv 1976 complexity in the Kaspar-Schuster formulation.
//!
//! The input is produced by alternating copy and insert steps. Each
//! production copies the longest substring that already occurs earlier
//! (the source may overlap the copy itself) and then inserts one symbol.
//! Complexity is the number of productions; a copy cut short by the end of
//! the input still counts as one.
//!
//! The copy search is driven by a suffix automaton of the symbols seen so
//! far, so each pushed symbol costs amortized O(alphabet) and no prefix is
//! ever rescanned.

use crate::automaton::{StateKey, SuffixAutomaton};
use crate::dictionary::{Dictionary, Phrase};
use crate::running::RunningComplexity;
use crate::sequence::Sequence;
use std::hash::Hash;

/// Incremental LZ76 parser.
///
/// # Example
///
/// ```
/// use lzc_rs::Lz76;
///
/// let mut lz = Lz76::new();
/// let running: Vec<usize> = "0001101001000101".bytes().map(|b| lz.push(b)).collect();
///
/// assert_eq!(lz.complexity(), 6);
/// assert_eq!(running.last(), Some(&6));
/// ```
#[derive(Debug, Clone)]
pub struct Lz76<T> {
    automaton: SuffixAutomaton<T>,
    symbols: Vec<T>,
    /// Completed productions.
    phrases: Vec<Phrase>,
    /// Offset where the open production started.
    phrase_start: usize,
    /// Automaton state of the copy matched so far in the open production.
    matched: StateKey,
    matched_len: usize,
}

impl<T: Copy + Eq + Hash> Lz76<T> {
    pub fn new() -> Self {
        let automaton = SuffixAutomaton::new();
        let matched = automaton.root();
        Self {
            automaton,
            symbols: Vec::new(),
            phrases: Vec::new(),
            phrase_start: 0,
            matched,
            matched_len: 0,
        }
    }

    /// Appends one symbol and returns the complexity of the input so far.
    pub fn push(&mut self, value: T) -> usize {
        let position = self.symbols.len();
        self.symbols.push(value);

        // The copy may continue if the extended match already occurs in the
        // input before this symbol.
        match self.automaton.transition(self.matched, value) {
            Some(next) => {
                self.automaton.extend(value);
                self.matched_len += 1;
                self.matched = self.automaton.canonical(next, self.matched_len);
            }
            None => {
                self.automaton.extend(value);
                self.phrases
                    .push(Phrase::new(self.phrase_start, position + 1 - self.phrase_start));
                self.phrase_start = position + 1;
                self.matched = self.automaton.root();
                self.matched_len = 0;
            }
        }

        debug_assert!(self.automaton.state_count() <= 2 * self.symbols.len() + 1);
        self.complexity()
    }

    /// Pushes every value, discarding intermediate complexities.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }

    /// Complexity of the input pushed so far, counting an open production.
    pub fn complexity(&self) -> usize {
        self.phrases.len() + usize::from(self.phrase_start < self.symbols.len())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Phrases of the current parse. An open production is closed at the
    /// end of the input and included as the last phrase.
    pub fn dictionary(&self) -> Dictionary<T> {
        let mut spans = self.phrases.clone();
        if self.phrase_start < self.symbols.len() {
            spans.push(Phrase::new(
                self.phrase_start,
                self.symbols.len() - self.phrase_start,
            ));
        }
        Dictionary::new(self.symbols.clone(), spans, None)
    }
}

impl<T: Copy + Eq + Hash> Default for Lz76<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// LZ76 complexity of the whole sequence.
pub fn complexity(seq: &Sequence) -> usize {
    let mut lz = Lz76::new();
    lz.extend(seq.as_bytes().iter().copied());
    lz.complexity()
}

/// LZ76 complexity and the phrase dictionary.
pub fn complexity_with_dictionary(seq: &Sequence) -> (usize, Dictionary<u8>) {
    let mut lz = Lz76::new();
    lz.extend(seq.as_bytes().iter().copied());
    (lz.complexity(), lz.dictionary())
}

/// LZ76 complexity of every prefix.
pub fn running_complexity(seq: &Sequence) -> RunningComplexity {
    running_complexity_with_dictionary(seq).0
}

/// LZ76 complexity of every prefix and the phrase dictionary of the whole
/// sequence.
pub fn running_complexity_with_dictionary(seq: &Sequence) -> (RunningComplexity, Dictionary<u8>) {
    let mut lz = Lz76::new();
    let mut running = RunningComplexity::with_capacity(seq.len());
    for &b in seq.as_bytes() {
        running.push(lz.push(b));
    }
    (running, lz.dictionary())
}
