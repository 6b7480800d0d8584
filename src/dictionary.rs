use crate::error::{LzcError, Result};

/// Reserved byte joining phrases in a dictionary trace.
pub const SEPARATOR: u8 = b'.';

/// A contiguous run of the parsed input: 0-based offset and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phrase {
    pub offset: usize,
    pub len: usize,
}

impl Phrase {
    pub(crate) fn new(offset: usize, len: usize) -> Self {
        debug_assert!(len > 0, "Phrases are never empty");
        Self { offset, len }
    }

    /// One past the last covered position.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Ordered phrases produced by one parse, together with the parsed input.
///
/// `tail` holds trailing input that matched an existing phrase but could not
/// be extended into a new one before the input ended (LZ78 only). It is not
/// counted as a phrase, yet `reconstruct` still includes it, so every
/// dictionary reproduces its input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary<T> {
    symbols: Vec<T>,
    spans: Vec<Phrase>,
    tail: Option<Phrase>,
}

impl<T: Copy> Dictionary<T> {
    pub(crate) fn new(symbols: Vec<T>, spans: Vec<Phrase>, tail: Option<Phrase>) -> Self {
        debug_assert_eq!(
            spans.iter().map(|p| p.len).sum::<usize>() + tail.map_or(0, |t| t.len),
            symbols.len(),
            "Phrases must tile the input"
        );
        Self {
            symbols,
            spans,
            tail,
        }
    }

    /// Number of counted phrases.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Phrase boundaries in input order.
    pub fn spans(&self) -> &[Phrase] {
        &self.spans
    }

    pub fn get(&self, index: usize) -> Option<&[T]> {
        self.spans.get(index).map(|p| self.slice(*p))
    }

    /// Iterates over phrase contents in input order.
    pub fn phrases(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.spans.iter().map(move |p| self.slice(*p))
    }

    /// Uncounted trailing match, if the parse ended inside one.
    pub fn tail(&self) -> Option<&[T]> {
        self.tail.map(|p| self.slice(p))
    }

    /// Concatenation of every phrase followed by the tail.
    pub fn reconstruct(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.symbols.len());
        for phrase in self.phrases().chain(self.tail()) {
            out.extend_from_slice(phrase);
        }
        out
    }

    /// Length of the parsed input.
    pub fn input_len(&self) -> usize {
        self.symbols.len()
    }

    /// Trace capacity for this input: `2n + 2` slots.
    pub fn trace_capacity(&self) -> usize {
        2 * self.symbols.len() + 2
    }

    fn slice(&self, phrase: Phrase) -> &[T] {
        &self.symbols[phrase.offset..phrase.end()]
    }
}

impl Dictionary<u8> {
    /// Phrases as owned strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.phrases()
            .map(|p| String::from_utf8_lossy(p).into_owned())
            .collect()
    }

    /// Renders the counted phrases joined by [`SEPARATOR`].
    ///
    /// The trace is checked once against [`Dictionary::trace_capacity`]
    /// before anything is written.
    pub fn to_trace(&self) -> Result<String> {
        let needed = self.spans.iter().map(|p| p.len).sum::<usize>()
            + self.spans.len().saturating_sub(1);
        let capacity = self.trace_capacity();
        if needed > capacity {
            return Err(LzcError::BufferOverflow { needed, capacity });
        }

        let mut out = Vec::with_capacity(needed);
        for (i, phrase) in self.phrases().enumerate() {
            if phrase.contains(&SEPARATOR) {
                return Err(LzcError::InvalidArgument(format!(
                    "phrase {} contains the trace separator",
                    i + 1
                )));
            }
            if i > 0 {
                out.push(SEPARATOR);
            }
            out.extend_from_slice(phrase);
        }

        String::from_utf8(out)
            .map_err(|_| LzcError::InvalidArgument("phrases are not valid UTF-8".into()))
    }
}

/// Splits a trace back into its phrases, dropping empty fragments.
pub fn split_trace(trace: &str) -> impl Iterator<Item = &str> {
    trace
        .split(SEPARATOR as char)
        .filter(|fragment| !fragment.is_empty())
}
