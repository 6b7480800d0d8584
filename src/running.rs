use crate::baseline::BaselineTable;
use crate::normalizer;
use std::ops::Deref;

/// Complexity of every prefix: element `i` is the complexity of the first
/// `i + 1` symbols.
///
/// Non-decreasing, and the last element equals the complexity of the whole
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunningComplexity(Vec<usize>);

impl RunningComplexity {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, complexity: usize) {
        debug_assert!(
            self.0.last().map_or(true, |&last| last <= complexity),
            "Running complexity must not decrease"
        );
        self.0.push(complexity);
    }

    /// Complexity of the full input.
    pub fn total(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    /// Complexity of the prefix with the given length (1-based).
    pub fn at_length(&self, length: usize) -> Option<usize> {
        length.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    /// Divides each element by the baseline mean at the same length.
    pub fn normalize(&self, table: &BaselineTable) -> Vec<Option<f64>> {
        normalizer::normalize(&self.0, table)
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for RunningComplexity {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}
