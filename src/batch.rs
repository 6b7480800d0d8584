//! Complexity of many independent sequences, computed in parallel.

use crate::method::Method;
use crate::running::RunningComplexity;
use crate::sequence::Sequence;
use rayon::prelude::*;

/// Complexity of each sequence, in input order.
pub fn complexities(method: Method, sequences: &[Sequence]) -> Vec<usize> {
    sequences
        .par_iter()
        .map(|seq| method.complexity(seq))
        .collect()
}

/// Running complexity of each sequence, in input order.
pub fn running_complexities(method: Method, sequences: &[Sequence]) -> Vec<RunningComplexity> {
    sequences
        .par_iter()
        .map(|seq| method.running_complexity(seq))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequences() -> Vec<Sequence> {
        ["0", "0001101001000101", "0101010101", "abcabcabd"]
            .iter()
            .map(|s| Sequence::new(s).unwrap())
            .collect()
    }

    #[test]
    fn test_matches_sequential() {
        let seqs = sequences();
        for method in Method::ALL {
            let expected: Vec<usize> = seqs.iter().map(|s| method.complexity(s)).collect();
            assert_eq!(complexities(method, &seqs), expected);
        }
    }

    #[test]
    fn test_running_order_preserved() {
        let seqs = sequences();
        let running = running_complexities(Method::Lz78, &seqs);
        assert_eq!(running.len(), seqs.len());
        for (r, s) in running.iter().zip(&seqs) {
            assert_eq!(r.len(), s.len());
        }
    }

    #[test]
    fn test_empty_batch() {
        assert!(complexities(Method::Lz76, &[]).is_empty());
    }
}
