use crate::dictionary::split_trace;
use crate::lz76::{self, Lz76};
use crate::lz78::{self, Lz78};
use crate::sequence::Sequence;
use proptest::prelude::*;
use std::collections::HashSet;

/// Straightforward LZ76 parse: at each production start, take the longest
/// match against any earlier start (overlap allowed) plus one symbol.
fn naive_lz76_phrases(input: &[u8]) -> Vec<Vec<u8>> {
    let n = input.len();
    let mut phrases = Vec::new();
    let mut start = 0;
    while start < n {
        let mut longest = 0;
        for source in 0..start {
            let mut k = 0;
            while start + k < n && input[source + k] == input[start + k] {
                k += 1;
            }
            longest = longest.max(k);
        }
        let len = (longest + 1).min(n - start);
        phrases.push(input[start..start + len].to_vec());
        start += len;
    }
    phrases
}

/// LZ78 as a set of words: extend the current word until it is new.
fn naive_lz78(input: &[u8]) -> (Vec<Vec<u8>>, Vec<usize>) {
    let mut seen = HashSet::new();
    let mut phrases = Vec::new();
    let mut running = Vec::new();
    let mut word = Vec::new();
    for &b in input {
        word.push(b);
        if seen.insert(word.clone()) {
            phrases.push(std::mem::take(&mut word));
        }
        running.push(seen.len());
    }
    (phrases, running)
}

fn small_alphabet() -> impl Strategy<Value = String> {
    prop_oneof!["[01]{1,120}", "[012]{1,120}", "[a-d]{1,120}"]
}

proptest! {
    /// The last running value is the batch complexity.
    #[test]
    fn prop_running_ends_at_complexity(input in small_alphabet()) {
        let seq = Sequence::new(&input).unwrap();
        prop_assert_eq!(lz76::running_complexity(&seq).total(), lz76::complexity(&seq));
        prop_assert_eq!(lz78::running_complexity(&seq).total(), lz78::complexity(&seq));
    }

    /// Running complexity starts at 1 and grows by 0 or 1 per symbol.
    #[test]
    fn prop_running_monotone(input in small_alphabet()) {
        let seq = Sequence::new(&input).unwrap();
        for running in [lz76::running_complexity(&seq), lz78::running_complexity(&seq)] {
            prop_assert_eq!(running.len(), input.len());
            prop_assert_eq!(running[0], 1);
            for w in running.windows(2) {
                prop_assert!(w[0] <= w[1] && w[1] <= w[0] + 1, "step {:?}", w);
            }
        }
    }

    /// Phrases (plus any tail) reproduce the input.
    #[test]
    fn prop_dictionary_reconstructs(input in small_alphabet()) {
        let seq = Sequence::new(&input).unwrap();
        let (_, d76) = lz76::complexity_with_dictionary(&seq);
        let (_, d78) = lz78::complexity_with_dictionary(&seq);
        prop_assert_eq!(d76.reconstruct(), input.as_bytes());
        prop_assert_eq!(d78.reconstruct(), input.as_bytes());
        prop_assert!(d76.tail().is_none());
    }

    /// LZ76 agrees with the quadratic reference, phrase by phrase.
    #[test]
    fn prop_lz76_matches_reference(input in small_alphabet()) {
        let seq = Sequence::new(&input).unwrap();
        let (c, dict) = lz76::complexity_with_dictionary(&seq);
        let expected = naive_lz76_phrases(input.as_bytes());
        prop_assert_eq!(c, expected.len());
        let actual: Vec<Vec<u8>> = dict.phrases().map(|p| p.to_vec()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// LZ78 agrees with the word-set reference, including running values.
    #[test]
    fn prop_lz78_matches_reference(input in small_alphabet()) {
        let seq = Sequence::new(&input).unwrap();
        let (expected_phrases, expected_running) = naive_lz78(input.as_bytes());
        let (running, dict) = lz78::running_complexity_with_dictionary(&seq);
        prop_assert_eq!(running.to_vec(), expected_running);
        let actual: Vec<Vec<u8>> = dict.phrases().map(|p| p.to_vec()).collect();
        prop_assert_eq!(actual, expected_phrases);
    }

    /// Each running value equals the batch complexity of that prefix.
    #[test]
    fn prop_running_matches_prefixes(input in "[01]{1,40}") {
        let seq = Sequence::new(&input).unwrap();
        let r76 = lz76::running_complexity(&seq);
        let r78 = lz78::running_complexity(&seq);
        for n in 1..=input.len() {
            let prefix = Sequence::new(&input[..n]).unwrap();
            prop_assert_eq!(r76[n - 1], lz76::complexity(&prefix));
            prop_assert_eq!(r78[n - 1], lz78::complexity(&prefix));
        }
    }

    /// Traces fit their bound and split back into the phrase list.
    #[test]
    fn prop_trace_bounded(input in small_alphabet()) {
        let seq = Sequence::new(&input).unwrap();
        for (c, dict) in [
            lz76::complexity_with_dictionary(&seq),
            lz78::complexity_with_dictionary(&seq),
        ] {
            let trace = dict.to_trace().unwrap();
            prop_assert!(trace.len() <= 2 * input.len() + 2);
            let parts: Vec<String> = split_trace(&trace).map(str::to_owned).collect();
            prop_assert_eq!(parts.len(), c);
            prop_assert_eq!(parts, dict.to_strings());
        }
    }

    /// Pushing one by one and extending in bulk give the same parse.
    #[test]
    fn prop_incremental_equivalence(input: Vec<u8>) {
        let mut a = Lz76::new();
        a.extend(input.iter().copied());
        let mut b = Lz76::new();
        for &x in &input {
            b.push(x);
        }
        prop_assert_eq!(a.complexity(), b.complexity());
        prop_assert_eq!(a.dictionary(), b.dictionary());
    }
}

/// Bolero fuzz test: no panics on arbitrary bytes, and both parses cover the
/// input exactly.
#[test]
fn fuzz_no_panic() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|input| {
        let mut lz76 = Lz76::new();
        let mut lz78 = Lz78::new();
        for &b in input.iter() {
            let c76 = lz76.push(b);
            let c78 = lz78.push(b);
            assert!(c76 >= 1 && c78 >= 1);
        }

        let d76 = lz76.dictionary();
        let d78 = lz78.dictionary();
        assert_eq!(d76.len(), lz76.complexity());
        assert_eq!(d78.len(), lz78.complexity());
        assert_eq!(d76.reconstruct(), *input);
        assert_eq!(d78.reconstruct(), *input);
    });
}

/// Bolero fuzz test: the suffix-automaton parse matches the reference.
#[test]
fn fuzz_lz76_reference() {
    bolero::check!()
        .with_type::<Vec<u8>>()
        .for_each(|input| {
            // Fold into a small alphabet so long copies actually occur.
            let folded: Vec<u8> = input.iter().map(|b| b % 3).take(256).collect();
            let mut lz = Lz76::new();
            lz.extend(folded.iter().copied());
            let actual: Vec<Vec<u8>> = lz.dictionary().phrases().map(|p| p.to_vec()).collect();
            assert_eq!(actual, naive_lz76_phrases(&folded));
        });
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_reference_helpers_agree_on_known_vector() {
        let input = b"000101000101111010001010100010101000000010000010";
        assert_eq!(naive_lz76_phrases(input).len(), 9);
        assert_eq!(naive_lz78(input).0.len(), 16);
    }

    #[test]
    fn test_single_symbol_boundary() {
        let seq = Sequence::new("0").unwrap();
        for (c, dict) in [
            lz76::complexity_with_dictionary(&seq),
            lz78::complexity_with_dictionary(&seq),
        ] {
            assert_eq!(c, 1);
            assert_eq!(dict.to_strings(), vec!["0"]);
        }
    }

    #[test]
    fn test_random_binary_is_near_maximal() {
        // Pseudo-random bits parse into many short phrases.
        let mut seed = 12345u64;
        let bits: String = (0..2000)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                if seed >> 63 == 1 { '1' } else { '0' }
            })
            .collect();
        let random = Sequence::new(&bits).unwrap();
        let periodic = Sequence::new("01".repeat(1000)).unwrap();
        assert!(lz76::complexity(&random) > 10 * lz76::complexity(&periodic));
        assert!(lz78::complexity(&random) > 3 * lz78::complexity(&periodic));
    }
}
