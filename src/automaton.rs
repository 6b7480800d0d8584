use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a state in a [`SuffixAutomaton`].
    pub(crate) struct StateKey;
}

/// One automaton state: an equivalence class of substrings sharing their
/// set of end positions.
#[derive(Debug, Clone)]
struct State<T> {
    /// Length of the longest substring in the class.
    len: usize,
    /// Suffix link; `None` only for the root.
    link: Option<StateKey>,
    /// Outgoing transitions. Bounded by the alphabet, so a flat list.
    edges: Vec<(T, StateKey)>,
}

impl<T: Copy + Eq> State<T> {
    fn new(len: usize, link: Option<StateKey>) -> Self {
        Self {
            len,
            link,
            edges: Vec::new(),
        }
    }

    #[inline]
    fn edge(&self, symbol: T) -> Option<StateKey> {
        self.edges
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, key)| key)
    }

    #[inline]
    fn set_edge(&mut self, symbol: T, target: StateKey) {
        match self.edges.iter_mut().find(|(s, _)| *s == symbol) {
            Some(edge) => edge.1 = target,
            None => self.edges.push((symbol, target)),
        }
    }
}

/// Online suffix automaton over the symbols pushed so far.
///
/// Recognises exactly the substrings of the input seen so far, and grows by
/// one symbol in amortized O(alphabet) time. Holds at most `2n` states.
#[derive(Debug, Clone)]
pub(crate) struct SuffixAutomaton<T> {
    states: SlotMap<StateKey, State<T>>,
    root: StateKey,
    /// State of the whole input.
    last: StateKey,
}

impl<T: Copy + Eq> SuffixAutomaton<T> {
    pub(crate) fn new() -> Self {
        let mut states = SlotMap::with_key();
        let root = states.insert(State::new(0, None));
        Self {
            states,
            root,
            last: root,
        }
    }

    pub(crate) fn root(&self) -> StateKey {
        self.root
    }

    pub(crate) fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Follows the transition on `symbol`, if the extended string occurs.
    #[inline]
    pub(crate) fn transition(&self, from: StateKey, symbol: T) -> Option<StateKey> {
        self.states[from].edge(symbol)
    }

    /// Appends one symbol to the recognised input.
    pub(crate) fn extend(&mut self, symbol: T) {
        let cur = self
            .states
            .insert(State::new(self.states[self.last].len + 1, None));

        let mut p = Some(self.last);
        let mut found = None;
        while let Some(key) = p {
            if let Some(q) = self.states[key].edge(symbol) {
                found = Some((key, q));
                break;
            }
            self.states[key].set_edge(symbol, cur);
            p = self.states[key].link;
        }

        let link = match found {
            None => self.root,
            Some((p, q)) if self.states[p].len + 1 == self.states[q].len => q,
            Some((p, q)) => self.split(p, q, symbol),
        };
        self.states[cur].link = Some(link);
        self.last = cur;
    }

    /// Clones `q` so that the strings of length `len(p) + 1` get their own
    /// state, and redirects `p` and its suffix chain to the clone.
    fn split(&mut self, p: StateKey, q: StateKey, symbol: T) -> StateKey {
        let mut clone = State::new(self.states[p].len + 1, self.states[q].link);
        clone.edges = self.states[q].edges.clone();
        let clone = self.states.insert(clone);

        let mut p = Some(p);
        while let Some(key) = p {
            if self.states[key].edge(symbol) != Some(q) {
                break;
            }
            self.states[key].set_edge(symbol, clone);
            p = self.states[key].link;
        }

        self.states[q].link = Some(clone);
        clone
    }

    /// Returns the state that owns a substring of length `len` currently
    /// attributed to `state`.
    ///
    /// A split during [`extend`](Self::extend) may move the shorter strings
    /// of a state into a clone reachable via its suffix link.
    pub(crate) fn canonical(&self, mut state: StateKey, len: usize) -> StateKey {
        while let Some(link) = self.states[state].link {
            if len > self.states[link].len {
                break;
            }
            state = link;
        }
        state
    }

    /// Whether `pattern` occurs in the input seen so far.
    #[cfg(test)]
    pub(crate) fn contains(&self, pattern: &[T]) -> bool {
        let mut state = self.root;
        for &symbol in pattern {
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }
        true
    }
}
