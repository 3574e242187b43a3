//! NFA simulator.
//!
//! Advances two state frontiers through the input one character at a time,
//! following `Split` transitions transitively (the "epsilon closure").
//! Frontier membership for the current step is tracked with a generation
//! counter stamped on each visited state rather than a bitset that would
//! need clearing every step — see
//! <https://swtch.com/~rsc/regexp/regexp1.html>.

use crate::nfa::{Nfa, StateId, Transition};

/// Epsilon-closed add: follow `Split` transitions until a `Literal` or
/// `Match` state is reached, and push each such state onto `list` at most
/// once per generation.
///
/// Free-standing rather than a `Simulator` method so that the caller can
/// pass `&mut self.last_seen` and `&mut self.current`/`&mut self.next` as
/// two independently-borrowed fields.
fn add_state(nfa: &Nfa, last_seen: &mut [u64], generation: u64, list: &mut Vec<StateId>, state: StateId) {
    if last_seen[state.0] == generation {
        return;
    }
    last_seen[state.0] = generation;

    match &nfa[state] {
        Transition::Split(out0, out1) => {
            if let Some(a) = out0 {
                add_state(nfa, last_seen, generation, list, *a);
            }
            if let Some(b) = out1 {
                add_state(nfa, last_seen, generation, list, *b);
            }
        }
        Transition::Literal(_, _) | Transition::Match => {
            list.push(state);
        }
    }
}

/// Runs full-string acceptance tests against [`Nfa`]s built by
/// [`crate::builder::build`].
///
/// A single instance may be reused across many [`Simulator::matches`]
/// calls, and across different `Nfa`s: the generation counter and frontier
/// buffers are owned by the simulator, not by the NFA, so sharing one
/// `Nfa` across threads only requires each thread to own its own
/// `Simulator` (see `RESOURCE MODEL` in the crate's design notes).
#[derive(Debug, Default)]
pub struct Simulator {
    generation: u64,
    last_seen: Vec<u64>,
    current: Vec<StateId>,
    next: Vec<StateId>,
}

impl Simulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_capacity(&mut self, state_count: usize) {
        if self.last_seen.len() < state_count {
            self.last_seen.resize(state_count, 0);
        }
    }

    /// Returns whether `nfa` accepts `input` in its entirety.
    ///
    /// Matching is full-string only: there is no partial or unanchored
    /// mode. This call never fails; a non-accepting input simply yields
    /// `false`.
    pub fn matches(&mut self, nfa: &Nfa, input: &str) -> bool {
        self.ensure_capacity(nfa.state_count());

        self.current.clear();
        self.generation += 1;
        add_state(
            nfa,
            &mut self.last_seen,
            self.generation,
            &mut self.current,
            nfa.start,
        );

        for c in input.chars() {
            self.next.clear();
            self.generation += 1;

            for i in 0..self.current.len() {
                let state = self.current[i];
                if let Transition::Literal(ch, Some(out)) = nfa[state] {
                    if ch == c {
                        add_state(
                            nfa,
                            &mut self.last_seen,
                            self.generation,
                            &mut self.next,
                            out,
                        );
                    }
                }
            }

            std::mem::swap(&mut self.current, &mut self.next);
        }

        self.current
            .iter()
            .any(|&state| matches!(nfa[state], Transition::Match))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::build, compiler::compile_to_postfix};

    fn nfa_for(pattern: &str) -> Nfa {
        build(&compile_to_postfix(pattern).unwrap()).unwrap()
    }

    fn matches(pattern: &str, input: &str) -> bool {
        Simulator::new().matches(&nfa_for(pattern), input)
    }

    #[test]
    fn single_letter() {
        assert!(matches("a", "a"));
        assert!(!matches("a", ""));
        assert!(!matches("a", "aa"));
    }

    #[test]
    fn concrete_scenarios_from_seed_suite() {
        assert!(matches("a.b", "ab"));
        assert!(!matches("a.b", "ac"));
        assert!(matches("a.(a|b)*.b", "abab"));
        assert!(matches("a.(a|b)*.b", "ab"));
        assert!(matches("a.(b.b)+.a", "abba"));
        assert!(!matches("a.(b.b)+.a", "aa"));
        assert!(matches("a.b?", "a"));
        assert!(matches("a.b?", "ab"));
    }

    #[test]
    fn empty_input_accepts_iff_entry_closure_reaches_match() {
        assert!(matches("a.b?", "a"));
        assert!(!matches("a.b", ""));
        assert!(matches("(a?).(b?)", ""));
    }

    #[test]
    fn one_simulator_can_match_multiple_patterns_in_sequence() {
        let mut sim = Simulator::new();
        let ab = nfa_for("a.b");
        let cd = nfa_for("c.d");

        assert!(sim.matches(&ab, "ab"));
        assert!(!sim.matches(&ab, "ac"));
        assert!(sim.matches(&cd, "cd"));
        assert!(!sim.matches(&cd, "ab"));
        assert!(sim.matches(&ab, "ab"));
    }

    #[test]
    fn frontier_never_exceeds_state_count() {
        // Re-derive the frontier the public API would build internally to
        // check it never exceeds the total state count.
        let nfa = nfa_for("a.(a|b)*.b");
        let mut last_seen = vec![0u64; nfa.state_count()];
        let mut frontier = Vec::new();
        add_state(&nfa, &mut last_seen, 1, &mut frontier, nfa.start);
        assert!(frontier.len() <= nfa.state_count());
    }
}
