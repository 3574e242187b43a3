//! Arena-backed NFA representation.
//!
//! States live in a single `Vec` and are addressed by index (`StateId`)
//! rather than by pointer or `Rc`, so the cycles that `*` and `+` produce
//! need no special handling and the simulator's generation bookkeeping can
//! live in a plain side table indexed the same way (see [`crate::simulator`]).

/// Index of a state within an [`Nfa`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub usize);

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single NFA node.
///
/// `Literal`'s out-slot and `Split`'s two out-slots are `Option` only
/// during construction: once [`crate::builder::build`] returns, every
/// slot reachable from `Nfa::start` is `Some`.
#[derive(Debug, Clone, Copy)]
pub enum Transition {
    /// Fires only on the given input character.
    Literal(char, Option<StateId>),
    /// Two epsilon transitions; either may be taken without consuming
    /// input.
    Split(Option<StateId>, Option<StateId>),
    /// Accepting sink. No out-transitions.
    Match,
}

/// A fully or partially constructed NFA, addressed by `StateId`.
#[derive(Debug)]
pub struct Nfa {
    transitions: Vec<Transition>,
    pub start: StateId,
}

impl std::ops::Index<StateId> for Nfa {
    type Output = Transition;

    fn index(&self, index: StateId) -> &Self::Output {
        &self.transitions[index.0]
    }
}

impl std::ops::IndexMut<StateId> for Nfa {
    fn index_mut(&mut self, index: StateId) -> &mut Self::Output {
        &mut self.transitions[index.0]
    }
}

/// A reference to one dangling out-slot of a state, used by [`Fragment`]'s
/// patch list. Naming the slot explicitly (rather than aliasing a pointer
/// to it) avoids the raw-address/union trick the original patch-list
/// implementations use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Patch {
    /// `Literal`'s only out-slot.
    Out(StateId),
    /// `Split`'s second out-slot. `Split`'s first out-slot is always filled
    /// immediately with the already-built sub-fragment when the builder
    /// allocates the state (see `src/builder.rs`), so it never appears in a
    /// patch list.
    Out1(StateId),
}

/// A partially built NFA: an entry state plus every dangling out-slot
/// reachable from it.
#[derive(Debug)]
pub(crate) struct Fragment {
    pub start: StateId,
    pub patches: Vec<Patch>,
}

impl Nfa {
    pub(crate) fn new() -> Self {
        Self {
            transitions: Vec::new(),
            start: StateId(0),
        }
    }

    pub(crate) fn state_count(&self) -> usize {
        self.transitions.len()
    }

    pub(crate) fn push_literal(&mut self, c: char) -> StateId {
        let id = StateId(self.transitions.len());
        self.transitions.push(Transition::Literal(c, None));
        id
    }

    pub(crate) fn push_split(
        &mut self,
        out0: Option<StateId>,
        out1: Option<StateId>,
    ) -> StateId {
        let id = StateId(self.transitions.len());
        self.transitions.push(Transition::Split(out0, out1));
        id
    }

    pub(crate) fn push_match(&mut self) -> StateId {
        let id = StateId(self.transitions.len());
        self.transitions.push(Transition::Match);
        id
    }

    /// Fill every dangling slot named in `patches` with `target`.
    pub(crate) fn patch_all(&mut self, patches: &[Patch], target: StateId) {
        for patch in patches {
            match *patch {
                Patch::Out(state) => match &mut self[state] {
                    Transition::Literal(_, out) => *out = Some(target),
                    other => unreachable!("Patch::Out on non-literal state: {other:?}"),
                },
                Patch::Out1(state) => match &mut self[state] {
                    Transition::Split(_, out1) => *out1 = Some(target),
                    other => unreachable!("Patch::Out1 on non-split state: {other:?}"),
                },
            }
        }
    }

    /// True iff every state reachable from `start` either is `Match` or has
    /// all of its out-slots filled. Used by tests to check totality after
    /// construction: no state reachable from `start` should have a
    /// dangling out-slot.
    #[cfg(test)]
    pub(crate) fn is_total(&self) -> bool {
        let mut seen = vec![false; self.transitions.len()];
        let mut stack = vec![self.start];

        while let Some(id) = stack.pop() {
            if seen[id.0] {
                continue;
            }
            seen[id.0] = true;

            match &self[id] {
                Transition::Literal(_, out) => match out {
                    Some(next) => stack.push(*next),
                    None => return false,
                },
                Transition::Split(out0, out1) => {
                    match (out0, out1) {
                        (Some(a), Some(b)) => {
                            stack.push(*a);
                            stack.push(*b);
                        }
                        _ => return false,
                    }
                }
                Transition::Match => {}
            }
        }

        true
    }

    #[cfg(test)]
    pub(crate) fn match_state_count(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| matches!(t, Transition::Match))
            .count()
    }
}
