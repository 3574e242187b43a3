//! Postfix-to-NFA builder.
//!
//! Interprets a postfix token stream as a program over a stack of
//! [`Fragment`]s, producing a Thompson-style NFA. Every operator pops one
//! or two fragments, builds zero or one new states, and pushes a fragment
//! whose patch list names every dangling out-slot still owned by the
//! construction so far. See
//! <https://swtch.com/~rsc/regexp/regexp1.html> for the classical
//! construction this follows.

use crate::error::BuildError;
use crate::nfa::{Fragment, Nfa, Patch};
use crate::token::Token;

fn pop_one(stack: &mut Vec<Fragment>, token: Token) -> Result<Fragment, BuildError> {
    stack.pop().ok_or(BuildError::EmptyStack { token })
}

fn pop_two(stack: &mut Vec<Fragment>, token: Token) -> Result<(Fragment, Fragment), BuildError> {
    let rhs = pop_one(stack, token)?;
    let lhs = pop_one(stack, token)?;
    Ok((lhs, rhs))
}

/// Build an NFA from a postfix token stream.
///
/// # Errors
///
/// Returns [`BuildError`] if the postfix program is malformed: an operator
/// encountering an empty fragment stack, or a final stack depth other than
/// one. Neither should occur for postfix produced by
/// [`crate::compiler::compile_to_postfix`].
pub fn build(postfix: &[Token]) -> Result<Nfa, BuildError> {
    let mut nfa = Nfa::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for &tok in postfix {
        match tok {
            Token::Alphabet(c) => {
                let state = nfa.push_literal(c);
                stack.push(Fragment {
                    start: state,
                    patches: vec![Patch::Out(state)],
                });
            }
            Token::Concat => {
                // e1 -> e2 ->
                let (e1, e2) = pop_two(&mut stack, tok)?;
                nfa.patch_all(&e1.patches, e2.start);
                stack.push(Fragment {
                    start: e1.start,
                    patches: e2.patches,
                });
            }
            Token::Union => {
                //  /-> e1 ->
                // s
                //  \-> e2 ->
                let (mut e1, e2) = pop_two(&mut stack, tok)?;
                let split = nfa.push_split(Some(e1.start), Some(e2.start));
                e1.patches.extend(e2.patches);
                stack.push(Fragment {
                    start: split,
                    patches: e1.patches,
                });
            }
            Token::OneOrMore => {
                //  -----
                // /    |
                // v    |
                // e -> s ->
                let e = pop_one(&mut stack, tok)?;
                let split = nfa.push_split(Some(e.start), None);
                nfa.patch_all(&e.patches, split);
                stack.push(Fragment {
                    start: e.start,
                    patches: vec![Patch::Out1(split)],
                });
            }
            Token::Closure => {
                //   -> e
                //  /    \
                // s <----
                //  \
                //   -------->
                let e = pop_one(&mut stack, tok)?;
                let split = nfa.push_split(Some(e.start), None);
                nfa.patch_all(&e.patches, split);
                stack.push(Fragment {
                    start: split,
                    patches: vec![Patch::Out1(split)],
                });
            }
            Token::ZeroOrOne => {
                //   -> e --\
                //  /        v
                // s
                //  \        ^
                //   -------/
                let mut e = pop_one(&mut stack, tok)?;
                let split = nfa.push_split(Some(e.start), None);
                e.patches.push(Patch::Out1(split));
                stack.push(Fragment {
                    start: split,
                    patches: e.patches,
                });
            }
            Token::LParen | Token::RParen => {
                // A well-formed postfix program never contains parentheses;
                // treat their appearance as the same stack-consistency bug
                // an unexpected-operator-on-empty-stack would be.
                return Err(BuildError::EmptyStack { token: tok });
            }
        }
    }

    if stack.len() != 1 {
        return Err(BuildError::UnbalancedProgram {
            remaining: stack.len(),
        });
    }
    let fragment = stack.pop().unwrap();

    let match_state = nfa.push_match();
    nfa.patch_all(&fragment.patches, match_state);
    nfa.start = fragment.start;

    Ok(nfa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile_to_postfix;

    fn build_pattern(pattern: &str) -> Nfa {
        build(&compile_to_postfix(pattern).unwrap()).unwrap()
    }

    #[test]
    fn single_letter_is_total_with_one_match_state() {
        let nfa = build_pattern("a");
        assert!(nfa.is_total());
        assert_eq!(nfa.match_state_count(), 1);
    }

    #[test]
    fn concatenation_and_alternation_are_total() {
        for pattern in ["a.b", "a.(a|b)*.b", "a.(b.b)+.a", "a.b?"] {
            let nfa = build_pattern(pattern);
            assert!(nfa.is_total(), "{pattern} produced a non-total NFA");
            assert_eq!(nfa.match_state_count(), 1);
        }
    }

    #[test]
    fn empty_stack_on_dangling_operator_is_an_error() {
        assert!(matches!(
            build(&[Token::Concat]),
            Err(BuildError::EmptyStack { token: Token::Concat })
        ));
    }

    #[test]
    fn leftover_fragments_are_an_error() {
        assert!(matches!(
            build(&[Token::Alphabet('a'), Token::Alphabet('b')]),
            Err(BuildError::UnbalancedProgram { remaining: 2 })
        ));
    }

    #[test]
    fn deeply_nested_pattern_builds_without_overflow() {
        let pattern = format!("{}a{}", "(".repeat(200), ")".repeat(200));
        let nfa = build_pattern(&pattern);
        assert!(nfa.is_total());
    }
}
