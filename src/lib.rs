//! A compact regular-expression engine built on the classical Thompson
//! construction: a Dijkstra/shunting-yard pass compiles an infix pattern to
//! postfix, a fragment-stack builder turns postfix into an NFA, and a
//! Pike-style two-frontier simulator decides full-string acceptance.
//!
//! See <https://swtch.com/~rsc/regexp/regexp1.html> for the article this
//! follows. Capture groups, anchors, character classes, and partial
//! (unanchored) matching are out of scope; every match is full-string.
#![warn(
    missing_copy_implementations,
    clippy::all,
    clippy::doc_markdown,
    clippy::dbg_macro,
    clippy::todo,
    clippy::empty_enum,
    clippy::enum_glob_use,
    clippy::mem_forget,
    clippy::use_self,
    clippy::filter_map_next,
    clippy::needless_continue,
    clippy::needless_borrow,
    clippy::match_wildcard_for_single_variants,
    clippy::if_let_mutex,
    clippy::mismatched_target_os,
    clippy::await_holding_lock,
    clippy::match_on_vec_items,
    clippy::imprecise_flops,
    clippy::lossy_float_literal,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::fn_params_excessive_bools,
    clippy::exit,
    clippy::inefficient_to_string,
    clippy::linkedlist,
    clippy::macro_use_imports,
    clippy::option_option,
    clippy::verbose_file_reads,
    clippy::unnested_or_patterns,
    clippy::absurd_extreme_comparisons,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

pub mod builder;
pub mod compiler;
pub mod error;
pub mod nfa;
pub mod simulator;
mod token;

pub use error::{BuildError, CompileError, RegexError};
pub use nfa::Nfa;
pub use simulator::Simulator;
pub use token::Token;

/// Compile a pattern into an NFA.
///
/// # Errors
///
/// Returns [`RegexError::Compile`] for a malformed pattern (see
/// [`CompileError`]), or [`RegexError::Build`] if the compiler's postfix
/// output is internally inconsistent (see [`BuildError`]; this should be
/// unreachable for any pattern that reaches the builder).
pub fn compile(pattern: &str) -> Result<Nfa, RegexError> {
    let postfix = compiler::compile_to_postfix(pattern)?;
    let nfa = builder::build(&postfix)?;
    Ok(nfa)
}

/// Compile `pattern` and test whether it accepts `input` in its entirety.
///
/// A one-shot convenience over [`compile`] + [`Simulator::matches`] for
/// callers who do not need to reuse either the NFA or the simulator across
/// multiple calls.
///
/// # Errors
///
/// Propagates any [`RegexError`] from [`compile`].
pub fn is_match(pattern: &str, input: &str) -> Result<bool, RegexError> {
    let nfa = compile(pattern)?;
    Ok(Simulator::new().matches(&nfa, input))
}
