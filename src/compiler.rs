//! Regex-to-postfix compiler.
//!
//! Tokenizes an infix pattern (explicit `.` concatenation) and reorders it
//! into postfix notation with the shunting-yard algorithm. See
//! <https://en.wikipedia.org/wiki/Shunting-yard_algorithm>.

use crate::error::CompileError;
use crate::token::Token;

fn tokenize(pattern: &str) -> Result<Vec<Token>, CompileError> {
    let mut tokens = Vec::with_capacity(pattern.len());

    for c in pattern.chars() {
        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '|' => Token::Union,
            '.' => Token::Concat,
            '+' => Token::OneOrMore,
            '?' => Token::ZeroOrOne,
            '*' => Token::Closure,
            c if c.is_ascii_alphabetic() => Token::Alphabet(c),
            c => return Err(CompileError::UnsupportedCharacter(c)),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Compile an infix pattern into a postfix token sequence.
///
/// # Errors
///
/// Returns [`CompileError::EmptyPattern`] for an empty pattern,
/// [`CompileError::UnsupportedCharacter`] for a character outside
/// `[a-zA-Z()|.+?*]`, and [`CompileError::UnbalancedParens`] for
/// mismatched parentheses.
pub fn compile_to_postfix(pattern: &str) -> Result<Vec<Token>, CompileError> {
    if pattern.is_empty() {
        return Err(CompileError::EmptyPattern);
    }

    let tokens = tokenize(pattern)?;

    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for tok in tokens {
        match tok {
            Token::Alphabet(_) => output.push(tok),
            Token::LParen => operators.push(tok),
            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some(Token::LParen) => break,
                        Some(op) => output.push(op),
                        None => return Err(CompileError::UnbalancedParens),
                    }
                }
            }
            _ => {
                // tok is one of Union, Concat, OneOrMore, ZeroOrOne, Closure.
                let prec = tok.precedence().expect("operator token");
                while let Some(top) = operators.last() {
                    match top.precedence() {
                        Some(top_prec) if top_prec >= prec => {
                            output.push(operators.pop().unwrap());
                        }
                        _ => break,
                    }
                }
                operators.push(tok);
            }
        }
    }

    // Drain the full operator stack, not just its top: an end-of-input
    // flush that only pops one operator silently drops symbols whenever
    // two or more operators remain stacked (e.g. `a|b.c`, where `|`'s
    // lower precedence keeps it pinned below `.`).
    while let Some(op) = operators.pop() {
        if op == Token::LParen {
            return Err(CompileError::UnbalancedParens);
        }
        output.push(op);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix_string(pattern: &str) -> String {
        compile_to_postfix(pattern)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn postfix_round_trip() {
        assert_eq!(postfix_string("a.b"), "ab.");
        assert_eq!(postfix_string("(a.b)"), "ab.");
        assert_eq!(postfix_string("a.(b.b)+.a"), "abb.+.a.");
        assert_eq!(postfix_string("a.(a|b)*.b"), "aab|*.b.");
    }

    #[test]
    fn drains_full_operator_stack() {
        // `|`'s low precedence keeps it pinned below `.` on the operator
        // stack until end of input: a flush that pops only the stack's
        // top would emit the `.` and silently drop the `|`.
        assert_eq!(postfix_string("a|b.c"), "abc.|");
    }

    #[test]
    fn rejects_unbalanced_parens() {
        assert_eq!(
            compile_to_postfix("(a.b"),
            Err(CompileError::UnbalancedParens)
        );
        assert_eq!(
            compile_to_postfix("a.b)"),
            Err(CompileError::UnbalancedParens)
        );
        assert_eq!(
            compile_to_postfix(")"),
            Err(CompileError::UnbalancedParens)
        );
    }

    #[test]
    fn rejects_unsupported_characters() {
        assert_eq!(
            compile_to_postfix("a.1"),
            Err(CompileError::UnsupportedCharacter('1'))
        );
        assert_eq!(
            compile_to_postfix("a.b_c"),
            Err(CompileError::UnsupportedCharacter('_'))
        );
    }

    #[test]
    fn rejects_empty_pattern() {
        assert_eq!(compile_to_postfix(""), Err(CompileError::EmptyPattern));
    }

    #[test]
    fn deeply_nested_parens_do_not_overflow() {
        let pattern = format!("{}a{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(postfix_string(&pattern), "a");
    }
}
