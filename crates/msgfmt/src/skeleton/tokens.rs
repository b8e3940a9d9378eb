//! Skeleton tokenizer.
//!
//! Splits a date skeleton into field runs and literal text. A field run is
//! a maximal sequence of one repeated ASCII letter; its length selects the
//! field's rendering. Text between single quotes is literal, with `''`
//! inside quotes (or standing alone) meaning one literal apostrophe. Any
//! other character, including an unterminated quote, is literal.

use winnow::combinator::{alt, delimited, repeat};
use winnow::token::{any, none_of, one_of, take_while};
use winnow::{ModalResult, Parser};

/// One lexical unit of a skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Field { letter: char, count: usize },
}

/// Tokenize a skeleton. Never fails: anything unrecognized is a literal.
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens: Vec<Token> = repeat(0.., token).parse(input).unwrap_or_default();
    merge_literals(tokens)
}

fn token(input: &mut &str) -> ModalResult<Token> {
    alt((field_run, escaped_quote, quoted_literal, literal_char)).parse_next(input)
}

fn field_run(input: &mut &str) -> ModalResult<Token> {
    let letter = one_of(('a'..='z', 'A'..='Z')).parse_next(input)?;
    let rest = take_while(0.., |c| c == letter).parse_next(input)?;
    Ok(Token::Field {
        letter,
        count: rest.len() + 1,
    })
}

/// A standalone `''` outside quoted text is one apostrophe.
fn escaped_quote(input: &mut &str) -> ModalResult<Token> {
    "''".map(|_| Token::Literal("'".to_string())).parse_next(input)
}

fn quoted_literal(input: &mut &str) -> ModalResult<Token> {
    let content: String =
        delimited('\'', repeat(1.., quoted_char), '\'').parse_next(input)?;
    Ok(Token::Literal(content))
}

fn quoted_char(input: &mut &str) -> ModalResult<char> {
    alt(("''".map(|_| '\''), none_of('\''))).parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<Token> {
    any.map(|c: char| Token::Literal(c.to_string()))
        .parse_next(input)
}

/// Join adjacent literal tokens so renderers see one literal per gap.
fn merge_literals(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match (out.last_mut(), token) {
            (Some(Token::Literal(acc)), Token::Literal(next)) => acc.push_str(&next),
            (_, token) => out.push(token),
        }
    }
    out
}
