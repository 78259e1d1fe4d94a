use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{ErrorLocation, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_equality,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, equality, and recursively
/// descends through the precedence ladder.
///
/// Grammar: `expression := equality`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_equality(tokens)
}

/// Builds an [`ErrorLocation`] from the token the parser is currently
/// stopped at, without consuming it.
///
/// The end-of-input token maps to an "at end" location; any other token
/// contributes its lexeme for an "at '<lexeme>'" message. An exhausted
/// iterator only occurs when the caller supplied a token sequence without
/// its end-of-input token; it is treated as an empty source, at end of
/// line 1.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The location of the offending token.
pub(crate) fn location_of<'a, I>(tokens: &mut Peekable<I>) -> ErrorLocation
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(token) if token.kind == TokenKind::Eof => ErrorLocation { line:   token.line,
                                                                      lexeme: None, },
        Some(token) => ErrorLocation { line:   token.line,
                                       lexeme: Some(token.lexeme.clone()), },
        None => ErrorLocation { line:   1,
                                lexeme: None, },
    }
}
