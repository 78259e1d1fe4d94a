use std::iter::Peekable;

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, location_of, parse_expression},
    },
};

/// Parses a token sequence into a list of statements, best effort.
///
/// Statements are parsed one after another until the end-of-input token.
/// When a statement fails to parse, its error is recorded, the parser
/// synchronizes to the next likely statement boundary, and parsing
/// continues, so a single malformed statement yields roughly one diagnostic
/// and does not hide errors in the rest of the input.
///
/// The caller decides what to do with the errors; if any are present the
/// statement list is partial and must not be evaluated.
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer, ending in its
///   end-of-input token.
///
/// # Returns
/// The successfully parsed statements and all parse errors found.
///
/// # Example
/// ```
/// use rlox::interpreter::{lexer::scan, parser::statement::parse};
///
/// let (tokens, _) = scan("print 1 + 2;");
/// let (statements, errors) = parse(&tokens);
///
/// assert_eq!(statements.len(), 1);
/// assert!(errors.is_empty());
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> (Vec<Stmt>, Vec<ParseError>) {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while !at_end(&mut iter) {
        match parse_statement(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(e) => {
                errors.push(e);
                synchronize(&mut iter);
            },
        }
    }

    (statements, errors)
}

/// Parses a single statement.
///
/// A statement is either:
/// - `"print" expression ";"`, or
/// - a bare `expression ";"`.
///
/// The terminating `;` is required in both forms.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::Print
    {
        tokens.next();
        let expr = parse_expression(tokens)?;
        expect_semicolon(tokens, false)?;
        return Ok(Stmt::Print { expr });
    }

    let expr = parse_expression(tokens)?;
    expect_semicolon(tokens, true)?;
    Ok(Stmt::Expression { expr })
}

/// Consumes the statement-terminating `;`, or reports its absence.
///
/// The message depends on the statement form: "Expect ';' after value." for
/// print statements, "Expect ';' after expression." for expression
/// statements.
fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>, after_expression: bool) -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::Semicolon
    {
        tokens.next();
        return Ok(());
    }

    let location = location_of(tokens);
    if after_expression {
        Err(ParseError::ExpectedSemicolonAfterExpression { location })
    } else {
        Err(ParseError::ExpectedSemicolonAfterValue { location })
    }
}

/// Discards tokens until a likely statement boundary.
///
/// Called after a parse error. The offending token is discarded first, then
/// tokens are dropped until one of:
/// - the token just consumed was a `;`,
/// - the next token begins a new statement (`class`, `fun`, `var`, `for`,
///   `if`, `while`, `print`, `return`),
/// - the end of input.
///
/// This bounds error cascades to roughly one diagnostic per malformed
/// statement rather than one per token.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token> + Clone
{
    if !at_end(tokens) {
        let discarded = tokens.next();
        if let Some(token) = discarded
           && token.kind == TokenKind::Semicolon
        {
            return;
        }
    }

    while let Some(token) = tokens.peek() {
        match token.kind {
            TokenKind::Eof => return,
            TokenKind::Semicolon => {
                tokens.next();
                return;
            },
            TokenKind::Class
            | TokenKind::Fun
            | TokenKind::Var
            | TokenKind::For
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Print
            | TokenKind::Return => return,
            _ => {
                tokens.next();
            },
        }
    }
}

/// Whether the iterator is at the end-of-input token (or exhausted).
fn at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.peek().is_none_or(|token| token.kind == TokenKind::Eof)
}
