use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, location_of, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `!`  (logical not)
/// - `-`  (numeric negation)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed
/// as `!(-x)`. If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("!" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::Bang | TokenKind::Minus)
    {
        let op = (*token).clone();
        tokens.next();
        let right = parse_unary(tokens)?;
        return Ok(Expr::Unary { op,
                                right: Box::new(right) });
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - the keyword literals `true`, `false`, and `nil`
/// - parenthesized expressions
///
/// This is the only level that can fail outright: any other token produces
/// an "Expect expression." error without being consumed, so the statement
/// loop can synchronize from it.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | "true" | "false" | "nil"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek() else {
        return Err(ParseError::ExpectedExpression { location: location_of(tokens) });
    };

    let value = match &token.kind {
        TokenKind::Number(n) => LiteralValue::Number(*n),
        TokenKind::Str(s) => LiteralValue::Str(s.clone()),
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::False => LiteralValue::Bool(false),
        TokenKind::Nil => LiteralValue::Nil,
        TokenKind::LeftParen => return parse_grouping(tokens),
        _ => return Err(ParseError::ExpectedExpression { location: location_of(tokens) }),
    };

    tokens.next();
    Ok(Expr::Literal { value })
}

/// Parses a parenthesized expression.
///
/// The leading `(` is consumed, a full expression is parsed, and the
/// matching `)` is required; its absence is reported as
/// "Expect ')' after expression." at the offending token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a `(` token.
///
/// # Returns
/// An [`Expr::Grouping`] wrapping the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some(token) if token.kind == TokenKind::RightParen => {
            tokens.next();
            Ok(Expr::Grouping { expr: Box::new(expr) })
        },
        _ => Err(ParseError::ExpectedClosingParen { location: location_of(tokens) }),
    }
}
