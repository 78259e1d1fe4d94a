use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses equality expressions.
///
/// Handles left-associative chains of `!=` and `==`, the lowest level of
/// the precedence ladder.
///
/// The rule is: `equality := comparison (("!=" | "==") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_comparison(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::BangEqual | TokenKind::EqualEqual)
        {
            let op = (*token).clone();
            tokens.next();
            let right = parse_comparison(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles left-associative chains of `>`, `>=`, `<`, and `<=`.
///
/// The rule is: `comparison := addition ((">" | ">=" | "<" | "<=")
/// addition)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Binary` tree combining addition-level nodes.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_additive(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind,
                       TokenKind::Greater
                       | TokenKind::GreaterEqual
                       | TokenKind::Less
                       | TokenKind::LessEqual)
        {
            let op = (*token).clone();
            tokens.next();
            let right = parse_additive(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `addition := multiplication (("-" | "+") multiplication)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Binary` tree combining multiplication-level nodes.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::Minus | TokenKind::Plus)
        {
            let op = (*token).clone();
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `/` and `*`.
///
/// The rule is: `multiplication := unary (("/" | "*") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Binary` tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && matches!(token.kind, TokenKind::Slash | TokenKind::Star)
        {
            let op = (*token).clone();
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}
