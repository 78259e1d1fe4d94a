/// Lexical errors.
///
/// Defines the error types that can occur while tokenizing source code:
/// unexpected characters and unterminated string literals. Both are
/// recoverable; the lexer keeps scanning past them.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the error types that can occur while parsing the token stream:
/// a missing expression, a missing closing parenthesis, or a missing
/// statement terminator. The parser synchronizes past them so one malformed
/// statement reports one error.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types that can be raised during evaluation: operand
/// type mismatches and visits to reserved, not-yet-executable expression
/// forms. Each carries the token that triggered it for line attribution.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::{ErrorLocation, ParseError};
pub use runtime_error::RuntimeError;
