/// Where in the token stream a parse error was detected.
///
/// Diagnostics distinguish an error at the very end of the input from one at
/// a concrete token, so messages read `Error at end: ...` or
/// `Error at '<lexeme>': ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// The source line of the offending token.
    pub line:   usize,
    /// The offending token's lexeme, or `None` when the parser ran into the
    /// end of the input.
    pub lexeme: Option<String>,
}

impl std::fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "at '{lexeme}'"),
            None => write!(f, "at end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A position where an expression was required held none.
    ExpectedExpression {
        /// Where the offending token was found.
        location: ErrorLocation,
    },
    /// A grouped expression was not closed with `)`.
    ExpectedClosingParen {
        /// Where the offending token was found.
        location: ErrorLocation,
    },
    /// A `print` statement was not terminated with `;`.
    ExpectedSemicolonAfterValue {
        /// Where the offending token was found.
        location: ErrorLocation,
    },
    /// An expression statement was not terminated with `;`.
    ExpectedSemicolonAfterExpression {
        /// Where the offending token was found.
        location: ErrorLocation,
    },
}

impl ParseError {
    /// Gets the location the error was detected at.
    #[must_use]
    pub const fn location(&self) -> &ErrorLocation {
        match self {
            Self::ExpectedExpression { location }
            | Self::ExpectedClosingParen { location }
            | Self::ExpectedSemicolonAfterValue { location }
            | Self::ExpectedSemicolonAfterExpression { location } => location,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = self.location();
        let line = location.line;

        match self {
            Self::ExpectedExpression { .. } => {
                write!(f, "[line {line}] Error {location}: Expect expression.")
            },
            Self::ExpectedClosingParen { .. } => {
                write!(f, "[line {line}] Error {location}: Expect ')' after expression.")
            },
            Self::ExpectedSemicolonAfterValue { .. } => {
                write!(f, "[line {line}] Error {location}: Expect ';' after value.")
            },
            Self::ExpectedSemicolonAfterExpression { .. } => {
                write!(f, "[line {line}] Error {location}: Expect ';' after expression.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
