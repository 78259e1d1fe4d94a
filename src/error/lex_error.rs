#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that begins no token.
    UnexpectedCharacter {
        /// The offending character, as scanned from the source.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal reached the end of input before its closing quote.
    UnterminatedString {
        /// The source line where input ran out.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "[line {line}] Error: Unexpected character '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            },
        }
    }
}

impl std::error::Error for LexError {}
