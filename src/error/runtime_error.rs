#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the lexeme and line of the token that triggered it,
/// so diagnostics can attribute the failure to a source position.
pub enum RuntimeError {
    /// Unary `-` was applied to a non-number.
    OperandMustBeNumber {
        /// The operator's lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An arithmetic or comparison operator received a non-number operand.
    OperandsMustBeNumbers {
        /// The operator's lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// `+` received operands that are neither two numbers nor two strings.
    OperandsMustBeNumbersOrStrings {
        /// The operator's lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Visited an expression form that is represented in the AST but has no
    /// executable semantics yet.
    UnsupportedExpression {
        /// The name of the reserved expression variant.
        variant: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OperandMustBeNumber { line, .. } => {
                write!(f, "[line {line}] Runtime Error: Operand must be a number.")
            },
            Self::OperandsMustBeNumbers { line, .. } => {
                write!(f, "[line {line}] Runtime Error: Operands must be numbers.")
            },
            Self::OperandsMustBeNumbersOrStrings { line, .. } => write!(f,
                                                                       "[line {line}] Runtime Error: Operands must be two numbers or two strings."),
            Self::UnsupportedExpression { variant, line } => write!(f,
                                                                    "[line {line}] Runtime Error: '{variant}' expressions are not supported."),
        }
    }
}

impl std::error::Error for RuntimeError {}
