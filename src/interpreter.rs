/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST through the visitor contract, evaluates
/// expressions and statements, performs arithmetic and logical operations,
/// and produces output for `print` statements. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates the executable expression and statement variants.
/// - Applies the truthiness, equality, and operand-type rules.
/// - Reports runtime errors, including visits to reserved AST forms.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme, and
///   source line.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input and recovers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements, following a fixed operator-precedence ladder.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with location info.
/// - Recovers from errors by synchronizing to the next statement boundary.
pub mod parser;
/// The printer module renders an AST in a parenthesized debug form.
///
/// The printer walks an expression tree through the visitor contract and
/// produces fully parenthesized prefix notation, such as `(+ 1 (* 2 3))`.
/// It exists for diagnostics and for asserting parser output in tests.
///
/// # Responsibilities
/// - Renders every expression variant, reserved ones as placeholders.
/// - Keeps the rendering pure: no evaluation, no side effects.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the closed set of value types used during
/// interpretation: nil, booleans, double-precision numbers, and strings. It
/// also implements truthiness and the display form used by `print`.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality, and display stringification.
pub mod value;
