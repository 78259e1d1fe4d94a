use logos::Logos;

use crate::error::LexError;

/// Classifies a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the language; literal
/// kinds carry their decoded value.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// A bare leading or trailing `.` is never part of a number, so `.5`
    /// lexes as a dot followed by `5`, and `5.` as `5` followed by a dot.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens. The payload is the decoded contents with the
    /// surrounding quotes stripped. Strings may span multiple lines.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// Identifier tokens; names such as `x` or `average`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// End of input. Never produced by the logos rules; appended exactly
    /// once by [`scan`] after the final real token.
    Eof,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// A string literal that reaches the end of input before its closing
    /// quote. Reported by [`scan`] as a lexical error, never kept as a
    /// token.
    #[regex(r#""[^"]*"#, count_string_lines)]
    UnterminatedString,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A single lexical token: its kind, the exact source substring it was
/// scanned from, and the 1-based line it ended on.
///
/// Tokens are produced once by [`scan`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, including any decoded literal value.
    pub kind:   TokenKind,
    /// The exact source substring the token was scanned from. Empty for the
    /// end-of-input token.
    pub lexeme: String,
    /// The source line the token appears on, starting at 1.
    pub line:   usize,
}

/// Tokenizes a complete source string.
///
/// Performs a single left-to-right pass with maximal munch: two-character
/// operators such as `!=` always win over their one-character prefixes.
/// Whitespace and `//` comments produce no tokens; newlines advance the line
/// counter, including newlines embedded in string literals.
///
/// Lexical errors are recoverable: an unexpected character or an
/// unterminated string is recorded and scanning continues with the next
/// character, so one bad character does not hide later errors. Exactly one
/// end-of-input token is appended after the final real token.
///
/// # Parameters
/// - `source`: The complete source text of one file or one prompt line.
///
/// # Returns
/// The token sequence and any lexical errors found along the way.
///
/// # Example
/// ```
/// use rlox::interpreter::lexer::{TokenKind, scan};
///
/// let (tokens, errors) = scan("1 + 2");
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(TokenKind::UnterminatedString) => {
                errors.push(LexError::UnterminatedString { line });
            },
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme: lexer.slice().to_string(),
                                            line }),
            Err(()) => {
                errors.push(LexError::UnexpectedCharacter { character: lexer.slice().to_string(),
                                                            line });
            },
        }
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        lexeme: String::new(),
                        line:   lexer.extras.line, });

    (tokens, errors)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Decodes a string literal from the current token slice.
///
/// Strips the surrounding quotes and advances the line counter for every
/// newline embedded in the literal.
///
/// # Parameters
/// - `lex`: Mutable reference to the Logos lexer at the current token.
///
/// # Returns
/// The string contents without the enclosing quotes.
fn parse_string(lex: &mut logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.chars().filter(|&c| c == '\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// Advances the line counter for newlines inside an unterminated string so
/// the error is attributed to the line where input ran out.
fn count_string_lines(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += lex.slice().chars().filter(|&c| c == '\n').count();
}
