use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// This enum models the closed set of types the executable subset of the
/// language can produce. No other runtime type is reachable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value.
    Nil,
    /// A boolean value, produced by literals, comparisons and `!`.
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string value.
    Str(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Value {
    /// Applies the language's truthiness rule.
    ///
    /// `nil` and `false` are falsy; every other value is truthy, including
    /// zero and the empty string.
    ///
    /// # Example
    /// ```
    /// use rlox::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(_) | Self::Str(_) => true,
        }
    }

    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Display stringification, used by print statements.
///
/// `nil` prints as `nil`, booleans as `true`/`false`, strings as their raw
/// contents. Numbers rely on Rust's `f64` formatting, which never emits a
/// trailing `.0`, so `4.0` prints as `4` while `4.5` stays `4.5`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.clone().into(),
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Nil => Self::Nil,
        }
    }
}
