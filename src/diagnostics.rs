use crate::error::{LexError, ParseError, RuntimeError};

/// Collects error reports from every phase of the pipeline.
///
/// The pipeline itself holds no error state; the driver owns one
/// `Diagnostics` value, passes it to [`crate::run`], and inspects the two
/// flags afterwards to pick an exit code. An interactive prompt calls
/// [`Diagnostics::reset`] between lines so one bad line does not poison
/// subsequent ones.
///
/// Every reported error is printed to standard error in its user-facing
/// `Display` form, which always includes the source line and, where
/// applicable, the offending lexeme.
#[derive(Debug, Default)]
pub struct Diagnostics {
    had_error:         bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    /// Creates a collector with both flags clear.
    #[must_use]
    pub const fn new() -> Self {
        Self { had_error:         false,
               had_runtime_error: false, }
    }

    /// Reports a lexical error and records that the source unit failed.
    pub fn lex_error(&mut self, error: &LexError) {
        eprintln!("{error}");
        self.had_error = true;
    }

    /// Reports a parse error and records that the source unit failed.
    pub fn parse_error(&mut self, error: &ParseError) {
        eprintln!("{error}");
        self.had_error = true;
    }

    /// Reports a runtime error. At most one is reported per evaluation,
    /// since execution stops at the first.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{error}");
        self.had_runtime_error = true;
    }

    /// Whether any lexical or parse error has been reported since the last
    /// reset. When set, evaluation of the source unit is suppressed.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }

    /// Whether a runtime error has been reported since the last reset.
    #[must_use]
    pub const fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears both flags. Called by the interactive prompt between lines.
    pub const fn reset(&mut self) {
        self.had_error = false;
        self.had_runtime_error = false;
    }
}
