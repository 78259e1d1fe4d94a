/// Binary expression parsing: the four left-associative precedence levels
/// (equality, comparison, addition, multiplication).
pub mod binary;
/// The parsing entry point for expressions, the shared result type, and the
/// error-location helper.
pub mod core;
/// Statement parsing: the `parse` entry point, the statement grammar, and
/// error synchronization.
pub mod statement;
/// Unary and primary expression parsing, including grouping.
pub mod unary;
