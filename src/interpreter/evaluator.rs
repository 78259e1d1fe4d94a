/// Binary operator semantics: arithmetic, comparison, concatenation, and
/// equality, with operand type checking.
pub mod binary;
/// The interpreter itself: statement execution and the expression visitor.
pub mod core;
/// Unary operator semantics: logical not and numeric negation.
pub mod unary;
