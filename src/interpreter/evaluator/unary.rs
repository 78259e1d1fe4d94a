use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, TokenKind},
        value::Value,
    },
};

/// Applies a unary operator to an already-evaluated operand.
///
/// - `!` negates the operand's truthiness and is total.
/// - `-` requires a number; anything else raises "Operand must be a
///   number." attributed to the operator token.
/// - Any other operator token raises an unsupported-operation error. The
///   parser never builds such a node, but a hand-built tree can.
///
/// # Parameters
/// - `op`: The operator token, used for dispatch and error attribution.
/// - `value`: The evaluated operand.
///
/// # Returns
/// The resulting value, or a [`RuntimeError`] on a type mismatch.
pub fn eval_unary(op: &Token, value: &Value) -> EvalResult<Value> {
    match op.kind {
        TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
        TokenKind::Minus => match value.as_number() {
            Some(n) => Ok(Value::Number(-n)),
            None => Err(RuntimeError::OperandMustBeNumber { lexeme: op.lexeme.clone(),
                                                            line:   op.line, }),
        },
        // A hand-built node can carry any token; a non-operator is an
        // unsupported operation, not a panic.
        _ => Err(RuntimeError::UnsupportedExpression { variant: "Unary",
                                                       line:    op.line, }),
    }
}
