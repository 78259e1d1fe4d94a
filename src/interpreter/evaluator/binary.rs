use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, TokenKind},
        value::Value,
    },
};

/// Applies a binary operator to two already-evaluated operands.
///
/// Semantics:
/// - `-`, `/`, `*` and the comparisons `>`, `>=`, `<`, `<=` require two
///   numbers; otherwise "Operands must be numbers." Division by zero keeps
///   standard floating-point semantics (infinities and NaN), it is not a
///   reported error.
/// - `+` adds two numbers or concatenates two strings; any other
///   combination raises "Operands must be two numbers or two strings."
/// - `==` and `!=` use the value equality rule and are total: `nil` equals
///   only `nil`, and two values are equal iff they have the same runtime
///   type and the same underlying value.
/// - Any other operator token raises an unsupported-operation error. The
///   parser never builds such a node, but a hand-built tree can.
///
/// # Parameters
/// - `op`: The operator token, used for dispatch and error attribution.
/// - `left`: The evaluated left operand.
/// - `right`: The evaluated right operand.
///
/// # Returns
/// The resulting value, or a [`RuntimeError`] on a type mismatch.
pub fn eval_binary(op: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    match op.kind {
        TokenKind::Minus => {
            let (l, r) = check_number_operands(op, left, right)?;
            Ok(Value::Number(l - r))
        },
        TokenKind::Slash => {
            let (l, r) = check_number_operands(op, left, right)?;
            Ok(Value::Number(l / r))
        },
        TokenKind::Star => {
            let (l, r) = check_number_operands(op, left, right)?;
            Ok(Value::Number(l * r))
        },
        TokenKind::Greater => {
            let (l, r) = check_number_operands(op, left, right)?;
            Ok(Value::Bool(l > r))
        },
        TokenKind::GreaterEqual => {
            let (l, r) = check_number_operands(op, left, right)?;
            Ok(Value::Bool(l >= r))
        },
        TokenKind::Less => {
            let (l, r) = check_number_operands(op, left, right)?;
            Ok(Value::Bool(l < r))
        },
        TokenKind::LessEqual => {
            let (l, r) = check_number_operands(op, left, right)?;
            Ok(Value::Bool(l <= r))
        },
        TokenKind::Plus => match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::Str(l), Value::Str(r)) => Ok(Value::Str(format!("{l}{r}"))),
            _ => Err(RuntimeError::OperandsMustBeNumbersOrStrings { lexeme: op.lexeme.clone(),
                                                                    line:   op.line, }),
        },
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        // A hand-built node can carry any token; a non-operator is an
        // unsupported operation, not a panic.
        _ => Err(RuntimeError::UnsupportedExpression { variant: "Binary",
                                                       line:    op.line, }),
    }
}

/// Requires both operands to be numbers, or raises "Operands must be
/// numbers." attributed to the operator token.
fn check_number_operands(op: &Token, left: &Value, right: &Value) -> EvalResult<(f64, f64)> {
    match (left.as_number(), right.as_number()) {
        (Some(l), Some(r)) => Ok((l, r)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { lexeme: op.lexeme.clone(),
                                                       line:   op.line, }),
    }
}
