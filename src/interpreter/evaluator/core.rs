use crate::{
    ast::{Expr, ExprVisitor, LiteralValue, Stmt, StmtVisitor},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        lexer::Token,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks a freshly parsed AST and computes runtime values.
///
/// One interpreter evaluates one statement list at a time; it holds no
/// state of its own, so the same instance can be reused across independent
/// runs (each REPL line, for example) without one run poisoning the next.
pub struct Interpreter;

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates a new interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes a list of statements in order.
    ///
    /// Execution stops at the first runtime error, which is returned to the
    /// caller for reporting; output already produced by earlier statements
    /// is not rolled back.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by any statement.
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        for statement in statements {
            statement.accept(self)?;
        }
        Ok(())
    }

    /// Evaluates a single expression to a runtime value.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] on operand type mismatch or on visiting a
    /// reserved expression form.
    ///
    /// # Example
    /// ```
    /// use rlox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::scan,
    ///     parser::core::parse_expression,
    ///     value::Value,
    /// };
    ///
    /// let (tokens, _) = scan("1 + 2 * 3");
    /// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
    ///
    /// let value = Interpreter::new().evaluate(&expr).unwrap();
    /// assert_eq!(value, Value::Number(7.0));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        expr.accept(self)
    }
}

/// Builds the error for visiting an expression form the executable subset
/// does not cover. Visiting one is a first-class unsupported-operation
/// signal, never a panic.
const fn unsupported(variant: &'static str, token: &Token) -> RuntimeError {
    RuntimeError::UnsupportedExpression { variant,
                                          line: token.line }
}

impl StmtVisitor<EvalResult<()>> for Interpreter {
    fn visit_expression(&mut self, expr: &Expr) -> EvalResult<()> {
        self.evaluate(expr)?;
        Ok(())
    }

    fn visit_print(&mut self, expr: &Expr) -> EvalResult<()> {
        let value = self.evaluate(expr)?;
        println!("{value}");
        Ok(())
    }
}

impl ExprVisitor<EvalResult<Value>> for Interpreter {
    fn visit_literal(&mut self, value: &LiteralValue) -> EvalResult<Value> {
        Ok(Value::from(value))
    }

    fn visit_grouping(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.evaluate(expr)
    }

    fn visit_unary(&mut self, op: &Token, right: &Expr) -> EvalResult<Value> {
        let value = self.evaluate(right)?;
        eval_unary(op, &value)
    }

    fn visit_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        eval_binary(op, &left, &right)
    }

    fn visit_logical(&mut self, _left: &Expr, op: &Token, _right: &Expr) -> EvalResult<Value> {
        Err(unsupported("Logical", op))
    }

    fn visit_assign(&mut self, name: &Token, _value: &Expr) -> EvalResult<Value> {
        Err(unsupported("Assign", name))
    }

    fn visit_call(&mut self,
                  _callee: &Expr,
                  paren: &Token,
                  _arguments: &[Expr])
                  -> EvalResult<Value> {
        Err(unsupported("Call", paren))
    }

    fn visit_get(&mut self, _object: &Expr, name: &Token) -> EvalResult<Value> {
        Err(unsupported("Get", name))
    }

    fn visit_set(&mut self, _object: &Expr, name: &Token, _value: &Expr) -> EvalResult<Value> {
        Err(unsupported("Set", name))
    }

    fn visit_super(&mut self, keyword: &Token, _method: &Token) -> EvalResult<Value> {
        Err(unsupported("Super", keyword))
    }

    fn visit_this(&mut self, keyword: &Token) -> EvalResult<Value> {
        Err(unsupported("This", keyword))
    }

    fn visit_variable(&mut self, name: &Token) -> EvalResult<Value> {
        Err(unsupported("Variable", name))
    }
}
